//! Demo run of the pizza shop: staff up, take a delivery order, bake every
//! pizza and hand the order to a driver. Run with `RUST_LOG=info cargo run`
//! to watch the workflow logs.

use papa_pizza::clients::ActorClient;
use papa_pizza::lifecycle::{setup_tracing, PizzaShop};
use papa_pizza::model::{
    DeliveryType, EmployeeCreate, EmployeeRole, OrderLine, ProductCreate, ProductKind,
    ShopOrderCreate,
};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting pizza shop");
    let shop = PizzaShop::new();

    // Staff and equipment
    let span = tracing::info_span!("shop_setup");
    let (oven_id, template_id) = async {
        let chef_id = shop
            .employee_client
            .create_employee(EmployeeCreate {
                name: "Mario".to_string(),
                role: EmployeeRole::Chef,
                vehicle: None,
            })
            .await
            .map_err(|e| e.to_string())?;

        let vehicle_id = shop
            .catalog_client
            .create_product(ProductCreate {
                name: "Delivery Scooter".to_string(),
                price: 1800.0,
                kind: ProductKind::Vehicle {
                    slots: 8,
                    used_slots: 0,
                },
            })
            .await
            .map_err(|e| e.to_string())?;
        shop.employee_client
            .create_employee(EmployeeCreate {
                name: "Toad".to_string(),
                role: EmployeeRole::Driver,
                vehicle: Some(vehicle_id),
            })
            .await
            .map_err(|e| e.to_string())?;

        let oven_id = shop
            .catalog_client
            .create_product(ProductCreate {
                name: "Stone Oven".to_string(),
                price: 2500.0,
                kind: ProductKind::Oven {
                    chef: Some(chef_id),
                    queue: Vec::new(),
                    baking_since: 0,
                },
            })
            .await
            .map_err(|e| e.to_string())?;

        let template_id = shop
            .catalog_client
            .create_product(ProductCreate {
                name: "Margherita".to_string(),
                price: 7.5,
                kind: ProductKind::Pizza {
                    toppings: Vec::new(),
                    custom: false,
                },
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((oven_id, template_id))
    }
    .instrument(span)
    .await?;

    // Take an order and run it through the kitchen
    let span = tracing::info_span!("order_processing");
    async {
        let order_id = shop
            .order_client
            .create_order(ShopOrderCreate {
                customer: "Princess Peach".to_string(),
                delivery_type: DeliveryType::Delivery,
                lines: vec![OrderLine {
                    product: template_id,
                    quantity: 2,
                }],
            })
            .await
            .map_err(|e| e.to_string())?;

        shop.kitchen_client
            .assign_ovens(order_id.clone())
            .await
            .map_err(|e| e.to_string())?;

        let estimate = shop
            .kitchen_client
            .order_time_estimate(order_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order_id, secs = estimate.as_secs(), "Order in the kitchen");

        // Bake every queued pizza, head first
        loop {
            let oven = shop
                .catalog_client
                .find_by_id(oven_id.clone())
                .await
                .map_err(|e| e.to_string())?
                .ok_or_else(|| "oven disappeared".to_string())?;
            let Some(head) = oven.oven_queue().first().cloned() else {
                break;
            };
            shop.kitchen_client
                .start_baking(head.clone())
                .await
                .map_err(|e| e.to_string())?;
            shop.kitchen_client
                .finish_baking(head)
                .await
                .map_err(|e| e.to_string())?;
        }

        let order = shop
            .order_client
            .get(order_id.clone())
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "order disappeared".to_string())?;
        info!(order_id = %order_id, state = ?order.state, driver = ?order.driver, "Order out of the kitchen");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    shop.shutdown().await?;

    info!("Shop closed");
    Ok(())
}
