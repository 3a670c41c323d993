use std::time::Duration;

use papa_pizza::clients::actor_client::ActorClient;
use papa_pizza::lifecycle::PizzaShop;
use papa_pizza::model::{
    DeliveryType, EmployeeCreate, EmployeeRole, OrderLine, OrderState, ProductCategory,
    ProductCreate, ProductId, ProductKind, ShopOrderCreate,
};
use papa_pizza::time::ManualClock;

/// Full end-to-end integration test with all real actors: staff the shop,
/// take a delivery order, bake every pizza and watch the driver hand-off.
#[tokio::test]
async fn test_full_pizza_shop_integration() {
    let clock = ManualClock::new(10_000);
    let shop = PizzaShop::with_clock(clock.clone());

    // Staff: two chefs and a driver with an eight-slot vehicle
    let chef_1 = shop
        .employee_client
        .create_employee(EmployeeCreate {
            name: "Mario".to_string(),
            role: EmployeeRole::Chef,
            vehicle: None,
        })
        .await
        .expect("Failed to create chef");
    let chef_2 = shop
        .employee_client
        .create_employee(EmployeeCreate {
            name: "Luigi".to_string(),
            role: EmployeeRole::Chef,
            vehicle: None,
        })
        .await
        .expect("Failed to create chef");

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
        .expect("Failed to create vehicle");
    let driver_id = shop
        .employee_client
        .create_employee(EmployeeCreate {
            name: "Toad".to_string(),
            role: EmployeeRole::Driver,
            vehicle: Some(vehicle_id.clone()),
        })
        .await
        .expect("Failed to create driver");

    // Equipment: one staffed oven per chef
    let oven_1 = shop
        .catalog_client
        .create_product(ProductCreate {
            name: "Stone Oven".to_string(),
            price: 2500.0,
            kind: ProductKind::Oven {
                chef: Some(chef_1.clone()),
                queue: Vec::new(),
                baking_since: 0,
            },
        })
        .await
        .expect("Failed to create oven");
    let oven_2 = shop
        .catalog_client
        .create_product(ProductCreate {
            name: "Gas Oven".to_string(),
            price: 1900.0,
            kind: ProductKind::Oven {
                chef: Some(chef_2.clone()),
                queue: Vec::new(),
                baking_since: 0,
            },
        })
        .await
        .expect("Failed to create oven");

    // Menu
    let margherita = shop
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
        .expect("Failed to create template");
    let salami = shop
        .catalog_client
        .create_product(ProductCreate {
            name: "Salami".to_string(),
            price: 8.5,
            kind: ProductKind::Pizza {
                toppings: Vec::new(),
                custom: false,
            },
        })
        .await
        .expect("Failed to create template");

    // A three-pizza delivery order
    let order_id = shop
        .order_client
        .create_order(ShopOrderCreate {
            customer: "Princess Peach".to_string(),
            delivery_type: DeliveryType::Delivery,
            lines: vec![
                OrderLine {
                    product: margherita,
                    quantity: 2,
                },
                OrderLine {
                    product: salami,
                    quantity: 1,
                },
            ],
        })
        .await
        .expect("Failed to create order");

    shop.kitchen_client
        .assign_ovens(order_id.clone())
        .await
        .expect("Failed to assign ovens");

    // Three copies over two ovens: the deeper queue holds two pizzas.
    let estimate = shop
        .kitchen_client
        .order_time_estimate(order_id.clone())
        .await
        .expect("Failed to estimate");
    assert_eq!(estimate, Duration::from_secs(600));

    let order = shop
        .order_client
        .get(order_id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.state, OrderState::Open);
    assert_eq!(order.chefs, vec![chef_1, chef_2]);

    // The order waits a minute before the chefs pick it up.
    clock.advance(Duration::from_secs(60));

    // Bake every queued pizza, two minutes each, head first
    for oven_id in [oven_1, oven_2] {
        loop {
            let oven = shop
                .catalog_client
                .find_by_id(oven_id.clone())
                .await
                .expect("Failed to get oven")
                .expect("Oven not found");
            let Some(head) = oven.oven_queue().first().cloned() else {
                break;
            };
            assert!(shop.kitchen_client.start_baking(head.clone()).await.unwrap());
            clock.advance(Duration::from_secs(120));
            assert!(shop.kitchen_client.finish_baking(head).await.unwrap());
        }
    }

    // The finished order went to delivery: driver assigned, slots claimed
    let order = shop
        .order_client
        .get(order_id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.state, OrderState::Ready);
    assert_eq!(order.driver, Some(driver_id));
    assert_eq!(order.open_duration, Some(Duration::from_secs(60)));
    assert_eq!(order.pending_duration, Some(Duration::from_secs(120)));

    let vehicle = shop
        .catalog_client
        .find_by_id(vehicle_id)
        .await
        .expect("Failed to get vehicle")
        .expect("Vehicle not found");
    assert_eq!(
        vehicle.kind,
        ProductKind::Vehicle {
            slots: 8,
            used_slots: 3
        }
    );

    // No kitchen copies survive a fully baked order
    let leftovers: Vec<ProductId> = shop
        .catalog_client
        .find_by_category(ProductCategory::KitchenPizza)
        .await
        .expect("Failed to list kitchen pizzas")
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert!(leftovers.is_empty());

    // Graceful shutdown
    shop.shutdown().await.expect("Failed to shutdown shop");
}

/// Pickup orders bake the same way but never touch the delivery side.
#[tokio::test]
async fn test_pickup_order_skips_delivery() {
    let clock = ManualClock::new(10_000);
    let shop = PizzaShop::with_clock(clock.clone());

    let chef = shop
        .employee_client
        .create_employee(EmployeeCreate {
            name: "Mario".to_string(),
            role: EmployeeRole::Chef,
            vehicle: None,
        })
        .await
        .unwrap();
    shop.catalog_client
        .create_product(ProductCreate {
            name: "Stone Oven".to_string(),
            price: 2500.0,
            kind: ProductKind::Oven {
                chef: Some(chef),
                queue: Vec::new(),
                baking_since: 0,
            },
        })
        .await
        .unwrap();
    let template = shop
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
        .unwrap();

    let order_id = shop
        .order_client
        .create_order(ShopOrderCreate {
            customer: "Yoshi".to_string(),
            delivery_type: DeliveryType::Pickup,
            lines: vec![OrderLine {
                product: template,
                quantity: 1,
            }],
        })
        .await
        .unwrap();

    shop.kitchen_client.assign_ovens(order_id.clone()).await.unwrap();
    let pizza = shop
        .catalog_client
        .find_by_category(ProductCategory::KitchenPizza)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .next()
        .expect("No kitchen copy created");

    assert!(shop.kitchen_client.start_baking(pizza.clone()).await.unwrap());
    clock.advance(Duration::from_secs(90));
    assert!(shop.kitchen_client.finish_baking(pizza).await.unwrap());

    let order = shop.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.state, OrderState::Ready);
    assert_eq!(order.driver, None, "Pickup orders get no driver");

    shop.shutdown().await.unwrap();
}
