//! Production driver assignment over the employee and catalog stores.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::clients::{CatalogClient, EmployeeClient, OrderClient};
use crate::delivery::{DeliveryError, DriverAssignment};
use crate::model::{DeliveryType, EmployeeId, EmployeeRole, ProductKind, ShopOrder};

/// Assigns ready orders to drivers with free vehicle capacity.
///
/// First fit over drivers sorted by id: a driver qualifies when their vehicle
/// has at least as many free slots as the order has line units. Orders that
/// fit no vehicle stay `Ready` without a driver and are retried by outer
/// glue, not by this service.
#[derive(Clone)]
pub struct DeliveryService {
    employees: EmployeeClient,
    catalog: CatalogClient,
    orders: OrderClient,
}

impl DeliveryService {
    pub fn new(employees: EmployeeClient, catalog: CatalogClient, orders: OrderClient) -> Self {
        Self {
            employees,
            catalog,
            orders,
        }
    }
}

#[async_trait]
impl DriverAssignment for DeliveryService {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn assign_driver(&self, order: &ShopOrder) -> Result<Option<EmployeeId>, DeliveryError> {
        if order.delivery_type != DeliveryType::Delivery {
            return Err(DeliveryError::NotADeliveryOrder(order.id.clone()));
        }

        let units = order.unit_count();
        for driver in self.employees.find_by_role(EmployeeRole::Driver).await? {
            let Some(vehicle_id) = driver.vehicle.clone() else {
                continue;
            };
            let Some(mut vehicle) = self.catalog.find_by_id(vehicle_id).await? else {
                warn!(driver = %driver.id, "Driver's vehicle is missing from the catalog");
                continue;
            };
            if let ProductKind::Vehicle { slots, used_slots } = &mut vehicle.kind {
                if slots.saturating_sub(*used_slots) >= units {
                    *used_slots += units;
                    self.catalog.save(vehicle).await?;
                    self.orders.assign_driver(order.id.clone(), driver.id.clone()).await?;
                    info!(driver = %driver.id, units, "Driver assigned");
                    return Ok(Some(driver.id));
                }
            }
        }

        warn!(units, "No vehicle has capacity for the order");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Employee, OrderLine, OrderState, Product, ShopOrder};
    use crate::order_actor::OrderActionResult;

    fn ready_order(units: u32) -> ShopOrder {
        ShopOrder {
            id: "order_1".to_string(),
            customer: "Peach".to_string(),
            state: OrderState::Ready,
            delivery_type: DeliveryType::Delivery,
            lines: vec![OrderLine {
                product: "product_1".to_string(),
                quantity: units,
            }],
            chefs: vec![],
            driver: None,
            created_at: 0,
            completed_at: None,
            open_duration: None,
            pending_duration: None,
            ready_duration: None,
            total_duration: None,
        }
    }

    #[tokio::test]
    async fn assigns_first_driver_with_capacity() {
        let mut employee_mock = MockClient::<Employee>::new();
        let mut catalog_mock = MockClient::<Product>::new();
        let mut order_mock = MockClient::<ShopOrder>::new();

        let mut driver = Employee::new("employee_1", "Mario", EmployeeRole::Driver);
        driver.vehicle = Some("product_9".to_string());
        employee_mock.expect_list().return_ok(vec![driver]);

        let vehicle = Product::new(
            "product_9",
            "Scooter",
            800.0,
            ProductKind::Vehicle { slots: 4, used_slots: 1 },
        );
        catalog_mock.expect_get("product_9".to_string()).return_ok(Some(vehicle.clone()));
        // Saved back with three units claimed
        let mut saved = vehicle;
        saved.kind = ProductKind::Vehicle { slots: 4, used_slots: 4 };
        catalog_mock.expect_update("product_9".to_string()).return_ok(saved);
        order_mock
            .expect_action("order_1".to_string())
            .return_ok(OrderActionResult::AssignDriver(()));

        let service = DeliveryService::new(
            EmployeeClient::new(employee_mock.client()),
            CatalogClient::new(catalog_mock.client()),
            OrderClient::new(order_mock.client()),
        );

        let assigned = service.assign_driver(&ready_order(3)).await.unwrap();
        assert_eq!(assigned, Some("employee_1".to_string()));

        employee_mock.verify();
        catalog_mock.verify();
        order_mock.verify();
    }

    #[tokio::test]
    async fn declines_when_no_vehicle_fits() {
        let mut employee_mock = MockClient::<Employee>::new();
        let mut catalog_mock = MockClient::<Product>::new();
        let order_mock = MockClient::<ShopOrder>::new();

        let mut driver = Employee::new("employee_1", "Mario", EmployeeRole::Driver);
        driver.vehicle = Some("product_9".to_string());
        employee_mock.expect_list().return_ok(vec![driver]);

        let vehicle = Product::new(
            "product_9",
            "Scooter",
            800.0,
            ProductKind::Vehicle { slots: 2, used_slots: 2 },
        );
        catalog_mock.expect_get("product_9".to_string()).return_ok(Some(vehicle));

        let service = DeliveryService::new(
            EmployeeClient::new(employee_mock.client()),
            CatalogClient::new(catalog_mock.client()),
            OrderClient::new(order_mock.client()),
        );

        let assigned = service.assign_driver(&ready_order(5)).await.unwrap();
        assert_eq!(assigned, None);
    }

    #[tokio::test]
    async fn rejects_pickup_orders() {
        let employee_mock = MockClient::<Employee>::new();
        let catalog_mock = MockClient::<Product>::new();
        let order_mock = MockClient::<ShopOrder>::new();

        let service = DeliveryService::new(
            EmployeeClient::new(employee_mock.client()),
            CatalogClient::new(catalog_mock.client()),
            OrderClient::new(order_mock.client()),
        );

        let mut order = ready_order(1);
        order.delivery_type = DeliveryType::Pickup;
        let result = service.assign_driver(&order).await;
        assert_eq!(result, Err(DeliveryError::NotADeliveryOrder("order_1".to_string())));
    }
}
