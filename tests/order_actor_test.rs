use std::time::Duration;

use papa_pizza::clients::actor_client::ActorClient;
use papa_pizza::model::{DeliveryType, OrderLine, OrderState, ShopOrderCreate};
use papa_pizza::order_actor::OrderContext;
use papa_pizza::time::ManualClock;

fn order_create(customer: &str) -> ShopOrderCreate {
    ShopOrderCreate {
        customer: customer.to_string(),
        delivery_type: DeliveryType::Delivery,
        lines: vec![OrderLine {
            product: "product_1".to_string(),
            quantity: 2,
        }],
    }
}

/// Real order actor with a manual clock in its context: creation stamps
/// `created_at`, completion stamps `completed_at`.
#[tokio::test]
async fn test_order_actor_timestamps() {
    let clock = ManualClock::new(5_000);
    let (order_actor, order_client) = papa_pizza::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(OrderContext {
        clock: clock.clone(),
    }));

    let order_id = order_client.create_order(order_create("Alice")).await.unwrap();

    let order = order_client.get(order_id.clone()).await.unwrap().unwrap();
    assert_eq!(order.state, OrderState::Open);
    assert_eq!(order.created_at, 5_000);
    assert_eq!(order.completed_at, None);

    clock.advance(Duration::from_secs(900));
    order_client
        .set_state(order_id.clone(), OrderState::Completed)
        .await
        .unwrap();

    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.state, OrderState::Completed);
    assert_eq!(order.completed_at, Some(5_900));

    drop(order_client);
    actor_handle.await.unwrap();
}

/// The duration bookkeeping rules live inside the actor: chefs deduplicate,
/// the open duration is set once, the pending duration keeps the maximum.
#[tokio::test]
async fn test_order_actor_bookkeeping_actions() {
    let clock = ManualClock::new(5_000);
    let (order_actor, order_client) = papa_pizza::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(OrderContext { clock }));

    let order_id = order_client.create_order(order_create("Bob")).await.unwrap();

    // Chef dedup
    assert!(order_client.add_chef(order_id.clone(), "employee_1".to_string()).await.unwrap());
    assert!(!order_client.add_chef(order_id.clone(), "employee_1".to_string()).await.unwrap());
    assert!(order_client.add_chef(order_id.clone(), "employee_2".to_string()).await.unwrap());

    // Open duration is set once
    assert!(order_client
        .set_open_duration(order_id.clone(), Duration::from_secs(60))
        .await
        .unwrap());
    assert!(!order_client
        .set_open_duration(order_id.clone(), Duration::from_secs(999))
        .await
        .unwrap());

    // Pending duration keeps the max
    assert_eq!(
        order_client
            .record_bake_duration(order_id.clone(), Duration::from_secs(120))
            .await
            .unwrap(),
        Duration::from_secs(120)
    );
    assert_eq!(
        order_client
            .record_bake_duration(order_id.clone(), Duration::from_secs(80))
            .await
            .unwrap(),
        Duration::from_secs(120)
    );

    order_client
        .assign_driver(order_id.clone(), "employee_3".to_string())
        .await
        .unwrap();

    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.chefs, vec!["employee_1".to_string(), "employee_2".to_string()]);
    assert_eq!(order.open_duration, Some(Duration::from_secs(60)));
    assert_eq!(order.pending_duration, Some(Duration::from_secs(120)));
    assert_eq!(order.driver, Some("employee_3".to_string()));

    drop(order_client);
    actor_handle.await.unwrap();
}

/// Orders without lines are rejected at creation.
#[tokio::test]
async fn test_order_requires_lines() {
    let clock = ManualClock::new(5_000);
    let (order_actor, order_client) = papa_pizza::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(OrderContext { clock }));

    let result = order_client
        .create_order(ShopOrderCreate {
            customer: "Carol".to_string(),
            delivery_type: DeliveryType::Pickup,
            lines: vec![],
        })
        .await;
    assert!(result.is_err(), "Empty orders should be rejected");

    drop(order_client);
    actor_handle.await.unwrap();
}
