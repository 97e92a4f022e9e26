//! End-to-end generation scenarios through the public generator API.

use ecomm_core::{
    config::GeneratorConfig,
    dataset::Dataset,
    error::GenError,
    generator::DatasetGenerator,
    types::DateWindow,
};
use std::collections::HashSet;

fn generator(seed: u64, base: &str, end: &str) -> DatasetGenerator {
    let window = DateWindow::parse(base, end).unwrap();
    DatasetGenerator::new(GeneratorConfig::new(seed, window)).unwrap()
}

#[test]
fn dimensions_only_run() {
    let gen = generator(42, "2023-01-01", "2023-12-31");
    let mut dataset = Dataset::new();
    gen.generate_customers(&mut dataset, 100).unwrap();
    gen.generate_products(&mut dataset, 50).unwrap();

    let customers = dataset.customers.as_ref().unwrap();
    let ids: Vec<_> = customers.iter().map(|c| c.customer_id.clone()).collect();
    let expected: Vec<_> = (1..=100).map(|i| format!("CUST_{i:08}")).collect();
    assert_eq!(ids, expected);
    assert_eq!(ids.first().unwrap(), "CUST_00000001");
    assert_eq!(ids.last().unwrap(), "CUST_00000100");

    let products = dataset.products.as_ref().unwrap();
    let unique: HashSet<_> = products.iter().map(|p| p.product_id.as_str()).collect();
    assert_eq!(unique.len(), 50);

    assert!(dataset.orders.is_none());
    assert!(dataset.order_items.is_none());
    assert!(dataset.web_sessions.is_none());
    assert!(dataset.marketing_spend.is_none());
}

#[test]
fn ten_orders_over_existing_dimensions() {
    let gen = generator(42, "2023-01-01", "2023-12-31");
    let mut dataset = Dataset::new();
    gen.generate_customers(&mut dataset, 100).unwrap();
    gen.generate_products(&mut dataset, 50).unwrap();
    gen.generate_orders(&mut dataset, 10).unwrap();

    let customers = dataset.customers.as_ref().unwrap();
    let orders = dataset.orders.as_ref().unwrap();
    let items = dataset.order_items.as_ref().unwrap();
    assert_eq!(orders.len(), 10);

    for order in orders {
        let customer = customers
            .iter()
            .find(|c| c.customer_id == order.customer_id)
            .expect("order customer exists");
        assert!(customer.is_active, "{} placed by inactive customer", order.order_id);
        assert_eq!(order.acquisition_channel, customer.acquisition_channel);

        let lines = items.iter().filter(|i| i.order_id == order.order_id).count();
        assert!((1..=5).contains(&lines), "{} has {lines} items", order.order_id);
    }
    assert_eq!(orders[0].order_id, "ORD_0000000001");
    assert_eq!(items[0].order_item_id, "ITEM_0000000001_01");
}

#[test]
fn failed_orders_leave_dimensions_in_place() {
    let gen = generator(42, "2023-01-01", "2023-12-31");
    let mut dataset = Dataset::new();
    gen.generate_customers(&mut dataset, 100).unwrap();
    gen.generate_products(&mut dataset, 50).unwrap();

    assert!(matches!(
        gen.generate_orders(&mut dataset, 0),
        Err(GenError::InvalidArgument(_))
    ));
    assert_eq!(dataset.customers.as_ref().map(Vec::len), Some(100));
    assert_eq!(dataset.products.as_ref().map(Vec::len), Some(50));
    assert!(dataset.orders.is_none());
    assert!(dataset.order_items.is_none());
}

#[test]
fn marketing_over_three_days() {
    let gen = generator(7, "2023-05-01", "2023-05-03");
    let mut dataset = Dataset::new();
    gen.generate_marketing_spend(&mut dataset).unwrap();
    let channels = gen.config().catalog.channels.len();
    let rows = dataset.marketing_spend.unwrap();

    assert_eq!(rows.len(), 3 * channels);
    let pairs: HashSet<_> = rows.iter().map(|r| (r.spend_date, r.channel.clone())).collect();
    assert_eq!(pairs.len(), rows.len(), "one row per (day, channel)");
}

#[test]
fn zero_counts_are_rejected() {
    let gen = generator(1, "2023-01-01", "2023-01-31");
    let mut dataset = Dataset::new();
    assert!(matches!(
        gen.generate_customers(&mut dataset, 0),
        Err(GenError::InvalidArgument(_))
    ));
    assert!(matches!(
        gen.generate_web_sessions(&mut dataset, 0),
        Err(GenError::InvalidArgument(_))
    ));
    assert!(dataset.row_counts().is_empty());
}

#[test]
fn sessions_without_customers_are_anonymous() {
    let gen = generator(5, "2023-01-01", "2023-01-31");
    let mut dataset = Dataset::new();
    gen.generate_web_sessions(&mut dataset, 200).unwrap();
    let sessions = dataset.web_sessions.unwrap();
    assert_eq!(sessions.len(), 200);
    assert!(sessions.iter().all(|s| s.customer_id.is_none()));
}

#[test]
fn single_day_window_runs_every_stage() {
    let gen = generator(11, "2023-07-15", "2023-07-15");
    let dataset = gen
        .generate_complete(ecomm_core::config::TableSizes {
            customers: 40,
            products: 30,
            orders: 25,
            sessions: 25,
        })
        .unwrap();
    let orders = dataset.orders.as_ref().unwrap();
    // Every order is placed on the as-of day itself.
    assert!(orders
        .iter()
        .all(|o| o.order_status == ecomm_core::types::OrderStatus::Pending));
    assert_eq!(
        dataset.marketing_spend.as_ref().unwrap().len(),
        gen.config().catalog.channels.len()
    );
}
