//! Dataset-wide invariants over a full standard-catalog run.

use ecomm_core::{
    config::{GeneratorConfig, TableSizes},
    dataset::Dataset,
    generator::DatasetGenerator,
    types::{round2, CustomerSegment, DateWindow},
};
use std::collections::HashSet;

fn full_run(seed: u64) -> (Dataset, DateWindow) {
    let window = DateWindow::parse("2023-01-01", "2023-12-31").unwrap();
    let generator = DatasetGenerator::new(GeneratorConfig::new(seed, window)).unwrap();
    let dataset = generator
        .generate_complete(TableSizes {
            customers: 10_000,
            products: 500,
            orders: 2_000,
            sessions: 2_000,
        })
        .unwrap();
    (dataset, window)
}

#[test]
fn segment_shares_converge() {
    let (dataset, _) = full_run(101);
    let customers = dataset.customers.unwrap();
    let n = customers.len() as f64;
    let share = |s: CustomerSegment| {
        customers.iter().filter(|c| c.customer_segment == s).count() as f64 / n
    };
    assert!((share(CustomerSegment::Vip) - 0.10).abs() < 0.02);
    assert!((share(CustomerSegment::Regular) - 0.60).abs() < 0.02);
    assert!((share(CustomerSegment::New) - 0.30).abs() < 0.02);
}

#[test]
fn every_product_has_positive_margin() {
    let (dataset, _) = full_run(102);
    for p in dataset.products.unwrap() {
        assert!(p.cost < p.retail_price, "{}", p.product_id);
        assert!(p.margin_percent > 0.0 && p.margin_percent < 100.0, "{}", p.product_id);
    }
}

#[test]
fn order_totals_reconcile() {
    let (dataset, window) = full_run(103);
    for o in dataset.orders.unwrap() {
        assert_eq!(
            o.total_amount,
            round2(o.subtotal - o.discount_amount + o.shipping_cost + o.tax_amount),
            "{}",
            o.order_id
        );
        assert!(o.total_amount > 0.0);
        assert!(window.contains(o.order_date));
        assert_eq!(o.currency, "EUR");
    }
}

#[test]
fn references_resolve() {
    let (dataset, _) = full_run(104);
    let customer_ids: HashSet<_> =
        dataset.customers.as_ref().unwrap().iter().map(|c| c.customer_id.as_str()).collect();
    let product_ids: HashSet<_> =
        dataset.products.as_ref().unwrap().iter().map(|p| p.product_id.as_str()).collect();
    let order_ids: HashSet<_> =
        dataset.orders.as_ref().unwrap().iter().map(|o| o.order_id.as_str()).collect();

    for order in dataset.orders.as_ref().unwrap() {
        assert!(customer_ids.contains(order.customer_id.as_str()));
    }
    for item in dataset.order_items.as_ref().unwrap() {
        assert!(order_ids.contains(item.order_id.as_str()), "{}", item.order_item_id);
        assert!(product_ids.contains(item.product_id.as_str()), "{}", item.order_item_id);
    }
    for session in dataset.web_sessions.as_ref().unwrap() {
        if let Some(id) = &session.customer_id {
            assert!(customer_ids.contains(id.as_str()), "{}", session.session_id);
        }
    }
}

#[test]
fn every_order_has_items_and_ids_are_unique() {
    let (dataset, _) = full_run(105);
    let orders = dataset.orders.as_ref().unwrap();
    let items = dataset.order_items.as_ref().unwrap();

    let with_items: HashSet<_> = items.iter().map(|i| i.order_id.as_str()).collect();
    assert_eq!(with_items.len(), orders.len());

    let item_ids: HashSet<_> = items.iter().map(|i| i.order_item_id.as_str()).collect();
    assert_eq!(item_ids.len(), items.len());
}

#[test]
fn summary_matches_tables() {
    let (dataset, _) = full_run(106);
    let summary = dataset.summary();
    let orders = dataset.orders.as_ref().unwrap();
    assert_eq!(summary.orders, orders.len());
    assert_eq!(summary.customers, 10_000);
    assert_eq!(summary.categories, 9);
    assert_eq!(
        summary.gross_merchandise_value,
        round2(orders.iter().map(|o| o.total_amount).sum())
    );
    assert!(summary.average_items_per_order >= 1.0 && summary.average_items_per_order <= 5.0);
    assert_eq!(summary.marketing_rows, 365 * 11);
}
