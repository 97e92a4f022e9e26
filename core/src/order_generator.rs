use crate::{
    config::{Catalog, GeneratorConfig, OrderPolicy},
    customer_generator::CustomerRecord,
    dataset::{Dataset, TableRecord},
    error::{GenError, GenResult},
    product_generator::ProductRecord,
    rng::{StageRng, StageSlot},
    stage::GenerationStage,
    types::{random_time_on, round2, DateWindow, DeviceType, EntityId, OrderStatus},
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub order_id: EntityId,
    pub customer_id: EntityId,
    pub order_date: NaiveDate,
    pub order_status: OrderStatus,
    pub payment_method: String,
    pub total_items: i64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub shipping_cost: f64,
    pub total_amount: f64,
    pub currency: String,
    pub acquisition_channel: String,
    pub device_type: DeviceType,
    pub is_first_order: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TableRecord for OrderRecord {
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "customer_id",
        "order_date",
        "order_status",
        "payment_method",
        "total_items",
        "subtotal",
        "discount_amount",
        "tax_amount",
        "shipping_cost",
        "total_amount",
        "currency",
        "acquisition_channel",
        "device_type",
        "is_first_order",
        "created_at",
        "updated_at",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemRecord {
    pub order_item_id: String,
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: i64,
    pub unit_price: f64,
    pub line_total: f64,
    pub cost_per_unit: f64,
    pub line_cost: f64,
}

impl TableRecord for OrderItemRecord {
    const TABLE: &'static str = "order_items";
    const COLUMNS: &'static [&'static str] = &[
        "order_item_id",
        "order_id",
        "product_id",
        "quantity",
        "unit_price",
        "line_total",
        "cost_per_unit",
        "line_cost",
    ];
}

/// Fulfilment status of an order placed on `order_date`, as seen on `as_of`.
pub fn order_status(
    order_date: NaiveDate,
    as_of: NaiveDate,
    policy: &OrderPolicy,
    rng: &mut StageRng,
) -> OrderStatus {
    match (as_of - order_date).num_days() {
        i64::MIN..=0 => OrderStatus::Pending,
        1..=2 => *rng.pick(&[OrderStatus::Pending, OrderStatus::Processing]),
        3..=6 => *rng.pick(&[OrderStatus::Processing, OrderStatus::Shipped]),
        _ => {
            let weights: Vec<f64> = policy.terminal_status_weights.iter().map(|(_, w)| *w).collect();
            policy.terminal_status_weights[rng.weighted_index(&weights)].0
        }
    }
}

/// Monetary aggregates of one order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub shipping_cost: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
}

impl OrderTotals {
    /// Discount, then shipping, then tax on the discounted subtotal.
    pub fn compute(
        subtotal: f64,
        discount_probability: f64,
        tax_rate: f64,
        policy: &OrderPolicy,
        rng: &mut StageRng,
    ) -> Self {
        let subtotal = round2(subtotal);
        let discount_amount = if rng.chance(discount_probability) {
            let (lo, hi) = policy.discount_range;
            round2(subtotal * rng.uniform(lo, hi))
        } else {
            0.0
        };
        let shipping_cost = if subtotal > policy.free_shipping_threshold {
            0.0
        } else {
            let (lo, hi) = policy.shipping_range;
            round2(rng.uniform(lo, hi))
        };
        let tax_amount = round2((subtotal - discount_amount) * tax_rate);
        let total_amount = round2(subtotal - discount_amount + shipping_cost + tax_amount);
        Self {
            subtotal,
            discount_amount,
            shipping_cost,
            tax_amount,
            total_amount,
        }
    }
}

/// Generate `count` orders, each with 1..=5 line items, against the
/// active customers and products.
pub fn generate_orders(
    count: usize,
    customers: &[CustomerRecord],
    products: &[ProductRecord],
    window: &DateWindow,
    catalog: &Catalog,
    rng: &mut StageRng,
) -> GenResult<(Vec<OrderRecord>, Vec<OrderItemRecord>)> {
    if count == 0 {
        return Err(GenError::InvalidArgument("order count must be positive".into()));
    }
    let active_customers: Vec<&CustomerRecord> = customers.iter().filter(|c| c.is_active).collect();
    if active_customers.is_empty() {
        return Err(GenError::PreconditionFailed {
            stage: "orders",
            missing: "active customers",
        });
    }
    let active_products: Vec<&ProductRecord> = products.iter().filter(|p| p.is_active).collect();
    if active_products.is_empty() {
        return Err(GenError::PreconditionFailed {
            stage: "orders",
            missing: "active products",
        });
    }

    let policy = &catalog.order;
    let mut orders = Vec::with_capacity(count);
    let mut items = Vec::with_capacity(count * 2);

    for i in 0..count {
        let seq = i + 1;
        let order_id = format!("ORD_{seq:010}");
        let customer = *rng.pick(&active_customers);
        let profile = catalog.segments.get(customer.customer_segment);
        let order_date = window.random_date(rng);

        let basket_size =
            (rng.weighted_index(&profile.items_per_order_weights) + 1).min(active_products.len());

        let mut subtotal = 0.0;
        let mut total_items = 0;
        for (line, idx) in rng
            .sample_indices(active_products.len(), basket_size)
            .into_iter()
            .enumerate()
        {
            let product = active_products[idx];
            let quantity = rng.weighted_index(&policy.quantity_weights) as i64 + 1;
            let line_total = round2(product.retail_price * quantity as f64);
            subtotal += line_total;
            total_items += quantity;
            items.push(OrderItemRecord {
                order_item_id: format!("ITEM_{seq:010}_{:02}", line + 1),
                order_id: order_id.clone(),
                product_id: product.product_id.clone(),
                quantity,
                unit_price: product.retail_price,
                line_total,
                cost_per_unit: product.cost,
                line_cost: round2(product.cost * quantity as f64),
            });
        }

        let totals = OrderTotals::compute(
            subtotal,
            profile.discount_probability,
            catalog.tax_rate(&customer.country),
            policy,
            rng,
        );
        let status = order_status(order_date, window.end_date, policy, rng);
        let created_at = random_time_on(order_date, rng);
        let updated_at =
            created_at + Duration::hours(rng.int_inclusive(1, policy.max_update_delay_hours));

        orders.push(OrderRecord {
            order_id,
            customer_id: customer.customer_id.clone(),
            order_date,
            order_status: status,
            payment_method: rng.pick(&catalog.payment_methods).clone(),
            total_items,
            subtotal: totals.subtotal,
            discount_amount: totals.discount_amount,
            tax_amount: totals.tax_amount,
            shipping_cost: totals.shipping_cost,
            total_amount: totals.total_amount,
            currency: policy.currency.clone(),
            acquisition_channel: customer.acquisition_channel.clone(),
            device_type: *rng.pick(&DeviceType::ALL),
            is_first_order: rng.chance(policy.first_order_probability),
            created_at,
            updated_at,
        });
    }
    Ok((orders, items))
}

pub struct OrderStage<'a> {
    pub count: usize,
    pub config: &'a GeneratorConfig,
}

impl GenerationStage for OrderStage<'_> {
    fn name(&self) -> &'static str {
        "orders"
    }

    fn slot(&self) -> StageSlot {
        StageSlot::Order
    }

    fn run(&self, dataset: &mut Dataset, rng: &mut StageRng) -> GenResult<()> {
        let customers = dataset.require_customers(self.name())?;
        let products = dataset.require_products(self.name())?;
        let (orders, items) = generate_orders(
            self.count,
            customers,
            products,
            &self.config.window,
            &self.config.catalog,
            rng,
        )?;

        let aov = orders.iter().map(|o| o.total_amount).sum::<f64>() / orders.len() as f64;
        log::info!(
            "order: generated {} orders with {} line items (AOV {aov:.2})",
            orders.len(),
            items.len()
        );
        let mut by_status: BTreeMap<&str, usize> = BTreeMap::new();
        for o in &orders {
            *by_status.entry(o.order_status.as_str()).or_default() += 1;
        }
        for (status, n) in &by_status {
            log::debug!("order:   {status}: {n}");
        }

        dataset.orders = Some(orders);
        dataset.order_items = Some(items);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        customer_generator::generate_customers, product_generator::generate_products,
        rng::RngBank, types::CustomerSegment,
    };
    use std::collections::HashMap;

    fn window() -> DateWindow {
        DateWindow::parse("2023-01-01", "2023-12-31").unwrap()
    }

    fn fixtures(seed: u64) -> (Vec<CustomerRecord>, Vec<ProductRecord>) {
        let bank = RngBank::new(seed);
        let catalog = Catalog::standard();
        let customers = generate_customers(
            200,
            &window(),
            &catalog,
            &mut bank.for_stage(StageSlot::Customer),
        )
        .unwrap();
        let products =
            generate_products(100, &window(), &catalog, &mut bank.for_stage(StageSlot::Product))
                .unwrap();
        (customers, products)
    }

    #[test]
    fn totals_reconcile_with_lines() {
        let (customers, products) = fixtures(21);
        let mut rng = RngBank::new(21).for_stage(StageSlot::Order);
        let (orders, items) =
            generate_orders(500, &customers, &products, &window(), &Catalog::standard(), &mut rng)
                .unwrap();

        for order in &orders {
            let lines: Vec<_> = items.iter().filter(|i| i.order_id == order.order_id).collect();
            assert!((1..=5).contains(&lines.len()), "{}", order.order_id);
            let subtotal = round2(lines.iter().map(|l| l.line_total).sum());
            assert_eq!(subtotal, order.subtotal);
            assert_eq!(order.total_items, lines.iter().map(|l| l.quantity).sum::<i64>());
            assert_eq!(
                order.total_amount,
                round2(order.subtotal - order.discount_amount + order.shipping_cost + order.tax_amount)
            );
            if order.subtotal > 50.0 {
                assert_eq!(order.shipping_cost, 0.0);
            }
            assert!(order.discount_amount <= round2(order.subtotal * 0.25));
            assert!(order.updated_at > order.created_at);
            assert!(order.updated_at <= order.created_at + Duration::hours(72));
            assert_eq!(order.created_at.date(), order.order_date);
        }
    }

    #[test]
    fn segment_drives_basket_size_and_discounts() {
        let catalog = Catalog::standard();
        let bank = RngBank::new(24);
        let customers =
            generate_customers(1_000, &window(), &catalog, &mut bank.for_stage(StageSlot::Customer))
                .unwrap();
        let products =
            generate_products(200, &window(), &catalog, &mut bank.for_stage(StageSlot::Product))
                .unwrap();
        let mut rng = bank.for_stage(StageSlot::Order);
        let (orders, items) =
            generate_orders(6_000, &customers, &products, &window(), &catalog, &mut rng).unwrap();

        let segment_of: HashMap<&str, CustomerSegment> = customers
            .iter()
            .map(|c| (c.customer_id.as_str(), c.customer_segment))
            .collect();
        let mut lines_per_order: HashMap<&str, usize> = HashMap::new();
        for item in &items {
            *lines_per_order.entry(item.order_id.as_str()).or_default() += 1;
        }

        // segment -> (orders, discounted orders, largest basket)
        let mut stats: HashMap<CustomerSegment, (usize, usize, usize)> = HashMap::new();
        for order in &orders {
            let segment = segment_of[order.customer_id.as_str()];
            let entry = stats.entry(segment).or_default();
            entry.0 += 1;
            if order.discount_amount > 0.0 {
                entry.1 += 1;
            }
            entry.2 = entry.2.max(lines_per_order[order.order_id.as_str()]);
        }

        let mut discount_share = HashMap::new();
        for segment in [CustomerSegment::Vip, CustomerSegment::Regular, CustomerSegment::New] {
            let profile = catalog.segments.get(segment);
            let (n, discounted, largest) = stats[&segment];
            assert_eq!(largest, profile.items_per_order_weights.len(), "{segment:?}");
            let share = discounted as f64 / n as f64;
            assert!(
                (share - profile.discount_probability).abs() < 0.07,
                "{segment:?}: {share:.3} over {n} orders"
            );
            discount_share.insert(segment, share);
        }
        assert!(discount_share[&CustomerSegment::Vip] > discount_share[&CustomerSegment::New]);
        assert!(discount_share[&CustomerSegment::New] > discount_share[&CustomerSegment::Regular]);
    }

    #[test]
    fn items_in_an_order_are_distinct_products() {
        let (customers, products) = fixtures(22);
        let mut rng = RngBank::new(22).for_stage(StageSlot::Order);
        let (orders, items) =
            generate_orders(300, &customers, &products, &window(), &Catalog::standard(), &mut rng)
                .unwrap();
        for order in &orders {
            let mut ids: Vec<_> = items
                .iter()
                .filter(|i| i.order_id == order.order_id)
                .map(|i| i.product_id.as_str())
                .collect();
            let n = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), n, "{}", order.order_id);
        }
    }

    #[test]
    fn basket_is_capped_by_active_products() {
        let (customers, mut products) = fixtures(23);
        for p in products.iter_mut().skip(1) {
            p.is_active = false;
        }
        products[0].is_active = true;
        let mut rng = RngBank::new(23).for_stage(StageSlot::Order);
        let (orders, items) =
            generate_orders(50, &customers, &products, &window(), &Catalog::standard(), &mut rng)
                .unwrap();
        assert_eq!(items.len(), orders.len());
        assert!(items.iter().all(|i| i.product_id == products[0].product_id));
    }

    #[test]
    fn no_active_customers_is_a_precondition_failure() {
        let (mut customers, products) = fixtures(24);
        customers.iter_mut().for_each(|c| c.is_active = false);
        let mut rng = RngBank::new(24).for_stage(StageSlot::Order);
        let err =
            generate_orders(5, &customers, &products, &window(), &Catalog::standard(), &mut rng)
                .unwrap_err();
        assert!(matches!(err, GenError::PreconditionFailed { missing: "active customers", .. }));
    }

    #[test]
    fn status_follows_order_age() {
        let policy = Catalog::standard().order;
        let mut rng = RngBank::new(25).for_stage(StageSlot::Order);
        let today = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        for _ in 0..200 {
            assert_eq!(order_status(today, today, &policy, &mut rng), OrderStatus::Pending);
            let recent = order_status(today - Duration::days(2), today, &policy, &mut rng);
            assert!(matches!(recent, OrderStatus::Pending | OrderStatus::Processing));
            let week = order_status(today - Duration::days(6), today, &policy, &mut rng);
            assert!(matches!(week, OrderStatus::Processing | OrderStatus::Shipped));
            let old = order_status(today - Duration::days(30), today, &policy, &mut rng);
            assert!(old.is_terminal());
        }
    }

    #[test]
    fn stage_requires_customers_first() {
        let config = GeneratorConfig::new(1, window());
        let stage = OrderStage { count: 10, config: &config };
        let mut rng = RngBank::new(1).for_stage(StageSlot::Order);
        let mut dataset = Dataset::new();
        let err = stage.run(&mut dataset, &mut rng).unwrap_err();
        assert!(matches!(err, GenError::PreconditionFailed { missing: "customers", .. }));
        assert!(dataset.orders.is_none() && dataset.order_items.is_none());
    }
}
