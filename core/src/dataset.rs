//! The dataset context threaded through every generation stage.
//!
//! RULE: Stages never hold tables. Each stage borrows the caller's dataset,
//! reads the tables it depends on, and attaches its own table(s) only once
//! generation succeeded. A failed stage leaves the dataset untouched.

use crate::{
    customer_generator::CustomerRecord,
    error::{GenError, GenResult},
    marketing_generator::MarketingSpendRecord,
    order_generator::{OrderItemRecord, OrderRecord},
    product_generator::ProductRecord,
    session_generator::WebSessionRecord,
    types::{round2, round4, CustomerSegment},
};
use serde::Serialize;
use std::collections::BTreeSet;

/// A row type of one output table. `COLUMNS` lists the serialized field
/// names in output order; CSV headers and SQL inserts follow it.
pub trait TableRecord: Serialize {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
}

/// All tables generated so far in a run. `None` means "not generated",
/// which is different from an empty table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub customers: Option<Vec<CustomerRecord>>,
    pub products: Option<Vec<ProductRecord>>,
    pub orders: Option<Vec<OrderRecord>>,
    pub order_items: Option<Vec<OrderItemRecord>>,
    pub web_sessions: Option<Vec<WebSessionRecord>>,
    pub marketing_spend: Option<Vec<MarketingSpendRecord>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_customers(&self, stage: &'static str) -> GenResult<&[CustomerRecord]> {
        self.customers
            .as_deref()
            .ok_or(GenError::PreconditionFailed { stage, missing: "customers" })
    }

    pub fn require_products(&self, stage: &'static str) -> GenResult<&[ProductRecord]> {
        self.products
            .as_deref()
            .ok_or(GenError::PreconditionFailed { stage, missing: "products" })
    }

    /// `(table name, row count)` for every generated table, in output order.
    pub fn row_counts(&self) -> Vec<(&'static str, usize)> {
        fn count<T: TableRecord>(rows: &Option<Vec<T>>) -> Option<(&'static str, usize)> {
            rows.as_ref().map(|r| (T::TABLE, r.len()))
        }
        [
            count(&self.customers),
            count(&self.products),
            count(&self.orders),
            count(&self.order_items),
            count(&self.web_sessions),
            count(&self.marketing_spend),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        let customers = self.customers.as_deref().unwrap_or_default();
        let products = self.products.as_deref().unwrap_or_default();
        let orders = self.orders.as_deref().unwrap_or_default();
        let items = self.order_items.as_deref().unwrap_or_default();
        let sessions = self.web_sessions.as_deref().unwrap_or_default();
        let spend = self.marketing_spend.as_deref().unwrap_or_default();

        let gmv = round2(orders.iter().map(|o| o.total_amount).sum());
        let ratio = |num: f64, den: usize| if den == 0 { 0.0 } else { num / den as f64 };

        DatasetSummary {
            customers: customers.len(),
            active_customers: customers.iter().filter(|c| c.is_active).count(),
            vip_customers: customers
                .iter()
                .filter(|c| c.customer_segment == CustomerSegment::Vip)
                .count(),
            products: products.len(),
            active_products: products.iter().filter(|p| p.is_active).count(),
            categories: products
                .iter()
                .map(|p| p.category_l1.as_str())
                .collect::<BTreeSet<_>>()
                .len(),
            orders: orders.len(),
            order_items: items.len(),
            gross_merchandise_value: gmv,
            average_order_value: round2(ratio(gmv, orders.len())),
            average_items_per_order: round2(ratio(items.len() as f64, orders.len())),
            web_sessions: sessions.len(),
            session_conversion_rate: round4(ratio(
                sessions.iter().filter(|s| s.converted).count() as f64,
                sessions.len(),
            )),
            marketing_rows: spend.len(),
            total_marketing_spend: round2(spend.iter().map(|m| m.spend_amount).sum()),
        }
    }
}

/// Headline figures of a generated dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub customers: usize,
    pub active_customers: usize,
    pub vip_customers: usize,
    pub products: usize,
    pub active_products: usize,
    pub categories: usize,
    pub orders: usize,
    pub order_items: usize,
    pub gross_merchandise_value: f64,
    pub average_order_value: f64,
    pub average_items_per_order: f64,
    pub web_sessions: usize,
    pub session_conversion_rate: f64,
    pub marketing_rows: usize,
    pub total_marketing_spend: f64,
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Customers:        {} ({} active, {} VIP)",
            self.customers, self.active_customers, self.vip_customers
        )?;
        writeln!(
            f,
            "Products:         {} ({} active, {} categories)",
            self.products, self.active_products, self.categories
        )?;
        writeln!(
            f,
            "Orders:           {} ({} items, {:.2} items/order)",
            self.orders, self.order_items, self.average_items_per_order
        )?;
        writeln!(
            f,
            "GMV:              {:.2} (AOV {:.2})",
            self.gross_merchandise_value, self.average_order_value
        )?;
        writeln!(
            f,
            "Web sessions:     {} ({:.2}% converted)",
            self.web_sessions,
            self.session_conversion_rate * 100.0
        )?;
        write!(
            f,
            "Marketing spend:  {:.2} over {} rows",
            self.total_marketing_spend, self.marketing_rows
        )
    }
}
