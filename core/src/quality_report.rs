//! Data-quality report over a generated dataset.
//!
//! The report is diagnostic only. A missing table leaves its sections
//! out; it never fails the run.

use crate::{
    dataset::{Dataset, TableRecord},
    error::GenResult,
    types::{round2, round4, DateWindow},
};
use serde::Serialize;
use serde_json::Value;
use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

/// Sanity ceiling for a single order total.
pub const REASONABLE_ORDER_TOTAL: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableQuality {
    pub row_count: usize,
    pub column_count: usize,
    /// Fraction of null values per column, in [0, 1].
    pub null_percentages: BTreeMap<String, f64>,
    pub duplicate_rows: usize,
    pub memory_usage_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityCheck {
    pub valid_references: usize,
    pub total_references: usize,
    pub integrity_percentage: f64,
}

impl IntegrityCheck {
    fn new(valid_references: usize, total_references: usize) -> Self {
        let integrity_percentage = if total_references == 0 {
            100.0
        } else {
            round2(valid_references as f64 / total_references as f64 * 100.0)
        };
        Self {
            valid_references,
            total_references,
            integrity_percentage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.valid_references == self.total_references
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRules {
    pub total_orders: usize,
    pub positive_amounts: usize,
    pub valid_dates: usize,
    pub reasonable_totals: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub window: DateWindow,
    pub tables: BTreeMap<&'static str, TableQuality>,
    pub referential_integrity: BTreeMap<&'static str, IntegrityCheck>,
    pub business_rules: BTreeMap<&'static str, OrderRules>,
}

impl QualityReport {
    pub fn build(dataset: &Dataset, window: &DateWindow) -> GenResult<Self> {
        let mut tables = BTreeMap::new();
        add_table(&mut tables, dataset.customers.as_deref())?;
        add_table(&mut tables, dataset.products.as_deref())?;
        add_table(&mut tables, dataset.orders.as_deref())?;
        add_table(&mut tables, dataset.order_items.as_deref())?;
        add_table(&mut tables, dataset.web_sessions.as_deref())?;
        add_table(&mut tables, dataset.marketing_spend.as_deref())?;

        let mut integrity = BTreeMap::new();
        let customer_ids: Option<HashSet<&str>> = dataset
            .customers
            .as_ref()
            .map(|c| c.iter().map(|c| c.customer_id.as_str()).collect());
        let product_ids: Option<HashSet<&str>> = dataset
            .products
            .as_ref()
            .map(|p| p.iter().map(|p| p.product_id.as_str()).collect());
        let order_ids: Option<HashSet<&str>> = dataset
            .orders
            .as_ref()
            .map(|o| o.iter().map(|o| o.order_id.as_str()).collect());

        if let (Some(orders), Some(ids)) = (&dataset.orders, &customer_ids) {
            integrity.insert(
                "orders_customers",
                check(orders.iter().map(|o| o.customer_id.as_str()), ids),
            );
        }
        if let (Some(items), Some(ids)) = (&dataset.order_items, &product_ids) {
            integrity.insert(
                "order_items_products",
                check(items.iter().map(|i| i.product_id.as_str()), ids),
            );
        }
        if let (Some(items), Some(ids)) = (&dataset.order_items, &order_ids) {
            integrity.insert(
                "order_items_orders",
                check(items.iter().map(|i| i.order_id.as_str()), ids),
            );
        }
        if let (Some(sessions), Some(ids)) = (&dataset.web_sessions, &customer_ids) {
            integrity.insert(
                "web_sessions_customers",
                check(sessions.iter().filter_map(|s| s.customer_id.as_deref()), ids),
            );
        }
        for (name, result) in &integrity {
            if !result.is_complete() {
                log::warn!(
                    "quality: {name} integrity at {:.2}% ({} of {} references resolve)",
                    result.integrity_percentage,
                    result.valid_references,
                    result.total_references
                );
            }
        }

        let mut business_rules = BTreeMap::new();
        if let Some(orders) = &dataset.orders {
            business_rules.insert(
                "orders",
                OrderRules {
                    total_orders: orders.len(),
                    positive_amounts: orders.iter().filter(|o| o.total_amount > 0.0).count(),
                    valid_dates: orders.iter().filter(|o| window.contains(o.order_date)).count(),
                    reasonable_totals: orders
                        .iter()
                        .filter(|o| o.total_amount <= REASONABLE_ORDER_TOTAL)
                        .count(),
                },
            );
        }

        Ok(Self {
            window: *window,
            tables,
            referential_integrity: integrity,
            business_rules,
        })
    }

    pub fn to_json_pretty(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON, creating the parent directory.
    pub fn write_to(&self, path: &Path) -> GenResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

fn check<'a>(refs: impl Iterator<Item = &'a str>, known: &HashSet<&str>) -> IntegrityCheck {
    let (mut valid, mut total) = (0, 0);
    for r in refs {
        total += 1;
        if known.contains(r) {
            valid += 1;
        }
    }
    IntegrityCheck::new(valid, total)
}

fn add_table<T: TableRecord>(
    tables: &mut BTreeMap<&'static str, TableQuality>,
    rows: Option<&[T]>,
) -> GenResult<()> {
    if let Some(rows) = rows {
        tables.insert(T::TABLE, table_quality(rows)?);
    }
    Ok(())
}

/// Profile one table through its serialized form, so every record type
/// is measured the same way.
pub fn table_quality<T: TableRecord>(rows: &[T]) -> GenResult<TableQuality> {
    let mut nulls: BTreeMap<&str, usize> = T::COLUMNS.iter().map(|c| (*c, 0)).collect();
    let mut seen = HashSet::with_capacity(rows.len());
    let mut duplicate_rows = 0;
    let mut text_bytes = 0usize;

    for row in rows {
        let value = serde_json::to_value(row)?;
        if let Value::Object(fields) = &value {
            for (column, field) in fields {
                match field {
                    Value::Null => {
                        if let Some(n) = nulls.get_mut(column.as_str()) {
                            *n += 1;
                        }
                    }
                    Value::String(s) => text_bytes += s.len(),
                    _ => {}
                }
            }
        }
        if !seen.insert(value.to_string()) {
            duplicate_rows += 1;
        }
    }

    let denominator = rows.len().max(1) as f64;
    let bytes = rows.len() * std::mem::size_of::<T>() + text_bytes;
    Ok(TableQuality {
        row_count: rows.len(),
        column_count: T::COLUMNS.len(),
        null_percentages: nulls
            .into_iter()
            .map(|(c, n)| (c.to_string(), round4(n as f64 / denominator)))
            .collect(),
        duplicate_rows,
        memory_usage_mb: round4(bytes as f64 / 1024.0 / 1024.0),
    })
}
