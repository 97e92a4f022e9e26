use super::insert_sql;
use crate::{customer_generator::CustomerRecord, product_generator::ProductRecord};
use rusqlite::{params, Transaction};

// ── Customers ─────────────────────────────────────────────────────

pub(super) fn insert_customer(tx: &Transaction<'_>, c: &CustomerRecord) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare_cached(&insert_sql::<CustomerRecord>())?;
    stmt.execute(params![
        &c.customer_id,
        &c.first_name,
        &c.last_name,
        &c.email,
        &c.phone,
        c.birth_date.to_string(),
        &c.gender,
        &c.address_line1,
        &c.city,
        &c.state,
        &c.postal_code,
        &c.country,
        c.customer_segment.as_str(),
        &c.acquisition_channel,
        c.lifetime_value,
        c.created_at.to_string(),
        c.updated_at.to_string(),
        c.last_order_date.map(|d| d.to_string()),
        c.is_active,
        c.email_subscribed,
        &c.preferred_contact,
        &c.credit_score_range,
    ])?;
    Ok(())
}

// ── Products ──────────────────────────────────────────────────────

pub(super) fn insert_product(tx: &Transaction<'_>, p: &ProductRecord) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare_cached(&insert_sql::<ProductRecord>())?;
    stmt.execute(params![
        &p.product_id,
        &p.sku,
        &p.product_name,
        &p.brand,
        &p.category_l1,
        &p.category_l2,
        p.retail_price,
        p.cost,
        p.margin_percent,
        p.weight_kg,
        &p.dimensions_cm,
        &p.color,
        &p.size,
        p.stock_quantity,
        p.reorder_point,
        &p.supplier,
        p.lifecycle_stage.as_str(),
        p.is_active,
        p.is_featured,
        p.created_at.to_string(),
        p.avg_rating,
        p.total_reviews,
        p.total_sales,
    ])?;
    Ok(())
}
