use super::{insert_sql, timestamp};
use crate::{
    marketing_generator::MarketingSpendRecord,
    order_generator::{OrderItemRecord, OrderRecord},
    session_generator::WebSessionRecord,
};
use rusqlite::{params, Transaction};

// ── Orders ────────────────────────────────────────────────────────

pub(super) fn insert_order(tx: &Transaction<'_>, o: &OrderRecord) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare_cached(&insert_sql::<OrderRecord>())?;
    stmt.execute(params![
        &o.order_id,
        &o.customer_id,
        o.order_date.to_string(),
        o.order_status.as_str(),
        &o.payment_method,
        o.total_items,
        o.subtotal,
        o.discount_amount,
        o.tax_amount,
        o.shipping_cost,
        o.total_amount,
        &o.currency,
        &o.acquisition_channel,
        o.device_type.as_str(),
        o.is_first_order,
        timestamp(&o.created_at),
        timestamp(&o.updated_at),
    ])?;
    Ok(())
}

pub(super) fn insert_order_item(tx: &Transaction<'_>, i: &OrderItemRecord) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare_cached(&insert_sql::<OrderItemRecord>())?;
    stmt.execute(params![
        &i.order_item_id,
        &i.order_id,
        &i.product_id,
        i.quantity,
        i.unit_price,
        i.line_total,
        i.cost_per_unit,
        i.line_cost,
    ])?;
    Ok(())
}

// ── Web analytics ─────────────────────────────────────────────────

pub(super) fn insert_web_session(tx: &Transaction<'_>, s: &WebSessionRecord) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare_cached(&insert_sql::<WebSessionRecord>())?;
    stmt.execute(params![
        &s.session_id,
        &s.customer_id,
        s.session_date.to_string(),
        timestamp(&s.session_start_time),
        s.session_duration_seconds,
        s.page_views,
        s.unique_page_views,
        s.bounce,
        s.converted,
        s.device_type.as_str(),
        &s.browser,
        &s.operating_system,
        s.traffic_source.as_str(),
        &s.landing_page,
        &s.exit_page,
        &s.country,
        &s.city,
        &s.ip_address,
        &s.user_agent,
    ])?;
    Ok(())
}

// ── Marketing ─────────────────────────────────────────────────────

pub(super) fn insert_marketing_spend(
    tx: &Transaction<'_>,
    m: &MarketingSpendRecord,
) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare_cached(&insert_sql::<MarketingSpendRecord>())?;
    stmt.execute(params![
        m.spend_date.to_string(),
        &m.channel,
        &m.campaign_name,
        m.spend_amount,
        m.impressions,
        m.clicks,
        m.conversions,
        m.cpc,
        m.cpm,
        m.cpa,
        m.conversion_rate,
        m.roas,
        &m.currency,
    ])?;
    Ok(())
}
