use crate::{
    config::{Catalog, GeneratorConfig},
    contact_generator::ContactGenerator,
    dataset::{Dataset, TableRecord},
    error::{GenError, GenResult},
    name_generator::NameGenerator,
    rng::{StageRng, StageSlot},
    stage::GenerationStage,
    types::{sequential_id, round2, CustomerSegment, DateWindow, EntityId},
};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

const GENDERS: &[&str] = &["Male", "Female", "Other"];
const CONTACT_PREFERENCES: &[&str] = &["email", "phone", "sms"];
const CREDIT_SCORE_RANGES: &[&str] = &["Excellent", "Good", "Fair", "Poor"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecord {
    pub customer_id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub customer_segment: CustomerSegment,
    pub acquisition_channel: String,
    pub lifetime_value: f64,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub last_order_date: Option<NaiveDate>,
    pub is_active: bool,
    pub email_subscribed: bool,
    pub preferred_contact: String,
    pub credit_score_range: String,
}

impl TableRecord for CustomerRecord {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "phone",
        "birth_date",
        "gender",
        "address_line1",
        "city",
        "state",
        "postal_code",
        "country",
        "customer_segment",
        "acquisition_channel",
        "lifetime_value",
        "created_at",
        "updated_at",
        "last_order_date",
        "is_active",
        "email_subscribed",
        "preferred_contact",
        "credit_score_range",
    ];
}

/// Generate `count` customers with segment-driven lifecycle dates.
pub fn generate_customers(
    count: usize,
    window: &DateWindow,
    catalog: &Catalog,
    rng: &mut StageRng,
) -> GenResult<Vec<CustomerRecord>> {
    if count == 0 {
        return Err(GenError::InvalidArgument(
            "customer count must be positive".into(),
        ));
    }

    let shares = catalog.segments.shares();
    let latest_created_offset = (window.span_days() - catalog.customer.min_tenure_days).max(0);
    let (age_lo, age_hi) = catalog.customer.age_range_years;
    let (orders_lo, orders_hi) = catalog.customer.lifetime_orders_range;

    let mut customers = Vec::with_capacity(count);
    for i in 0..count {
        let segment = CustomerSegment::ALL[rng.weighted_index(&shares)];
        let profile = catalog.segments.get(segment);

        let first_name = NameGenerator::first_name(rng);
        let last_name = NameGenerator::last_name(rng);
        let email = ContactGenerator::email(first_name, last_name, rng);
        let birth_date =
            window.end_date - Duration::days(rng.int_inclusive(age_lo * 365, age_hi * 365));

        let created_at = window.base_date + Duration::days(rng.int_inclusive(0, latest_created_offset));
        // VIPs come back sooner; newcomers drift.
        let updated_at = (created_at
            + Duration::days(rng.int_inclusive(0, profile.activity_window_days)))
        .min(window.end_date);
        let last_order_date = if rng.chance(profile.churn_probability) {
            None
        } else {
            Some(updated_at)
        };

        let (lo, hi) = profile.order_value_range;
        let lifetime_value =
            round2(rng.uniform(lo, hi) * rng.int_inclusive(orders_lo, orders_hi) as f64);

        customers.push(CustomerRecord {
            customer_id: sequential_id("CUST", i + 1, 8),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            phone: ContactGenerator::phone_number(rng),
            birth_date,
            gender: rng.pick(GENDERS).to_string(),
            address_line1: ContactGenerator::street_address(rng),
            city: ContactGenerator::city(rng).into(),
            state: ContactGenerator::state_abbr(rng).into(),
            postal_code: ContactGenerator::postal_code(rng),
            country: rng.pick(&catalog.countries).name.clone(),
            customer_segment: segment,
            acquisition_channel: rng.pick(&catalog.channels).name.clone(),
            lifetime_value,
            created_at,
            updated_at,
            last_order_date,
            is_active: rng.chance(catalog.customer.active_probability),
            email_subscribed: rng.chance(catalog.customer.email_subscribed_probability),
            preferred_contact: rng.pick(CONTACT_PREFERENCES).to_string(),
            credit_score_range: rng.pick(CREDIT_SCORE_RANGES).to_string(),
        });
    }
    Ok(customers)
}

pub struct CustomerStage<'a> {
    pub count: usize,
    pub config: &'a GeneratorConfig,
}

impl GenerationStage for CustomerStage<'_> {
    fn name(&self) -> &'static str {
        "customers"
    }

    fn slot(&self) -> StageSlot {
        StageSlot::Customer
    }

    fn run(&self, dataset: &mut Dataset, rng: &mut StageRng) -> GenResult<()> {
        let customers =
            generate_customers(self.count, &self.config.window, &self.config.catalog, rng)?;

        let by_segment = |s: CustomerSegment| {
            customers
                .iter()
                .filter(|c| c.customer_segment == s)
                .count()
        };
        log::info!(
            "customer: generated {} customers (VIP: {}, Regular: {}, New: {})",
            customers.len(),
            by_segment(CustomerSegment::Vip),
            by_segment(CustomerSegment::Regular),
            by_segment(CustomerSegment::New)
        );

        dataset.customers = Some(customers);
        Ok(())
    }
}
