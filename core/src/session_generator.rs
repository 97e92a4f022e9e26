use crate::{
    config::{Catalog, ConversionRates, GeneratorConfig},
    contact_generator::ContactGenerator,
    customer_generator::CustomerRecord,
    dataset::{Dataset, TableRecord},
    error::{GenError, GenResult},
    name_generator::NameGenerator,
    rng::{StageRng, StageSlot},
    stage::GenerationStage,
    types::{random_time_on, DateWindow, DeviceType, EntityId, TrafficSource},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

const BROWSERS: &[&str] = &["Chrome", "Safari", "Firefox", "Edge", "Opera"];
const OPERATING_SYSTEMS: &[&str] = &["Windows", "macOS", "iOS", "Android", "Linux"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSessionRecord {
    pub session_id: EntityId,
    pub customer_id: Option<EntityId>,
    pub session_date: NaiveDate,
    pub session_start_time: NaiveDateTime,
    pub session_duration_seconds: i64,
    pub page_views: i64,
    pub unique_page_views: i64,
    pub bounce: bool,
    pub converted: bool,
    pub device_type: DeviceType,
    pub browser: String,
    pub operating_system: String,
    pub traffic_source: TrafficSource,
    pub landing_page: String,
    pub exit_page: String,
    pub country: String,
    pub city: String,
    pub ip_address: String,
    pub user_agent: String,
}

impl TableRecord for WebSessionRecord {
    const TABLE: &'static str = "web_sessions";
    const COLUMNS: &'static [&'static str] = &[
        "session_id",
        "customer_id",
        "session_date",
        "session_start_time",
        "session_duration_seconds",
        "page_views",
        "unique_page_views",
        "bounce",
        "converted",
        "device_type",
        "browser",
        "operating_system",
        "traffic_source",
        "landing_page",
        "exit_page",
        "country",
        "city",
        "ip_address",
        "user_agent",
    ];
}

/// Generate `count` sessions. With `customers` present, a share of the
/// sessions is attributed to a known customer; the rest stay anonymous.
pub fn generate_web_sessions(
    count: usize,
    customers: Option<&[CustomerRecord]>,
    window: &DateWindow,
    catalog: &Catalog,
    rng: &mut StageRng,
) -> GenResult<Vec<WebSessionRecord>> {
    if count == 0 {
        return Err(GenError::InvalidArgument("session count must be positive".into()));
    }
    let known = customers.filter(|c| !c.is_empty());

    let mut sessions = Vec::with_capacity(count);
    for i in 0..count {
        let session_date = window.random_date(rng);
        let traffic_source = *rng.pick(&ConversionRates::SOURCES);
        let device_type = *rng.pick(&DeviceType::ALL);
        let device = catalog.devices.get(device_type);

        let (dur_lo, dur_hi) = device.duration_range_secs;
        let session_duration_seconds = rng.uniform(dur_lo, dur_hi) as i64;
        let page_views = rng.weighted_index(&device.page_view_weights) as i64 + 1;

        let converted = rng.chance(catalog.conversion_rates.get(traffic_source));
        // The bounce roll is drawn for every session, single page or not.
        let bounce = rng.chance(device.bounce_rate) && page_views == 1;

        let customer_id = match known {
            Some(list) if rng.chance(catalog.session.known_customer_probability) => {
                Some(rng.pick(list).customer_id.clone())
            }
            _ => None,
        };

        let landing_page = match traffic_source {
            TrafficSource::Direct => "/".to_string(),
            _ => format!("/{}", NameGenerator::word(rng)),
        };

        sessions.push(WebSessionRecord {
            session_id: format!("SESS_{:010}", i + 1),
            customer_id,
            session_date,
            session_start_time: random_time_on(session_date, rng),
            session_duration_seconds,
            page_views,
            unique_page_views: rng.int_inclusive(1, page_views),
            bounce,
            converted,
            device_type,
            browser: rng.pick(BROWSERS).to_string(),
            operating_system: rng.pick(OPERATING_SYSTEMS).to_string(),
            traffic_source,
            landing_page,
            exit_page: format!("/{}", NameGenerator::word(rng)),
            country: ContactGenerator::country_code(rng).into(),
            city: ContactGenerator::city(rng).into(),
            ip_address: ContactGenerator::ipv4(rng),
            user_agent: ContactGenerator::user_agent(rng).into(),
        });
    }
    Ok(sessions)
}

pub struct WebSessionStage<'a> {
    pub count: usize,
    pub config: &'a GeneratorConfig,
}

impl GenerationStage for WebSessionStage<'_> {
    fn name(&self) -> &'static str {
        "web_sessions"
    }

    fn slot(&self) -> StageSlot {
        StageSlot::WebSession
    }

    fn run(&self, dataset: &mut Dataset, rng: &mut StageRng) -> GenResult<()> {
        if dataset.customers.is_none() {
            log::warn!("web_session: no customers generated, every session is anonymous");
        }
        let sessions = generate_web_sessions(
            self.count,
            dataset.customers.as_deref(),
            &self.config.window,
            &self.config.catalog,
            rng,
        )?;

        let n = sessions.len() as f64;
        let converted = sessions.iter().filter(|s| s.converted).count() as f64;
        let bounced = sessions.iter().filter(|s| s.bounce).count() as f64;
        let avg_duration =
            sessions.iter().map(|s| s.session_duration_seconds).sum::<i64>() as f64 / n;
        log::info!(
            "web_session: generated {} sessions (avg {avg_duration:.0}s, conversion {:.2}%, bounce {:.2}%)",
            sessions.len(),
            converted / n * 100.0,
            bounced / n * 100.0
        );

        dataset.web_sessions = Some(sessions);
        Ok(())
    }
}
