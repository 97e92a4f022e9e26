//! Shared primitive types used across every generation stage.

use crate::{
    error::{GenError, GenResult},
    rng::StageRng,
};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A stable, unique identifier for any generated entity.
pub type EntityId = String;

/// Build a sequential identifier with a fixed-width zero-padded suffix,
/// e.g. `sequential_id("CUST", 1, 8)` → `CUST_00000001`.
pub fn sequential_id(prefix: &str, seq: usize, width: usize) -> EntityId {
    format!("{prefix}_{seq:0width$}")
}

/// Round a money amount to cents, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> GenResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| GenError::InvalidArgument(format!("malformed date '{raw}': {e}")))
}

/// Uniform timestamp within the given calendar day, to the second.
pub fn random_time_on(date: NaiveDate, rng: &mut StageRng) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::seconds(rng.int_inclusive(0, 86_399))
}

/// The inclusive date range every fact table is drawn from.
/// `end_date` doubles as "today" for ages and order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub base_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateWindow {
    pub fn new(base_date: NaiveDate, end_date: NaiveDate) -> GenResult<Self> {
        if end_date < base_date {
            return Err(GenError::InvalidArgument(format!(
                "end date {end_date} is before base date {base_date}"
            )));
        }
        Ok(Self { base_date, end_date })
    }

    pub fn parse(base_date: &str, end_date: &str) -> GenResult<Self> {
        Self::new(parse_date(base_date)?, parse_date(end_date)?)
    }

    /// Whole days between base and end (0 for a single-day window).
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.base_date).num_days()
    }

    pub fn day_count(&self) -> usize {
        self.span_days() as usize + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.base_date.iter_days().take(self.day_count())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.base_date && date <= self.end_date
    }

    /// Uniform calendar day inside the window.
    pub fn random_date(&self, rng: &mut StageRng) -> NaiveDate {
        self.base_date + Duration::days(rng.int_inclusive(0, self.span_days()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CustomerSegment {
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    New,
}

impl CustomerSegment {
    pub const ALL: [CustomerSegment; 3] = [Self::Vip, Self::Regular, Self::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vip => "VIP",
            Self::Regular => "Regular",
            Self::New => "New",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStage {
    New,
    Growth,
    Mature,
    Decline,
}

impl LifecycleStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Growth => "Growth",
            Self::Mature => "Mature",
            Self::Decline => "Decline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Returned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [Self::Desktop, Self::Mobile, Self::Tablet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficSource {
    Organic,
    PaidSearch,
    SocialMedia,
    Direct,
    Referral,
    Email,
}

impl TrafficSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::PaidSearch => "paid_search",
            Self::SocialMedia => "social_media",
            Self::Direct => "direct",
            Self::Referral => "referral",
            Self::Email => "email",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_zero_padded() {
        assert_eq!(sequential_id("CUST", 1, 8), "CUST_00000001");
        assert_eq!(sequential_id("ORD", 42, 10), "ORD_0000000042");
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(-2.345_01), -2.35);
    }

    #[test]
    fn window_rejects_malformed_and_inverted_dates() {
        assert!(matches!(
            DateWindow::parse("2023-13-01", "2023-12-31"),
            Err(GenError::InvalidArgument(_))
        ));
        assert!(matches!(
            DateWindow::parse("2023-02-01", "2023-01-01"),
            Err(GenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_time_stays_on_its_day() {
        use crate::rng::{RngBank, StageSlot};
        let mut rng = RngBank::new(9).for_stage(StageSlot::WebSession);
        let day = parse_date("2023-03-26").unwrap();
        for _ in 0..500 {
            assert_eq!(random_time_on(day, &mut rng).date(), day);
        }
    }

    #[test]
    fn window_iterates_every_day_inclusive() {
        let window = DateWindow::parse("2023-01-30", "2023-02-01").unwrap();
        let days: Vec<_> = window.days().map(|d| d.to_string()).collect();
        assert_eq!(days, vec!["2023-01-30", "2023-01-31", "2023-02-01"]);
        assert_eq!(window.day_count(), 3);
    }
}
