use crate::{
    config::{Catalog, ChannelProfile, GeneratorConfig},
    dataset::{Dataset, TableRecord},
    error::GenResult,
    name_generator::NameGenerator,
    rng::{StageRng, StageSlot},
    stage::GenerationStage,
    types::{round2, round4, DateWindow},
};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketingSpendRecord {
    pub spend_date: NaiveDate,
    pub channel: String,
    pub campaign_name: String,
    pub spend_amount: f64,
    pub impressions: Option<i64>,
    pub clicks: Option<i64>,
    pub conversions: i64,
    pub cpc: Option<f64>,
    pub cpm: Option<f64>,
    pub cpa: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub roas: f64,
    pub currency: String,
}

impl TableRecord for MarketingSpendRecord {
    const TABLE: &'static str = "marketing_spend";
    const COLUMNS: &'static [&'static str] = &[
        "spend_date",
        "channel",
        "campaign_name",
        "spend_amount",
        "impressions",
        "clicks",
        "conversions",
        "cpc",
        "cpm",
        "cpa",
        "conversion_rate",
        "roas",
        "currency",
    ];
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Daily budget for a channel after seasonal and weekend adjustment.
pub fn daily_budget(
    channel: &ChannelProfile,
    date: NaiveDate,
    catalog: &Catalog,
    rng: &mut StageRng,
) -> f64 {
    let (lo, hi) = channel.daily_budget_range;
    let mut budget = rng.uniform(lo, hi) * catalog.seasonality.month_multiplier(date.month());
    if channel.weekend_sensitive && is_weekend(date) {
        budget *= catalog.seasonality.weekend_multiplier;
    }
    budget
}

fn spend_row(
    date: NaiveDate,
    channel: &ChannelProfile,
    catalog: &Catalog,
    rng: &mut StageRng,
) -> MarketingSpendRecord {
    let budget = daily_budget(channel, date, catalog, rng);

    let (impressions, clicks, conversions) = if channel.paid {
        let impressions = (budget * rng.uniform(100.0, 500.0)).floor() as i64;
        let clicks = (impressions as f64 * rng.uniform(0.01, 0.05)).floor() as i64;
        let conversions = (clicks as f64 * rng.uniform(0.02, 0.15)).floor() as i64;
        (Some(impressions), Some(clicks), conversions)
    } else {
        (None, None, (budget * rng.uniform(0.01, 0.05)).floor() as i64)
    };

    let spend_amount = round2(budget);
    let per = |n: Option<i64>| n.filter(|n| *n > 0).map(|n| n as f64);

    MarketingSpendRecord {
        spend_date: date,
        channel: channel.name.clone(),
        campaign_name: format!("{} - {}", channel.name, NameGenerator::catch_phrase(rng)),
        spend_amount,
        impressions,
        clicks,
        conversions,
        cpc: per(clicks).map(|c| round2(spend_amount / c)),
        cpm: per(impressions).map(|i| round2(spend_amount / i * 1000.0)),
        cpa: per(Some(conversions)).map(|c| round2(spend_amount / c)),
        conversion_rate: per(clicks).map(|c| round4(conversions as f64 / c)),
        roas: round2(rng.uniform(2.5, 8.0)),
        currency: catalog.order.currency.clone(),
    }
}

/// One row per (day, channel) over the whole window, days outer.
pub fn generate_marketing_spend(
    window: &DateWindow,
    catalog: &Catalog,
    rng: &mut StageRng,
) -> Vec<MarketingSpendRecord> {
    let mut rows = Vec::with_capacity(window.day_count() * catalog.channels.len());
    for date in window.days() {
        for channel in &catalog.channels {
            rows.push(spend_row(date, channel, catalog, rng));
        }
    }
    rows
}

pub struct MarketingStage<'a> {
    pub config: &'a GeneratorConfig,
}

impl GenerationStage for MarketingStage<'_> {
    fn name(&self) -> &'static str {
        "marketing_spend"
    }

    fn slot(&self) -> StageSlot {
        StageSlot::Marketing
    }

    fn run(&self, dataset: &mut Dataset, rng: &mut StageRng) -> GenResult<()> {
        let rows = generate_marketing_spend(&self.config.window, &self.config.catalog, rng);
        let total: f64 = rows.iter().map(|r| r.spend_amount).sum();
        log::info!(
            "marketing: generated {} spend rows over {} days (total {total:.2})",
            rows.len(),
            self.config.window.day_count()
        );
        dataset.marketing_spend = Some(rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngBank;

    #[test]
    fn one_row_per_day_and_channel() {
        let catalog = Catalog::standard();
        let window = DateWindow::parse("2023-01-01", "2023-01-03").unwrap();
        let mut rng = RngBank::new(41).for_stage(StageSlot::Marketing);
        let rows = generate_marketing_spend(&window, &catalog, &mut rng);

        assert_eq!(rows.len(), 3 * catalog.channels.len());
        for (day, chunk) in window.days().zip(rows.chunks(catalog.channels.len())) {
            for (row, channel) in chunk.iter().zip(&catalog.channels) {
                assert_eq!(row.spend_date, day);
                assert_eq!(row.channel, channel.name);
                assert!(row.campaign_name.starts_with(&format!("{} - ", channel.name)));
            }
        }
    }

    #[test]
    fn paid_channels_report_funnel_metrics() {
        let catalog = Catalog::standard();
        let window = DateWindow::parse("2023-03-01", "2023-03-31").unwrap();
        let mut rng = RngBank::new(42).for_stage(StageSlot::Marketing);
        for row in generate_marketing_spend(&window, &catalog, &mut rng) {
            let paid = catalog.channels.iter().find(|c| c.name == row.channel).unwrap().paid;
            assert_eq!(row.impressions.is_some(), paid, "{}", row.channel);
            assert_eq!(row.clicks.is_some(), paid);
            assert_eq!(row.cpm.is_some(), paid);
            if let Some(clicks) = row.clicks {
                assert!(clicks <= row.impressions.unwrap());
                assert!(row.conversions <= clicks);
                if clicks > 0 {
                    assert_eq!(row.cpc, Some(round2(row.spend_amount / clicks as f64)));
                }
            } else {
                assert!(row.cpc.is_none() && row.conversion_rate.is_none());
            }
            assert_eq!(row.cpa.is_some(), row.conversions > 0);
            assert!((2.5..=8.0).contains(&row.roas));
        }
    }

    #[test]
    fn holiday_weekend_budget_is_scaled() {
        let catalog = Catalog::standard();
        let google = &catalog.channels[0];
        let radio = catalog.channels.iter().find(|c| c.name == "Radio").unwrap();
        // 2023-12-02 was a Saturday.
        let saturday = NaiveDate::from_ymd_opt(2023, 12, 2).unwrap();
        let mut rng = RngBank::new(43).for_stage(StageSlot::Marketing);
        for _ in 0..200 {
            let g = daily_budget(google, saturday, &catalog, &mut rng);
            assert!(g >= 500.0 * 1.5 * 0.8 && g < 2000.0 * 1.5 * 0.8 + 1e-9);
            let r = daily_budget(radio, saturday, &catalog, &mut rng);
            assert!(r >= 300.0 * 1.5 && r < 1500.0 * 1.5 + 1e-9);
        }
    }

    #[test]
    fn january_and_february_budgets_dip() {
        let catalog = Catalog::standard();
        let google = &catalog.channels[0];
        let radio = catalog.channels.iter().find(|c| c.name == "Radio").unwrap();
        // Tuesday, Wednesday, Saturday.
        let jan_weekday = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        let feb_weekday = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();
        let feb_saturday = NaiveDate::from_ymd_opt(2023, 2, 4).unwrap();
        let mut rng = RngBank::new(44).for_stage(StageSlot::Marketing);
        for _ in 0..200 {
            for day in [jan_weekday, feb_weekday] {
                let g = daily_budget(google, day, &catalog, &mut rng);
                assert!(g >= 500.0 * 0.7 && g < 2000.0 * 0.7 + 1e-9, "{day}: {g}");
            }
            let g = daily_budget(google, feb_saturday, &catalog, &mut rng);
            assert!(g >= 500.0 * 0.7 * 0.8 && g < 2000.0 * 0.7 * 0.8 + 1e-9);
            let r = daily_budget(radio, feb_saturday, &catalog, &mut rng);
            assert!(r >= 300.0 * 0.7 && r < 1500.0 * 0.7 + 1e-9);
        }
    }
}
