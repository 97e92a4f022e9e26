use crate::{
    error::{GenError, GenResult},
    types::{CustomerSegment, DateWindow, DeviceType, LifecycleStage, OrderStatus, TrafficSource},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tolerance for "weights sum to 1.0" checks.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Largest basket a single order may carry.
pub const MAX_ITEMS_PER_ORDER: usize = 5;

// ── Customer segments ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentProfile {
    pub population_share: f64,
    pub order_value_range: (f64, f64),
    pub churn_probability: f64,
    pub activity_window_days: i64,
    /// Index i holds the probability of an order with i + 1 items.
    pub items_per_order_weights: Vec<f64>,
    pub discount_probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentProfiles {
    pub vip: SegmentProfile,
    pub regular: SegmentProfile,
    pub new: SegmentProfile,
}

impl SegmentProfiles {
    pub fn get(&self, segment: CustomerSegment) -> &SegmentProfile {
        match segment {
            CustomerSegment::Vip => &self.vip,
            CustomerSegment::Regular => &self.regular,
            CustomerSegment::New => &self.new,
        }
    }

    pub fn shares(&self) -> [f64; 3] {
        CustomerSegment::ALL.map(|s| self.get(s).population_share)
    }
}

// ── Product taxonomy ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryProfile {
    pub name: String,
    pub subcategories: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub min_margin: f64,
    pub max_margin: f64,
    #[serde(default)]
    pub has_color: bool,
    #[serde(default)]
    pub has_size: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifecycleProfile {
    pub stage: LifecycleStage,
    pub weight: f64,
    pub stock_range: (i64, i64),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPolicy {
    pub active_probability: f64,
    pub featured_probability: f64,
    pub created_lookback_days: i64,
}

// ── Geography and tax ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryProfile {
    pub name: String,
    pub tax_rate: f64,
}

// ── Marketing ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelProfile {
    pub name: String,
    pub daily_budget_range: (f64, f64),
    /// Paid channels report impressions, clicks and CPC.
    pub paid: bool,
    /// Digital channels spend less on weekends.
    pub weekend_sensitive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seasonality {
    pub boost_months: Vec<u32>,
    pub boost_multiplier: f64,
    pub dip_months: Vec<u32>,
    pub dip_multiplier: f64,
    pub weekend_multiplier: f64,
}

impl Seasonality {
    pub fn month_multiplier(&self, month: u32) -> f64 {
        if self.boost_months.contains(&month) {
            self.boost_multiplier
        } else if self.dip_months.contains(&month) {
            self.dip_multiplier
        } else {
            1.0
        }
    }
}

// ── Web analytics ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceProfile {
    pub duration_range_secs: (f64, f64),
    /// Index i holds the probability of i + 1 page views.
    pub page_view_weights: Vec<f64>,
    pub bounce_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceProfiles {
    pub desktop: DeviceProfile,
    pub mobile: DeviceProfile,
    pub tablet: DeviceProfile,
}

impl DeviceProfiles {
    pub fn get(&self, device: DeviceType) -> &DeviceProfile {
        match device {
            DeviceType::Desktop => &self.desktop,
            DeviceType::Mobile => &self.mobile,
            DeviceType::Tablet => &self.tablet,
        }
    }
}

/// Conversion probability per traffic source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionRates {
    pub organic: f64,
    pub paid_search: f64,
    pub social_media: f64,
    pub direct: f64,
    pub referral: f64,
    pub email: f64,
}

impl ConversionRates {
    pub const SOURCES: [TrafficSource; 6] = [
        TrafficSource::Organic,
        TrafficSource::PaidSearch,
        TrafficSource::SocialMedia,
        TrafficSource::Direct,
        TrafficSource::Referral,
        TrafficSource::Email,
    ];

    pub fn get(&self, source: TrafficSource) -> f64 {
        match source {
            TrafficSource::Organic => self.organic,
            TrafficSource::PaidSearch => self.paid_search,
            TrafficSource::SocialMedia => self.social_media,
            TrafficSource::Direct => self.direct,
            TrafficSource::Referral => self.referral,
            TrafficSource::Email => self.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionPolicy {
    pub known_customer_probability: f64,
}

// ── Customers and orders ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerPolicy {
    pub active_probability: f64,
    pub email_subscribed_probability: f64,
    /// Customers are created at least this many days before the window ends.
    pub min_tenure_days: i64,
    /// Multiplier range applied to a segment order value to estimate CLV.
    pub lifetime_orders_range: (i64, i64),
    pub age_range_years: (i64, i64),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPolicy {
    /// Index i holds the probability of quantity i + 1.
    pub quantity_weights: Vec<f64>,
    pub discount_range: (f64, f64),
    pub free_shipping_threshold: f64,
    pub shipping_range: (f64, f64),
    pub default_tax_rate: f64,
    pub terminal_status_weights: Vec<(OrderStatus, f64)>,
    pub first_order_probability: f64,
    pub max_update_delay_hours: i64,
    pub currency: String,
}

// ── Catalog ────────────────────────────────────────────────────────

/// Every lookup table the generator draws from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub segments: SegmentProfiles,
    pub categories: Vec<CategoryProfile>,
    pub lifecycle: Vec<LifecycleProfile>,
    pub countries: Vec<CountryProfile>,
    pub channels: Vec<ChannelProfile>,
    pub seasonality: Seasonality,
    pub devices: DeviceProfiles,
    pub conversion_rates: ConversionRates,
    pub payment_methods: Vec<String>,
    pub customer: CustomerPolicy,
    pub product: ProductPolicy,
    pub order: OrderPolicy,
    pub session: SessionPolicy,
}

impl Catalog {
    /// Load a catalog from a JSON file and validate it.
    /// Without a file, use Catalog::standard().
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn tax_rate(&self, country: &str) -> f64 {
        self.countries
            .iter()
            .find(|c| c.name == country)
            .map(|c| c.tax_rate)
            .unwrap_or(self.order.default_tax_rate)
    }

    /// Check every invariant the stages rely on. Called once when the
    /// generator is built; stages assume a validated catalog.
    pub fn validate(&self) -> GenResult<()> {
        let shares = self.segments.shares();
        check_distribution("segments.population_share", &shares)?;
        for segment in CustomerSegment::ALL {
            let profile = self.segments.get(segment);
            let field = format!("segments.{}", segment.as_str());
            check_positive_range(&format!("{field}.order_value_range"), profile.order_value_range)?;
            check_probability(&format!("{field}.churn_probability"), profile.churn_probability)?;
            check_probability(
                &format!("{field}.discount_probability"),
                profile.discount_probability,
            )?;
            if profile.activity_window_days < 0 {
                return Err(GenError::invalid_config(
                    format!("{field}.activity_window_days"),
                    "must not be negative",
                ));
            }
            if profile.items_per_order_weights.len() > MAX_ITEMS_PER_ORDER {
                return Err(GenError::invalid_config(
                    format!("{field}.items_per_order_weights"),
                    format!("at most {MAX_ITEMS_PER_ORDER} basket sizes"),
                ));
            }
            check_distribution(
                &format!("{field}.items_per_order_weights"),
                &profile.items_per_order_weights,
            )?;
        }

        if self.categories.is_empty() {
            return Err(GenError::invalid_config("categories", "must not be empty"));
        }
        for cat in &self.categories {
            let field = format!("categories.{}", cat.name);
            if cat.subcategories.is_empty() {
                return Err(GenError::invalid_config(
                    format!("{field}.subcategories"),
                    "must not be empty",
                ));
            }
            if cat.min_price < 1.0 {
                return Err(GenError::invalid_config(
                    format!("{field}.min_price"),
                    "must be at least 1.00",
                ));
            }
            check_positive_range(&format!("{field}.price"), (cat.min_price, cat.max_price))?;
            if !(cat.min_margin >= 0.01 && cat.min_margin <= cat.max_margin && cat.max_margin <= 0.99)
            {
                return Err(GenError::invalid_config(
                    format!("{field}.margin"),
                    format!(
                        "need 0.01 <= min ({}) <= max ({}) <= 0.99",
                        cat.min_margin, cat.max_margin
                    ),
                ));
            }
        }

        let lifecycle_weights: Vec<f64> = self.lifecycle.iter().map(|l| l.weight).collect();
        check_distribution("lifecycle.weight", &lifecycle_weights)?;
        for stage in &self.lifecycle {
            check_int_range(
                &format!("lifecycle.{}.stock_range", stage.stage.as_str()),
                stage.stock_range,
            )?;
        }

        if self.countries.is_empty() {
            return Err(GenError::invalid_config("countries", "must not be empty"));
        }
        for country in &self.countries {
            check_probability(&format!("countries.{}.tax_rate", country.name), country.tax_rate)?;
        }
        check_probability("order.default_tax_rate", self.order.default_tax_rate)?;

        if self.channels.is_empty() {
            return Err(GenError::invalid_config("channels", "must not be empty"));
        }
        for channel in &self.channels {
            check_positive_range(
                &format!("channels.{}.daily_budget_range", channel.name),
                channel.daily_budget_range,
            )?;
        }
        for month in self.seasonality.boost_months.iter().chain(&self.seasonality.dip_months) {
            if !(1..=12).contains(month) {
                return Err(GenError::invalid_config(
                    "seasonality",
                    format!("month {month} out of range"),
                ));
            }
        }

        for device in DeviceType::ALL {
            let profile = self.devices.get(device);
            let field = format!("devices.{}", device.as_str());
            check_positive_range(&format!("{field}.duration_range_secs"), profile.duration_range_secs)?;
            check_distribution(&format!("{field}.page_view_weights"), &profile.page_view_weights)?;
            check_probability(&format!("{field}.bounce_rate"), profile.bounce_rate)?;
        }
        for source in ConversionRates::SOURCES {
            check_probability(
                &format!("conversion_rates.{}", source.as_str()),
                self.conversion_rates.get(source),
            )?;
        }
        check_probability(
            "session.known_customer_probability",
            self.session.known_customer_probability,
        )?;

        if self.payment_methods.is_empty() {
            return Err(GenError::invalid_config("payment_methods", "must not be empty"));
        }

        check_probability("customer.active_probability", self.customer.active_probability)?;
        check_probability(
            "customer.email_subscribed_probability",
            self.customer.email_subscribed_probability,
        )?;
        check_int_range("customer.lifetime_orders_range", self.customer.lifetime_orders_range)?;
        check_int_range("customer.age_range_years", self.customer.age_range_years)?;
        if self.customer.min_tenure_days < 0 {
            return Err(GenError::invalid_config(
                "customer.min_tenure_days",
                "must not be negative",
            ));
        }

        check_probability("product.active_probability", self.product.active_probability)?;
        check_probability("product.featured_probability", self.product.featured_probability)?;
        if self.product.created_lookback_days < 0 {
            return Err(GenError::invalid_config(
                "product.created_lookback_days",
                "must not be negative",
            ));
        }

        check_distribution("order.quantity_weights", &self.order.quantity_weights)?;
        let terminal: Vec<f64> = self.order.terminal_status_weights.iter().map(|(_, w)| *w).collect();
        check_distribution("order.terminal_status_weights", &terminal)?;
        if let Some((status, _)) = self
            .order
            .terminal_status_weights
            .iter()
            .find(|(s, _)| !s.is_terminal())
        {
            return Err(GenError::invalid_config(
                "order.terminal_status_weights",
                format!("'{}' is not a terminal status", status.as_str()),
            ));
        }
        check_positive_range("order.discount_range", self.order.discount_range)?;
        if self.order.discount_range.1 >= 1.0 {
            return Err(GenError::invalid_config(
                "order.discount_range",
                "discount must stay below 100%",
            ));
        }
        check_positive_range("order.shipping_range", self.order.shipping_range)?;
        check_probability("order.first_order_probability", self.order.first_order_probability)?;
        if self.order.max_update_delay_hours < 1 {
            return Err(GenError::invalid_config(
                "order.max_update_delay_hours",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// The built-in tables of the demo warehouse.
    pub fn standard() -> Self {
        fn category(
            name: &str,
            subs: [&str; 5],
            price: (f64, f64),
            margin: (f64, f64),
        ) -> CategoryProfile {
            CategoryProfile {
                name: name.into(),
                subcategories: subs.iter().map(|s| s.to_string()).collect(),
                min_price: price.0,
                max_price: price.1,
                min_margin: margin.0,
                max_margin: margin.1,
                has_color: false,
                has_size: false,
            }
        }

        let mut categories = vec![
            category(
                "Electronics",
                ["Smartphones", "Laptops", "Audio", "Gaming", "Wearables"],
                (50.0, 2500.0),
                (0.15, 0.35),
            ),
            category(
                "Clothing",
                ["Mens", "Womens", "Kids", "Shoes", "Accessories"],
                (15.0, 400.0),
                (0.40, 0.65),
            ),
            category(
                "Home & Garden",
                ["Furniture", "Appliances", "Decor", "Tools", "Garden"],
                (25.0, 800.0),
                (0.25, 0.45),
            ),
            category(
                "Books",
                ["Fiction", "Non-Fiction", "Educational", "Comics", "E-books"],
                (10.0, 60.0),
                (0.20, 0.40),
            ),
            category(
                "Sports",
                ["Fitness", "Outdoor", "Team Sports", "Individual Sports", "Equipment"],
                (20.0, 500.0),
                (0.30, 0.50),
            ),
            category(
                "Beauty & Health",
                ["Skincare", "Makeup", "Supplements", "Personal Care", "Medical"],
                (8.0, 150.0),
                (0.45, 0.70),
            ),
            category(
                "Toys & Games",
                ["Educational", "Action Figures", "Board Games", "Video Games", "Puzzles"],
                (15.0, 200.0),
                (0.35, 0.55),
            ),
            category(
                "Automotive",
                ["Parts", "Accessories", "Tools", "Maintenance", "Electronics"],
                (30.0, 1200.0),
                (0.20, 0.40),
            ),
            category(
                "Food & Beverages",
                ["Snacks", "Beverages", "Organic", "International", "Frozen"],
                (3.0, 80.0),
                (0.25, 0.45),
            ),
        ];
        for cat in &mut categories {
            cat.has_color = matches!(cat.name.as_str(), "Clothing" | "Home & Garden");
            cat.has_size = cat.name == "Clothing";
        }

        let channel = |name: &str, budget: (f64, f64), digital: bool| ChannelProfile {
            name: name.into(),
            daily_budget_range: budget,
            paid: digital,
            weekend_sensitive: digital,
        };

        Self {
            segments: SegmentProfiles {
                vip: SegmentProfile {
                    population_share: 0.10,
                    order_value_range: (300.0, 1500.0),
                    churn_probability: 0.05,
                    activity_window_days: 30,
                    items_per_order_weights: vec![0.20, 0.30, 0.25, 0.15, 0.10],
                    discount_probability: 0.4,
                },
                regular: SegmentProfile {
                    population_share: 0.60,
                    order_value_range: (75.0, 400.0),
                    churn_probability: 0.15,
                    activity_window_days: 90,
                    items_per_order_weights: vec![0.40, 0.35, 0.20, 0.05],
                    discount_probability: 0.2,
                },
                new: SegmentProfile {
                    population_share: 0.30,
                    order_value_range: (40.0, 200.0),
                    churn_probability: 0.25,
                    activity_window_days: 180,
                    items_per_order_weights: vec![0.60, 0.30, 0.10],
                    discount_probability: 0.3,
                },
            },
            categories,
            lifecycle: vec![
                LifecycleProfile { stage: LifecycleStage::New, weight: 0.15, stock_range: (10, 100) },
                LifecycleProfile { stage: LifecycleStage::Growth, weight: 0.25, stock_range: (50, 500) },
                LifecycleProfile { stage: LifecycleStage::Mature, weight: 0.45, stock_range: (100, 1000) },
                LifecycleProfile { stage: LifecycleStage::Decline, weight: 0.15, stock_range: (5, 50) },
            ],
            countries: [
                ("Portugal", 0.23),
                ("Spain", 0.21),
                ("France", 0.20),
                ("Germany", 0.19),
                ("Italy", 0.22),
                ("United Kingdom", 0.20),
            ]
            .iter()
            .map(|(name, tax_rate)| CountryProfile { name: name.to_string(), tax_rate: *tax_rate })
            .collect(),
            channels: vec![
                channel("Google Ads", (500.0, 2000.0), true),
                channel("Facebook Ads", (300.0, 1500.0), true),
                channel("Instagram Ads", (200.0, 1000.0), true),
                channel("TikTok Ads", (100.0, 800.0), true),
                channel("Email Marketing", (50.0, 300.0), false),
                channel("SEO Organic", (200.0, 800.0), false),
                channel("Influencer Marketing", (1000.0, 5000.0), false),
                channel("TV Advertising", (2000.0, 10000.0), false),
                channel("Radio", (300.0, 1500.0), false),
                channel("Affiliate Marketing", (400.0, 2000.0), false),
                channel("Direct Mail", (500.0, 2500.0), false),
            ],
            seasonality: Seasonality {
                boost_months: vec![11, 12],
                boost_multiplier: 1.5,
                dip_months: vec![1, 2],
                dip_multiplier: 0.7,
                weekend_multiplier: 0.8,
            },
            devices: DeviceProfiles {
                desktop: DeviceProfile {
                    duration_range_secs: (180.0, 600.0),
                    page_view_weights: vec![0.25, 0.20, 0.20, 0.15, 0.10, 0.07, 0.03],
                    bounce_rate: 0.45,
                },
                mobile: DeviceProfile {
                    duration_range_secs: (45.0, 180.0),
                    page_view_weights: vec![0.40, 0.25, 0.20, 0.10, 0.05],
                    bounce_rate: 0.65,
                },
                tablet: DeviceProfile {
                    duration_range_secs: (120.0, 300.0),
                    page_view_weights: vec![0.30, 0.25, 0.20, 0.15, 0.08, 0.02],
                    bounce_rate: 0.55,
                },
            },
            conversion_rates: ConversionRates {
                organic: 0.08,
                paid_search: 0.12,
                social_media: 0.04,
                direct: 0.15,
                referral: 0.06,
                email: 0.18,
            },
            payment_methods: [
                "credit_card",
                "debit_card",
                "paypal",
                "apple_pay",
                "google_pay",
                "bank_transfer",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            customer: CustomerPolicy {
                active_probability: 0.85,
                email_subscribed_probability: 0.70,
                min_tenure_days: 30,
                lifetime_orders_range: (1, 15),
                age_range_years: (18, 75),
            },
            product: ProductPolicy {
                active_probability: 0.90,
                featured_probability: 0.20,
                created_lookback_days: 1095,
            },
            order: OrderPolicy {
                quantity_weights: vec![0.70, 0.25, 0.05],
                discount_range: (0.05, 0.25),
                free_shipping_threshold: 50.0,
                shipping_range: (3.99, 9.99),
                default_tax_rate: 0.23,
                terminal_status_weights: vec![
                    (OrderStatus::Delivered, 0.85),
                    (OrderStatus::Cancelled, 0.10),
                    (OrderStatus::Returned, 0.05),
                ],
                first_order_probability: 0.30,
                max_update_delay_hours: 72,
                currency: "EUR".into(),
            },
            session: SessionPolicy {
                known_customer_probability: 0.70,
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_distribution(field: &str, weights: &[f64]) -> GenResult<()> {
    if weights.is_empty() {
        return Err(GenError::invalid_config(field, "distribution must not be empty"));
    }
    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(GenError::invalid_config(field, format!("invalid weight {w}")));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(GenError::invalid_config(
            field,
            format!("weights sum to {sum}, expected 1.0"),
        ));
    }
    Ok(())
}

fn check_probability(field: &str, p: f64) -> GenResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GenError::invalid_config(field, format!("probability {p} outside [0, 1]")));
    }
    Ok(())
}

fn check_positive_range(field: &str, (lo, hi): (f64, f64)) -> GenResult<()> {
    if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
        return Err(GenError::invalid_config(field, format!("bad range ({lo}, {hi})")));
    }
    Ok(())
}

fn check_int_range(field: &str, (lo, hi): (i64, i64)) -> GenResult<()> {
    if lo < 0 || lo > hi {
        return Err(GenError::invalid_config(field, format!("bad range ({lo}, {hi})")));
    }
    Ok(())
}

// ── Run parameters ─────────────────────────────────────────────────

/// Row counts for the four count-driven tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSizes {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub sessions: usize,
}

/// Size presets for a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Minimal data for smoke testing.
    Quick,
    Standard,
    /// Large dataset for load testing the warehouse.
    Production,
}

impl Scale {
    pub fn sizes(&self) -> TableSizes {
        match self {
            Scale::Quick => TableSizes {
                customers: 1_000,
                products: 500,
                orders: 2_000,
                sessions: 5_000,
            },
            Scale::Standard => TableSizes {
                customers: 10_000,
                products: 5_000,
                orders: 25_000,
                sessions: 50_000,
            },
            Scale::Production => TableSizes {
                customers: 50_000,
                products: 10_000,
                orders: 200_000,
                sessions: 500_000,
            },
        }
    }
}

impl std::str::FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" | "q" => Ok(Scale::Quick),
            "standard" | "s" => Ok(Scale::Standard),
            "production" | "prod" | "p" => Ok(Scale::Production),
            _ => Err(format!(
                "Unknown scale: {s}. Use quick, standard, or production"
            )),
        }
    }
}

/// Everything a generator needs besides table sizes.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub window: DateWindow,
    pub catalog: Catalog,
}

impl GeneratorConfig {
    pub fn new(seed: u64, window: DateWindow) -> Self {
        Self {
            seed,
            window,
            catalog: Catalog::standard(),
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }
}
