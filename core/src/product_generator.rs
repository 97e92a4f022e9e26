use crate::{
    config::{Catalog, GeneratorConfig},
    contact_generator::ContactGenerator,
    dataset::{Dataset, TableRecord},
    error::{GenError, GenResult},
    name_generator::NameGenerator,
    rng::{StageRng, StageSlot},
    stage::GenerationStage,
    types::{round2, sequential_id, DateWindow, EntityId, LifecycleStage},
};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

const SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub product_id: EntityId,
    pub sku: String,
    pub product_name: String,
    pub brand: String,
    pub category_l1: String,
    pub category_l2: String,
    pub retail_price: f64,
    pub cost: f64,
    pub margin_percent: f64,
    pub weight_kg: f64,
    pub dimensions_cm: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub stock_quantity: i64,
    pub reorder_point: i64,
    pub supplier: String,
    pub lifecycle_stage: LifecycleStage,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: NaiveDate,
    pub avg_rating: f64,
    pub total_reviews: i64,
    pub total_sales: i64,
}

impl TableRecord for ProductRecord {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "sku",
        "product_name",
        "brand",
        "category_l1",
        "category_l2",
        "retail_price",
        "cost",
        "margin_percent",
        "weight_kg",
        "dimensions_cm",
        "color",
        "size",
        "stock_quantity",
        "reorder_point",
        "supplier",
        "lifecycle_stage",
        "is_active",
        "is_featured",
        "created_at",
        "avg_rating",
        "total_reviews",
        "total_sales",
    ];
}

/// Price a product from its category's price and margin ranges.
/// Returns `(retail_price, cost, margin_percent)` with `cost < retail_price`
/// and the margin recomputed from the stored, rounded pair.
pub fn price_product(
    min_price: f64,
    max_price: f64,
    margin: f64,
    rng: &mut StageRng,
) -> (f64, f64, f64) {
    let retail_price = round2(rng.uniform(min_price, max_price));
    let cost = round2(retail_price * (1.0 - margin))
        .min(round2(retail_price - 0.01))
        .max(0.01);
    let margin_percent = round2((retail_price - cost) / retail_price * 100.0);
    (retail_price, cost, margin_percent)
}

pub fn generate_products(
    count: usize,
    window: &DateWindow,
    catalog: &Catalog,
    rng: &mut StageRng,
) -> GenResult<Vec<ProductRecord>> {
    if count == 0 {
        return Err(GenError::InvalidArgument(
            "product count must be positive".into(),
        ));
    }

    let lifecycle_weights: Vec<f64> = catalog.lifecycle.iter().map(|l| l.weight).collect();
    let mut products = Vec::with_capacity(count);

    for i in 0..count {
        let category = rng.pick(&catalog.categories);
        let subcategory = rng.pick(&category.subcategories);

        let margin = rng.uniform(category.min_margin, category.max_margin);
        let (retail_price, cost, margin_percent) =
            price_product(category.min_price, category.max_price, margin, rng);

        let lifecycle = &catalog.lifecycle[rng.weighted_index(&lifecycle_weights)];
        let (stock_lo, stock_hi) = lifecycle.stock_range;

        let color = category
            .has_color
            .then(|| NameGenerator::color(rng).to_string());
        let size = category.has_size.then(|| rng.pick(SIZES).to_string());

        products.push(ProductRecord {
            product_id: sequential_id("PROD", i + 1, 8),
            sku: ContactGenerator::sku(rng),
            product_name: format!("{} {subcategory}", NameGenerator::catch_phrase(rng)),
            brand: NameGenerator::company_name(rng),
            category_l1: category.name.clone(),
            category_l2: subcategory.clone(),
            retail_price,
            cost,
            margin_percent,
            weight_kg: round2(rng.uniform(0.1, 25.0)),
            dimensions_cm: format!(
                "{}x{}x{}",
                rng.int_inclusive(5, 60),
                rng.int_inclusive(5, 60),
                rng.int_inclusive(2, 40)
            ),
            color,
            size,
            stock_quantity: rng.int_inclusive(stock_lo, stock_hi),
            reorder_point: rng.int_inclusive(10, 50),
            supplier: NameGenerator::company_name(rng),
            lifecycle_stage: lifecycle.stage,
            is_active: rng.chance(catalog.product.active_probability),
            is_featured: rng.chance(catalog.product.featured_probability),
            created_at: window.base_date
                - Duration::days(rng.int_inclusive(0, catalog.product.created_lookback_days)),
            avg_rating: (rng.uniform(3.2, 4.8) * 10.0).round() / 10.0,
            total_reviews: rng.int_inclusive(0, 500),
            total_sales: rng.int_inclusive(0, 10_000),
        });
    }
    Ok(products)
}

pub struct ProductStage<'a> {
    pub count: usize,
    pub config: &'a GeneratorConfig,
}

impl GenerationStage for ProductStage<'_> {
    fn name(&self) -> &'static str {
        "products"
    }

    fn slot(&self) -> StageSlot {
        StageSlot::Product
    }

    fn run(&self, dataset: &mut Dataset, rng: &mut StageRng) -> GenResult<()> {
        let products =
            generate_products(self.count, &self.config.window, &self.config.catalog, rng)?;

        let mut per_category: BTreeMap<&str, usize> = BTreeMap::new();
        for p in &products {
            *per_category.entry(p.category_l1.as_str()).or_default() += 1;
        }
        log::info!(
            "product: generated {} products across {} categories",
            products.len(),
            per_category.len()
        );
        for (category, n) in &per_category {
            log::debug!("product:   {category}: {n}");
        }

        dataset.products = Some(products);
        Ok(())
    }
}
