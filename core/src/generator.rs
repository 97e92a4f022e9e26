//! The dataset generator: runs the stages that build the warehouse tables.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Customers        (dimension)
//!   2. Products         (dimension)
//!   3. Orders + items   (fact, needs 1 and 2)
//!   4. Web sessions     (fact, attributes to 1 when present)
//!   5. Marketing spend  (fact, one row per day and channel)
//!
//! RULES:
//!   - Each stage reads only tables produced by earlier stages.
//!   - No stage calls another stage directly.
//!   - All randomness flows through the RngBank, one stream per stage.

use crate::{
    config::{GeneratorConfig, TableSizes},
    customer_generator::CustomerStage,
    dataset::Dataset,
    error::GenResult,
    marketing_generator::MarketingStage,
    order_generator::OrderStage,
    product_generator::ProductStage,
    rng::RngBank,
    session_generator::WebSessionStage,
    stage::GenerationStage,
};

pub struct DatasetGenerator {
    config: GeneratorConfig,
    rng_bank: RngBank,
}

impl DatasetGenerator {
    /// Validate the catalog once; stages assume it is sound.
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        config.catalog.validate()?;
        Ok(Self {
            rng_bank: RngBank::new(config.seed),
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate_customers(&self, dataset: &mut Dataset, count: usize) -> GenResult<()> {
        self.run_stage(&CustomerStage { count, config: &self.config }, dataset)
    }

    pub fn generate_products(&self, dataset: &mut Dataset, count: usize) -> GenResult<()> {
        self.run_stage(&ProductStage { count, config: &self.config }, dataset)
    }

    /// Orders and their line items. Needs customers and products.
    pub fn generate_orders(&self, dataset: &mut Dataset, count: usize) -> GenResult<()> {
        self.run_stage(&OrderStage { count, config: &self.config }, dataset)
    }

    pub fn generate_web_sessions(&self, dataset: &mut Dataset, count: usize) -> GenResult<()> {
        self.run_stage(&WebSessionStage { count, config: &self.config }, dataset)
    }

    pub fn generate_marketing_spend(&self, dataset: &mut Dataset) -> GenResult<()> {
        self.run_stage(&MarketingStage { config: &self.config }, dataset)
    }

    /// Every table, in execution order.
    pub fn generate_complete(&self, sizes: TableSizes) -> GenResult<Dataset> {
        let window = &self.config.window;
        log::info!(
            "generator: seed {} over {} .. {} ({} days)",
            self.config.seed,
            window.base_date,
            window.end_date,
            window.day_count()
        );
        let mut dataset = Dataset::new();
        self.generate_customers(&mut dataset, sizes.customers)?;
        self.generate_products(&mut dataset, sizes.products)?;
        self.generate_orders(&mut dataset, sizes.orders)?;
        self.generate_web_sessions(&mut dataset, sizes.sessions)?;
        self.generate_marketing_spend(&mut dataset)?;
        for (table, rows) in dataset.row_counts() {
            log::debug!("generator:   {table}: {rows} rows");
        }
        Ok(dataset)
    }

    /// Run one stage on its own fresh RNG stream. A stage called twice
    /// with the same inputs produces the same table.
    fn run_stage(&self, stage: &dyn GenerationStage, dataset: &mut Dataset) -> GenResult<()> {
        let mut rng = self.rng_bank.for_stage(stage.slot());
        log::debug!("generator: running stage '{}' on stream '{}'", stage.name(), rng.name);
        stage.run(dataset, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Catalog, error::GenError, types::DateWindow};

    fn config(seed: u64) -> GeneratorConfig {
        GeneratorConfig::new(seed, DateWindow::parse("2023-01-01", "2023-02-28").unwrap())
    }

    #[test]
    fn invalid_catalog_is_rejected_up_front() {
        let mut catalog = Catalog::standard();
        catalog.conversion_rates.email = 1.5;
        let result = DatasetGenerator::new(config(1).with_catalog(catalog));
        assert!(matches!(result, Err(GenError::InvalidConfig { .. })));
    }

    #[test]
    fn table_sizes_do_not_perturb_other_stages() {
        let gen = DatasetGenerator::new(config(7)).unwrap();
        let small = gen
            .generate_complete(TableSizes { customers: 50, products: 20, orders: 10, sessions: 10 })
            .unwrap();
        let large = gen
            .generate_complete(TableSizes { customers: 50, products: 20, orders: 400, sessions: 10 })
            .unwrap();
        assert_eq!(small.web_sessions, large.web_sessions);
        assert_eq!(small.marketing_spend, large.marketing_spend);
        assert_ne!(small.orders, large.orders);
    }

    #[test]
    fn orders_before_customers_fail_without_attaching() {
        let gen = DatasetGenerator::new(config(3)).unwrap();
        let mut dataset = Dataset::new();
        let err = gen.generate_orders(&mut dataset, 5).unwrap_err();
        assert!(matches!(err, GenError::PreconditionFailed { missing: "customers", .. }));

        gen.generate_customers(&mut dataset, 5).unwrap();
        let err = gen.generate_orders(&mut dataset, 5).unwrap_err();
        assert!(matches!(err, GenError::PreconditionFailed { missing: "products", .. }));
        assert!(dataset.orders.is_none());
        assert_eq!(dataset.customers.as_ref().map(Vec::len), Some(5));
    }

    #[test]
    fn failed_stage_keeps_earlier_tables() {
        let gen = DatasetGenerator::new(config(4)).unwrap();
        let mut dataset = Dataset::new();
        gen.generate_customers(&mut dataset, 100).unwrap();
        gen.generate_products(&mut dataset, 50).unwrap();
        let customers = dataset.customers.clone();
        let products = dataset.products.clone();

        let err = gen.generate_orders(&mut dataset, 0).unwrap_err();
        assert!(matches!(err, GenError::InvalidArgument(_)));
        assert!(dataset.orders.is_none() && dataset.order_items.is_none());
        assert_eq!(dataset.customers, customers);
        assert_eq!(dataset.products, products);

        // The same context carries on once the caller fixes the count.
        gen.generate_orders(&mut dataset, 10).unwrap();
        assert_eq!(dataset.orders.as_ref().map(Vec::len), Some(10));
    }
}
