//! warehouse-gen: generate the raw e-commerce warehouse tables.
//!
//! Usage:
//!   warehouse-gen --seed 42 --scale quick
//!   warehouse-gen --base-date 2023-01-01 --end-date 2024-06-30 --orders 50000 --sqlite warehouse.db
//!   warehouse-gen --catalog my_catalog.json --no-report

use anyhow::{Context, Result};
use clap::Parser;
use ecomm_core::{
    config::{Catalog, GeneratorConfig, Scale, TableSizes},
    export::write_csv_tables,
    generator::DatasetGenerator,
    quality_report::QualityReport,
    store::WarehouseStore,
    types::{parse_date, DateWindow},
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "warehouse-gen")]
#[command(about = "Generate a synthetic e-commerce warehouse dataset", long_about = None)]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value = "42")]
    seed: u64,

    /// First day of the generated window (YYYY-MM-DD)
    #[arg(long, default_value = "2023-01-01")]
    base_date: String,

    /// Last day of the generated window (YYYY-MM-DD, default: today)
    #[arg(long)]
    end_date: Option<String>,

    /// Size preset: quick, standard, production
    #[arg(short, long, default_value = "standard")]
    scale: Scale,

    /// Override the number of customers
    #[arg(long)]
    customers: Option<usize>,

    /// Override the number of products
    #[arg(long)]
    products: Option<usize>,

    /// Override the number of orders
    #[arg(long)]
    orders: Option<usize>,

    /// Override the number of web sessions
    #[arg(long)]
    sessions: Option<usize>,

    /// Directory for the CSV files
    #[arg(short, long, default_value = "data/raw")]
    output_dir: PathBuf,

    /// Path of the data-quality report
    #[arg(long, default_value = "data/data_quality_report.json")]
    report: PathBuf,

    /// Skip the data-quality report
    #[arg(long)]
    no_report: bool,

    /// Also bulk-load every table into this SQLite database
    #[arg(long)]
    sqlite: Option<String>,

    /// JSON catalog replacing the built-in lookup tables
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl Args {
    fn sizes(&self) -> TableSizes {
        let preset = self.scale.sizes();
        TableSizes {
            customers: self.customers.unwrap_or(preset.customers),
            products: self.products.unwrap_or(preset.products),
            orders: self.orders.unwrap_or(preset.orders),
            sessions: self.sessions.unwrap_or(preset.sessions),
        }
    }

    fn window(&self) -> Result<DateWindow> {
        let base = parse_date(&self.base_date)?;
        let end = match &self.end_date {
            Some(raw) => parse_date(raw)?,
            None => chrono::Local::now().date_naive(),
        };
        Ok(DateWindow::new(base, end)?)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let window = args.window()?;
    let sizes = args.sizes();
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::standard(),
    };

    println!("warehouse-gen");
    println!("  seed:       {}", args.seed);
    println!("  window:     {} .. {}", window.base_date, window.end_date);
    println!(
        "  sizes:      {} customers, {} products, {} orders, {} sessions",
        sizes.customers, sizes.products, sizes.orders, sizes.sessions
    );
    println!("  output:     {}", args.output_dir.display());
    println!();

    let generator = DatasetGenerator::new(GeneratorConfig::new(args.seed, window).with_catalog(catalog))?;
    let dataset = generator.generate_complete(sizes)?;

    let files = write_csv_tables(&dataset, &args.output_dir)
        .with_context(|| format!("writing CSV files to {}", args.output_dir.display()))?;
    for file in &files {
        println!("  wrote {}", file.display());
    }

    if !args.no_report {
        let report = QualityReport::build(&dataset, &window)?;
        report
            .write_to(&args.report)
            .with_context(|| format!("writing report to {}", args.report.display()))?;
        println!("  wrote {}", args.report.display());
    }

    if let Some(db) = &args.sqlite {
        let mut store = WarehouseStore::open(db)?;
        store.migrate()?;
        store
            .load_dataset(&dataset)
            .with_context(|| format!("loading dataset into {db}"))?;
        println!("  loaded {db}");
    }

    let summary = dataset.summary();
    log::info!("summary: {}", serde_json::to_string(&summary)?);
    println!();
    println!("=== Dataset summary ===");
    println!("{summary}");
    Ok(())
}
