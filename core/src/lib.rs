//! Synthetic e-commerce warehouse data: customers, products, orders,
//! web sessions and marketing spend, generated deterministically from a
//! single seed, with CSV and SQLite sinks and a data-quality report.

pub mod config;
pub mod contact_generator;
pub mod customer_generator;
pub mod dataset;
pub mod error;
pub mod export;
pub mod generator;
pub mod marketing_generator;
pub mod name_generator;
pub mod order_generator;
pub mod product_generator;
pub mod quality_report;
pub mod rng;
pub mod session_generator;
pub mod stage;
pub mod store;
pub mod types;
