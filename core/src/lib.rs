//! KPI Desk core — derived metrics behind the analytics dashboards.
//!
//! Three pieces:
//!   - `aggregator`: totals, variance, group sums and percentage fields
//!   - `filter` / `sort`: the table view engine
//!   - `scenario`: what-if scenario selection with save/restore history
//!
//! Nothing here does I/O except the config and seed loaders.

pub mod aggregator;
pub mod clock;
pub mod command;
pub mod compensation;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod filter;
pub mod import;
pub mod name_generator;
pub mod record;
pub mod rng;
pub mod scenario;
pub mod seed;
pub mod snapshot;
pub mod sort;
pub mod types;
