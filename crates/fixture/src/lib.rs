//! Text fixture for the shop: builds the standard inventory and prints it
//! day by day, calling the engine once per simulated day.

pub mod config;
pub mod report;
pub mod shop;

pub use config::{DAYS_ENV, DEFAULT_DAYS, FixtureConfig, OutputFormat};
pub use report::run;
pub use shop::standard_inventory;
