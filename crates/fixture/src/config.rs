//! Fixture configuration (command line + environment).

use clap::{Parser, ValueEnum};

/// Environment variable holding the default day count.
pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";

/// Days simulated when neither the command line nor the environment say.
pub const DEFAULT_DAYS: u32 = 2;

/// Output format for the daily report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `name, sellIn, quality` lines under a day banner.
    #[default]
    Text,
    /// One JSON object per day.
    Json,
}

/// Print the shop inventory day by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Parser)]
#[command(name = "gilded-rose-fixture", version)]
pub struct FixtureConfig {
    /// Number of days to simulate.
    #[arg(env = DAYS_ENV, default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::Text,
        }
    }
}
