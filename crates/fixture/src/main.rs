use clap::Parser;

use gilded_rose_fixture::FixtureConfig;

fn main() -> anyhow::Result<()> {
    let config = FixtureConfig::parse();
    gilded_rose_observability::init();
    tracing::info!(days = config.days, format = ?config.format, "running fixture");

    let stdout = std::io::stdout();
    gilded_rose_fixture::run(&config, &mut stdout.lock())?;
    Ok(())
}
