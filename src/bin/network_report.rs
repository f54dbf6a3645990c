// Resource utilization and performance reports over the configured inventory.

use anyhow::Result;
use netreport::{config, report, telemetry, version};

fn main() -> Result<()> {
    telemetry::init();
    tracing::info!("{}", version::banner());

    let app_config = config::AppConfig::load()?;
    let components = app_config.inventory.components();
    report::write_all(&components, &mut std::io::stdout().lock())?;
    Ok(())
}
