// Each configured report content exported through its sink.

use anyhow::Result;
use netreport::{config, telemetry, version};

fn main() -> Result<()> {
    telemetry::init();
    tracing::info!("{}", version::banner());

    let app_config = config::AppConfig::load()?;
    app_config.export.run(&mut std::io::stdout().lock())?;
    Ok(())
}
