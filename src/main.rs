use anyhow::Result;
use tracing_subscriber::EnvFilter;

use name_days::{pipeline, Config, VERSION};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        version = VERSION,
        input = %config.name_days.display(),
        output = %config.output.display(),
        "Processing name days"
    );

    let report = pipeline::run(&config)?;
    tracing::info!("{}", report.summary());

    Ok(())
}
