use anyhow::Context;
use shorturl::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level, &config.log_format)?;

    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{log_level}'"))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
