use acaraus::cli::Args;
use acaraus::logging::init_tracing;
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = args.load_config().context("Failed to load configuration")?;
    if config.news.api_key.is_none() {
        tracing::warn!("No API key configured; requests will likely be rejected");
    }

    acaraus::ui::run(config).await.context("Terminal UI failed")?;
    Ok(())
}
