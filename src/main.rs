use std::sync::Arc;

use clap::Parser;

use catswipe::cli::Cli;
use catswipe::logging::init_tracing;
use catswipe::provider::CatApiClient;
use catswipe::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!(
        api = %config.api.base_url,
        batch_size = config.api.batch_size,
        "Starting catswipe"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let provider = Arc::new(CatApiClient::new(&config.api)?);

    runtime::run(config, provider, tokio_runtime.handle().clone())?;
    Ok(())
}
