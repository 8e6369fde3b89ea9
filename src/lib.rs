pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod domain;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod services;

use anyhow::Context;
use cli::Commands;
pub use config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use normalizer::normalize;

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn init_metrics(config: &Config) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    use metrics_exporter_prometheus::PrometheusBuilder;
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");
    Ok(Some(handle))
}

/// Runs one subcommand. `config` is already validated when the command
/// loads one, and is the default otherwise.
pub async fn run(command: Commands, mut config: Config) -> anyhow::Result<()> {
    // Keep stdout clean for piping JSON out of `fetch` and `normalize`.
    if matches!(command, Commands::Fetch { .. } | Commands::Normalize { .. })
        && std::env::var_os("RUST_LOG").is_none()
    {
        config.general.log_level = "warn".to_string();
    }

    init_tracing(&config);

    match command {
        Commands::Serve => {
            let prometheus_handle = init_metrics(&config)?;
            cli::commands::cmd_serve(config, prometheus_handle).await
        }

        Commands::Fetch { target } => cli::commands::cmd_fetch(&config, &target).await,

        Commands::Normalize { file } => cli::commands::cmd_normalize(file.as_deref()),

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }
    }
}
