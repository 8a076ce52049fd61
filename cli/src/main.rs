//! CLI entrypoint for brain-api
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use brain_application::{BrainConfig, ProcessQueryUseCase};
use brain_domain::Severity;
use brain_infrastructure::{ConfigLoader, FileConfig, GeminiLlmGateway};
use brain_presentation::{Cli, build_router, serve, shutdown_signal};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn,brain_api=info,brain_presentation=info"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config: FileConfig = loaded.context("Failed to load configuration")?;

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Configuration has errors, refusing to start");
    }

    let Some(api_key) = config.gemini.resolve_api_key() else {
        bail!(
            "{} environment variable not set",
            config.gemini.api_key_env
        );
    };

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiLlmGateway::new(
        &config.gemini.to_client_config(api_key),
    )?);

    let brain_config = BrainConfig::default()
        .with_model(config.gemini.parse_model().0)
        .with_generation(config.gemini.to_generation_config());
    info!(
        model = %brain_config.model,
        temperature = brain_config.generation.temperature,
        "Starting brain-api"
    );

    let use_case = ProcessQueryUseCase::with_config(gateway, brain_config);
    let router = build_router(use_case);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    serve(listener, router, shutdown_signal())
        .await
        .context("Server error")?;

    info!("brain-api stopped");
    Ok(())
}
