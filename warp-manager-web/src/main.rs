//! Warp Account Manager entry point
//!
//! Without a subcommand: serve the management page on loopback.
//! With a subcommand: print one console command and exit.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use warp_manager_web::cli::Cli;
use warp_manager_web::config::ServerConfig;
use warp_manager_web::{render, server};

const DEFAULT_LOG_FILTER: &str = "info,warp_manager_web=debug";

#[actix_web::main]
async fn main() -> ExitCode {
    // stdout is reserved for rendered commands
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        return match render::render(command, &mut std::io::stdin().lock()) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let config = match ServerConfig::resolve(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting Warp Account Manager");
    if let Err(e) = server::run(config).await {
        tracing::error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
