// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use setup_kind::action;
use setup_kind::config::Config;
use setup_kind::constants::env;
use setup_kind::tools::{ToolCache, ToolResolver};
use setup_kind::workflow::error_annotation;

#[tokio::main]
async fn main() -> ExitCode {
    // Step debug logging on the runner turns on debug output unless RUST_LOG says otherwise
    let default_level = match std::env::var(env::DEBUG).as_deref() {
        Ok("1") => "debug",
        _ => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    // Reported once, as the annotation
    match setup().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", error_annotation(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn setup() -> Result<()> {
    let config = Config::from_env().context("Failed to load step configuration")?;
    info!(
        "Configuration loaded: version={}, skip_cluster_creation={}",
        config.cluster.version, config.cluster.skip_creation
    );

    let resolver = ToolResolver::new(ToolCache::new(&config.tool_cache), &config.temp_dir)?;
    let tool = action::run(&config, &resolver).await?;
    info!("kind {} ready at {}", config.cluster.version, tool.display());

    Ok(())
}
