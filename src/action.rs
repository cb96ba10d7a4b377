// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The step itself: resolve kind, expose it on PATH, create the cluster.

use crate::cluster::ClusterLauncher;
use crate::config::Config;
use crate::error::Result;
use crate::tools::ToolResolver;
use crate::workflow;
use std::path::PathBuf;
use tracing::instrument;

/// Run the step and return the path of the kind binary that was used
#[instrument(skip_all, fields(version = %config.cluster.version))]
pub async fn run(config: &Config, resolver: &ToolResolver) -> Result<PathBuf> {
    let tool = resolver.resolve(&config.cluster.version).await?;

    if let (Some(path_file), Some(dir)) = (&config.path_file, tool.parent()) {
        workflow::add_path(path_file, dir).await?;
    }

    ClusterLauncher::new(&config.workspace)
        .launch(&config.cluster, &tool)
        .await?;

    Ok(tool)
}
