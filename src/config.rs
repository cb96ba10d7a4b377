// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env, inputs};
use crate::error::{Result, SetupKindError};
use std::path::PathBuf;

/// Parameters for `kind create cluster`, taken from the action inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// kind release to use, e.g. `v0.20.0`
    pub version: String,
    /// Cluster config file, relative to the workspace root. Empty when unset.
    pub config_file: String,
    /// Node image override. Empty when unset.
    pub image: String,
    /// Cluster name. Empty when unset.
    pub name: String,
    /// Passed verbatim to `--wait`. Empty when unset.
    pub wait_duration: String,
    pub skip_creation: bool,
}

impl ClusterConfig {
    /// Build from raw input values. Only the literal string `"true"` enables `skip_creation`.
    pub fn new(
        version: impl Into<String>,
        config_file: impl Into<String>,
        image: impl Into<String>,
        name: impl Into<String>,
        wait_duration: impl Into<String>,
        skip_creation: &str,
    ) -> Self {
        Self {
            version: version.into(),
            config_file: config_file.into(),
            image: image.into(),
            name: name.into(),
            wait_duration: wait_duration.into(),
            skip_creation: skip_creation == "true",
        }
    }
}

/// Step configuration loaded from the runner environment
#[derive(Debug, Clone)]
pub struct Config {
    pub cluster: ClusterConfig,
    /// Root of the checked out repository, used to resolve the cluster config file
    pub workspace: PathBuf,
    /// Root of the runner's tool cache
    pub tool_cache: PathBuf,
    /// Scratch directory for downloads
    pub temp_dir: PathBuf,
    /// File that collects directories to add to PATH for later steps
    pub path_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = get_input(&lookup, inputs::VERSION);
        if version.is_empty() {
            return Err(SetupKindError::InvalidInput(format!(
                "input '{}' is required",
                inputs::VERSION
            )));
        }
        validate_version(&version)?;

        let cluster = ClusterConfig::new(
            version,
            get_input(&lookup, inputs::CONFIG),
            get_input(&lookup, inputs::IMAGE),
            get_input(&lookup, inputs::NAME),
            get_input(&lookup, inputs::WAIT),
            &get_input(&lookup, inputs::SKIP_CLUSTER_CREATION),
        );

        let workspace = match non_empty(&lookup, env::WORKSPACE) {
            Some(ws) => PathBuf::from(ws),
            None => std::env::current_dir()?,
        };

        let tool_cache = non_empty(&lookup, env::TOOL_CACHE)
            .map(PathBuf::from)
            .ok_or_else(|| {
                SetupKindError::InvalidInput(format!(
                    "{} environment variable not set",
                    env::TOOL_CACHE
                ))
            })?;

        let temp_dir = non_empty(&lookup, env::TEMP)
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        Ok(Config {
            cluster,
            workspace,
            tool_cache,
            temp_dir,
            path_file: non_empty(&lookup, env::PATH_FILE).map(PathBuf::from),
        })
    }
}

/// Check that `version` is usable as a release tag and a tool cache directory name
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(SetupKindError::InvalidInput(
            "kind version must not be empty".to_string(),
        ));
    }
    if version.contains('/') || version.contains('\\') || version.contains("..") {
        return Err(SetupKindError::InvalidInput(format!(
            "kind version '{}' must not contain path separators or '..'",
            version
        )));
    }
    Ok(())
}

/// Environment variable carrying an action input: `INPUT_` plus the upper-cased
/// name with spaces replaced by underscores.
fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

fn get_input<F>(lookup: &F, name: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&input_var(name))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}
