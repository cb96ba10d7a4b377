// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Runs `kind create cluster` with the configured parameters.

use crate::config::ClusterConfig;
use crate::error::{Result, SetupKindError};
use std::path::{Component, Path, PathBuf};
use tokio::process::Command;
use tracing::{info, instrument};

/// Arguments for `kind create cluster`, in a fixed order. The config file is
/// resolved against `workspace`, not the current directory.
pub fn create_cluster_args(cfg: &ClusterConfig, workspace: &Path) -> Vec<String> {
    let mut args = vec!["create".to_string(), "cluster".to_string()];

    if !cfg.config_file.is_empty() {
        let config_path = join_workspace(workspace, &cfg.config_file);
        args.push("--config".to_string());
        args.push(config_path.to_string_lossy().into_owned());
    }
    if !cfg.image.is_empty() {
        args.push("--image".to_string());
        args.push(cfg.image.clone());
    }
    if !cfg.name.is_empty() {
        args.push("--name".to_string());
        args.push(cfg.name.clone());
    }
    if !cfg.wait_duration.is_empty() {
        args.push("--wait".to_string());
        args.push(cfg.wait_duration.clone());
    }

    args
}

/// Join without keeping `.` segments, so `./kind.yaml` becomes `<workspace>/kind.yaml`
fn join_workspace(workspace: &Path, file: &str) -> PathBuf {
    workspace
        .join(file)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Creates the kind cluster
#[derive(Debug, Clone)]
pub struct ClusterLauncher {
    workspace: PathBuf,
}

impl ClusterLauncher {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    /// Run `kind create cluster` with `tool` and wait for it to exit.
    /// Does nothing when cluster creation is skipped.
    #[instrument(skip(self, cfg, tool), fields(tool = %tool.display()))]
    pub async fn launch(&self, cfg: &ClusterConfig, tool: &Path) -> Result<()> {
        if cfg.skip_creation {
            info!("Skipping cluster creation");
            return Ok(());
        }

        let args = create_cluster_args(cfg, &self.workspace);
        info!("Executing kind with args {}", args.join(" "));

        let status = Command::new(tool)
            .args(&args)
            .status()
            .await
            .map_err(|e| {
                SetupKindError::Launch(format!("Failed to start {}: {}", tool.display(), e))
            })?;

        if status.success() {
            info!("kind cluster created");
            return Ok(());
        }

        Err(SetupKindError::Launch(match status.code() {
            Some(code) => format!("kind exited with code {}", code),
            None => "kind was terminated by a signal".to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKSPACE: &str = "/home/runner/work/repo";

    fn make_cluster_config(config_file: &str, image: &str, name: &str, wait: &str) -> ClusterConfig {
        ClusterConfig::new("v0.20.0", config_file, image, name, wait, "false")
    }

    fn args(cfg: &ClusterConfig) -> Vec<String> {
        create_cluster_args(cfg, Path::new(WORKSPACE))
    }

    #[test]
    fn test_args_without_options() {
        let cfg = make_cluster_config("", "", "", "");
        assert_eq!(args(&cfg), vec!["create", "cluster"]);
    }

    #[test]
    fn test_args_config_joined_with_workspace() {
        let cfg = make_cluster_config("kind-config.yaml", "", "", "");
        assert_eq!(
            args(&cfg),
            vec![
                "create",
                "cluster",
                "--config",
                "/home/runner/work/repo/kind-config.yaml"
            ]
        );
    }

    #[test]
    fn test_args_config_in_subdirectory() {
        let cfg = make_cluster_config("./ci/kind.yaml", "", "", "");
        assert_eq!(args(&cfg)[3], "/home/runner/work/repo/ci/kind.yaml");
    }

    #[test]
    fn test_args_image_name_wait_order() {
        let cfg = make_cluster_config("", "kindest/node:v1.27.0", "ci", "90s");
        assert_eq!(
            args(&cfg),
            vec![
                "create",
                "cluster",
                "--image",
                "kindest/node:v1.27.0",
                "--name",
                "ci",
                "--wait",
                "90s"
            ]
        );
    }

    #[test]
    fn test_args_all_options() {
        let cfg = make_cluster_config("kind.yaml", "kindest/node:v1.27.0", "ci", "60s");
        assert_eq!(
            args(&cfg),
            vec![
                "create",
                "cluster",
                "--config",
                "/home/runner/work/repo/kind.yaml",
                "--image",
                "kindest/node:v1.27.0",
                "--name",
                "ci",
                "--wait",
                "60s"
            ]
        );
    }

    #[tokio::test]
    async fn test_launch_skipped_does_not_spawn() {
        let cfg = ClusterConfig::new("v0.20.0", "kind.yaml", "img", "ci", "60s", "true");
        let launcher = ClusterLauncher::new(WORKSPACE);

        // Spawning this path would fail, so Ok means nothing was started
        let result = launcher
            .launch(&cfg, Path::new("/nonexistent/bin/kind"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_launch_missing_binary() {
        let cfg = make_cluster_config("", "", "", "");
        let launcher = ClusterLauncher::new(WORKSPACE);

        let err = launcher
            .launch(&cfg, Path::new("/nonexistent/bin/kind"))
            .await
            .unwrap_err();
        assert!(matches!(err, SetupKindError::Launch(_)));
    }

    #[tokio::test]
    async fn test_launch_passes_args() {
        use crate::test_utils::{read_recorded_args, recording_script};

        let tmp = tempfile::tempdir().unwrap();
        let (tool, record) = recording_script(tmp.path(), 0);
        let cfg = make_cluster_config("kind.yaml", "", "ci", "");
        let launcher = ClusterLauncher::new(tmp.path());

        launcher.launch(&cfg, &tool).await.unwrap();

        let expected_config = tmp.path().join("kind.yaml").to_string_lossy().into_owned();
        assert_eq!(
            read_recorded_args(&record),
            vec!["create", "cluster", "--config", expected_config.as_str(), "--name", "ci"]
        );
    }

    #[tokio::test]
    async fn test_launch_nonzero_exit() {
        use crate::test_utils::recording_script;

        let tmp = tempfile::tempdir().unwrap();
        let (tool, _) = recording_script(tmp.path(), 3);
        let cfg = make_cluster_config("", "", "", "");
        let launcher = ClusterLauncher::new(tmp.path());

        let err = launcher.launch(&cfg, &tool).await.unwrap_err();
        assert!(matches!(err, SetupKindError::Launch(_)));
        assert!(err.to_string().contains("code 3"));
    }
}
