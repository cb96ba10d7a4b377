// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Runner tool cache.
//!
//! Layout: `<root>/<tool>/<version>/<arch>/<tool>`, with a sibling
//! `<root>/<tool>/<version>/<arch>.complete` marker written once the entry is
//! fully populated. Entries without the marker are treated as absent.

use crate::error::{Result, SetupKindError};
use semver::Version;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ToolCache {
    root: PathBuf,
}

impl ToolCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn version_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.root.join(tool).join(clean_version(version))
    }

    /// Directory holding the cached binary
    pub fn tool_dir(&self, tool: &str, version: &str, arch: &str) -> PathBuf {
        self.version_dir(tool, version).join(arch)
    }

    fn marker_path(&self, tool: &str, version: &str, arch: &str) -> PathBuf {
        self.version_dir(tool, version)
            .join(format!("{}.complete", arch))
    }

    /// Path of the cached binary, if a complete entry exists
    pub async fn find(&self, tool: &str, version: &str, arch: &str) -> Option<PathBuf> {
        let marker = self.marker_path(tool, version, arch);
        let binary = self.tool_dir(tool, version, arch).join(tool);

        if exists(&marker).await && exists(&binary).await {
            Some(binary)
        } else {
            debug!("{} {} ({}) not found in tool cache", tool, version, arch);
            None
        }
    }

    /// Copy `source` into the cache as the binary for (tool, version, arch),
    /// replacing any incomplete entry, and return the cached binary path.
    pub async fn store(&self, source: &Path, tool: &str, version: &str, arch: &str) -> Result<PathBuf> {
        let dir = self.tool_dir(tool, version, arch);
        let marker = self.marker_path(tool, version, arch);

        remove_if_exists(&marker).await?;
        if exists(&dir).await {
            fs::remove_dir_all(&dir).await.map_err(|e| {
                SetupKindError::Cache(format!("Failed to clear {}: {}", dir.display(), e))
            })?;
        }
        fs::create_dir_all(&dir).await.map_err(|e| {
            SetupKindError::Cache(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let binary = dir.join(tool);
        fs::copy(source, &binary).await.map_err(|e| {
            SetupKindError::Cache(format!(
                "Failed to copy {} to {}: {}",
                source.display(),
                binary.display(),
                e
            ))
        })?;

        fs::write(&marker, b"").await.map_err(|e| {
            SetupKindError::Cache(format!("Failed to write {}: {}", marker.display(), e))
        })?;

        Ok(binary)
    }
}

/// Version directory name: the semver form without a leading `v` when the
/// input parses, the input unchanged otherwise.
pub fn clean_version(version: &str) -> String {
    let trimmed = version.trim();
    let candidate = trimmed
        .strip_prefix('=')
        .unwrap_or(trimmed)
        .trim_start_matches('v');

    match Version::parse(candidate) {
        Ok(v) => v.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

async fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SetupKindError::Cache(format!(
            "Failed to remove {}: {}",
            path.display(),
            e
        ))),
    }
}
