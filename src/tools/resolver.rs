// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Locates a kind binary in the tool cache, downloading it on a miss.

use crate::constants::{ARTIFACT_OS, DOWNLOAD_BASE_URL, TOOL_NAME};
use crate::config::validate_version;
use crate::error::{Result, SetupKindError};
use crate::tools::arch::{artifact_arch, host_arch};
use crate::tools::cache::ToolCache;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};
use url::Url;

pub struct ToolResolver {
    client: Client,
    cache: ToolCache,
    temp_dir: PathBuf,
    base_url: String,
    /// Runner architecture name, the tool cache key
    host_arch: String,
    /// Release artifact architecture
    arch: String,
}

impl ToolResolver {
    /// Resolver for the running host's architecture
    pub fn new(cache: ToolCache, temp_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("setup-kind/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SetupKindError::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            cache,
            temp_dir: temp_dir.into(),
            base_url: DOWNLOAD_BASE_URL.to_string(),
            host_arch: host_arch().to_string(),
            arch: artifact_arch(host_arch()).to_string(),
        })
    }

    /// Resolve for the given runner architecture name instead of the host's
    pub fn with_host_arch(mut self, host: &str) -> Self {
        self.host_arch = host.to_string();
        self.arch = artifact_arch(host).to_string();
        self
    }

    /// Download releases from a different location
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Release URL of the kind binary for `version`
    pub fn download_url(&self, version: &str) -> Result<Url> {
        let raw = format!(
            "{}/{}/{}-{}-{}",
            self.base_url.trim_end_matches('/'),
            version,
            TOOL_NAME,
            ARTIFACT_OS,
            self.arch
        );
        Url::parse(&raw)
            .map_err(|e| SetupKindError::InvalidInput(format!("Invalid download URL {}: {}", raw, e)))
    }

    /// Path to an executable kind binary for `version`, downloading and
    /// caching it if it is not cached yet.
    #[instrument(skip(self), fields(arch = %self.host_arch))]
    pub async fn resolve(&self, version: &str) -> Result<PathBuf> {
        validate_version(version)?;

        if let Some(path) = self.cache.find(TOOL_NAME, version, &self.host_arch).await {
            info!("Using cached kind {} from {}", version, path.display());
            return Ok(path);
        }

        let url = self.download_url(version)?;
        info!("Downloading kind from {}", url);
        let download = self.download(&url).await?;

        make_executable(download.path()).await?;

        let path = self
            .cache
            .store(download.path(), TOOL_NAME, version, &self.host_arch)
            .await?;
        debug!("kind is cached under {}", path.display());

        Ok(path)
    }

    /// Fetch `url` into a temporary file. The file is removed when the handle drops.
    async fn download(&self, url: &Url) -> Result<NamedTempFile> {
        tokio::fs::create_dir_all(&self.temp_dir).await?;
        let target = tempfile::Builder::new()
            .prefix("kind-")
            .tempfile_in(&self.temp_dir)?;

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SetupKindError::Download(format!("Request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(SetupKindError::Download(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let mut file = tokio::fs::File::from_std(target.reopen()?);
        let mut written: u64 = 0;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SetupKindError::Download(format!("Failed to read {}: {}", url, e)))?
        {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        debug!("Downloaded {} bytes to {}", written, target.path().display());

        Ok(target)
    }
}

/// Add the execute bits to `path`, like `chmod +x`
async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let to_error =
        |e: std::io::Error| SetupKindError::Permission(format!("{}: {}", path.display(), e));

    let mut perms = tokio::fs::metadata(path).await.map_err(to_error)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    tokio::fs::set_permissions(path, perms).await.map_err(to_error)
}
