// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Workflow commands understood by the runner.

use crate::error::Result;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Escape a message for use in a `::command::` line
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::error::` annotation that marks the step as failed in the run summary
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Append `dir` to the runner's PATH file so later steps can find the tool
pub async fn add_path(path_file: &Path, dir: &Path) -> Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path_file)
        .await?;
    file.write_all(format!("{}\n", dir.display()).as_bytes())
        .await?;
    file.flush().await?;

    debug!("Added {} to PATH", dir.display());
    Ok(())
}
