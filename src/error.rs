// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupKindError {
    #[error("Failed to download kind: {0}")]
    Download(String),

    #[error("Failed to make kind executable: {0}")]
    Permission(String),

    #[error("kind create cluster failed: {0}")]
    Launch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Tool cache error: {0}")]
    Cache(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SetupKindError>;
