// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of the kind binary: architecture naming, tool cache and download.

pub mod arch;
pub mod cache;
pub mod resolver;

pub use arch::{artifact_arch, host_arch};
pub use cache::ToolCache;
pub use resolver::ToolResolver;
