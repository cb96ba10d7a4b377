// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster creation through the kind CLI.

pub mod launcher;

pub use launcher::{create_cluster_args, ClusterLauncher};
