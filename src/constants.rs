// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the tool, used for the binary file name and the tool cache key
pub const TOOL_NAME: &str = "kind";

/// Release download location for kind binaries
pub const DOWNLOAD_BASE_URL: &str = "https://github.com/kubernetes-sigs/kind/releases/download";

/// Operating system component of the release artifact name. Runners are always Linux.
pub const ARTIFACT_OS: &str = "linux";

/// Action input names
pub mod inputs {
    pub const VERSION: &str = "version";
    pub const CONFIG: &str = "config";
    pub const IMAGE: &str = "image";
    pub const NAME: &str = "name";
    pub const WAIT: &str = "wait";
    pub const SKIP_CLUSTER_CREATION: &str = "skipClusterCreation";
}

/// Environment variables provided by the runner
pub mod env {
    pub const WORKSPACE: &str = "GITHUB_WORKSPACE";
    pub const TOOL_CACHE: &str = "RUNNER_TOOL_CACHE";
    pub const TEMP: &str = "RUNNER_TEMP";
    pub const PATH_FILE: &str = "GITHUB_PATH";
    pub const DEBUG: &str = "RUNNER_DEBUG";
}
