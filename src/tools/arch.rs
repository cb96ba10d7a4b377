// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Architecture naming.
//!
//! Runner architecture names (`x64`, `arm64`, `ppc64`, ...) are mapped to the
//! names used in kind release artifacts. Anything not listed passes through.

/// Rust target architecture -> runner architecture name
const HOST_ARCH_NAMES: &[(&str, &str)] = &[
    ("x86_64", "x64"),
    ("x86", "ia32"),
    ("aarch64", "arm64"),
    ("powerpc64", "ppc64"),
];

/// Runner architecture name -> release artifact architecture.
/// `arm` maps to `arm64`; kind publishes no 32-bit ARM build.
const ARTIFACT_ARCH_NAMES: &[(&str, &str)] = &[
    ("x64", "amd64"),
    ("ppc64", "ppc64le"),
    ("arm", "arm64"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Architecture of the running host, in runner naming
pub fn host_arch() -> &'static str {
    let arch = std::env::consts::ARCH;
    lookup(HOST_ARCH_NAMES, arch).unwrap_or(arch)
}

/// Artifact architecture for a runner architecture name
pub fn artifact_arch(host: &str) -> &str {
    lookup(ARTIFACT_ARCH_NAMES, host).unwrap_or(host)
}
