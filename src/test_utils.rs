// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for standing in for the kind binary.

use std::path::{Path, PathBuf};

/// Write an executable shell script into `dir` that records its arguments,
/// one per line, and exits with `exit_code`.
/// Returns the script path and the path of the argument record.
pub fn recording_script(dir: &Path, exit_code: i32) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-kind");
    let record = dir.join("fake-kind.args");
    let body = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {}\n",
        record.display(),
        exit_code
    );
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    (script, record)
}

/// Arguments captured by a [`recording_script`] run
pub fn read_recorded_args(record: &Path) -> Vec<String> {
    std::fs::read_to_string(record)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
