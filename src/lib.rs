// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
#[cfg(not(unix))]
compile_error!("setup-kind only runs on Linux runners");

pub mod action;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod error;
pub mod tools;
pub mod workflow;

#[cfg(test)]
mod test_utils;
