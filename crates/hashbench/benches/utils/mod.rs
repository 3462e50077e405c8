// Copyright 2026 The Binius Developers
//! Shared utilities for benchmarks

pub mod config;
pub mod reporting;

pub use config::HashSweepBenchConfig;
pub use reporting::{print_benchmark_header, print_env_help};
