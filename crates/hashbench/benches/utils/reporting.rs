// Copyright 2026 The Binius Developers
//! Benchmark reporting utilities

use std::env;

use hashbench::config::DEFAULT_INPUT_SIZES;

use super::config::DEFAULT_BENCH_DIGEST_SIZE;

/// Print benchmark header with consistent formatting
pub fn print_benchmark_header(name: &str, params: &[(String, String)]) {
	println!("\n{} Benchmark Parameters:", name);
	for (key, value) in params {
		println!("  {}: {}", key, value);
	}
	println!("=======================================\n");
}

/// Print environment variable help
pub fn print_env_help() {
	if env::var("BENCH_HELP").is_ok() {
		println!("Available environment variables:");
		println!(
			"  HASH_INPUT_SIZES       - Comma separated payload sizes in bytes (default: {:?})",
			DEFAULT_INPUT_SIZES
		);
		println!(
			"  BLAKE2B_DIGEST_SIZE    - BLAKE2b output size in bytes (default: {})",
			DEFAULT_BENCH_DIGEST_SIZE
		);
		println!("  BENCH_HELP             - Show this help message");
		println!("\nCriterion benchmark timing flags:");
		println!("  --warm-up-time <secs>  - Warm-up time in seconds (e.g., --warm-up-time 0.5)");
		println!(
			"  --measurement-time <s> - Measurement time in seconds (e.g., --measurement-time 2)"
		);
		println!(
			"  --sample-size <n>      - Number of samples to collect (min: 10, e.g., --sample-size 10)"
		);
		println!("\nExample usage:");
		println!(
			"  HASH_INPUT_SIZES=64,4096 cargo bench --bench hash_sweep -- --warm-up-time 0.1 --measurement-time 0.5"
		);
		std::process::exit(0);
	}
}
