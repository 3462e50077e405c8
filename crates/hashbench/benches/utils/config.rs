// Copyright 2026 The Binius Developers
//! Benchmark configuration read from the environment

use hashbench::config::DEFAULT_INPUT_SIZES;

/// Default BLAKE2b output size for benchmarks
pub const DEFAULT_BENCH_DIGEST_SIZE: usize = 32;

/// Configuration for the per-call hash benchmarks
pub struct HashSweepBenchConfig {
	pub input_sizes: Vec<usize>,
	pub blake2b_digest_size: usize,
}

impl HashSweepBenchConfig {
	/// Reads `HASH_INPUT_SIZES` (comma separated) and `BLAKE2B_DIGEST_SIZE`.
	///
	/// Unparseable or zero entries are skipped; an empty result falls back to the defaults.
	pub fn from_env() -> Self {
		let input_sizes = std::env::var("HASH_INPUT_SIZES")
			.ok()
			.map(|s| {
				s.split(',')
					.filter_map(|part| part.trim().parse::<usize>().ok())
					.filter(|&size| size > 0)
					.collect::<Vec<_>>()
			})
			.filter(|sizes| !sizes.is_empty())
			.unwrap_or_else(|| DEFAULT_INPUT_SIZES.to_vec());
		let blake2b_digest_size = std::env::var("BLAKE2B_DIGEST_SIZE")
			.ok()
			.and_then(|s| s.parse::<usize>().ok())
			.unwrap_or(DEFAULT_BENCH_DIGEST_SIZE);
		Self {
			input_sizes,
			blake2b_digest_size,
		}
	}
}
