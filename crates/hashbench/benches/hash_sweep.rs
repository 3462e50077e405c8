// Copyright 2026 The Binius Developers
//! Per-call SHA-256 and BLAKE2b benchmark over the sweep's input sizes

mod utils;

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashbench::{HashAlgorithm, config::PAYLOAD_BYTE};
use utils::{HashSweepBenchConfig, print_benchmark_header, print_env_help};

fn bench_hash_sweep(c: &mut Criterion) {
	print_env_help();
	let config = HashSweepBenchConfig::from_env();
	let algorithms = [
		HashAlgorithm::Sha256,
		HashAlgorithm::Blake2b {
			digest_size: config.blake2b_digest_size,
		},
	];

	let params_list = vec![
		("Input sizes".to_string(), format!("{:?} bytes", config.input_sizes)),
		("Algorithms".to_string(), algorithms.map(|a| a.to_string()).join(", ")),
	];
	print_benchmark_header("Hash sweep", &params_list);

	let mut group = c.benchmark_group("hash_sweep");
	for &size in &config.input_sizes {
		let payload = vec![PAYLOAD_BYTE; size];
		group.throughput(Throughput::Bytes(size as u64));
		for algorithm in &algorithms {
			group.bench_with_input(
				BenchmarkId::new(algorithm.to_string(), size),
				&payload,
				|b, payload| {
					b.iter(|| {
						algorithm
							.hash(black_box(payload))
							.expect("digest size rejected by the primitive")
					})
				},
			);
		}
	}
	group.finish();
}

criterion_group!(hash_sweep, bench_hash_sweep);
criterion_main!(hash_sweep);
