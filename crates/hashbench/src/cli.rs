// Copyright 2026 The Binius Developers
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
	algorithm::{AlgorithmId, DEFAULT_BLAKE2B_DIGEST_SIZE, HashAlgorithm},
	config::{DEFAULT_INPUT_SIZES, DEFAULT_ITERATION_COUNTS, SweepConfig},
	export::{CsvOptions, DisplayOptions, export_results, print_results},
	harness::{Harness, SweepResults},
};

/// Time SHA-256 and BLAKE2b over a grid of input sizes and iteration counts.
///
/// Each cell is the total wall-clock time of hashing a payload of the given size the given
/// number of times in a row.
#[derive(Parser, Debug, Clone)]
#[command(name = "hashbench", version)]
pub struct Cli {
	/// Payload sizes in bytes, one table column each.
	#[arg(long, value_delimiter = ',', default_values_t = DEFAULT_INPUT_SIZES)]
	pub input_sizes: Vec<usize>,

	/// Consecutive hash calls per measurement, one table row each.
	#[arg(long, value_delimiter = ',', default_values_t = DEFAULT_ITERATION_COUNTS)]
	pub iterations: Vec<u64>,

	/// Algorithms to measure, in output order.
	#[arg(long, value_enum, value_delimiter = ',', default_values_t = [AlgorithmId::Sha256, AlgorithmId::Blake2b])]
	pub algorithms: Vec<AlgorithmId>,

	/// BLAKE2b output size in bytes.
	#[arg(long, default_value_t = DEFAULT_BLAKE2B_DIGEST_SIZE)]
	pub blake2b_digest_size: usize,

	/// Directory the per-algorithm files are written to.
	#[arg(long, default_value = ".")]
	pub output_dir: PathBuf,

	/// Field delimiter of the exported files (a single ASCII character).
	#[arg(long, default_value_t = ',')]
	pub delimiter: char,

	/// Omit the iteration-count column from the exported files.
	#[arg(long)]
	pub no_index: bool,

	/// Print tables only; do not write any files.
	#[arg(long)]
	pub no_export: bool,

	/// Maximum rows printed per table before eliding the middle.
	#[arg(long, default_value_t = 100)]
	pub max_rows: usize,

	/// Maximum columns printed per table before eliding the middle.
	#[arg(long)]
	pub max_columns: Option<usize>,
}

impl Cli {
	pub fn sweep_config(&self) -> Result<SweepConfig> {
		let algorithms = self
			.algorithms
			.iter()
			.map(|&id| HashAlgorithm::from_id(id, self.blake2b_digest_size))
			.collect();
		SweepConfig::with_algorithms(self.input_sizes.clone(), self.iterations.clone(), algorithms)
			.context("invalid benchmark parameters")
	}

	pub fn csv_options(&self) -> Result<CsvOptions> {
		if !self.delimiter.is_ascii() {
			bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
		}
		Ok(CsvOptions {
			delimiter: self.delimiter as u8,
			include_index: !self.no_index,
		})
	}

	pub fn display_options(&self) -> DisplayOptions {
		DisplayOptions {
			max_rows: Some(self.max_rows),
			max_columns: self.max_columns,
			..Default::default()
		}
	}

	/// Runs the sweep, prints every table and, unless disabled, exports them.
	pub fn run(self) -> Result<SweepResults> {
		let config = self.sweep_config()?;
		let csv_options = self.csv_options()?;

		info!(
			input_sizes = ?config.input_sizes(),
			iterations = ?config.iteration_labels(),
			measurements = config.measurement_count(),
			"starting sweep"
		);
		let results = Harness::new(config).run().context("benchmark run failed")?;

		if !self.no_export {
			export_results(&results, &self.output_dir, &csv_options).with_context(|| {
				format!("failed to export results to {}", self.output_dir.display())
			})?;
		}
		print_results(&results, &self.display_options());
		Ok(results)
	}
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	// A subscriber may already be installed, e.g. by a test harness.
	let _ = fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}
