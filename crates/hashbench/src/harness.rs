// Copyright 2026 The Binius Developers
//! The sweep driver.
//!
//! For every input size a payload of that many [`PAYLOAD_BYTE`]s is built once. For every
//! iteration count each configured algorithm is then timed over that payload, and the total is
//! recorded at `(iteration count, input size)` in the algorithm's table. Any failure aborts the
//! whole run; nothing is retried and no partial tables are returned.

use std::hint::black_box;

use tracing::{debug, info, info_span};

use crate::{
	algorithm::{AlgorithmId, HashAlgorithm},
	config::{PAYLOAD_BYTE, SweepConfig},
	error::{HashError, Result},
	table::{ResultTable, TableBuilder},
	timer::{Timer, WallClock},
};

pub struct Harness<T = WallClock> {
	config: SweepConfig,
	timer: T,
}

impl Harness<WallClock> {
	pub fn new(config: SweepConfig) -> Self {
		Self::with_timer(config, WallClock)
	}
}

impl<T: Timer> Harness<T> {
	pub fn with_timer(config: SweepConfig, timer: T) -> Self {
		Self { config, timer }
	}

	pub fn config(&self) -> &SweepConfig {
		&self.config
	}

	/// Runs the full sweep and returns one finalized table per configured algorithm.
	pub fn run(&mut self) -> Result<SweepResults> {
		let _span = info_span!(
			"sweep",
			input_sizes = self.config.input_sizes().len(),
			iteration_counts = self.config.iteration_counts().len(),
			algorithms = self.config.algorithms().len(),
		)
		.entered();

		let iteration_labels = self.config.iteration_labels();
		let mut builders = self
			.config
			.algorithms()
			.iter()
			.map(|_| TableBuilder::new(self.config.input_sizes(), &iteration_labels))
			.collect::<Vec<_>>();

		for &input_size in self.config.input_sizes() {
			let payload = vec![PAYLOAD_BYTE; input_size];
			for &repetitions in self.config.iteration_counts() {
				for (algorithm, builder) in self.config.algorithms().iter().zip(&mut builders) {
					let elapsed = self.timer.measure(repetitions, &mut || -> Result<(), HashError> {
						black_box(algorithm.hash(black_box(&payload))?);
						Ok(())
					})?;
					debug!(
						%algorithm,
						input_size,
						iterations = repetitions.get(),
						elapsed_secs = elapsed.as_secs_f64(),
						"measured"
					);
					builder.record(input_size, repetitions.get(), elapsed)?;
				}
			}
		}

		let tables = self
			.config
			.algorithms()
			.iter()
			.zip(builders)
			.map(|(&algorithm, builder)| -> Result<_> {
				let table = builder.finalize()?;
				info!(%algorithm, rows = table.n_rows(), cols = table.n_cols(), "table finalized");
				Ok((algorithm, table))
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(SweepResults { tables })
	}
}

/// Finalized tables of one run, in configured algorithm order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResults {
	tables: Vec<(HashAlgorithm, ResultTable)>,
}

impl SweepResults {
	pub fn get(&self, id: AlgorithmId) -> Option<&ResultTable> {
		self.tables
			.iter()
			.find(|(algorithm, _)| algorithm.id() == id)
			.map(|(_, table)| table)
	}

	pub fn sha256(&self) -> Option<&ResultTable> {
		self.get(AlgorithmId::Sha256)
	}

	pub fn blake2b(&self) -> Option<&ResultTable> {
		self.get(AlgorithmId::Blake2b)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&HashAlgorithm, &ResultTable)> {
		self.tables.iter().map(|(algorithm, table)| (algorithm, table))
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}
