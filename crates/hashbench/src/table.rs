// Copyright 2026 The Binius Developers
//! Result tables: elapsed seconds indexed by iteration count (rows) and input size (columns).

use std::time::Duration;

use crate::error::TableError;

/// Name of the row axis.
pub const ROW_AXIS: &str = "Iterations";
/// Name of the column axis.
pub const COLUMN_AXIS: &str = "Input size";
/// Decimal places kept in finalized tables.
pub const DECIMALS: i32 = 4;

/// Rounds `value` half away from zero to [`DECIMALS`] places.
pub fn round_value(value: f64) -> f64 {
	let scale = 10f64.powi(DECIMALS);
	(value * scale).round() / scale
}

/// Collects raw durations during a sweep.
///
/// Cells are addressed by value, so the order in which they are recorded does not matter.
/// Durations keep full precision until [`TableBuilder::finalize`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
	input_sizes: Vec<usize>,
	iteration_counts: Vec<u64>,
	cells: Vec<Option<Duration>>,
}

impl TableBuilder {
	pub fn new(input_sizes: &[usize], iteration_counts: &[u64]) -> Self {
		Self {
			input_sizes: input_sizes.to_vec(),
			iteration_counts: iteration_counts.to_vec(),
			cells: vec![None; input_sizes.len() * iteration_counts.len()],
		}
	}

	pub fn record(
		&mut self,
		input_size: usize,
		iterations: u64,
		elapsed: Duration,
	) -> Result<(), TableError> {
		let col = self
			.input_sizes
			.iter()
			.position(|&size| size == input_size)
			.ok_or(TableError::UnknownInputSize(input_size))?;
		let row = self
			.iteration_counts
			.iter()
			.position(|&count| count == iterations)
			.ok_or(TableError::UnknownIterationCount(iterations))?;

		let cell = &mut self.cells[row * self.input_sizes.len() + col];
		if cell.is_some() {
			return Err(TableError::DuplicateCell {
				iterations,
				input_size,
			});
		}
		*cell = Some(elapsed);
		Ok(())
	}

	/// Converts to seconds, rounds, and checks that every cell was recorded.
	pub fn finalize(self) -> Result<ResultTable, TableError> {
		let n_cols = self.input_sizes.len();
		let values = self
			.cells
			.iter()
			.enumerate()
			.map(|(i, cell)| {
				cell.map(|elapsed| round_value(elapsed.as_secs_f64())).ok_or_else(|| {
					TableError::MissingCell {
						iterations: self.iteration_counts[i / n_cols],
						input_size: self.input_sizes[i % n_cols],
					}
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(ResultTable {
			input_sizes: self.input_sizes,
			iteration_counts: self.iteration_counts,
			values,
		})
	}
}

/// A finalized, immutable grid of elapsed seconds rounded to [`DECIMALS`] places.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
	input_sizes: Vec<usize>,
	iteration_counts: Vec<u64>,
	/// Row-major.
	values: Vec<f64>,
}

impl ResultTable {
	/// Column labels, in configured order.
	pub fn input_sizes(&self) -> &[usize] {
		&self.input_sizes
	}

	/// Row labels, in configured order.
	pub fn iteration_counts(&self) -> &[u64] {
		&self.iteration_counts
	}

	pub fn n_rows(&self) -> usize {
		self.iteration_counts.len()
	}

	pub fn n_cols(&self) -> usize {
		self.input_sizes.len()
	}

	/// `(rows, columns)`.
	pub fn shape(&self) -> (usize, usize) {
		(self.n_rows(), self.n_cols())
	}

	pub fn get(&self, iterations: u64, input_size: usize) -> Option<f64> {
		let row = self.iteration_counts.iter().position(|&c| c == iterations)?;
		let col = self.input_sizes.iter().position(|&s| s == input_size)?;
		Some(self.values[row * self.n_cols() + col])
	}

	pub fn row(&self, row: usize) -> &[f64] {
		let n_cols = self.n_cols();
		&self.values[row * n_cols..(row + 1) * n_cols]
	}

	/// Rows as `(iteration count, values)` pairs.
	pub fn rows(&self) -> impl Iterator<Item = (u64, &[f64])> + '_ {
		self.iteration_counts
			.iter()
			.enumerate()
			.map(|(i, &count)| (count, self.row(i)))
	}

	pub fn values(&self) -> &[f64] {
		&self.values
	}
}
