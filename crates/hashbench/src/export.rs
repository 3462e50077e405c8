// Copyright 2026 The Binius Developers
//! Flat-file export and console rendering of result tables.

use std::{
	fmt,
	fs::{self, File},
	io::{BufWriter, Write},
	path::{Path, PathBuf},
};

use itertools::Itertools;
use tracing::info;

use crate::{
	algorithm::AlgorithmId,
	error::ExportError,
	harness::SweepResults,
	table::{COLUMN_AXIS, DECIMALS, ROW_AXIS, ResultTable},
};

/// Options for delimited file output.
#[derive(Debug, Clone)]
pub struct CsvOptions {
	pub delimiter: u8,
	/// Write the iteration count as the first column of every row.
	pub include_index: bool,
}

impl Default for CsvOptions {
	fn default() -> Self {
		Self {
			delimiter: b',',
			include_index: true,
		}
	}
}

/// File name a table is exported under, e.g. `blake2b_data.csv`.
pub fn file_name(id: AlgorithmId) -> String {
	format!("{}_data.csv", id.file_stem())
}

fn format_value(value: f64, precision: usize) -> String {
	format!("{value:.precision$}")
}

/// Writes `table` as delimited text: a header row, then one row per iteration count.
pub fn write_table<W: Write>(
	table: &ResultTable,
	writer: W,
	options: &CsvOptions,
) -> Result<(), ExportError> {
	let mut csv = csv::WriterBuilder::new()
		.delimiter(options.delimiter)
		.from_writer(writer);

	let index_header = options.include_index.then(|| ROW_AXIS.to_string());
	let header = index_header
		.into_iter()
		.chain(table.input_sizes().iter().map(ToString::to_string))
		.collect::<Vec<_>>();
	if header.is_empty() {
		// No index and no columns: nothing to write.
		csv.flush()?;
		return Ok(());
	}
	csv.write_record(&header)?;

	for (iterations, values) in table.rows() {
		let index = options.include_index.then(|| iterations.to_string());
		let record = index
			.into_iter()
			.chain(values.iter().map(|&v| format_value(v, DECIMALS as usize)))
			.collect::<Vec<_>>();
		csv.write_record(&record)?;
	}
	csv.flush()?;
	Ok(())
}

/// Creates (or truncates) `path` and writes `table` to it.
pub fn export_table(
	table: &ResultTable,
	path: &Path,
	options: &CsvOptions,
) -> Result<(), ExportError> {
	let file = File::create(path).map_err(|source| ExportError::Create {
		path: path.to_path_buf(),
		source,
	})?;
	write_table(table, BufWriter::new(file), options)
}

/// Exports every table of a run into `dir`, creating the directory if needed.
///
/// Returns the written paths in algorithm order.
pub fn export_results(
	results: &SweepResults,
	dir: &Path,
	options: &CsvOptions,
) -> Result<Vec<PathBuf>, ExportError> {
	fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
		path: dir.to_path_buf(),
		source,
	})?;
	results
		.iter()
		.map(|(algorithm, table)| -> Result<PathBuf, ExportError> {
			let path = dir.join(file_name(algorithm.id()));
			export_table(table, &path, options)?;
			info!(%algorithm, path = %path.display(), "table exported");
			Ok(path)
		})
		.collect()
}

/// Presentation options for console output.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
	/// Rows beyond this are elided around a `...` row. `None` shows every row.
	pub max_rows: Option<usize>,
	/// Columns beyond this are elided around a `...` column. `None` shows every column.
	pub max_columns: Option<usize>,
	pub precision: usize,
}

impl Default for DisplayOptions {
	fn default() -> Self {
		Self {
			max_rows: Some(100),
			max_columns: None,
			precision: DECIMALS as usize,
		}
	}
}

/// Indices to show out of `len`, with `None` standing for the elided middle.
fn visible(len: usize, max: Option<usize>) -> Vec<Option<usize>> {
	match max {
		Some(max) if len > max => {
			let head = max.div_ceil(2);
			let tail = max / 2;
			(0..head)
				.map(Some)
				.chain(std::iter::once(None))
				.chain((len - tail..len).map(Some))
				.collect()
		}
		_ => (0..len).map(Some).collect(),
	}
}

/// Renders a [`ResultTable`] as an aligned text grid.
///
/// ```text
/// Input size      10     100
/// Iterations
/// 1           0.0000  0.0001
/// 2           0.0000  0.0001
/// ```
pub struct TableDisplay<'a> {
	table: &'a ResultTable,
	options: &'a DisplayOptions,
}

impl<'a> TableDisplay<'a> {
	pub fn new(table: &'a ResultTable, options: &'a DisplayOptions) -> Self {
		Self { table, options }
	}
}

impl fmt::Display for TableDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		const ELLIPSIS: &str = "...";
		let table = self.table;
		let rows = visible(table.n_rows(), self.options.max_rows);
		let cols = visible(table.n_cols(), self.options.max_columns);

		let cell = |row: Option<usize>, col: Option<usize>| match (row, col) {
			(Some(r), Some(c)) => format_value(table.row(r)[c], self.options.precision),
			_ => ELLIPSIS.to_string(),
		};
		let col_label = |col: Option<usize>| match col {
			Some(c) => table.input_sizes()[c].to_string(),
			None => ELLIPSIS.to_string(),
		};
		let row_label = |row: Option<usize>| match row {
			Some(r) => table.iteration_counts()[r].to_string(),
			None => ELLIPSIS.to_string(),
		};

		let index_width = rows
			.iter()
			.map(|&r| row_label(r).len())
			.chain([ROW_AXIS.len(), COLUMN_AXIS.len()])
			.max()
			.unwrap_or(0);
		let widths = cols
			.iter()
			.map(|&c| {
				rows.iter()
					.map(|&r| cell(r, c).len())
					.chain(std::iter::once(col_label(c).len()))
					.max()
					.unwrap_or(0)
			})
			.collect::<Vec<_>>();

		let header = cols
			.iter()
			.zip(&widths)
			.map(|(&c, &w)| format!("{:>w$}", col_label(c)))
			.join("  ");
		writeln!(f, "{COLUMN_AXIS:<index_width$}  {header}")?;
		writeln!(f, "{ROW_AXIS}")?;
		for &r in &rows {
			let line = cols
				.iter()
				.zip(&widths)
				.map(|(&c, &w)| format!("{:>w$}", cell(r, c)))
				.join("  ");
			writeln!(f, "{:<index_width$}  {line}", row_label(r))?;
		}
		Ok(())
	}
}

/// Prints every table of a run to stdout, each under a `<name> times:` title.
pub fn print_results(results: &SweepResults, options: &DisplayOptions) {
	for (i, (algorithm, table)) in results.iter().enumerate() {
		if i > 0 {
			println!();
		}
		println!("{} times:", algorithm.id().display_name());
		print!("{}", TableDisplay::new(table, options));
	}
}
