// Copyright 2026 The Binius Developers
use std::{io, path::PathBuf};

use crate::algorithm::AlgorithmId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid sweep configuration: {0}")]
	Config(#[from] ConfigError),
	#[error("hash invocation failed: {0}")]
	Hash(#[from] HashError),
	#[error("result table error: {0}")]
	Table(#[from] TableError),
	#[error("export failed: {0}")]
	Export(#[from] ExportError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("input size at position {index} is zero")]
	ZeroInputSize { index: usize },
	#[error("iteration count at position {index} is zero")]
	ZeroIterationCount { index: usize },
	#[error("input size {0} is listed more than once")]
	DuplicateInputSize(usize),
	#[error("iteration count {0} is listed more than once")]
	DuplicateIterationCount(u64),
	#[error("no hash algorithms selected")]
	NoAlgorithms,
	#[error("algorithm {0} is listed more than once")]
	DuplicateAlgorithm(AlgorithmId),
	#[error(transparent)]
	Algorithm(#[from] HashError),
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("{algorithm} does not support a digest size of {size} bytes (expected 1..={max})")]
	InvalidDigestSize {
		algorithm: AlgorithmId,
		size: usize,
		max: usize,
	},
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
	#[error("input size {0} is not a column of this table")]
	UnknownInputSize(usize),
	#[error("iteration count {0} is not a row of this table")]
	UnknownIterationCount(u64),
	#[error("cell (iterations={iterations}, input size={input_size}) was recorded twice")]
	DuplicateCell { iterations: u64, input_size: usize },
	#[error("cell (iterations={iterations}, input size={input_size}) was never recorded")]
	MissingCell { iterations: u64, input_size: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
	#[error("cannot create {}: {source}", path.display())]
	Create {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("cannot create output directory {}: {source}", path.display())]
	CreateDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error(transparent)]
	Csv(#[from] csv::Error),
	#[error(transparent)]
	Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
