// Copyright 2026 The Binius Developers
//! Sweep configuration: which input sizes, iteration counts and algorithms to measure.

use std::num::NonZeroU64;

use itertools::Itertools;

use crate::{algorithm::HashAlgorithm, error::ConfigError};

pub const DEFAULT_INPUT_SIZES: [usize; 4] = [10, 100, 1000, 10000];
pub const DEFAULT_ITERATION_COUNTS: [u64; 3] = [1000, 5000, 10000];

/// Byte every payload is filled with.
pub const PAYLOAD_BYTE: u8 = b'0';

/// Validated, immutable sweep parameters.
///
/// Input sizes become table columns and iteration counts become table rows, both in the order
/// given here. Either list may be empty, in which case the tables have no columns (or no rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
	input_sizes: Vec<usize>,
	iteration_counts: Vec<NonZeroU64>,
	pub(crate) algorithms: Vec<HashAlgorithm>,
}

impl SweepConfig {
	/// Builds a configuration measuring the default algorithms.
	pub fn new(input_sizes: Vec<usize>, iteration_counts: Vec<u64>) -> Result<Self, ConfigError> {
		Self::with_algorithms(input_sizes, iteration_counts, HashAlgorithm::DEFAULTS.to_vec())
	}

	pub fn with_algorithms(
		input_sizes: Vec<usize>,
		iteration_counts: Vec<u64>,
		algorithms: Vec<HashAlgorithm>,
	) -> Result<Self, ConfigError> {
		if let Some(index) = input_sizes.iter().position(|&size| size == 0) {
			return Err(ConfigError::ZeroInputSize { index });
		}
		if let Some(&size) = input_sizes.iter().duplicates().next() {
			return Err(ConfigError::DuplicateInputSize(size));
		}
		if let Some(&count) = iteration_counts.iter().duplicates().next() {
			return Err(ConfigError::DuplicateIterationCount(count));
		}
		let iteration_counts = iteration_counts
			.into_iter()
			.enumerate()
			.map(|(index, count)| NonZeroU64::new(count).ok_or(ConfigError::ZeroIterationCount { index }))
			.collect::<Result<Vec<_>, _>>()?;

		if algorithms.is_empty() {
			return Err(ConfigError::NoAlgorithms);
		}
		if let Some(id) = algorithms.iter().map(HashAlgorithm::id).duplicates().next() {
			return Err(ConfigError::DuplicateAlgorithm(id));
		}
		for algorithm in &algorithms {
			algorithm.validate()?;
		}

		Ok(Self {
			input_sizes,
			iteration_counts,
			algorithms,
		})
	}

	pub fn input_sizes(&self) -> &[usize] {
		&self.input_sizes
	}

	pub fn iteration_counts(&self) -> &[NonZeroU64] {
		&self.iteration_counts
	}

	/// Iteration counts as plain integers, in row order.
	pub fn iteration_labels(&self) -> Vec<u64> {
		self.iteration_counts.iter().map(|n| n.get()).collect()
	}

	pub fn algorithms(&self) -> &[HashAlgorithm] {
		&self.algorithms
	}

	/// Number of timed measurements one run performs.
	pub fn measurement_count(&self) -> usize {
		self.input_sizes.len() * self.iteration_counts.len() * self.algorithms.len()
	}
}

impl Default for SweepConfig {
	fn default() -> Self {
		Self {
			input_sizes: DEFAULT_INPUT_SIZES.to_vec(),
			iteration_counts: DEFAULT_ITERATION_COUNTS
				.iter()
				.filter_map(|&n| NonZeroU64::new(n))
				.collect(),
			algorithms: HashAlgorithm::DEFAULTS.to_vec(),
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::algorithm::AlgorithmId;

	#[test]
	fn test_default_matches_constructor() {
		let built =
			SweepConfig::new(DEFAULT_INPUT_SIZES.to_vec(), DEFAULT_ITERATION_COUNTS.to_vec()).unwrap();
		assert_eq!(built, SweepConfig::default());
		assert_eq!(built.measurement_count(), 4 * 3 * 2);
		assert_eq!(built.iteration_labels(), vec![1000, 5000, 10000]);
	}

	#[test]
	fn test_order_is_preserved() {
		let config = SweepConfig::new(vec![100, 10, 1000], vec![5, 1, 3]).unwrap();
		assert_eq!(config.input_sizes(), &[100, 10, 1000]);
		assert_eq!(config.iteration_labels(), vec![5, 1, 3]);
	}

	#[test]
	fn test_empty_lists_are_accepted() {
		let config = SweepConfig::new(vec![], vec![1, 2]).unwrap();
		assert!(config.input_sizes().is_empty());
		assert_eq!(config.measurement_count(), 0);

		let config = SweepConfig::new(vec![10], vec![]).unwrap();
		assert!(config.iteration_counts().is_empty());
	}

	#[rstest]
	#[case(vec![10, 0], vec![1], "ZeroInputSize")]
	#[case(vec![10], vec![1, 0], "ZeroIterationCount")]
	#[case(vec![10, 10], vec![1], "DuplicateInputSize")]
	#[case(vec![10], vec![2, 2], "DuplicateIterationCount")]
	fn test_rejects_bad_sequences(
		#[case] sizes: Vec<usize>,
		#[case] counts: Vec<u64>,
		#[case] expected: &str,
	) {
		let err = SweepConfig::new(sizes, counts).unwrap_err();
		assert!(format!("{err:?}").starts_with(expected), "unexpected error {err:?}");
	}

	#[test]
	fn test_zero_positions_are_reported() {
		assert!(matches!(
			SweepConfig::new(vec![1, 2, 0], vec![1]),
			Err(ConfigError::ZeroInputSize { index: 2 })
		));
		assert!(matches!(
			SweepConfig::new(vec![1], vec![0]),
			Err(ConfigError::ZeroIterationCount { index: 0 })
		));
	}

	#[test]
	fn test_rejects_bad_algorithm_lists() {
		assert!(matches!(
			SweepConfig::with_algorithms(vec![10], vec![1], vec![]),
			Err(ConfigError::NoAlgorithms)
		));
		assert!(matches!(
			SweepConfig::with_algorithms(
				vec![10],
				vec![1],
				vec![HashAlgorithm::Sha256, HashAlgorithm::Sha256]
			),
			Err(ConfigError::DuplicateAlgorithm(AlgorithmId::Sha256))
		));
		assert!(matches!(
			SweepConfig::with_algorithms(
				vec![10],
				vec![1],
				vec![HashAlgorithm::Blake2b { digest_size: 65 }]
			),
			Err(ConfigError::Algorithm(_))
		));
	}
}
