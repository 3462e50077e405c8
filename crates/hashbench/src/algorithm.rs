// Copyright 2026 The Binius Developers
//! Hash algorithms under measurement.
//!
//! Each algorithm is an explicit configuration record: an [`AlgorithmId`] plus whatever fixed
//! parameters the primitive takes. The primitives themselves come from the `sha2` and `blake2`
//! crates and are treated as opaque.

use std::fmt;

use blake2::Blake2bVar;
use clap::ValueEnum;
use digest::{Digest, Update, VariableOutput};
use sha2::Sha256;

use crate::error::HashError;

/// Largest digest any supported algorithm produces.
pub const MAX_DIGEST_SIZE: usize = 64;

/// Largest output size BLAKE2b accepts.
pub const BLAKE2B_MAX_DIGEST_SIZE: usize = 64;

pub const DEFAULT_BLAKE2B_DIGEST_SIZE: usize = 32;

const SHA256_DIGEST_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum AlgorithmId {
	Sha256,
	Blake2b,
}

impl AlgorithmId {
	/// Human-readable name used in console titles.
	pub const fn display_name(self) -> &'static str {
		match self {
			Self::Sha256 => "SHA-256",
			Self::Blake2b => "BLAKE2b",
		}
	}

	/// Stem of the export file name, e.g. `sha256` for `sha256_data.csv`.
	pub const fn file_stem(self) -> &'static str {
		match self {
			Self::Sha256 => "sha256",
			Self::Blake2b => "blake2b",
		}
	}
}

impl fmt::Display for AlgorithmId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.file_stem())
	}
}

/// A hash algorithm together with its fixed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
	Sha256,
	Blake2b { digest_size: usize },
}

impl HashAlgorithm {
	/// The default algorithm list: SHA-256 followed by BLAKE2b with a 32-byte digest.
	pub const DEFAULTS: [Self; 2] = [
		Self::Sha256,
		Self::Blake2b {
			digest_size: DEFAULT_BLAKE2B_DIGEST_SIZE,
		},
	];

	pub fn from_id(id: AlgorithmId, blake2b_digest_size: usize) -> Self {
		match id {
			AlgorithmId::Sha256 => Self::Sha256,
			AlgorithmId::Blake2b => Self::Blake2b {
				digest_size: blake2b_digest_size,
			},
		}
	}

	pub const fn id(&self) -> AlgorithmId {
		match self {
			Self::Sha256 => AlgorithmId::Sha256,
			Self::Blake2b { .. } => AlgorithmId::Blake2b,
		}
	}

	pub const fn digest_size(&self) -> usize {
		match self {
			Self::Sha256 => SHA256_DIGEST_SIZE,
			Self::Blake2b { digest_size } => *digest_size,
		}
	}

	/// Checks the fixed parameters against what the primitive accepts.
	pub fn validate(&self) -> Result<(), HashError> {
		match *self {
			Self::Sha256 => Ok(()),
			Self::Blake2b { digest_size } => {
				if (1..=BLAKE2B_MAX_DIGEST_SIZE).contains(&digest_size) {
					Ok(())
				} else {
					Err(HashError::InvalidDigestSize {
						algorithm: AlgorithmId::Blake2b,
						size: digest_size,
						max: BLAKE2B_MAX_DIGEST_SIZE,
					})
				}
			}
		}
	}

	/// Hashes `data` once.
	pub fn hash(&self, data: &[u8]) -> Result<HashOutput, HashError> {
		self.validate()?;
		let mut output = HashOutput {
			bytes: [0u8; MAX_DIGEST_SIZE],
			len: self.digest_size(),
		};
		match *self {
			Self::Sha256 => {
				output.bytes[..SHA256_DIGEST_SIZE].copy_from_slice(&Sha256::digest(data));
			}
			Self::Blake2b { digest_size } => {
				let invalid = || HashError::InvalidDigestSize {
					algorithm: AlgorithmId::Blake2b,
					size: digest_size,
					max: BLAKE2B_MAX_DIGEST_SIZE,
				};
				let mut hasher = Blake2bVar::new(digest_size).map_err(|_| invalid())?;
				Update::update(&mut hasher, data);
				hasher
					.finalize_variable(&mut output.bytes[..digest_size])
					.map_err(|_| invalid())?;
			}
		}
		Ok(output)
	}
}

impl fmt::Display for HashAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Sha256 => write!(f, "{}", self.id()),
			Self::Blake2b { digest_size } => write!(f, "{}/{}", self.id(), digest_size),
		}
	}
}

/// Digest bytes held inline so that timing loops never allocate.
#[derive(Clone, Copy)]
pub struct HashOutput {
	bytes: [u8; MAX_DIGEST_SIZE],
	len: usize,
}

impl HashOutput {
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len]
	}
}

impl fmt::Debug for HashOutput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.as_bytes() {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}
