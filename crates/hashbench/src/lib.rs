// Copyright 2026 The Binius Developers
//! Wall-clock timing of SHA-256 and BLAKE2b across a grid of input sizes and iteration counts.
//!
//! A [`Harness`] sweeps every `(input size, iteration count)` pair, asks a [`Timer`] for the
//! total time of that many consecutive hash calls, and collects one [`ResultTable`] per
//! algorithm. The [`export`] module writes the tables as delimited files and renders them for
//! the console.
//!
//! ```no_run
//! use hashbench::{Harness, SweepConfig};
//!
//! let config = SweepConfig::new(vec![10, 100], vec![1000, 5000])?;
//! let results = Harness::new(config).run()?;
//! let sha256 = results.sha256().expect("sha256 is measured by default");
//! assert_eq!(sha256.shape(), (2, 2));
//! # Ok::<(), hashbench::Error>(())
//! ```

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod harness;
pub mod table;
pub mod timer;

pub use algorithm::{AlgorithmId, HashAlgorithm, HashOutput};
pub use cli::Cli;
pub use config::SweepConfig;
pub use error::{ConfigError, Error, ExportError, HashError, Result, TableError};
pub use export::{CsvOptions, DisplayOptions, TableDisplay};
pub use harness::{Harness, SweepResults};
pub use table::{ResultTable, TableBuilder};
pub use timer::{Timer, WallClock};
