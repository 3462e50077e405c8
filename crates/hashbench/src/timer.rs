// Copyright 2026 The Binius Developers
use std::{
	num::NonZeroU64,
	time::{Duration, Instant},
};

/// Measures how long an operation takes when run a fixed number of times back to back.
pub trait Timer {
	/// Runs `op` exactly `repetitions` times and returns the total elapsed time.
	///
	/// The first error returned by `op` stops the measurement and is returned unchanged.
	fn measure<E>(
		&mut self,
		repetitions: NonZeroU64,
		op: &mut dyn FnMut() -> Result<(), E>,
	) -> Result<Duration, E>;
}

/// Wall-clock timer backed by [`Instant`].
///
/// Reports the raw total, not a per-call average.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Timer for WallClock {
	fn measure<E>(
		&mut self,
		repetitions: NonZeroU64,
		op: &mut dyn FnMut() -> Result<(), E>,
	) -> Result<Duration, E> {
		let start = Instant::now();
		for _ in 0..repetitions.get() {
			op()?;
		}
		Ok(start.elapsed())
	}
}
