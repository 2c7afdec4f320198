//! Wall-clock source for tick deltas.

use std::time::Instant;

/// Measures the time between consecutive ticks.
///
/// The controller never reads a clock itself; hosts that tick from a timer loop feed it the
/// values returned by [`FrameClock::delta_ms`].
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
	last: Instant,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self::new()
	}
}

impl FrameClock {
	/// Starts measuring from now.
	pub fn new() -> Self {
		Self {
			last: Instant::now(),
		}
	}

	/// Milliseconds since the previous call (or since construction/reset).
	pub fn delta_ms(&mut self) -> f64 {
		let now = Instant::now();
		let delta = now.duration_since(self.last);
		self.last = now;
		delta.as_secs_f64() * 1000.0
	}

	/// Restarts measurement from now, discarding the time since the last delta.
	pub fn reset(&mut self) {
		self.last = Instant::now();
	}
}
