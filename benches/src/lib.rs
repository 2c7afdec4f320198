//! Benchmark helper utilities for sheetplay-rs
//!
//! This module provides synthetic sprite sheet definitions and tick streams for the
//! benchmark suite. Tick streams are seeded so every run replays the same frame timing.

use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use sheetplay_types::anim::{AnimationDefinition, ClipRange, FrameGridSpec};

/// Name of the clip covering every cell of a synthetic sheet
pub const FULL_CLIP: &str = "all";

/// Name of the clip covering the first row of a synthetic sheet
pub const ROW_CLIP: &str = "first_row";

/// Builds a `columns` x `rows` sheet of 64x64 frames with a full-sheet clip and a
/// first-row clip.
pub fn synthetic_definition(columns: u32, rows: u32, duration_ms: f64) -> Arc<AnimationDefinition> {
	let last = columns * rows - 1;
	Arc::new(
		AnimationDefinition::new("bench.png", FrameGridSpec::new(64, 64, columns, rows, duration_ms))
			.with_clip(FULL_CLIP, ClipRange::new(0, last))
			.with_clip(ROW_CLIP, ClipRange::new(0, columns - 1)),
	)
}

/// Generates `count` tick deltas jittered around `interval_ms`, as a real timer delivers them.
///
/// Roughly one tick in fifty is a stall long enough to hit the delta clamp.
pub fn jittered_deltas(count: usize, interval_ms: f64, seed: u64) -> Vec<f64> {
	let mut rng = SmallRng::seed_from_u64(seed);
	(0..count)
		.map(|_| {
			if rng.random_ratio(1, 50) {
				rng.random_range(200.0..2000.0)
			} else {
				interval_ms + rng.random_range(-interval_ms / 4.0..interval_ms / 4.0)
			}
		})
		.collect()
}

/// Common sheet sizes for benchmarking
pub mod sizes {
	/// Small sheet: 4x4 (16 frames)
	pub const SMALL: (u32, u32) = (4, 4);
	/// Reference flame sheet: 8x8 (64 frames)
	pub const FLAME: (u32, u32) = (8, 8);
	/// Large sheet: 32x32 (1024 frames)
	pub const LARGE: (u32, u32) = (32, 32);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_synthetic_definition() {
		let definition = synthetic_definition(8, 8, 50.0);
		assert_eq!(definition.frame_capacity(), 64);
		assert_eq!(definition.clip(FULL_CLIP), Some(ClipRange::new(0, 63)));
		assert_eq!(definition.clip(ROW_CLIP), Some(ClipRange::new(0, 7)));
		assert!(definition.validate().is_ok());
	}

	#[test]
	fn test_jittered_deltas_are_reproducible() {
		let a = jittered_deltas(500, 60.0, 7);
		let b = jittered_deltas(500, 60.0, 7);
		assert_eq!(a, b);
		assert_eq!(a.len(), 500);
		assert!(a.iter().all(|delta| *delta >= 45.0));
		assert!(a.iter().any(|delta| *delta > 150.0));
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::SMALL, (4, 4));
		assert_eq!(sizes::FLAME, (8, 8));
		assert_eq!(sizes::LARGE, (32, 32));
	}
}
