//! The frame-advance step.
//!
//! [`Advancer::step`] is a pure function of the elapsed timer and one tick's delta. It never
//! touches a controller: the caller commits the returned timer and performs the returned
//! [`FrameAction`]. A failed step commits nothing.

use super::{
	definition::ClipRange,
	error::{AnimationError, ConfigurationFault},
	state::PlayType,
};

/// Default upper bound for a single tick's delta, in milliseconds.
pub const DEFAULT_MAX_DELTA_MS: f64 = 150.0;

/// Cycles shorter than this are treated as zero-length.
pub const MIN_CYCLE_MS: f64 = 0.01;

/// What the caller should do with the displayed frame after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
	/// Nothing to show (single-frame clip)
	Hold,
	/// Show this frame if it is not already on screen
	Show(u32),
	/// Show this final frame, then stop the clip
	Finish(u32),
}

/// Result of one advance step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
	/// New value of the elapsed timer
	pub elapsed_ms: f64,
	/// Frame update to perform
	pub action: FrameAction,
}

/// Frame-advance parameters for one playing clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advancer {
	/// Clip being played
	pub clip: ClipRange,
	/// Display time of every frame
	pub duration_ms: f64,
	/// Loop or one-shot
	pub play_type: PlayType,
	/// Largest delta a single step will accept
	pub max_delta_ms: f64,
}

impl Advancer {
	/// Creates an advancer using [`DEFAULT_MAX_DELTA_MS`].
	pub fn new(clip: ClipRange, duration_ms: f64, play_type: PlayType) -> Self {
		Self {
			clip,
			duration_ms,
			play_type,
			max_delta_ms: DEFAULT_MAX_DELTA_MS,
		}
	}

	/// Overrides the delta clamp.
	pub fn with_max_delta(mut self, max_delta_ms: f64) -> Self {
		self.max_delta_ms = max_delta_ms;
		self
	}

	/// Clamps a raw tick delta into `0..=max_delta_ms`. Not-a-number counts as zero.
	pub fn clamp_delta(&self, delta_ms: f64) -> f64 {
		delta_ms.max(0.0).min(self.max_delta_ms)
	}

	/// Advances `elapsed_ms` by one tick of `delta_ms`.
	///
	/// A negative or not-a-number `elapsed_ms` counts as zero.
	///
	/// # Errors
	/// Returns [`AnimationError::Configuration`] for a non-positive delta clamp, clips with no
	/// frames, non-positive frame durations and near-zero loop cycles.
	pub fn step(&self, elapsed_ms: f64, delta_ms: f64) -> Result<Advance, AnimationError> {
		if self.max_delta_ms.is_nan() || self.max_delta_ms <= 0.0 {
			return Err(ConfigurationFault::InvalidMaxDelta(self.max_delta_ms).into());
		}
		let elapsed_ms = elapsed_ms.max(0.0) + self.clamp_delta(delta_ms);

		let frame_count = self.clip.frame_count();
		if frame_count <= 0 {
			return Err(ConfigurationFault::NonPositiveFrameCount(frame_count).into());
		}
		if frame_count == 1 {
			return Ok(Advance {
				elapsed_ms,
				action: FrameAction::Hold,
			});
		}
		if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
			return Err(ConfigurationFault::NonPositiveDuration(self.duration_ms).into());
		}

		let offset = self.frame_offset(elapsed_ms);
		if offset < frame_count {
			return Ok(Advance {
				elapsed_ms,
				action: FrameAction::Show(self.clip_frame(offset)),
			});
		}

		match self.play_type {
			PlayType::Loop => {
				let cycle_ms = frame_count as f64 * self.duration_ms;
				if cycle_ms < MIN_CYCLE_MS {
					return Err(ConfigurationFault::DegenerateCycle(cycle_ms).into());
				}
				let wrapped = elapsed_ms.rem_euclid(cycle_ms);
				let offset = self.frame_offset(wrapped).min(frame_count - 1);
				Ok(Advance {
					elapsed_ms: wrapped,
					action: FrameAction::Show(self.clip_frame(offset)),
				})
			}
			PlayType::OneShot => Ok(Advance {
				elapsed_ms,
				action: FrameAction::Finish(self.clip.end_frame),
			}),
		}
	}

	fn frame_offset(&self, elapsed_ms: f64) -> i64 {
		(elapsed_ms / self.duration_ms).floor() as i64
	}

	/// Frame `offset` steps into the clip. `offset` is in `0..frame_count`.
	fn clip_frame(&self, offset: i64) -> u32 {
		let offset = u32::try_from(offset.max(0)).unwrap_or(0);
		self.clip.begin_frame.saturating_add(offset).min(self.clip.end_frame)
	}
}
