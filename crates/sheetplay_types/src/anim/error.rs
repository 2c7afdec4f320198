//! Error types for animation definitions, playback configuration and playback control.

use thiserror::Error;

use super::state::PlaybackState;

/// Reason a clip or frame grid cannot be animated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationFault {
	/// Clip spans zero or a negative number of frames (`begin_frame > end_frame`)
	#[error("clip spans {0} frames; clips must be at least 1 frame long")]
	NonPositiveFrameCount(i64),

	/// One full cycle of the clip takes (almost) no time
	#[error("cycle duration of {0} ms is ~0; frame durations must be positive and non-zero")]
	DegenerateCycle(f64),

	/// Frame duration is zero, negative or not a number
	#[error("frame duration of {0} ms is not positive")]
	NonPositiveDuration(f64),

	/// Frame grid has no columns to lay frames out in
	#[error("frame grid has 0 columns")]
	NoColumns,

	/// Per-tick delta clamp is zero, negative or not a number
	#[error("max tick delta of {0} ms is not positive")]
	InvalidMaxDelta(f64),

	/// Pixel offset of the frame does not fit in 64 bits
	#[error("pixel offset of frame {0} overflows")]
	OffsetOverflow(u32),
}

/// Errors raised by playback control operations.
///
/// None of these are fatal. Every failing operation leaves the controller in the state it
/// was in before the call, apart from the documented timer re-base of
/// [`PlaybackController::jump_to_frame`](super::PlaybackController::jump_to_frame) in
/// legacy jump mode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
	/// Clip or frame grid cannot be animated
	#[error("Configuration error: {0}")]
	Configuration(#[from] ConfigurationFault),

	/// `play` referenced a clip name missing from the definition
	#[error("Unknown clip: '{0}'")]
	UnknownClip(String),

	/// Operation is not allowed in the current playback state
	#[error("Cannot {operation} while {state}")]
	InvalidState {
		/// Name of the rejected operation
		operation: &'static str,
		/// State the controller was in
		state: PlaybackState,
	},

	/// Requested frame is outside the range allowed by the current state
	#[error("Frame {frame} out of bounds ({allowed})")]
	FrameOutOfBounds {
		/// Requested frame index
		frame: u32,
		/// Human readable description of the allowed range
		allowed: String,
	},
}

impl AnimationError {
	/// Creates a `FrameOutOfBounds` error for a frame outside `begin..=end`.
	pub fn frame_out_of_clip(frame: u32, begin: u32, end: u32) -> Self {
		Self::FrameOutOfBounds {
			frame,
			allowed: format!("clip frames {begin}..={end}"),
		}
	}
}

/// Errors that can occur when loading or validating animation definitions
#[derive(Debug, Error)]
pub enum DefinitionError {
	/// Malformed JSON document
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Malformed YAML document
	#[error(transparent)]
	Yaml(#[from] serde_yaml::Error),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Frame duration is not a positive, finite number of milliseconds
	#[error("Invalid frame duration: {0} ms")]
	InvalidDuration(f64),

	/// Frame grid declares zero columns
	#[error("Frame grid must have at least one column")]
	NoColumns,

	/// Clip whose first frame comes after its last frame
	#[error("Clip '{name}' is inverted: begin frame {begin} > end frame {end}")]
	InvertedClip {
		/// Clip name
		name: String,
		/// Declared first frame
		begin: u32,
		/// Declared last frame
		end: u32,
	},

	/// A definition inside a catalog failed to validate
	#[error("Definition '{name}': {source}")]
	Entry {
		/// Catalog key of the failing definition
		name: String,
		/// Underlying validation error
		#[source]
		source: Box<DefinitionError>,
	},
}

/// Errors that can occur when loading playback configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Configuration source could not be read or deserialized
	#[error(transparent)]
	Source(#[from] config::ConfigError),

	/// Maximum tick delta must be positive and finite
	#[error("Invalid max_delta_ms: {0}")]
	InvalidMaxDelta(f64),

	/// Tick interval must be at least one millisecond
	#[error("Invalid tick_interval_ms: {0}")]
	InvalidTickInterval(u64),
}
