//! Playback state and play type enums.

use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// Playback state of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
	/// No clip is active; the last shown frame stays on screen
	#[default]
	Stopped,
	/// A clip is active and advances on every tick
	Playing,
	/// A clip is active but ticks are ignored
	Paused,
}

impl PlaybackState {
	/// Returns `true` while a clip is active (playing or paused).
	pub fn is_active(self) -> bool {
		!matches!(self, Self::Stopped)
	}
}

impl std::fmt::Display for PlaybackState {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Stopped => write!(f, "Stopped"),
			Self::Playing => write!(f, "Playing"),
			Self::Paused => write!(f, "Paused"),
		}
	}
}

/// How a clip behaves once its last frame has been shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
	/// Land on the last frame, stop and fire the completion callback
	#[default]
	OneShot,
	/// Wrap back to the first frame indefinitely
	Loop,
}

impl PlayType {
	/// Returns `true` for [`PlayType::Loop`].
	pub fn is_loop(self) -> bool {
		matches!(self, Self::Loop)
	}
}

impl std::fmt::Display for PlayType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::OneShot => write!(f, "One-shot"),
			Self::Loop => write!(f, "Loop"),
		}
	}
}

impl std::str::FromStr for PlayType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"one_shot" | "one-shot" | "oneshot" | "once" => Ok(Self::OneShot),
			"loop" | "looping" => Ok(Self::Loop),
			other => Err(format!("unknown play type '{other}' (expected 'loop' or 'one-shot')")),
		}
	}
}
