//! Sprite sheet definitions: frame grid geometry and named clip ranges.
//!
//! Definitions are plain data supplied by the host. The serialized layout is:
//!
//! ```text
//! {
//!     "image": "Images/Flame512x720x8x8.png",
//!     "animations": { "burn": { "beginFrame": 0, "endFrame": 63 } },
//!     "frames": { "width": 64, "height": 90, "columns": 8, "rows": 8, "duration": 50 }
//! }
//! ```
//!
//! Frames are numbered from zero, left-to-right then top-to-bottom.

use std::{collections::BTreeMap, io::Read};

use serde::{Deserialize, Serialize};

use super::error::DefinitionError;

/// Layout of the frames on a sprite sheet and the display time of each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameGridSpec {
	/// Width of a single frame in pixels
	#[serde(rename = "width")]
	pub frame_width: u32,
	/// Height of a single frame in pixels
	#[serde(rename = "height")]
	pub frame_height: u32,
	/// Number of frame columns on the sheet
	pub columns: u32,
	/// Number of frame rows on the sheet
	pub rows: u32,
	/// Display time of every frame in milliseconds
	#[serde(rename = "duration")]
	pub duration_ms: f64,
}

impl FrameGridSpec {
	/// Creates a frame grid description.
	pub fn new(frame_width: u32, frame_height: u32, columns: u32, rows: u32, duration_ms: f64) -> Self {
		Self {
			frame_width,
			frame_height,
			columns,
			rows,
			duration_ms,
		}
	}

	/// Total number of frame cells on the sheet.
	pub fn frame_capacity(&self) -> u64 {
		u64::from(self.columns) * u64::from(self.rows)
	}

	/// Checks `duration_ms > 0` and `columns >= 1`.
	pub fn validate(&self) -> Result<(), DefinitionError> {
		if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
			return Err(DefinitionError::InvalidDuration(self.duration_ms));
		}
		if self.columns == 0 {
			return Err(DefinitionError::NoColumns);
		}
		Ok(())
	}
}

/// Inclusive range of frames making up one clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRange {
	/// First frame of the clip
	pub begin_frame: u32,
	/// Last frame of the clip (inclusive)
	pub end_frame: u32,
}

impl ClipRange {
	/// Creates a clip range. Inverted ranges are accepted here and rejected on use.
	pub fn new(begin_frame: u32, end_frame: u32) -> Self {
		Self {
			begin_frame,
			end_frame,
		}
	}

	/// Number of frames in the clip; zero or negative for inverted ranges.
	pub fn frame_count(&self) -> i64 {
		i64::from(self.end_frame) - i64::from(self.begin_frame) + 1
	}

	/// Returns `true` when `begin_frame > end_frame`.
	pub fn is_inverted(&self) -> bool {
		self.begin_frame > self.end_frame
	}

	/// Returns `true` if `frame` lies within the clip.
	pub fn contains(&self, frame: u32) -> bool {
		(self.begin_frame..=self.end_frame).contains(&frame)
	}
}

impl std::fmt::Display for ClipRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..={}", self.begin_frame, self.end_frame)
	}
}

/// A sprite sheet and the clips that can be played from it.
///
/// Definitions are immutable once handed to a controller and are shared behind an
/// [`Arc`](std::sync::Arc), so one definition can drive any number of sprites.
///
/// # Examples
///
/// ```
/// use sheetplay_types::anim::{AnimationDefinition, ClipRange, FrameGridSpec};
///
/// let flame = AnimationDefinition::new("flame.png", FrameGridSpec::new(64, 90, 8, 8, 50.0))
/// 	.with_clip("burn", ClipRange::new(0, 63));
///
/// assert_eq!(flame.clip("burn"), Some(ClipRange::new(0, 63)));
/// assert!(flame.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDefinition {
	/// Opaque reference to the sheet image (path, URL or asset key)
	image: String,

	/// Named clips
	#[serde(rename = "animations", default)]
	clips: BTreeMap<String, ClipRange>,

	/// Frame grid geometry
	#[serde(rename = "frames")]
	grid: FrameGridSpec,
}

impl AnimationDefinition {
	/// Creates a definition with no clips. No validation is performed.
	pub fn new(image: impl Into<String>, grid: FrameGridSpec) -> Self {
		Self {
			image: image.into(),
			clips: BTreeMap::new(),
			grid,
		}
	}

	/// Adds a clip and returns the definition, for chained construction.
	pub fn with_clip(mut self, name: impl Into<String>, range: ClipRange) -> Self {
		self.insert_clip(name, range);
		self
	}

	/// Adds or replaces a clip, returning the previous range under that name.
	pub fn insert_clip(&mut self, name: impl Into<String>, range: ClipRange) -> Option<ClipRange> {
		self.clips.insert(name.into(), range)
	}

	/// Parses and validates a definition from a JSON string.
	pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
		let definition: Self = serde_json::from_str(json)?;
		definition.validate()?;
		Ok(definition)
	}

	/// Parses and validates a definition from a YAML string.
	pub fn from_yaml(yaml: &str) -> Result<Self, DefinitionError> {
		let definition: Self = serde_yaml::from_str(yaml)?;
		definition.validate()?;
		Ok(definition)
	}

	/// Parses and validates a definition from JSON bytes.
	pub fn from_bytes(data: &[u8]) -> Result<Self, DefinitionError> {
		let definition: Self = serde_json::from_slice(data)?;
		definition.validate()?;
		Ok(definition)
	}

	/// Reads a JSON definition from any reader.
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DefinitionError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Opens a definition file. Files ending in `.yaml`/`.yml` are read as YAML, anything
	/// else as JSON.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DefinitionError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)?;
		if is_yaml_path(path) {
			Self::from_yaml(&text)
		} else {
			Self::from_json(&text)
		}
	}

	/// Serializes the definition to pretty-printed JSON.
	pub fn to_json(&self) -> Result<String, DefinitionError> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Checks the frame grid and every clip range.
	pub fn validate(&self) -> Result<(), DefinitionError> {
		self.grid.validate()?;
		if let Some((name, range)) = self.clips.iter().find(|(_, range)| range.is_inverted()) {
			return Err(DefinitionError::InvertedClip {
				name: name.clone(),
				begin: range.begin_frame,
				end: range.end_frame,
			});
		}
		Ok(())
	}

	/// Returns the sheet image reference.
	pub fn image(&self) -> &str {
		&self.image
	}

	/// Returns the frame grid.
	pub fn grid(&self) -> &FrameGridSpec {
		&self.grid
	}

	/// Looks up a clip by name.
	pub fn clip(&self, name: &str) -> Option<ClipRange> {
		self.clips.get(name).copied()
	}

	/// Iterates over clips in name order.
	pub fn clips(&self) -> impl Iterator<Item = (&str, ClipRange)> {
		self.clips.iter().map(|(name, range)| (name.as_str(), *range))
	}

	/// Number of clips.
	pub fn clip_count(&self) -> usize {
		self.clips.len()
	}

	/// Total number of frame cells on the sheet.
	pub fn frame_capacity(&self) -> u64 {
		self.grid.frame_capacity()
	}
}

impl std::fmt::Display for AnimationDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"AnimationDefinition({}, {}x{} frames of {}x{} px, {} ms/frame, {} clips)",
			self.image,
			self.grid.columns,
			self.grid.rows,
			self.grid.frame_width,
			self.grid.frame_height,
			self.grid.duration_ms,
			self.clips.len()
		)
	}
}

pub(crate) fn is_yaml_path(path: &std::path::Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
