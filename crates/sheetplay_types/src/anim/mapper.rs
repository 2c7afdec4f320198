//! Frame index to sprite sheet coordinate mapping.

use super::{
	definition::{ClipRange, FrameGridSpec},
	error::{AnimationError, ConfigurationFault},
	renderer::Renderer,
	state::PlaybackState,
};

/// Grid cell and pixel offset of a frame on the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FramePosition {
	/// Column of the frame (0-based)
	pub column: u32,
	/// Row of the frame (0-based)
	pub row: u32,
	/// Horizontal pixel offset, `-column * frame_width`
	pub offset_x: i64,
	/// Vertical pixel offset, `-row * frame_height`
	pub offset_y: i64,
}

/// Maps frame indices onto a frame grid and checks them against the playback state.
///
/// # Examples
///
/// ```
/// use sheetplay_types::anim::{FrameGridSpec, FrameMapper};
///
/// let mapper = FrameMapper::new(FrameGridSpec::new(64, 90, 8, 8, 50.0));
/// let pos = mapper.locate(10).unwrap();
/// assert_eq!((pos.column, pos.row), (2, 1));
/// assert_eq!((pos.offset_x, pos.offset_y), (-128, -90));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMapper {
	grid: FrameGridSpec,
}

impl FrameMapper {
	/// Creates a mapper for the given grid.
	pub fn new(grid: FrameGridSpec) -> Self {
		Self {
			grid,
		}
	}

	/// Returns the grid this mapper lays frames out on.
	pub fn grid(&self) -> &FrameGridSpec {
		&self.grid
	}

	/// Computes the grid cell and pixel offset of `frame`.
	///
	/// # Errors
	/// Returns a configuration error if the grid has no columns or the pixel offset does not
	/// fit in an `i64`.
	pub fn locate(&self, frame: u32) -> Result<FramePosition, AnimationError> {
		if self.grid.columns == 0 {
			return Err(ConfigurationFault::NoColumns.into());
		}

		let column = frame % self.grid.columns;
		let row = frame / self.grid.columns;
		let (Some(x), Some(y)) = (
			i64::from(column).checked_mul(i64::from(self.grid.frame_width)),
			i64::from(row).checked_mul(i64::from(self.grid.frame_height)),
		) else {
			return Err(ConfigurationFault::OffsetOverflow(frame).into());
		};
		Ok(FramePosition {
			column,
			row,
			offset_x: -x,
			offset_y: -y,
		})
	}

	/// Checks that `frame` may be shown in `state`.
	///
	/// A stopped sprite may show any frame. A playing or paused sprite is confined to its
	/// active clip.
	pub fn check_bounds(
		&self,
		frame: u32,
		state: PlaybackState,
		clip: Option<&ClipRange>,
	) -> Result<(), AnimationError> {
		if !state.is_active() {
			return Ok(());
		}

		match clip {
			Some(range) if range.contains(frame) => Ok(()),
			Some(range) => {
				Err(AnimationError::frame_out_of_clip(frame, range.begin_frame, range.end_frame))
			}
			None => Err(AnimationError::FrameOutOfBounds {
				frame,
				allowed: format!("no active clip while {state}"),
			}),
		}
	}

	/// Validates `frame`, then pushes its offset to `renderer`.
	///
	/// Nothing is sent to the renderer when validation fails.
	pub fn set_frame<R: Renderer + ?Sized>(
		&self,
		frame: u32,
		state: PlaybackState,
		clip: Option<&ClipRange>,
		renderer: &mut R,
	) -> Result<FramePosition, AnimationError> {
		self.check_bounds(frame, state, clip)?;
		let position = self.locate(frame)?;
		renderer.on_frame_changed(position.offset_x, position.offset_y);
		Ok(position)
	}
}
