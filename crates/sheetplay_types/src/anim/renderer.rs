//! Renderer abstraction and a few stock implementations.
//!
//! The animation core never touches presentation state. It reports frame changes as the
//! pixel offset of the frame's top-left corner on the sheet (negated, so it can be applied
//! directly as a background/texture offset) and forwards visibility toggles.

use log::{debug, info};

/// Receives visual updates from a [`PlaybackController`](super::PlaybackController).
pub trait Renderer {
	/// Called whenever a new frame is shown.
	fn on_frame_changed(&mut self, offset_x: i64, offset_y: i64);

	/// Called when the sprite is shown or hidden.
	fn on_visibility_changed(&mut self, visible: bool);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
	fn on_frame_changed(&mut self, offset_x: i64, offset_y: i64) {
		(**self).on_frame_changed(offset_x, offset_y);
	}

	fn on_visibility_changed(&mut self, visible: bool) {
		(**self).on_visibility_changed(visible);
	}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
	fn on_frame_changed(&mut self, offset_x: i64, offset_y: i64) {
		(**self).on_frame_changed(offset_x, offset_y);
	}

	fn on_visibility_changed(&mut self, visible: bool) {
		(**self).on_visibility_changed(visible);
	}
}

/// Renderer that discards every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
	fn on_frame_changed(&mut self, _offset_x: i64, _offset_y: i64) {}

	fn on_visibility_changed(&mut self, _visible: bool) {}
}

/// Renderer that writes every update to the log, tagged with a sprite label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRenderer {
	label: String,
}

impl LogRenderer {
	/// Creates a log renderer for the named sprite.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
		}
	}

	/// Returns the sprite label.
	pub fn label(&self) -> &str {
		&self.label
	}
}

impl Renderer for LogRenderer {
	fn on_frame_changed(&mut self, offset_x: i64, offset_y: i64) {
		debug!("[{}] background position {}px {}px", self.label, offset_x, offset_y);
	}

	fn on_visibility_changed(&mut self, visible: bool) {
		info!("[{}] {}", self.label, if visible { "visible" } else { "hidden" });
	}
}

/// A single update captured by [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
	/// Frame changed to the given pixel offset
	Frame {
		/// Horizontal offset in pixels
		x: i64,
		/// Vertical offset in pixels
		y: i64,
	},
	/// Visibility toggled
	Visibility(bool),
}

/// Renderer that records every update, for tests and tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
	events: Vec<RenderEvent>,
}

impl RecordingRenderer {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// All recorded updates in arrival order.
	pub fn events(&self) -> &[RenderEvent] {
		&self.events
	}

	/// Only the frame offsets, in arrival order.
	pub fn frames(&self) -> Vec<(i64, i64)> {
		self.events
			.iter()
			.filter_map(|event| match event {
				RenderEvent::Frame {
					x,
					y,
				} => Some((*x, *y)),
				RenderEvent::Visibility(_) => None,
			})
			.collect()
	}

	/// The most recent frame offset, if any.
	pub fn last_frame(&self) -> Option<(i64, i64)> {
		self.events.iter().rev().find_map(|event| match event {
			RenderEvent::Frame {
				x,
				y,
			} => Some((*x, *y)),
			RenderEvent::Visibility(_) => None,
		})
	}

	/// Forgets everything recorded so far.
	pub fn clear(&mut self) {
		self.events.clear();
	}
}

impl Renderer for RecordingRenderer {
	fn on_frame_changed(&mut self, offset_x: i64, offset_y: i64) {
		self.events.push(RenderEvent::Frame {
			x: offset_x,
			y: offset_y,
		});
	}

	fn on_visibility_changed(&mut self, visible: bool) {
		self.events.push(RenderEvent::Visibility(visible));
	}
}
