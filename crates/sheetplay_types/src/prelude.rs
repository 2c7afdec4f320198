//! Prelude module for `sheetplay_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use sheetplay_types::prelude::*;
//!
//! let grid = FrameGridSpec::new(64, 90, 8, 8, 50.0);
//! let mapper = FrameMapper::new(grid);
//! assert_eq!(mapper.locate(9).unwrap().offset_y, -90);
//! ```

#[doc(inline)]
pub use crate::anim::{
	// Definitions
	AnimationCatalog,
	AnimationDefinition,
	// Errors
	AnimationError,
	ClipRange,
	ConfigError,
	ConfigurationFault,
	DefinitionError,
	FrameClock,
	FrameGridSpec,
	FrameMapper,
	FramePosition,

	// Renderers
	LogRenderer,
	NullRenderer,
	PlayType,

	// Playback
	PlaybackConfig,
	PlaybackController,
	PlaybackState,
	RecordingRenderer,
	RenderEvent,
	Renderer,
};

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
