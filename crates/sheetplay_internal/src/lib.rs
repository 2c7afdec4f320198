//! This module is separated into its own crate to keep the public facade thin, and should not be used directly.

/// `use sheetplay_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export sheetplay_types for convenience
pub use sheetplay_types;

// Re-export commonly used types at crate root
pub use sheetplay_types::anim::{
	AnimationCatalog, AnimationDefinition, AnimationError, PlayType, PlaybackConfig,
	PlaybackController, PlaybackState, Renderer,
};
