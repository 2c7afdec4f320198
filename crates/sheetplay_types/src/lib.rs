//! This crate provides the core types of the `sheetplay-rs` project.
//!
//! # Overview
//!
//! - **Definitions**: frame grid geometry and named clips, loadable from JSON or YAML
//! - **Catalog**: a set of named definitions shared between controllers
//! - **Controller**: the play/stop/pause/resume/jump state machine driven by ticks
//! - **Renderer**: the seam through which frame offsets and visibility reach the host
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use std::sync::Arc;
//! use sheetplay_types::prelude::*;
//!
//! let definition = Arc::new(
//! 	AnimationDefinition::new("sparkle.png", FrameGridSpec::new(96, 96, 10, 3, 100.0))
//! 		.with_clip("run_right", ClipRange::new(12, 17)),
//! );
//! let mut sprite = PlaybackController::new(definition, NullRenderer);
//! sprite.play("run_right", PlayType::Loop).unwrap();
//! sprite.tick(150.0).unwrap();
//! assert_eq!(sprite.current_frame(), 13);
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use sheetplay_types::anim::{AnimationCatalog, PlaybackConfig};
//!
//! let catalog = AnimationCatalog::open("animdefs.json").unwrap();
//! let config = PlaybackConfig::load(None).unwrap();
//! ```

pub mod anim;

/// `use sheetplay_types::prelude::*;` to import commonly used items.
pub mod prelude;
