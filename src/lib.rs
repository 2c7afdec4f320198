#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sheetplay-rs` plays clips from sprite sheets: named frame ranges on a fixed grid,
//! advanced by an external tick and shown through a pluggable renderer.
//!
//! ```
//! use std::sync::Arc;
//! use sheetplay_rs::prelude::*;
//!
//! let definition = Arc::new(
//! 	AnimationDefinition::new("flame.png", FrameGridSpec::new(64, 90, 8, 8, 50.0))
//! 		.with_clip("burn", ClipRange::new(0, 63)),
//! );
//! let mut flame = PlaybackController::new(definition, NullRenderer);
//! flame.play("burn", PlayType::OneShot).unwrap();
//! for _ in 0..60 {
//! 	flame.tick(60.0).unwrap();
//! }
//! assert_eq!(flame.state(), PlaybackState::Stopped);
//! assert_eq!(flame.current_frame(), 63);
//! ```
pub use sheetplay_internal::*;
