//! Prelude module for `sheetplay_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use sheetplay_internal::prelude::*;
//!
//! let catalog = AnimationCatalog::new();
//! assert!(catalog.is_empty());
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.on_visibility_changed(false);
//! assert_eq!(renderer.events(), &[RenderEvent::Visibility(false)]);
//! ```

// Re-export everything from sheetplay_types::prelude
#[doc(inline)]
pub use sheetplay_types::prelude::*;

// Re-export the entire sheetplay_types module for advanced usage
#[doc(inline)]
pub use sheetplay_types;
