//! Sprite-sheet animation playback.
//!
//! A sprite sheet is one image holding equally sized frames on a grid. An
//! [`AnimationDefinition`] names contiguous frame ranges (clips) on that grid, and a
//! [`PlaybackController`] plays one clip at a time, telling its [`Renderer`] which pixel
//! offset of the sheet to show.

pub mod advance;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod controller;
pub mod definition;
mod error;
pub mod mapper;
pub mod renderer;
pub mod state;

pub use advance::{Advance, Advancer, DEFAULT_MAX_DELTA_MS, FrameAction, MIN_CYCLE_MS};
pub use catalog::AnimationCatalog;
pub use clock::FrameClock;
pub use self::config::{DEFAULT_TICK_INTERVAL_MS, ENV_PREFIX, PlaybackConfig};
pub use controller::{CompletionFn, PlaybackController};
pub use definition::{AnimationDefinition, ClipRange, FrameGridSpec};
pub use error::{AnimationError, ConfigError, ConfigurationFault, DefinitionError};
pub use mapper::{FrameMapper, FramePosition};
pub use renderer::{LogRenderer, NullRenderer, RecordingRenderer, RenderEvent, Renderer};
pub use state::{PlayType, PlaybackState};
