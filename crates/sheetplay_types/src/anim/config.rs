//! Playback settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then `SHEETPLAY_*`
//! environment variables (for example `SHEETPLAY_MAX_DELTA_MS=100`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{advance::DEFAULT_MAX_DELTA_MS, error::ConfigError};

/// Reference cadence of the external tick source, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 60;

/// Prefix of environment variables read by [`PlaybackConfig::load`].
pub const ENV_PREFIX: &str = "SHEETPLAY";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Tunables shared by every controller built from them.
///
/// # Examples
///
/// ```
/// use sheetplay_types::anim::PlaybackConfig;
///
/// let config = PlaybackConfig::from_toml_str("max_delta_ms = 100.0").unwrap();
/// assert_eq!(config.max_delta_ms, 100.0);
/// assert_eq!(config.tick_interval_ms, 60);
/// assert!(config.atomic_jump);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
	/// Largest delta a single tick may apply. Longer stalls are caught up over several ticks.
	pub max_delta_ms: f64,

	/// Cadence the host should tick at. The controller itself never reads a clock.
	pub tick_interval_ms: u64,

	/// Validate the target of `jump_to_frame` before re-basing the timer.
	///
	/// When `false` the timer is re-based first and stays re-based even if the frame is
	/// rejected.
	pub atomic_jump: bool,
}

impl Default for PlaybackConfig {
	fn default() -> Self {
		Self {
			max_delta_ms: DEFAULT_MAX_DELTA_MS,
			tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
			atomic_jump: true,
		}
	}
}

impl PlaybackConfig {
	/// Loads settings from defaults, an optional TOML file and the environment.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let mut builder = Self::defaults_builder()?;
		if let Some(path) = path {
			builder = builder.add_source(config::File::from(path));
		}
		builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
		Self::finish(builder)
	}

	/// Parses settings from a TOML document on top of the defaults.
	pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
		let builder = Self::defaults_builder()?
			.add_source(config::File::from_str(toml, config::FileFormat::Toml));
		Self::finish(builder)
	}

	/// Checks that the tick clamp and tick cadence are usable.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.max_delta_ms.is_finite() || self.max_delta_ms <= 0.0 {
			return Err(ConfigError::InvalidMaxDelta(self.max_delta_ms));
		}
		if self.tick_interval_ms == 0 {
			return Err(ConfigError::InvalidTickInterval(self.tick_interval_ms));
		}
		Ok(())
	}

	/// Tick cadence as a [`Duration`](std::time::Duration).
	pub fn tick_interval(&self) -> std::time::Duration {
		std::time::Duration::from_millis(self.tick_interval_ms)
	}

	fn defaults_builder() -> Result<Builder, ConfigError> {
		let defaults = Self::default();
		Ok(config::Config::builder()
			.set_default("max_delta_ms", defaults.max_delta_ms)?
			.set_default("tick_interval_ms", defaults.tick_interval_ms)?
			.set_default("atomic_jump", defaults.atomic_jump)?)
	}

	fn finish(builder: Builder) -> Result<Self, ConfigError> {
		let config: Self = builder.build()?.try_deserialize()?;
		config.validate()?;
		log::debug!("Loaded playback config: {config:?}");
		Ok(config)
	}
}
