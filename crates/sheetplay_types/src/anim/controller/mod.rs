//! Playback controller for one animated sprite.
//!
//! The controller owns playback state, the elapsed-time accumulator and the current frame.
//! It is driven from two directions:
//! - an external tick source calls [`PlaybackController::tick`] with the time elapsed since
//!   the previous tick;
//! - the host calls the control operations (`play`, `stop`, `pause`, `resume`,
//!   `jump_to_frame`, `set_visible`) between ticks.
//!
//! Everything runs synchronously on the caller's thread. Completion callbacks receive the
//! controller itself, so a callback may start the next clip; the controller always finishes
//! its own state change before running one.

use std::sync::Arc;

use log::{debug, error, trace, warn};

use super::{
	advance::{Advancer, FrameAction},
	config::PlaybackConfig,
	definition::{AnimationDefinition, ClipRange},
	error::{AnimationError, ConfigError, ConfigurationFault},
	mapper::{FrameMapper, FramePosition},
	renderer::Renderer,
	state::{PlayType, PlaybackState},
};


/// Completion callback, fired once when the clip it was registered with stops or is replaced.
pub type CompletionFn<R> = Box<dyn FnOnce(&mut PlaybackController<R>)>;

/// The clip currently owned by a playing or paused controller.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveClip {
	name: String,
	range: ClipRange,
}

/// Playback state together with the data that only exists in that state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Playback {
	#[default]
	Stopped,
	Playing(ActiveClip),
	Paused(ActiveClip),
}

impl Playback {
	fn state(&self) -> PlaybackState {
		match self {
			Self::Stopped => PlaybackState::Stopped,
			Self::Playing(_) => PlaybackState::Playing,
			Self::Paused(_) => PlaybackState::Paused,
		}
	}

	fn clip(&self) -> Option<&ActiveClip> {
		match self {
			Self::Stopped => None,
			Self::Playing(clip) | Self::Paused(clip) => Some(clip),
		}
	}
}

/// Sprite-sheet playback state machine.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use sheetplay_types::anim::{
/// 	AnimationDefinition, ClipRange, FrameGridSpec, PlayType, PlaybackController,
/// 	PlaybackState, RecordingRenderer,
/// };
///
/// let definition = Arc::new(
/// 	AnimationDefinition::new("flame.png", FrameGridSpec::new(64, 90, 8, 8, 50.0))
/// 		.with_clip("burn", ClipRange::new(0, 63)),
/// );
/// let mut flame = PlaybackController::new(definition, RecordingRenderer::new());
///
/// flame.play("burn", PlayType::Loop)?;
/// flame.tick(60.0)?;
/// assert_eq!(flame.current_frame(), 1);
/// assert_eq!(flame.renderer().last_frame(), Some((-64, 0)));
///
/// flame.stop();
/// assert_eq!(flame.state(), PlaybackState::Stopped);
/// # Ok::<(), sheetplay_types::anim::AnimationError>(())
/// ```
pub struct PlaybackController<R: Renderer> {
	definition: Arc<AnimationDefinition>,
	mapper: FrameMapper,
	renderer: R,
	config: PlaybackConfig,
	playback: Playback,
	play_type: PlayType,
	elapsed_ms: f64,
	current_frame: u32,
	visible: bool,
	on_complete: Option<CompletionFn<R>>,
}

impl<R: Renderer> PlaybackController<R> {
	/// Creates a stopped controller with default settings and shows frame 0.
	pub fn new(definition: Arc<AnimationDefinition>, renderer: R) -> Self {
		Self::build(definition, renderer, PlaybackConfig::default())
	}

	/// Creates a stopped controller with the given settings and shows frame 0.
	///
	/// # Errors
	/// Returns the [`PlaybackConfig::validate`] error when the settings are unusable.
	pub fn with_config(
		definition: Arc<AnimationDefinition>,
		renderer: R,
		config: PlaybackConfig,
	) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self::build(definition, renderer, config))
	}

	fn build(definition: Arc<AnimationDefinition>, renderer: R, config: PlaybackConfig) -> Self {
		let mapper = FrameMapper::new(*definition.grid());
		let mut controller = Self {
			definition,
			mapper,
			renderer,
			config,
			playback: Playback::Stopped,
			play_type: PlayType::OneShot,
			elapsed_ms: 0.0,
			current_frame: 0,
			visible: true,
			on_complete: None,
		};
		if let Err(e) = controller.set_frame(0) {
			error!("PlaybackController::new - cannot show initial frame: {e}");
		}
		controller
	}

	/// Starts `clip` from its first frame.
	///
	/// Any completion callback registered by the previous `play` fires first if that clip
	/// is still playing or paused.
	pub fn play(&mut self, clip: &str, play_type: PlayType) -> Result<(), AnimationError> {
		self.start(clip, play_type, None)
	}

	/// Starts `clip` and registers `on_complete`.
	///
	/// The callback fires exactly once: when the clip stops (one-shot end or
	/// [`stop`](Self::stop)) or when another `play` replaces it.
	pub fn play_then<F>(
		&mut self,
		clip: &str,
		play_type: PlayType,
		on_complete: F,
	) -> Result<(), AnimationError>
	where
		F: FnOnce(&mut Self) + 'static,
	{
		self.start(clip, play_type, Some(Box::new(on_complete)))
	}

	fn start(
		&mut self,
		name: &str,
		play_type: PlayType,
		on_complete: Option<CompletionFn<R>>,
	) -> Result<(), AnimationError> {
		let Some(range) = self.definition.clip(name) else {
			warn!("PlaybackController::play - unknown clip '{name}'");
			return Err(AnimationError::UnknownClip(name.to_string()));
		};
		if range.is_inverted() {
			let fault = ConfigurationFault::NonPositiveFrameCount(range.frame_count());
			error!("PlaybackController::play - clip '{name}': {fault}");
			return Err(fault.into());
		}
		self.mapper.locate(range.begin_frame)?;

		// A callback may start a clip of its own; that clip is replaced too
		while self.playback.state().is_active()
			&& let Some(previous) = self.on_complete.take()
		{
			previous(self);
		}

		debug!("Playing clip '{name}' ({range}, {play_type})");
		self.playback = Playback::Playing(ActiveClip {
			name: name.to_string(),
			range,
		});
		self.play_type = play_type;
		self.elapsed_ms = 0.0;
		self.current_frame = range.begin_frame;
		self.on_complete = on_complete;
		self.set_frame(range.begin_frame)
	}

	/// Stops the active clip and fires its completion callback.
	///
	/// Does nothing when already stopped. The last shown frame stays on screen.
	pub fn stop(&mut self) {
		if !self.playback.state().is_active() {
			return;
		}

		debug!("Stopped on frame {}", self.current_frame);
		self.playback = Playback::Stopped;
		if let Some(on_complete) = self.on_complete.take() {
			on_complete(self);
		}
	}

	/// Pauses a playing clip. Does nothing in any other state.
	pub fn pause(&mut self) {
		self.playback = match std::mem::take(&mut self.playback) {
			Playback::Playing(clip) => {
				debug!("Paused clip '{}' on frame {}", clip.name, self.current_frame);
				Playback::Paused(clip)
			}
			other => other,
		};
	}

	/// Resumes a paused clip. Does nothing in any other state.
	pub fn resume(&mut self) {
		self.playback = match std::mem::take(&mut self.playback) {
			Playback::Paused(clip) => {
				debug!("Resumed clip '{}' on frame {}", clip.name, self.current_frame);
				Playback::Playing(clip)
			}
			other => other,
		};
	}

	/// Skips to `frame` of the playing or paused clip.
	///
	/// The elapsed timer is re-based to `frame * duration` so later ticks continue from
	/// there.
	///
	/// # Errors
	/// - [`AnimationError::InvalidState`] when stopped.
	/// - [`AnimationError::FrameOutOfBounds`] when `frame` is outside the active clip. With
	///   [`PlaybackConfig::atomic_jump`] off, the timer has already been re-based when this
	///   is returned.
	pub fn jump_to_frame(&mut self, frame: u32) -> Result<(), AnimationError> {
		let state = self.state();
		let Some(range) = self.playback.clip().map(|clip| clip.range) else {
			warn!("PlaybackController::jump_to_frame - called while {state}");
			return Err(AnimationError::InvalidState {
				operation: "jump to a frame",
				state,
			});
		};

		if self.config.atomic_jump
			&& let Err(e) = self.mapper.check_bounds(frame, state, Some(&range))
		{
			error!("PlaybackController::jump_to_frame - {e}");
			return Err(e);
		}

		self.elapsed_ms = f64::from(frame) * self.definition.grid().duration_ms;
		self.set_frame(frame)
	}

	/// Advances the playing clip by `delta_ms` of wall-clock time.
	///
	/// Deltas are clamped to [`PlaybackConfig::max_delta_ms`]. Ticks while stopped or
	/// paused are ignored. A one-shot clip that reaches its end shows its last frame, then
	/// stops and fires its completion callback before this returns.
	///
	/// # Errors
	/// Returns [`AnimationError::Configuration`] when the active clip cannot be animated.
	/// The controller is left exactly as it was before the tick.
	pub fn tick(&mut self, delta_ms: f64) -> Result<(), AnimationError> {
		let Playback::Playing(clip) = &self.playback else {
			return Ok(());
		};

		let advancer = Advancer::new(clip.range, self.definition.grid().duration_ms, self.play_type)
			.with_max_delta(self.config.max_delta_ms);
		let step = match advancer.step(self.elapsed_ms, delta_ms) {
			Ok(step) => step,
			Err(e) => {
				error!("PlaybackController::tick - clip '{}': {e}", clip.name);
				return Err(e);
			}
		};
		trace!("tick {delta_ms} ms -> timer {} ms, {:?}", step.elapsed_ms, step.action);

		match step.action {
			FrameAction::Hold => {}
			FrameAction::Show(frame) if frame == self.current_frame => {}
			// Finish re-applies the last frame before stop() drops the active clip
			FrameAction::Show(frame) | FrameAction::Finish(frame) => self.set_frame(frame)?,
		}
		self.elapsed_ms = step.elapsed_ms;
		if matches!(step.action, FrameAction::Finish(_)) {
			self.stop();
		}
		Ok(())
	}

	/// Shows or hides the sprite.
	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
		self.renderer.on_visibility_changed(visible);
	}

	/// Tears the controller down and hands back the renderer.
	///
	/// Consuming the controller guarantees no tick can reach it afterwards. The pending
	/// completion callback, if any, is dropped without being called.
	pub fn dispose(mut self) -> R {
		if self.on_complete.take().is_some() {
			debug!("Disposed with a pending completion callback");
		}
		self.renderer
	}

	/// Current playback state.
	pub fn state(&self) -> PlaybackState {
		self.playback.state()
	}

	/// Play type of the current (or most recent) clip.
	pub fn play_type(&self) -> PlayType {
		self.play_type
	}

	/// Name of the active clip, `None` when stopped.
	pub fn active_clip(&self) -> Option<&str> {
		self.playback.clip().map(|clip| clip.name.as_str())
	}

	/// Frame range of the active clip, `None` when stopped.
	pub fn active_range(&self) -> Option<ClipRange> {
		self.playback.clip().map(|clip| clip.range)
	}

	/// Time into the current clip in milliseconds.
	pub fn elapsed_ms(&self) -> f64 {
		self.elapsed_ms
	}

	/// Frame currently on screen.
	pub fn current_frame(&self) -> u32 {
		self.current_frame
	}

	/// Sheet position of the frame currently on screen.
	pub fn current_position(&self) -> Result<FramePosition, AnimationError> {
		self.mapper.locate(self.current_frame)
	}

	/// Whether the sprite is currently shown.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Whether a completion callback is registered.
	pub fn has_completion(&self) -> bool {
		self.on_complete.is_some()
	}

	/// Definition this controller plays from.
	pub fn definition(&self) -> &Arc<AnimationDefinition> {
		&self.definition
	}

	/// Settings this controller was built with.
	pub fn config(&self) -> &PlaybackConfig {
		&self.config
	}

	/// Renderer receiving updates.
	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	/// Mutable access to the renderer.
	pub fn renderer_mut(&mut self) -> &mut R {
		&mut self.renderer
	}

	fn set_frame(&mut self, frame: u32) -> Result<(), AnimationError> {
		let state = self.playback.state();
		let range = self.playback.clip().map(|clip| clip.range);
		match self.mapper.set_frame(frame, state, range.as_ref(), &mut self.renderer) {
			Ok(_) => {
				self.current_frame = frame;
				Ok(())
			}
			Err(e) => {
				error!("PlaybackController::set_frame - {e}");
				Err(e)
			}
		}
	}
}

impl<R: Renderer> std::fmt::Debug for PlaybackController<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PlaybackController")
			.field("state", &self.state())
			.field("play_type", &self.play_type)
			.field("active_clip", &self.active_clip())
			.field("elapsed_ms", &self.elapsed_ms)
			.field("current_frame", &self.current_frame)
			.field("visible", &self.visible)
			.field("has_completion", &self.on_complete.is_some())
			.finish()
	}
}
