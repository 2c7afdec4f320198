//! Sprite sheet playback demo.
//!
//! Provides two subcommands:
//! - `inspect`: summarize a definition catalog and the sheet geometry of every clip.
//! - `play`: play one clip of one sprite in real time, logging every frame change.
//!
//! Run with `RUST_LOG=debug` to see each frame offset.

use std::{
	cell::Cell,
	path::{Path, PathBuf},
	rc::Rc,
	sync::Arc,
	time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use sheetplay_rs::prelude::*;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Play(opts) => run_play(opts),
	}
}

#[derive(Parser)]
#[command(name = "sheetplay_demo")]
#[command(author = "sheetplay-rs project")]
#[command(version)]
#[command(about = "Inspect sprite sheet definitions and play their clips", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print every definition in a catalog and the geometry of its clips
	Inspect(InspectArgs),
	/// Play one clip in real time
	Play(PlayArgs),
}

#[derive(Args)]
struct InspectArgs {
	/// Catalog file (JSON, or YAML with a .yaml/.yml extension)
	#[arg(value_name = "FILE", default_value = "demos/animdefs.json")]
	catalog: PathBuf,

	/// Only show this sprite
	#[arg(short, long, value_name = "NAME")]
	sprite: Option<String>,
}

#[derive(Args)]
struct PlayArgs {
	/// Sprite name in the catalog
	#[arg(value_name = "SPRITE")]
	sprite: String,

	/// Clip name within the sprite
	#[arg(value_name = "CLIP")]
	clip: String,

	/// Catalog file (JSON, or YAML with a .yaml/.yml extension)
	#[arg(short, long, value_name = "FILE", default_value = "demos/animdefs.json")]
	catalog: PathBuf,

	/// Playback settings file (TOML)
	#[arg(long, value_name = "FILE", env = "SHEETPLAY_CONFIG")]
	config: Option<PathBuf>,

	/// Play type: loop or one-shot
	#[arg(short, long, value_name = "TYPE", default_value = "loop")]
	mode: PlayType,

	/// Jump to this frame right after starting
	#[arg(short = 'j', long, value_name = "FRAME")]
	start_frame: Option<u32>,

	/// Stop after this many milliseconds of wall time
	#[arg(short, long, value_name = "MS", default_value_t = 3000)]
	duration: u64,
}

fn load_catalog(path: &Path) -> Result<AnimationCatalog> {
	AnimationCatalog::open(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let catalog = load_catalog(&args.catalog)?;

	let sprites: Vec<(&str, &Arc<AnimationDefinition>)> = match &args.sprite {
		Some(name) => catalog.iter().filter(|(sprite, _)| *sprite == name.as_str()).collect(),
		None => catalog.iter().collect(),
	};
	if sprites.is_empty() {
		bail!("No matching sprites in {}", args.catalog.display());
	}

	println!("Catalog: {} ({} sprites)", args.catalog.display(), catalog.len());
	for (name, definition) in sprites {
		print_definition(name, definition)?;
	}

	Ok(())
}

fn print_definition(name: &str, definition: &AnimationDefinition) -> Result<()> {
	let grid = definition.grid();
	let mapper = FrameMapper::new(*grid);

	println!();
	println!("{name}: {}", definition.image());
	println!(
		"  grid: {}x{} cells of {}x{} px ({} frames), {} ms/frame",
		grid.columns,
		grid.rows,
		grid.frame_width,
		grid.frame_height,
		definition.frame_capacity(),
		grid.duration_ms
	);

	for (clip, range) in definition.clips() {
		let first = mapper.locate(range.begin_frame)?;
		let last = mapper.locate(range.end_frame)?;
		let overflow = if u64::from(range.end_frame) >= definition.frame_capacity() {
			" (past the last cell)"
		} else {
			""
		};
		println!(
			"  - {clip:<16} frames {range} count {:>3}, cycle {:>6} ms, first ({}, {}), last ({}, {}){overflow}",
			range.frame_count(),
			range.frame_count() as f64 * grid.duration_ms,
			first.offset_x,
			first.offset_y,
			last.offset_x,
			last.offset_y
		);
	}

	Ok(())
}

fn run_play(args: PlayArgs) -> Result<()> {
	let catalog = load_catalog(&args.catalog)?;
	let Some(definition) = catalog.get(&args.sprite) else {
		bail!("Sprite '{}' not found in {}", args.sprite, args.catalog.display());
	};
	let config = PlaybackConfig::load(args.config.as_deref()).context("Failed to load playback config")?;

	let mut sprite =
		PlaybackController::with_config(definition, LogRenderer::new(args.sprite.clone()), config)?;

	let finished = Rc::new(Cell::new(false));
	let flag = Rc::clone(&finished);
	sprite.play_then(&args.clip, args.mode, move |s| {
		log::info!("Clip completed on frame {}", s.current_frame());
		flag.set(true);
	})?;
	if let Some(frame) = args.start_frame {
		sprite.jump_to_frame(frame)?;
	}

	let deadline = Instant::now() + Duration::from_millis(args.duration);
	let mut clock = FrameClock::new();
	let mut ticks = 0u64;
	while !finished.get() && Instant::now() < deadline {
		std::thread::sleep(config.tick_interval());
		sprite.tick(clock.delta_ms())?;
		ticks += 1;
	}

	// Stopping a clip that is still running fires the completion callback
	sprite.stop();
	println!(
		"Played '{}' on {} for {ticks} ticks, final frame {} ({})",
		args.clip,
		args.sprite,
		sprite.current_frame(),
		sprite.state()
	);

	Ok(())
}
