//! Playback tests for `sheetplay-rs` against the bundled definition catalog

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use sheetplay_rs::prelude::*;

fn fixture(name: &str) -> PathBuf {
	let cargo_root = std::env::var("CARGO_MANIFEST_DIR").unwrap();
	PathBuf::from(cargo_root).join("tests").join("fixtures").join(name)
}

fn catalog() -> AnimationCatalog {
	AnimationCatalog::open(fixture("animdefs.json")).unwrap()
}

#[test_log::test]
fn test_catalog_loads_fixture() {
	let catalog = catalog();
	assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Flame", "TwilightSparkle"]);

	let flame = catalog.get("Flame").unwrap();
	assert_eq!(flame.image(), "Images/Flame512x720x8x8.png");
	assert_eq!(flame.frame_capacity(), 64);
	assert_eq!(flame.clip("burn"), Some(ClipRange::new(0, 63)));

	let twilight = catalog.get("TwilightSparkle").unwrap();
	assert_eq!(twilight.clip_count(), 5);
	assert_eq!(twilight.grid().duration_ms, 100.0);
	assert_eq!(twilight.clip("run_down"), Some(ClipRange::new(24, 29)));
}

#[test]
fn test_catalog_round_trips_through_json() {
	let catalog = catalog();
	let twilight = catalog.get("TwilightSparkle").unwrap();
	let json = twilight.to_json().unwrap();
	assert_eq!(AnimationDefinition::from_json(&json).unwrap(), *twilight);

	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	assert_eq!(value["animations"]["run_right"]["beginFrame"], 12);
	assert_eq!(value["frames"]["columns"], 10);
}

#[test_log::test]
fn test_burn_one_shot_from_the_middle() {
	let catalog = catalog();
	let mut flame = PlaybackController::new(catalog.get("Flame").unwrap(), RecordingRenderer::new());

	let completions = Rc::new(RefCell::new(Vec::new()));
	let seen = Rc::clone(&completions);
	flame
		.play_then("burn", PlayType::OneShot, move |s| seen.borrow_mut().push(s.current_frame()))
		.unwrap();
	flame.jump_to_frame(32).unwrap();
	assert_eq!(flame.elapsed_ms(), 1600.0);

	// 32 frames of 50 ms remain: 1600 ms, plus the tick that passes the end
	let mut ticks = 0;
	while flame.state() == PlaybackState::Playing {
		flame.tick(60.0).unwrap();
		ticks += 1;
		assert!(ticks < 100, "one-shot never finished");
	}

	assert_eq!(ticks, 27);
	assert_eq!(*completions.borrow(), vec![63]);
	assert_eq!(flame.renderer().last_frame(), Some((-448, -630)));
}

#[test]
fn test_twilight_direction_changes() {
	let catalog = catalog();
	let mut twilight =
		PlaybackController::new(catalog.get("TwilightSparkle").unwrap(), RecordingRenderer::new());

	twilight.play("run_right", PlayType::Loop).unwrap();
	for _ in 0..10 {
		twilight.tick(60.0).unwrap();
	}
	// 600 ms wraps back to the first frame
	assert_eq!(twilight.current_frame(), 12);

	twilight.play("run_down", PlayType::Loop).unwrap();
	assert_eq!(twilight.current_frame(), 24);
	// Frame 24: column 4, row 2
	assert_eq!(twilight.renderer().last_frame(), Some((-384, -192)));

	twilight.pause();
	twilight.tick(60.0).unwrap();
	twilight.resume();
	twilight.tick(120.0).unwrap();
	assert_eq!(twilight.current_frame(), 25);

	assert!(twilight.jump_to_frame(12).is_err());
	assert_eq!(twilight.current_frame(), 25);
}

#[test]
fn test_renderer_sees_every_frame_of_a_loop() {
	let catalog = catalog();
	let mut twilight =
		PlaybackController::new(catalog.get("TwilightSparkle").unwrap(), RecordingRenderer::new());
	twilight.play("run_up", PlayType::Loop).unwrap();
	twilight.renderer_mut().clear();

	for _ in 0..12 {
		twilight.tick(100.0).unwrap();
	}

	let columns: Vec<i64> = twilight.renderer().frames().iter().map(|(x, _)| -x / 96).collect();
	assert_eq!(columns, vec![1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0]);
}

#[test]
fn test_boxed_renderer() {
	let catalog = catalog();
	let renderer: Box<dyn Renderer> = Box::new(NullRenderer);
	let mut flame = PlaybackController::new(catalog.get("Flame").unwrap(), renderer);
	flame.play("burn", PlayType::Loop).unwrap();
	flame.tick(150.0).unwrap();
	assert_eq!(flame.current_frame(), 3);
}

#[test]
fn test_config_file_drives_controller() {
	let config = PlaybackConfig::from_toml_str("max_delta_ms = 50.0\natomic_jump = false").unwrap();
	let catalog = catalog();
	let mut flame =
		PlaybackController::with_config(catalog.get("Flame").unwrap(), NullRenderer, config)
			.unwrap();

	flame.play("burn", PlayType::Loop).unwrap();
	flame.tick(1000.0).unwrap();
	assert_eq!(flame.elapsed_ms(), 50.0);
	assert_eq!(flame.current_frame(), 1);
	assert!(!flame.config().atomic_jump);
}
