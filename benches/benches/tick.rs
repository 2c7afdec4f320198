//! Benchmark suite for playback ticks
//!
//! This benchmark measures the cost of advancing clips and of the controller operations
//! hosts call between ticks.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sheetplay_benches::{FULL_CLIP, ROW_CLIP, jittered_deltas, sizes, synthetic_definition};
use sheetplay_types::anim::{
	Advancer, ClipRange, FrameMapper, NullRenderer, PlayType, PlaybackController,
};

const TICKS: usize = 10_000;

/// Benchmark the pure advance step without a controller
fn bench_advance_step(c: &mut Criterion) {
	let mut group = c.benchmark_group("advance_step");
	let deltas = jittered_deltas(TICKS, 60.0, 1);
	group.throughput(Throughput::Elements(TICKS as u64));

	for play_type in [PlayType::Loop, PlayType::OneShot] {
		let advancer = Advancer::new(ClipRange::new(0, 63), 50.0, play_type);
		group.bench_with_input(BenchmarkId::from_parameter(play_type), &deltas, |b, deltas| {
			b.iter(|| {
				let mut elapsed = 0.0;
				for delta in deltas {
					if let Ok(step) = advancer.step(elapsed, black_box(*delta)) {
						elapsed = step.elapsed_ms;
					}
				}
				black_box(elapsed)
			});
		});
	}

	group.finish();
}

/// Benchmark looping playback through the controller on sheets of different sizes
fn bench_controller_loop(c: &mut Criterion) {
	let mut group = c.benchmark_group("controller_loop");
	let deltas = jittered_deltas(TICKS, 60.0, 2);
	group.throughput(Throughput::Elements(TICKS as u64));

	for (name, (columns, rows)) in [("small", sizes::SMALL), ("flame", sizes::FLAME), ("large", sizes::LARGE)] {
		let definition = synthetic_definition(columns, rows, 16.0);
		group.bench_with_input(BenchmarkId::new("full_sheet", name), &deltas, |b, deltas| {
			b.iter(|| {
				let mut sprite = PlaybackController::new(definition.clone(), NullRenderer);
				sprite.play(FULL_CLIP, PlayType::Loop).unwrap();
				for delta in deltas {
					sprite.tick(black_box(*delta)).unwrap();
				}
				black_box(sprite.current_frame())
			});
		});
	}

	group.finish();
}

/// Benchmark one-shot clips that restart from their completion callback
fn bench_controller_one_shot_chain(c: &mut Criterion) {
	let mut group = c.benchmark_group("controller_one_shot");
	let definition = synthetic_definition(sizes::FLAME.0, sizes::FLAME.1, 50.0);
	let deltas = jittered_deltas(TICKS, 60.0, 3);
	group.throughput(Throughput::Elements(TICKS as u64));

	group.bench_function("restart_on_complete", |b| {
		b.iter(|| {
			let mut sprite = PlaybackController::new(definition.clone(), NullRenderer);
			sprite.play(ROW_CLIP, PlayType::OneShot).unwrap();
			for delta in &deltas {
				sprite.tick(black_box(*delta)).unwrap();
				if !sprite.state().is_active() {
					sprite.play(ROW_CLIP, PlayType::OneShot).unwrap();
				}
			}
			black_box(sprite.current_frame())
		});
	});

	group.finish();
}

/// Benchmark clip switches, jumps and frame lookups
fn bench_control_operations(c: &mut Criterion) {
	let mut group = c.benchmark_group("control_ops");
	let definition = synthetic_definition(sizes::LARGE.0, sizes::LARGE.1, 16.0);

	group.bench_function("play_switch", |b| {
		let mut sprite = PlaybackController::new(definition.clone(), NullRenderer);
		b.iter(|| {
			sprite.play(black_box(FULL_CLIP), PlayType::Loop).unwrap();
			sprite.play(black_box(ROW_CLIP), PlayType::Loop).unwrap();
		});
	});

	group.bench_function("jump_to_frame", |b| {
		let mut sprite = PlaybackController::new(definition.clone(), NullRenderer);
		sprite.play(FULL_CLIP, PlayType::Loop).unwrap();
		let mut frame = 0u32;
		b.iter(|| {
			frame = (frame + 37) % 1024;
			sprite.jump_to_frame(black_box(frame)).unwrap();
		});
	});

	let mapper = FrameMapper::new(*definition.grid());
	group.bench_function("locate", |b| {
		b.iter(|| {
			let mut sum = 0i64;
			for frame in 0..1024 {
				if let Ok(pos) = mapper.locate(black_box(frame)) {
					sum += pos.offset_x + pos.offset_y;
				}
			}
			black_box(sum)
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_advance_step,
	bench_controller_loop,
	bench_controller_one_shot_chain,
	bench_control_operations,
);

criterion_main!(benches);
