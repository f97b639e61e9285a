use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use common::games::snake::{AutopilotKind, Point, PointMap, SnakeGameState, SnakeSettings};

fn create_game(size: u16) -> SnakeGameState {
    let settings = SnakeSettings {
        initial_size: size,
        wrap: true,
        autopilot: AutopilotKind::FoodSeeker,
        ..SnakeSettings::default()
    };
    let mut game = SnakeGameState::with_seed(settings, 10, 42);
    game.auto = true;
    game
}

fn bench_autopilot_1000_steps(mut game: SnakeGameState) {
    for _ in 0..1000 {
        if game.step().is_err() {
            game.reset(false);
            game.auto = true;
        }
    }
}

fn bench_step_crowded_board(mut game: SnakeGameState) {
    for _ in 0..100 {
        if game.step().is_err() {
            break;
        }
    }
}

fn bench_point_map_churn() {
    let mut map = PointMap::with_capacity(256);
    for i in 0..10_000u16 {
        map.insert(Point::new(i % 256, i / 256), i);
        if map.len() > 200 {
            let (oldest, _) = map.first().expect("map is not empty");
            map.remove(oldest);
        }
    }
    black_box(map.len());
}

fn step_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group.bench_function("autopilot_1000_steps", |b| {
        b.iter_batched(|| create_game(32), bench_autopilot_1000_steps, BatchSize::SmallInput)
    });

    group.bench_function("step_crowded_board", |b| {
        b.iter_batched(
            || {
                let mut game = create_game(64);
                game.fill_food(Some(false));
                game
            },
            bench_step_crowded_board,
            BatchSize::SmallInput,
        )
    });

    group.bench_function("point_map_churn", |b| {
        b.iter(bench_point_map_churn)
    });

    group.finish();
}

criterion_group!(benches, step_bench);
criterion_main!(benches);
