//! Benchmarks for slide resolution.
//!
//! # Benchmarks
//!
//! - **`next_stop`**: resolves all four directions for every actor on a seeded
//!   board with walls placed near the center.
//! - **`move_undo`**: moves every actor in every direction, then undoes all
//!   recorded moves.
//!
//! # Test Data
//!
//! Uses three fixed seeds so actor placement is reproducible:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench slide
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use hypertux_core::{Color, Direction, Point, Size, WallMap};
use hypertux_game::{Board, BoardOptions, BoardSeed, DEFAULT_BOARD_SIZE};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn walled_map(size: Size) -> WallMap {
    let mut walls = WallMap::new(size);
    for i in (1..size.w.min(size.h)).step_by(3) {
        walls.put_h_wall(Point::new(i, size.h - i));
        walls.put_v_wall(Point::new(size.w - i, i));
    }
    walls
}

fn board(seed: &str) -> Board {
    let seed = BoardSeed::from_str(seed).unwrap();
    let options = BoardOptions::default()
        .with_wall_map(walled_map(DEFAULT_BOARD_SIZE))
        .with_seed(seed);
    Board::with_options(options).unwrap()
}

fn bench_next_stop(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let board = board(seed);
        c.bench_with_input(
            BenchmarkId::new("next_stop", format!("seed_{i}")),
            &board,
            |b, board| {
                b.iter(|| {
                    for color in Color::ALL {
                        for direction in Direction::ALL {
                            hint::black_box(board.next_stop(color, direction).unwrap());
                        }
                    }
                });
            },
        );
    }
}

fn bench_move_undo(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let board = board(seed);
        c.bench_with_input(
            BenchmarkId::new("move_undo", format!("seed_{i}")),
            &board,
            |b, board| {
                b.iter_batched(
                    || hint::black_box(board.clone()),
                    |mut board| {
                        for color in Color::ALL {
                            for direction in Direction::ALL {
                                board.move_actor(color, direction).unwrap();
                            }
                        }
                        board.reset();
                        board
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_next_stop,
        bench_move_undo
);
criterion_main!(benches);
