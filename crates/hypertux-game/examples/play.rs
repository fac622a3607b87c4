//! Example playing a sequence of moves on a board.
//!
//! This example shows how to:
//! - Load a wall layout from a file of comma-separated wall flags
//! - Create a reproducible board from a seed
//! - Apply moves and report each outcome, the step count, and the goal state
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play -- red:north blue:e
//! ```
//!
//! Reproduce a board from a seed printed by an earlier run:
//!
//! ```sh
//! cargo run --example play -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1 red:s
//! ```
//!
//! Load walls from a layout file (one row per line, `1` = north wall,
//! `2` = west wall, `3` = both):
//!
//! ```sh
//! cargo run --example play -- --layout board.csv --show-walls green:west
//! ```
//!
//! Set `RUST_LOG=debug` to see the engine's log output.

use std::{fs, process};

use clap::{Parser, ValueEnum};
use hypertux_core::{Color, Direction, Size, WallMap};
use hypertux_game::{Board, BoardOptions, BoardSeed, DEFAULT_BOARD_SIZE, GoalPlacement};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GoalKind {
    Random,
    NearWalls,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Wall layout file. Overrides the board size.
    #[arg(long, value_name = "FILE")]
    layout: Option<String>,

    /// Board width when no layout is given.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_BOARD_SIZE.w)]
    width: i32,

    /// Board height when no layout is given.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_BOARD_SIZE.h)]
    height: i32,

    /// Seed as 64 hex characters. A random seed is used if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,

    /// Goal placement strategy.
    #[arg(long, value_name = "KIND", default_value = "near-walls")]
    goal: GoalKind,

    /// Print the wall layout before playing.
    #[arg(long)]
    show_walls: bool,

    /// Moves as `color:direction`, e.g. `red:north` or `b:w`.
    #[arg(value_name = "MOVE", value_parser = parse_move)]
    moves: Vec<(Color, Direction)>,
}

fn parse_move(s: &str) -> Result<(Color, Direction), String> {
    let (color, direction) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `color:direction`, got {s:?}"))?;
    let color = parse_color(color)?;
    let direction = direction.parse::<Direction>().map_err(|e| e.to_string())?;
    Ok((color, direction))
}

fn parse_color(s: &str) -> Result<Color, String> {
    if let Ok(color) = s.parse() {
        return Ok(color);
    }
    // single-letter shorthand; `k` is black
    let color = match s.trim().to_ascii_lowercase().as_str() {
        "r" => Color::Red,
        "g" => Color::Green,
        "b" => Color::Blue,
        "y" => Color::Yellow,
        "k" => Color::Black,
        _ => return Err(format!("unknown color: {s:?}")),
    };
    Ok(color)
}

fn load_wall_map(args: &Args) -> WallMap {
    let Some(path) = &args.layout else {
        return WallMap::new(Size::new(args.width, args.height));
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {path}: {e}");
        process::exit(1);
    });
    text.parse().unwrap_or_else(|e| {
        eprintln!("Invalid layout in {path}: {e}");
        process::exit(1);
    })
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let goal = match args.goal {
        GoalKind::Random => GoalPlacement::Random,
        GoalKind::NearWalls => GoalPlacement::NearWalls,
    };
    let mut options = BoardOptions::default()
        .with_wall_map(load_wall_map(&args))
        .with_goal_placement(goal);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }

    let mut board = Board::with_options(options).unwrap_or_else(|e| {
        eprintln!("Failed to create board: {e}");
        process::exit(1);
    });

    println!("Seed: {}", board.seed());
    println!("Size: {}", board.size());
    if args.show_walls {
        println!("Walls:");
        println!("{}", board.wall_map());
    }
    for actor in board.actors() {
        println!("  {:<6} actor at {}", actor.color(), actor.point());
    }
    let goal = board.goal();
    println!("Goal: {} at {}", goal.color(), goal.point());
    println!();

    for &(color, direction) in &args.moves {
        match board.move_actor(color, direction) {
            Ok(outcome) if outcome.moved => {
                let suffix = if outcome.goaled { " (goal!)" } else { "" };
                println!("{color} {direction}: moved to {}{suffix}", outcome.point);
            }
            Ok(outcome) => println!("{color} {direction}: blocked at {}", outcome.point),
            Err(e) => println!("{color} {direction}: {e}"),
        }
    }

    println!();
    println!("Steps: {}", board.steps());
    println!("Goal reached: {}", board.is_goaled());
}
