//! Board simulation for the Hypertux sliding-puzzle engine.
//!
//! A [`Board`] holds the walls, one [`Actor`] per color, and a [`Goal`]. An
//! actor pushed in a direction slides until it hits a wall, the board edge, or
//! another actor. Every successful move is recorded in a [`History`] that
//! supports undo and redo.
//!
//! # Overview
//!
//! - [`next_stop`]: slide resolution as a pure function of positions and walls
//! - [`Board`]: moves, undo/redo, new games, and placement of actors and goals
//! - [`Placement`]: the [`ActorPlacement`] and [`GoalPlacement`] strategies
//! - [`BoardOptions`] and [`BoardSeed`]: size, walls, strategies, and the seed
//!   that makes a board reproducible
//!
//! # Examples
//!
//! ```
//! use hypertux_core::{Color, Direction, Size};
//! use hypertux_game::{Board, BoardOptions, BoardSeed};
//!
//! let options = BoardOptions::new(Size::new(16, 16)).with_seed(BoardSeed::from_u64(7));
//! let mut board = Board::with_options(options)?;
//!
//! let outcome = board.move_actor(Color::Blue, Direction::West)?;
//! if outcome.moved {
//!     assert_eq!(board.steps(), 1);
//!     board.undo();
//! }
//! assert_eq!(board.steps(), 0);
//! # Ok::<(), hypertux_game::GameError>(())
//! ```

pub use self::{
    board::{Board, MoveOutcome},
    error::{GameError, PlacementTarget},
    history::{History, Record},
    options::{BoardOptions, DEFAULT_BOARD_SIZE},
    piece::{Actor, Goal},
    placement::{ActorPlacement, GoalPlacement, MAX_PLACEMENT_ATTEMPTS, Placement},
    seed::{BoardSeed, BoardSeedParseError},
    slide::next_stop,
};

mod board;
mod error;
mod history;
mod options;
mod piece;
mod placement;
mod seed;
mod slide;

#[cfg(test)]
mod testing;
