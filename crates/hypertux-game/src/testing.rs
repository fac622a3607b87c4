//! Test utilities for board scenarios.
//!
//! [`BoardTester`] builds a board with known actor and goal positions, applies
//! moves, and asserts the outcomes in a fluent style:
//!
//! ```ignore
//! BoardTester::new(Size::new(16, 16))
//!     .h_wall((5, 3))
//!     .actor(Color::Red, (5, 5))
//!     .move_to(Color::Red, Direction::North, (5, 3))
//!     .undo()
//!     .assert_actor(Color::Red, (5, 5));
//! ```

use hypertux_core::{Color, Direction, Point, Size};

use crate::{Board, BoardOptions, BoardSeed, Goal, Placement};

/// A test harness wrapping a [`Board`] with deterministic placement.
///
/// Actors not placed explicitly are parked along the bottom edge, starting at
/// the bottom-right corner. The goal starts as a red goal in the bottom-left
/// corner.
///
/// # Panics
///
/// All methods panic with descriptive messages on failure, using
/// `#[track_caller]` to report the caller's location.
#[derive(Debug)]
pub(crate) struct BoardTester {
    board: Board,
}

impl BoardTester {
    /// Creates a tester for an otherwise empty board of `size`.
    #[track_caller]
    pub(crate) fn new(size: Size) -> Self {
        let parked = Color::ALL
            .into_iter()
            .zip(0..)
            .map(|(color, i)| (color, Point::new(size.w - 1 - i, size.h - 1)));
        let goal = Goal::new(Color::Red, Point::new(0, size.h - 1));
        let options = BoardOptions::new(size)
            .with_placement(Placement::fixed(parked, goal))
            .with_seed(BoardSeed::from_u64(0));
        let board = Board::with_options(options).unwrap();
        Self { board }
    }

    /// Adds a wall on the north edge of cell `p`.
    #[track_caller]
    pub(crate) fn h_wall(mut self, p: impl Into<Point>) -> Self {
        self.board.put_h_wall(p.into());
        self
    }

    /// Adds a wall on the west edge of cell `p`.
    #[track_caller]
    pub(crate) fn v_wall(mut self, p: impl Into<Point>) -> Self {
        self.board.put_v_wall(p.into());
        self
    }

    /// Moves the actor of `color` to `p`, discarding the history.
    #[track_caller]
    pub(crate) fn actor(mut self, color: Color, p: impl Into<Point>) -> Self {
        let p = p.into();
        if let Err(err) = self.board.place_actors([(color, p)]) {
            panic!("Expected {color} actor to be placed at {p}: {err}");
        }
        self
    }

    /// Replaces the goal.
    #[track_caller]
    pub(crate) fn goal(mut self, color: Color, p: impl Into<Point>) -> Self {
        let p = p.into();
        if let Err(err) = self.board.set_goal(Goal::new(color, p)) {
            panic!("Expected {color} goal to be placed at {p}: {err}");
        }
        self
    }

    /// Asserts where the actor of `color` would stop, without moving it.
    #[track_caller]
    pub(crate) fn assert_stop(
        self,
        color: Color,
        direction: Direction,
        expected: impl Into<Point>,
    ) -> Self {
        let expected = expected.into();
        let actual = self.board.next_stop(color, direction).unwrap();
        assert_eq!(
            actual, expected,
            "Expected {color} actor moving {direction} to stop at {expected}, but it stops at {actual}"
        );
        self
    }

    /// Moves the actor and asserts it ends up on `expected`.
    #[track_caller]
    pub(crate) fn move_to(
        mut self,
        color: Color,
        direction: Direction,
        expected: impl Into<Point>,
    ) -> Self {
        let expected = expected.into();
        let outcome = self.board.move_actor(color, direction).unwrap();
        assert!(
            outcome.moved,
            "Expected {color} actor to move {direction}, but it was blocked"
        );
        assert_eq!(
            outcome.point, expected,
            "Expected {color} actor moving {direction} to stop at {expected}, but it stopped at {}",
            outcome.point
        );
        self
    }

    /// Moves the actor and asserts the move was blocked.
    #[track_caller]
    pub(crate) fn move_blocked(mut self, color: Color, direction: Direction) -> Self {
        let outcome = self.board.move_actor(color, direction).unwrap();
        assert!(
            !outcome.moved,
            "Expected {color} actor moving {direction} to be blocked, but it moved to {}",
            outcome.point
        );
        assert!(!outcome.goaled);
        self
    }

    /// Undoes one move and asserts there was one to undo.
    #[track_caller]
    pub(crate) fn undo(mut self) -> Self {
        assert!(self.board.undo(), "Expected a move to undo");
        self
    }

    /// Redoes one move and asserts there was one to redo.
    #[track_caller]
    pub(crate) fn redo(mut self) -> Self {
        assert!(self.board.redo(), "Expected a move to redo");
        self
    }

    #[track_caller]
    pub(crate) fn assert_actor(self, color: Color, expected: impl Into<Point>) -> Self {
        let expected = expected.into();
        let actual = self.board.actor(color).map(|actor| actor.point());
        assert_eq!(
            actual,
            Some(expected),
            "Expected {color} actor at {expected}"
        );
        self
    }

    #[track_caller]
    pub(crate) fn assert_goaled(self, expected: bool) -> Self {
        assert_eq!(
            self.board.is_goaled(),
            expected,
            "Expected goaled to be {expected} with goal {:?}",
            self.board.goal()
        );
        self
    }

    #[track_caller]
    pub(crate) fn assert_steps(self, expected: usize) -> Self {
        assert_eq!(self.board.steps(), expected, "Expected {expected} steps");
        self
    }

    #[track_caller]
    pub(crate) fn assert_can_redo(self, expected: bool) -> Self {
        assert_eq!(self.board.can_redo(), expected);
        self
    }

    /// Returns the board for further inspection.
    pub(crate) fn into_board(self) -> Board {
        self.board
    }
}
