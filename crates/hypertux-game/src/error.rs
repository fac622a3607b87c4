use std::fmt::{self, Display};

use hypertux_core::Color;

/// What a placement strategy was trying to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementTarget {
    /// The actor of the given color.
    Actor(Color),
    /// The goal.
    Goal,
}

impl Display for PlacementTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actor(color) => write!(f, "{color} actor"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that can occur during board operations.
///
/// Blocked moves and undo/redo at the ends of the history are normal
/// outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// No free cell was found for the target within the attempt budget.
    ///
    /// The board is left as it was before the placement started.
    #[display("unable to place {target} after {attempts} attempts")]
    PlacementFailed {
        /// What was being placed.
        target: PlacementTarget,
        /// Number of candidate cells tried.
        attempts: usize,
    },
    /// The operation referenced a color that has no actor on the board.
    #[display("no {color} actor on the board")]
    UnknownColor {
        /// The missing color.
        color: Color,
    },
}
