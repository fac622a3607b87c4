//! Cardinal movement directions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{ParseNameError, Point};

/// A cardinal direction an actor can be pushed in.
///
/// North points towards row `0`, west towards column `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards decreasing `y`.
    North,
    /// Towards decreasing `x`.
    West,
    /// Towards increasing `x`.
    East,
    /// Towards increasing `y`.
    South,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Self; 4] = [Self::North, Self::West, Self::East, Self::South];

    /// Returns the unit vector of this direction.
    ///
    /// ```
    /// use hypertux_core::{Direction, Point};
    ///
    /// assert_eq!(Direction::North.offset(), Point::new(0, -1));
    /// assert_eq!(Direction::West.offset(), Point::new(-1, 0));
    /// assert_eq!(Direction::East.offset(), Point::new(1, 0));
    /// assert_eq!(Direction::South.offset(), Point::new(0, 1));
    /// ```
    #[must_use]
    pub const fn offset(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::West => Point::new(-1, 0),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, 1),
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::West => Self::East,
            Self::East => Self::West,
            Self::South => Self::North,
        }
    }

    /// Returns `true` for north and south.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Returns the lowercase name of the direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::West => "west",
            Self::East => "east",
            Self::South => "south",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s) || d.name()[..1].eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::new("direction", s))
    }
}
