//! Actor and goal colors.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::ParseNameError;

/// The color of an actor or a goal.
///
/// Each color names exactly one actor on a board. [`Color::Black`] is the
/// wildcard: a black goal is reached by an actor of any color, while any
/// other goal is reached only by the actor of the same color.
///
/// # Examples
///
/// ```
/// use hypertux_core::Color;
///
/// assert!(Color::Black.is_wildcard());
/// assert!(Color::Black.accepts(Color::Red));
/// assert!(!Color::Blue.accepts(Color::Red));
/// assert_eq!("yellow".parse::<Color>(), Ok(Color::Yellow));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
    /// Black, the wildcard color.
    Black,
}

impl Color {
    /// All colors in declaration order.
    pub const ALL: [Self; 5] = [Self::Red, Self::Green, Self::Blue, Self::Yellow, Self::Black];

    /// Relative weights for random goal-color selection, indexed like [`Color::ALL`].
    pub const WEIGHTS: [u32; 5] = [22, 22, 22, 22, 12];

    /// Sum of [`Color::WEIGHTS`]; weighted rolls are drawn from `0..TOTAL_WEIGHT`.
    pub const TOTAL_WEIGHT: u32 = {
        let mut total = 0;
        let mut i = 0;
        while i < Self::WEIGHTS.len() {
            total += Self::WEIGHTS[i];
            i += 1;
        }
        total
    };

    /// Returns the lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Black => "black",
        }
    }

    /// Returns `true` for the wildcard color.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Black)
    }

    /// Returns `true` if a goal of this color is satisfied by an actor of `actor` color.
    #[must_use]
    pub fn accepts(self, actor: Self) -> bool {
        self.is_wildcard() || self == actor
    }

    /// Maps a roll in `0..TOTAL_WEIGHT` to a color by scanning the cumulative weights.
    ///
    /// Rolls past the total wrap around, so any `u32` maps to some color.
    ///
    /// ```
    /// use hypertux_core::Color;
    ///
    /// assert_eq!(Color::from_weighted_roll(0), Color::Red);
    /// assert_eq!(Color::from_weighted_roll(21), Color::Red);
    /// assert_eq!(Color::from_weighted_roll(22), Color::Green);
    /// assert_eq!(Color::from_weighted_roll(88), Color::Black);
    /// assert_eq!(Color::from_weighted_roll(99), Color::Black);
    /// ```
    #[must_use]
    pub fn from_weighted_roll(roll: u32) -> Self {
        let mut rest = roll % Self::TOTAL_WEIGHT;
        Self::ALL
            .into_iter()
            .zip(Self::WEIGHTS)
            .find_map(|(color, weight)| {
                if rest < weight {
                    Some(color)
                } else {
                    rest -= weight;
                    None
                }
            })
            .unwrap_or(Self::Black)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::new("color", s))
    }
}
