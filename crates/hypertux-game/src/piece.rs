use hypertux_core::{Color, Point};

/// A colored piece that slides around the board.
///
/// A board holds exactly one actor per [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Actor {
    color: Color,
    point: Point,
}

impl Actor {
    /// Creates an actor of `color` standing on `point`.
    #[must_use]
    pub const fn new(color: Color, point: Point) -> Self {
        Self { color, point }
    }

    /// Returns the actor's color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the cell the actor stands on.
    #[must_use]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// Moves the actor to `point`.
    pub fn move_to(&mut self, point: Point) {
        self.point = point;
    }
}

/// The target cell of a game.
///
/// A goal is replaced as a whole when a new game starts and is never moved.
///
/// # Examples
///
/// ```
/// use hypertux_core::{Color, Point};
/// use hypertux_game::{Actor, Goal};
///
/// let goal = Goal::new(Color::Black, Point::new(5, 5));
/// assert!(goal.reached(&Actor::new(Color::Red, Point::new(5, 5))));
///
/// let goal = Goal::new(Color::Red, Point::new(5, 5));
/// assert!(!goal.reached(&Actor::new(Color::Blue, Point::new(5, 5))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Goal {
    color: Color,
    point: Point,
}

impl Goal {
    /// Creates a goal of `color` on `point`.
    #[must_use]
    pub const fn new(color: Color, point: Point) -> Self {
        Self { color, point }
    }

    /// Returns the goal's color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the goal cell.
    #[must_use]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// Returns `true` if `actor` stands on the goal and its color is accepted.
    ///
    /// A [`Color::Black`] goal accepts every actor; other goals accept only the
    /// actor of the same color.
    #[must_use]
    pub fn reached(&self, actor: &Actor) -> bool {
        self.color.accepts(actor.color) && self.point == actor.point
    }
}
