use hypertux_core::{Size, WallMap};

use crate::{ActorPlacement, BoardSeed, GoalPlacement, Placement};

/// Board size used by [`BoardOptions::default`].
pub const DEFAULT_BOARD_SIZE: Size = Size::new(16, 16);

/// Settings for creating a [`Board`](crate::Board).
///
/// # Examples
///
/// ```
/// use hypertux_core::{Point, Size, WallMap};
/// use hypertux_game::{Board, BoardOptions, BoardSeed, GoalPlacement};
///
/// let mut walls = WallMap::new(Size::new(10, 10));
/// walls.put_h_wall(Point::new(2, 3));
///
/// let options = BoardOptions::default()
///     .with_wall_map(walls)
///     .with_goal_placement(GoalPlacement::Random)
///     .with_seed(BoardSeed::from_u64(1));
/// let board = Board::with_options(options)?;
/// assert_eq!(board.size(), Size::new(10, 10));
/// assert_eq!(board.seed(), BoardSeed::from_u64(1));
/// # Ok::<(), hypertux_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOptions {
    pub(crate) wall_map: WallMap,
    pub(crate) placement: Placement,
    pub(crate) seed: Option<BoardSeed>,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl BoardOptions {
    /// Creates options for a board of `size` with only the center enclosure,
    /// the default placement, and a random seed.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            wall_map: WallMap::new(size),
            placement: Placement::default(),
            seed: None,
        }
    }

    /// Uses `wall_map` for the board. The board size becomes the map's size.
    #[must_use]
    pub fn with_wall_map(mut self, wall_map: WallMap) -> Self {
        self.wall_map = wall_map;
        self
    }

    /// Sets both placement strategies.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the actor placement strategy.
    #[must_use]
    pub fn with_actor_placement(mut self, actor: ActorPlacement) -> Self {
        self.placement.actor = actor;
        self
    }

    /// Sets the goal placement strategy.
    #[must_use]
    pub fn with_goal_placement(mut self, goal: GoalPlacement) -> Self {
        self.placement.goal = goal;
        self
    }

    /// Seeds the board's random number generator.
    #[must_use]
    pub fn with_seed(mut self, seed: BoardSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.wall_map.size()
    }
}
