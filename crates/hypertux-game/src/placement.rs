//! Placement strategies for actors and goals.
//!
//! A strategy proposes candidate cells; a candidate is accepted only if it is
//! vacant, meaning it is on the board, outside the center enclosure, not
//! occupied by an actor, and not the current goal cell. Random strategies give
//! up after [`MAX_PLACEMENT_ATTEMPTS`] rejected candidates.

use std::collections::BTreeMap;

use hypertux_core::{Color, Point, WallMap};
use rand::Rng;

use crate::{Actor, GameError, Goal, PlacementTarget};

/// Number of candidate cells a random strategy draws before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 50;

/// How actors are placed when a board is created.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ActorPlacement {
    /// Uniformly random vacant cells.
    #[default]
    Random,
    /// Vacant cells at or next to wall segments.
    NearWalls,
    /// A precomputed cell per color. A missing color fails placement.
    Fixed(BTreeMap<Color, Point>),
}

/// How the goal is placed at the start of every game.
///
/// [`Random`](Self::Random) and [`NearWalls`](Self::NearWalls) also draw the
/// goal color, weighted by [`Color::WEIGHTS`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GoalPlacement {
    /// A uniformly random vacant cell.
    Random,
    /// A vacant cell at or next to a wall segment.
    #[default]
    NearWalls,
    /// Always the same goal. It may reuse the previous goal cell.
    Fixed(Goal),
}

/// The pair of strategies a board uses.
///
/// The default places actors at random and goals near walls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Strategy for actors, applied once per color when the board is created.
    pub actor: ActorPlacement,
    /// Strategy for the goal, applied at every new game.
    pub goal: GoalPlacement,
}

impl Placement {
    /// Creates a placement from its two strategies.
    #[must_use]
    pub fn new(actor: ActorPlacement, goal: GoalPlacement) -> Self {
        Self { actor, goal }
    }

    /// Places actors and goals on uniformly random cells.
    #[must_use]
    pub fn random() -> Self {
        Self::new(ActorPlacement::Random, GoalPlacement::Random)
    }

    /// Places every actor and the goal on the given cells.
    #[must_use]
    pub fn fixed<I>(actors: I, goal: Goal) -> Self
    where
        I: IntoIterator<Item = (Color, Point)>,
    {
        Self::new(
            ActorPlacement::Fixed(actors.into_iter().collect()),
            GoalPlacement::Fixed(goal),
        )
    }
}

/// Read-only view of what occupies a board while placing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacementView<'a> {
    wall_map: &'a WallMap,
    actors: &'a BTreeMap<Color, Actor>,
    goal: Option<&'a Goal>,
}

impl<'a> PlacementView<'a> {
    pub(crate) fn new(
        wall_map: &'a WallMap,
        actors: &'a BTreeMap<Color, Actor>,
        goal: Option<&'a Goal>,
    ) -> Self {
        Self {
            wall_map,
            actors,
            goal,
        }
    }

    fn without_goal(self) -> Self {
        Self { goal: None, ..self }
    }

    pub(crate) fn is_vacant(&self, p: Point) -> bool {
        self.wall_map.size().contains(p)
            && !self.wall_map.center().contains(p)
            && !self.actors.values().any(|actor| actor.point() == p)
            && self.goal.is_none_or(|goal| goal.point() != p)
    }
}

impl ActorPlacement {
    pub(crate) fn place<R>(
        &self,
        view: &PlacementView<'_>,
        color: Color,
        rng: &mut R,
    ) -> Result<Point, GameError>
    where
        R: Rng,
    {
        let target = PlacementTarget::Actor(color);
        match self {
            Self::Random => place_at_random(view, target, rng),
            Self::NearWalls => place_near_walls(view, target, rng),
            Self::Fixed(points) => {
                let Some(&p) = points.get(&color) else {
                    return Err(GameError::PlacementFailed {
                        target,
                        attempts: 0,
                    });
                };
                accept_fixed(view, target, p)
            }
        }
    }
}

impl GoalPlacement {
    pub(crate) fn place<R>(&self, view: &PlacementView<'_>, rng: &mut R) -> Result<Goal, GameError>
    where
        R: Rng,
    {
        let target = PlacementTarget::Goal;
        let point = match self {
            Self::Random => place_at_random(view, target, rng)?,
            Self::NearWalls => place_near_walls(view, target, rng)?,
            Self::Fixed(goal) => {
                let point = accept_fixed(&view.without_goal(), target, goal.point())?;
                return Ok(Goal::new(goal.color(), point));
            }
        };
        let color = Color::from_weighted_roll(rng.random_range(0..Color::TOTAL_WEIGHT));
        Ok(Goal::new(color, point))
    }
}

fn accept_fixed(
    view: &PlacementView<'_>,
    target: PlacementTarget,
    p: Point,
) -> Result<Point, GameError> {
    if view.is_vacant(p) {
        Ok(p)
    } else {
        Err(GameError::PlacementFailed {
            target,
            attempts: 1,
        })
    }
}

fn place_at_random<R>(
    view: &PlacementView<'_>,
    target: PlacementTarget,
    rng: &mut R,
) -> Result<Point, GameError>
where
    R: Rng,
{
    let size = view.wall_map.size();
    if size.area() == 0 {
        return Err(GameError::PlacementFailed {
            target,
            attempts: 0,
        });
    }
    search(view, target, || {
        Point::new(rng.random_range(0..size.w), rng.random_range(0..size.h))
    })
}

fn place_near_walls<R>(
    view: &PlacementView<'_>,
    target: PlacementTarget,
    rng: &mut R,
) -> Result<Point, GameError>
where
    R: Rng,
{
    let anchors: Vec<Point> = view.wall_map.wall_points().collect();
    if anchors.is_empty() {
        return Err(GameError::PlacementFailed {
            target,
            attempts: 0,
        });
    }
    search(view, target, || {
        let anchor = anchors[rng.random_range(0..anchors.len())];
        anchor + Point::new(rng.random_range(-1..=1), rng.random_range(-1..=1))
    })
}

fn search<F>(view: &PlacementView<'_>, target: PlacementTarget, mut draw: F) -> Result<Point, GameError>
where
    F: FnMut() -> Point,
{
    (0..MAX_PLACEMENT_ATTEMPTS)
        .map(|_| draw())
        .find(|&p| view.is_vacant(p))
        .ok_or(GameError::PlacementFailed {
            target,
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
}
