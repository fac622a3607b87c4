use std::collections::BTreeMap;

use hypertux_core::{Color, Direction, Point, Size, WallMap};
use rand_pcg::Pcg64;

use crate::{
    Actor, BoardOptions, BoardSeed, GameError, Goal, GoalPlacement, History, Placement,
    PlacementTarget, Record, placement::PlacementView, slide,
};

/// The result of [`Board::move_actor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// `false` if the actor was flush against an obstruction and stayed put.
    pub moved: bool,
    /// The cell the actor stands on after the move.
    pub point: Point,
    /// `true` if this move brought the actor onto an accepting goal.
    pub goaled: bool,
}

/// A game board: the walls, one actor per color, the goal, and the move history.
///
/// The board owns its random number generator. Actors are placed once when the
/// board is created; the goal is placed again by every [`new_game`](Self::new_game).
///
/// # Examples
///
/// ```
/// use hypertux_core::{Color, Direction, Point, Size};
/// use hypertux_game::{Board, BoardOptions, BoardSeed, Goal, Placement};
///
/// let actors = [
///     (Color::Red, Point::new(5, 0)),
///     (Color::Green, Point::new(0, 15)),
///     (Color::Blue, Point::new(1, 15)),
///     (Color::Yellow, Point::new(2, 15)),
///     (Color::Black, Point::new(3, 15)),
/// ];
/// let goal = Goal::new(Color::Red, Point::new(5, 4));
/// let options = BoardOptions::new(Size::new(16, 16))
///     .with_placement(Placement::fixed(actors, goal))
///     .with_seed(BoardSeed::from_u64(0));
/// let mut board = Board::with_options(options)?;
/// board.put_h_wall(Point::new(5, 5));
///
/// let outcome = board.move_actor(Color::Red, Direction::South)?;
/// assert!(outcome.moved);
/// assert!(outcome.goaled);
/// assert_eq!(board.steps(), 1);
///
/// assert!(board.undo());
/// assert_eq!(board.actor(Color::Red).map(|a| a.point()), Some(Point::new(5, 0)));
/// assert!(!board.is_goaled());
/// # Ok::<(), hypertux_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    wall_map: WallMap,
    actors: BTreeMap<Color, Actor>,
    goal: Goal,
    history: History,
    goaled: bool,
    placement: Placement,
    seed: BoardSeed,
    rng: Pcg64,
}

impl Board {
    /// Creates a board of `size` with only the center enclosure and a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlacementFailed`] if an actor or the goal cannot be
    /// placed.
    pub fn new(size: Size, placement: Placement) -> Result<Self, GameError> {
        Self::with_options(BoardOptions::new(size).with_placement(placement))
    }

    /// Creates a board from `options`.
    ///
    /// Actors are placed in [`Color::ALL`] order, each avoiding the ones
    /// already placed, then the goal is placed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlacementFailed`] if an actor or the goal cannot be
    /// placed.
    pub fn with_options(options: BoardOptions) -> Result<Self, GameError> {
        let BoardOptions {
            wall_map,
            placement,
            seed,
        } = options;
        let seed = seed.unwrap_or_else(BoardSeed::random);
        let mut rng = seed.rng();

        let mut actors = BTreeMap::new();
        for color in Color::ALL {
            let view = PlacementView::new(&wall_map, &actors, None);
            let point = placement
                .actor
                .place(&view, color, &mut rng)
                .inspect_err(|err| log::warn!("{err}"))?;
            actors.insert(color, Actor::new(color, point));
        }
        let view = PlacementView::new(&wall_map, &actors, None);
        let goal = placement
            .goal
            .place(&view, &mut rng)
            .inspect_err(|err| log::warn!("{err}"))?;
        log::info!(
            "new {} board (seed {seed}), {} goal at {}",
            wall_map.size(),
            goal.color(),
            goal.point()
        );

        Ok(Self {
            wall_map,
            actors,
            goal,
            history: History::new(),
            goaled: false,
            placement,
            seed,
            rng,
        })
    }

    /// Starts a new game: places a new goal, discards the history, and clears
    /// the goal-reached flag. Actors stay where they are.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlacementFailed`] if the goal cannot be placed. The
    /// board is left unchanged in that case.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let view = PlacementView::new(&self.wall_map, &self.actors, Some(&self.goal));
        let goal = self
            .placement
            .goal
            .place(&view, &mut self.rng)
            .inspect_err(|err| log::warn!("{err}"))?;
        log::info!("new game: {} goal at {}", goal.color(), goal.point());

        self.goal = goal;
        self.history.reset();
        self.goaled = false;
        Ok(())
    }

    /// Undoes every applied move, returning the actors to where the game
    /// started. Undone moves stay redoable.
    pub fn reset(&mut self) {
        while self.undo() {}
    }

    /// Pushes the actor of `color` in `direction`.
    ///
    /// The actor slides until the next cell is behind a wall, past the board
    /// edge, or occupied by another actor. A move that ends where it started is
    /// blocked: nothing changes and no record is added. Otherwise the move is
    /// recorded, discarding any undone moves.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownColor`] if there is no actor of `color`.
    pub fn move_actor(
        &mut self,
        color: Color,
        direction: Direction,
    ) -> Result<MoveOutcome, GameError> {
        let stop = self.next_stop(color, direction)?;
        let Some(actor) = self.actors.get_mut(&color) else {
            return Err(GameError::UnknownColor { color });
        };
        let start = actor.point();
        if stop == start {
            log::debug!("{color} actor blocked moving {direction} at {start}");
            return Ok(MoveOutcome {
                moved: false,
                point: start,
                goaled: false,
            });
        }

        actor.move_to(stop);
        self.history.push(Record {
            color,
            direction,
            start,
            end: stop,
        });
        self.goaled = self.goal.reached(actor);
        log::debug!("{color} actor moved {direction} from {start} to {stop}");

        Ok(MoveOutcome {
            moved: true,
            point: stop,
            goaled: self.goaled,
        })
    }

    /// Returns the cell where the actor of `color` would stop if pushed in
    /// `direction`, without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownColor`] if there is no actor of `color`.
    pub fn next_stop(&self, color: Color, direction: Direction) -> Result<Point, GameError> {
        let Some(actor) = self.actors.get(&color) else {
            log::warn!("no {color} actor on the board");
            return Err(GameError::UnknownColor { color });
        };
        let others = self
            .actors
            .values()
            .filter(|other| other.color() != color)
            .map(Actor::point);
        Ok(slide::next_stop(
            actor.point(),
            direction,
            others,
            &self.wall_map,
        ))
    }

    /// Reverts the last applied move and clears the goal-reached flag.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.undo() else {
            return false;
        };
        if let Some(actor) = self.actors.get_mut(&record.color) {
            actor.move_to(record.start);
        }
        self.goaled = false;
        log::debug!(
            "undo {} actor {}: back to {}",
            record.color,
            record.direction,
            record.start
        );
        true
    }

    /// Replays the next undone move and rechecks the goal.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.history.redo() else {
            return false;
        };
        if let Some(actor) = self.actors.get_mut(&record.color) {
            actor.move_to(record.end);
            self.goaled = self.goal.reached(actor);
        }
        log::debug!(
            "redo {} actor {}: forward to {}",
            record.color,
            record.direction,
            record.end
        );
        true
    }

    /// Returns the actor standing on `p`, if any.
    #[must_use]
    pub fn actor_at(&self, p: Point) -> Option<&Actor> {
        self.actors.values().find(|actor| actor.point() == p)
    }

    /// Returns the actor of `color`.
    #[must_use]
    pub fn actor(&self, color: Color) -> Option<&Actor> {
        self.actors.get(&color)
    }

    /// Returns every actor in [`Color::ALL`] order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.values()
    }

    /// Returns the applied moves of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Record] {
        self.history.applied()
    }

    /// Returns the number of applied moves.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.history.cursor()
    }

    /// Returns `true` if there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if there is an undone move to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns the current goal.
    #[must_use]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Returns `true` if the last move or redo brought an actor onto the goal.
    #[must_use]
    pub fn is_goaled(&self) -> bool {
        self.goaled
    }

    /// Returns the wall map.
    #[must_use]
    pub fn wall_map(&self) -> &WallMap {
        &self.wall_map
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.wall_map.size()
    }

    /// Returns the seed the board's random number generator started from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the placement strategies.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns `true` if `p` is on the board, outside the center enclosure,
    /// free of actors, and not the goal cell.
    #[must_use]
    pub fn is_vacant(&self, p: Point) -> bool {
        PlacementView::new(&self.wall_map, &self.actors, Some(&self.goal)).is_vacant(p)
    }

    /// Moves the given actors to the given cells and discards the history.
    ///
    /// Actors not listed stay where they are. An actor may be placed on the
    /// goal cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlacementFailed`] with a single attempt if a cell is
    /// off the board, inside the center enclosure, or shared by two actors. The
    /// board is left unchanged in that case.
    pub fn place_actors<I>(&mut self, actors: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = (Color, Point)>,
    {
        let mut placed = self.actors.clone();
        for (color, point) in actors {
            placed.insert(color, Actor::new(color, point));
        }

        let size = self.wall_map.size();
        let center = self.wall_map.center();
        for actor in placed.values() {
            let p = actor.point();
            let shared = placed
                .values()
                .any(|other| other.color() != actor.color() && other.point() == p);
            if !size.contains(p) || center.contains(p) || shared {
                return Err(GameError::PlacementFailed {
                    target: PlacementTarget::Actor(actor.color()),
                    attempts: 1,
                });
            }
        }

        self.actors = placed;
        self.history.reset();
        self.goaled = self.actors.values().any(|actor| self.goal.reached(actor));
        Ok(())
    }

    /// Replaces the goal and clears the goal-reached flag. The history is kept.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlacementFailed`] with a single attempt if the goal
    /// cell is off the board, inside the center enclosure, or occupied by an
    /// actor. The board is left unchanged in that case.
    pub fn set_goal(&mut self, goal: Goal) -> Result<(), GameError> {
        let view = PlacementView::new(&self.wall_map, &self.actors, None);
        if !view.is_vacant(goal.point()) {
            return Err(GameError::PlacementFailed {
                target: PlacementTarget::Goal,
                attempts: 1,
            });
        }
        self.goal = goal;
        self.goaled = false;
        Ok(())
    }

    /// Switches the goal placement strategy used by the next [`new_game`](Self::new_game).
    pub fn set_goal_placement(&mut self, goal: GoalPlacement) {
        self.placement.goal = goal;
    }

    /// Inserts a wall on the north edge of cell `p`.
    ///
    /// See [`WallMap::put_h_wall`].
    pub fn put_h_wall(&mut self, p: Point) -> bool {
        self.wall_map.put_h_wall(p)
    }

    /// Inserts a wall on the west edge of cell `p`.
    ///
    /// See [`WallMap::put_v_wall`].
    pub fn put_v_wall(&mut self, p: Point) -> bool {
        self.wall_map.put_v_wall(p)
    }
}
