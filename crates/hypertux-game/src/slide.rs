//! Slide resolution.
//!
//! An actor pushed in a direction travels in a straight line until the next
//! cell is behind a wall, past the board edge, or occupied by another actor.
//! The stop point depends only on the mover's position, the other actors'
//! positions, and the wall map.

use hypertux_core::{Direction, Point, WallMap};

/// Returns the cell where an actor at `current` stops when pushed in `direction`.
///
/// `actors` are the positions of the other actors; an entry equal to
/// `current` (the mover itself) is ignored. If the result equals `current`,
/// the actor is already flush against an obstruction and the move is blocked.
///
/// Each direction is a scan along one line: the barriers are the board edge,
/// every actor on the same line ahead of the mover, and every wall on that line
/// ahead of the mover. The nearest barrier wins.
///
/// # Examples
///
/// ```
/// use hypertux_core::{Direction, Point, Size, WallMap};
/// use hypertux_game::next_stop;
///
/// let mut walls = WallMap::new(Size::new(16, 16));
/// walls.put_h_wall(Point::new(5, 3));
///
/// let start = Point::new(5, 5);
/// assert_eq!(next_stop(start, Direction::North, [], &walls), Point::new(5, 3));
/// assert_eq!(next_stop(start, Direction::South, [], &walls), Point::new(5, 15));
///
/// // another actor at (5, 4) blocks immediately
/// let blocker = Point::new(5, 4);
/// assert_eq!(next_stop(start, Direction::North, [blocker], &walls), start);
/// ```
pub fn next_stop<I>(current: Point, direction: Direction, actors: I, wall_map: &WallMap) -> Point
where
    I: IntoIterator<Item = Point>,
{
    let size = wall_map.size();
    let (pos, walls) = if direction.is_vertical() {
        (current.y, wall_map.h_walls(current.x))
    } else {
        (current.x, wall_map.v_walls(current.y))
    };
    let on_line = |p: Point| {
        if direction.is_vertical() {
            (p.x == current.x).then_some(p.y)
        } else {
            (p.y == current.y).then_some(p.x)
        }
    };
    let others = actors.into_iter().filter_map(on_line);

    let stop = match direction {
        Direction::North | Direction::West => {
            // a wall at `pos` is on the mover's own edge
            let wall = walls.range(..=pos).next_back().copied();
            others
                .filter(|&a| a < pos)
                .map(|a| a + 1)
                .chain(wall)
                .fold(0, i32::max)
        }
        Direction::South | Direction::East => {
            let limit = if direction.is_vertical() { size.h } else { size.w };
            let wall = walls.range(pos + 1..).next().copied();
            others
                .filter(|&a| a > pos)
                .chain(wall)
                .fold(limit, i32::min)
                - 1
        }
    };

    if direction.is_vertical() {
        Point::new(current.x, stop)
    } else {
        Point::new(stop, current.y)
    }
}
