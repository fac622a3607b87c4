//! Wall segment storage for a board.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    Point, Rect, Size,
    layout::{self, LayoutError, NORTH, WEST},
};

static NO_WALLS: BTreeSet<i32> = BTreeSet::new();

/// The wall segments of a board.
///
/// Walls are unit-length segments on grid lines, stored in two families:
///
/// - **h-walls** lie on horizontal grid lines. `h_walls(x)` holds every row
///   `y` where a wall runs along the north edge of cell `(x, y)`, blocking
///   vertical motion between rows `y - 1` and `y` in column `x`. Valid rows
///   are `0..=h`, so the south edge of the board is representable.
/// - **v-walls** lie on vertical grid lines. `v_walls(y)` holds every column
///   `x` where a wall runs along the west edge of cell `(x, y)`, blocking
///   horizontal motion between columns `x - 1` and `x` in row `y`. Valid
///   columns are `0..=w`.
///
/// Every map carries the enclosure: the 2×2 block returned by
/// [`WallMap::center`] is walled on all four outer sides from construction on.
/// Walls are never removed.
///
/// # Examples
///
/// ```
/// use hypertux_core::{Point, Size, WallMap};
///
/// let mut walls = WallMap::new(Size::new(16, 16));
/// assert!(walls.put_v_wall(Point::new(3, 5)));
/// assert!(!walls.put_v_wall(Point::new(3, 5))); // already present
///
/// let center = walls.center();
/// assert_eq!(center.top_left, Point::new(7, 7));
/// assert!(walls.has_h_wall(Point::new(7, 7)));
/// assert!(walls.has_h_wall(Point::new(8, 9)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallMap {
    size: Size,
    h_walls: Vec<BTreeSet<i32>>,
    v_walls: Vec<BTreeSet<i32>>,
}

impl WallMap {
    /// Creates a map with no walls other than the center enclosure.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let columns = usize::try_from(size.w).unwrap_or(0);
        let rows = usize::try_from(size.h).unwrap_or(0);
        let mut this = Self {
            size,
            h_walls: vec![BTreeSet::new(); columns],
            v_walls: vec![BTreeSet::new(); rows],
        };
        this.put_enclosure();
        this
    }

    /// Creates a map from rows of wall flags (see [`layout`](crate::layout)).
    ///
    /// The width is taken from the first row and the height from the number of
    /// rows. An empty input yields an empty `0×0` map. Bits other than [`NORTH`]
    /// and [`WEST`] are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::RaggedRow`] if a row differs in width from the first
    /// row.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, LayoutError>
    where
        R: AsRef<[u8]>,
    {
        let Some(first) = rows.first() else {
            return Ok(Self::new(Size::new(0, 0)));
        };
        let width = first.as_ref().len();

        let mut this = Self::new(Size::new(to_coord(width), to_coord(rows.len())));
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &flags) in row.iter().enumerate() {
                let p = Point::new(to_coord(x), to_coord(y));
                if flags & NORTH != 0 {
                    this.put_h_wall(p);
                }
                if flags & WEST != 0 {
                    this.put_v_wall(p);
                }
            }
        }
        Ok(this)
    }

    /// Exports the map as rows of wall flags.
    ///
    /// Walls on the south and east board edges have no cell to belong to and
    /// are omitted.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size.h)
            .map(|y| {
                (0..self.size.w)
                    .map(|x| {
                        let p = Point::new(x, y);
                        let mut flags = 0;
                        if self.has_h_wall(p) {
                            flags |= NORTH;
                        }
                        if self.has_v_wall(p) {
                            flags |= WEST;
                        }
                        flags
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the walled 2×2 enclosure at the board center.
    ///
    /// Its bottom-right cell is [`Size::center`].
    #[must_use]
    pub fn center(&self) -> Rect {
        let c = self.size.center();
        Rect::new(Point::new(c.x - 1, c.y - 1), Size::new(2, 2))
    }

    /// Inserts a wall on the north edge of cell `p`.
    ///
    /// Returns `true` if the wall was not present before. Positions outside the
    /// column range or the row range `0..=h` are ignored and return `false`.
    pub fn put_h_wall(&mut self, p: Point) -> bool {
        if p.y < 0 || p.y > self.size.h {
            return false;
        }
        match index(p.x, self.h_walls.len()) {
            Some(x) => self.h_walls[x].insert(p.y),
            None => false,
        }
    }

    /// Inserts a wall on the west edge of cell `p`.
    ///
    /// Returns `true` if the wall was not present before. Positions outside the
    /// row range or the column range `0..=w` are ignored and return `false`.
    pub fn put_v_wall(&mut self, p: Point) -> bool {
        if p.x < 0 || p.x > self.size.w {
            return false;
        }
        match index(p.y, self.v_walls.len()) {
            Some(y) => self.v_walls[y].insert(p.x),
            None => false,
        }
    }

    /// Returns `true` if there is a wall on the north edge of cell `p`.
    #[must_use]
    pub fn has_h_wall(&self, p: Point) -> bool {
        self.h_walls(p.x).contains(&p.y)
    }

    /// Returns `true` if there is a wall on the west edge of cell `p`.
    #[must_use]
    pub fn has_v_wall(&self, p: Point) -> bool {
        self.v_walls(p.y).contains(&p.x)
    }

    /// Returns the rows of the h-walls in column `x`.
    ///
    /// Columns outside the board have no walls.
    #[must_use]
    pub fn h_walls(&self, x: i32) -> &BTreeSet<i32> {
        index(x, self.h_walls.len()).map_or(&NO_WALLS, |x| &self.h_walls[x])
    }

    /// Returns the columns of the v-walls in row `y`.
    ///
    /// Rows outside the board have no walls.
    #[must_use]
    pub fn v_walls(&self, y: i32) -> &BTreeSet<i32> {
        index(y, self.v_walls.len()).map_or(&NO_WALLS, |y| &self.v_walls[y])
    }

    /// Returns the anchor cell of every wall segment.
    ///
    /// The anchor of an h-wall is the cell south of it and the anchor of a
    /// v-wall is the cell east of it, so anchors on the far board edges lie
    /// outside the board. h-walls come first, ordered by column then row,
    /// followed by v-walls ordered by row then column.
    pub fn wall_points(&self) -> impl Iterator<Item = Point> + '_ {
        let h = (0..)
            .zip(&self.h_walls)
            .flat_map(|(x, ys)| ys.iter().map(move |&y| Point::new(x, y)));
        let v = (0..)
            .zip(&self.v_walls)
            .flat_map(|(y, xs)| xs.iter().map(move |&x| Point::new(x, y)));
        h.chain(v)
    }

    /// Returns the total number of wall segments.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.h_walls.iter().chain(&self.v_walls).map(BTreeSet::len).sum()
    }

    fn put_enclosure(&mut self) {
        let r = self.center();
        for x in r.top_left.x..r.bottom_right.x {
            self.put_h_wall(Point::new(x, r.top_left.y));
            self.put_h_wall(Point::new(x, r.bottom_right.y));
        }
        for y in r.top_left.y..r.bottom_right.y {
            self.put_v_wall(Point::new(r.top_left.x, y));
            self.put_v_wall(Point::new(r.bottom_right.x, y));
        }
    }
}

impl Display for WallMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&layout::format_rows(&self.to_rows()))
    }
}

impl FromStr for WallMap {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(&layout::parse_rows(s)?)
    }
}

fn index(i: i32, len: usize) -> Option<usize> {
    usize::try_from(i).ok().filter(|&i| i < len)
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn to_coord(i: usize) -> i32 {
    i as i32
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_stamps_enclosure() {
        let walls = WallMap::new(Size::new(16, 16));
        let center = walls.center();
        assert_eq!(center, Rect::new(Point::new(7, 7), Size::new(2, 2)));

        // north side
        assert!(walls.has_h_wall(Point::new(7, 7)));
        assert!(walls.has_h_wall(Point::new(8, 7)));
        // south side
        assert!(walls.has_h_wall(Point::new(7, 9)));
        assert!(walls.has_h_wall(Point::new(8, 9)));
        // west side
        assert!(walls.has_v_wall(Point::new(7, 7)));
        assert!(walls.has_v_wall(Point::new(7, 8)));
        // east side
        assert!(walls.has_v_wall(Point::new(9, 7)));
        assert!(walls.has_v_wall(Point::new(9, 8)));

        assert_eq!(walls.wall_count(), 8);
        // no walls inside the enclosure
        assert!(!walls.has_h_wall(Point::new(7, 8)));
        assert!(!walls.has_v_wall(Point::new(8, 7)));
    }

    #[test]
    fn test_put_is_idempotent() {
        let mut walls = WallMap::new(Size::new(16, 16));
        assert!(walls.put_h_wall(Point::new(5, 3)));
        assert!(!walls.put_h_wall(Point::new(5, 3)));
        assert!(walls.put_v_wall(Point::new(5, 3)));
        assert!(!walls.put_v_wall(Point::new(5, 3)));
        // enclosure walls already exist
        assert!(!walls.put_h_wall(Point::new(7, 7)));
        assert_eq!(walls.wall_count(), 10);
    }

    #[test]
    fn test_put_out_of_range_is_ignored() {
        let mut walls = WallMap::new(Size::new(4, 4));
        let before = walls.clone();
        assert!(!walls.put_h_wall(Point::new(4, 0)));
        assert!(!walls.put_h_wall(Point::new(0, 5)));
        assert!(!walls.put_h_wall(Point::new(-1, 0)));
        assert!(!walls.put_v_wall(Point::new(0, 4)));
        assert!(!walls.put_v_wall(Point::new(5, 0)));
        assert_eq!(walls, before);

        // the far edge lines are valid
        assert!(walls.put_h_wall(Point::new(0, 4)));
        assert!(walls.put_v_wall(Point::new(4, 0)));
    }

    #[test]
    fn test_from_rows_small_layout() {
        let rows: [[u8; 8]; 8] = [
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 3, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 2, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0, 3, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
        ];
        let actual = WallMap::from_rows(&rows).unwrap();

        let mut expected = WallMap::new(Size::new(8, 8));
        expected.put_h_wall(Point::new(1, 1));
        expected.put_h_wall(Point::new(1, 6));
        expected.put_h_wall(Point::new(5, 6));
        expected.put_v_wall(Point::new(1, 1));
        expected.put_v_wall(Point::new(6, 2));
        expected.put_v_wall(Point::new(5, 6));

        assert_eq!(actual, expected);
        assert_eq!(actual.h_walls(1).iter().copied().collect::<Vec<_>>(), [1, 6]);
    }

    #[test]
    fn test_from_rows_empty_is_degenerate() {
        let walls = WallMap::from_rows::<Vec<u8>>(&[]).unwrap();
        assert_eq!(walls.size(), Size::new(0, 0));
        assert_eq!(walls.wall_count(), 0);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(
            WallMap::from_rows(&[vec![0, 0, 0], vec![0, 0]]),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_from_rows_ignores_other_bits() {
        let walls = WallMap::from_rows(&[
            vec![5, 8, 0, 4],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        assert!(walls.has_h_wall(Point::new(0, 0)));
        assert!(!walls.has_v_wall(Point::new(0, 0)));
        assert!(!walls.has_h_wall(Point::new(1, 0)));
        assert!(!walls.has_v_wall(Point::new(1, 0)));
        assert!(!walls.has_h_wall(Point::new(3, 0)));
        assert!(!walls.has_v_wall(Point::new(3, 0)));
        assert_eq!(
            walls,
            WallMap::from_rows(&[[1_u8, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap()
        );

        let parsed: WallMap = "5,8,0,-4\n0,0,0,0\n0,0,0,0\n0,0,0,0".parse().unwrap();
        assert_eq!(parsed, walls);
    }

    #[test]
    fn test_parse_and_display_layout() {
        let text = "0,0,0,0\n0,1,0,0\n0,0,2,0\n0,0,0,0";
        let walls: WallMap = text.parse().unwrap();
        assert!(walls.has_h_wall(Point::new(1, 1)));
        assert!(walls.has_v_wall(Point::new(2, 2)));
        // the enclosure of a 4x4 board covers (1, 1)..(3, 3)
        assert_eq!(walls.to_string(), "0,0,0,0\n0,3,1,2\n0,2,2,2\n0,1,1,0");
        assert_eq!(walls.to_string().parse::<WallMap>().unwrap(), walls);
    }

    #[test]
    fn test_wall_points_order() {
        let mut walls = WallMap::new(Size::new(6, 6));
        walls.put_h_wall(Point::new(0, 4));
        walls.put_v_wall(Point::new(5, 0));
        let points: Vec<_> = walls.wall_points().collect();
        assert_eq!(points.len(), walls.wall_count());
        assert_eq!(points.first(), Some(&Point::new(0, 4)));
        assert_eq!(points[5], Point::new(5, 0));
    }

    proptest! {
        #[test]
        fn test_enclosure_is_closed(w in 2i32..32, h in 2i32..32) {
            let walls = WallMap::new(Size::new(w, h));
            let r = walls.center();
            prop_assert_eq!(r.size(), Size::new(2, 2));
            prop_assert_eq!(Point::new(r.bottom_right.x - 1, r.bottom_right.y - 1), Size::new(w, h).center());
            for x in r.top_left.x..r.bottom_right.x {
                prop_assert!(walls.has_h_wall(Point::new(x, r.top_left.y)));
                prop_assert!(walls.has_h_wall(Point::new(x, r.bottom_right.y)));
            }
            for y in r.top_left.y..r.bottom_right.y {
                prop_assert!(walls.has_v_wall(Point::new(r.top_left.x, y)));
                prop_assert!(walls.has_v_wall(Point::new(r.bottom_right.x, y)));
            }
            prop_assert_eq!(walls.wall_count(), 8);
        }
    }
}
