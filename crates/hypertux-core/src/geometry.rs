//! Grid geometry: cell coordinates, board sizes, and rectangular regions.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{Add, Sub},
};

/// A cell coordinate on the board grid.
///
/// Coordinates are zero-based: `x` is the column and `y` is the row, with `y`
/// growing towards the south.
///
/// # Examples
///
/// ```
/// use hypertux_core::Point;
///
/// let p = Point::new(3, 4);
/// assert_eq!(p + Point::new(1, -1), Point::new(4, 3));
/// assert_eq!(p.to_string(), "(3, 4)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Point {
    /// The origin cell `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a point from its column and row.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the component-wise absolute value.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Board dimensions in cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in cells (number of columns).
    pub w: i32,
    /// Height in cells (number of rows).
    pub h: i32,
}

impl Size {
    /// Creates a size from its width and height.
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Returns the midpoint cell, rounding each axis down.
    ///
    /// ```
    /// use hypertux_core::{Point, Size};
    ///
    /// assert_eq!(Size::new(16, 16).center(), Point::new(8, 8));
    /// assert_eq!(Size::new(7, 5).center(), Point::new(3, 2));
    /// ```
    #[must_use]
    pub const fn center(self) -> Point {
        Point::new(self.w.div_euclid(2), self.h.div_euclid(2))
    }

    /// Returns `true` if `p` lies within `[0, w) × [0, h)`.
    #[must_use]
    pub const fn contains(self, p: Point) -> bool {
        0 <= p.x && p.x < self.w && 0 <= p.y && p.y < self.h
    }

    /// Returns the number of cells, treating negative dimensions as empty.
    #[must_use]
    pub fn area(self) -> usize {
        let w = usize::try_from(self.w).unwrap_or(0);
        let h = usize::try_from(self.h).unwrap_or(0);
        w * h
    }

    /// Returns the region covering the whole board.
    #[must_use]
    pub const fn bounds(self) -> Rect {
        Rect::new(Point::ORIGIN, self)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// An axis-aligned region of cells.
///
/// `bottom_right` is exclusive: `Rect { top_left: (0, 0), bottom_right: (5, 5) }`
/// contains `(4, 4)` but not `(5, 5)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive top-left corner.
    pub top_left: Point,
    /// Exclusive bottom-right corner.
    pub bottom_right: Point,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    ///
    /// The resulting `bottom_right` is always `top_left + size`.
    #[must_use]
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            top_left,
            bottom_right: Point::new(top_left.x + size.w, top_left.y + size.h),
        }
    }

    /// Returns the dimensions of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(
            self.bottom_right.x - self.top_left.x,
            self.bottom_right.y - self.top_left.y,
        )
    }

    /// Returns `true` if `p` is inside the rectangle, excluding the bottom-right edge.
    ///
    /// ```
    /// use hypertux_core::{Point, Rect, Size};
    ///
    /// let rect = Rect::new(Point::new(0, 0), Size::new(5, 5));
    /// assert!(rect.contains(Point::new(0, 0)));
    /// assert!(!rect.contains(Point::new(5, 5)));
    /// ```
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        self.top_left.x <= p.x
            && p.x < self.bottom_right.x
            && self.top_left.y <= p.y
            && p.y < self.bottom_right.y
    }

    /// Returns an iterator over every cell in row-major order.
    #[must_use]
    pub fn points(&self) -> RectPoints {
        RectPoints {
            rect: *self,
            next: self.top_left,
        }
    }
}

/// Iterator over the cells of a [`Rect`] in row-major order.
#[derive(Debug, Clone)]
pub struct RectPoints {
    rect: Rect,
    next: Point,
}

impl Iterator for RectPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.rect.contains(self.next) {
            return None;
        }
        let item = self.next;
        self.next.x += 1;
        if self.next.x >= self.rect.bottom_right.x {
            self.next.x = self.rect.top_left.x;
            self.next.y += 1;
        }
        Some(item)
    }
}

impl FusedIterator for RectPoints {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(Point::new(0, 0), Size::new(5, 5));

        assert!(rect.contains(Point::new(3, 3)));
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(4, 4)));
        assert!(!rect.contains(Point::new(5, 5)));
        assert!(!rect.contains(Point::new(5, 0)));
        assert!(!rect.contains(Point::new(0, 5)));
        assert!(!rect.contains(Point::new(6, 6)));
        assert!(!rect.contains(Point::new(-1, 2)));
    }

    #[test]
    fn test_size_center_floors() {
        assert_eq!(Size::new(16, 16).center(), Point::new(8, 8));
        assert_eq!(Size::new(15, 9).center(), Point::new(7, 4));
        assert_eq!(Size::new(1, 1).center(), Point::new(0, 0));
    }

    #[test]
    fn test_rect_points_row_major() {
        let rect = Rect::new(Point::new(2, 3), Size::new(2, 2));
        let points: Vec<_> = rect.points().collect();
        assert_eq!(
            points,
            vec![
                Point::new(2, 3),
                Point::new(3, 3),
                Point::new(2, 4),
                Point::new(3, 4),
            ]
        );

        let empty = Rect::new(Point::new(1, 1), Size::new(0, 3));
        assert_eq!(empty.points().count(), 0);
    }

    #[test]
    fn test_point_arithmetic_and_display() {
        let p = Point::new(2, -3);
        assert_eq!(p + Point::new(1, 1), Point::new(3, -2));
        assert_eq!(p - Point::new(2, 2), Point::new(0, -5));
        assert_eq!(p.abs(), Point::new(2, 3));
        assert_eq!(p.to_string(), "(2, -3)");
        assert_eq!(Size::new(16, 12).to_string(), "16x12");
    }

    proptest! {
        #[test]
        fn test_rect_from_size_keeps_size(
            x in -20i32..20,
            y in -20i32..20,
            w in 0i32..20,
            h in 0i32..20,
        ) {
            let rect = Rect::new(Point::new(x, y), Size::new(w, h));
            prop_assert_eq!(rect.bottom_right, Point::new(x + w, y + h));
            prop_assert_eq!(rect.size(), Size::new(w, h));
            prop_assert_eq!(rect.points().count(), Size::new(w, h).area());
        }
    }
}
