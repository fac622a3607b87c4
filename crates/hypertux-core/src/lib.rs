//! Core data structures for the Hypertux sliding-puzzle engine.
//!
//! This crate provides the value types shared by the board simulation: grid
//! geometry, actor colors, movement directions, and the wall map that slide
//! resolution consults on every move.
//!
//! # Overview
//!
//! 1. **Geometry** - Integer grid coordinates and regions
//!    - [`Point`]: a cell coordinate (`x` is the column, `y` is the row)
//!    - [`Size`]: board dimensions in cells
//!    - [`Rect`]: an axis-aligned region with an exclusive bottom-right corner
//!
//! 2. **Enumerations**
//!    - [`Color`]: the five actor colors, including the [`Color::Black`] wildcard
//!    - [`Direction`]: the four cardinal directions
//!
//! 3. **Walls**
//!    - [`WallMap`]: per-column and per-row wall segment sets, always carrying
//!      the walled 2×2 enclosure at the board center
//!    - [`layout`]: the grid-of-bitmask wall layout format and its errors
//!
//! # Examples
//!
//! ```
//! use hypertux_core::{Direction, Point, Size, WallMap};
//!
//! let mut walls = WallMap::new(Size::new(16, 16));
//! assert!(walls.put_h_wall(Point::new(5, 3)));
//! assert!(walls.has_h_wall(Point::new(5, 3)));
//!
//! // The center enclosure is always present
//! assert!(walls.center().contains(Point::new(7, 7)));
//! assert_eq!(Direction::North.offset(), Point::new(0, -1));
//! ```

pub use self::{
    color::Color,
    direction::Direction,
    error::ParseNameError,
    geometry::{Point, Rect, Size},
    layout::LayoutError,
    wall_map::WallMap,
};

mod color;
mod direction;
mod error;
mod geometry;
pub mod layout;
mod wall_map;
