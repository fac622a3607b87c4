//! Fixed wall layouts as grids of small integers.
//!
//! A layout describes one board row per line, with one comma-separated
//! integer per cell. Each integer is a bitmask of the walls on that cell's
//! edges:
//!
//! | bit        | meaning                        |
//! |------------|--------------------------------|
//! | [`NORTH`]  | wall on the north edge of cell |
//! | [`WEST`]   | wall on the west edge of cell  |
//!
//! Other bits are ignored. South and east walls are expressed as the north or
//! west wall of the neighboring cell.
//!
//! # Examples
//!
//! ```
//! use hypertux_core::{Point, WallMap};
//!
//! let walls: WallMap = "
//!     0,0,0,0
//!     0,3,0,0
//!     0,0,0,0
//!     0,0,2,0
//! "
//! .parse()?;
//!
//! assert!(walls.has_h_wall(Point::new(1, 1)));
//! assert!(walls.has_v_wall(Point::new(1, 1)));
//! assert!(walls.has_v_wall(Point::new(2, 3)));
//! # Ok::<(), hypertux_core::LayoutError>(())
//! ```

use std::num::ParseIntError;

/// Flag for a wall on the north edge of a cell.
pub const NORTH: u8 = 1;

/// Flag for a wall on the west edge of a cell.
pub const WEST: u8 = 2;

/// Every flag a wall map reads from a layout cell.
pub const ALL_FLAGS: u8 = NORTH | WEST;

/// Errors that can occur when reading a wall layout.
///
/// Rows and columns are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// A field is not an integer.
    #[display("invalid number at row {row}, column {column}: {source}")]
    InvalidNumber {
        /// Row of the offending field.
        row: usize,
        /// Column of the offending field.
        column: usize,
        /// The underlying parse failure.
        source: ParseIntError,
    },
    /// A row has a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Row with the wrong width.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
}

/// Parses layout text into rows of wall flags.
///
/// Blank lines are skipped and whitespace around fields is ignored. Each field
/// keeps only its [`NORTH`] and [`WEST`] bits. Row numbers in errors are line
/// indices in `text`, blank lines included.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidNumber`] if a field is not an integer.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<u8>>, LayoutError> {
    text.lines()
        .enumerate()
        .map(|(row, line)| (row, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(row, line)| {
            line.split(',')
                .enumerate()
                .map(|(column, field)| {
                    field
                        .trim()
                        .parse::<i64>()
                        .map(wall_flags)
                        .map_err(|source| LayoutError::InvalidNumber {
                            row,
                            column,
                            source,
                        })
                })
                .collect()
        })
        .collect()
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wall_flags(value: i64) -> u8 {
    (value & i64::from(ALL_FLAGS)) as u8
}

/// Formats rows of wall flags as layout text, one line per row.
#[must_use]
pub fn format_rows<R>(rows: &[R]) -> String
where
    R: AsRef<[u8]>,
{
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let fields: Vec<String> = row.as_ref().iter().map(u8::to_string).collect();
        out.push_str(&fields.join(","));
    }
    out
}
