use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight compass directions a word can run in.
///
/// The declaration order is the tie-break order used by the locator and the
/// names are part of the report format, so neither may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// Row and column deltas of one step in this direction
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::BottomLeft => (1, -1),
            Direction::Bottom => (1, 0),
            Direction::BottomRight => (1, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::TopLeft => "top-left",
            Direction::Top => "top",
            Direction::TopRight => "top-right",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::BottomLeft => "bottom-left",
            Direction::Bottom => "bottom",
            Direction::BottomRight => "bottom-right",
        }
    }

    /// Cell reached after `steps` steps from `(row, col)`.
    ///
    /// Returns `None` when the walk leaves the non-negative quadrant; the
    /// upper bounds are the grid's business.
    pub fn step(self, row: usize, col: usize, steps: usize) -> Option<(usize, usize)> {
        let (d_row, d_col) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = row.checked_add_signed(d_row.checked_mul(steps)?)?;
        let col = col.checked_add_signed(d_col.checked_mul(steps)?)?;
        Some((row, col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
