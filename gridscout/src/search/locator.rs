use serde::Serialize;

use super::direction::Direction;
use super::matcher::matches_in_direction;
use crate::grid::Grid;

/// Where a word was found: 0-indexed start cell plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    /// The `len` cells covered by a word of that length
    pub fn cells(&self, len: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..len).filter_map(move |i| self.direction.step(self.row, self.col, i))
    }
}

/// Finds the first placement of `word` in the grid.
///
/// Cells are scanned row by row, left to right; from each cell holding the
/// word's first letter the directions are tried in [`Direction::ALL`] order.
/// The first hit wins, so when a word fits in several places the smallest
/// `(row, col, direction)` is reported.
pub fn locate(grid: &Grid, word: &str) -> Option<Placement> {
    let word = word.as_bytes();
    let first = *word.first()?;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let starts_word = grid
                .get(row, col)
                .is_some_and(|cell| cell.eq_ignore_ascii_case(&first));
            if !starts_word {
                continue;
            }
            if let Some(direction) = Direction::ALL
                .into_iter()
                .find(|&direction| matches_in_direction(grid, row, col, word, direction))
            {
                return Some(Placement {
                    row,
                    col,
                    direction,
                });
            }
        }
    }

    None
}
