use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::errors::{SearchError, SearchResult};

/// A rectangular letter grid that workers share while searching.
///
/// Every cell is an ASCII byte held in an [`AtomicU8`]. Workers read cells
/// without taking the search lock while other workers uppercase matched
/// paths under it. The only write ever made to a cell replaces a letter with
/// its own uppercase form, and every comparison ignores ASCII case, so an
/// unguarded read sees either case of the same letter and the outcome of a
/// comparison never depends on the interleaving. Relaxed ordering is enough
/// for that; the final read-out happens after the worker pool has joined.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<AtomicU8>,
}

impl Grid {
    /// Builds a grid from row strings.
    ///
    /// Fails with [`SearchError::MalformedGrid`] when there are no rows, the
    /// rows are empty, the rows differ in length, or a row holds a
    /// non-ASCII character.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> SearchResult<Self> {
        let first = rows
            .first()
            .ok_or_else(|| SearchError::malformed_grid("grid has no rows"))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(SearchError::malformed_grid("grid has no columns"));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if !row.is_ascii() {
                return Err(SearchError::malformed_grid(format!(
                    "row {} contains non-ASCII characters",
                    index + 1
                )));
            }
            if row.len() != cols {
                return Err(SearchError::malformed_grid(format!(
                    "row {} has {} columns, expected {}",
                    index + 1,
                    row.len(),
                    cols
                )));
            }
            cells.extend(row.bytes().map(AtomicU8::new));
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the letter at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col].load(Ordering::Relaxed))
    }

    /// Replaces the letter at `(row, col)` with its uppercase form.
    ///
    /// Callers must hold the search lock; see [`crate::search::SearchContext`].
    /// Returns whether the cell changed.
    pub(crate) fn uppercase_cell(&self, row: usize, col: usize) -> bool {
        let cell = &self.cells[row * self.cols + col];
        let current = cell.load(Ordering::Relaxed);
        let upper = current.to_ascii_uppercase();
        if upper == current {
            return false;
        }
        cell.store(upper, Ordering::Relaxed);
        true
    }

    /// Returns one row as a string
    pub fn row_string(&self, row: usize) -> String {
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .map(|cell| char::from(cell.load(Ordering::Relaxed)))
            .collect()
    }

    /// Returns every row as a string, top to bottom
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.row_string(row)).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "{}", self.row_string(row))?;
        }
        Ok(())
    }
}
