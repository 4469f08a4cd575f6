use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{SearchError, SearchResult};
use crate::grid::Grid;

/// Words at least this many characters long are dropped at load time
pub const DEFAULT_MAX_WORD_LEN: usize = 20;

/// A grid and the words to look for in it
#[derive(Debug)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<String>,
}

impl Puzzle {
    pub fn new(grid: Grid, words: Vec<String>) -> Self {
        Self { grid, words }
    }
}

fn parse_dimension(token: Option<&str>, name: &str) -> SearchResult<usize> {
    let token = token.ok_or_else(|| SearchError::malformed_input(format!("missing {}", name)))?;
    token.parse::<usize>().map_err(|_| {
        SearchError::malformed_input(format!("{} is not a number: {:?}", name, token))
    })
}

/// Parses puzzle text.
///
/// The text holds, separated by any whitespace: the row count, the column
/// count, that many rows of exactly that many letters, and then the words.
/// Words of `max_word_len` characters or more are skipped.
pub fn parse_puzzle(text: &str, max_word_len: usize) -> SearchResult<Puzzle> {
    let mut tokens = text.split_whitespace();

    let rows = parse_dimension(tokens.next(), "row count")?;
    let cols = parse_dimension(tokens.next(), "column count")?;
    if rows == 0 || cols == 0 {
        return Err(SearchError::malformed_grid(format!(
            "grid must have at least one row and one column, got {}x{}",
            rows, cols
        )));
    }

    let mut grid_rows = Vec::new();
    for index in 0..rows {
        let row = tokens.next().ok_or_else(|| {
            SearchError::malformed_input(format!(
                "expected {} grid rows, found {}",
                rows, index
            ))
        })?;
        let width = row.chars().count();
        if width != cols {
            return Err(SearchError::malformed_grid(format!(
                "row {} has {} columns, expected {}",
                index + 1,
                width,
                cols
            )));
        }
        grid_rows.push(row);
    }
    let grid = Grid::from_rows(&grid_rows)?;

    let mut words = Vec::new();
    for token in tokens {
        if token.chars().count() >= max_word_len {
            warn!("Skipping {:?}: {} characters or longer", token, max_word_len);
            continue;
        }
        words.push(token.to_string());
    }

    debug!(
        "Loaded {}x{} grid with {} words",
        grid.rows(),
        grid.cols(),
        words.len()
    );
    Ok(Puzzle::new(grid, words))
}

/// Reads and parses a puzzle file
pub fn load_puzzle(path: &Path, max_word_len: usize) -> SearchResult<Puzzle> {
    let text = std::fs::read_to_string(path).map_err(|e| SearchError::from_io(e, path))?;
    parse_puzzle(&text, max_word_len)
}
