use super::direction::Direction;
use crate::grid::Grid;

/// Checks whether `word` reads along `direction` starting at `(row, col)`.
///
/// Letters compare ignoring ASCII case. Stops at the first cell that falls
/// outside the grid or holds a different letter. An empty word never
/// matches. Reads only, so it may run while other workers uppercase cells.
pub fn matches_in_direction(
    grid: &Grid,
    row: usize,
    col: usize,
    word: &[u8],
    direction: Direction,
) -> bool {
    if word.is_empty() {
        return false;
    }

    word.iter().enumerate().all(|(i, &letter)| {
        direction
            .step(row, col, i)
            .and_then(|(r, c)| grid.get(r, c))
            .is_some_and(|cell| cell.eq_ignore_ascii_case(&letter))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(&["cat", "ato", "tog"]).unwrap()
    }

    #[test]
    fn test_matches_each_direction() {
        let grid = grid();
        assert!(matches_in_direction(&grid, 0, 0, b"cat", Direction::Right));
        assert!(matches_in_direction(&grid, 0, 0, b"cat", Direction::Bottom));
        assert!(matches_in_direction(&grid, 2, 0, b"tac", Direction::Top));
        assert!(matches_in_direction(&grid, 0, 2, b"tac", Direction::Left));
        assert!(matches_in_direction(&grid, 0, 0, b"ctg", Direction::BottomRight));
        assert!(matches_in_direction(&grid, 2, 2, b"gtc", Direction::TopLeft));
        assert!(matches_in_direction(&grid, 2, 0, b"ttt", Direction::TopRight));
        assert!(matches_in_direction(&grid, 0, 2, b"ttt", Direction::BottomLeft));
    }

    #[test]
    fn test_ignores_case() {
        let grid = Grid::from_rows(&["CaT"]).unwrap();
        assert!(matches_in_direction(&grid, 0, 0, b"cAt", Direction::Right));
        assert!(matches_in_direction(&grid, 0, 0, b"CAT", Direction::Right));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let grid = grid();
        assert!(!matches_in_direction(&grid, 0, 1, b"atx", Direction::Right));
        assert!(!matches_in_direction(&grid, 0, 0, b"ca", Direction::Top));
        assert!(!matches_in_direction(&grid, 0, 0, b"cats", Direction::Right));
    }

    #[test]
    fn test_rejects_mismatch_and_empty_word() {
        let grid = grid();
        assert!(!matches_in_direction(&grid, 0, 0, b"cot", Direction::Right));
        assert!(!matches_in_direction(&grid, 0, 0, b"", Direction::Right));
    }

    #[test]
    fn test_single_letter_matches_in_place() {
        let grid = grid();
        assert!(matches_in_direction(&grid, 1, 1, b"T", Direction::TopLeft));
    }
}
