//! The word-search engine.
//!
//! Leaf-first:
//!
//! 1. [`direction`]: the eight compass directions in their fixed tie-break
//!    order.
//! 2. [`matcher`]: does a word read along one direction from one cell?
//! 3. [`locator`]: the first cell and direction a word can be read from,
//!    scanning row-major and trying directions in order.
//! 4. [`engine`]: the shared [`SearchContext`], the path-uppercasing
//!    critical section, and the fixed worker pool that deals words out
//!    round-robin.
//!
//! ```rust,ignore
//! let puzzle = load_puzzle(&path, config.max_word_len)?;
//! let report = search(puzzle, &config)?;
//! for result in &report.results {
//!     println!("{}", result);
//! }
//! ```

pub mod direction;
pub mod engine;
pub mod locator;
pub mod matcher;

pub use direction::Direction;
pub use engine::{run_workers, search, search_rows, SearchContext};
pub use locator::{locate, Placement};
pub use matcher::matches_in_direction;
