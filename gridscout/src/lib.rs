pub mod config;
pub mod errors;
pub mod grid;
pub mod input;
pub mod metrics;
pub mod output;
pub mod results;
pub mod search;

pub use crate::config::{OutputFormat, SearchConfig};
pub use errors::{SearchError, SearchResult};
pub use grid::Grid;
pub use input::{load_puzzle, parse_puzzle, Puzzle};
pub use output::write_report;
pub use results::{SearchReport, WordMatch};
pub use search::{search, Direction};
