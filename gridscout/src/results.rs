use serde::Serialize;
use std::fmt;

use crate::metrics::SearchStats;
use crate::search::{Direction, Placement};

/// Outcome of searching for one word.
///
/// `row` and `col` are 1-indexed and, like `direction`, only set when the
/// word was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    pub word: String,
    pub found: bool,
    pub row: Option<usize>,
    pub col: Option<usize>,
    pub direction: Option<Direction>,
}

impl WordMatch {
    /// The sentinel every slot holds before its worker runs
    pub fn not_found(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            found: false,
            row: None,
            col: None,
            direction: None,
        }
    }

    /// Builds a found result from a 0-indexed placement
    pub fn found(word: impl Into<String>, placement: Placement) -> Self {
        Self {
            word: word.into(),
            found: true,
            row: Some(placement.row + 1),
            col: Some(placement.col + 1),
            direction: Some(placement.direction),
        }
    }
}

impl fmt::Display for WordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row, self.col, self.direction) {
            (Some(row), Some(col), Some(direction)) if self.found => {
                write!(f, "{} ({},{}): {}", self.word, row, col, direction)
            }
            _ => write!(f, "{}: not found", self.word),
        }
    }
}

/// Index-aligned store of per-word outcomes.
///
/// Sized to the word list up front and pre-filled with not-found entries.
/// Each slot belongs to exactly one worker and is written once.
#[derive(Debug, Clone)]
pub struct ResultCollector {
    slots: Vec<WordMatch>,
    written: Vec<bool>,
}

impl ResultCollector {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            slots: words
                .iter()
                .map(|word| WordMatch::not_found(word.as_ref()))
                .collect(),
            written: vec![false; words.len()],
        }
    }

    /// Stores the outcome for word `index`
    pub fn record(&mut self, index: usize, outcome: WordMatch) {
        debug_assert!(!self.written[index], "slot {} written twice", index);
        self.slots[index] = outcome;
        self.written[index] = true;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots written so far
    pub fn written(&self) -> usize {
        self.written.iter().filter(|&&w| w).count()
    }

    pub fn get(&self, index: usize) -> Option<&WordMatch> {
        self.slots.get(index)
    }

    pub fn into_matches(self) -> Vec<WordMatch> {
        self.slots
    }
}

/// The finished puzzle: mutated grid rows plus one outcome per word, in
/// word-list order
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    pub grid: Vec<String>,
    pub results: Vec<WordMatch>,
    #[serde(skip)]
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn new(grid: Vec<String>, results: Vec<WordMatch>) -> Self {
        Self {
            grid,
            results,
            stats: SearchStats::default(),
        }
    }

    pub fn found_count(&self) -> usize {
        self.results.iter().filter(|m| m.found).count()
    }

    pub fn not_found_count(&self) -> usize {
        self.results.len() - self.found_count()
    }
}
