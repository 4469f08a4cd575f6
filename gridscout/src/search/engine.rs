use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, trace};

use super::locator::{locate, Placement};
use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::grid::Grid;
use crate::input::Puzzle;
use crate::metrics::SearchMetrics;
use crate::results::{ResultCollector, SearchReport, WordMatch};

/// Everything the workers share, handed to each of them at spawn time.
///
/// The grid is read without locking (see [`Grid`] for why that is sound).
/// The mutex guards the result collector, and whoever holds it is also the
/// only writer of grid cells, so a found word's path and its result slot
/// change together.
#[derive(Debug)]
pub struct SearchContext {
    grid: Grid,
    words: Vec<String>,
    results: Mutex<ResultCollector>,
    metrics: SearchMetrics,
}

impl SearchContext {
    pub fn new(grid: Grid, words: Vec<String>) -> Self {
        let results = Mutex::new(ResultCollector::new(&words));
        Self {
            grid,
            words,
            results,
            metrics: SearchMetrics::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Uppercases the word's path and stores its result in one critical section
    fn record_found(&self, index: usize, placement: Placement) {
        let word = &self.words[index];
        let mut results = self.results.lock().unwrap_or_else(PoisonError::into_inner);
        let changed = uppercase_path(&self.grid, placement, word.len());
        results.record(index, WordMatch::found(word.as_str(), placement));
        drop(results);
        self.metrics.record_critical_section(changed);
    }

    fn record_not_found(&self, index: usize) {
        let mut results = self.results.lock().unwrap_or_else(PoisonError::into_inner);
        results.record(index, WordMatch::not_found(self.words[index].as_str()));
    }

    /// Consumes the context once every worker has finished
    pub fn into_report(self) -> SearchReport {
        let results = self
            .results
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        let mut report = SearchReport::new(self.grid.to_rows(), results.into_matches());
        report.stats = self.metrics.get_stats();
        report
    }
}

/// Uppercases the `len` cells a placement covers and returns how many changed.
///
/// Only [`SearchContext`] calls this, with its lock held. Uppercasing an
/// uppercase letter is a no-op, so applying overlapping paths in any order,
/// or the same path twice, leaves the same grid.
pub(crate) fn uppercase_path(grid: &Grid, placement: Placement, len: usize) -> u64 {
    placement
        .cells(len)
        .filter(|&(row, col)| grid.uppercase_cell(row, col))
        .count() as u64
}

/// Indices owned by `worker` when `words` words are dealt round-robin to
/// `workers` workers
pub fn worker_indices(worker: usize, workers: usize, words: usize) -> impl Iterator<Item = usize> {
    (worker..words).step_by(workers.max(1))
}

fn run_worker(context: &SearchContext, worker: usize, workers: usize) {
    context.metrics.record_worker_start();
    let mut handled = 0usize;

    for index in worker_indices(worker, workers, context.words.len()) {
        let word = &context.words[index];
        match locate(&context.grid, word) {
            Some(placement) => {
                trace!(
                    "Worker {} found {:?} at ({}, {}) going {}",
                    worker,
                    word,
                    placement.row,
                    placement.col,
                    placement.direction
                );
                context.metrics.record_word(true);
                context.record_found(index, placement);
            }
            None => {
                trace!("Worker {} did not find {:?}", worker, word);
                context.metrics.record_word(false);
                context.record_not_found(index);
            }
        }
        handled += 1;
    }

    debug!("Worker {} finished {} words", worker, handled);
}

/// Runs `workers` workers over the context and returns once all have joined.
///
/// Worker `k` handles word indices `k, k + workers, k + 2 * workers, ...`
/// strictly in order. Each worker gets a thread of its own in a dedicated
/// pool, so there is no stealing between them.
pub fn run_workers(context: &SearchContext, workers: NonZeroUsize) -> SearchResult<()> {
    let workers = workers.get();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("gridscout-worker-{}", i))
        .build()
        .map_err(|e| SearchError::config_error(format!("failed to start workers: {}", e)))?;

    debug!(
        "Dispatching {} words to {} workers",
        context.words.len(),
        workers
    );

    pool.scope(|scope| {
        for worker in 0..workers {
            scope.spawn(move |_| run_worker(context, worker, workers));
        }
    });

    Ok(())
}

/// Searches a loaded puzzle for all of its words.
///
/// The grid was validated when the puzzle was built, so by the time workers
/// start the only possible outcomes are found and not found.
pub fn search(puzzle: Puzzle, config: &SearchConfig) -> SearchResult<SearchReport> {
    let Puzzle { grid, words } = puzzle;
    info!(
        "Starting search for {} words in a {}x{} grid with {} workers",
        words.len(),
        grid.rows(),
        grid.cols(),
        config.thread_count
    );

    let context = SearchContext::new(grid, words);
    run_workers(&context, config.thread_count)?;
    context.metrics.log_stats();

    let report = context.into_report();
    info!(
        "Search complete. Found {} of {} words",
        report.found_count(),
        report.results.len()
    );
    Ok(report)
}

/// Builds a puzzle from row strings and words, then searches it
pub fn search_rows<S: AsRef<str>>(
    rows: &[S],
    words: Vec<String>,
    config: &SearchConfig,
) -> SearchResult<SearchReport> {
    let grid = Grid::from_rows(rows)?;
    search(Puzzle::new(grid, words), config)
}
