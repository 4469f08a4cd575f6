use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Counters shared by the search workers
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    words_searched: Arc<AtomicU64>,
    words_found: Arc<AtomicU64>,
    words_not_found: Arc<AtomicU64>,

    // Critical-section activity
    lock_acquisitions: Arc<AtomicU64>,
    cells_uppercased: Arc<AtomicU64>,

    workers_started: Arc<AtomicU64>,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self {
            words_searched: Arc::new(AtomicU64::new(0)),
            words_found: Arc::new(AtomicU64::new(0)),
            words_not_found: Arc::new(AtomicU64::new(0)),
            lock_acquisitions: Arc::new(AtomicU64::new(0)),
            cells_uppercased: Arc::new(AtomicU64::new(0)),
            workers_started: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records the outcome of locating one word
    pub fn record_word(&self, found: bool) {
        self.words_searched.fetch_add(1, Ordering::Relaxed);
        if found {
            self.words_found.fetch_add(1, Ordering::Relaxed);
        } else {
            self.words_not_found.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records one pass through the critical section and the cells it changed
    pub fn record_critical_section(&self, cells_changed: u64) {
        self.lock_acquisitions.fetch_add(1, Ordering::Relaxed);
        let total = self
            .cells_uppercased
            .fetch_add(cells_changed, Ordering::Relaxed)
            + cells_changed;
        debug!(
            "Uppercased {} cells, total: {} cells",
            cells_changed, total
        );
    }

    pub fn record_worker_start(&self) {
        self.workers_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> SearchStats {
        SearchStats {
            words_searched: self.words_searched.load(Ordering::Relaxed),
            words_found: self.words_found.load(Ordering::Relaxed),
            words_not_found: self.words_not_found.load(Ordering::Relaxed),
            lock_acquisitions: self.lock_acquisitions.load(Ordering::Relaxed),
            cells_uppercased: self.cells_uppercased.load(Ordering::Relaxed),
            workers_started: self.workers_started.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Search stats:\n\
             Words searched: {}\n\
             Found/not found: {}/{}\n\
             Critical section entries: {}\n\
             Cells uppercased: {}\n\
             Workers started: {}",
            stats.words_searched,
            stats.words_found,
            stats.words_not_found,
            stats.lock_acquisitions,
            stats.cells_uppercased,
            stats.workers_started
        );
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of [`SearchMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub words_searched: u64,
    pub words_found: u64,
    pub words_not_found: u64,
    pub lock_acquisitions: u64,
    pub cells_uppercased: u64,
    pub workers_started: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tracking() {
        let metrics = SearchMetrics::new();
        metrics.record_word(true);
        metrics.record_word(false);
        metrics.record_word(true);

        let stats = metrics.get_stats();
        assert_eq!(stats.words_searched, 3);
        assert_eq!(stats.words_found, 2);
        assert_eq!(stats.words_not_found, 1);
    }

    #[test]
    fn test_critical_section_tracking() {
        let metrics = SearchMetrics::new();
        metrics.record_critical_section(3);
        metrics.record_critical_section(0);

        let stats = metrics.get_stats();
        assert_eq!(stats.lock_acquisitions, 2);
        assert_eq!(stats.cells_uppercased, 3);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = SearchMetrics::new();
        let clone = metrics.clone();
        clone.record_worker_start();
        clone.record_worker_start();
        assert_eq!(metrics.get_stats().workers_started, 2);
    }
}
