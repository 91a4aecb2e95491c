use serde::Serialize;
use tracing::info;

/// Counters collected while a composite table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SieveStats {
    factors_visited: usize,
    marking_passes: usize,
    factors_skipped: usize,
}

impl SieveStats {
    pub fn new() -> Self {
        SieveStats {
            factors_visited: 0,
            marking_passes: 0,
            factors_skipped: 0,
        }
    }

    /// Record that a candidate factor was prime and had its multiples marked
    pub fn bump_marking_passes(&mut self) {
        self.factors_visited += 1;
        self.marking_passes += 1
    }

    /// Record that a candidate factor was already known composite and only cost a lookup
    pub fn bump_skipped(&mut self) {
        self.factors_visited += 1;
        self.factors_skipped += 1
    }

    pub fn get_factors_visited(&self) -> usize {
        self.factors_visited
    }

    pub fn get_marking_passes(&self) -> usize {
        self.marking_passes
    }

    pub fn get_factors_skipped(&self) -> usize {
        self.factors_skipped
    }

    /// Emit the counters as one structured log event.
    pub fn dump(&self, max_number: u64) {
        info!(
            max_number,
            factors_visited = self.factors_visited,
            marking_passes = self.marking_passes,
            factors_skipped = self.factors_skipped,
            "composite table built"
        );
    }
}

impl Default for SieveStats {
    fn default() -> Self {
        SieveStats::new()
    }
}
