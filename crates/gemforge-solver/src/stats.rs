//! Solve statistics.
//!
//! Plain counters collected while solving one request. They never influence
//! outcomes.

use std::time::{Duration, Instant};

/// Per-solve statistics.
///
/// Each category solve fills its own instance; the optimizer merges them.
///
/// # Example
///
/// ```
/// use gemforge_solver::SolveStats;
///
/// let mut stats = SolveStats::default();
/// stats.start();
/// stats.record_node();
/// stats.record_prune();
/// stats.record_combinations(12);
///
/// assert_eq!(stats.nodes_explored, 1);
/// assert_eq!(stats.nodes_pruned, 1);
/// assert_eq!(stats.combinations_generated, 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    start_time: Option<Instant>,
    finished: Option<Duration>,
    /// Candidate combinations kept across all slots.
    pub combinations_generated: u64,
    /// Subsets listed for craft planning.
    pub subsets_enumerated: u64,
    /// Runs of the joint assignment search.
    pub assignment_attempts: u64,
    /// Assignment nodes where a candidate was committed.
    pub nodes_explored: u64,
    /// Assignment nodes cut by the bound.
    pub nodes_pruned: u64,
    /// Slots removed from the joint assignment.
    pub slots_dropped: u64,
    /// Theoretical-gem searches run.
    pub craft_searches: u64,
    /// Theoretical-gem searches answered from the cache.
    pub craft_cache_hits: u64,
}

impl SolveStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finished = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finished = Some(self.elapsed());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        if let Some(finished) = self.finished {
            return finished;
        }
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_combinations(&mut self, count: usize) {
        self.combinations_generated += count as u64;
    }

    pub fn record_subsets(&mut self, count: usize) {
        self.subsets_enumerated += count as u64;
    }

    pub fn record_attempt(&mut self) {
        self.assignment_attempts += 1;
    }

    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    pub fn record_prune(&mut self) {
        self.nodes_pruned += 1;
    }

    pub fn record_dropped(&mut self, count: usize) {
        self.slots_dropped += count as u64;
    }

    /// Records a theoretical-gem query and whether the cache answered it.
    pub fn record_craft_search(&mut self, cached: bool) {
        if cached {
            self.craft_cache_hits += 1;
        } else {
            self.craft_searches += 1;
        }
    }

    /// Returns the share of assignment nodes cut by the bound.
    pub fn prune_rate(&self) -> f64 {
        let total = self.nodes_explored + self.nodes_pruned;
        if total == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / total as f64
        }
    }

    /// Adds the counters of `other`. Timing is left untouched.
    pub fn merge(&mut self, other: &SolveStats) {
        self.combinations_generated += other.combinations_generated;
        self.subsets_enumerated += other.subsets_enumerated;
        self.assignment_attempts += other.assignment_attempts;
        self.nodes_explored += other.nodes_explored;
        self.nodes_pruned += other.nodes_pruned;
        self.slots_dropped += other.slots_dropped;
        self.craft_searches += other.craft_searches;
        self.craft_cache_hits += other.craft_cache_hits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_adds_counters() {
        let mut total = SolveStats::default();
        let mut order = SolveStats::default();
        order.record_combinations(5);
        order.record_attempt();
        order.record_craft_search(false);
        let mut chaos = SolveStats::default();
        chaos.record_combinations(3);
        chaos.record_dropped(2);
        chaos.record_craft_search(true);

        total.merge(&order);
        total.merge(&chaos);

        assert_eq!(total.combinations_generated, 8);
        assert_eq!(total.assignment_attempts, 1);
        assert_eq!(total.slots_dropped, 2);
        assert_eq!(total.craft_searches, 1);
        assert_eq!(total.craft_cache_hits, 1);
    }

    #[test]
    fn test_prune_rate() {
        let mut stats = SolveStats::default();
        assert_eq!(stats.prune_rate(), 0.0);
        stats.record_node();
        stats.record_node();
        stats.record_node();
        stats.record_prune();
        assert_eq!(stats.prune_rate(), 0.25);
    }

    #[test]
    fn test_elapsed_without_start() {
        let stats = SolveStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
    }
}
