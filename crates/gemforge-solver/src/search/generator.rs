//! Ranked, capped candidate generation for one slot.

use gemforge_config::DEFAULT_COMBINATION_LIMIT;
use gemforge_core::{Role, SLOT_CAPACITY};

use super::combination::{rank_candidates, Combination};
use super::walk::for_each_subset;
use crate::scorer::{sorted_for_search, ScoredGem};

/// Enumerates the combinations of a pool that reach a slot's target.
///
/// Every budget-feasible subset of at most [`SLOT_CAPACITY`] gems reaching the
/// target is recorded, including supersets of already satisfying subsets.
/// The result is ranked best-first and truncated to the limit.
///
/// # Example
///
/// ```
/// use gemforge_core::{Gem, GemKind, GemOption, OptionKind, Role};
/// use gemforge_solver::{decorate, CombinationGenerator};
///
/// let attack = [GemOption::new(OptionKind::Attack, 2), GemOption::absent(OptionKind::Attack)];
/// let pool = decorate(&[
///     Gem::new(1, GemKind::Order1, 4, 5, attack),
///     Gem::new(2, GemKind::Order1, 5, 5, attack),
/// ]);
///
/// let candidates = CombinationGenerator::new(120).generate(&pool, 9, 10, Role::Dealer);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].total_core_point(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationGenerator {
    limit: usize,
}

impl Default for CombinationGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_COMBINATION_LIMIT)
    }
}

impl CombinationGenerator {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Generates the ranked candidate list. An empty list means the slot has
    /// no feasible combination in this pool.
    pub fn generate(
        &self,
        pool: &[ScoredGem],
        budget: u32,
        target_point: u32,
        role: Role,
    ) -> Vec<Combination> {
        let sorted = sorted_for_search(pool, role);
        let mut candidates = Vec::new();

        for_each_subset(&sorted, budget, SLOT_CAPACITY, role, |selection| {
            if selection.totals().core_point >= target_point {
                candidates.push(selection.to_combination(&sorted));
            }
        });

        candidates.sort_by(rank_candidates);
        candidates.truncate(self.limit);
        candidates
    }
}
