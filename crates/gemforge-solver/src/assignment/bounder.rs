//! Score bounders for assignment pruning.
//!
//! A bounder estimates the best total score reachable from a partial
//! assignment. If that optimistic bound is not better than the incumbent,
//! the branch is cut.

use std::fmt::Debug;

use gemforge_core::Efficiency;

use crate::search::Combination;

/// Calculates optimistic bounds for the assignment search.
///
/// Bounds must be admissible: never below the score of any complete
/// assignment reachable from the state, or the search loses optima.
pub trait AssignmentBounder: Sized + Debug {
    /// Prepares the bounder for candidate lists given in search order.
    fn from_candidates(lists: &[&[Combination]]) -> Self;

    /// Upper bound on the total score when slots `0..depth` are committed
    /// with total `committed`.
    ///
    /// Returns `None` if no bound can be computed, which disables pruning.
    fn optimistic_bound(&self, depth: usize, committed: Efficiency) -> Option<Efficiency>;
}

/// Adds the best candidate score of every remaining slot, ignoring gem
/// conflicts.
#[derive(Debug, Clone, Default)]
pub struct SuffixBounder {
    // suffix[d] = sum of the top scores of lists[d..]; one extra zero entry
    suffix: Vec<Efficiency>,
}

impl AssignmentBounder for SuffixBounder {
    fn from_candidates(lists: &[&[Combination]]) -> Self {
        let mut suffix = vec![Efficiency::ZERO; lists.len() + 1];
        for (depth, list) in lists.iter().enumerate().rev() {
            let top = list
                .iter()
                .map(Combination::score)
                .max()
                .unwrap_or(Efficiency::ZERO);
            suffix[depth] = top + suffix[depth + 1];
        }
        Self { suffix }
    }

    fn optimistic_bound(&self, depth: usize, committed: Efficiency) -> Option<Efficiency> {
        self.suffix.get(depth).map(|&rest| committed + rest)
    }
}

/// Never bounds, so the search visits every disjoint assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBounder;

impl AssignmentBounder for NoBounder {
    fn from_candidates(_lists: &[&[Combination]]) -> Self {
        Self
    }

    fn optimistic_bound(&self, _depth: usize, _committed: Efficiency) -> Option<Efficiency> {
        None
    }
}
