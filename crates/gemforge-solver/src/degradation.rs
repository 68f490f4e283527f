//! Priority-driven slot dropping when no full assignment exists.

use std::collections::BTreeMap;

use gemforge_core::{SlotKey, SlotRequest};
use tracing::debug;

use crate::assignment::{Assignment, AssignmentBounder, AssignmentSolver};
use crate::search::Combination;
use crate::stats::SolveStats;

/// Result of [`solve_with_drops`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    /// Assignment of the kept slots, or `None` if every slot was dropped.
    pub assignment: Option<Assignment>,
    /// Slots covered by the assignment, in request order.
    pub kept: Vec<SlotKey>,
    /// Slots removed from the assignment, least important first.
    pub dropped: Vec<SlotKey>,
}

impl Degradation {
    /// Returns true if no slot had to be dropped.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty() && self.assignment.is_some()
    }
}

/// Orders requests least important first: priority rank descending, then
/// registration ascending.
pub fn drop_order(requests: &[SlotRequest]) -> Vec<SlotRequest> {
    let mut order = requests.to_vec();
    order.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.registered_at.cmp(&b.registered_at))
    });
    order
}

/// Solves the joint assignment, dropping the least important slots one at a
/// time until the remainder is feasible.
///
/// Dropping only ever shrinks the set of slots the solver sees. If no
/// non-empty remainder is feasible, every slot is reported as dropped.
pub fn solve_with_drops<B: AssignmentBounder>(
    solver: &AssignmentSolver<B>,
    requests: &[SlotRequest],
    candidates: &BTreeMap<SlotKey, Vec<Combination>>,
    stats: &mut SolveStats,
) -> Degradation {
    let all: Vec<SlotKey> = requests.iter().map(|r| r.key).collect();
    if let Some(assignment) = solver.solve(&all, candidates, stats) {
        return Degradation {
            assignment: Some(assignment),
            kept: all,
            dropped: Vec::new(),
        };
    }

    let order: Vec<SlotKey> = drop_order(requests).iter().map(|r| r.key).collect();
    for count in 1..=order.len() {
        let dropped = &order[..count];
        let kept: Vec<SlotKey> = all
            .iter()
            .copied()
            .filter(|key| !dropped.contains(key))
            .collect();
        if kept.is_empty() {
            continue;
        }

        debug!(event = "drop_attempt", dropped = count, kept = kept.len());
        if let Some(assignment) = solver.solve(&kept, candidates, stats) {
            stats.record_dropped(count);
            return Degradation {
                assignment: Some(assignment),
                kept,
                dropped: dropped.to_vec(),
            };
        }
    }

    stats.record_dropped(all.len());
    Degradation {
        assignment: None,
        kept: Vec::new(),
        dropped: all,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::decorate;
    use crate::search::CombinationGenerator;
    use gemforge_core::{Category, CoreGrade, CoreKind, Gem, Role};
    use gemforge_test::{order_gem, slot};

    fn candidates_for(gems: &[Gem], requests: &[SlotRequest]) -> BTreeMap<SlotKey, Vec<Combination>> {
        let pool = decorate(gems);
        let generator = CombinationGenerator::default();
        requests
            .iter()
            .map(|r| (r.key, generator.generate(&pool, r.budget, r.target_point, Role::Dealer)))
            .collect()
    }

    #[test]
    fn test_drop_order() {
        let mut late = slot(Category::Order, CoreKind::Star, CoreGrade::Relic, 10, 2);
        late.registered_at = 9;
        let requests = vec![
            slot(Category::Order, CoreKind::Sun, CoreGrade::Relic, 10, 1),
            late,
            slot(Category::Order, CoreKind::Moon, CoreGrade::Relic, 10, 2),
        ];

        let keys: Vec<CoreKind> = drop_order(&requests).iter().map(|r| r.key.kind).collect();
        assert_eq!(keys, vec![CoreKind::Moon, CoreKind::Star, CoreKind::Sun]);
    }

    #[test]
    fn test_no_drop_when_feasible() {
        let gems = vec![order_gem(1, 4, 5, 1), order_gem(2, 4, 5, 1), order_gem(3, 4, 5, 1), order_gem(4, 4, 5, 1)];
        let requests = vec![
            slot(Category::Order, CoreKind::Sun, CoreGrade::Hero, 10, 1),
            slot(Category::Order, CoreKind::Moon, CoreGrade::Hero, 10, 2),
        ];
        let candidates = candidates_for(&gems, &requests);
        let mut stats = SolveStats::default();

        let result = solve_with_drops(&AssignmentSolver::new(), &requests, &candidates, &mut stats);
        assert!(result.is_complete());
        assert_eq!(result.kept.len(), 2);
        assert_eq!(stats.slots_dropped, 0);
    }

    #[test]
    fn test_drops_lowest_priority_first() {
        // only one hero slot can be filled from two gems
        let gems = vec![order_gem(1, 4, 5, 1), order_gem(2, 4, 5, 1)];
        let requests = vec![
            slot(Category::Order, CoreKind::Sun, CoreGrade::Hero, 10, 1),
            slot(Category::Order, CoreKind::Moon, CoreGrade::Hero, 10, 2),
        ];
        let candidates = candidates_for(&gems, &requests);
        let mut stats = SolveStats::default();

        let result = solve_with_drops(&AssignmentSolver::new(), &requests, &candidates, &mut stats);
        assert_eq!(result.kept, vec![requests[0].key]);
        assert_eq!(result.dropped, vec![requests[1].key]);
        assert!(result.assignment.unwrap().get(requests[0].key).is_some());
        assert_eq!(stats.slots_dropped, 1);
    }

    #[test]
    fn test_drops_everything_when_nothing_fits() {
        let gems = vec![order_gem(1, 3, 1, 1)];
        let requests = vec![
            slot(Category::Order, CoreKind::Sun, CoreGrade::Hero, 10, 1),
            slot(Category::Order, CoreKind::Moon, CoreGrade::Legend, 14, 2),
        ];
        let candidates = candidates_for(&gems, &requests);
        let mut stats = SolveStats::default();

        let result = solve_with_drops(&AssignmentSolver::new(), &requests, &candidates, &mut stats);
        assert_eq!(result.assignment, None);
        assert!(result.kept.is_empty());
        assert_eq!(result.dropped, vec![requests[0].key, requests[1].key]);
    }

    #[test]
    fn test_kept_slots_are_a_subset() {
        let gems = vec![order_gem(1, 4, 5, 1), order_gem(2, 5, 5, 1), order_gem(3, 3, 4, 1)];
        let requests = vec![
            slot(Category::Order, CoreKind::Sun, CoreGrade::Legend, 14, 2),
            slot(Category::Order, CoreKind::Moon, CoreGrade::Hero, 10, 1),
        ];
        let candidates = candidates_for(&gems, &requests);
        let mut stats = SolveStats::default();

        let result = solve_with_drops(&AssignmentSolver::new(), &requests, &candidates, &mut stats);
        let all: Vec<SlotKey> = requests.iter().map(|r| r.key).collect();
        assert!(result.kept.iter().all(|k| all.contains(k)));
        assert!(result.kept.iter().all(|k| !result.dropped.contains(k)));
        assert_eq!(result.kept.len() + result.dropped.len(), all.len());
    }
}
