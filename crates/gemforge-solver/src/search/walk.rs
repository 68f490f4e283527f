//! Pre-order walk over capacity-bounded subsets of a pool.

use gemforge_core::Role;

use super::selection::Selection;
use crate::scorer::ScoredGem;

/// Visits every non-empty subset of `pool` whose willpower fits `budget` and
/// whose size fits `capacity`.
///
/// Subsets are visited in pre-order: a subset is visited before any subset
/// extending it, and members always appear in pool order. Each subset is
/// visited exactly once.
pub(crate) fn for_each_subset<F>(
    pool: &[ScoredGem],
    budget: u32,
    capacity: usize,
    role: Role,
    mut visit: F,
) where
    F: FnMut(&Selection),
{
    let mut selection = Selection::new(capacity);
    let mut next = 0;

    loop {
        if !selection.is_full() {
            let used = selection.totals().willpower;
            let fit = (next..pool.len()).find(|&i| used + pool[i].willpower() <= budget);
            if let Some(i) = fit {
                selection.push(i, &pool[i], role);
                visit(&selection);
                next = i + 1;
                continue;
            }
        }

        match selection.pop() {
            Some(last) => next = last + 1,
            None => break,
        }
    }
}
