//! Exhaustive subset enumeration for craft planning.

use gemforge_core::{Role, SLOT_CAPACITY};

use super::combination::Combination;
use super::walk::for_each_subset;
use crate::scorer::{sorted_for_search, ScoredGem};

/// Lists every budget-feasible subset of at most [`SLOT_CAPACITY`] gems.
///
/// The empty combination comes first, followed by the non-empty subsets in
/// pre-order over the search-sorted pool.
pub fn enumerate_all(pool: &[ScoredGem], budget: u32, role: Role) -> Vec<Combination> {
    let sorted = sorted_for_search(pool, role);
    let mut subsets = vec![Combination::empty()];

    for_each_subset(&sorted, budget, SLOT_CAPACITY, role, |selection| {
        subsets.push(selection.to_combination(&sorted));
    });

    subsets
}
