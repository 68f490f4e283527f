//! Capacity-bounded selection stack used by the subset searches.
//!
//! The selection holds indices into a sorted gem pool together with the
//! cumulative totals at every depth, so popping restores the previous totals
//! exactly instead of subtracting floating-point scores.

use gemforge_core::{Efficiency, Role, SLOT_CAPACITY};
use smallvec::{smallvec, SmallVec};

use super::combination::Combination;
use crate::scorer::ScoredGem;

/// Running totals of a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub willpower: u32,
    pub core_point: u32,
    pub score: Efficiency,
}

/// An explicit stack of selected pool indices, at most `capacity` deep.
#[derive(Debug, Clone)]
pub struct Selection {
    members: SmallVec<[usize; SLOT_CAPACITY]>,
    totals: SmallVec<[Totals; SLOT_CAPACITY + 1]>,
    capacity: usize,
}

impl Selection {
    /// Creates an empty selection. Capacity is clamped to [`SLOT_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self {
            members: SmallVec::new(),
            totals: smallvec![Totals::default()],
            capacity: capacity.min(SLOT_CAPACITY),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected pool indices, in selection order.
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Totals of the current selection.
    #[inline]
    pub fn totals(&self) -> Totals {
        // totals always holds the root entry
        self.totals[self.totals.len() - 1]
    }

    /// Totals the selection would have after adding `gem`.
    pub fn totals_with(&self, gem: &ScoredGem, role: Role) -> Totals {
        let current = self.totals();
        Totals {
            willpower: current.willpower + gem.willpower(),
            core_point: current.core_point + gem.core_point(),
            score: current.score + gem.score(role),
        }
    }

    /// Pushes pool index `index`. Returns false if the selection is full.
    pub fn push(&mut self, index: usize, gem: &ScoredGem, role: Role) -> bool {
        if self.is_full() {
            return false;
        }
        let next = self.totals_with(gem, role);
        self.members.push(index);
        self.totals.push(next);
        true
    }

    /// Removes the most recent member, restoring the previous totals.
    pub fn pop(&mut self) -> Option<usize> {
        let index = self.members.pop()?;
        self.totals.pop();
        Some(index)
    }

    /// Materializes the selection against the pool it indexes.
    pub fn to_combination(&self, pool: &[ScoredGem]) -> Combination {
        let totals = self.totals();
        let gems = self.members.iter().map(|&i| pool[i]).collect();
        Combination::from_parts(gems, totals.willpower, totals.core_point, totals.score)
    }
}
