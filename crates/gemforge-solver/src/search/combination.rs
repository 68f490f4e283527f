//! Gem combinations for a single slot.

use std::cmp::Ordering;
use std::collections::HashSet;

use gemforge_core::{Efficiency, Gem, GemId, SLOT_CAPACITY};
use smallvec::SmallVec;

use crate::scorer::ScoredGem;

/// A set of distinct gems socketed together into one core.
///
/// Totals are derived from the members when the combination is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    gems: SmallVec<[ScoredGem; SLOT_CAPACITY]>,
    total_willpower: u32,
    total_core_point: u32,
    score: Efficiency,
}

impl Combination {
    /// The combination with no gems.
    pub fn empty() -> Self {
        Self {
            gems: SmallVec::new(),
            total_willpower: 0,
            total_core_point: 0,
            score: Efficiency::ZERO,
        }
    }

    pub(crate) fn from_parts(
        gems: SmallVec<[ScoredGem; SLOT_CAPACITY]>,
        total_willpower: u32,
        total_core_point: u32,
        score: Efficiency,
    ) -> Self {
        Self {
            gems,
            total_willpower,
            total_core_point,
            score,
        }
    }

    /// Member gems in search order.
    #[inline]
    pub fn gems(&self) -> &[ScoredGem] {
        &self.gems
    }

    /// Member gem records in search order.
    pub fn gem_records(&self) -> Vec<Gem> {
        self.gems.iter().map(|g| g.gem).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }

    #[inline]
    pub fn total_willpower(&self) -> u32 {
        self.total_willpower
    }

    #[inline]
    pub fn total_core_point(&self) -> u32 {
        self.total_core_point
    }

    #[inline]
    pub fn score(&self) -> Efficiency {
        self.score
    }

    /// Ids of the member gems.
    pub fn ids(&self) -> impl Iterator<Item = GemId> + '_ {
        self.gems.iter().map(ScoredGem::id)
    }

    /// Returns true if `id` is a member.
    pub fn contains(&self, id: GemId) -> bool {
        self.gems.iter().any(|g| g.id() == id)
    }

    /// Returns true if any member is already in `committed`.
    pub fn conflicts_with(&self, committed: &HashSet<GemId>) -> bool {
        self.ids().any(|id| committed.contains(&id))
    }

    /// Returns true if the combination reaches `target_point`.
    #[inline]
    pub fn meets(&self, target_point: u32) -> bool {
        self.total_core_point >= target_point
    }
}

/// Candidate ranking: score desc, core point desc, willpower asc, size asc.
pub fn rank_candidates(a: &Combination, b: &Combination) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.total_core_point.cmp(&a.total_core_point))
        .then_with(|| a.total_willpower.cmp(&b.total_willpower))
        .then_with(|| a.len().cmp(&b.len()))
}
