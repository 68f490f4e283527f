//! Joint assignment search using branch-and-bound.
//!
//! Given ranked candidate lists for the slots of one category, the solver
//! picks exactly one combination per slot such that no gem is used twice and
//! the total score is maximal. Slots with the fewest candidates are decided
//! first; a [`AssignmentBounder`] cuts branches that cannot beat the
//! incumbent.

mod bounder;
mod frame;


use std::collections::{BTreeMap, HashSet};
use std::marker::PhantomData;

use gemforge_core::{Efficiency, GemId, SlotKey};
use tracing::trace;

use crate::search::Combination;
use crate::stats::SolveStats;
use frame::SearchFrame;

pub use bounder::{AssignmentBounder, NoBounder, SuffixBounder};

/// One combination per slot, gem-disjoint across slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    picks: BTreeMap<SlotKey, Combination>,
    score: Efficiency,
}

impl Assignment {
    /// The assignment of zero slots.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total score across all slots.
    #[inline]
    pub fn score(&self) -> Efficiency {
        self.score
    }

    pub fn get(&self, key: SlotKey) -> Option<&Combination> {
        self.picks.get(&key)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &Combination)> {
        self.picks.iter().map(|(&key, combination)| (key, combination))
    }

    /// Ids of every gem used by the assignment.
    pub fn used_ids(&self) -> HashSet<GemId> {
        self.picks.values().flat_map(Combination::ids).collect()
    }
}

/// Depth-first branch-and-bound over per-slot candidate lists.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use gemforge_core::{Category, CoreKind, Gem, GemKind, GemOption, OptionKind, Role, SlotKey};
/// use gemforge_solver::{decorate, AssignmentSolver, CombinationGenerator, SolveStats};
///
/// let attack = [GemOption::new(OptionKind::Attack, 1), GemOption::absent(OptionKind::Attack)];
/// let pool = decorate(&[
///     Gem::new(1, GemKind::Order1, 4, 5, attack),
///     Gem::new(2, GemKind::Order1, 4, 5, attack),
/// ]);
/// let sun = SlotKey::new(Category::Order, CoreKind::Sun);
/// let moon = SlotKey::new(Category::Order, CoreKind::Moon);
///
/// let generator = CombinationGenerator::default();
/// let mut candidates = BTreeMap::new();
/// candidates.insert(sun, generator.generate(&pool, 9, 5, Role::Dealer));
/// candidates.insert(moon, generator.generate(&pool, 9, 5, Role::Dealer));
///
/// let mut stats = SolveStats::default();
/// let assignment = AssignmentSolver::new()
///     .solve(&[sun, moon], &candidates, &mut stats)
///     .unwrap();
/// assert_eq!(assignment.len(), 2);
/// assert_eq!(assignment.used_ids().len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AssignmentSolver<B = SuffixBounder> {
    _bounder: PhantomData<fn() -> B>,
}

impl AssignmentSolver<SuffixBounder> {
    /// Creates a solver pruning with [`SuffixBounder`].
    pub fn new() -> Self {
        Self::with_bounder()
    }
}

impl Default for AssignmentSolver<SuffixBounder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AssignmentBounder> AssignmentSolver<B> {
    /// Creates a solver using bounder type `B`.
    pub fn with_bounder() -> Self {
        Self {
            _bounder: PhantomData,
        }
    }

    /// Finds the best gem-disjoint assignment for `slots`.
    ///
    /// Returns `None` if a slot has no candidates or no disjoint assignment
    /// exists. An empty slot list yields the empty assignment.
    pub fn solve(
        &self,
        slots: &[SlotKey],
        candidates: &BTreeMap<SlotKey, Vec<Combination>>,
        stats: &mut SolveStats,
    ) -> Option<Assignment> {
        stats.record_attempt();
        if slots.is_empty() {
            return Some(Assignment::empty());
        }

        let mut order: Vec<(SlotKey, &[Combination])> = Vec::with_capacity(slots.len());
        for &key in slots {
            match candidates.get(&key) {
                Some(list) if !list.is_empty() => order.push((key, list.as_slice())),
                _ => return None,
            }
        }
        order.sort_by_key(|(_, list)| list.len());

        let lists: Vec<&[Combination]> = order.iter().map(|(_, list)| *list).collect();
        let bounder = B::from_candidates(&lists);
        let best = search(&lists, &bounder, stats)?;

        let picks = order
            .iter()
            .zip(&best.picks)
            .map(|((key, list), &index)| (*key, list[index].clone()))
            .collect();
        Some(Assignment {
            picks,
            score: best.score,
        })
    }
}

struct Incumbent {
    score: Efficiency,
    picks: Vec<usize>,
}

fn search<B: AssignmentBounder>(
    lists: &[&[Combination]],
    bounder: &B,
    stats: &mut SolveStats,
) -> Option<Incumbent> {
    let last = lists.len() - 1;
    let mut frames = vec![SearchFrame::root()];
    let mut picks: Vec<usize> = Vec::with_capacity(lists.len());
    let mut used: HashSet<GemId> = HashSet::new();
    let mut best: Option<Incumbent> = None;

    while let Some(frame) = frames.last_mut() {
        let depth = frame.depth();
        let list = lists[depth];
        let Some(index) = frame.next_candidate(list.len(), |i| list[i].conflicts_with(&used))
        else {
            frames.pop();
            if let Some(released) = picks.pop() {
                for id in lists[depth - 1][released].ids() {
                    used.remove(&id);
                }
            }
            continue;
        };

        let committed = frame.committed() + list[index].score();
        stats.record_node();

        if depth == last {
            if best.as_ref().map_or(true, |b| committed.is_better_than(&b.score)) {
                trace!(event = "incumbent_improved", score = committed.value());
                let mut complete = picks.clone();
                complete.push(index);
                best = Some(Incumbent {
                    score: committed,
                    picks: complete,
                });
            }
            continue;
        }

        if let (Some(incumbent), Some(bound)) =
            (&best, bounder.optimistic_bound(depth + 1, committed))
        {
            if bound <= incumbent.score {
                stats.record_prune();
                continue;
            }
        }

        used.extend(list[index].ids());
        picks.push(index);
        frames.push(SearchFrame::child(depth + 1, committed));
    }

    best
}
