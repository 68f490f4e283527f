//! Craft planning for slots left out of the joint assignment.

use std::cmp::Ordering;
use std::collections::HashMap;

use gemforge_config::CraftConfig;
use gemforge_core::{CraftRequirement, Efficiency, Role, SlotRequest, SLOT_CAPACITY};
use tracing::debug;

use super::catalog::{CraftCatalog, CraftSet};
use crate::aggregate::aggregate_needs;
use crate::scorer::ScoredGem;
use crate::search::{enumerate_all, Combination};
use crate::stats::SolveStats;

/// The proposal for one slot: existing gems to socket plus new gems to craft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftPlan {
    /// False when even new gems cannot reach the target.
    pub possible: bool,
    /// Existing gems the plan uses.
    pub existing: Combination,
    /// Theoretical gems to craft, grouped and counted.
    pub needs: Vec<CraftRequirement>,
    /// Core points of existing plus crafted gems.
    pub total_core_point: u32,
    /// Willpower of existing plus crafted gems.
    pub total_willpower: u32,
    /// Score of the existing gems.
    pub efficiency: Efficiency,
    /// Core points still missing after crafting; zero for possible plans.
    pub gap: u32,
}

impl CraftPlan {
    /// Number of new gems the plan asks for.
    pub fn new_gem_count(&self) -> u32 {
        self.needs.iter().map(|n| n.count).sum()
    }

    /// Returns true if the slot is met with existing gems alone.
    pub fn met_with_existing(&self, request: &SlotRequest) -> bool {
        self.possible
            && self.needs.is_empty()
            && self.total_core_point >= request.target_point
            && self.total_willpower <= request.budget
    }
}

/// A closing plan under consideration.
struct Candidate<'s> {
    subset: &'s Combination,
    craft: CraftSet,
    total_core_point: u32,
    total_willpower: u32,
}

impl Candidate<'_> {
    /// Returns true if `self` should replace `current`.
    ///
    /// Fewer new gems, then more existing gems, then a higher existing
    /// score, then more core points, then less willpower. Full ties keep
    /// `current`.
    fn beats(&self, current: &Candidate<'_>) -> bool {
        self.craft
            .len()
            .cmp(&current.craft.len())
            .reverse()
            .then_with(|| self.subset.len().cmp(&current.subset.len()))
            .then_with(|| self.subset.score().cmp(&current.subset.score()))
            .then_with(|| self.total_core_point.cmp(&current.total_core_point))
            .then_with(|| self.total_willpower.cmp(&current.total_willpower).reverse())
            == Ordering::Greater
    }
}

/// Searches leftover gems plus theoretical gems for the cheapest way to
/// close a slot's gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftPlanner {
    catalog: CraftCatalog,
}

impl Default for CraftPlanner {
    fn default() -> Self {
        Self::new(&CraftConfig::default())
    }
}

type CraftKey = (u32, usize, u32);

impl CraftPlanner {
    pub fn new(config: &CraftConfig) -> Self {
        Self {
            catalog: CraftCatalog::new(config),
        }
    }

    pub fn catalog(&self) -> &CraftCatalog {
        &self.catalog
    }

    /// Plans `request` from `leftovers`.
    ///
    /// Every budget-feasible subset of the leftovers, the empty one included,
    /// is completed with the best theoretical craft set. If no subset can be
    /// completed, the subset with the most core points (then the best score)
    /// is returned with `possible = false`.
    pub fn plan(
        &self,
        request: &SlotRequest,
        leftovers: &[ScoredGem],
        role: Role,
        stats: &mut SolveStats,
    ) -> CraftPlan {
        let target = request.target_point;
        let budget = request.budget;
        let subsets = enumerate_all(leftovers, budget, role);
        stats.record_subsets(subsets.len());

        let mut cache: HashMap<CraftKey, Option<CraftSet>> = HashMap::new();
        let mut best: Option<Candidate<'_>> = None;
        let mut partial: Option<&Combination> = None;

        for subset in &subsets {
            let slots_left = SLOT_CAPACITY.saturating_sub(subset.len());
            let remaining = budget.saturating_sub(subset.total_willpower());

            let candidate = if subset.meets(target) {
                Some(Candidate {
                    subset,
                    craft: CraftSet::default(),
                    total_core_point: subset.total_core_point(),
                    total_willpower: subset.total_willpower(),
                })
            } else if slots_left > 0 && remaining >= self.catalog.min_willpower() {
                let gap = target - subset.total_core_point();
                let key = (gap, slots_left, remaining);
                let cached = cache.contains_key(&key);
                stats.record_craft_search(cached);
                let craft = cache
                    .entry(key)
                    .or_insert_with(|| self.catalog.find(gap, slots_left, remaining))
                    .clone();
                craft.and_then(|craft| {
                    let total_core_point = subset.total_core_point() + craft.total_core_point;
                    let total_willpower = subset.total_willpower() + craft.total_willpower;
                    (total_core_point >= target && total_willpower <= budget).then_some(Candidate {
                        subset,
                        craft,
                        total_core_point,
                        total_willpower,
                    })
                })
            } else {
                None
            };

            if let Some(candidate) = candidate {
                if best.as_ref().map_or(true, |current| candidate.beats(current)) {
                    best = Some(candidate);
                }
            }

            let improves = partial.map_or(true, |p| {
                subset.total_core_point() > p.total_core_point()
                    || (subset.total_core_point() == p.total_core_point()
                        && subset.score().is_better_than(&p.score()))
            });
            if improves {
                partial = Some(subset);
            }
        }

        let plan = match best {
            Some(chosen) => CraftPlan {
                possible: true,
                existing: chosen.subset.clone(),
                needs: aggregate_needs(&chosen.craft.gems),
                total_core_point: chosen.total_core_point,
                total_willpower: chosen.total_willpower,
                efficiency: chosen.subset.score(),
                gap: target.saturating_sub(chosen.total_core_point),
            },
            None => {
                let fallback = partial.cloned().unwrap_or_else(Combination::empty);
                CraftPlan {
                    possible: false,
                    needs: Vec::new(),
                    total_core_point: fallback.total_core_point(),
                    total_willpower: fallback.total_willpower(),
                    efficiency: fallback.score(),
                    gap: target.saturating_sub(fallback.total_core_point()),
                    existing: fallback,
                }
            }
        };

        debug!(
            event = "craft_planned",
            slot = %request.key,
            possible = plan.possible,
            existing = plan.existing.len(),
            new_gems = plan.new_gem_count(),
            gap = plan.gap,
        );
        plan
    }
}
