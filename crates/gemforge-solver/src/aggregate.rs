//! Per-slot outcome assembly.

use std::collections::BTreeMap;

use gemforge_core::{Achieved, CraftRequirement, Requirements, SlotOutcome, SlotRequest, SlotStatus};

use crate::craft::{CraftPlan, TheoreticalGem};
use crate::search::Combination;

/// Groups theoretical gems into counted requirements.
///
/// Sorted by core point desc, willpower asc, count desc.
pub fn aggregate_needs(gems: &[TheoreticalGem]) -> Vec<CraftRequirement> {
    let mut counts: BTreeMap<(u32, u32), u32> = BTreeMap::new();
    for gem in gems {
        *counts.entry((gem.willpower, gem.core_point)).or_insert(0) += 1;
    }

    let mut needs: Vec<CraftRequirement> = counts
        .into_iter()
        .map(|((willpower, core_point), count)| CraftRequirement {
            willpower,
            core_point,
            count,
        })
        .collect();
    needs.sort_by(|a, b| {
        b.core_point
            .cmp(&a.core_point)
            .then_with(|| a.willpower.cmp(&b.willpower))
            .then_with(|| b.count.cmp(&a.count))
    });
    needs
}

/// Outcome of a slot satisfied by the joint assignment.
pub fn met_outcome(request: &SlotRequest, combination: &Combination) -> SlotOutcome {
    SlotOutcome {
        key: request.key,
        status: SlotStatus::Met,
        target_point: request.target_point,
        priority: request.priority,
        budget: request.budget,
        used_gems: combination.gem_records(),
        achieved: Achieved {
            core_point: combination.total_core_point(),
            willpower: combination.total_willpower(),
            efficiency: combination.score(),
        },
        requirements: Requirements::satisfied(),
    }
}

/// Outcome of a dropped slot handled by the craft planner.
///
/// Achieved totals include the crafted gems of a possible plan; used gems
/// and efficiency cover existing gems only.
pub fn planned_outcome(request: &SlotRequest, plan: &CraftPlan) -> SlotOutcome {
    let existing = &plan.existing;
    let met = plan.met_with_existing(request);
    SlotOutcome {
        key: request.key,
        status: if met {
            SlotStatus::DegradedMet
        } else {
            SlotStatus::Unmet
        },
        target_point: request.target_point,
        priority: request.priority,
        budget: request.budget,
        used_gems: existing.gem_records(),
        achieved: Achieved {
            core_point: plan.total_core_point,
            willpower: plan.total_willpower,
            efficiency: plan.efficiency,
        },
        requirements: if met {
            Requirements::satisfied()
        } else {
            Requirements {
                possible: plan.possible,
                gap: plan.gap,
                needs: plan.needs.clone(),
            }
        },
    }
}
