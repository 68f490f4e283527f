//! Tests for craft planning.

use super::*;
use crate::aggregate::planned_outcome;
use crate::scorer::decorate;
use crate::stats::SolveStats;
use gemforge_core::{Category, CoreGrade, CoreKind, GemId, Role, SlotRequest, SlotStatus};
use gemforge_test::{order_gem, slot};

fn hero(target: u32) -> SlotRequest {
    slot(Category::Order, CoreKind::Sun, CoreGrade::Hero, target, 1)
}

fn existing_ids(plan: &CraftPlan) -> Vec<u64> {
    plan.existing.ids().map(|id| id.0).collect()
}

#[test]
fn test_unreachable_target_from_empty_pool() {
    // four crafted gems cost at least 12 willpower, over the hero budget
    let request = hero(20);
    let mut stats = SolveStats::default();
    let plan = CraftPlanner::default().plan(&request, &[], Role::Dealer, &mut stats);

    assert!(!plan.possible);
    assert!(plan.existing.is_empty());
    assert!(plan.needs.is_empty());
    assert_eq!(plan.gap, 20);

    let outcome = planned_outcome(&request, &plan);
    assert_eq!(outcome.status, SlotStatus::Unmet);
    assert!(outcome.used_gems.is_empty());
    assert!(!outcome.requirements.possible);
    assert_eq!(outcome.requirements.gap, 20);
}

#[test]
fn test_empty_pool_crafts_everything() {
    let request = hero(10);
    let mut stats = SolveStats::default();
    let plan = CraftPlanner::default().plan(&request, &[], Role::Dealer, &mut stats);

    assert!(plan.possible);
    assert_eq!(plan.new_gem_count(), 2);
    assert_eq!(plan.total_core_point, 10);
    assert!(plan.total_willpower <= 9);
    assert!(plan.needs.iter().all(|n| n.core_point == 5));
    assert_eq!(plan.gap, 0);

    let outcome = planned_outcome(&request, &plan);
    assert_eq!(outcome.status, SlotStatus::Unmet);
    assert!(outcome.used_gems.is_empty());
    assert!(outcome.requirements.possible);
    assert_eq!(outcome.requirements.new_gem_count(), 2);
    assert_eq!(outcome.requirements.gap, 0);
    assert_eq!(outcome.achieved.core_point, 10);
}

#[test]
fn test_existing_gems_alone_are_preferred() {
    let leftovers = decorate(&[order_gem(1, 4, 5, 1), order_gem(2, 5, 5, 1), order_gem(3, 3, 2, 5)]);
    let request = hero(10);
    let mut stats = SolveStats::default();
    let plan = CraftPlanner::default().plan(&request, &leftovers, Role::Dealer, &mut stats);

    assert!(plan.possible);
    assert!(plan.needs.is_empty());
    assert_eq!(existing_ids(&plan), vec![1, 2]);
    assert!(plan.met_with_existing(&request));

    let outcome = planned_outcome(&request, &plan);
    assert_eq!(outcome.status, SlotStatus::DegradedMet);
    assert_eq!(outcome.requirements.gap, 0);
    assert_eq!(outcome.achieved.core_point, 10);
}

#[test]
fn test_fewer_new_gems_beats_reuse_of_nothing() {
    let leftovers = decorate(&[order_gem(1, 3, 5, 2)]);
    let request = hero(10);
    let mut stats = SolveStats::default();
    let plan = CraftPlanner::default().plan(&request, &leftovers, Role::Dealer, &mut stats);

    assert!(plan.possible);
    assert_eq!(existing_ids(&plan), vec![1]);
    assert_eq!(plan.new_gem_count(), 1);
    // the single crafted gem has the lowest core point closing the gap, then
    // the most willpower left in the budget
    assert_eq!(plan.needs[0].core_point, 5);
    assert_eq!(plan.needs[0].willpower, 6);
    assert_eq!(plan.total_core_point, 10);
    assert_eq!(plan.total_willpower, 9);
    assert_eq!(plan.gap, 0);

    let outcome = planned_outcome(&request, &plan);
    assert_eq!(outcome.status, SlotStatus::Unmet);
    assert_eq!(outcome.achieved.core_point, 10);
    assert_eq!(outcome.achieved.willpower, 9);
    assert_eq!(outcome.used_gems[0].id, GemId(1));
}

#[test]
fn test_achieved_totals_include_crafted_gems() {
    let leftovers = decorate(&[order_gem(1, 4, 5, 1)]);
    let request = slot(Category::Order, CoreKind::Sun, CoreGrade::Relic, 20, 1);
    let mut stats = SolveStats::default();
    let plan = CraftPlanner::default().plan(&request, &leftovers, Role::Dealer, &mut stats);
    let outcome = planned_outcome(&request, &plan);

    assert_eq!(outcome.status, SlotStatus::Unmet);
    assert_eq!(existing_ids(&plan), vec![1]);
    assert_eq!(outcome.achieved.core_point, 20);
    assert_eq!(outcome.achieved.willpower, 15);
    assert_eq!(outcome.achieved.efficiency, leftovers[0].score(Role::Dealer));
    assert!(outcome.requirements.possible);
    assert_eq!(outcome.requirements.gap, 0);

    let needs: Vec<(u32, u32, u32)> = outcome
        .requirements
        .needs
        .iter()
        .map(|n| (n.core_point, n.willpower, n.count))
        .collect();
    assert_eq!(needs, vec![(5, 3, 2), (5, 5, 1)]);
}

#[test]
fn test_higher_scoring_reuse_wins_ties() {
    // the pair exceeds the budget, so each gem alone is completed by one craft
    let leftovers = decorate(&[order_gem(1, 5, 5, 1), order_gem(2, 5, 5, 4)]);
    let mut stats = SolveStats::default();
    let plan = CraftPlanner::default().plan(&hero(10), &leftovers, Role::Dealer, &mut stats);

    assert!(plan.possible);
    assert_eq!(existing_ids(&plan), vec![2]);
    assert_eq!(plan.new_gem_count(), 1);
    assert_eq!(plan.efficiency, leftovers[1].score(Role::Dealer));
}

#[test]
fn test_best_partial_when_nothing_closes() {
    let leftovers = decorate(&[order_gem(1, 3, 5, 1), order_gem(2, 6, 4, 1)]);
    let mut stats = SolveStats::default();
    let plan = CraftPlanner::default().plan(&hero(20), &leftovers, Role::Dealer, &mut stats);

    assert!(!plan.possible);
    assert!(plan.needs.is_empty());
    assert_eq!(plan.total_core_point, 9);
    assert_eq!(plan.total_willpower, 9);
    assert_eq!(plan.gap, 11);
    assert_eq!(plan.existing.len(), 2);
}

#[test]
fn test_craft_queries_are_cached() {
    let leftovers = decorate(&[order_gem(1, 3, 2, 2), order_gem(2, 3, 2, 1)]);
    let mut stats = SolveStats::default();
    CraftPlanner::default().plan(&hero(10), &leftovers, Role::Dealer, &mut stats);

    // {1} and {2} ask the same (gap, slots, willpower) question
    assert_eq!(stats.subsets_enumerated, 4);
    assert!(stats.craft_cache_hits >= 1);
    assert_eq!(stats.craft_searches + stats.craft_cache_hits, 4);
}

#[test]
fn test_plan_is_deterministic() {
    let leftovers = decorate(&[order_gem(1, 3, 3, 2), order_gem(2, 4, 3, 3), order_gem(3, 5, 4, 1)]);
    let request = slot(Category::Order, CoreKind::Moon, CoreGrade::Legend, 14, 2);
    let mut stats = SolveStats::default();
    let planner = CraftPlanner::default();

    let first = planner.plan(&request, &leftovers, Role::Dealer, &mut stats);
    let second = planner.plan(&request, &leftovers, Role::Dealer, &mut stats);
    assert_eq!(first, second);
}
