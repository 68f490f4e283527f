//! End-to-end allocation properties.

use std::collections::HashSet;

use gemforge::prelude::*;
use gemforge::{AllocatorConfig, CombinationGenerator, GemId, GemforgeError, SlotOutcome};
use gemforge_test::pools::{mixed_pool, small_order_pool, two_order_slots};
use gemforge_test::{chaos_gem, order_gem, request_for, slot};

fn varied_pool(seed: u64) -> Vec<Gem> {
    let mut state = seed;
    let mut next = move |modulo: u64| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) % modulo
    };
    (1..=14)
        .map(|id| {
            let willpower = 3 + next(7) as u32;
            let core_point = 1 + next(5) as u32;
            let attack = next(6) as u32;
            if id % 2 == 0 {
                order_gem(id, willpower, core_point, attack)
            } else {
                chaos_gem(id, willpower, core_point, attack)
            }
        })
        .collect()
}

fn full_request() -> AllocationRequest {
    request_for(&[
        slot(Category::Order, CoreKind::Sun, CoreGrade::Ancient, 17, 1),
        slot(Category::Order, CoreKind::Moon, CoreGrade::Relic, 14, 2),
        slot(Category::Order, CoreKind::Star, CoreGrade::Hero, 10, 3),
        slot(Category::Chaos, CoreKind::Sun, CoreGrade::Legend, 14, 1),
        slot(Category::Chaos, CoreKind::Moon, CoreGrade::Legend, 10, 2),
        slot(Category::Chaos, CoreKind::Star, CoreGrade::Relic, 10, 3),
    ])
}

fn assert_well_formed(outcome: &SlotOutcome) {
    assert!(outcome.used_gems.len() <= 4);
    let willpower: u32 = outcome.used_gems.iter().map(|g| g.willpower).sum();
    let core_point: u32 = outcome.used_gems.iter().map(|g| g.core_point).sum();
    assert!(willpower <= outcome.budget, "{} over budget", outcome.key);
    assert!(outcome.used_gems.iter().all(|g| g.category() == outcome.key.category));

    let requirements = &outcome.requirements;
    match outcome.status {
        SlotStatus::Met | SlotStatus::DegradedMet => {
            assert_eq!(outcome.achieved.willpower, willpower);
            assert_eq!(outcome.achieved.core_point, core_point);
            assert!(core_point >= outcome.target_point);
            assert!(requirements.needs.is_empty());
            assert_eq!(requirements.gap, 0);
        }
        SlotStatus::Unmet if requirements.possible => {
            // achieved totals count the crafted gems as well
            assert!(!requirements.needs.is_empty());
            assert_eq!(requirements.gap, 0);
            assert!(outcome.achieved.core_point >= outcome.target_point);
            assert!(outcome.achieved.core_point > core_point);
            assert!(outcome.achieved.willpower <= outcome.budget);
        }
        SlotStatus::Unmet => {
            assert_eq!(outcome.achieved.willpower, willpower);
            assert_eq!(outcome.achieved.core_point, core_point);
            assert!(requirements.needs.is_empty());
            assert_eq!(requirements.gap, outcome.target_point.saturating_sub(core_point));
        }
    }
}

#[test]
fn test_outcomes_are_well_formed_and_disjoint() {
    let request = full_request();
    for seed in 1..=8 {
        let gems = varied_pool(seed);
        let allocation = Optimizer::default().optimize(&request, &gems, Role::Dealer);
        assert_eq!(allocation.len(), 6);

        let mut seen: HashSet<GemId> = HashSet::new();
        for outcome in allocation.outcomes.values() {
            assert_well_formed(outcome);
            for gem in &outcome.used_gems {
                assert!(seen.insert(gem.id), "seed {seed}: gem {} reused", gem.id);
            }
        }
    }
}

#[test]
fn test_identical_inputs_identical_outcomes() {
    let request = full_request();
    let gems = varied_pool(3);
    let sequential = Optimizer::default().optimize(&request, &gems, Role::Supporter);
    let parallel = Optimizer::new(AllocatorConfig::default().with_parallel_categories(true))
        .optimize(&request, &gems, Role::Supporter);
    let again = Optimizer::default().optimize(&request, &gems, Role::Supporter);

    assert_eq!(sequential.outcomes, again.outcomes);
    assert_eq!(sequential.outcomes, parallel.outcomes);
}

#[test]
fn test_generator_never_returns_below_target() {
    let gems = gemforge::decorate(&varied_pool(5));
    let generator = CombinationGenerator::default();
    for (budget, target) in [(9, 10), (12, 14), (15, 17), (17, 20)] {
        for candidate in generator.generate(&gems, budget, target, Role::Dealer) {
            assert!(candidate.total_core_point() >= target);
            assert!(candidate.total_willpower() <= budget);
            assert!(candidate.len() <= 4);
        }
    }
}

#[test]
fn test_small_pool_scenario() {
    let allocation = Optimizer::default().optimize(
        &request_for(&two_order_slots()),
        &small_order_pool(),
        Role::Dealer,
    );
    let moon = allocation
        .get(SlotKey::new(Category::Order, CoreKind::Moon))
        .unwrap();

    assert_eq!(moon.status, SlotStatus::Unmet);
    assert!(moon.requirements.possible);
    assert!(!moon.requirements.needs.is_empty());
    for outcome in allocation.outcomes.values() {
        assert_well_formed(outcome);
    }
}

#[test]
fn test_unreachable_target_with_empty_pool() {
    let star = SlotKey::new(Category::Order, CoreKind::Star);
    let mut request =
        AllocationRequest::new().with_slot(star, SlotSelection::new(CoreGrade::Hero, 10, 1, 0));
    // hero only offers target 10; bypass the menu to ask for 20
    request.slots.get_mut(&star).unwrap().target.as_mut().unwrap().point = 20;

    let allocation = Optimizer::default().optimize(&request, &[], Role::Dealer);
    let outcome = allocation.get(star).unwrap();
    assert_eq!(outcome.status, SlotStatus::Unmet);
    assert!(outcome.used_gems.is_empty());
    assert!(!outcome.requirements.possible);
    assert_eq!(outcome.requirements.gap, 20);
}

#[test]
fn test_validation_at_the_boundary() {
    let gems = mixed_pool();
    assert!(full_request().validate(&gems).is_ok());

    let duplicate = vec![order_gem(1, 3, 5, 1), order_gem(1, 4, 5, 1)];
    assert!(matches!(
        full_request().validate(&duplicate),
        Err(GemforgeError::DuplicateGem(GemId(1)))
    ));

    let off_menu = request_for(&[slot(Category::Order, CoreKind::Sun, CoreGrade::Hero, 14, 1)]);
    assert!(matches!(off_menu.validate(&gems), Err(GemforgeError::InvalidSlot { .. })));

    assert!(matches!(
        AllocationRequest::new().validate(&gems),
        Err(GemforgeError::EmptyRequest(_))
    ));
}

#[test]
fn test_optimize_uses_defaults_without_config_file() {
    let request = request_for(&[slot(Category::Chaos, CoreKind::Sun, CoreGrade::Hero, 10, 1)]);
    let gems = vec![chaos_gem(1, 4, 5, 2), chaos_gem(2, 5, 5, 1)];

    let allocation = optimize(&request, &gems, Role::Dealer);
    assert!(allocation.all_met());
    assert_eq!(allocation.met_count(), 1);
}
