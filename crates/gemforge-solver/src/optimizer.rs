//! Allocation entry point.
//!
//! The optimizer decorates the pool, splits it by category and runs the full
//! pipeline per category: candidate generation, joint assignment with
//! degradation, then craft planning for every dropped slot.

use std::collections::{BTreeMap, HashSet};

use gemforge_config::AllocatorConfig;
use gemforge_core::{AllocationRequest, Category, Gem, GemId, Role, SlotKey, SlotOutcome, SlotRequest};
use tracing::{debug, info};

use crate::aggregate::{met_outcome, planned_outcome};
use crate::assignment::AssignmentSolver;
use crate::craft::CraftPlanner;
use crate::degradation::solve_with_drops;
use crate::scorer::{decorate, ScoredGem};
use crate::search::{Combination, CombinationGenerator};
use crate::stats::SolveStats;

/// Outcome of one allocation request.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    /// One outcome per active slot.
    pub outcomes: BTreeMap<SlotKey, SlotOutcome>,
    pub stats: SolveStats,
}

impl Allocation {
    pub fn get(&self, key: SlotKey) -> Option<&SlotOutcome> {
        self.outcomes.get(&key)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of slots reaching their target with existing gems.
    pub fn met_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_met()).count()
    }

    /// Returns true if every slot is met.
    pub fn all_met(&self) -> bool {
        self.outcomes.values().all(SlotOutcome::is_met)
    }
}

#[derive(Debug, Default)]
struct CategoryResult {
    outcomes: Vec<SlotOutcome>,
    stats: SolveStats,
}

/// Runs allocation requests under one configuration.
///
/// # Example
///
/// ```
/// use gemforge_config::AllocatorConfig;
/// use gemforge_core::{
///     AllocationRequest, Category, CoreGrade, CoreKind, Gem, GemKind, GemOption, OptionKind,
///     Role, SlotKey, SlotSelection, SlotStatus,
/// };
/// use gemforge_solver::Optimizer;
///
/// let attack = [GemOption::new(OptionKind::Attack, 3), GemOption::absent(OptionKind::Attack)];
/// let gems = vec![
///     Gem::new(1, GemKind::Order1, 4, 5, attack),
///     Gem::new(2, GemKind::Order2, 5, 5, attack),
/// ];
/// let sun = SlotKey::new(Category::Order, CoreKind::Sun);
/// let request = AllocationRequest::new().with_slot(sun, SlotSelection::new(CoreGrade::Hero, 10, 1, 0));
///
/// let allocation = Optimizer::new(AllocatorConfig::default()).optimize(&request, &gems, Role::Dealer);
/// assert_eq!(allocation.get(sun).unwrap().status, SlotStatus::Met);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    config: AllocatorConfig,
    generator: CombinationGenerator,
    planner: CraftPlanner,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(AllocatorConfig::default())
    }
}

impl Optimizer {
    pub fn new(config: AllocatorConfig) -> Self {
        Self {
            generator: CombinationGenerator::new(config.combination_limit),
            planner: CraftPlanner::new(&config.craft),
            config,
        }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates `gems` to the active slots of `request`.
    ///
    /// Never fails: infeasible slots come back as [`SlotStatus::Unmet`]
    /// outcomes with their craft requirements.
    ///
    /// [`SlotStatus::Unmet`]: gemforge_core::SlotStatus::Unmet
    pub fn optimize(&self, request: &AllocationRequest, gems: &[Gem], role: Role) -> Allocation {
        let mut stats = SolveStats::default();
        stats.start();
        info!(
            event = "solve_start",
            role = %role,
            slots = request.active_slot_count(),
            gems = gems.len(),
            parallel = self.config.parallel_categories,
        );

        let decorated = decorate(gems);
        let pool_of = |category: Category| -> Vec<ScoredGem> {
            decorated
                .iter()
                .filter(|g| g.gem.category() == category)
                .copied()
                .collect()
        };
        let order_pool = pool_of(Category::Order);
        let chaos_pool = pool_of(Category::Chaos);
        let order_requests = request.slot_requests(Category::Order);
        let chaos_requests = request.slot_requests(Category::Chaos);

        let (order, chaos) = if self.config.parallel_categories {
            rayon::join(
                || self.solve_category(Category::Order, &order_requests, &order_pool, role),
                || self.solve_category(Category::Chaos, &chaos_requests, &chaos_pool, role),
            )
        } else {
            (
                self.solve_category(Category::Order, &order_requests, &order_pool, role),
                self.solve_category(Category::Chaos, &chaos_requests, &chaos_pool, role),
            )
        };

        let mut outcomes = BTreeMap::new();
        for result in [order, chaos] {
            stats.merge(&result.stats);
            outcomes.extend(result.outcomes.into_iter().map(|o| (o.key, o)));
        }
        stats.finish();

        let allocation = Allocation { outcomes, stats };
        info!(
            event = "solve_end",
            met = allocation.met_count(),
            slots = allocation.len(),
            nodes = allocation.stats.nodes_explored,
            pruned = allocation.stats.nodes_pruned,
            duration_ms = allocation.stats.elapsed().as_millis() as u64,
        );
        allocation
    }

    fn solve_category(
        &self,
        category: Category,
        requests: &[SlotRequest],
        pool: &[ScoredGem],
        role: Role,
    ) -> CategoryResult {
        let mut result = CategoryResult::default();
        if requests.is_empty() {
            return result;
        }
        result.stats.start();
        info!(
            event = "category_start",
            category = %category,
            slots = requests.len(),
            gems = pool.len(),
        );

        let candidates: BTreeMap<SlotKey, Vec<Combination>> = requests
            .iter()
            .map(|r| {
                let list = self.generator.generate(pool, r.budget, r.target_point, role);
                debug!(
                    event = "candidates_generated",
                    slot = %r.key,
                    budget = r.budget,
                    target = r.target_point,
                    count = list.len(),
                );
                result.stats.record_combinations(list.len());
                (r.key, list)
            })
            .collect();

        let solver = AssignmentSolver::new();
        let degradation = solve_with_drops(&solver, requests, &candidates, &mut result.stats);

        let mut used: HashSet<GemId> = HashSet::new();
        match &degradation.assignment {
            Some(assignment) => {
                info!(
                    event = "assignment_found",
                    category = %category,
                    kept = degradation.kept.len(),
                    score = %assignment.score(),
                );
                for request in requests {
                    if let Some(combination) = assignment.get(request.key) {
                        used.extend(combination.ids());
                        result.outcomes.push(met_outcome(request, combination));
                    }
                }
            }
            None => info!(event = "assignment_infeasible", category = %category),
        }

        if !degradation.dropped.is_empty() {
            info!(
                event = "slots_dropped",
                category = %category,
                dropped = degradation.dropped.len(),
            );
        }

        let mut dropped: Vec<&SlotRequest> = requests
            .iter()
            .filter(|r| degradation.dropped.contains(&r.key))
            .collect();
        dropped.sort_by_key(|r| (r.priority, r.registered_at));

        let mut leftovers: Vec<ScoredGem> = pool
            .iter()
            .filter(|g| !used.contains(&g.id()))
            .copied()
            .collect();
        for request in dropped {
            let plan = self.planner.plan(request, &leftovers, role, &mut result.stats);
            if !plan.existing.is_empty() {
                leftovers.retain(|g| !plan.existing.contains(g.id()));
            }
            result.outcomes.push(planned_outcome(request, &plan));
        }

        result.stats.finish();
        info!(
            event = "category_end",
            category = %category,
            met = result.outcomes.iter().filter(|o| o.is_met()).count(),
            slots = result.outcomes.len(),
            duration_ms = result.stats.elapsed().as_millis() as u64,
        );
        result
    }
}

#[cfg(test)]
#[path = "optimizer_tests.rs"]
mod tests;
