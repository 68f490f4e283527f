//! GemForge Solver Engine
//!
//! This crate provides the allocation pipeline:
//! - Gem scoring ([`score_gem`], [`decorate`])
//! - Per-slot candidate generation ([`CombinationGenerator`]) and exhaustive
//!   subset enumeration ([`enumerate_all`])
//! - Joint gem-disjoint assignment by branch-and-bound ([`AssignmentSolver`])
//! - Priority-driven slot dropping ([`solve_with_drops`])
//! - Craft planning with theoretical gems ([`CraftPlanner`])
//! - Outcome assembly ([`aggregate_needs`]) and the [`Optimizer`] entry point
//!
//! # Logging
//!
//! Structured `tracing` events carry an `event` field:
//!
//! - INFO: `solve_start`, `category_start`, `assignment_found`,
//!   `assignment_infeasible`, `slots_dropped`, `category_end`, `solve_end`
//! - DEBUG: `candidates_generated`, `drop_attempt`, `craft_planned`
//! - TRACE: `incumbent_improved`

pub mod aggregate;
pub mod assignment;
pub mod craft;
pub mod degradation;
pub mod optimizer;
pub mod scorer;
pub mod search;
pub mod stats;

pub use aggregate::{aggregate_needs, met_outcome, planned_outcome};
pub use assignment::{Assignment, AssignmentBounder, AssignmentSolver, NoBounder, SuffixBounder};
pub use craft::{CraftCatalog, CraftPlan, CraftPlanner, CraftSet, TheoreticalGem};
pub use degradation::{drop_order, solve_with_drops, Degradation};
pub use optimizer::{Allocation, Optimizer};
pub use scorer::{decorate, score_gem, search_order, sorted_for_search, ScoredGem};
pub use search::{enumerate_all, rank_candidates, Combination, CombinationGenerator, Selection, Totals};
pub use stats::SolveStats;
