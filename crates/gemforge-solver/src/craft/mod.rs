//! Craft planning: closing a slot's gap with leftover and theoretical gems.

mod catalog;
mod planner;

#[cfg(test)]
mod tests;

pub use catalog::{CraftCatalog, CraftSet, TheoreticalGem};
pub use planner::{CraftPlan, CraftPlanner};
