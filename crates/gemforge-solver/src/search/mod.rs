//! Per-slot subset search.
//!
//! Both searches walk the same pre-order, capacity-bounded subset tree over a
//! pool sorted by [`search_order`](crate::scorer::search_order):
//!
//! - [`CombinationGenerator`]: subsets reaching a target, ranked and capped
//! - [`enumerate_all`]: every feasible subset, empty one included

mod combination;
mod enumerator;
mod generator;
mod selection;
mod walk;


pub use combination::{rank_candidates, Combination};
pub use enumerator::enumerate_all;
pub use generator::CombinationGenerator;
pub use selection::{Selection, Totals};
