//! Domain model for gem allocation
//!
//! This module provides:
//! - [`Gem`] records and their option slots
//! - [`Role`] and the per-role option multiplier table
//! - Core [`SlotKey`]s, grades and [`AllocationRequest`]s
//! - [`SlotOutcome`] records returned by the allocator

mod gem;
mod macros;
mod option;
mod outcome;
mod request;
mod slot;


pub use gem::{
    Gem, GemId, GemKind, MAX_CORE_POINT, MAX_OPTION_LEVEL, MAX_WILLPOWER, MIN_CORE_POINT,
    MIN_WILLPOWER, SLOT_CAPACITY,
};
pub use option::{GemOption, OptionKind, Role};
pub use outcome::{Achieved, CraftRequirement, Requirements, SlotOutcome, SlotStatus};
pub use request::{AllocationRequest, SlotRequest, SlotSelection, TargetChoice};
pub use slot::{Category, CoreGrade, CoreKind, SlotKey};
