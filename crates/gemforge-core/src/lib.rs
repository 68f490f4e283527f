//! GemForge Core - Domain types for gem allocation
//!
//! This crate provides the fundamental types shared by every GemForge crate:
//! - Gem records, option kinds and the per-role multiplier table
//! - Core grades, slot keys and allocation requests
//! - Per-slot outcomes and craft requirements
//! - The [`Efficiency`] score type used to rank combinations

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    Achieved, AllocationRequest, Category, CoreGrade, CoreKind, CraftRequirement, Gem, GemId,
    GemKind, GemOption, OptionKind, Requirements, Role, SlotKey, SlotOutcome, SlotRequest,
    SlotSelection, SlotStatus, TargetChoice, MAX_CORE_POINT, MAX_OPTION_LEVEL, MAX_WILLPOWER,
    MIN_CORE_POINT, MIN_WILLPOWER, SLOT_CAPACITY,
};
pub use error::{GemforgeError, Result};
pub use score::Efficiency;
