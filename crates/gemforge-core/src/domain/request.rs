//! Allocation requests and the normalized per-slot requests derived from them.

use std::collections::{BTreeMap, HashSet};

use super::gem::Gem;
use super::slot::{Category, CoreGrade, SlotKey};
use crate::error::{GemforgeError, Result};

/// The target a user picked for a core, with its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetChoice {
    /// Core points the slot must reach.
    pub point: u32,
    /// Priority rank within the category, 1 being most important.
    pub priority: u32,
    /// Registration order, used to break priority ties.
    #[cfg_attr(feature = "serde", serde(default))]
    pub registered_at: u64,
}

/// What the user configured for one core slot.
///
/// A slot only takes part in a solve when both a grade and a target are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSelection {
    #[cfg_attr(feature = "serde", serde(default))]
    pub grade: Option<CoreGrade>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<TargetChoice>,
}

impl SlotSelection {
    /// Creates an active selection.
    pub fn new(grade: CoreGrade, point: u32, priority: u32, registered_at: u64) -> Self {
        Self {
            grade: Some(grade),
            target: Some(TargetChoice {
                point,
                priority,
                registered_at,
            }),
        }
    }
}

/// Snapshot of every slot selection for one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationRequest {
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: BTreeMap<SlotKey, SlotSelection>,
}

/// A normalized, active slot ready for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRequest {
    pub key: SlotKey,
    pub grade: CoreGrade,
    pub budget: u32,
    pub target_point: u32,
    pub priority: u32,
    pub registered_at: u64,
}

impl SlotRequest {
    /// Builds a slot request, deriving the budget from the grade.
    pub fn new(key: SlotKey, grade: CoreGrade, target: TargetChoice) -> Self {
        Self {
            key,
            grade,
            budget: grade.willpower_budget(),
            target_point: target.point,
            priority: target.priority,
            registered_at: target.registered_at,
        }
    }
}

impl AllocationRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a slot selection.
    pub fn with_slot(mut self, key: SlotKey, selection: SlotSelection) -> Self {
        self.slots.insert(key, selection);
        self
    }

    /// Active slot requests of `category`, most important first.
    ///
    /// Slots without a grade or without a target are skipped.
    pub fn slot_requests(&self, category: Category) -> Vec<SlotRequest> {
        let mut requests: Vec<SlotRequest> = self
            .slots
            .iter()
            .filter(|(key, _)| key.category == category)
            .filter_map(|(&key, selection)| {
                Some(SlotRequest::new(key, selection.grade?, selection.target?))
            })
            .collect();
        requests.sort_by_key(|r| (r.priority, r.registered_at, r.key));
        requests
    }

    /// Number of slots that will take part in a solve.
    pub fn active_slot_count(&self) -> usize {
        self.slots
            .values()
            .filter(|s| s.grade.is_some() && s.target.is_some())
            .count()
    }

    /// Boundary validation for callers that want hard errors.
    ///
    /// The allocator itself accepts any well-typed request; this rejects
    /// targets off the grade's menu, zero or repeated priorities within a
    /// category, invalid or duplicate gems, and empty inputs.
    pub fn validate(&self, gems: &[Gem]) -> Result<()> {
        if self.active_slot_count() == 0 {
            return Err(GemforgeError::EmptyRequest(
                "no slot has both a grade and a target".to_string(),
            ));
        }
        if gems.is_empty() {
            return Err(GemforgeError::EmptyRequest("gem pool is empty".to_string()));
        }

        let mut priorities = HashSet::new();
        for (&slot, selection) in &self.slots {
            let (Some(grade), Some(target)) = (selection.grade, selection.target) else {
                continue;
            };
            if !grade.offers_target(target.point) {
                return Err(GemforgeError::InvalidSlot {
                    slot,
                    reason: format!(
                        "target {} not offered by {grade} (choices: {:?})",
                        target.point,
                        grade.target_points()
                    ),
                });
            }
            if target.priority == 0 {
                return Err(GemforgeError::InvalidSlot {
                    slot,
                    reason: "priority ranks start at 1".to_string(),
                });
            }
            if !priorities.insert((slot.category, target.priority)) {
                return Err(GemforgeError::InvalidSlot {
                    slot,
                    reason: format!(
                        "priority {} already used in {}",
                        target.priority, slot.category
                    ),
                });
            }
        }

        let mut ids = HashSet::with_capacity(gems.len());
        for gem in gems {
            gem.validate()?;
            if !ids.insert(gem.id) {
                return Err(GemforgeError::DuplicateGem(gem.id));
            }
        }
        Ok(())
    }
}
