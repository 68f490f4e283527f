//! Per-slot allocation outcomes.

use super::gem::Gem;
use super::slot::SlotKey;
use crate::score::Efficiency;

/// How a slot ended up after the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SlotStatus {
    /// Satisfied by the joint assignment.
    Met,
    /// Dropped from the joint assignment, then satisfied from leftover gems.
    DegradedMet,
    /// Not satisfiable with existing gems.
    Unmet,
}

impl SlotStatus {
    /// Returns true for both met variants.
    pub const fn is_met(self) -> bool {
        matches!(self, SlotStatus::Met | SlotStatus::DegradedMet)
    }
}

/// Totals the slot reaches, counting planned crafts for a possible plan.
///
/// `efficiency` scores the existing gems only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Achieved {
    pub core_point: u32,
    pub willpower: u32,
    pub efficiency: Efficiency,
}

/// One kind of theoretical gem to craft, with how many are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftRequirement {
    pub willpower: u32,
    pub core_point: u32,
    pub count: u32,
}

/// What is still missing for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirements {
    /// False when even new gems cannot close the gap.
    pub possible: bool,
    /// Core points still missing after the planned crafts.
    pub gap: u32,
    pub needs: Vec<CraftRequirement>,
}

impl Requirements {
    /// Nothing missing.
    pub fn satisfied() -> Self {
        Self {
            possible: true,
            gap: 0,
            needs: Vec::new(),
        }
    }

    /// Total number of new gems across all requirements.
    pub fn new_gem_count(&self) -> u32 {
        self.needs.iter().map(|n| n.count).sum()
    }
}

/// Final record for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotOutcome {
    pub key: SlotKey,
    pub status: SlotStatus,
    pub target_point: u32,
    pub priority: u32,
    pub budget: u32,
    pub used_gems: Vec<Gem>,
    pub achieved: Achieved,
    pub requirements: Requirements,
}

impl SlotOutcome {
    /// Returns true if the slot reached its target with existing gems.
    pub fn is_met(&self) -> bool {
        self.status.is_met()
    }
}
