//! Gem records.

use std::fmt;

use super::macros::impl_named_enum;
use super::option::{GemOption, Role};
use super::slot::Category;
use crate::error::{GemforgeError, Result};

/// Lowest willpower a processed gem can cost.
pub const MIN_WILLPOWER: u32 = 3;
/// Highest willpower a processed gem can cost.
pub const MAX_WILLPOWER: u32 = 9;
/// Lowest core-point value of a gem.
pub const MIN_CORE_POINT: u32 = 1;
/// Highest core-point value of a gem.
pub const MAX_CORE_POINT: u32 = 5;
/// Highest option level.
pub const MAX_OPTION_LEVEL: u32 = 5;
/// Maximum number of gems socketed into one core.
pub const SLOT_CAPACITY: usize = 4;

/// Stable gem identity, unique within one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct GemId(pub u64);

impl fmt::Display for GemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gem kind code. The kind determines the gem's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GemKind {
    #[cfg_attr(feature = "serde", serde(rename = "order_1"))]
    Order1,
    #[cfg_attr(feature = "serde", serde(rename = "order_2"))]
    Order2,
    #[cfg_attr(feature = "serde", serde(rename = "order_3"))]
    Order3,
    #[cfg_attr(feature = "serde", serde(rename = "chaos_1"))]
    Chaos1,
    #[cfg_attr(feature = "serde", serde(rename = "chaos_2"))]
    Chaos2,
    #[cfg_attr(feature = "serde", serde(rename = "chaos_3"))]
    Chaos3,
}

impl_named_enum!(GemKind, "gem kind" {
    Order1 => "order_1",
    Order2 => "order_2",
    Order3 => "order_3",
    Chaos1 => "chaos_1",
    Chaos2 => "chaos_2",
    Chaos3 => "chaos_3",
});

impl GemKind {
    /// The category of cores this gem can be socketed into.
    pub const fn category(self) -> Category {
        match self {
            GemKind::Order1 | GemKind::Order2 | GemKind::Order3 => Category::Order,
            GemKind::Chaos1 | GemKind::Chaos2 | GemKind::Chaos3 => Category::Chaos,
        }
    }
}

/// An allocatable gem as registered by the user.
///
/// Gems are immutable once handed to the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gem {
    pub id: GemId,
    pub kind: GemKind,
    pub willpower: u32,
    pub core_point: u32,
    pub options: [GemOption; 2],
}

impl Gem {
    /// Creates a gem record.
    pub const fn new(
        id: u64,
        kind: GemKind,
        willpower: u32,
        core_point: u32,
        options: [GemOption; 2],
    ) -> Self {
        Self {
            id: GemId(id),
            kind,
            willpower,
            core_point,
            options,
        }
    }

    /// Returns the gem's category.
    #[inline]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Sum of both options' efficiency under `role`.
    pub fn efficiency(&self, role: Role) -> f64 {
        self.options[0].efficiency(role) + self.options[1].efficiency(role)
    }

    /// Checks the gem against processing limits.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| GemforgeError::InvalidGem {
            id: self.id,
            reason,
        };

        if !(MIN_WILLPOWER..=MAX_WILLPOWER).contains(&self.willpower) {
            return Err(invalid(format!(
                "willpower {} outside {MIN_WILLPOWER}..={MAX_WILLPOWER}",
                self.willpower
            )));
        }
        if !(MIN_CORE_POINT..=MAX_CORE_POINT).contains(&self.core_point) {
            return Err(invalid(format!(
                "core point {} outside {MIN_CORE_POINT}..={MAX_CORE_POINT}",
                self.core_point
            )));
        }
        for option in &self.options {
            if option.level > MAX_OPTION_LEVEL {
                return Err(invalid(format!(
                    "{} level {} above {MAX_OPTION_LEVEL}",
                    option.kind, option.level
                )));
            }
        }
        Ok(())
    }
}
