//! Elemental categories, core kinds, grades and slot keys.

use std::fmt;
use std::str::FromStr;

use super::macros::impl_named_enum;
use crate::error::GemforgeError;

/// Elemental category shared by cores and gems.
///
/// Slots and gems of different categories never interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Category {
    Order,
    Chaos,
}

impl_named_enum!(Category, "category" {
    Order => "order",
    Chaos => "chaos",
});

/// The three core kinds available in each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CoreKind {
    Sun,
    Moon,
    Star,
}

impl_named_enum!(CoreKind, "core kind" {
    Sun => "sun",
    Moon => "moon",
    Star => "star",
});

/// Core grade, which fixes the willpower budget and the target menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CoreGrade {
    Hero,
    Legend,
    Relic,
    Ancient,
}

impl_named_enum!(CoreGrade, "grade" {
    Hero => "hero",
    Legend => "legend",
    Relic => "relic",
    Ancient => "ancient",
});

const FULL_TARGET_MENU: &[u32] = &[10, 14, 17, 18, 19, 20];

impl CoreGrade {
    /// Total willpower the core supplies to its gems.
    pub const fn willpower_budget(self) -> u32 {
        match self {
            CoreGrade::Hero => 9,
            CoreGrade::Legend => 12,
            CoreGrade::Relic => 15,
            CoreGrade::Ancient => 17,
        }
    }

    /// Target points that can be selected for a core of this grade.
    pub const fn target_points(self) -> &'static [u32] {
        match self {
            CoreGrade::Hero => &[10],
            CoreGrade::Legend => &[10, 14],
            CoreGrade::Relic | CoreGrade::Ancient => FULL_TARGET_MENU,
        }
    }

    /// Returns true if `point` is on this grade's target menu.
    pub fn offers_target(self, point: u32) -> bool {
        self.target_points().contains(&point)
    }
}

/// Identifies one of the six core slots.
///
/// Printed and parsed as `<category>_<kind>`, e.g. `order_sun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SlotKey {
    pub category: Category,
    pub kind: CoreKind,
}

impl SlotKey {
    /// Creates a slot key.
    pub const fn new(category: Category, kind: CoreKind) -> Self {
        Self { category, kind }
    }

    /// All six slots, order category first.
    pub fn all() -> impl Iterator<Item = SlotKey> {
        Category::ALL.iter().flat_map(|&category| {
            CoreKind::ALL
                .iter()
                .map(move |&kind| SlotKey::new(category, kind))
        })
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category, self.kind)
    }
}

impl FromStr for SlotKey {
    type Err = GemforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, kind) = s
            .trim()
            .split_once('_')
            .ok_or_else(|| GemforgeError::unknown("slot", s))?;
        Ok(SlotKey::new(category.parse()?, kind.parse()?))
    }
}

impl TryFrom<String> for SlotKey {
    type Error = GemforgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotKey> for String {
    fn from(key: SlotKey) -> Self {
        key.to_string()
    }
}
