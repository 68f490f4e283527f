//! Gem option kinds, roles and the efficiency multiplier table.

use super::macros::impl_named_enum;

/// The scoring mode used for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Role {
    /// Damage dealer: attack, extra damage and boss damage options count.
    Dealer,
    /// Supporter: brand power and ally boost options count.
    Supporter,
}

impl_named_enum!(Role, "role" {
    Dealer => "dealer",
    Supporter => "supporter",
});

/// The effect carried by one of a gem's two option slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OptionKind {
    Attack,
    ExtraDamage,
    BossDamage,
    BrandPower,
    AllyDamageBoost,
    AllyAttackBoost,
}

impl_named_enum!(OptionKind, "option kind" {
    Attack => "attack",
    ExtraDamage => "extra_damage",
    BossDamage => "boss_damage",
    BrandPower => "brand_power",
    AllyDamageBoost => "ally_damage_boost",
    AllyAttackBoost => "ally_attack_boost",
});

impl OptionKind {
    /// Efficiency gained per option level for the given role.
    ///
    /// Options belonging to the other role's table contribute nothing.
    pub const fn multiplier(self, role: Role) -> f64 {
        match (role, self) {
            (Role::Dealer, OptionKind::Attack) => 3.667,
            (Role::Dealer, OptionKind::ExtraDamage) => 8.0834,
            (Role::Dealer, OptionKind::BossDamage) => 8.3334,
            (Role::Dealer, OptionKind::BrandPower)
            | (Role::Dealer, OptionKind::AllyDamageBoost)
            | (Role::Dealer, OptionKind::AllyAttackBoost) => 0.0,
            (Role::Supporter, OptionKind::AllyAttackBoost) => 2.33157311,
            (Role::Supporter, OptionKind::BrandPower) => 2.276875,
            (Role::Supporter, OptionKind::AllyDamageBoost) => 2.20059198,
            (Role::Supporter, OptionKind::Attack)
            | (Role::Supporter, OptionKind::ExtraDamage)
            | (Role::Supporter, OptionKind::BossDamage) => 0.0,
        }
    }

    /// Returns the role whose table scores this option.
    pub const fn role(self) -> Role {
        match self {
            OptionKind::Attack | OptionKind::ExtraDamage | OptionKind::BossDamage => Role::Dealer,
            OptionKind::BrandPower | OptionKind::AllyDamageBoost | OptionKind::AllyAttackBoost => {
                Role::Supporter
            }
        }
    }
}

/// One option slot on a gem. Level 0 means the slot is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GemOption {
    pub kind: OptionKind,
    pub level: u32,
}

impl GemOption {
    /// Creates an option with the given level.
    pub const fn new(kind: OptionKind, level: u32) -> Self {
        Self { kind, level }
    }

    /// Creates an empty option slot.
    pub const fn absent(kind: OptionKind) -> Self {
        Self { kind, level: 0 }
    }

    /// Returns true if the slot carries no option.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.level == 0
    }

    /// Efficiency contributed by this option under `role`.
    #[inline]
    pub fn efficiency(&self, role: Role) -> f64 {
        self.level as f64 * self.kind.multiplier(role)
    }
}
