//! Gem builders.

use gemforge_core::{Gem, GemKind, GemOption, OptionKind};

/// Builder for test gems. Defaults: willpower 3, core point 1, no options.
#[derive(Debug, Clone, Copy)]
pub struct GemBuilder {
    id: u64,
    kind: GemKind,
    willpower: u32,
    core_point: u32,
    options: [GemOption; 2],
    filled: usize,
}

impl GemBuilder {
    pub fn new(id: u64, kind: GemKind) -> Self {
        Self {
            id,
            kind,
            willpower: 3,
            core_point: 1,
            options: [
                GemOption::absent(OptionKind::Attack),
                GemOption::absent(OptionKind::AllyAttackBoost),
            ],
            filled: 0,
        }
    }

    pub fn order(id: u64) -> Self {
        Self::new(id, GemKind::Order1)
    }

    pub fn chaos(id: u64) -> Self {
        Self::new(id, GemKind::Chaos1)
    }

    pub fn willpower(mut self, willpower: u32) -> Self {
        self.willpower = willpower;
        self
    }

    pub fn core_point(mut self, core_point: u32) -> Self {
        self.core_point = core_point;
        self
    }

    /// Fills the next free option slot. A third call replaces the second.
    pub fn option(mut self, kind: OptionKind, level: u32) -> Self {
        let index = self.filled.min(1);
        self.options[index] = GemOption::new(kind, level);
        self.filled += 1;
        self
    }

    pub fn build(self) -> Gem {
        Gem::new(self.id, self.kind, self.willpower, self.core_point, self.options)
    }
}

/// An order gem with a single attack option of `attack` levels.
pub fn order_gem(id: u64, willpower: u32, core_point: u32, attack: u32) -> Gem {
    GemBuilder::order(id)
        .willpower(willpower)
        .core_point(core_point)
        .option(OptionKind::Attack, attack)
        .build()
}

/// A chaos gem with a single attack option of `attack` levels.
pub fn chaos_gem(id: u64, willpower: u32, core_point: u32, attack: u32) -> Gem {
    GemBuilder::chaos(id)
        .willpower(willpower)
        .core_point(core_point)
        .option(OptionKind::Attack, attack)
        .build()
}
