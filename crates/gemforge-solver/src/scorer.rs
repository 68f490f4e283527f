//! Gem scoring and search ordering.
//!
//! Scores are computed once per solve into [`ScoredGem`] records. The
//! caller's [`Gem`] values are copied, never modified.

use std::cmp::Ordering;

use gemforge_core::{Efficiency, Gem, GemId, Role};

/// A gem decorated with its efficiency under both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGem {
    pub gem: Gem,
    pub dealer: Efficiency,
    pub supporter: Efficiency,
}

impl ScoredGem {
    /// Decorates a gem with both role scores.
    pub fn new(gem: Gem) -> Self {
        Self {
            gem,
            dealer: score_gem(&gem, Role::Dealer),
            supporter: score_gem(&gem, Role::Supporter),
        }
    }

    /// Returns the cached score for `role`.
    #[inline]
    pub fn score(&self, role: Role) -> Efficiency {
        match role {
            Role::Dealer => self.dealer,
            Role::Supporter => self.supporter,
        }
    }

    #[inline]
    pub fn id(&self) -> GemId {
        self.gem.id
    }

    #[inline]
    pub fn willpower(&self) -> u32 {
        self.gem.willpower
    }

    #[inline]
    pub fn core_point(&self) -> u32 {
        self.gem.core_point
    }
}

/// Computes a gem's efficiency under `role`.
///
/// Each option contributes `level * multiplier`; options outside the role's
/// table and empty slots contribute zero.
pub fn score_gem(gem: &Gem, role: Role) -> Efficiency {
    Efficiency::of(gem.efficiency(role))
}

/// Decorates every gem of the pool, preserving order.
pub fn decorate(gems: &[Gem]) -> Vec<ScoredGem> {
    gems.iter().copied().map(ScoredGem::new).collect()
}

/// Search order: score desc, core point desc, willpower asc, id asc.
pub fn search_order(a: &ScoredGem, b: &ScoredGem, role: Role) -> Ordering {
    b.score(role)
        .cmp(&a.score(role))
        .then_with(|| b.core_point().cmp(&a.core_point()))
        .then_with(|| a.willpower().cmp(&b.willpower()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Returns a copy of `gems` sorted into search order.
pub fn sorted_for_search(gems: &[ScoredGem], role: Role) -> Vec<ScoredGem> {
    let mut sorted = gems.to_vec();
    sorted.sort_by(|a, b| search_order(a, b, role));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemforge_core::{GemKind, GemOption, OptionKind};

    fn gem(id: u64, options: [GemOption; 2]) -> Gem {
        Gem::new(id, GemKind::Chaos2, 5, 4, options)
    }

    #[test]
    fn test_role_scores() {
        let scored = ScoredGem::new(gem(
            1,
            [
                GemOption::new(OptionKind::ExtraDamage, 3),
                GemOption::new(OptionKind::BrandPower, 2),
            ],
        ));

        assert_eq!(scored.score(Role::Dealer), Efficiency::of(3.0 * 8.0834));
        assert_eq!(scored.score(Role::Supporter), Efficiency::of(2.0 * 2.276875));
    }

    #[test]
    fn test_absent_options_score_zero() {
        let scored = ScoredGem::new(gem(
            2,
            [
                GemOption::absent(OptionKind::Attack),
                GemOption::absent(OptionKind::AllyAttackBoost),
            ],
        ));
        assert_eq!(scored.dealer, Efficiency::ZERO);
        assert_eq!(scored.supporter, Efficiency::ZERO);
    }

    #[test]
    fn test_decorate_is_idempotent() {
        let gems = vec![
            gem(1, [GemOption::new(OptionKind::Attack, 5), GemOption::absent(OptionKind::Attack)]),
            gem(2, [GemOption::new(OptionKind::BossDamage, 1), GemOption::absent(OptionKind::Attack)]),
        ];
        let first = decorate(&gems);
        let second = decorate(&gems);
        assert_eq!(first, second);
        assert_eq!(first[0].gem, gems[0]);
    }

    #[test]
    fn test_search_order_tie_breaks() {
        let attack = [GemOption::new(OptionKind::Attack, 1), GemOption::absent(OptionKind::Attack)];
        let mut pool = vec![
            ScoredGem::new(Gem::new(4, GemKind::Order1, 6, 3, attack)),
            ScoredGem::new(Gem::new(3, GemKind::Order1, 4, 3, attack)),
            ScoredGem::new(Gem::new(2, GemKind::Order1, 4, 3, attack)),
            ScoredGem::new(Gem::new(1, GemKind::Order1, 9, 5, attack)),
            ScoredGem::new(Gem::new(
                5,
                GemKind::Order1,
                9,
                1,
                [GemOption::new(OptionKind::Attack, 2), GemOption::absent(OptionKind::Attack)],
            )),
        ];
        pool = sorted_for_search(&pool, Role::Dealer);
        let ids: Vec<u64> = pool.iter().map(|g| g.id().0).collect();
        assert_eq!(ids, vec![5, 1, 2, 3, 4]);
    }
}
