//! GemForge - gem allocation to prioritized cores
//!
//! Build an [`AllocationRequest`], hand it a gem pool and a [`Role`], and
//! read back one [`SlotOutcome`] per active core.
//!
//! # Example
//!
//! ```rust
//! use gemforge::prelude::*;
//!
//! let attack = [GemOption::new(OptionKind::Attack, 2), GemOption::absent(OptionKind::Attack)];
//! let gems = vec![
//!     Gem::new(1, GemKind::Chaos1, 3, 5, attack),
//!     Gem::new(2, GemKind::Chaos2, 4, 5, attack),
//! ];
//! let moon = SlotKey::new(Category::Chaos, CoreKind::Moon);
//! let request = AllocationRequest::new().with_slot(moon, SlotSelection::new(CoreGrade::Hero, 10, 1, 0));
//!
//! let allocation = Optimizer::default().optimize(&request, &gems, Role::Dealer);
//! assert!(allocation.get(moon).unwrap().is_met());
//! ```

pub use gemforge_core::{
    Achieved, AllocationRequest, Category, CoreGrade, CoreKind, CraftRequirement, Efficiency, Gem,
    GemId, GemKind, GemOption, GemforgeError, OptionKind, Requirements, Role, SlotKey,
    SlotOutcome, SlotRequest, SlotSelection, SlotStatus, TargetChoice,
};

pub use gemforge_config::{AllocatorConfig, ConfigError, CraftConfig, ValidationConfig};

pub use gemforge_solver::{
    aggregate_needs, decorate, enumerate_all, score_gem, solve_with_drops, Allocation,
    Assignment, AssignmentBounder, AssignmentSolver, Combination, CombinationGenerator,
    CraftCatalog, CraftPlan, CraftPlanner, Degradation, NoBounder, Optimizer, ScoredGem,
    SolveStats, SuffixBounder,
};

#[cfg(feature = "console")]
pub use gemforge_console as console;

mod solver;
pub use solver::{optimize, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        AllocationRequest, Category, CoreGrade, CoreKind, Gem, GemKind, GemOption, OptionKind,
        Role, SlotKey, SlotSelection, SlotStatus,
    };
    pub use super::{optimize, Allocation, AllocatorConfig, Optimizer};
}
