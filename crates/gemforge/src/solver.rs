//! Allocation entry point that hides configuration wiring.

use gemforge_config::AllocatorConfig;
use gemforge_core::{AllocationRequest, Gem, Role};
use gemforge_solver::{Allocation, Optimizer};

/// Configuration file read by [`optimize`] from the working directory.
pub const CONFIG_FILE: &str = "gemforge.toml";

/// Runs one allocation with the configuration in [`CONFIG_FILE`], falling
/// back to defaults when the file is missing or invalid.
///
/// With the `console` feature, console logging is initialized first.
pub fn optimize(request: &AllocationRequest, gems: &[Gem], role: Role) -> Allocation {
    #[cfg(feature = "console")]
    gemforge_console::init();

    let config = AllocatorConfig::load(CONFIG_FILE).unwrap_or_default();
    Optimizer::new(config).optimize(request, gems, role)
}
