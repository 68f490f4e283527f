//! Configuration system for GemForge.
//!
//! Load allocator configuration from TOML or YAML files to tune candidate
//! truncation, the theoretical craft catalog and category parallelism
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use gemforge_config::AllocatorConfig;
//!
//! let config = AllocatorConfig::from_toml_str(r#"
//!     combination_limit = 200
//!     parallel_categories = true
//!
//!     [craft]
//!     min_willpower = 4
//!     core_points = [4, 5]
//! "#).unwrap();
//!
//! assert_eq!(config.combination_limit, 200);
//! assert_eq!(config.craft.min_willpower, 4);
//! assert_eq!(config.craft.max_willpower, 9);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use gemforge_config::AllocatorConfig;
//!
//! let config = AllocatorConfig::load("gemforge.toml").unwrap_or_default();
//! ```

use std::path::Path;

use gemforge_core::{MAX_CORE_POINT, MAX_WILLPOWER, MIN_CORE_POINT, MIN_WILLPOWER};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of ranked candidates kept per slot.
pub const DEFAULT_COMBINATION_LIMIT: usize = 120;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main allocator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AllocatorConfig {
    /// Ranked candidates kept per slot before the joint assignment search.
    pub combination_limit: usize,

    /// Solve the two categories on separate rayon tasks.
    pub parallel_categories: bool,

    /// Theoretical gem catalog for craft planning.
    pub craft: CraftConfig,

    /// Boundary validation settings.
    pub validation: ValidationConfig,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            combination_limit: DEFAULT_COMBINATION_LIMIT,
            parallel_categories: false,
            craft: CraftConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl AllocatorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// describes an unusable catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the per-slot candidate limit.
    pub fn with_combination_limit(mut self, limit: usize) -> Self {
        self.combination_limit = limit;
        self
    }

    /// Enables or disables parallel category solving.
    pub fn with_parallel_categories(mut self, enabled: bool) -> Self {
        self.parallel_categories = enabled;
        self
    }

    /// Replaces the craft catalog configuration.
    pub fn with_craft(mut self, craft: CraftConfig) -> Self {
        self.craft = craft;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.combination_limit == 0 {
            return Err(ConfigError::Invalid(
                "combination_limit must be at least 1".to_string(),
            ));
        }
        self.craft.validate()
    }
}

/// Theoretical gem catalog configuration.
///
/// The catalog holds every (core point, willpower) pair with the core point
/// in `core_points` and willpower in `min_willpower..=max_willpower`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CraftConfig {
    /// Lowest willpower a crafted gem can be processed down to.
    pub min_willpower: u32,

    /// Highest willpower a crafted gem may cost.
    pub max_willpower: u32,

    /// Core-point values worth crafting.
    pub core_points: Vec<u32>,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            min_willpower: MIN_WILLPOWER,
            max_willpower: MAX_WILLPOWER,
            core_points: vec![3, 4, 5],
        }
    }
}

impl CraftConfig {
    /// Checks the catalog bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_willpower == 0 || self.min_willpower > self.max_willpower {
            return Err(ConfigError::Invalid(format!(
                "craft willpower range {}..={} is empty",
                self.min_willpower, self.max_willpower
            )));
        }
        if self.core_points.is_empty() {
            return Err(ConfigError::Invalid(
                "craft core_points must not be empty".to_string(),
            ));
        }
        if let Some(point) = self
            .core_points
            .iter()
            .find(|p| !(MIN_CORE_POINT..=MAX_CORE_POINT).contains(*p))
        {
            return Err(ConfigError::Invalid(format!(
                "craft core point {point} outside {MIN_CORE_POINT}..={MAX_CORE_POINT}"
            )));
        }
        Ok(())
    }
}

/// Boundary validation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ValidationConfig {
    /// Reject malformed requests before solving instead of scoring them leniently.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

#[cfg(test)]
mod tests;
