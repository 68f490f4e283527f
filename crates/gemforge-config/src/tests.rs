//! Tests for allocator configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        combination_limit = 64
        parallel_categories = true

        [craft]
        min_willpower = 4
        max_willpower = 8
        core_points = [4, 5]

        [validation]
        strict = false
    "#;

    let config = AllocatorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.combination_limit, 64);
    assert!(config.parallel_categories);
    assert_eq!(config.craft.min_willpower, 4);
    assert_eq!(config.craft.max_willpower, 8);
    assert_eq!(config.craft.core_points, vec![4, 5]);
    assert!(!config.validation.strict);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        combination_limit: 32
        craft:
          core_points: [5]
    "#;

    let config = AllocatorConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.combination_limit, 32);
    assert_eq!(config.craft.core_points, vec![5]);
    assert_eq!(config.craft.min_willpower, 3);
    assert!(config.validation.strict);
}

#[test]
fn test_empty_toml_is_default() {
    let config = AllocatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, AllocatorConfig::default());
    assert_eq!(config.combination_limit, DEFAULT_COMBINATION_LIMIT);
    assert!(!config.parallel_categories);
}

#[test]
fn test_builder() {
    let config = AllocatorConfig::new()
        .with_combination_limit(10)
        .with_parallel_categories(true)
        .with_craft(CraftConfig {
            core_points: vec![5],
            ..CraftConfig::default()
        });

    assert_eq!(config.combination_limit, 10);
    assert!(config.parallel_categories);
    assert_eq!(config.craft.core_points, vec![5]);
}

#[test]
fn test_validation_rejects_bad_values() {
    assert!(matches!(
        AllocatorConfig::new().with_combination_limit(0).validate(),
        Err(ConfigError::Invalid(_))
    ));

    let inverted = CraftConfig {
        min_willpower: 8,
        max_willpower: 4,
        ..CraftConfig::default()
    };
    assert!(inverted.validate().is_err());

    let off_range = CraftConfig {
        core_points: vec![3, 6],
        ..CraftConfig::default()
    };
    assert!(off_range.validate().is_err());

    let empty = CraftConfig {
        core_points: Vec::new(),
        ..CraftConfig::default()
    };
    assert!(empty.validate().is_err());
}

#[test]
fn test_load_missing_file() {
    let result = AllocatorConfig::load("does/not/exist/gemforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
