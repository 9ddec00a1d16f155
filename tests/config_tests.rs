use std::env;

use leave_planner::config::Config;
use pretty_assertions::assert_eq;
use serial_test::serial;

mod common;

const KEYS: [&str; 3] = ["STORAGE_PATH", "DEFAULT_CAMPUS", "ENVIRONMENT"];

#[test]
#[serial]
fn test_config_from_env_with_defaults() {
    common::setup_test_env();

    // Store original values
    let original_values: Vec<_> = KEYS.iter().map(|k| (*k, env::var(k).ok())).collect();

    // Clear environment variables
    for (key, _) in &original_values {
        unsafe {
            env::remove_var(key);
        }
    }

    let config = Config::from_env_only().unwrap();

    assert_eq!(config.storage_path, "leave-planner.json");
    assert_eq!(config.default_campus, "Melbourne");
    assert_eq!(config.environment, "development");
    assert!(config.is_development());

    // Restore original values
    for (key, value) in original_values {
        if let Some(val) = value {
            unsafe {
                env::set_var(key, val);
            }
        }
    }
}

#[test]
#[serial]
fn test_config_from_env_with_custom_values() {
    common::setup_test_env();

    // Store original values
    let original_values: Vec<_> = KEYS.iter().map(|k| (*k, env::var(k).ok())).collect();

    // Set custom values
    unsafe {
        env::set_var("STORAGE_PATH", "/tmp/planner-test.json");
        env::set_var("DEFAULT_CAMPUS", "Sydney");
        env::set_var("ENVIRONMENT", "production");
    }

    let config = Config::from_env_only().unwrap();

    assert_eq!(config.storage_path, "/tmp/planner-test.json");
    assert_eq!(config.default_campus, "Sydney");
    assert_eq!(config.environment, "production");
    assert!(config.is_production());

    // Restore original values
    unsafe {
        for (key, value) in original_values {
            if let Some(val) = value {
                env::set_var(key, val);
            } else {
                env::remove_var(key);
            }
        }
    }
}

#[test]
fn test_config_environment_detection() {
    let production_config = Config {
        storage_path: "test.json".to_string(),
        default_campus: "Melbourne".to_string(),
        environment: "production".to_string(),
    };

    let development_config = Config {
        storage_path: "test.json".to_string(),
        default_campus: "Melbourne".to_string(),
        environment: "development".to_string(),
    };

    assert!(production_config.is_production());
    assert!(!production_config.is_development());
    assert!(development_config.is_development());
    assert!(!development_config.is_production());
}
