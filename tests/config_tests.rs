use std::env;

use buildtogether::config::Config;
use pretty_assertions::assert_eq;
use serial_test::serial;

mod common;

const KEYS: [&str; 9] = [
    "DATABASE_URL",
    "JWT_SECRET",
    "JWT_EXPIRATION_DAYS",
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "CORS_ORIGIN",
    "DEFAULT_MAX_TEAM_SIZE",
    "PASSWORD_HASH_COST",
];

// Runs `f` with the given variables set and every other config key cleared,
// then restores the process environment.
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let original: Vec<(&str, Option<String>)> =
        KEYS.iter().map(|key| (*key, env::var(key).ok())).collect();

    unsafe {
        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
    }

    f();

    unsafe {
        for (key, value) in original {
            match value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }
}

fn config_for(environment: &str) -> Config {
    Config {
        database_url: "test".to_string(),
        jwt_secret: "test".to_string(),
        jwt_expiration_days: 1,
        host: "192.168.1.1".to_string(),
        port: 9000,
        environment: environment.to_string(),
        cors_origin: "http://localhost:3000".to_string(),
        default_max_team_size: 5,
        password_hash_cost: 4,
    }
}

#[test]
#[serial]
fn test_config_from_env_with_defaults() {
    common::setup_test_env();

    with_env(&[], || {
        let config = Config::from_env_only().unwrap();

        assert_eq!(config.database_url, "sqlite:buildtogether.db");
        assert_eq!(
            config.jwt_secret,
            "your-super-secret-jwt-key-change-this-in-production-12345"
        );
        assert_eq!(config.jwt_expiration_days, 30);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.default_max_team_size, 5);
        assert_eq!(config.password_hash_cost, bcrypt::DEFAULT_COST);
    });
}

#[test]
#[serial]
fn test_config_from_env_with_custom_values() {
    with_env(
        &[
            ("DATABASE_URL", "sqlite:./test.db"),
            ("JWT_SECRET", "test-secret"),
            ("JWT_EXPIRATION_DAYS", "7"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("ENVIRONMENT", "production"),
            ("CORS_ORIGIN", "https://hack.example.com"),
            ("DEFAULT_MAX_TEAM_SIZE", "8"),
            ("PASSWORD_HASH_COST", "6"),
        ],
        || {
            let config = Config::from_env_only().unwrap();

            assert_eq!(config.database_url, "sqlite:./test.db");
            assert_eq!(config.jwt_secret, "test-secret");
            assert_eq!(config.jwt_expiration_days, 7);
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 3000);
            assert_eq!(config.environment, "production");
            assert_eq!(config.cors_origin, "https://hack.example.com");
            assert_eq!(config.default_max_team_size, 8);
            assert_eq!(config.password_hash_cost, 6);
        },
    );
}

#[test]
#[serial]
fn test_config_invalid_numbers_fall_back() {
    with_env(
        &[
            ("PORT", "invalid_port"),
            ("JWT_EXPIRATION_DAYS", "invalid_number"),
            ("DEFAULT_MAX_TEAM_SIZE", "lots"),
        ],
        || {
            let config = Config::from_env_only().unwrap();

            assert_eq!(config.port, 8080);
            assert_eq!(config.jwt_expiration_days, 30);
            assert_eq!(config.default_max_team_size, 5);
        },
    );
}

#[test]
fn test_config_environment_detection() {
    let production_config = config_for("production");
    let development_config = config_for("development");

    assert!(production_config.is_production());
    assert!(!production_config.is_development());

    assert!(!development_config.is_production());
    assert!(development_config.is_development());
}

#[test]
fn test_server_address_formatting() {
    assert_eq!(config_for("test").server_address(), "192.168.1.1:9000");
}
