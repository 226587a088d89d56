use campo::config::Config;
use campo::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_panel, "misioneros");
    assert_eq!(config.api.token_env, "CAMPO_API_TOKEN");
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(config.display.show_descriptions);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid panel name
    config.ui.sidebar_width = 35;
    config.ui.default_panel = "resumen".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid timeout
    config.ui.default_panel = "informes".to_string();
    config.api.timeout_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_panel = \"misioneros\""));
    assert!(toml_str.contains("timeout_seconds = 30"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
base_url = "https://consola.example.org"

[ui]
sidebar_width = 35
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.api.base_url, "https://consola.example.org");
    assert_eq!(config.ui.sidebar_width, 35);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.default_panel, "misioneros");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
    assert!(config.display.show_descriptions);
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_panel, default_config.ui.default_panel);
    assert_eq!(config.api.timeout_seconds, default_config.api.timeout_seconds);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join(format!("campo_test_config_{}", std::process::id()));
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(temp_dir.exists());

    // The generated file parses back into a valid config
    let loaded = Config::load_from_file(&config_path);
    assert!(loaded.is_ok());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_effective_base_url_empty_by_default() {
    let config = Config::default();
    if std::env::var("CAMPO_API_URL").is_err() {
        assert!(config.effective_base_url().is_none());
    }
}
