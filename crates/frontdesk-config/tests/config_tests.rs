use frontdesk_config::{Config, ConfigError, ConfigManager};
use frontdesk_domain::{SessionContext, UserRole};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.api_endpoint.is_empty());
    assert_eq!(cfg.auth_token, None);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.session.role, UserRole::Staff);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("home")).expect("manager");

    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded, Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.api_endpoint = "https://hotel.example/graphql".to_string();
    cfg.auth_token = Some("secret".to_string());
    cfg.session = SessionContext::new(UserRole::Admin, vec!["hotel-1".into()]);

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.session.acting_hotel_id(), "hotel-1");
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "ui_color_enabled": true }"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.auth_token, None);
    assert_eq!(loaded.api_endpoint, Config::default_api_endpoint());
    assert!(loaded.ui_color_enabled);
    assert!(loaded.session.hotels.is_empty());
}

#[test]
fn session_only_file_loads() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "session": { "role": "ADMIN", "hotels": ["h1"] } }"#)
        .expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.session.role, UserRole::Admin);
    assert_eq!(loaded.session.acting_hotel_id(), "h1");
    assert_eq!(loaded.api_endpoint, Config::default_api_endpoint());
}

#[test]
fn malformed_file_reports_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().expect_err("invalid json");
    assert!(matches!(err, ConfigError::Serde(_)), "unexpected error: {err:?}");
}

#[test]
fn non_http_endpoint_is_invalid() {
    let mut cfg = Config::default();
    cfg.api_endpoint = "ftp://hotel.example".into();
    let err = cfg.validate().expect_err("must be http");
    assert!(err.to_string().contains("ftp://hotel.example"));
}
