//! Tests for loading validator configuration from disk
use std::fs;

use change_validators::config::{Config, PROJECT_CONFIG_FILE, USER_CONFIG_DIR, USER_CONFIG_FILE};

#[test]
fn test_from_file_records_source() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("validators.toml");
    fs::write(
        &path,
        "adapter = \"zendesk\"\ndisabled_validators = [\"default_support_address\"]\n",
    )
    .expect("write config");

    let config = Config::from_file(&path).expect("load config");
    assert_eq!(config.adapter, "zendesk");
    assert!(config.is_disabled("default_support_address"));
    assert_eq!(config.source.as_deref(), Some(path.as_path()));
}

#[test]
fn test_from_file_missing_is_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_from_file_invalid_reports_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "disabled_validators = 3").expect("write config");

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_discover_prefers_project_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "adapter = \"project\"\n",
    )
    .expect("write config");

    let config = Config::discover(dir.path()).expect("discover config");
    assert_eq!(config.adapter, "project");
    assert_eq!(
        config.source,
        Some(dir.path().join(PROJECT_CONFIG_FILE))
    );
}

#[test]
fn test_discover_falls_back_to_user_config_dir() {
    let project = tempfile::tempdir().expect("create project dir");
    let user = tempfile::tempdir().expect("create user config dir");
    let user_file = user.path().join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
    fs::create_dir_all(user_file.parent().expect("config parent")).expect("create dirs");
    fs::write(&user_file, "adapter = \"user\"\n").expect("write config");

    let config = Config::discover_in(project.path(), Some(user.path())).expect("discover config");
    assert_eq!(config.adapter, "user");
    assert_eq!(config.source, Some(user_file));

    // The project file still wins once it exists
    fs::write(project.path().join(PROJECT_CONFIG_FILE), "adapter = \"project\"\n")
        .expect("write config");
    let config = Config::discover_in(project.path(), Some(user.path())).expect("discover config");
    assert_eq!(config.adapter, "project");
}

#[test]
fn test_discover_without_files_uses_defaults() {
    let project = tempfile::tempdir().expect("create project dir");
    let user = tempfile::tempdir().expect("create user config dir");

    let config = Config::discover_in(project.path(), Some(user.path())).expect("discover config");
    assert_eq!(config, Config::default());
    assert!(config.source.is_none());

    let config = Config::discover_in(project.path(), None).expect("discover config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_invalid_project_file_reports_path() {
    let project = tempfile::tempdir().expect("create project dir");
    fs::write(project.path().join(PROJECT_CONFIG_FILE), "adapter = [").expect("write config");

    let err = Config::discover_in(project.path(), None).unwrap_err();
    assert!(err.to_string().contains(PROJECT_CONFIG_FILE));
}
