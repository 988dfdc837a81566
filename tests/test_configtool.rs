use rpasuite::configtool::{ConfigFile, GenPolicy, reset_config};
use rpasuite::passgen::{PassGenError, PasswordOptions, generate_password};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_missing_config_returns_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = ConfigFile::load(dir.path()).expect("Failed to load config");

    assert_eq!(config.policy, GenPolicy::default());
    assert_eq!(config.policy.length, 16);
    assert!(config.policy.include_uppercase);
    assert!(config.policy.include_lowercase);
    assert!(config.policy.include_numbers);
    assert!(config.policy.include_special);
    assert!(!config.policy.url_safe);
    assert!(!config.policy.avoid_confusion);
    assert_eq!(config.policy.clip_clear_secs, 30);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().expect("Failed to create temp directory");

    let mut config = ConfigFile::new();
    config.policy.length = 24;
    config.policy.include_special = false;
    config.policy.avoid_confusion = true;
    config.policy.clip_clear_secs = 60;
    config.touch();
    config.save(dir.path()).expect("Failed to save config");

    // 确认写出的是config.json
    assert!(dir.path().join("config.json").exists());

    let loaded = ConfigFile::load(dir.path()).expect("Failed to load config");
    assert_eq!(loaded.policy, config.policy);
    assert_eq!(loaded.created_at, config.created_at);
    assert_eq!(loaded.last_modified, config.last_modified);
}

#[test]
fn test_reset_config_restores_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");

    let mut config = ConfigFile::new();
    config.policy.length = 99;
    config.policy.include_numbers = false;
    config.save(dir.path()).expect("Failed to save config");

    let reset = reset_config(dir.path()).expect("Failed to reset config");
    assert_eq!(reset.policy, GenPolicy::default());

    let loaded = ConfigFile::load(dir.path()).expect("Failed to load config");
    assert_eq!(loaded.policy, GenPolicy::default());
}

#[test]
fn test_load_invalid_json_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    fs::write(dir.path().join("config.json"), "not json at all").unwrap();

    let result = ConfigFile::load(dir.path());
    assert!(result.is_err());
}

#[test]
fn test_policy_length_below_enabled_sets_fails_gen() {
    // 保存的长度小于启用的字符集数时，生成必然失败
    let policy = GenPolicy {
        length: 2,
        include_special: false,
        ..GenPolicy::default()
    };
    let options = PasswordOptions::from(&policy);
    assert_eq!(options.enabled_sets(), 3);
    assert_eq!(
        generate_password(&options),
        Err(PassGenError::LengthTooShort { min_length: 3 })
    );
}

#[test]
fn test_policy_to_password_options() {
    let policy = GenPolicy {
        length: 20,
        include_uppercase: false,
        include_lowercase: true,
        include_numbers: true,
        include_special: false,
        url_safe: true,
        avoid_confusion: true,
        clip_clear_secs: 15,
    };
    let options = PasswordOptions::from(&policy);

    assert_eq!(options.length, 20);
    assert!(!options.include_uppercase);
    assert!(options.include_lowercase);
    assert!(options.include_numbers);
    assert!(!options.include_special);
    assert!(options.url_safe);
    assert!(options.avoid_confusion);
}
