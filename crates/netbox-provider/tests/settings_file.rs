use std::fs;

use netbox_provider::config::loader::{load_settings, load_settings_from_path};
use netbox_provider::{CustomFields, ProviderError};

#[test]
fn settings_file_parsing_and_validation() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("netbox-provider.toml");

    let toml_content = r#"
[custom_fields]
attribute_key = "cf"
query_prefix = "field_"

[logging]
level = "debug"
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid settings parse
    let settings = load_settings_from_path(&path).expect("should parse settings");
    assert_eq!(settings.custom_fields.attribute_key, "cf");
    assert_eq!(settings.custom_fields.query_prefix, "field_");
    assert_eq!(settings.logging.level, "debug");

    let fields = CustomFields::from_settings(&settings.custom_fields);
    assert_eq!(fields.attribute_key(), "cf");
    assert_eq!(fields.query_prefix(), "field_");

    // 2) Missing sections fall back to defaults
    let partial_path = dir.path().join("partial.toml");
    fs::write(&partial_path, "[logging]\nlevel = \"warn\"\n").expect("write partial toml");
    let settings = load_settings_from_path(&partial_path).expect("should parse partial settings");
    assert_eq!(settings.custom_fields.attribute_key, "custom_fields");
    assert_eq!(settings.custom_fields.query_prefix, "cf_");

    // 3) Invalid prefix is rejected
    let invalid_path = dir.path().join("invalid.toml");
    fs::write(&invalid_path, "[custom_fields]\nquery_prefix = \"\"\n").expect("write invalid toml");
    let err = load_settings_from_path(&invalid_path).expect_err("expected validation error");
    assert!(matches!(err, ProviderError::Config(ref msg) if msg.contains("query_prefix")));
}

#[test]
fn missing_settings_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let missing = dir.path().join("absent.toml");

    let settings = load_settings(missing.to_str()).expect("defaults");
    assert_eq!(settings.logging.level, "info");
}
