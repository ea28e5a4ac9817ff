use std::io::Write;

use crate::shared::config::{QueryConfig, Settings, TsKvSchema, load_settings_from};

fn write_config(contents: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tskv.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

#[test]
fn defaults_describe_ts_kv_table() {
    let schema = TsKvSchema::default();
    assert_eq!(schema.table, "ts_kv");
    assert_eq!(schema.key_columns(), ["entity_type", "entity_id", "key", "ts"]);
    assert_eq!(schema.value_columns(), ["str_v", "long_v", "dbl_v", "bool_v"]);
    assert_eq!(QueryConfig::default().parallel_threshold, 1024);
}

#[test]
fn load_settings_from_toml_overrides_selected_fields() {
    let (_dir, path) = write_config(
        r#"
[logging]
stdout_level = "warn"

[schema]
table = "ts_kv_2018"
dbl_column = "double_v"

[query]
parallel_threshold = 64
"#,
    );
    let settings: Settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.logging.stdout_level, "warn");
    assert_eq!(settings.logging.file_level, "debug");
    assert_eq!(settings.schema.table, "ts_kv_2018");
    assert_eq!(settings.schema.dbl_column, "double_v");
    assert_eq!(settings.schema.str_column, "str_v");
    assert_eq!(settings.query.parallel_threshold, 64);
}

#[test]
fn load_settings_from_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.schema, TsKvSchema::default());
    assert_eq!(settings.logging.log_dir, "logs");
}

#[test]
fn load_settings_from_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(load_settings_from(&path.to_string_lossy()).is_err());
}
