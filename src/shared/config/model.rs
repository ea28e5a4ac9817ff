use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub schema: TsKvSchema,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

/// Table and column names of the time-series store. Handed to whatever layer
/// maps rows to storage instead of living in global constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TsKvSchema {
    pub table: String,
    pub entity_type_column: String,
    pub entity_id_column: String,
    pub key_column: String,
    pub ts_column: String,
    pub bool_column: String,
    pub str_column: String,
    pub long_column: String,
    pub dbl_column: String,
}

impl Default for TsKvSchema {
    fn default() -> Self {
        Self {
            table: "ts_kv".to_string(),
            entity_type_column: "entity_type".to_string(),
            entity_id_column: "entity_id".to_string(),
            key_column: "key".to_string(),
            ts_column: "ts".to_string(),
            bool_column: "bool_v".to_string(),
            str_column: "str_v".to_string(),
            long_column: "long_v".to_string(),
            dbl_column: "dbl_v".to_string(),
        }
    }
}

impl TsKvSchema {
    /// Columns forming the natural key, in key order.
    pub fn key_columns(&self) -> [&str; 4] {
        [
            self.entity_type_column.as_str(),
            self.entity_id_column.as_str(),
            self.key_column.as_str(),
            self.ts_column.as_str(),
        ]
    }

    /// Value columns in resolution precedence order.
    pub fn value_columns(&self) -> [&str; 4] {
        [
            self.str_column.as_str(),
            self.long_column.as_str(),
            self.dbl_column.as_str(),
            self.bool_column.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Batches with at least this many rows are reduced on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024,
        }
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("TSKV_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
