use crate::conf::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SERVICE_VARIABLE_PREFIX: &str = "ms_";
pub const BASE_URL_KEY: &str = "baseURL";

/// A Postman environment export: `{ "values": [{ "key": ..., "value": ... }] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub values: Vec<EnvironmentValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl EnvironmentConfig {
    /// Entries Postman would resolve; disabled ones are ignored.
    pub fn enabled_values(&self) -> impl Iterator<Item = &EnvironmentValue> {
        self.values.iter().filter(|v| v.enabled)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.enabled_values()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Enabled entries following the `ms_<service>` naming convention.
    pub fn service_variables(&self) -> impl Iterator<Item = &EnvironmentValue> {
        self.enabled_values()
            .filter(|v| v.key.starts_with(SERVICE_VARIABLE_PREFIX))
    }

    pub fn base_url(&self) -> Option<&str> {
        self.get(BASE_URL_KEY)
    }
}

pub fn parse_environment(raw: &str, path: &Path) -> Result<EnvironmentConfig, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::ParseEnvironment {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn load_environment(path: &Path) -> Result<EnvironmentConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_environment(&raw, path)
}
