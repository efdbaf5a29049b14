use serde::{Deserialize, Serialize};

/// A request header entry (`request.header[]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
    #[serde(rename = "type", default = "default_header_type")]
    pub kind: String,
}

/// A collection variable entry (root `variable[]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableEntry {
    pub key: String,
    pub value: String,
    #[serde(rename = "type", default = "default_variable_type")]
    pub kind: String,
}

pub(crate) fn default_header_type() -> String {
    "text".to_string()
}

pub(crate) fn default_variable_type() -> String {
    "string".to_string()
}
