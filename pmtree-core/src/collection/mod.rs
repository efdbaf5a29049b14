//! Collection document model.
//!
//! Documents stay as `serde_json` values so fields the rewriter does not know
//! about (`info`, `auth`, `event`, ...) survive untouched and in their original
//! key order. Node shape is checked once per node through [`classify`].

mod document;
mod node;
mod path;
mod stats;
mod types;

pub use document::*;
pub use node::*;
pub use path::*;
pub use stats::*;
pub use types::*;

use serde_json::Value;

/// Short name of a JSON value's kind, used in shape diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
