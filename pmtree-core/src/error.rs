use crate::collection::NodePath;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    //-------------------------------------------------------------------------
    // Input
    //-------------------------------------------------------------------------
    #[error("malformed collection document: {reason}")]
    MalformedDocument { reason: String },

    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },

    //-------------------------------------------------------------------------
    // Tree shape
    //-------------------------------------------------------------------------
    #[error("shape violation at {path}: expected {expected}, found {actual}")]
    ShapeViolation {
        path: NodePath,
        expected: &'static str,
        actual: &'static str,
    },

    //-------------------------------------------------------------------------
    // Rules
    //-------------------------------------------------------------------------
    #[error("invalid rule '{rule}': {reason}")]
    InvalidRule { rule: &'static str, reason: String },

    #[error("failed to serialize collection: {reason}")]
    Serialize { reason: String },
}

impl RewriteError {
    pub fn shape(path: &NodePath, expected: &'static str, actual: &serde_json::Value) -> Self {
        Self::ShapeViolation {
            path: path.clone(),
            expected,
            actual: crate::collection::json_kind(actual),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }
}
