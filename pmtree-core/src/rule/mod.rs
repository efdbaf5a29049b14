//! Rewrite rules and the pipeline that runs them.

mod flatten;
mod group;
mod header;
mod pipeline;
#[cfg(test)]
mod tests;
mod url;
mod variable;

pub use flatten::FlattenOneLevelRule;
pub use group::GroupLeavesByAncestorRule;
pub use header::UpsertHeaderRule;
pub use pipeline::RulePipeline;
pub use url::RewriteUrlTokenRule;
pub use variable::{RemoveVariableRule, UpsertVariableRule};

use crate::collection::{
    CollectionDocument, HeaderEntry, VariableEntry, default_header_type, default_variable_type,
};
use crate::error::RewriteError;
use crate::report::RewriteReport;
use serde::{Deserialize, Serialize};

/// A single tree transformation.
///
/// Rules mutate the document they are handed; callers that need value
/// semantics go through [`crate::rewriter::apply_rule`], which consumes the
/// input document and only returns it on success.
pub trait Rule: Send + Sync {
    /// Rule name as used in recipes and change records.
    fn name(&self) -> &'static str;

    fn apply(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError>;
}

/// Rule configuration, as written in recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RewriteRule {
    /// Leave exactly one header with `key` on every request.
    UpsertHeader {
        key: String,
        value: String,
        #[serde(rename = "type", default = "default_header_type")]
        kind: String,
    },
    /// Replace each top-level folder's children with its first child's children.
    FlattenOneLevel,
    /// Re-bucket requests found `depth` folder levels down by their top-level folder.
    GroupLeavesByAncestor {
        #[serde(default = "default_group_depth")]
        depth: usize,
    },
    /// Substitute a token in `url.raw` (substring) and `url.host` (whole entry).
    RewriteUrlToken {
        from_token: String,
        to_template: String,
    },
    UpsertVariable {
        key: String,
        value: String,
        #[serde(rename = "type", default = "default_variable_type")]
        kind: String,
    },
    RemoveVariable { key: String },
}

pub const DEFAULT_GROUP_DEPTH: usize = 2;

fn default_group_depth() -> usize {
    DEFAULT_GROUP_DEPTH
}

impl RewriteRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpsertHeader { .. } => UpsertHeaderRule::NAME,
            Self::FlattenOneLevel => FlattenOneLevelRule::NAME,
            Self::GroupLeavesByAncestor { .. } => GroupLeavesByAncestorRule::NAME,
            Self::RewriteUrlToken { .. } => RewriteUrlTokenRule::NAME,
            Self::UpsertVariable { .. } => UpsertVariableRule::NAME,
            Self::RemoveVariable { .. } => RemoveVariableRule::NAME,
        }
    }

    pub fn upsert_header(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UpsertHeader {
            key: key.into(),
            value: value.into(),
            kind: default_header_type(),
        }
    }

    pub fn upsert_variable(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UpsertVariable {
            key: key.into(),
            value: value.into(),
            kind: default_variable_type(),
        }
    }

    pub fn remove_variable(key: impl Into<String>) -> Self {
        Self::RemoveVariable { key: key.into() }
    }

    pub fn rewrite_url_token(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::RewriteUrlToken {
            from_token: from.into(),
            to_template: to.into(),
        }
    }

    /// Rejects configurations no rule could apply meaningfully.
    pub fn validate(&self) -> Result<(), RewriteError> {
        let invalid = |reason: &str| RewriteError::InvalidRule {
            rule: self.name(),
            reason: reason.to_string(),
        };

        match self {
            Self::UpsertHeader { key, .. } if key.is_empty() => Err(invalid("header key is empty")),
            Self::GroupLeavesByAncestor { depth: 0 } => Err(invalid("depth must be at least 1")),
            Self::RewriteUrlToken { from_token, .. } if from_token.is_empty() => {
                Err(invalid("from_token is empty"))
            }
            Self::UpsertVariable { key, .. } | Self::RemoveVariable { key } if key.is_empty() => {
                Err(invalid("variable key is empty"))
            }
            _ => Ok(()),
        }
    }

    /// Validates and builds the runnable rule.
    pub fn build(&self) -> Result<Box<dyn Rule>, RewriteError> {
        self.validate()?;

        Ok(match self {
            Self::UpsertHeader { key, value, kind } => Box::new(UpsertHeaderRule::new(HeaderEntry {
                key: key.clone(),
                value: value.clone(),
                kind: kind.clone(),
            })),
            Self::FlattenOneLevel => Box::new(FlattenOneLevelRule),
            Self::GroupLeavesByAncestor { depth } => {
                Box::new(GroupLeavesByAncestorRule::new(*depth))
            }
            Self::RewriteUrlToken {
                from_token,
                to_template,
            } => Box::new(RewriteUrlTokenRule::new(from_token, to_template)),
            Self::UpsertVariable { key, value, kind } => {
                Box::new(UpsertVariableRule::new(VariableEntry {
                    key: key.clone(),
                    value: value.clone(),
                    kind: kind.clone(),
                }))
            }
            Self::RemoveVariable { key } => Box::new(RemoveVariableRule::new(key)),
        })
    }
}
