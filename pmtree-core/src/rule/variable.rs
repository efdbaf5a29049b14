use super::Rule;
use crate::collection::{CollectionDocument, VariableEntry};
use crate::error::RewriteError;
use crate::report::RewriteReport;
use serde_json::Value;

fn is_key(entry: &Value, key: &str) -> bool {
    entry.get("key").and_then(Value::as_str) == Some(key)
}

/// Leaves exactly one root variable with the configured key.
pub struct UpsertVariableRule {
    entry: VariableEntry,
}

impl UpsertVariableRule {
    pub const NAME: &'static str = "upsert_variable";

    pub fn new(entry: VariableEntry) -> Self {
        Self { entry }
    }
}

impl Rule for UpsertVariableRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError> {
        let key = self.entry.key.as_str();
        let Some(variables) = document.variables_mut(true)? else {
            return Ok(());
        };

        let before = variables.len();
        variables.retain(|v| !is_key(v, key));
        let replaced = before - variables.len();
        variables.push(serde_json::json!({
            "key": self.entry.key,
            "value": self.entry.value,
            "type": self.entry.kind,
        }));

        let description = if replaced == 0 {
            format!("added variable '{key}'")
        } else {
            format!("replaced variable '{key}'")
        };
        report.change(Self::NAME, &CollectionDocument::variables_path(), description);
        Ok(())
    }
}

/// Removes every root variable with the configured key; absent keys are a no-op.
pub struct RemoveVariableRule {
    key: String,
}

impl RemoveVariableRule {
    pub const NAME: &'static str = "remove_variable";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Rule for RemoveVariableRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError> {
        let Some(variables) = document.variables_mut(false)? else {
            return Ok(());
        };

        let before = variables.len();
        variables.retain(|v| !is_key(v, &self.key));
        let removed = before - variables.len();
        if removed > 0 {
            report.change(
                Self::NAME,
                &CollectionDocument::variables_path(),
                format!("removed variable '{}'", self.key),
            );
        }
        Ok(())
    }
}
