use super::Rule;
use crate::collection::{CollectionDocument, HeaderEntry, request_mut, walk_mut};
use crate::error::RewriteError;
use crate::report::RewriteReport;
use serde_json::Value;

/// Leaves exactly one header with the configured key on every request.
pub struct UpsertHeaderRule {
    entry: HeaderEntry,
}

impl UpsertHeaderRule {
    pub const NAME: &'static str = "upsert_header";

    pub fn new(entry: HeaderEntry) -> Self {
        Self { entry }
    }

    fn entry_value(&self) -> Value {
        serde_json::json!({
            "key": self.entry.key,
            "value": self.entry.value,
            "type": self.entry.kind,
        })
    }
}

impl Rule for UpsertHeaderRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError> {
        let key = self.entry.key.as_str();

        walk_mut(
            document.items_mut()?,
            &CollectionDocument::items_path(),
            &mut |fields, shape, path| {
                if !shape.has_request() {
                    return Ok(());
                }

                let request = request_mut(fields, path)?;
                let headers = request.entry("header").or_insert(Value::Null);
                if headers.is_null() {
                    *headers = Value::Array(Vec::new());
                }
                let headers = match headers {
                    Value::Array(headers) => headers,
                    other => {
                        return Err(RewriteError::shape(
                            &path.key("request").key("header"),
                            "array",
                            other,
                        ));
                    }
                };

                let before = headers.len();
                headers.retain(|h| h.get("key").and_then(Value::as_str) != Some(key));
                let replaced = before - headers.len();
                headers.push(self.entry_value());

                let description = if replaced == 0 {
                    format!("added header '{key}'")
                } else {
                    format!("replaced {replaced} '{key}' header(s)")
                };
                report.change(Self::NAME, path, description);
                Ok(())
            },
        )
    }
}
