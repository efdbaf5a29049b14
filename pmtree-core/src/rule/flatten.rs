use super::Rule;
use crate::collection::{CollectionDocument, NodeShape, classify, json_kind};
use crate::error::RewriteError;
use crate::report::RewriteReport;
use serde_json::Value;
use tracing::debug;

/// Replaces each top-level folder's children with its first child's children.
///
/// Lossy: every sibling after the first child is discarded. Only the root's
/// immediate children are touched; mixed nodes pass through unchanged.
pub struct FlattenOneLevelRule;

impl FlattenOneLevelRule {
    pub const NAME: &'static str = "flatten_one_level";
}

impl Rule for FlattenOneLevelRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError> {
        let items_path = CollectionDocument::items_path();

        for (index, node) in document.items_mut()?.iter_mut().enumerate() {
            let path = items_path.index(index);
            if classify(node, &path)? != NodeShape::Folder {
                continue;
            }

            let Some(Value::Array(children)) = node.get_mut("item") else {
                continue;
            };
            if children.is_empty() {
                continue;
            }

            let discarded = children.len() - 1;
            let first_path = path.key("item").index(0);
            let first = std::mem::take(children).into_iter().next();

            let grandchildren = match first {
                Some(Value::Object(mut first)) => match first.remove("item") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(grandchildren)) => grandchildren,
                    Some(other) => {
                        return Err(RewriteError::ShapeViolation {
                            path: first_path.key("item"),
                            expected: "array",
                            actual: json_kind(&other),
                        });
                    }
                },
                Some(other) => return Err(RewriteError::shape(&first_path, "object", &other)),
                None => Vec::new(),
            };

            debug!(path = %path, kept = grandchildren.len(), discarded, "flattened folder");
            report.change(
                Self::NAME,
                &path,
                format!(
                    "lifted {} node(s) from first child, discarded {} sibling(s)",
                    grandchildren.len(),
                    discarded
                ),
            );
            *children = grandchildren;
        }

        Ok(())
    }
}
