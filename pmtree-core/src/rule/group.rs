use super::Rule;
use crate::collection::{CollectionDocument, NodePath, classify, node_name, walk};
use crate::error::RewriteError;
use crate::report::RewriteReport;
use serde_json::Value;
use tracing::{debug, warn};

/// Re-buckets request leaves by the name of their top-level folder.
///
/// With `depth = 2` the expected layout is `class folder → method folder →
/// request`: every request sitting directly under a depth-2 folder is moved
/// into a new top-level group named after its depth-1 ancestor. Groups appear
/// in first-seen order. Requests anywhere else are dropped and counted.
pub struct GroupLeavesByAncestorRule {
    depth: usize,
}

#[derive(Default)]
struct Grouping {
    groups: Vec<(String, Vec<Value>)>,
    dropped: usize,
}

impl Grouping {
    fn push(&mut self, key: &str, leaf: Value) {
        match self.groups.iter_mut().find(|(name, _)| name == key) {
            Some((_, leaves)) => leaves.push(leaf),
            None => self.groups.push((key.to_string(), vec![leaf])),
        }
    }

    fn grouped(&self) -> usize {
        self.groups.iter().map(|(_, leaves)| leaves.len()).sum()
    }
}

impl GroupLeavesByAncestorRule {
    pub const NAME: &'static str = "group_leaves_by_ancestor";

    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    fn collect(
        &self,
        node: &Value,
        path: &NodePath,
        level: usize,
        key: &str,
        acc: &mut Grouping,
    ) -> Result<(), RewriteError> {
        let shape = classify(node, path)?;

        if level > self.depth {
            if shape.has_request() {
                acc.push(key, node.clone());
            } else if let Some(Value::Array(children)) = node.get("item") {
                acc.dropped += count_requests(children, &path.key("item"))?;
            }
            return Ok(());
        }

        if shape.has_request() {
            acc.dropped += 1;
        }

        if let Some(Value::Array(children)) = node.get("item") {
            let children_path = path.key("item");
            for (index, child) in children.iter().enumerate() {
                self.collect(child, &children_path.index(index), level + 1, key, acc)?;
            }
        }
        Ok(())
    }
}

fn count_requests(items: &[Value], parent: &NodePath) -> Result<usize, RewriteError> {
    let mut count = 0;
    walk(items, parent, &mut |_, shape, _| {
        if shape.has_request() {
            count += 1;
        }
    })?;
    Ok(count)
}

impl Rule for GroupLeavesByAncestorRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError> {
        let items_path = CollectionDocument::items_path();
        let mut acc = Grouping::default();

        for (index, node) in document.items().iter().enumerate() {
            let path = items_path.index(index);
            classify(node, &path)?;

            let key = match node.as_object().and_then(node_name) {
                Some(name) => name,
                None => {
                    report.warning("top-level node has no name, grouping under \"\"", Some(&path));
                    ""
                }
            };
            self.collect(node, &path, 1, key, &mut acc)?;
        }

        if acc.dropped > 0 {
            warn!(
                dropped = acc.dropped,
                depth = self.depth,
                "requests outside the grouping depth were dropped"
            );
            report.warning(
                format!(
                    "dropped {} request(s) not found at depth {}",
                    acc.dropped, self.depth
                ),
                None,
            );
        }

        debug!(
            groups = acc.groups.len(),
            grouped = acc.grouped(),
            "grouped requests by top-level folder"
        );

        let mut grouped = Vec::with_capacity(acc.groups.len());
        for (index, (name, leaves)) in acc.groups.into_iter().enumerate() {
            report.change(
                Self::NAME,
                &items_path.index(index),
                format!("group '{}' with {} request(s)", name, leaves.len()),
            );
            grouped.push(serde_json::json!({
                "name": name,
                "item": leaves,
            }));
        }

        document.replace_items(grouped);
        Ok(())
    }
}
