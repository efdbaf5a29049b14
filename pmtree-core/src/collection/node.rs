use crate::collection::NodePath;
use crate::error::RewriteError;
use serde_json::{Map, Value};

/// Shape of a collection node, decided once when traversal reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Has an `item` sequence and no `request`.
    Folder,
    /// Has a `request` and no `item` sequence.
    Request,
    /// Has both. Tree-shape rules pass these through unchanged.
    Mixed,
    /// Has neither.
    Leaf,
}

impl NodeShape {
    pub fn has_request(self) -> bool {
        matches!(self, Self::Request | Self::Mixed)
    }

    pub fn has_children(self) -> bool {
        matches!(self, Self::Folder | Self::Mixed)
    }
}

/// Classifies a node, rejecting shapes no rule can work with.
///
/// # Errors
///
/// Returns `RewriteError::ShapeViolation` when the node is not an object, when
/// `item` is present but not an array, or when `request` is present but not an
/// object.
pub fn classify(node: &Value, path: &NodePath) -> Result<NodeShape, RewriteError> {
    let Value::Object(fields) = node else {
        return Err(RewriteError::shape(path, "object", node));
    };

    let children = match fields.get("item") {
        None => false,
        Some(Value::Array(_)) => true,
        Some(other) => return Err(RewriteError::shape(&path.key("item"), "array", other)),
    };

    let request = match fields.get("request") {
        None => false,
        Some(Value::Object(_)) => true,
        Some(other) => return Err(RewriteError::shape(&path.key("request"), "object", other)),
    };

    Ok(match (children, request) {
        (true, false) => NodeShape::Folder,
        (false, true) => NodeShape::Request,
        (true, true) => NodeShape::Mixed,
        (false, false) => NodeShape::Leaf,
    })
}

/// Visits every node below `items` in document order (pre-order).
///
/// The visitor sees a node before its children; children are always descended
/// into, whether or not the node carries a request.
pub fn walk_mut<F>(
    items: &mut [Value],
    parent: &NodePath,
    visit: &mut F,
) -> Result<(), RewriteError>
where
    F: FnMut(&mut Map<String, Value>, NodeShape, &NodePath) -> Result<(), RewriteError>,
{
    for (index, node) in items.iter_mut().enumerate() {
        let path = parent.index(index);
        let shape = classify(node, &path)?;
        let Value::Object(fields) = node else {
            continue;
        };

        visit(fields, shape, &path)?;

        if let Some(Value::Array(children)) = fields.get_mut("item") {
            walk_mut(children, &path.key("item"), visit)?;
        }
    }
    Ok(())
}

/// Read-only counterpart of [`walk_mut`].
pub fn walk<F>(items: &[Value], parent: &NodePath, visit: &mut F) -> Result<(), RewriteError>
where
    F: FnMut(&Map<String, Value>, NodeShape, &NodePath),
{
    for (index, node) in items.iter().enumerate() {
        let path = parent.index(index);
        let shape = classify(node, &path)?;
        let Value::Object(fields) = node else {
            continue;
        };

        visit(fields, shape, &path);

        if let Some(Value::Array(children)) = fields.get("item") {
            walk(children, &path.key("item"), visit)?;
        }
    }
    Ok(())
}

/// The `request` object of a node already classified as carrying one.
pub fn request_mut<'a>(
    fields: &'a mut Map<String, Value>,
    path: &NodePath,
) -> Result<&'a mut Map<String, Value>, RewriteError> {
    match fields.get_mut("request") {
        Some(Value::Object(request)) => Ok(request),
        Some(other) => Err(RewriteError::shape(&path.key("request"), "object", other)),
        None => Err(RewriteError::ShapeViolation {
            path: path.key("request"),
            expected: "object",
            actual: "nothing",
        }),
    }
}

/// The node's `name`, when it is a string.
pub fn node_name(fields: &Map<String, Value>) -> Option<&str> {
    fields.get("name").and_then(Value::as_str)
}
