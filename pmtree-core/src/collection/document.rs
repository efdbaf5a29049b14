use crate::collection::{NodePath, json_kind};
use crate::error::RewriteError;
use serde_json::{Map, Value};
use tracing::warn;

pub const ITEMS_KEY: &str = "item";
pub const VARIABLES_KEY: &str = "variable";

/// A parsed collection document.
///
/// The root is guaranteed to be an object with an `item` array once parsing
/// succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDocument {
    root: Map<String, Value>,
    /// Kind of the root `item` value replaced at parse time, if any.
    replaced_items: Option<&'static str>,
}

impl CollectionDocument {
    /// Parses raw collection text.
    ///
    /// A root whose `item` is absent or not an array gets an empty one; the
    /// substitution is logged and visible through
    /// [`CollectionDocument::items_were_missing`].
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the text is not JSON or the root is not an
    /// object.
    pub fn parse(raw: &str) -> Result<Self, RewriteError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| RewriteError::malformed(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, RewriteError> {
        let Value::Object(mut root) = value else {
            return Err(RewriteError::malformed(format!(
                "document root must be an object, found {}",
                json_kind(&value)
            )));
        };

        let replaced_items = match root.get(ITEMS_KEY) {
            Some(Value::Array(_)) => None,
            None => Some("nothing"),
            Some(other) => Some(json_kind(other)),
        };

        if let Some(found) = replaced_items {
            warn!(found, "collection has no item array, substituting an empty one");
            root.insert(ITEMS_KEY.to_string(), Value::Array(Vec::new()));
        }

        Ok(Self {
            root,
            replaced_items,
        })
    }

    pub fn items_path() -> NodePath {
        NodePath::root().key(ITEMS_KEY)
    }

    pub fn variables_path() -> NodePath {
        NodePath::root().key(VARIABLES_KEY)
    }

    /// Whether parsing had to substitute an empty `item` array.
    pub fn items_were_missing(&self) -> bool {
        self.replaced_items.is_some()
    }

    /// Report text for a substituted `item` array, naming what was found instead.
    pub fn substitution_warning(&self) -> Option<String> {
        self.replaced_items.map(|found| {
            format!("collection had no item array (found {found}), an empty one was substituted")
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.root
            .get("info")
            .and_then(|info| info.get("name"))
            .or_else(|| self.root.get("name"))
            .and_then(Value::as_str)
    }

    pub fn items(&self) -> &[Value] {
        match self.root.get(ITEMS_KEY) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    pub fn items_mut(&mut self) -> Result<&mut Vec<Value>, RewriteError> {
        match self.root.get_mut(ITEMS_KEY) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(RewriteError::shape(&Self::items_path(), "array", other)),
            None => Err(RewriteError::ShapeViolation {
                path: Self::items_path(),
                expected: "array",
                actual: "nothing",
            }),
        }
    }

    /// Replaces the root `item` array in place, keeping its key position.
    pub fn replace_items(&mut self, items: Vec<Value>) {
        self.root.insert(ITEMS_KEY.to_string(), Value::Array(items));
    }

    pub fn variables(&self) -> &[Value] {
        match self.root.get(VARIABLES_KEY) {
            Some(Value::Array(variables)) => variables,
            _ => &[],
        }
    }

    pub fn has_variable(&self, key: &str) -> bool {
        self.variables()
            .iter()
            .any(|v| v.get("key").and_then(Value::as_str) == Some(key))
    }

    /// The root variable table, created empty when `create` is set and it is
    /// absent or `null`.
    pub fn variables_mut(
        &mut self,
        create: bool,
    ) -> Result<Option<&mut Vec<Value>>, RewriteError> {
        let absent = matches!(self.root.get(VARIABLES_KEY), None | Some(Value::Null));
        if create && absent {
            self.root.insert(VARIABLES_KEY.to_string(), Value::Array(Vec::new()));
        }

        match self.root.get_mut(VARIABLES_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(variables)) => Ok(Some(variables)),
            Some(other) => Err(RewriteError::shape(&Self::variables_path(), "array", other)),
        }
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// Two-space pretty JSON, keys in insertion order.
    pub fn serialize(&self) -> Result<String, RewriteError> {
        serde_json::to_string_pretty(&self.root).map_err(|e| RewriteError::Serialize {
            reason: e.to_string(),
        })
    }
}
