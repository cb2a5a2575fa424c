use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity of a collection (journal, partner, module, ...).
///
/// Records are kept as raw JSON objects: each page knows which fields it
/// searches, filters and sorts on, nothing else is validated here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Build a record from a JSON value, `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Record id as a string (ids are strings or integers depending on the resource)
    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(scalar_to_string)
    }

    /// Resolve a field by dot path (`type.code`, `default_account.name`)
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Text rendering used for search and text sorting.
    /// Missing, null and structured values read as the empty string.
    pub fn text(&self, path: &str) -> String {
        self.lookup(path)
            .and_then(scalar_to_string)
            .unwrap_or_default()
    }

    /// Value used by equality filters, `None` for missing/null/structured fields
    pub fn filter_value(&self, path: &str) -> Option<String> {
        self.lookup(path).and_then(scalar_to_string)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Coerce a scalar JSON value to its string form (strings verbatim, numbers
/// in their JSON rendering, booleans as `true`/`false`)
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
