//! Frontend Models
//!
//! Data structures matching backend lookup-table records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of an orderable lookup table (agency, infringement type, ...)
///
/// Domain fields other than `id` and `order` are kept verbatim so a
/// full-record update sends them back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderableItem {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub order: i32,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl OrderableItem {
    pub fn new(id: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            order,
            fields: Map::new(),
        }
    }

    /// Display text stored under `key`, empty if absent or not a string
    pub fn label(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn with_label(mut self, key: &str, text: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), Value::String(text.into()));
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

/// Body of a create request: `{ <label_key>: label, order }`
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub label_key: &'static str,
    pub label: String,
    pub order: i32,
}

impl Serialize for NewItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.label_key, &self.label)?;
        map.serialize_entry("order", &self.order)?;
        map.end()
    }
}
