//! Structured (JSON document) codec for [`TodoItem`].
//!
//! Decoding takes an arbitrary [`serde_json::Value`] and is total:
//! malformed input yields `None`, never an error or a partial record.
//! Encoding omits fields that hold their default (`importance` when
//! `Normal`) or are absent (the optional dates); the decoder fills the
//! same defaults back in, so round-trips are lossless.

use crate::importance::Importance;
use crate::item::{datetime_from_secs, TodoId, TodoItem};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Key names of the structured format.
pub mod keys {
    pub const ID: &str = "id";
    pub const TEXT: &str = "text";
    pub const IMPORTANCE: &str = "importance";
    pub const DATE_DEADLINE: &str = "date_deadline";
    pub const IS_DONE: &str = "is_done";
    pub const DATE_CREATION: &str = "date_creation";
    pub const DATE_CHANGING: &str = "date_changing";
}

impl TodoItem {
    /// Decodes an item from a JSON document.
    ///
    /// Required: `id` (non-empty string), `text` (non-empty string),
    /// `date_creation` (seconds since epoch). Anything missing or
    /// wrong-typed among those fails the whole decode. `importance`,
    /// `is_done` and the optional dates are silently defaulted instead.
    pub fn from_json(value: &Value) -> Option<TodoItem> {
        let doc = value.as_object()?;

        let importance = doc
            .get(keys::IMPORTANCE)
            .and_then(Value::as_str)
            .and_then(|token| token.parse::<Importance>().ok())
            .unwrap_or_default();
        let is_done = doc
            .get(keys::IS_DONE)
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let date_deadline = doc
            .get(keys::DATE_DEADLINE)
            .and_then(Value::as_f64)
            .and_then(datetime_from_secs);
        let date_changing = doc
            .get(keys::DATE_CHANGING)
            .and_then(Value::as_f64)
            .and_then(datetime_from_secs);

        let id = doc
            .get(keys::ID)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())?;
        let text = doc
            .get(keys::TEXT)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())?;
        let date_creation = doc
            .get(keys::DATE_CREATION)
            .and_then(Value::as_f64)
            .and_then(datetime_from_secs)?;

        Some(TodoItem {
            id: TodoId::from(id),
            text: text.to_string(),
            importance,
            date_deadline,
            is_done,
            date_creation,
            date_changing,
        })
    }

    /// Encodes the item as a JSON document, omitting `importance` when
    /// it is `Normal` and the optional dates when absent.
    pub fn to_json(&self) -> Value {
        let mut doc = Map::new();

        doc.insert(keys::ID.to_string(), json!(self.id.as_str()));
        doc.insert(keys::TEXT.to_string(), json!(self.text));
        if self.importance != Importance::Normal {
            doc.insert(keys::IMPORTANCE.to_string(), json!(self.importance.as_str()));
        }
        if let Some(deadline) = self.date_deadline {
            doc.insert(keys::DATE_DEADLINE.to_string(), json!(deadline.timestamp()));
        }
        doc.insert(keys::IS_DONE.to_string(), json!(self.is_done));
        doc.insert(
            keys::DATE_CREATION.to_string(),
            json!(self.date_creation.timestamp()),
        );
        if let Some(changed) = self.date_changing {
            doc.insert(keys::DATE_CHANGING.to_string(), json!(changed.timestamp()));
        }

        Value::Object(doc)
    }
}

impl Serialize for TodoItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TodoItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        TodoItem::from_json(&value).ok_or_else(|| D::Error::custom("invalid todo item document"))
    }
}
