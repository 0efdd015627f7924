use crate::importance::Importance;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(pub String);

impl TodoId {
    /// Generates a fresh unique identifier.
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable to-do item.
///
/// Construction applies defaults but performs no validation; only the
/// decode paths ([`TodoItem::from_json`], [`TodoItem::from_csv`]) reject
/// empty `id` or `text`. "Mutation" means building a new record via the
/// `with_*` methods.
///
/// Timestamps carry whole-second precision, since both serialized forms
/// exchange them as seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub importance: Importance,
    pub date_deadline: Option<DateTime<Utc>>,
    pub is_done: bool,
    pub date_creation: DateTime<Utc>,
    pub date_changing: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates an item with a generated id, `Normal` importance, not
    /// done, created now, and no deadline or changing date.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            text: text.into(),
            importance: Importance::default(),
            date_deadline: None,
            is_done: false,
            date_creation: Utc::now().trunc_subsecs(0),
            date_changing: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<TodoId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.date_deadline = Some(deadline.trunc_subsecs(0));
        self
    }

    pub fn with_done(mut self, is_done: bool) -> Self {
        self.is_done = is_done;
        self
    }

    pub fn with_creation_date(mut self, created: DateTime<Utc>) -> Self {
        self.date_creation = created.trunc_subsecs(0);
        self
    }

    pub fn with_changing_date(mut self, changed: DateTime<Utc>) -> Self {
        self.date_changing = Some(changed.trunc_subsecs(0));
        self
    }
}

/// Converts external seconds-since-epoch (integer or fractional) to a
/// whole-second timestamp. Fails on non-finite input and on values
/// outside the representable range.
pub(crate) fn datetime_from_secs(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp(secs.trunc() as i64, 0)
}
