//! Flat-text (delimited line) codec for [`TodoItem`].
//!
//! One record per line, seven positional fields joined by `;`, no
//! header and no escaping. Absent optionals and the default importance
//! are written as empty fields. Decoding is total: malformed input
//! yields `None`.

use crate::importance::Importance;
use crate::item::{datetime_from_secs, TodoId, TodoItem};

pub const FIELD_SEPARATOR: &str = ";";
/// Alternate separator kept for compatibility with older exports;
/// unused by the current codec.
pub const ALT_FIELD_SEPARATOR: &str = ",";

/// Positional layout: id, text, importance, date_deadline, is_done,
/// date_creation, date_changing.
pub const FIELD_COUNT: usize = 7;

impl TodoItem {
    /// Decodes an item from a `;`-separated line.
    ///
    /// Fails on a wrong field count, empty `id` or `text`, or a missing
    /// or unparsable `date_creation`. Importance, `is_done` and the
    /// optional dates fall back to their defaults instead. Because the
    /// format has no escaping, a field value containing `;` shifts the
    /// positions and the record is rejected by the count check.
    pub fn from_csv(line: &str) -> Option<TodoItem> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return None;
        }

        let importance = fields[2].parse::<Importance>().unwrap_or_default();
        let date_deadline = fields[3].parse::<f64>().ok().and_then(datetime_from_secs);
        let is_done = fields[4].parse::<bool>().unwrap_or(false);
        let date_changing = fields[6].parse::<f64>().ok().and_then(datetime_from_secs);

        if fields[0].is_empty() || fields[1].is_empty() {
            return None;
        }
        let date_creation = fields[5].parse::<f64>().ok().and_then(datetime_from_secs)?;

        Some(TodoItem {
            id: TodoId::from(fields[0]),
            text: fields[1].to_string(),
            importance,
            date_deadline,
            is_done,
            date_creation,
            date_changing,
        })
    }

    /// Encodes the item as a `;`-separated line. Absent optionals and
    /// `Normal` importance become empty fields; `is_done` and
    /// `date_creation` are always written.
    pub fn to_csv(&self) -> String {
        let importance = if self.importance != Importance::Normal {
            self.importance.as_str().to_string()
        } else {
            String::new()
        };
        let date_deadline = self
            .date_deadline
            .map(|deadline| deadline.timestamp().to_string())
            .unwrap_or_default();
        let date_changing = self
            .date_changing
            .map(|changed| changed.timestamp().to_string())
            .unwrap_or_default();

        [
            self.id.as_str().to_string(),
            self.text.clone(),
            importance,
            date_deadline,
            self.is_done.to_string(),
            self.date_creation.timestamp().to_string(),
            date_changing,
        ]
        .join(FIELD_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn minimal_line_decodes_with_defaults() {
        let item = TodoItem::from_csv("a1;buy milk;;;false;1000;").unwrap();

        assert_eq!(item.id, TodoId::from("a1"));
        assert_eq!(item.text, "buy milk");
        assert_eq!(item.importance, Importance::Normal);
        assert!(!item.is_done);
        assert_eq!(item.date_creation.timestamp(), 1000);
        assert_eq!(item.date_deadline, None);
        assert_eq!(item.date_changing, None);
    }

    #[test]
    fn minimal_line_re_encodes_identically() {
        let line = "a1;buy milk;;;false;1000;";
        assert_eq!(TodoItem::from_csv(line).unwrap().to_csv(), line);
    }

    #[test]
    fn all_fields_round_trip() {
        let item = TodoItem::new("walk the dog")
            .with_id("a2")
            .with_importance(Importance::Important)
            .with_deadline(DateTime::from_timestamp(2000, 0).unwrap())
            .with_done(true)
            .with_creation_date(DateTime::from_timestamp(1000, 0).unwrap())
            .with_changing_date(DateTime::from_timestamp(1500, 0).unwrap());

        let line = item.to_csv();
        assert_eq!(line, "a2;walk the dog;important;2000;true;1000;1500");
        assert_eq!(TodoItem::from_csv(&line), Some(item));
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert_eq!(TodoItem::from_csv(""), None);
        assert_eq!(TodoItem::from_csv("a1;buy milk"), None);
        assert_eq!(TodoItem::from_csv("a1;buy milk;;;false;1000"), None);
        // An embedded separator shifts the positions.
        assert_eq!(TodoItem::from_csv("a1;buy; milk;;;false;1000;"), None);
    }

    #[test]
    fn empty_id_or_text_is_rejected() {
        assert_eq!(TodoItem::from_csv(";buy milk;;;false;1000;"), None);
        assert_eq!(TodoItem::from_csv("a1;;;;false;1000;"), None);
    }

    #[test]
    fn missing_or_unparsable_creation_date_is_rejected() {
        assert_eq!(TodoItem::from_csv("a1;buy milk;;;false;;"), None);
        assert_eq!(TodoItem::from_csv("a1;buy milk;;;false;yesterday;"), None);
    }

    #[test]
    fn unrecognized_importance_falls_back_to_normal() {
        let item = TodoItem::from_csv("a1;buy milk;urgent;;false;1000;").unwrap();
        assert_eq!(item.importance, Importance::Normal);
    }

    #[test]
    fn unparsable_is_done_defaults_to_false() {
        let item = TodoItem::from_csv("a1;buy milk;;;yes;1000;").unwrap();
        assert!(!item.is_done);
    }

    #[test]
    fn unparsable_optional_date_is_treated_as_absent() {
        let item = TodoItem::from_csv("a1;buy milk;;soon;false;1000;later").unwrap();
        assert_eq!(item.date_deadline, None);
        assert_eq!(item.date_changing, None);
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        let item = TodoItem::from_csv("a1;buy milk;;2000.9;false;1000.5;").unwrap();
        assert_eq!(item.date_creation.timestamp(), 1000);
        assert_eq!(item.date_deadline.unwrap().timestamp(), 2000);
    }
}
