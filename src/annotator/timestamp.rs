//! Epoch timestamp rendering.

use crate::parser::{Record, Value};
use crate::utils::config::{ROOT_CLASS_ID, TIMESTAMP_FIELD_ID, TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};

/// Render Unix epoch seconds as a UTC calendar string
///
/// Returns `None` only for values outside chrono's representable range.
pub fn format_epoch_seconds(secs: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

/// Calendar annotation for the root timestamp field
///
/// Applies only to field 47 of the root class carrying an `i32`; any other
/// context, id, or value kind gets nothing.
pub fn timestamp_annotation(class_id: i32, record: &Record) -> Option<String> {
    if class_id != ROOT_CLASS_ID || record.id != TIMESTAMP_FIELD_ID {
        return None;
    }
    match record.value {
        Value::Int32(secs) => format_epoch_seconds(secs.into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_instant() {
        assert_eq!(
            format_epoch_seconds(1_700_000_000).as_deref(),
            Some("2023-11-14 22:13:20")
        );
        assert_eq!(format_epoch_seconds(0).as_deref(), Some("1970-01-01 00:00:00"));
    }

    #[test]
    fn negative_seconds_precede_epoch() {
        assert_eq!(format_epoch_seconds(-1).as_deref(), Some("1969-12-31 23:59:59"));
    }

    #[test]
    fn only_root_field_47_with_i32() {
        let hit = Record::wild(47, 1_700_000_000);
        assert!(timestamp_annotation(ROOT_CLASS_ID, &hit).is_some());

        assert!(timestamp_annotation(10, &hit).is_none());
        assert!(timestamp_annotation(ROOT_CLASS_ID, &Record::wild(46, 1_700_000_000)).is_none());
        assert!(timestamp_annotation(ROOT_CLASS_ID, &Record::wild(47, 1_700_000_000i64)).is_none());
        assert!(timestamp_annotation(ROOT_CLASS_ID, &Record::wild(47, "1700000000")).is_none());
        assert!(timestamp_annotation(ROOT_CLASS_ID, &Record::wild(47, Value::Absent)).is_none());
    }
}
