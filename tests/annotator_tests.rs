use wam_trace_studio::annotator::{annotate_all, Annotator, LabelKind};
use wam_trace_studio::parser::{Record, Value};
use wam_trace_studio::schema::{ClassEntry, Schema};

fn player_schema() -> Schema {
    Schema::new()
        .with_class(ClassEntry::new(0, "Wild").with_field(47, "Timestamp").with_field(3, "mnc"))
        .with_class(ClassEntry::new(10, "Player").with_field(3, "status"))
}

#[test]
fn test_empty_sequence_annotates_nothing() {
    let schema = player_schema();
    assert!(annotate_all(&schema, &[]).is_empty());
}

#[test]
fn test_player_scenario() {
    let schema = player_schema();
    let mut annotator = Annotator::new(&schema);

    let header = annotator.annotate(&Record::begin(10, Value::Absent));
    assert!(header.starts_class);
    assert_eq!(header.label_kind, LabelKind::Class);
    assert_eq!(header.label.as_deref(), Some("Player"));
    assert_eq!(annotator.current_class_id(), 10);

    // Field 47 inside class 10 is not the root timestamp
    let ts = annotator.annotate(&Record::wild(47, 1_700_000_000));
    assert_eq!(ts.label, None);
    assert_eq!(ts.timestamp, None);

    let status = annotator.annotate(&Record::wild(3, "ok").ending());
    assert_eq!(status.label.as_deref(), Some("status"));
    assert!(status.chunk_end);
    assert_eq!(status.class_id, 10);

    assert!(annotator.context().is_root());
}

#[test]
fn test_root_timestamp_is_decoded() {
    let schema = player_schema();
    let out = annotate_all(&schema, &[Record::wild(47, 1_700_000_000)]);
    assert_eq!(out[0].label.as_deref(), Some("Timestamp"));
    assert_eq!(out[0].timestamp.as_deref(), Some("2023-11-14 22:13:20"));
}

#[test]
fn test_timestamp_requires_i32() {
    let schema = player_schema();
    let out = annotate_all(
        &schema,
        &[
            Record::wild(47, Value::Int64(1_700_000_000)),
            Record::wild(47, Value::Int16(5)),
            Record::wild(47, Value::Absent),
        ],
    );
    assert!(out.iter().all(|r| r.timestamp.is_none()));
}

#[test]
fn test_timestamp_never_on_other_ids() {
    let schema = player_schema();
    let records: Vec<Record> = (0..100)
        .filter(|id| *id != 47)
        .map(|id| Record::wild(id, 1_700_000_000))
        .collect();
    assert!(annotate_all(&schema, &records)
        .iter()
        .all(|r| r.timestamp.is_none()));
}

#[test]
fn test_unknown_class_still_becomes_context() {
    let schema = player_schema();
    let out = annotate_all(
        &schema,
        &[Record::begin(77, 1), Record::data(3, 9)],
    );
    assert_eq!(out[0].label, None);
    assert_eq!(out[1].class_id, 77);
    // Not resolved against the root's field 3
    assert_eq!(out[1].label, None);
}

#[test]
fn test_chunk_end_returns_to_root() {
    let schema = player_schema();
    let out = annotate_all(
        &schema,
        &[
            Record::begin(10, Value::Absent),
            Record::data(3, "ok").ending(),
            Record::wild(3, 310),
            Record::wild(47, 1_700_000_000),
        ],
    );
    assert_eq!(out[2].class_id, 0);
    assert_eq!(out[2].label.as_deref(), Some("mnc"));
    assert!(out[3].timestamp.is_some());
}

#[test]
fn test_nested_begin_does_not_stack() {
    let schema = player_schema();
    let mut annotator = Annotator::new(&schema);
    annotator.annotate(&Record::begin(10, Value::Absent));
    annotator.annotate(&Record::begin(20, Value::Absent));
    let inner_end = annotator.annotate(&Record::data(1, 1).ending());
    assert_eq!(inner_end.class_id, 20);

    // Flat context: back to root, not to class 10
    let after = annotator.annotate(&Record::data(3, "ok"));
    assert_eq!(after.class_id, 0);
    assert_eq!(after.label.as_deref(), Some("mnc"));
}

#[test]
fn test_sequence_may_end_inside_class() {
    let schema = player_schema();
    let mut annotator = Annotator::new(&schema);
    annotator.annotate(&Record::begin(10, Value::Absent));
    annotator.annotate(&Record::data(3, "ok"));
    assert_eq!(annotator.current_class_id(), 10);
}

#[test]
fn test_records_are_not_modified() {
    let schema = player_schema();
    let records = vec![Record::begin(10, 5), Record::data(3, "ok").ending()];
    let before = records.clone();
    let out = annotate_all(&schema, &records);
    assert_eq!(records, before);
    assert_eq!(out[0].value, Value::Int32(5));
}

#[test]
fn test_each_pass_starts_fresh() {
    let schema = player_schema();
    let records = vec![Record::begin(10, Value::Absent), Record::data(3, "ok")];
    let first = annotate_all(&schema, &records);
    let second = annotate_all(&schema, &records);
    assert_eq!(first, second);
}
