use pretty_assertions::assert_eq;
use wam_trace_studio::annotator::annotate_all;
use wam_trace_studio::output::{
    records_to_json_lines, render_line, render_text, write_text, OutputFormat, TextStyle,
};
use wam_trace_studio::parser::{Record, Value};
use wam_trace_studio::schema::{ClassEntry, Schema};

fn player_schema() -> Schema {
    Schema::new()
        .with_class(ClassEntry::new(0, "Wild").with_field(47, "Timestamp"))
        .with_class(ClassEntry::new(10, "Player").with_field(3, "status"))
}

fn player_records() -> Vec<Record> {
    vec![
        Record::begin(10, Value::Absent),
        Record::wild(47, 1_700_000_000),
        Record::wild(3, "ok").ending(),
    ]
}

#[test]
fn test_render_player_scenario() {
    let schema = player_schema();
    let annotated = annotate_all(&schema, &player_records());

    let text = render_text(&annotated, &TextStyle::plain());

    assert_eq!(
        text,
        "\n\
         1 10\t(Player) nil nil\n\
         0 47 1700000000 i32\n\
         0 3\t(status) \"ok\" string  <- chunk end\n"
    );
}

#[test]
fn test_render_root_timestamp() {
    let schema = player_schema();
    let annotated = annotate_all(&schema, &[Record::wild(47, 1_700_000_000)]);

    assert_eq!(
        render_line(&annotated[0], &TextStyle::plain()),
        "0 47\t(Timestamp) 1700000000 (2023-11-14 22:13:20) i32"
    );
}

#[test]
fn test_render_unlabelled_records() {
    let schema = Schema::new();
    let annotated = annotate_all(
        &schema,
        &[Record::begin(999, Value::Int8(3)), Record::data(2, Value::Float64(0.5))],
    );

    let text = render_text(&annotated, &TextStyle::plain());
    assert_eq!(text, "\n1 999 3 i8\n2 2 0.5 f64\n");
}

#[test]
fn test_render_empty_listing() {
    assert_eq!(render_text(&[], &TextStyle::plain()), "");
}

#[test]
fn test_one_line_per_record_plus_class_separators() {
    let schema = player_schema();
    let records = vec![
        Record::wild(47, 1_700_000_000),
        Record::begin(10, Value::Absent),
        Record::data(3, "multi\nline").ending(),
        Record::begin(10, Value::Absent),
        Record::data(3, "ok").ending(),
    ];
    let annotated = annotate_all(&schema, &records);
    let text = render_text(&annotated, &TextStyle::plain());

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), records.len() + 2);
    assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.ends_with("<- chunk end")).count(), 2);
}

#[test]
fn test_write_text_matches_render_text() {
    let schema = player_schema();
    let annotated = annotate_all(&schema, &player_records());

    let mut sink = Vec::new();
    write_text(&mut sink, &annotated, &TextStyle::plain()).unwrap();

    assert_eq!(
        String::from_utf8(sink).unwrap(),
        render_text(&annotated, &TextStyle::plain())
    );
}

#[test]
fn test_colored_listing_keeps_content() {
    colored::control::set_override(true);

    let schema = player_schema();
    let annotated = annotate_all(&schema, &player_records());
    let line = render_line(&annotated[2], &TextStyle::colored());

    assert!(line.contains("\u{1b}["));
    assert!(line.contains("status"));
    assert!(line.contains("<- chunk end"));
}

#[test]
fn test_json_lines_output() {
    let schema = player_schema();
    let annotated = annotate_all(&schema, &player_records());

    let json = records_to_json_lines(&annotated).unwrap();
    let rows: Vec<serde_json::Value> = json
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["class_type"], "begin");
    assert_eq!(rows[0]["label"], "Player");
    assert_eq!(rows[0]["value"]["type"], "nil");
    assert_eq!(rows[1]["value"]["value"], 1_700_000_000);
    assert_eq!(rows[1]["timestamp"], serde_json::Value::Null);
    assert_eq!(rows[2]["label_kind"], "field");
    assert_eq!(rows[2]["chunk_end"], true);
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("xml".parse::<OutputFormat>().is_err());
}
