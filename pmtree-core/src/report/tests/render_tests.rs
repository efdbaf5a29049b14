use crate::collection::NodePath;
use crate::report::{ReportFormat, RewriteReport};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn sample() -> RewriteReport {
    let mut report = RewriteReport::default();
    let first = NodePath::root().key("item").index(0);
    let second = NodePath::root().key("item").index(1);
    let added = "added header 'Authorization'";
    report.change("upsert_header", &first.key("request").key("header"), added);
    report.change("upsert_header", &second.key("request").key("header"), added);
    report.change(
        "remove_variable",
        &NodePath::root().key("variable"),
        "removed variable 'baseUrl'",
    );
    report.warning("dropped 2 request(s) not found at depth 2", None);
    report.warning("top-level node has no name, grouping under \"\"", Some(&first));
    report
}

#[test]
fn plain_lists_one_line_per_change_and_warning() {
    let rendered = sample().render(ReportFormat::Plain);

    assert_eq!(
        rendered,
        "$.item[0].request.header:upsert_header: added header 'Authorization'\n\
         $.item[1].request.header:upsert_header: added header 'Authorization'\n\
         $.variable:remove_variable: removed variable 'baseUrl'\n\
         warning: dropped 2 request(s) not found at depth 2\n\
         $.item[0]:warning: top-level node has no name, grouping under \"\"\n"
    );
}

#[test]
fn json_serializes_paths_as_strings() {
    let rendered: Value = serde_json::from_str(&sample().render(ReportFormat::Json)).unwrap();

    assert_eq!(rendered["changes"][2], json!({
        "rule": "remove_variable",
        "path": "$.variable",
        "description": "removed variable 'baseUrl'"
    }));
    assert_eq!(rendered["warnings"][0]["path"], Value::Null);
}

#[test]
fn pretty_counts_changes_per_rule() {
    let rendered = sample().render(ReportFormat::Pretty);

    assert!(rendered.contains("2 changes"));
    assert!(rendered.contains("1 changes"));
    assert_eq!(rendered.lines().count(), 4);
}

#[test]
fn changes_for_filters_by_rule_and_extend_appends() {
    let mut report = sample();
    let mut other = RewriteReport::default();
    other.change("upsert_header", &NodePath::root(), "added header 'X'");

    report.extend(other);

    assert_eq!(report.changes_for("upsert_header").count(), 3);
    assert_eq!(report.warnings.len(), 2);
}
