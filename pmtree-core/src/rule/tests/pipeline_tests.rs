use super::test_helpers::{collection, request};
use crate::error::RewriteError;
use crate::report::RewriteReport;
use crate::rule::{RewriteRule, RulePipeline};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn pipeline_keeps_rule_order() {
    let pipeline = RulePipeline::from_config(&[
        RewriteRule::upsert_header("Authorization", "Bearer {{access_token}}"),
        RewriteRule::FlattenOneLevel,
        RewriteRule::remove_variable("baseUrl"),
    ])
    .unwrap();

    assert_eq!(pipeline.len(), 3);
    assert_eq!(
        pipeline.rule_names(),
        vec!["upsert_header", "flatten_one_level", "remove_variable"]
    );
}

#[test]
fn pipeline_rejects_invalid_rule_configuration() {
    let result = RulePipeline::from_config(&[
        RewriteRule::FlattenOneLevel,
        RewriteRule::GroupLeavesByAncestor { depth: 0 },
    ]);

    assert!(matches!(
        result,
        Err(RewriteError::InvalidRule { rule: "group_leaves_by_ancestor", .. })
    ));
}

#[test]
fn pipeline_stops_at_first_failure() {
    // Arrange
    let mut document = collection(vec![
        request("List", "/orders"),
        json!({ "name": "Bad", "item": "x" }),
    ]);
    let pipeline = RulePipeline::from_config(&[
        RewriteRule::upsert_variable("before", "1"),
        RewriteRule::upsert_header("Authorization", "Bearer {{access_token}}"),
        RewriteRule::upsert_variable("after", "2"),
    ])
    .unwrap();
    let mut report = RewriteReport::default();

    // Act
    let result = pipeline.run(&mut document, &mut report);

    // Assert
    assert!(matches!(result, Err(RewriteError::ShapeViolation { .. })));
    let rules: Vec<_> = report.changes.iter().map(|c| c.rule).collect();
    assert!(rules.contains(&"upsert_variable"));
    assert!(!document.has_variable("after"));
}

#[test]
fn empty_pipeline_leaves_document_untouched() {
    let mut document = collection(vec![request("List", "/orders")]);
    let before = document.clone();
    let pipeline = RulePipeline::new(Vec::new());
    let mut report = RewriteReport::default();

    pipeline.run(&mut document, &mut report).unwrap();

    assert!(pipeline.is_empty());
    assert_eq!(document, before);
    assert!(report.is_empty());
}
