use super::test_helpers::{apply, collection, folder, names, request};
use crate::collection::NodePath;
use crate::error::RewriteError;
use crate::rewriter;
use crate::rule::RewriteRule;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn flatten_lifts_first_child_and_discards_siblings() {
    // Arrange
    let document = collection(vec![folder(
        "Orders",
        vec![
            folder(
                "GET",
                vec![request("List", "/orders"), request("Show", "/orders/1")],
            ),
            folder("POST", vec![request("Create", "/orders")]),
        ],
    )]);

    // Act
    let rewritten = apply(document, &RewriteRule::FlattenOneLevel);

    // Assert
    let orders = &rewritten.document.items()[0];
    assert_eq!(orders["name"], json!("Orders"));
    assert_eq!(
        names(orders["item"].as_array().unwrap()),
        vec!["List", "Show"]
    );
    assert_eq!(
        rewritten.report.changes[0].description,
        "lifted 2 node(s) from first child, discarded 1 sibling(s)"
    );
}

#[test]
fn flatten_empties_folder_when_first_child_has_no_children() {
    let document = collection(vec![folder(
        "Orders",
        vec![request("List", "/orders"), folder("GET", vec![])],
    )]);

    let rewritten = apply(document, &RewriteRule::FlattenOneLevel);

    assert_eq!(rewritten.document.items()[0], json!({ "name": "Orders", "item": [] }));
}

#[test]
fn flatten_passes_through_requests_mixed_and_empty_folders() {
    // Arrange
    let mixed = json!({
        "name": "Mixed",
        "request": { "url": "x" },
        "item": [folder("Inner", vec![request("A", "/a")])]
    });
    let items = vec![
        request("Ping", "/ping"),
        mixed.clone(),
        folder("Empty", vec![]),
    ];
    let document = collection(items.clone());

    // Act
    let rewritten = apply(document, &RewriteRule::FlattenOneLevel);

    // Assert
    assert_eq!(rewritten.document.items(), items.as_slice());
    assert!(rewritten.report.changes.is_empty());
}

#[test]
fn flatten_only_touches_top_level_folders() {
    // Arrange
    let document = collection(vec![folder(
        "Orders",
        vec![folder(
            "GET",
            vec![folder("Deep", vec![request("A", "/a")]), folder("Other", vec![])],
        )],
    )]);

    // Act
    let rewritten = apply(document, &RewriteRule::FlattenOneLevel);

    // Assert
    let orders = &rewritten.document.items()[0];
    assert_eq!(names(orders["item"].as_array().unwrap()), vec!["Deep", "Other"]);
    assert_eq!(names(orders["item"][0]["item"].as_array().unwrap()), vec!["A"]);
}

#[test]
fn flatten_rejects_non_array_grandchildren() {
    let document = collection(vec![folder("Orders", vec![json!({ "name": "GET", "item": 7 })])]);

    let err = rewriter::apply_rule(document, &RewriteRule::FlattenOneLevel).unwrap_err();

    assert_eq!(
        err,
        RewriteError::ShapeViolation {
            path: NodePath::root().key("item").index(0).key("item").index(0).key("item"),
            expected: "array",
            actual: "number",
        }
    );
}
