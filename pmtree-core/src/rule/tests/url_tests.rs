use super::test_helpers::{apply, collection, folder};
use crate::collection::NodePath;
use crate::error::RewriteError;
use crate::rewriter;
use crate::rule::RewriteRule;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn base_url_rule() -> RewriteRule {
    RewriteRule::rewrite_url_token("{{baseUrl}}", "{{baseURL}}/{{ms_orders}}")
}

fn with_url(name: &str, url: Value) -> Value {
    json!({ "name": name, "request": { "method": "GET", "url": url } })
}

#[test]
fn rewrite_url_token_replaces_raw_and_host() {
    // Arrange
    let document = collection(vec![with_url(
        "List",
        json!({ "raw": "{{baseUrl}}/orders", "host": ["{{baseUrl}}"], "path": ["orders"] }),
    )]);

    // Act
    let rewritten = apply(document, &base_url_rule());

    // Assert
    assert_eq!(
        rewritten.document.items()[0]["request"]["url"],
        json!({
            "raw": "{{baseURL}}/{{ms_orders}}/orders",
            "host": ["{{baseURL}}/{{ms_orders}}"],
            "path": ["orders"]
        })
    );
    assert_eq!(rewritten.report.changes.len(), 1);
    assert_eq!(
        rewritten.report.changes[0].path.to_string(),
        "$.item[0].request.url"
    );
    assert_eq!(
        rewritten.report.changes[0].description,
        "replaced '{{baseUrl}}' in 2 place(s)"
    );
}

#[test]
fn rewrite_url_token_replaces_every_occurrence_in_raw() {
    let document = collection(vec![with_url(
        "Redirect",
        json!({ "raw": "{{baseUrl}}/go?to={{baseUrl}}/home" }),
    )]);

    let rewritten = apply(document, &RewriteRule::rewrite_url_token("{{baseUrl}}", "{{x}}"));

    assert_eq!(
        rewritten.document.items()[0]["request"]["url"]["raw"],
        json!("{{x}}/go?to={{x}}/home")
    );
}

#[test]
fn rewrite_url_token_only_replaces_whole_host_entries() {
    // Arrange
    let document = collection(vec![with_url(
        "List",
        json!({ "host": ["api", "{{baseUrl}}.example", "{{baseUrl}}"] }),
    )]);

    // Act
    let rewritten = apply(document, &RewriteRule::rewrite_url_token("{{baseUrl}}", "{{x}}"));

    // Assert
    assert_eq!(
        rewritten.document.items()[0]["request"]["url"]["host"],
        json!(["api", "{{baseUrl}}.example", "{{x}}"])
    );
}

#[test]
fn rewrite_url_token_is_idempotent_once_token_is_gone() {
    // Arrange
    let document = collection(vec![with_url("List", json!({ "raw": "{{baseUrl}}/orders" }))]);
    let first = apply(document, &base_url_rule());

    // Act
    let second = apply(first.document.clone(), &base_url_rule());

    // Assert
    assert_eq!(second.document, first.document);
    assert!(second.report.changes.is_empty());
}

#[test]
fn rewrite_url_token_treats_string_url_as_raw() {
    let document = collection(vec![with_url("List", json!("{{baseUrl}}/orders"))]);

    let rewritten = apply(document, &base_url_rule());

    assert_eq!(
        rewritten.document.items()[0]["request"]["url"],
        json!("{{baseURL}}/{{ms_orders}}/orders")
    );
}

#[test]
fn rewrite_url_token_visits_nested_requests_and_skips_missing_urls() {
    // Arrange
    let document = collection(vec![folder(
        "Orders",
        vec![
            folder("GET", vec![with_url("Deep", json!({ "raw": "{{baseUrl}}/a" }))]),
            json!({ "name": "NoUrl", "request": { "method": "GET" } }),
        ],
    )]);

    // Act
    let rewritten = apply(document, &base_url_rule());

    // Assert
    let paths: Vec<_> = rewritten
        .report
        .changes
        .iter()
        .map(|c| c.path.to_string())
        .collect();
    assert_eq!(paths, vec!["$.item[0].item[0].item[0].request.url"]);
    assert_eq!(
        rewritten.document.items()[0]["item"][1],
        json!({ "name": "NoUrl", "request": { "method": "GET" } })
    );
}

#[test]
fn rewrite_url_token_rejects_non_array_host() {
    let document = collection(vec![with_url("List", json!({ "host": "{{baseUrl}}" }))]);

    let err = rewriter::apply_rule(document, &base_url_rule()).unwrap_err();

    assert_eq!(
        err,
        RewriteError::ShapeViolation {
            path: NodePath::root()
                .key("item")
                .index(0)
                .key("request")
                .key("url")
                .key("host"),
            expected: "array",
            actual: "string",
        }
    );
}

#[test]
fn rewrite_url_token_rejects_empty_token() {
    let err = rewriter::apply_rule(
        collection(vec![]),
        &RewriteRule::rewrite_url_token("", "{{x}}"),
    )
    .unwrap_err();

    assert!(matches!(err, RewriteError::InvalidRule { rule: "rewrite_url_token", .. }));
}

#[test]
fn rewrite_url_token_skips_requests_with_null_url() {
    // Arrange
    let items = vec![
        with_url("Draft", Value::Null),
        with_url("List", json!({ "raw": "{{baseUrl}}/orders" })),
    ];
    let document = collection(items);

    // Act
    let rewritten = apply(document, &base_url_rule());

    // Assert
    assert_eq!(rewritten.document.items()[0]["request"]["url"], Value::Null);
    let paths: Vec<_> = rewritten
        .report
        .changes
        .iter()
        .map(|c| c.path.to_string())
        .collect();
    assert_eq!(paths, vec!["$.item[1].request.url"]);
}
