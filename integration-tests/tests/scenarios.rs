use pmtree_core::{CollectionTreeRewriter, RewriteRule};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn rewrite(input: &Value, rules: &[RewriteRule]) -> Value {
    let rewriter = CollectionTreeRewriter::new(rules).unwrap();
    let (text, _) = rewriter.rewrite_to_string(&input.to_string()).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn auth_header_is_added_to_request_without_headers() {
    // Arrange
    let input = json!({
        "item": [{ "name": "A", "request": { "header": [], "url": { "raw": "http://x" } } }]
    });

    // Act
    let output = rewrite(
        &input,
        &[RewriteRule::UpsertHeader {
            key: "Authorization".to_string(),
            value: "Bearer {{access_token}}".to_string(),
            kind: "text".to_string(),
        }],
    );

    // Assert
    assert_eq!(
        output["item"][0]["request"]["header"],
        json!([{ "key": "Authorization", "value": "Bearer {{access_token}}", "type": "text" }])
    );
}

#[test]
fn base_url_variable_is_swapped_for_gateway_variable() {
    // Arrange
    let input = json!({
        "item": [],
        "variable": [{ "key": "baseUrl", "value": "x" }]
    });

    // Act
    let output = rewrite(
        &input,
        &[
            RewriteRule::remove_variable("baseUrl"),
            RewriteRule::UpsertVariable {
                key: "baseURL".to_string(),
                value: "{{baseURL}}".to_string(),
                kind: "string".to_string(),
            },
        ],
    );

    // Assert
    assert_eq!(
        output["variable"],
        json!([{ "key": "baseURL", "value": "{{baseURL}}", "type": "string" }])
    );
}

#[test]
fn url_token_is_rewritten_in_raw_and_host() {
    // Arrange
    let input = json!({
        "item": [{
            "name": "items",
            "request": { "url": { "raw": "{{baseUrl}}/items", "host": ["{{baseUrl}}"] } }
        }]
    });

    // Act
    let output = rewrite(
        &input,
        &[RewriteRule::rewrite_url_token(
            "{{baseUrl}}",
            "{{baseURL}}/{{ms_orders}}",
        )],
    );

    // Assert
    assert_eq!(
        output["item"][0]["request"]["url"],
        json!({ "raw": "{{baseURL}}/{{ms_orders}}/items", "host": ["{{baseURL}}/{{ms_orders}}"] })
    );
}

#[test]
fn unknown_fields_survive_in_original_order() {
    // Arrange
    let input = r#"{"zeta":1,"info":{"name":"n","_postman_id":"x"},"item":[{"name":"A","request":{"url":"u","method":"GET"},"event":[]}],"alpha":true}"#;
    let rewriter = CollectionTreeRewriter::new(&[RewriteRule::remove_variable("missing")]).unwrap();

    // Act
    let (text, report) = rewriter.rewrite_to_string(input).unwrap();

    // Assert
    let compact: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(compact.to_string(), input);
    assert!(report.is_empty());
}
