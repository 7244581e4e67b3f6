// tests/cli_tests.rs

use cqn_filter::cli::{CliError, QueryOptions, TranslateOptions, execute_query, execute_translate};
use cqn_filter::{SkipReason, TranslateError};
use serde_json::json;

fn translate_opts(input: &str, strict: bool) -> TranslateOptions {
    TranslateOptions {
        input: Some(input.to_string()),
        strict,
    }
}

// ============================================================================
// translate
// ============================================================================

#[test]
fn test_translate_command() {
    let output = execute_translate(&translate_opts(
        r#"[{"ref":["age"]},"ge",{"val":18},"and",{"ref":["name"]},"like",{"val":"Al"}]"#,
        false,
    ))
    .unwrap();

    assert_eq!(output.json, json!({"age": {"gte": 18}, "name": {"contains": "Al"}}));
    assert_eq!(output.skipped.len(), 1);
    assert_eq!(output.skipped[0].index, 3);
}

#[test]
fn test_translate_command_strict() {
    let ok = execute_translate(&translate_opts(r#"[{"ref":["id"]},"=",{"val":1}]"#, true)).unwrap();
    assert_eq!(ok.json, json!({"id": 1}));
    assert!(ok.skipped.is_empty());

    let err = execute_translate(&translate_opts(r#"[{"ref":["id"]},"in",{"val":1}]"#, true))
        .unwrap_err();
    match err {
        CliError::Translate(TranslateError::Rejected(s)) => {
            assert_eq!(s.reason, SkipReason::UnknownOperator("in".into()));
        }
        other => panic!("Expected translation error, got {:?}", other),
    }
}

#[test]
fn test_translate_command_no_input() {
    let err = execute_translate(&TranslateOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::NoInput));

    let err = execute_translate(&translate_opts("   \n", false)).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

#[test]
fn test_translate_command_bad_json() {
    let err = execute_translate(&translate_opts("[{", false)).unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON: "));
}

#[test]
fn test_translate_command_not_an_array() {
    let err = execute_translate(&translate_opts(r#"{"ref":["x"]}"#, false)).unwrap_err();
    assert!(matches!(err, CliError::Wire(_)));
}

// ============================================================================
// query
// ============================================================================

#[test]
fn test_query_command() {
    let output = execute_query(&QueryOptions {
        input: Some(
            r#"{"SELECT":{"from":{"ref":["CatalogService.Users"]},"where":[{"ref":["id"]},"=",{"val":3}]}}"#
                .to_string(),
        ),
        entity: None,
    })
    .unwrap();

    assert_eq!(output.json, json!({"model": "users", "args": {"where": {"id": 3}}}));
    assert!(output.skipped.is_empty());
}

#[test]
fn test_query_command_without_filter_or_entity() {
    let output = execute_query(&QueryOptions {
        input: Some(r#"{"SELECT":{}}"#.to_string()),
        entity: None,
    })
    .unwrap();

    assert_eq!(output.json, json!({"model": null, "args": {}}));
}

#[test]
fn test_query_command_entity_override() {
    let output = execute_query(&QueryOptions {
        input: Some(r#"{"SELECT":{"from":{"ref":["A.Users"]}}}"#.to_string()),
        entity: Some("B.Orders".to_string()),
    })
    .unwrap();

    assert_eq!(output.json["model"], json!("orders"));
}
