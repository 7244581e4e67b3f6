// tests/token_tests.rs

use cqn_filter::{Literal, Token, WireError, tokens_from_json, translate};
use serde_json::json;

// ============================================================================
// Wire Classification
// ============================================================================

#[test]
fn test_classify_shapes() {
    let test_cases = vec![
        (json!({"ref": ["age"]}), Token::field("age")),
        (
            json!({"ref": ["author", "name"]}),
            Token::Reference(vec!["author".into(), "name".into()]),
        ),
        (json!("="), Token::op("=")),
        (json!("and"), Token::op("and")),
        (json!({"val": 30}), Token::val(30)),
        (json!({"val": 2.5}), Token::val(2.5)),
        (json!({"val": "Alice"}), Token::val("Alice")),
        (json!({"val": true}), Token::val(true)),
        (json!({"val": null}), Token::Value(Literal::Null)),
    ];

    for (input, expected) in test_cases {
        assert_eq!(Token::from_json(&input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_classify_unrecognized_as_other() {
    let test_cases = vec![
        json!({"ref": []}),
        json!({"ref": [{"id": "books", "where": []}]}),
        json!({"ref": "age"}),
        json!({"val": [1, 2]}),
        json!({"val": {"a": 1}}),
        json!({"func": "tolower", "args": [{"ref": ["name"]}]}),
        json!({"xpr": [{"ref": ["a"]}, "=", {"val": 1}]}),
        json!({}),
        json!(42),
        json!(null),
        json!(true),
        json!(["="]),
    ];

    for input in test_cases {
        assert_eq!(Token::from_json(&input), Token::Other, "Failed for input: {}", input);
    }
}

#[test]
fn test_reference_with_infix_filter_segment() {
    let token = Token::from_json(&json!({"ref": ["author", {"id": "name", "where": []}]}));
    assert_eq!(token, Token::field("author"));

    let tokens = tokens_from_json(&json!([
        {"ref": ["author", {"id": "name", "where": []}]}, "=", {"val": "Poe"}
    ]))
    .unwrap();
    assert_eq!(translate(&tokens).to_json(), json!({"author": "Poe"}));
}

#[test]
fn test_reference_keeps_string_tail_segments() {
    let token = Token::from_json(&json!({"ref": ["author", {"id": "books"}, "title"]}));
    assert_eq!(token, Token::Reference(vec!["author".into(), "title".into()]));
}

#[test]
fn test_reference_checked_before_value() {
    let token = Token::from_json(&json!({"ref": ["x"], "val": 1}));
    assert_eq!(token, Token::field("x"));
}

#[test]
fn test_large_unsigned_becomes_float() {
    let token = Token::from_json(&json!({"val": u64::MAX}));
    assert!(matches!(token, Token::Value(Literal::Float(_))));
}

#[test]
fn test_field_name() {
    assert_eq!(Token::field("age").field_name(), Some("age"));
    assert_eq!(Token::op("=").field_name(), None);
    assert_eq!(Token::val(1).field_name(), None);
    assert_eq!(Token::Other.field_name(), None);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_tokens_from_array() {
    let tokens = tokens_from_json(&json!([
        {"ref": ["name"]}, "like", {"val": "Al"},
        "and",
        {"func": "contains"}
    ]))
    .unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::field("name"),
            Token::op("like"),
            Token::val("Al"),
            Token::op("and"),
            Token::Other,
        ]
    );
}

#[test]
fn test_tokens_from_non_array() {
    let err = tokens_from_json(&json!({"ref": ["x"]})).unwrap_err();
    assert!(matches!(err, WireError::NotAnArray("object")));
    assert_eq!(err.to_string(), "where clause must be a JSON array, got object");

    assert!(matches!(
        tokens_from_json(&json!("x = 1")),
        Err(WireError::NotAnArray("string"))
    ));
}

#[test]
fn test_wire_to_filter() {
    let tokens = tokens_from_json(&json!([
        {"ref": ["age"]}, "GE", {"val": 18},
        "and",
        {"ref": ["status"]}, "!=", {"val": null},
        "and",
        {"ref": ["score"]}, "le", {"val": 9.5}
    ]))
    .unwrap();

    assert_eq!(
        translate(&tokens).to_json(),
        json!({"age": {"gte": 18}, "status": {"not": null}, "score": {"lte": 9.5}})
    );
}

#[test]
fn test_wire_nested_expression_is_ignored() {
    // Parenthesised groups arrive as {"xpr": [...]}; they are not descended into.
    let tokens = tokens_from_json(&json!([
        {"xpr": [{"ref": ["a"]}, "=", {"val": 1}]},
        "and",
        {"ref": ["b"]}, "=", {"val": 2}
    ]))
    .unwrap();

    assert_eq!(translate(&tokens).to_json(), json!({"b": 2}));
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_literal_round_trip_keeps_integers() {
    assert_eq!(Literal::from_json(&json!(30)).unwrap().to_json(), json!(30));
    assert_eq!(Literal::from_json(&json!(-4)), Some(Literal::Integer(-4)));
    assert_eq!(Literal::from_json(&json!(1.25)), Some(Literal::Float(1.25)));
}

#[test]
fn test_non_finite_float_renders_null() {
    assert_eq!(Literal::Float(f64::NAN).to_json(), json!(null));
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::Null.to_string(), "null");
    assert_eq!(Literal::from("a\"b").to_string(), "\"a\\\"b\"");
    assert_eq!(Literal::Integer(7).to_string(), "7");
    assert!(Literal::Null.is_null());
}
