//! Filter tokens and their conversion from the JSON wire form.
//!
//! A `where` clause arrives as a flat JSON array such as
//!
//! ```text
//! [ {"ref": ["age"]}, "ge", {"val": 18}, "and", {"ref": ["name"]}, "like", {"val": "Al"} ]
//! ```
//!
//! Each element is classified once, up front, into a [`Token`]. The
//! translator then only ever matches on variants.

use crate::value::Literal;

/// One element of a flat filter-expression sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Field reference (`{"ref": ["name", ...]}`)
    ///
    /// Only the first segment names the field; deeper segments are kept but
    /// ignored by the translator. An empty path is treated as not a
    /// reference.
    ///
    /// # Examples
    /// ```text
    /// {"ref": ["age"]}
    /// {"ref": ["author", "name"]}
    /// {"ref": ["author", {"id": "name", "where": [...]}]}
    /// ```
    Reference(Vec<String>),

    /// Bare string, matched case-insensitively against the operator vocabulary
    ///
    /// Logical words like `and` land here too; the translator treats them as
    /// orphan tokens.
    ///
    /// # Examples
    /// ```text
    /// "="
    /// "LIKE"
    /// "and"
    /// ```
    Operator(String),

    /// Literal carrier (`{"val": ...}`)
    ///
    /// # Examples
    /// ```text
    /// {"val": 30}
    /// {"val": "Alice"}
    /// {"val": null}
    /// ```
    Value(Literal),

    /// Any element matching none of the shapes above
    ///
    /// Kept so token positions stay aligned with the wire array.
    ///
    /// # Examples
    /// ```text
    /// {"func": "tolower", "args": [...]}
    /// {"xpr": [...]}
    /// {"ref": []}
    /// 42
    /// ```
    Other,
}

impl Token {
    /// Reference to a single field.
    pub fn field(name: impl Into<String>) -> Self {
        Token::Reference(vec![name.into()])
    }

    pub fn op(op: impl Into<String>) -> Self {
        Token::Operator(op.into())
    }

    pub fn val(value: impl Into<Literal>) -> Self {
        Token::Value(value.into())
    }

    /// The field named by a reference token.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Token::Reference(path) => path.first().map(String::as_str),
            _ => None,
        }
    }

    /// Classify one wire element.
    ///
    /// A `ref` is checked before `val`, so an object carrying both is a
    /// reference.
    pub fn from_json(v: &serde_json::Value) -> Token {
        if let Some(path) = reference_path(v) {
            return Token::Reference(path);
        }

        match v {
            serde_json::Value::String(s) => Token::Operator(s.clone()),
            serde_json::Value::Object(obj) => obj
                .get("val")
                .and_then(Literal::from_json)
                .map(Token::Value)
                .unwrap_or(Token::Other),
            _ => Token::Other,
        }
    }
}

/// Path of a `ref` whose head is a string.
///
/// Tail segments that are not strings (infix filters like
/// `{"id": "name", "where": [...]}`) are left out.
fn reference_path(v: &serde_json::Value) -> Option<Vec<String>> {
    let (head, tail) = v.get("ref")?.as_array()?.split_first()?;
    let head = head.as_str()?.to_string();

    Some(
        std::iter::once(head)
            .chain(tail.iter().filter_map(|s| s.as_str().map(str::to_string)))
            .collect(),
    )
}

/// Errors raised while reading the JSON wire form.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("where clause must be a JSON array, got {0}")]
    NotAnArray(&'static str),
}

/// Convert a JSON `where` array into tokens.
///
/// Elements are never rejected individually; only a non-array top level is
/// an error.
///
/// # Examples
///
/// ```
/// use cqn_filter::{tokens_from_json, Token};
/// use serde_json::json;
///
/// let tokens = tokens_from_json(&json!([{"ref": ["age"]}, "=", {"val": 30}])).unwrap();
/// assert_eq!(tokens, vec![Token::field("age"), Token::op("="), Token::val(30)]);
/// ```
pub fn tokens_from_json(v: &serde_json::Value) -> Result<Vec<Token>, WireError> {
    match v {
        serde_json::Value::Array(items) => Ok(items.iter().map(Token::from_json).collect()),
        other => Err(WireError::NotAnArray(json_kind(other))),
    }
}

pub(crate) fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
