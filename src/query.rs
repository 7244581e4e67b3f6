//! Read-request extraction.
//!
//! The request framework hands read operations over as query-notation
//! objects:
//!
//! ```text
//! { "SELECT": { "from": { "ref": ["CatalogService.Users"] },
//!               "where": [ {"ref": ["age"]}, "gt", {"val": 18} ] } }
//! ```
//!
//! Only `SELECT.where` matters here. A query without one means "no filter":
//! the translator is not called and the persistence call gets no `where`.
//! A `null`, `false`, `0` or `""` where clause counts as absent too.

use crate::token::{Token, WireError, tokens_from_json};
use crate::translator::{Translation, translate_with_diagnostics};

/// The `SELECT.where` tokens of a read query, `None` when there is no filter.
pub fn where_tokens(query: &serde_json::Value) -> Option<Result<Vec<Token>, WireError>> {
    let clause = query.get("SELECT")?.get("where")?;
    if is_blank(clause) {
        return None;
    }
    Some(tokens_from_json(clause))
}

fn is_blank(v: &serde_json::Value) -> bool {
    match v {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
    }
}

/// Persistence model name for a qualified entity name.
///
/// ```
/// use cqn_filter::query::model_name;
///
/// assert_eq!(model_name("CatalogService.Users").as_deref(), Some("users"));
/// assert_eq!(model_name("Orders").as_deref(), Some("orders"));
/// assert_eq!(model_name("CatalogService."), None);
/// ```
pub fn model_name(entity: &str) -> Option<String> {
    entity
        .rsplit('.')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_lowercase)
}

/// Entity name from `SELECT.from.ref[0]`, if the query names one.
pub fn entity_name(query: &serde_json::Value) -> Option<&str> {
    query
        .get("SELECT")?
        .get("from")?
        .get("ref")?
        .get(0)?
        .as_str()
}

/// A read request reduced to what the persistence call needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadRequest {
    /// Target model, when an entity name was available
    pub model: Option<String>,
    /// `None` when the query carried no where clause
    pub translation: Option<Translation>,
}

impl ReadRequest {
    /// Build from a query, with an optional entity name overriding `SELECT.from`.
    pub fn from_query(
        query: &serde_json::Value,
        entity: Option<&str>,
    ) -> Result<ReadRequest, WireError> {
        let model = entity.or_else(|| entity_name(query)).and_then(model_name);

        let translation = match where_tokens(query) {
            Some(tokens) => Some(translate_with_diagnostics(&tokens?)),
            None => None,
        };

        Ok(ReadRequest { model, translation })
    }

    /// The `findMany` argument object: `{"where": ...}`, or `{}` without a filter.
    pub fn find_many_args(&self) -> serde_json::Value {
        let mut args = serde_json::Map::new();
        if let Some(translation) = &self.translation {
            args.insert("where".to_string(), translation.filter.to_json());
        }
        serde_json::Value::Object(args)
    }
}

/// Shortcut for [`ReadRequest::find_many_args`] straight from a query.
///
/// ```
/// use cqn_filter::query::find_many_args;
/// use serde_json::json;
///
/// let query = json!({"SELECT": {"where": [{"ref": ["id"]}, "=", {"val": 7}]}});
/// assert_eq!(find_many_args(&query).unwrap(), json!({"where": {"id": 7}}));
///
/// let unfiltered = json!({"SELECT": {"from": {"ref": ["Users"]}}});
/// assert_eq!(find_many_args(&unfiltered).unwrap(), json!({}));
/// ```
pub fn find_many_args(query: &serde_json::Value) -> Result<serde_json::Value, WireError> {
    Ok(ReadRequest::from_query(query, None)?.find_many_args())
}
