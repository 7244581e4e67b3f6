//! Translator output: a field-to-predicate mapping in the persistence layer's shape.
//!
//! A [`Filter`] renders to the JSON object passed as `where` to a
//! `findMany` call:
//!
//! ```text
//! { "age": { "gte": 18 }, "name": { "contains": "Al" }, "active": true }
//! ```
//!
//! Equality is written as the bare literal; every other predicate is a
//! single-key object. Keys are ordered by field name, so output is
//! deterministic.

use std::collections::BTreeMap;

use crate::operator::Operator;
use crate::value::Literal;

/// A single comparison instruction for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Plain equality, rendered as the literal itself
    Equals(Literal),
    /// `{ "not": value }`
    Not(Literal),
    /// `{ "contains": value }`
    Contains(Literal),
    /// `{ "gt": value }`
    Gt(Literal),
    /// `{ "lt": value }`
    Lt(Literal),
    /// `{ "gte": value }`
    Gte(Literal),
    /// `{ "lte": value }`
    Lte(Literal),
}

impl Predicate {
    pub fn new(op: Operator, operand: Literal) -> Self {
        match op {
            Operator::Equal => Predicate::Equals(operand),
            Operator::NotEqual => Predicate::Not(operand),
            Operator::Like => Predicate::Contains(operand),
            Operator::GreaterThan => Predicate::Gt(operand),
            Operator::LessThan => Predicate::Lt(operand),
            Operator::GreaterEqual => Predicate::Gte(operand),
            Operator::LessEqual => Predicate::Lte(operand),
        }
    }

    /// Key of the predicate object, `None` for plain equality.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Predicate::Equals(_) => None,
            Predicate::Not(_) => Some("not"),
            Predicate::Contains(_) => Some("contains"),
            Predicate::Gt(_) => Some("gt"),
            Predicate::Lt(_) => Some("lt"),
            Predicate::Gte(_) => Some("gte"),
            Predicate::Lte(_) => Some("lte"),
        }
    }

    pub fn operand(&self) -> &Literal {
        match self {
            Predicate::Equals(v)
            | Predicate::Not(v)
            | Predicate::Contains(v)
            | Predicate::Gt(v)
            | Predicate::Lt(v)
            | Predicate::Gte(v)
            | Predicate::Lte(v) => v,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let operand = self.operand().to_json();
        match self.key() {
            None => operand,
            Some(key) => {
                let mut obj = serde_json::Map::new();
                obj.insert(key.to_string(), operand);
                serde_json::Value::Object(obj)
            }
        }
    }
}

/// Field name to predicate mapping, at most one entry per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: BTreeMap<String, Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate for `field`, replacing any earlier one.
    ///
    /// Returns the replaced predicate.
    pub fn insert(&mut self, field: impl Into<String>, predicate: Predicate) -> Option<Predicate> {
        self.fields.insert(field.into(), predicate)
    }

    pub fn get(&self, field: &str) -> Option<&Predicate> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Entries in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(field, predicate)| (field.clone(), predicate.to_json()))
                .collect(),
        )
    }
}

impl From<Filter> for serde_json::Value {
    fn from(filter: Filter) -> Self {
        filter.to_json()
    }
}

impl<K: Into<String>> FromIterator<(K, Predicate)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, Predicate)>>(iter: I) -> Self {
        Filter {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
