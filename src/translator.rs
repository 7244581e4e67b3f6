//! The token-to-predicate translator.
//!
//! A single left-to-right scan over the token sequence. Every reference
//! token followed by an operator token and a value token forms a triple and
//! yields one filter entry; everything else is skipped. Translation never
//! fails: malformed fragments simply disappear from the output. Callers that
//! want to know what was dropped use [`translate_with_diagnostics`], or
//! [`translate_strict`] to turn the first drop into an error.

use tracing::{debug, trace};

use crate::filter::{Filter, Predicate};
use crate::operator::Operator;
use crate::token::Token;

/// Why a token did not contribute to the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Token reached by the scan is not a field reference
    ///
    /// Covers orphan operators and values, logical words like `and`, and
    /// unrecognized wire elements.
    NotAReference,

    /// Reference not followed by an operator token
    ///
    /// The following token is left unconsumed and examined on its own.
    MissingOperator,

    /// Reference and operator not followed by a value token
    MissingValue,

    /// Well-formed triple with an operator outside the vocabulary
    ///
    /// The triple is consumed.
    UnknownOperator(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAReference => write!(f, "not a field reference"),
            SkipReason::MissingOperator => write!(f, "field reference without an operator"),
            SkipReason::MissingValue => write!(f, "comparison without a value"),
            SkipReason::UnknownOperator(op) => write!(f, "unknown operator '{}'", op),
        }
    }
}

/// A dropped fragment, located by the index of the token that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub index: usize,
    pub reason: SkipReason,
}

impl std::fmt::Display for Skipped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "token {}: {}", self.index, self.reason)
    }
}

/// Raised by [`translate_strict`] for the first dropped fragment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslateError {
    #[error("invalid filter at {0}")]
    Rejected(Skipped),
}

/// Filter plus everything the scan dropped, in scan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    pub filter: Filter,
    pub skipped: Vec<Skipped>,
}

impl Translation {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Scan state for one translation.
pub struct Translator<'a> {
    tokens: &'a [Token],
    position: usize,
    output: Translation,
}

impl<'a> Translator<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Translator {
            tokens,
            position: 0,
            output: Translation::default(),
        }
    }

    pub fn run(mut self) -> Translation {
        while self.position < self.tokens.len() {
            self.step();
        }
        self.output
    }

    fn step(&mut self) {
        let tokens = self.tokens;
        let Some(field) = tokens[self.position].field_name() else {
            self.skip(SkipReason::NotAReference);
            self.position += 1;
            return;
        };

        let (op, operand) = match (self.peek(1), self.peek(2)) {
            (Some(Token::Operator(op)), Some(Token::Value(operand))) => (op, operand),
            (Some(Token::Operator(_)), _) => {
                self.skip(SkipReason::MissingValue);
                self.position += 1;
                return;
            }
            _ => {
                self.skip(SkipReason::MissingOperator);
                self.position += 1;
                return;
            }
        };

        match Operator::parse(op) {
            Some(op) => {
                let predicate = Predicate::new(op, operand.clone());
                trace!(field, ?predicate, "filter entry");
                // Last occurrence of a field wins.
                self.output.filter.insert(field, predicate);
            }
            None => self.skip(SkipReason::UnknownOperator(op.clone())),
        }
        self.position += 3;
    }

    fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + offset)
    }

    fn skip(&mut self, reason: SkipReason) {
        debug!(index = self.position, %reason, "skipping filter token");
        self.output.skipped.push(Skipped {
            index: self.position,
            reason,
        });
    }
}

/// Translate a token sequence into a filter, silently dropping anything malformed.
///
/// # Examples
///
/// ```
/// use cqn_filter::{translate, Token};
/// use serde_json::json;
///
/// let filter = translate(&[
///     Token::field("age"), Token::op("ge"), Token::val(18),
///     Token::op("and"),
///     Token::field("name"), Token::op("LIKE"), Token::val("Al"),
/// ]);
///
/// assert_eq!(filter.to_json(), json!({"age": {"gte": 18}, "name": {"contains": "Al"}}));
/// ```
pub fn translate(tokens: &[Token]) -> Filter {
    translate_with_diagnostics(tokens).filter
}

/// Translate and report every dropped fragment.
pub fn translate_with_diagnostics(tokens: &[Token]) -> Translation {
    Translator::new(tokens).run()
}

/// Translate, failing on the first fragment the permissive scan would drop.
///
/// Any token outside a recognized triple counts, so a clause joined with
/// `and`/`or` is rejected rather than silently flattened.
pub fn translate_strict(tokens: &[Token]) -> Result<Filter, TranslateError> {
    let translation = translate_with_diagnostics(tokens);
    match translation.skipped.into_iter().next() {
        Some(skipped) => Err(TranslateError::Rejected(skipped)),
        None => Ok(translation.filter),
    }
}
