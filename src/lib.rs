pub mod cli;
pub mod filter;
pub mod operator;
pub mod query;
pub mod token;
pub mod translator;
pub mod value;

pub use filter::{Filter, Predicate};
pub use operator::Operator;
pub use query::{ReadRequest, find_many_args};
pub use token::{Token, WireError, tokens_from_json};
pub use translator::{
    SkipReason, Skipped, TranslateError, Translation, Translator, translate, translate_strict,
    translate_with_diagnostics,
};
pub use value::Literal;
