/// A literal operand carried by a value token and by the predicates built from it.
///
/// Only scalar JSON values are literals. Integers and floats are kept apart
/// (unlike JSON, which only has "number") so that a filter on `30` is handed
/// to the persistence layer as `30` and not `30.0`.
///
/// # Null
///
/// `Null` is a real payload: `{"val": null}` is a valid value token and
/// produces `field = null`. A *missing* payload is not representable here;
/// such wire elements never become value tokens at all.
///
/// # Examples
///
/// ```
/// use cqn_filter::Literal;
///
/// let age = Literal::Integer(30);
/// let name = Literal::from("Alice");
///
/// assert_eq!(age.to_json(), serde_json::json!(30));
/// assert_eq!(name, Literal::String("Alice".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),
}

impl Literal {
    /// Convert a scalar JSON value into a literal.
    ///
    /// Arrays and objects return `None`.
    pub fn from_json(v: &serde_json::Value) -> Option<Literal> {
        match v {
            serde_json::Value::Null => Some(Literal::Null),
            serde_json::Value::Bool(b) => Some(Literal::Boolean(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Literal::Integer(i))
                } else {
                    // u64 above i64::MAX lands here too
                    n.as_f64().map(Literal::Float)
                }
            }
            serde_json::Value::String(s) => Some(Literal::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    /// Convert back to a JSON value.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Literal::Null => serde_json::Value::Null,
            Literal::Boolean(b) => serde_json::Value::Bool(*b),
            Literal::Integer(i) => serde_json::Value::Number((*i).into()),
            Literal::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Literal::String(s) => serde_json::Value::String(s.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Integer(n.into())
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{:?}", s),
        }
    }
}
