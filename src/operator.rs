/// Comparison operators recognized in a filter triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal (`=`, `eq`)
    Equal,
    /// Not equal (`!=`, `ne`)
    NotEqual,
    /// Substring match (`like`)
    Like,
    /// Greater than (`gt`)
    GreaterThan,
    /// Less than (`lt`)
    LessThan,
    /// Greater than or equal (`ge`)
    GreaterEqual,
    /// Less than or equal (`le`)
    LessEqual,
}

impl Operator {
    /// Look up an operator token, ignoring case.
    ///
    /// ```
    /// use cqn_filter::Operator;
    ///
    /// assert_eq!(Operator::parse("EQ"), Some(Operator::Equal));
    /// assert_eq!(Operator::parse("!="), Some(Operator::NotEqual));
    /// assert_eq!(Operator::parse("between"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Operator> {
        match token.to_lowercase().as_str() {
            "=" | "eq" => Some(Operator::Equal),
            "!=" | "ne" => Some(Operator::NotEqual),
            "like" => Some(Operator::Like),
            "gt" => Some(Operator::GreaterThan),
            "lt" => Some(Operator::LessThan),
            "ge" => Some(Operator::GreaterEqual),
            "le" => Some(Operator::LessEqual),
            _ => None,
        }
    }
}
