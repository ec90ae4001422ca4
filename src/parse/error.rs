use thiserror::Error;

/// Why a condition string was rejected.
///
/// [`parse()`](crate::parse()) folds every variant into `None`; the variants
/// only surface through [`try_parse()`](crate::try_parse()) and
/// [`Condition::from_str`](std::str::FromStr).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty condition")]
    Empty,

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("missing operand for '{operator}'")]
    MissingOperand { operator: &'static str },

    #[error("invalid feature '{text}'")]
    InvalidFeature { text: String },

    #[error("unknown operator '{operator}'")]
    UnknownOperator { operator: String },

    #[error("range syntax is not supported: '{text}'")]
    UnsupportedRangeQuery { text: String },

    #[error("condition nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}
