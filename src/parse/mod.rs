mod error;
pub(crate) mod grammar;
mod scanner;

pub use error::ParseError;
pub use grammar::is_range_query;
pub use scanner::has_matching_outer_parens;

use crate::Condition;

/// Parse a condition string such as `"(width >= 600vp) and (orientation: landscape)"`.
///
/// Returns `None` for any malformed input; callers treat that as a query that
/// never matches. Use [`try_parse()`] to learn why a string was rejected.
#[must_use]
pub fn parse(text: &str) -> Option<Condition> {
    try_parse(text).ok()
}

/// Parse a condition string, reporting why it was rejected.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is empty, has unbalanced parentheses,
/// contains a leaf that is not `name OP value`, or uses range syntax.
pub fn try_parse(text: &str) -> Result<Condition, ParseError> {
    let result = if scanner::is_balanced(text) {
        grammar::condition(text, 0)
    } else {
        Err(ParseError::UnbalancedParens)
    };
    if let Err(err) = &result {
        tracing::debug!(query = text, error = %err, "rejected media query");
    }
    result
}
