use std::fmt;

use super::condition::Condition;
use super::context::MediaContext;
use crate::evaluate::Evaluator;
use crate::parse::ParseError;

/// A condition string parsed once and matched many times.
///
/// Malformed text is kept rather than rejected: such a query simply never
/// matches. Use [`MediaQuery::try_new`] to reject it up front instead.
///
/// # Example
///
/// ```
/// use mediaq::{MediaContext, MediaQuery, Orientation};
///
/// let wide = MediaQuery::new("(width >= 840vp), (orientation: landscape)");
/// let ctx = MediaContext::new(600.0, 400.0).with_orientation(Orientation::Landscape);
/// assert!(wide.matches(&ctx));
///
/// let broken = MediaQuery::new("(width >= ");
/// assert!(!broken.is_valid());
/// assert!(!broken.matches(&ctx));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    source: String,
    condition: Option<Condition>,
}

impl MediaQuery {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            source: text.to_owned(),
            condition: crate::parse(text),
        }
    }

    /// # Errors
    ///
    /// Returns [`ParseError`] if `text` is not a valid condition.
    pub fn try_new(text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            source: text.to_owned(),
            condition: Some(crate::try_parse(text)?),
        })
    }

    /// The text this query was created from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed condition, or `None` if the text did not parse.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.condition.is_some()
    }

    #[must_use]
    pub fn matches(&self, ctx: &MediaContext) -> bool {
        self.matches_with(&Evaluator::default(), ctx)
    }

    #[must_use]
    pub fn matches_with(&self, evaluator: &Evaluator, ctx: &MediaContext) -> bool {
        self.condition
            .as_ref()
            .is_some_and(|cond| evaluator.evaluate(cond, ctx))
    }
}

impl From<Condition> for MediaQuery {
    fn from(condition: Condition) -> Self {
        Self {
            source: condition.to_string(),
            condition: Some(condition),
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
