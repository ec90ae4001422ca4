use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::parse::ParseError;

/// Operator token of a feature leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureOp {
    Gte,
    Lte,
    Gt,
    Lt,
    /// The `:` form, e.g. `(orientation: landscape)`. Means equality for
    /// plain numeric features.
    Colon,
}

impl FeatureOp {
    /// Match an exact operator token. Returns `None` for anything that is
    /// not one of `>=`, `<=`, `>`, `<`, `:`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">=" => Some(FeatureOp::Gte),
            "<=" => Some(FeatureOp::Lte),
            ">" => Some(FeatureOp::Gt),
            "<" => Some(FeatureOp::Lt),
            ":" => Some(FeatureOp::Colon),
            _ => None,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            FeatureOp::Gte => ">=",
            FeatureOp::Lte => "<=",
            FeatureOp::Gt => ">",
            FeatureOp::Lt => "<",
            FeatureOp::Colon => ":",
        }
    }
}

/// Parsed media-query condition.
///
/// Built once by the parser and read any number of times by the evaluator.
/// Feature values keep their raw text (unit suffix included); they are only
/// interpreted at evaluation time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Feature {
        name: String,
        op: FeatureOp,
        value: String,
    },
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    Not(Box<Condition>),
}

impl fmt::Display for FeatureOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Renders canonical query text. Every non-leaf operand is parenthesized so
/// the output parses back into the same tree.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Feature {
                name,
                op: FeatureOp::Colon,
                value,
            } => write!(f, "({name}: {value})"),
            // `not >= 1` would read as a negation once the parens are stripped
            Condition::Feature { name, op, value } if name == "not" => {
                write!(f, "({name}{op} {value})")
            }
            Condition::Feature { name, op, value } => write!(f, "({name} {op} {value})"),
            Condition::And(a, b) => write!(f, "{} and {}", Operand(a), Operand(b)),
            Condition::Or(a, b) => write!(f, "{} or {}", Operand(a), Operand(b)),
            Condition::Not(inner) => write!(f, "not {}", Operand(inner)),
        }
    }
}

struct Operand<'a>(&'a Condition);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Condition::Feature { .. } => write!(f, "{}", self.0),
            _ => write!(f, "({})", self.0),
        }
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::try_parse(s)
    }
}

impl Condition {
    #[must_use]
    pub fn and(self, other: Condition) -> Condition {
        Condition::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: Condition) -> Condition {
        Condition::Or(Box::new(self), Box::new(other))
    }

    /// Number of feature leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Condition::Feature { .. } => 1,
            Condition::And(a, b) | Condition::Or(a, b) => a.leaf_count() + b.leaf_count(),
            Condition::Not(inner) => inner.leaf_count(),
        }
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::Not(Box::new(self))
    }
}

/// Intermediate builder for feature leaves.
/// Created by [`feature()`]; requires an operator method to produce a [`Condition`].
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    name: String,
}

impl FeatureBuilder {
    fn with_op(self, op: FeatureOp, value: impl Into<String>) -> Condition {
        Condition::Feature {
            name: self.name,
            op,
            value: value.into(),
        }
    }

    /// The `:` form.
    #[must_use]
    pub fn is(self, value: impl Into<String>) -> Condition {
        self.with_op(FeatureOp::Colon, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<String>) -> Condition {
        self.with_op(FeatureOp::Gte, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<String>) -> Condition {
        self.with_op(FeatureOp::Lte, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<String>) -> Condition {
        self.with_op(FeatureOp::Gt, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<String>) -> Condition {
        self.with_op(FeatureOp::Lt, value)
    }
}

#[must_use]
pub fn feature(name: &str) -> FeatureBuilder {
    FeatureBuilder {
        name: name.to_owned(),
    }
}
