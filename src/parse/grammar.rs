use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{rest, take_while};

use crate::types::UnitError;
use crate::{Condition, FeatureOp};

use super::error::ParseError;
use super::scanner::{find_top_level, has_matching_outer_parens};

/// Deepest nesting (parenthesis groups, `not`, chain operands) accepted
/// before the parser gives up instead of recursing further. The number of
/// operands in a flat chain is not limited.
pub(crate) const MAX_DEPTH: usize = 256;

/// Binary split tokens, loosest first. The comma is the legacy spelling of
/// `or` and is always tried before the keyword.
const SPLITS: [(&str, &str, Combine); 3] = [
    (",", ",", Condition::or),
    (" or ", "or", Condition::or),
    (" and ", "and", Condition::and),
];

type Combine = fn(Condition, Condition) -> Condition;

// -- Boolean structure ------------------------------------------------------

pub(crate) fn condition(text: &str, depth: usize) -> Result<Condition, ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH });
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    if has_matching_outer_parens(text) {
        return condition(&text[1..text.len() - 1], depth + 1);
    }

    if let Some(inner) = text.strip_prefix("not ") {
        tracing::trace!(text, "negation");
        return condition(inner, depth + 1).map(|c| !c);
    }

    for (token, operator, combine) in SPLITS {
        if find_top_level(text, token).is_some() {
            return chain(text, token, operator, combine, depth);
        }
    }

    leaf(text)
}

/// Split `text` at every top-level `token` that the recursive rules would
/// reach, folding the operands into a right-nested tree. Only the operands
/// count toward the depth limit, not the length of the chain.
fn chain(
    text: &str,
    token: &str,
    operator: &'static str,
    combine: Combine,
    depth: usize,
) -> Result<Condition, ParseError> {
    let mut operands = Vec::new();
    let mut rest = text;
    while let Some(at) = continues_chain(rest, token) {
        let (left, right) = (&rest[..at], &rest[at + token.len()..]);
        if left.trim().is_empty() || right.trim().is_empty() {
            return Err(ParseError::MissingOperand { operator });
        }
        tracing::trace!(operator, at, "split condition");
        operands.push(condition(left, depth + 1)?);
        rest = right.trim();
    }
    let last = condition(rest, depth + 1)?;
    Ok(operands
        .into_iter()
        .rev()
        .fold(last, |acc, left| combine(left, acc)))
}

/// A remainder that is one group or a `not` form is an operand of its own.
fn continues_chain(rest: &str, token: &str) -> Option<usize> {
    if has_matching_outer_parens(rest) || rest.starts_with("not ") {
        return None;
    }
    find_top_level(rest, token)
}

// -- Feature leaves ---------------------------------------------------------

fn feature_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_lowercase() || c == '-').parse_next(input)
}

fn operator_run<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., ['<', '>', '=', ':']).parse_next(input)
}

fn feature_parts<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str, &'i str)> {
    let name = feature_name.parse_next(input)?;
    multispace0.parse_next(input)?;
    let op = operator_run.parse_next(input)?;
    multispace0.parse_next(input)?;
    let value = rest.parse_next(input)?;
    Ok((name, op, value.trim()))
}

fn leaf(text: &str) -> Result<Condition, ParseError> {
    let Ok((name, op, value)) = feature_parts.parse(text) else {
        if is_range_query(text) {
            return Err(ParseError::UnsupportedRangeQuery {
                text: text.to_owned(),
            });
        }
        return Err(ParseError::InvalidFeature {
            text: text.to_owned(),
        });
    };

    if value.is_empty() {
        return Err(ParseError::InvalidFeature {
            text: text.to_owned(),
        });
    }

    let op = FeatureOp::from_symbol(op).ok_or_else(|| ParseError::UnknownOperator {
        operator: op.to_owned(),
    })?;

    Ok(Condition::Feature {
        name: name.to_owned(),
        op,
        value: value.to_owned(),
    })
}

// -- Range syntax -----------------------------------------------------------

fn range_bound<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '.').parse_next(input)
}

fn range_query(input: &mut &str) -> ModalResult<()> {
    (
        range_bound,
        multispace0,
        operator_run,
        multispace0,
        feature_name,
        multispace0,
        operator_run,
        multispace0,
        range_bound,
    )
        .void()
        .parse_next(input)
}

/// Whether `text` has the `min <= feature < max` shape.
///
/// The shape is recognized so it can be reported, but it is not parsed into a
/// condition: both [`parse()`](crate::parse()) and
/// [`try_parse()`](crate::try_parse()) reject it.
#[must_use]
pub fn is_range_query(text: &str) -> bool {
    range_query.parse(text.trim()).is_ok()
}

// -- Unit literals ----------------------------------------------------------

fn number(input: &mut &str) -> ModalResult<f64> {
    alt(((digit1, opt(('.', digit1))).take(), ('.', digit1).take()))
        .try_map(|s: &str| s.parse::<f64>())
        .parse_next(input)
}

fn unit_literal<'i>(input: &mut &'i str) -> ModalResult<(f64, &'i str)> {
    let value = number.parse_next(input)?;
    let suffix = take_while(0.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    Ok((value, suffix))
}

/// Split `600vp` into its number and (possibly empty) unit suffix.
pub(crate) fn split_unit_literal(text: &str) -> Result<(f64, &str), UnitError> {
    let text = text.trim();
    unit_literal
        .parse(text)
        .map_err(|_| UnitError::InvalidNumber {
            text: text.to_owned(),
        })
}
