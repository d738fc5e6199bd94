//! `WHERE` clause parser
//!
//! Parses queries like:
//! - `WHERE status = 4`
//! - `WHERE name != 'Vessel 1'`
//! - `WHERE status >= 3 AND group = "X"`
//!
//! Predicates are split on the standalone word `AND`. The split is textual,
//! so a quoted value containing ` AND ` as its own word is cut in two.

use super::ast::{CompareOp, Condition, Literal};
use crate::error::QueryError;

const KEYWORD: &str = "WHERE";
const CONJUNCTION: &str = "AND";

/// Opening and closing quote characters accepted around a string literal
const QUOTE_PAIRS: [(char, char); 4] = [
    ('\'', '\''),
    ('"', '"'),
    ('\u{2018}', '\u{2019}'),
    ('\u{201C}', '\u{201D}'),
];

/// Parse a full query string into its conditions.
///
/// Fails fast: if any predicate is invalid, the whole query is rejected.
pub fn parse_query(input: &str) -> Result<Vec<Condition>, QueryError> {
    let input = input.trim();

    let rest = strip_keyword(input)
        .ok_or_else(|| QueryError::invalid_query("Query must start with 'WHERE'"))?;

    let rest = rest.trim();
    if rest.is_empty() {
        return Err(QueryError::invalid_query("No conditions after WHERE"));
    }

    split_conditions(rest)
        .into_iter()
        .map(parse_condition)
        .collect()
}

fn strip_keyword(input: &str) -> Option<&str> {
    let head = input.get(..KEYWORD.len())?;
    if !head.eq_ignore_ascii_case(KEYWORD) {
        return None;
    }

    let rest = &input[KEYWORD.len()..];
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

/// Split on `AND` (any case) surrounded by whitespace, trimming each part.
pub fn split_conditions(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut chars = input.char_indices().peekable();

    while let Some((gap_start, c)) = chars.next() {
        if !c.is_whitespace() {
            continue;
        }
        while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}

        let word_start = match chars.peek() {
            Some(&(i, _)) => i,
            None => break,
        };

        if let Some(tail) = strip_conjunction(&input[word_start..]) {
            parts.push(input[start..gap_start].trim());
            start = input.len() - tail.trim_start().len();
            while chars.next_if(|&(i, _)| i < start).is_some() {}
        }
    }

    parts.push(input[start..].trim());
    parts
}

/// Text after a leading `AND` when it is followed by whitespace
fn strip_conjunction(input: &str) -> Option<&str> {
    let word = input.get(..CONJUNCTION.len())?;
    if !word.eq_ignore_ascii_case(CONJUNCTION) {
        return None;
    }

    let tail = &input[CONJUNCTION.len()..];
    tail.starts_with(|c: char| c.is_whitespace()).then_some(tail)
}

/// Parse a single `field OP value` predicate
pub fn parse_condition(input: &str) -> Result<Condition, QueryError> {
    let input = input.trim();

    let field_end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(input.len());
    if field_end == 0 {
        return Err(QueryError::invalid_condition(input));
    }
    let field = &input[..field_end];
    let rest = input[field_end..].trim_start();

    // Longest operator first
    let (op, value) = CompareOp::TOKENS
        .iter()
        .find_map(|(token, op)| rest.strip_prefix(token).map(|value| (*op, value)))
        .ok_or_else(|| QueryError::invalid_condition(input))?;

    let value = value.trim();
    if value.is_empty() {
        return Err(QueryError::invalid_condition(input));
    }

    Ok(Condition::new(field, op, parse_value(value)))
}

/// Type a literal: quoted text is a string, bare text a number if it reads as one
pub fn parse_value(input: &str) -> Literal {
    let input = input.trim();

    if let Some(inner) = strip_quotes(input) {
        return Literal::String(inner.to_string());
    }

    match parse_number(input) {
        Some(n) => Literal::Number(n),
        None => Literal::String(input.to_string()),
    }
}

fn strip_quotes(input: &str) -> Option<&str> {
    QUOTE_PAIRS
        .iter()
        .find_map(|&(open, close)| input.strip_prefix(open)?.strip_suffix(close))
}

/// Parse `[+-]?(digits[.digits] | .digits)`; anything else is not a number
fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    text.parse().ok()
}
