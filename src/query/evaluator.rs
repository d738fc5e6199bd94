//! Condition evaluator
//!
//! A type mismatch is never an error. A numeric literal against text that
//! does not read as a number is false for every operator, including `!=`.
//! Any other pair of differing types is unequal: `!=` holds, `=` and the
//! ordering operators do not. A null field counts as absent.

use super::ast::{CompareOp, Condition, Literal};
use crate::store::Record;
use serde_json::Value;

/// True when the record satisfies every condition (short-circuits on the first miss)
pub fn evaluate_record(record: &Record, conditions: &[Condition]) -> bool {
    conditions
        .iter()
        .all(|c| evaluate_condition(record, &c.field, c.op, &c.literal))
}

/// Evaluate one `field op literal` against a record
pub fn evaluate_condition(record: &Record, field: &str, op: CompareOp, literal: &Literal) -> bool {
    let value = match record.get(field) {
        Some(Value::Null) | None => return false,
        Some(value) => value,
    };

    match (value, literal) {
        (Value::Number(n), Literal::Number(rn)) => {
            n.as_f64().map(|f| compare(f, *rn, op)).unwrap_or(false)
        }
        // Coerce text to a number, never the reverse
        (Value::String(s), Literal::Number(rn)) => coerce_number(s)
            .map(|f| compare(f, *rn, op))
            .unwrap_or(false),
        (Value::String(s), Literal::String(rs)) => compare(s.as_str(), rs.as_str(), op),
        _ => op == CompareOp::NotEq,
    }
}

/// Read record text as a finite float; exponents are accepted here
fn coerce_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn compare<T: PartialOrd>(left: T, right: T, op: CompareOp) -> bool {
    match op {
        CompareOp::Eq => left == right,
        CompareOp::NotEq => left != right,
        CompareOp::Gt => left > right,
        CompareOp::Gte => left >= right,
        CompareOp::Lt => left < right,
        CompareOp::Lte => left <= right,
    }
}
