// SPDX-License-Identifier: MIT

//! `WHERE` clause parsing and evaluation
//!
//! Queries are a conjunction of simple predicates:
//! - `WHERE status = 4`
//! - `WHERE name != 'Vessel 1'`
//! - `WHERE status >= 3 AND group = 'X'`

mod ast;
mod evaluator;
mod parser;

pub use ast::{CompareOp, Condition, Literal};
pub use evaluator::{evaluate_condition, evaluate_record};
pub use parser::{parse_condition, parse_query, parse_value, split_conditions};
