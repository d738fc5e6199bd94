// SPDX-License-Identifier: MIT

//! Typed form of a parsed `WHERE` clause

/// One parsed predicate: `field op literal`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub op: CompareOp,
    pub literal: Literal,
}

impl Condition {
    pub fn new(field: impl Into<String>, op: CompareOp, literal: Literal) -> Self {
        Self {
            field: field.into(),
            op,
            literal,
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// =
    Eq,
    /// !=
    NotEq,
    /// >
    Gt,
    /// >=
    Gte,
    /// <
    Lt,
    /// <=
    Lte,
}

impl CompareOp {
    /// Operator tokens, longest first so `<=` is never read as `<`
    pub const TOKENS: [(&'static str, CompareOp); 6] = [
        ("!=", CompareOp::NotEq),
        ("<=", CompareOp::Lte),
        (">=", CompareOp::Gte),
        ("=", CompareOp::Eq),
        ("<", CompareOp::Lt),
        (">", CompareOp::Gt),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        }
    }
}

/// Literal on the right-hand side of a predicate.
///
/// The type is decided once at parse time: quoted text is always a
/// `String`, bare text is a `Number` when it reads as a decimal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Literal {
    pub fn string(s: impl Into<String>) -> Self {
        Literal::String(s.into())
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "'{}'", s),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_op_display() {
        assert_eq!(format!("{}", CompareOp::Eq), "=");
        assert_eq!(format!("{}", CompareOp::NotEq), "!=");
        assert_eq!(format!("{}", CompareOp::Gt), ">");
        assert_eq!(format!("{}", CompareOp::Gte), ">=");
        assert_eq!(format!("{}", CompareOp::Lt), "<");
        assert_eq!(format!("{}", CompareOp::Lte), "<=");
    }

    #[test]
    fn test_tokens_are_longest_first() {
        for (i, (token, _)) in CompareOp::TOKENS.iter().enumerate() {
            for (later, _) in &CompareOp::TOKENS[i + 1..] {
                assert!(!later.starts_with(token), "{} shadows {}", token, later);
            }
        }
    }

    #[test]
    fn test_condition_display() {
        let cond = Condition::new("status", CompareOp::Gte, Literal::Number(4.0));
        assert_eq!(cond.to_string(), "status >= 4");

        let cond = Condition::new("group", CompareOp::NotEq, Literal::string("X"));
        assert_eq!(cond.to_string(), "group != 'X'");
    }
}
