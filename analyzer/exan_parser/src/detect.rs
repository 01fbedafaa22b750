use std::fmt;

use exan_lexer::Token;

/// The syntactic form of an expression: where operators sit relative to
/// their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Infix,
    Prefix,
    Postfix,
}

impl Notation {
    /// Classify an expression by its endpoints only.
    ///
    /// Last token an operator and first not: postfix. First an operator
    /// and last not: prefix. Everything else, including degenerate
    /// single-operand expressions and expressions with operators at both
    /// ends, defaults to infix. The heuristic never inspects the middle
    /// of the expression, and returns `None` only for an empty slice,
    /// which validated input never produces.
    pub fn detect(tokens: &[Token]) -> Option<Notation> {
        let first = tokens.first()?;
        let last = tokens.last()?;

        Some(if last.is_operator() && !first.is_operator() {
            Notation::Postfix
        } else if first.is_operator() && !last.is_operator() {
            Notation::Prefix
        } else {
            Notation::Infix
        })
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Notation::Infix => "infix",
            Notation::Prefix => "prefix",
            Notation::Postfix => "postfix",
        };
        write!(f, "{name}")
    }
}
