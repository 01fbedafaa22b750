use exan_lexer::LexError;
use thiserror::Error;

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" at position {p}"),
        None => String::new(),
    }
}

/// Everything that can go wrong while analyzing an expression.
///
/// Positions are character indices into the normalized (whitespace-free)
/// expression. Every error aborts the analysis; nothing is retried and
/// no partial tree is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Validation failure from the lexer.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// `()` with nothing inside.
    #[error("empty parentheses '()' at position {position}")]
    EmptyParentheses { position: usize },

    /// An operand directly followed by `(`, e.g. `a(b+c)`.
    #[error("missing operator before parenthesis at position {position}")]
    MissingOperatorBeforeParen { position: usize },

    /// An operator directly followed by `)`, e.g. `(a+)`.
    #[error("missing operand after operator at position {position}")]
    DanglingOperatorBeforeParen { position: usize },

    /// A `)` with no matching `(` on the stack.
    #[error("missing opening parenthesis for ')' at position {position}")]
    UnmatchedClosingParen { position: usize },

    /// A `(` still on the stack when the scan ends.
    #[error("missing closing parenthesis")]
    UnmatchedOpeningParen,

    /// Two adjacent operators, e.g. `a+*b`.
    #[error("missing operand between '{prev}' and '{current}'")]
    MissingOperand { prev: char, current: char },

    /// Two adjacent operands, e.g. `ab`.
    #[error("missing operator between '{prev}' and '{current}' at position {position}")]
    MissingOperator {
        prev: char,
        current: char,
        position: usize,
    },

    /// An operator reached with fewer than two pending operands during
    /// prefix reduction or tree building.
    #[error("not enough operands for operator '{op}'{}", fmt_position(.position))]
    InsufficientOperands { op: char, position: Option<usize> },

    /// The reduction stack did not collapse to exactly one result.
    #[error("unbalanced expression: operators and operands do not reduce to a single result")]
    UnbalancedExpression,

    /// Internal fallback; detection over validated input is total, so
    /// this should be unreachable.
    #[error("could not determine the expression notation")]
    UnknownNotation,
}
