use thiserror::Error;

/// Errors produced while validating and tokenizing raw input.
///
/// Positions are character indices into the normalized (whitespace-free)
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// Nothing was left after stripping whitespace.
    #[error("expression is empty")]
    EmptyExpression,

    /// A character outside the operand/operator/parenthesis alphabet.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}
