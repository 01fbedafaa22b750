//! Shared helpers for the integration suite.

use exan_lexer::Token;

/// Tokenize an expression that the test expects to be lexically valid.
pub fn tokens(source: &str) -> Vec<Token> {
    exan_lexer::tokenize(source).expect("test expression must tokenize")
}

/// Render a token sequence back to its lexeme string.
pub fn lexemes(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.lexeme).collect()
}
