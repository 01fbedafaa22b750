//! Expression lexer built on the 'logos' crate.
//!
//! The raw scanner recognizes the full token alphabet of the analyzer:
//! single-character operands, the five operators, and parentheses.
//! Input is normalized (whitespace removed) before scanning, so token
//! spans are character indices into the normalized expression.

use logos::Logos;

use crate::error::LexError;
use crate::token::{OpKind, Token, TokenType};

/// Raw token type used by the logos scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    // Operands are ASCII letters and digits only.
    #[regex(r"[A-Za-z0-9]", |lex| lex.slice().chars().next())]
    Operand(char),
}

impl From<RawToken> for TokenType {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Plus => TokenType::Operator(OpKind::Plus),
            RawToken::Minus => TokenType::Operator(OpKind::Minus),
            RawToken::Star => TokenType::Operator(OpKind::Star),
            RawToken::Slash => TokenType::Operator(OpKind::Slash),
            RawToken::Caret => TokenType::Operator(OpKind::Caret),
            RawToken::LeftParen => TokenType::LeftParen,
            RawToken::RightParen => TokenType::RightParen,
            RawToken::Operand(c) => TokenType::Operand(c),
        }
    }
}

/// Strip every whitespace character from the raw input.
pub fn normalize(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate and tokenize a raw expression string.
///
/// The input is normalized first; an expression that is empty after
/// normalization fails with [`LexError::EmptyExpression`], and the first
/// character outside the allowed alphabet fails with
/// [`LexError::InvalidCharacter`] carrying its position in the
/// normalized expression. On success every character becomes exactly one
/// token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let normalized = normalize(source);
    if normalized.is_empty() {
        return Err(LexError::EmptyExpression);
    }

    let mut tokens = Vec::with_capacity(normalized.len());
    let mut lexer = RawToken::lexer(&normalized);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => {
                let token_type = TokenType::from(raw);
                tokens.push(Token::new(token_type, token_type.as_char(), span.start));
            }
            Err(()) => {
                // All tokens before the failure are ASCII, so the byte
                // offset equals the character index.
                let ch = normalized[span.start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::InvalidCharacter {
                    ch,
                    position: span.start,
                });
            }
        }
    }

    #[cfg(feature = "logging")]
    log::trace!("tokenized {} characters from {:?}", tokens.len(), source);

    Ok(tokens)
}
