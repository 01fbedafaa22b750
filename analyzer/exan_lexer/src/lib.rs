//! Tokenizer and validator for single-character arithmetic expressions.
//!
//! The analyzer works on expressions where every operand is a single
//! letter or digit and the only operators are `+ - * / ^` plus
//! parentheses. This crate turns raw user input into a validated token
//! sequence: whitespace is stripped, empty input is rejected, and any
//! character outside the allowed alphabet fails with its position.

pub mod error;
pub mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::{normalize, tokenize};
pub use token::{OpKind, Token, TokenType};
