//! Expression analysis for the exan analyzer: notation detection,
//! conversion to postfix, and binary-tree construction.
//!
//! [`analyze`] is the facade the display layer calls: it validates and
//! tokenizes the raw input, detects the notation from the endpoints,
//! converts the expression to postfix (an identity pass when it already
//! is postfix), and builds the expression tree. Every failure carries
//! one [`ParseError`] and aborts the whole analysis; no partial tree is
//! ever returned.

pub mod convert;
pub mod detect;
pub mod error;
pub mod tree;

pub use convert::{infix_to_postfix, prefix_to_postfix};
pub use detect::Notation;
pub use error::ParseError;
pub use tree::build_from_postfix;

use exan_ast::ExprNode;
use exan_lexer::Token;
use log::debug;

/// The outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The notation the input was written in.
    pub notation: Notation,
    /// The root of the expression tree.
    pub root: ExprNode,
}

/// Analyze one raw expression string.
///
/// Orchestrates validate → detect → convert → build. The returned tree
/// re-renders as any of the three notations via its traversal methods.
pub fn analyze(source: &str) -> Result<Analysis, ParseError> {
    let tokens = exan_lexer::tokenize(source)?;
    let notation = Notation::detect(&tokens).ok_or(ParseError::UnknownNotation)?;
    debug!("detected {notation} notation for {source:?}");

    let postfix: Vec<Token> = match notation {
        Notation::Postfix => tokens,
        Notation::Infix => infix_to_postfix(&tokens)?,
        Notation::Prefix => prefix_to_postfix(&tokens)?,
    };

    let root = build_from_postfix(&postfix)?;
    Ok(Analysis { notation, root })
}
