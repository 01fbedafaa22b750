//! Builds the binary expression tree from a postfix token sequence.

use exan_ast::ExprNode;
use exan_lexer::{Token, TokenType};

use crate::error::ParseError;

/// Build an expression tree from postfix tokens.
///
/// Operands become leaves; each operator takes the two most recent
/// nodes, the first pop as its right child and the second as its left.
/// Parenthesis tokens are skipped. The scan must leave exactly one node
/// on the stack: the root.
pub fn build_from_postfix(tokens: &[Token]) -> Result<ExprNode, ParseError> {
    let mut stack: Vec<ExprNode> = Vec::new();

    for token in tokens {
        match token.token_type {
            TokenType::Operand(c) => stack.push(ExprNode::operand(c)),
            TokenType::Operator(op) => match (stack.pop(), stack.pop()) {
                (Some(right), Some(left)) => stack.push(ExprNode::binary(op, left, right)),
                _ => {
                    return Err(ParseError::InsufficientOperands {
                        op: token.lexeme,
                        position: None,
                    })
                }
            },
            TokenType::LeftParen | TokenType::RightParen => {}
        }
    }

    let mut nodes = stack.into_iter();
    match (nodes.next(), nodes.next()) {
        (Some(root), None) => Ok(root),
        _ => Err(ParseError::UnbalancedExpression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exan_lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn build(source: &str) -> Result<ExprNode, ParseError> {
        let tokens = tokenize(source).expect("valid characters");
        build_from_postfix(&tokens)
    }

    #[test]
    fn first_pop_becomes_the_right_child() {
        let root = build("ab-").unwrap();
        assert_eq!(root.to_infix(), "(a-b)");
        assert_eq!(root.to_prefix(), "-ab");
    }

    #[test]
    fn nested_operators_build_nested_trees() {
        let root = build("ab+c*").unwrap();
        assert_eq!(root.to_infix(), "((a+b)*c)");
        assert_eq!(root.to_postfix(), "ab+c*");
    }

    #[test]
    fn single_operand_is_its_own_root() {
        let root = build("x").unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.label(), 'x');
    }

    #[test]
    fn operator_without_operands_is_rejected() {
        assert_eq!(
            build("a+"),
            Err(ParseError::InsufficientOperands {
                op: '+',
                position: None
            })
        );
    }

    #[test]
    fn leftover_operands_are_rejected() {
        assert_eq!(build("ab"), Err(ParseError::UnbalancedExpression));
        assert_eq!(build("abc+"), Err(ParseError::UnbalancedExpression));
    }
}
