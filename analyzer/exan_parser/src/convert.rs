//! Notation converters: infix and prefix expressions are both reduced
//! to a postfix token sequence, the canonical form the tree builder
//! consumes. Converted tokens keep their positions from the original
//! expression.

use exan_lexer::{Token, TokenType};
use log::debug;

use crate::error::ParseError;

fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.lexeme).collect()
}

/// Convert an infix token sequence to postfix (shunting-yard).
///
/// Malformed input is detected inline while scanning: empty parentheses,
/// adjacent operands, adjacent operators, dangling operators before `)`,
/// and unbalanced parentheses each fail with their position. A `-`
/// directly after another operator is allowed through without an
/// operand check; the gap surfaces later during tree building.
pub fn infix_to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let prev = (i > 0).then(|| &tokens[i - 1]);
        let next = tokens.get(i + 1);
        let next_is_closing = next.is_some_and(|n| n.token_type == TokenType::RightParen);

        if token.token_type == TokenType::LeftParen && next_is_closing {
            return Err(ParseError::EmptyParentheses {
                position: token.position,
            });
        }
        if token.is_operator() && next_is_closing {
            return Err(ParseError::DanglingOperatorBeforeParen {
                position: token.position,
            });
        }
        if token.token_type == TokenType::LeftParen && prev.is_some_and(|p| p.is_operand()) {
            return Err(ParseError::MissingOperatorBeforeParen {
                position: token.position,
            });
        }

        match token.token_type {
            TokenType::Operand(_) => {
                if let Some(p) = prev.filter(|p| p.is_operand()) {
                    return Err(ParseError::MissingOperator {
                        prev: p.lexeme,
                        current: token.lexeme,
                        position: token.position,
                    });
                }
                output.push(*token);
            }
            TokenType::LeftParen => stack.push(*token),
            TokenType::RightParen => loop {
                match stack.pop() {
                    Some(top) if top.token_type == TokenType::LeftParen => break,
                    Some(top) => output.push(top),
                    None => {
                        return Err(ParseError::UnmatchedClosingParen {
                            position: token.position,
                        })
                    }
                }
            },
            TokenType::Operator(op) => {
                // `-` after another operator is tolerated here; see the
                // function-level note.
                if let Some(p) = prev.filter(|p| p.is_operator()) {
                    if token.lexeme != '-' {
                        return Err(ParseError::MissingOperand {
                            prev: p.lexeme,
                            current: token.lexeme,
                        });
                    }
                }
                // The `<=` comparison pops equal precedence left to
                // right, so every operator including `^` associates
                // left.
                while let Some(&top) = stack.last() {
                    let pops = matches!(
                        top.token_type,
                        TokenType::Operator(top_op) if op.precedence() <= top_op.precedence()
                    );
                    if !pops {
                        break;
                    }
                    stack.pop();
                    output.push(top);
                }
                stack.push(*token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.token_type == TokenType::LeftParen {
            return Err(ParseError::UnmatchedOpeningParen);
        }
        output.push(top);
    }

    debug!("infix {:?} converted to postfix {:?}", render(tokens), render(&output));
    Ok(output)
}

/// Convert a prefix token sequence to postfix.
///
/// Scans right to left, pushing operands and reducing each operator with
/// the two most recent stack entries. Parenthesis tokens are skipped.
pub fn prefix_to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut stack: Vec<Vec<Token>> = Vec::new();

    for token in tokens.iter().rev() {
        match token.token_type {
            TokenType::Operand(_) => stack.push(vec![*token]),
            TokenType::Operator(_) => match (stack.pop(), stack.pop()) {
                (Some(mut first), Some(second)) => {
                    first.extend(second);
                    first.push(*token);
                    stack.push(first);
                }
                _ => {
                    return Err(ParseError::InsufficientOperands {
                        op: token.lexeme,
                        position: Some(token.position),
                    })
                }
            },
            TokenType::LeftParen | TokenType::RightParen => {}
        }
    }

    let mut results = stack.into_iter();
    match (results.next(), results.next()) {
        (Some(output), None) => {
            debug!("prefix {:?} converted to postfix {:?}", render(tokens), render(&output));
            Ok(output)
        }
        _ => Err(ParseError::UnbalancedExpression),
    }
}
