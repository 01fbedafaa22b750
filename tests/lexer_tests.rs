// Integration tests for the expression lexer and validator.

use exan_lexer::{tokenize, LexError, OpKind, TokenType};
use pretty_assertions::assert_eq;
use tests::{lexemes, tokens};

#[test]
fn tokenizes_the_full_alphabet() {
    let toks = tokens("a1+B-2*c/d^(e)");
    assert_eq!(lexemes(&toks), "a1+B-2*c/d^(e)");
    assert!(toks
        .iter()
        .all(|t| matches!(
            t.token_type,
            TokenType::Operand(_)
                | TokenType::Operator(_)
                | TokenType::LeftParen
                | TokenType::RightParen
        )));
}

#[test]
fn every_token_spans_one_character() {
    let toks = tokens("(a+b)*c");
    for (i, token) in toks.iter().enumerate() {
        assert_eq!(token.position, i);
    }
}

#[test]
fn whitespace_is_stripped_before_positions_are_assigned() {
    let toks = tokens("  a  +  b  ");
    assert_eq!(lexemes(&toks), "a+b");
    assert_eq!(toks[2].position, 2);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(tokenize(""), Err(LexError::EmptyExpression));
    assert_eq!(tokenize(" \t \n "), Err(LexError::EmptyExpression));
}

#[test]
fn invalid_characters_are_rejected_with_their_position() {
    assert_eq!(
        tokenize("a+b=c"),
        Err(LexError::InvalidCharacter {
            ch: '=',
            position: 3
        })
    );
    assert_eq!(
        tokenize("[a+b]"),
        Err(LexError::InvalidCharacter {
            ch: '[',
            position: 0
        })
    );
}

#[test]
fn operator_tokens_carry_their_precedence() {
    let toks = tokens("a+b*c^d");
    let precedences: Vec<u8> = toks.iter().filter_map(|t| t.precedence()).collect();
    assert_eq!(precedences, vec![1, 2, 3]);
}

#[test]
fn operator_kinds_match_their_characters() {
    let toks = tokens("+-*/^");
    let kinds: Vec<OpKind> = toks
        .iter()
        .filter_map(|t| match t.token_type {
            TokenType::Operator(op) => Some(op),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            OpKind::Plus,
            OpKind::Minus,
            OpKind::Star,
            OpKind::Slash,
            OpKind::Caret
        ]
    );
}
