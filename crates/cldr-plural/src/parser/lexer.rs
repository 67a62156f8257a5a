//! Relation tokenizer using winnow.
//!
//! Splits the condition part of a relation (everything before the first `@`)
//! into typed tokens. Whitespace is insignificant.

use winnow::ascii::{alpha1, digit1};
use winnow::combinator::alt;
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Alphabetic run that is not a keyword (an operand candidate).
    Word,
    /// Run of ASCII digits.
    Number,
    Percent,
    DotDot,
    Comma,
    Equals,
    NotEquals,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// 1-based column of the first character.
    pub column: usize,
}

/// The part of a relation that holds conditions; samples start at `@`.
pub(crate) fn condition_text(relation: &str) -> &str {
    relation.find('@').map_or(relation, |pos| &relation[..pos])
}

/// Tokenize the condition part of a relation.
pub(crate) fn tokenize(relation: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let body = condition_text(relation);
    let mut remaining = body;
    let mut tokens = Vec::new();

    loop {
        let _ = ws(&mut remaining);
        if remaining.is_empty() {
            return Ok(tokens);
        }

        let column = body.len() - remaining.len() + 1;
        let before = remaining;
        match token_kind(&mut remaining) {
            Ok(kind) => tokens.push(Token {
                kind,
                text: &before[..before.len() - remaining.len()],
                column,
            }),
            Err(_) => {
                return Err(ParseError::Syntax {
                    relation: relation.to_string(),
                    column,
                    message: format!(
                        "unexpected character '{}'",
                        before.chars().next().unwrap_or('?')
                    ),
                });
            }
        }
    }
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a single token.
fn token_kind(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        "..".value(TokenKind::DotDot),
        "!=".value(TokenKind::NotEquals),
        '='.value(TokenKind::Equals),
        '%'.value(TokenKind::Percent),
        ','.value(TokenKind::Comma),
        digit1.value(TokenKind::Number),
        alpha1.map(keyword),
    ))
    .parse_next(input)
}

fn keyword(word: &str) -> TokenKind {
    match word {
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        _ => TokenKind::Word,
    }
}
