//! Parser over the relation token stream.
//!
//! Grammar (CLDR TR35 plural rule syntax, restricted to what the compiler
//! understands):
//!
//! ```text
//! relation  = comparison (connector comparison)*
//! comparison = operand ('%' number)? ('=' | '!=') item (',' item)*
//! item      = number ('..' number)?
//! connector = 'and' | 'or'
//! ```

use super::ast::{Comparator, Connector, LogicOp, RangeItem, Relation};
use super::error::ParseError;
use super::lexer::{Token, TokenKind, condition_text, tokenize};
use crate::types::{ModuloVar, Operand, Var};

/// Parses the condition part of a CLDR relation.
///
/// Sample clauses (`@integer ...`, `@decimal ...`) are ignored; see
/// [`parse_samples`](super::parse_samples) for those.
///
/// ```
/// use cldr_plural::parser::{Comparator, Connector, parse_relation};
///
/// let relation = parse_relation("v = 0 and i % 10 = 2..4 @integer 2~4").unwrap();
/// assert_eq!(relation.ops.len(), 2);
/// assert_eq!(relation.ops[0].next, Some(Connector::And));
/// assert_eq!(relation.ops[1].comparator, Comparator::Equals);
/// assert_eq!(relation.modulo_vars[0].name(), "i10");
/// ```
pub fn parse_relation(relation: &str) -> Result<Relation, ParseError> {
    let tokens = tokenize(relation)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyRelation {
            relation: relation.to_string(),
        });
    }

    let mut cursor = Cursor {
        relation,
        tokens,
        pos: 0,
        end_column: condition_text(relation).trim_end().len() + 1,
    };
    let mut ops = Vec::new();
    let mut modulo_vars: Vec<ModuloVar> = Vec::new();
    let mut previous = None;

    loop {
        let left = cursor.left_operand()?;
        if let Var::Modulo(var) = left {
            if !modulo_vars.contains(&var) {
                modulo_vars.push(var);
            }
        }

        let comparator = cursor.comparator()?;
        let right = cursor.items()?;
        let next = cursor.connector()?;

        ops.push(LogicOp {
            previous,
            left,
            comparator,
            right,
            next,
        });

        match next {
            Some(connector) => previous = Some(connector),
            None => break,
        }
    }

    Ok(Relation { ops, modulo_vars })
}

struct Cursor<'a> {
    relation: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
    end_column: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        if self.peek()?.kind == kind {
            self.advance()
        } else {
            None
        }
    }

    /// Column of the current token, or one past the last token at the end.
    fn column(&self) -> usize {
        self.peek().map_or(self.end_column, |t| t.column)
    }

    fn current_text(&self) -> String {
        self.peek().map(|t| t.text.to_string()).unwrap_or_default()
    }

    fn syntax(&self, message: impl Into<String>) -> ParseError {
        ParseError::Syntax {
            relation: self.relation.to_string(),
            column: self.column(),
            message: message.into(),
        }
    }

    fn invalid_range(&self, column: usize, token: String) -> ParseError {
        ParseError::InvalidRange {
            relation: self.relation.to_string(),
            column,
            token,
        }
    }

    fn left_operand(&mut self) -> Result<Var, ParseError> {
        let Some(word) = self.eat(TokenKind::Word) else {
            return Err(self.syntax(match self.peek() {
                Some(token) => format!("expected an operand, found '{}'", token.text),
                None => "expected an operand".to_string(),
            }));
        };

        let mut chars = word.text.chars();
        let operand = match (chars.next(), chars.next()) {
            (Some(c), None) => Operand::from_cldr(c),
            _ => None,
        };
        let Some(operand) = operand else {
            return Err(ParseError::UnknownOperand {
                relation: self.relation.to_string(),
                column: word.column,
                token: word.text.to_string(),
            });
        };

        if self.eat(TokenKind::Percent).is_none() {
            return Ok(Var::Operand(operand));
        }

        let relation = self.relation;
        let invalid_modulus = |column, token: &str| ParseError::InvalidModulus {
            relation: relation.to_string(),
            column,
            token: token.to_string(),
        };
        let Some(number) = self.eat(TokenKind::Number) else {
            return Err(invalid_modulus(self.column(), &self.current_text()));
        };
        match number.text.parse::<u64>() {
            Ok(modulus) if modulus > 0 => Ok(Var::Modulo(ModuloVar::new(operand, modulus))),
            _ => Err(invalid_modulus(number.column, number.text)),
        }
    }

    fn comparator(&mut self) -> Result<Comparator, ParseError> {
        if self.eat(TokenKind::Equals).is_some() {
            Ok(Comparator::Equals)
        } else if self.eat(TokenKind::NotEquals).is_some() {
            Ok(Comparator::NotEquals)
        } else {
            Err(self.syntax("expected '=' or '!='"))
        }
    }

    fn items(&mut self) -> Result<Vec<RangeItem>, ParseError> {
        let mut items = vec![self.item()?];
        while self.eat(TokenKind::Comma).is_some() {
            items.push(self.item()?);
        }
        Ok(items)
    }

    fn item(&mut self) -> Result<RangeItem, ParseError> {
        let column = self.column();
        let lo = self.number()?;

        if self.eat(TokenKind::DotDot).is_none() {
            return Ok(RangeItem::Value(lo));
        }

        let hi = self.number()?;
        if lo > hi {
            return Err(self.invalid_range(column, format!("{lo}..{hi}")));
        }
        Ok(RangeItem::Range { lo, hi })
    }

    fn number(&mut self) -> Result<u64, ParseError> {
        let Some(token) = self.eat(TokenKind::Number) else {
            return Err(self.invalid_range(self.column(), self.current_text()));
        };
        token
            .text
            .parse()
            .map_err(|_| self.invalid_range(token.column, token.text.to_string()))
    }

    fn connector(&mut self) -> Result<Option<Connector>, ParseError> {
        let connector = match self.peek().map(|t| t.kind) {
            None => return Ok(None),
            Some(TokenKind::And) => Connector::And,
            Some(TokenKind::Or) => Connector::Or,
            Some(_) => {
                return Err(self.syntax(format!(
                    "expected 'and', 'or' or the end of the relation, found '{}'",
                    self.current_text()
                )));
            }
        };
        self.advance();

        if self.peek().is_none() {
            return Err(self.syntax(format!("dangling '{}'", connector_text(connector))));
        }
        Ok(Some(connector))
    }
}

fn connector_text(connector: Connector) -> &'static str {
    match connector {
        Connector::And => "and",
        Connector::Or => "or",
    }
}
