//! Parse error types for plural relations.

use thiserror::Error;

/// An error that occurred while parsing a relation or a quantity.
///
/// Relation errors carry the full relation text and the 1-based column of the
/// offending token so that callers can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unexpected token or character.
    #[error("syntax error at column {column} in '{relation}': {message}")]
    Syntax {
        relation: String,
        column: usize,
        message: String,
    },

    /// Left operand is not one of `n`, `i`, `v`, `w`, `f`, `t`.
    #[error("unknown operand '{token}' at column {column} in '{relation}'")]
    UnknownOperand {
        relation: String,
        column: usize,
        token: String,
    },

    /// The value after `%` is not a positive integer.
    #[error("invalid modulus '{token}' at column {column} in '{relation}'")]
    InvalidModulus {
        relation: String,
        column: usize,
        token: String,
    },

    /// A right-hand list item is not an integer or an ordered `lo..hi` range.
    #[error("invalid range '{token}' at column {column} in '{relation}'")]
    InvalidRange {
        relation: String,
        column: usize,
        token: String,
    },

    /// The relation has no condition before its sample clause.
    #[error("empty relation '{relation}'")]
    EmptyRelation { relation: String },

    /// A quantity literal is not a plain decimal number.
    #[error("invalid quantity '{input}'")]
    InvalidQuantity { input: String },
}

impl ParseError {
    /// The relation the error was found in, if any.
    pub fn relation(&self) -> Option<&str> {
        match self {
            ParseError::Syntax { relation, .. }
            | ParseError::UnknownOperand { relation, .. }
            | ParseError::InvalidModulus { relation, .. }
            | ParseError::InvalidRange { relation, .. }
            | ParseError::EmptyRelation { relation } => Some(relation),
            ParseError::InvalidQuantity { .. } => None,
        }
    }

    /// 1-based column of the offending token, if known.
    pub fn column(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { column, .. }
            | ParseError::UnknownOperand { column, .. }
            | ParseError::InvalidModulus { column, .. }
            | ParseError::InvalidRange { column, .. } => Some(*column),
            ParseError::EmptyRelation { .. } | ParseError::InvalidQuantity { .. } => None,
        }
    }
}
