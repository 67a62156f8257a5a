//! Parsed forms of CLDR plural relations.

use std::fmt;

use serde::Serialize;

use crate::types::{ModuloVar, Var};

/// Logical connector between two comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    And,
    Or,
}

/// Comparison kind of one relation clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Equals,
    NotEquals,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Equals => f.write_str("=="),
            Comparator::NotEquals => f.write_str("!="),
        }
    }
}

/// One element of a comma-separated right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeItem {
    /// A single integer: `5`.
    Value(u64),
    /// An inclusive integer range: `2..4`.
    Range { lo: u64, hi: u64 },
}

/// One comparison of a relation, with the connectors on either side of it.
///
/// `v = 0 and i % 10 = 2..4` parses into two ops: the first has no previous
/// connector and `And` as next, the second `And` as previous and none next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicOp {
    pub previous: Option<Connector>,
    pub left: Var,
    pub comparator: Comparator,
    pub right: Vec<RangeItem>,
    pub next: Option<Connector>,
}

/// A parsed relation: its comparisons in source order and the modulo
/// variables they reference, in first-seen order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub ops: Vec<LogicOp>,
    pub modulo_vars: Vec<ModuloVar>,
}

/// Sample values from a relation's `@integer` and `@decimal` clauses.
///
/// Values are kept as written (`"1.0"`, `"1c6"`) so that formatting
/// survives into generated fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampleSet {
    pub integers: Vec<String>,
    pub decimals: Vec<String>,
}

impl SampleSet {
    pub fn is_empty(&self) -> bool {
        self.integers.is_empty() && self.decimals.is_empty()
    }
}
