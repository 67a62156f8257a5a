//! Parsing of CLDR plural relations.
//!
//! A relation such as `v = 0 and i % 10 = 2..4 @integer 2~4` has two parts:
//! the condition before the first `@`, parsed by [`parse_relation`] into
//! [`LogicOp`]s, and the sample clauses after it, extracted by
//! [`parse_samples`].

pub mod ast;
pub mod error;
mod lexer;
mod relation;
mod samples;

pub use ast::{Comparator, Connector, LogicOp, RangeItem, Relation, SampleSet};
pub use error::ParseError;
pub use relation::parse_relation;
pub use samples::parse_samples;
