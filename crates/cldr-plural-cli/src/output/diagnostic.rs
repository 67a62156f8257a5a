//! Miette diagnostics for relation parse errors and compile failures.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use cldr_plural::{CompileError, ParseError};
use miette::{Diagnostic, NamedSource, Report, SourceSpan, miette};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into one relation string.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(makeplural::relation))]
pub struct RelationDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl RelationDiagnostic {
    /// Builds a diagnostic labelled `name` from a relation parse error.
    ///
    /// Returns `None` for errors that do not come from a relation.
    pub fn from_parse_error(name: &str, err: &ParseError) -> Option<Self> {
        let relation = err.relation()?;
        let (message, width, help) = match err {
            ParseError::Syntax { message, .. } => (message.clone(), 1, None),
            ParseError::UnknownOperand { token, .. } => (
                format!("unknown operand '{token}'"),
                token.len(),
                Some("operands are n, i, v, w, f and t".to_string()),
            ),
            ParseError::InvalidModulus { token, .. } => (
                format!("invalid modulus '{token}'"),
                token.len(),
                Some("the modulus must be a positive integer".to_string()),
            ),
            ParseError::InvalidRange { token, .. } => (
                format!("invalid range '{token}'"),
                token.len(),
                Some("ranges are written lo..hi with lo <= hi".to_string()),
            ),
            ParseError::EmptyRelation { .. } => ("empty relation".to_string(), 0, None),
            ParseError::InvalidQuantity { .. } => return None,
        };

        let offset = err.column().unwrap_or(1).saturating_sub(1).min(relation.len());
        let width = width.min(relation.len() - offset);

        Some(RelationDiagnostic {
            src: NamedSource::new(name, relation.to_string()),
            span: (offset, width).into(),
            message,
            help,
        })
    }
}

/// Turns a compile failure into a report, with a source snippet for parse
/// errors.
pub fn compile_report(err: &CompileError) -> Report {
    match err {
        CompileError::Parse {
            locale,
            rule_type,
            category,
            source,
        } => {
            let name = format!("{locale} {rule_type} '{category}'");
            match RelationDiagnostic::from_parse_error(&name, source) {
                Some(diagnostic) => diagnostic.into(),
                None => miette!("{}", err),
            }
        }
        CompileError::UnknownLocale { .. } => {
            miette!(help = "pass '*' to compile every locale", "{}", err)
        }
        CompileError::NoLocales
        | CompileError::MissingOther { .. }
        | CompileError::UnknownRuleKey { .. } => miette!("{}", err),
    }
}
