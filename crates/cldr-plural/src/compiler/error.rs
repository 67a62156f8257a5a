//! Error types for the rule compiler.

use thiserror::Error;

use crate::parser::ParseError;
use crate::types::{PluralCategory, RuleType};

/// An error that stopped compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A relation in the input data could not be parsed.
    #[error("{locale} {rule_type} '{category}': {source}")]
    Parse {
        locale: String,
        rule_type: RuleType,
        category: PluralCategory,
        #[source]
        source: ParseError,
    },

    /// A requested locale has no cardinal rules in the input.
    #[error("locale '{locale}' not found in plural data{}", format_suggestions(.suggestions))]
    UnknownLocale {
        locale: String,
        suggestions: Vec<String>,
    },

    /// Nothing was left to compile after locale selection.
    #[error("no locales to compile")]
    NoLocales,

    /// A rule set lacks the mandatory `other` category.
    #[error("{locale} {rule_type} rules are missing the mandatory 'other' category")]
    MissingOther { locale: String, rule_type: RuleType },

    /// A rule key is not `pluralRule-count-<category>`.
    #[error("{locale} {rule_type} rules contain unknown key '{key}'")]
    UnknownRuleKey {
        locale: String,
        rule_type: RuleType,
        key: String,
    },
}

impl CompileError {
    /// Errors caused by the caller's options rather than by the data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CompileError::UnknownLocale { .. } | CompileError::NoLocales
        )
    }

    /// Errors caused by malformed or incomplete CLDR data.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            CompileError::Parse { .. }
                | CompileError::MissingOther { .. }
                | CompileError::UnknownRuleKey { .. }
        )
    }

    /// The locale the error belongs to, if any.
    pub fn locale(&self) -> Option<&str> {
        match self {
            CompileError::Parse { locale, .. }
            | CompileError::UnknownLocale { locale, .. }
            | CompileError::MissingOther { locale, .. }
            | CompileError::UnknownRuleKey { locale, .. } => Some(locale),
            CompileError::NoLocales => None,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Finds up to three entries of `available` close to `key`.
///
/// Closeness is Levenshtein distance: at most 1 for keys of three characters
/// or fewer, at most 2 otherwise. Closest matches come first.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() > 3 { 2 } else { 1 };

    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, candidate)| *distance <= max_distance && candidate.as_str() != key)
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
