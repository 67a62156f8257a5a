//! The rule compiler.
//!
//! [`compile`] drives the whole pipeline: every selected locale's relations
//! are parsed and compiled into [`Predicate`]s, the operands they need are
//! resolved into a [`Preamble`], and locales with identical results are
//! merged into one [`LocaleEntry`].

mod condition;
mod context;
mod error;
mod options;
mod predicate;
mod resolver;
mod table;

use serde::Serialize;
use tracing::info;

pub use condition::{compile_relation, conditions};
pub use context::{CompilationContext, Registration};
pub use error::{CompileError, compute_suggestions};
pub use options::{CompileOptions, LocaleSelection, MissingOtherPolicy};
pub use predicate::{Clause, Predicate, Term};
pub use resolver::{Extraction, ModuloAssignment, NoFractionSource, Preamble, resolve};
pub use table::{
    CategoryPredicate, CategorySamples, LocaleRuleTable, PluralData, RuleSet, RuleStrings,
    Samples, build_locale_table,
};

/// A canonical locale and the rules it shares with its aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleEntry {
    /// Canonical tag of the first locale that produced these rules.
    pub tag: String,
    /// Every tag that resolves to this entry, sorted, including `tag`.
    pub aliases: Vec<String>,
    pub rules: RuleSet,
    #[serde(skip_serializing_if = "Samples::is_empty")]
    pub samples: Samples,
}

/// The compiled table for all selected locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluralTable {
    pub locales: Vec<LocaleEntry>,
    /// Locales whose every quantity is `other`, sorted.
    pub others: Vec<String>,
}

impl PluralTable {
    /// The entry a tag resolves to, by canonical tag or alias.
    pub fn entry(&self, tag: &str) -> Option<&LocaleEntry> {
        self.locales
            .iter()
            .find(|entry| entry.tag == tag || entry.aliases.iter().any(|alias| alias == tag))
    }

    /// Whether `tag` is listed among the locales without conditions.
    pub fn is_other(&self, tag: &str) -> bool {
        self.others.iter().any(|other| other == tag)
    }
}

/// Compiles CLDR plural data into a deduplicated rule table.
///
/// Locales are processed in lexical tag order, so the same input always
/// yields the same table and the same canonical tags.
///
/// ```
/// use cldr_plural::{CompileOptions, PluralData, RuleStrings, compile};
///
/// let mut data = PluralData::default();
/// data.cardinal.insert(
///     "en".to_string(),
///     RuleStrings::from([
///         (
///             "pluralRule-count-one".to_string(),
///             "i = 1 and v = 0 @integer 1".to_string(),
///         ),
///         (
///             "pluralRule-count-other".to_string(),
///             " @integer 0, 2~16".to_string(),
///         ),
///     ]),
/// );
///
/// let table = compile(&data, &CompileOptions::default()).unwrap();
/// let en = table.entry("en").unwrap();
/// assert_eq!(
///     en.rules.cardinal[1].predicate.as_ref().unwrap().to_string(),
///     "i == 1 && v == 0"
/// );
/// ```
pub fn compile(data: &PluralData, options: &CompileOptions) -> Result<PluralTable, CompileError> {
    let selected: Vec<(&String, &RuleStrings)> = match options.locales() {
        LocaleSelection::All => data.cardinal.iter().collect(),
        LocaleSelection::Only(tags) => {
            let mut selected = tags
                .iter()
                .map(|tag| {
                    data.cardinal
                        .get_key_value(tag)
                        .ok_or_else(|| unknown_locale(data, tag))
                })
                .collect::<Result<Vec<_>, _>>()?;
            selected.sort_by(|a, b| a.0.cmp(b.0));
            selected.dedup_by(|a, b| a.0 == b.0);
            selected
        }
    };
    if selected.is_empty() {
        return Err(CompileError::NoLocales);
    }

    let mut context = CompilationContext::new(options);
    for (tag, cardinal) in selected {
        context.add_locale(tag, cardinal, data.ordinal.get(tag))?;
    }
    if context.is_empty() {
        return Err(CompileError::NoLocales);
    }

    let table = context.finish();
    info!(
        locales = table.locales.len(),
        others = table.others.len(),
        "compiled plural rules"
    );
    Ok(table)
}

fn unknown_locale(data: &PluralData, tag: &str) -> CompileError {
    let available: Vec<String> = data.cardinal.keys().cloned().collect();
    CompileError::UnknownLocale {
        locale: tag.to_string(),
        suggestions: compute_suggestions(tag, &available),
    }
}
