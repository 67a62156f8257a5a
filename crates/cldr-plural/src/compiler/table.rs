//! Per-locale rule tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::condition::compile_relation;
use super::error::CompileError;
use super::predicate::Predicate;
use super::resolver::{Preamble, resolve};
use crate::parser::{SampleSet, parse_relation, parse_samples};
use crate::types::{ModuloVar, PluralCategory, RuleType};

/// One locale's rules: `pluralRule-count-<category>` to relation text.
pub type RuleStrings = BTreeMap<String, String>;

/// Raw CLDR plural data for every locale, keyed by locale tag as spelled in
/// the data. A locale without ordinal rules simply has no `ordinal` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluralData {
    #[serde(default)]
    pub cardinal: BTreeMap<String, RuleStrings>,
    #[serde(default)]
    pub ordinal: BTreeMap<String, RuleStrings>,
}

/// A category with its compiled condition. `other` has none: it is the
/// fallback when no other category matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryPredicate {
    pub category: PluralCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
}

/// The compiled, sample-free rules of a locale. Two locales with equal rule
/// sets share one table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RuleSet {
    pub preamble: Preamble,
    pub cardinal: Vec<CategoryPredicate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<Vec<CategoryPredicate>>,
    /// Modulo variables in first-seen order, cardinal rules first.
    pub modulo_vars: Vec<ModuloVar>,
}

impl RuleSet {
    /// Whether any category, cardinal or ordinal, has a condition.
    pub fn has_predicates(&self) -> bool {
        self.cardinal
            .iter()
            .chain(self.ordinal.iter().flatten())
            .any(|entry| entry.predicate.is_some())
    }

    /// The condition for `category` in the given rule set, if it has one.
    pub fn predicate(&self, rule_type: RuleType, category: PluralCategory) -> Option<&Predicate> {
        let entries = match rule_type {
            RuleType::Cardinal => Some(&self.cardinal),
            RuleType::Ordinal => self.ordinal.as_ref(),
        }?;
        entries
            .iter()
            .find(|entry| entry.category == category)?
            .predicate
            .as_ref()
    }

    pub fn categories(&self, rule_type: RuleType) -> Vec<PluralCategory> {
        let entries = match rule_type {
            RuleType::Cardinal => self.cardinal.as_slice(),
            RuleType::Ordinal => self.ordinal.as_deref().unwrap_or_default(),
        };
        entries.iter().map(|entry| entry.category).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySamples {
    pub category: PluralCategory,
    #[serde(flatten)]
    pub samples: SampleSet,
}

/// Sample values per category, used as conformance fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Samples {
    pub cardinal: Vec<CategorySamples>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ordinal: Vec<CategorySamples>,
}

impl Samples {
    pub fn is_empty(&self) -> bool {
        self.cardinal.is_empty() && self.ordinal.is_empty()
    }
}

/// A locale's compiled rules together with its samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRuleTable {
    pub rules: RuleSet,
    pub samples: Samples,
}

/// Compiles the cardinal and (optional) ordinal rules of one locale.
///
/// Both rule sets must contain `other`. Categories are compiled in
/// [`PluralCategory::COMPILE_ORDER`].
pub fn build_locale_table(
    locale: &str,
    cardinal: &RuleStrings,
    ordinal: Option<&RuleStrings>,
    guard_negated_ranges: bool,
) -> Result<LocaleRuleTable, CompileError> {
    check_rule_keys(locale, RuleType::Cardinal, cardinal)?;
    if let Some(ordinal) = ordinal {
        check_rule_keys(locale, RuleType::Ordinal, ordinal)?;
    }

    let mut modulo_vars = Vec::new();
    let cardinal_set = RuleSetBuilder {
        locale,
        rule_type: RuleType::Cardinal,
        rules: cardinal,
        guard_negated_ranges,
    };
    let cardinal_predicates = cardinal_set.predicates(&mut modulo_vars)?;
    let ordinal_set = ordinal.map(|rules| RuleSetBuilder {
        locale,
        rule_type: RuleType::Ordinal,
        rules,
        guard_negated_ranges,
    });
    let ordinal_predicates = ordinal_set
        .as_ref()
        .map(|set| set.predicates(&mut modulo_vars))
        .transpose()?;

    let compiled = cardinal_predicates
        .iter()
        .chain(ordinal_predicates.iter().flatten())
        .filter_map(|entry| entry.predicate.as_ref());
    let preamble = resolve(compiled, &modulo_vars);

    let samples = Samples {
        cardinal: cardinal_set.samples(),
        ordinal: ordinal_set
            .as_ref()
            .map(RuleSetBuilder::samples)
            .unwrap_or_default(),
    };

    Ok(LocaleRuleTable {
        rules: RuleSet {
            preamble,
            cardinal: cardinal_predicates,
            ordinal: ordinal_predicates,
            modulo_vars,
        },
        samples,
    })
}

fn check_rule_keys(
    locale: &str,
    rule_type: RuleType,
    rules: &RuleStrings,
) -> Result<(), CompileError> {
    if let Some(key) = rules
        .keys()
        .find(|key| PluralCategory::from_rule_key(key).is_none())
    {
        return Err(CompileError::UnknownRuleKey {
            locale: locale.to_string(),
            rule_type,
            key: key.clone(),
        });
    }
    if !rules.contains_key(&PluralCategory::Other.rule_key()) {
        return Err(CompileError::MissingOther {
            locale: locale.to_string(),
            rule_type,
        });
    }
    Ok(())
}

struct RuleSetBuilder<'a> {
    locale: &'a str,
    rule_type: RuleType,
    rules: &'a RuleStrings,
    guard_negated_ranges: bool,
}

impl RuleSetBuilder<'_> {
    fn relations(&self) -> impl Iterator<Item = (PluralCategory, &str)> {
        PluralCategory::COMPILE_ORDER.into_iter().filter_map(move |category| {
            self.rules
                .get(&category.rule_key())
                .map(|text| (category, text.as_str()))
        })
    }

    fn predicates(
        &self,
        modulo_vars: &mut Vec<ModuloVar>,
    ) -> Result<Vec<CategoryPredicate>, CompileError> {
        self.relations()
            .map(|(category, text)| {
                if category == PluralCategory::Other {
                    return Ok(CategoryPredicate {
                        category,
                        predicate: None,
                    });
                }

                let relation = parse_relation(text).map_err(|source| CompileError::Parse {
                    locale: self.locale.to_string(),
                    rule_type: self.rule_type,
                    category,
                    source,
                })?;
                for var in &relation.modulo_vars {
                    if !modulo_vars.contains(var) {
                        modulo_vars.push(*var);
                    }
                }

                Ok(CategoryPredicate {
                    category,
                    predicate: Some(compile_relation(&relation, self.guard_negated_ranges)),
                })
            })
            .collect()
    }

    fn samples(&self) -> Vec<CategorySamples> {
        self.relations()
            .map(|(category, text)| CategorySamples {
                category,
                samples: parse_samples(text),
            })
            .filter(|entry| !entry.samples.is_empty())
            .collect()
    }
}
