//! Locale deduplication.
//!
//! [`CompilationContext`] owns the registry of canonical rule sets for one
//! compilation. Locales are added one at a time; each new locale is compared
//! structurally against every canonical rule set seen so far and either
//! becomes canonical itself, joins an existing entry as an alias, or lands in
//! the "others" bucket when it has no conditions at all.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::error::CompileError;
use super::options::{CompileOptions, MissingOtherPolicy};
use super::table::{LocaleRuleTable, RuleSet, RuleStrings, build_locale_table};
use super::{LocaleEntry, PluralTable};
use crate::types::locale_tag::{UNDETERMINED, alias_tags, canonicalize};

/// What happened to a locale passed to [`CompilationContext::add_locale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The locale's rule set was new; the locale owns the table.
    Canonical { tag: String },
    /// The rule set matched an existing table, owned by `canonical`.
    Alias { canonical: String },
    /// The locale has no conditions and was listed under "others".
    Other,
    /// The locale was left out (missing `other` under the skip policy).
    Skipped,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Table(usize),
    Other,
}

/// Mutable state of one compilation run.
#[derive(Debug)]
pub struct CompilationContext<'a> {
    options: &'a CompileOptions,
    entries: Vec<LocaleEntry>,
    registry: HashMap<RuleSet, usize>,
    by_tag: HashMap<String, Slot>,
    others: Vec<String>,
}

impl<'a> CompilationContext<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            registry: HashMap::new(),
            by_tag: HashMap::new(),
            others: Vec::new(),
        }
    }

    /// Compiles one locale and registers it.
    ///
    /// A raw tag whose canonical form was already registered reuses that
    /// registration without compiling again.
    pub fn add_locale(
        &mut self,
        raw_tag: &str,
        cardinal: &RuleStrings,
        ordinal: Option<&RuleStrings>,
    ) -> Result<Registration, CompileError> {
        let canonical = canonicalize(raw_tag);
        let aliases = alias_tags(raw_tag, &canonical);

        if let Some(slot) = self.by_tag.get(&canonical).copied() {
            return Ok(self.attach(slot, aliases));
        }

        let table = match build_locale_table(
            raw_tag,
            cardinal,
            ordinal,
            self.options.guard_negated_ranges(),
        ) {
            Ok(table) => table,
            Err(err @ CompileError::MissingOther { .. })
                if self.options.missing_other() == MissingOtherPolicy::Skip =>
            {
                warn!(locale = raw_tag, %err, "skipping locale");
                return Ok(Registration::Skipped);
            }
            Err(err) => return Err(err),
        };

        if !table.rules.has_predicates() {
            self.by_tag.insert(canonical, Slot::Other);
            return Ok(self.attach(Slot::Other, aliases));
        }

        if let Some(&index) = self.registry.get(&table.rules) {
            self.by_tag.insert(canonical, Slot::Table(index));
            return Ok(self.attach(Slot::Table(index), aliases));
        }

        Ok(self.register(canonical, aliases, table))
    }

    /// Whether no locale has been registered yet (skipped ones don't count).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.by_tag.is_empty()
    }

    /// Normalizes alias lists and produces the final table.
    pub fn finish(self) -> PluralTable {
        let mut locales = self.entries;
        for entry in &mut locales {
            entry.aliases.sort();
            entry.aliases.dedup();
        }

        let mut others = self.others;
        others.sort();
        others.dedup();
        others.retain(|tag| tag != UNDETERMINED);

        PluralTable { locales, others }
    }

    fn register(
        &mut self,
        canonical: String,
        aliases: Vec<String>,
        table: LocaleRuleTable,
    ) -> Registration {
        let index = self.entries.len();
        debug!(
            tag = %canonical,
            preamble = %table.rules.preamble,
            "registered canonical rule set"
        );

        self.registry.insert(table.rules.clone(), index);
        self.by_tag.insert(canonical.clone(), Slot::Table(index));
        self.entries.push(LocaleEntry {
            tag: canonical.clone(),
            aliases,
            rules: table.rules,
            samples: table.samples,
        });
        Registration::Canonical { tag: canonical }
    }

    fn attach(&mut self, slot: Slot, aliases: Vec<String>) -> Registration {
        match slot {
            Slot::Table(index) => {
                let entry = &mut self.entries[index];
                debug!(canonical = %entry.tag, ?aliases, "merged locale into existing table");
                entry.aliases.extend(aliases);
                Registration::Alias {
                    canonical: entry.tag.clone(),
                }
            }
            Slot::Other => {
                debug!(?aliases, "locale has no conditions");
                self.others.extend(aliases);
                Registration::Other
            }
        }
    }
}
