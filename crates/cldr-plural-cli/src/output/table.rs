//! Table formatting utilities for CLI output.

use cldr_plural::{LocaleEntry, Operands, PluralCategory, RuleType};
use comfy_table::{ContentArrangement, Table, presets};
use serde::Serialize;

/// Summary of one compiled locale entry.
#[derive(Debug, Serialize)]
pub struct LocaleSummary {
    pub tag: String,
    /// Aliases other than the canonical tag.
    pub aliases: Vec<String>,
    pub cardinal: Vec<PluralCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<Vec<PluralCategory>>,
    pub modulo: Vec<String>,
}

impl LocaleSummary {
    pub fn from_entry(entry: &LocaleEntry) -> Self {
        LocaleSummary {
            tag: entry.tag.clone(),
            aliases: entry
                .aliases
                .iter()
                .filter(|alias| **alias != entry.tag)
                .cloned()
                .collect(),
            cardinal: entry.rules.categories(RuleType::Cardinal),
            ordinal: entry
                .rules
                .ordinal
                .is_some()
                .then(|| entry.rules.categories(RuleType::Ordinal)),
            modulo: entry
                .rules
                .modulo_vars
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format locale summaries as a table.
pub fn format_locale_table(summaries: &[LocaleSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Aliases", "Cardinal", "Ordinal", "Modulo"]);

    for summary in summaries {
        table.add_row(vec![
            summary.tag.clone(),
            join(&summary.aliases),
            join(&summary.cardinal),
            summary
                .ordinal
                .as_deref()
                .map_or_else(|| "-".to_string(), join),
            join(&summary.modulo),
        ]);
    }

    table
}

/// Format the operands of each literal as a table.
pub fn format_operands_table(rows: &[(String, Operands)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "n", "i", "v", "w", "f", "t", "p"]);

    for (value, ops) in rows {
        table.add_row(vec![
            value.clone(),
            ops.n.to_string(),
            ops.i.to_string(),
            ops.v.to_string(),
            ops.w.to_string(),
            ops.f.to_string(),
            ops.t.to_string(),
            ops.p().to_string(),
        ]);
    }

    table
}
