//! Implementation of the `makeplural check` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::InputArgs;
use crate::output::table::{LocaleSummary, format_locale_table};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the check command.
#[derive(Debug, Serialize)]
struct CheckJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    cldr_version: Option<String>,
    locales: Vec<LocaleSummary>,
    others: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let (input, table) = match args.input.compile() {
        Ok(compiled) => compiled,
        Err(code) => return Ok(code),
    };

    let summaries: Vec<LocaleSummary> = table
        .locales
        .iter()
        .map(LocaleSummary::from_entry)
        .collect();

    if args.json {
        let output = CheckJson {
            cldr_version: input.version,
            locales: summaries,
            others: table.others,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
        return Ok(exitcode::OK);
    }

    if let Some(version) = &input.version {
        println!(
            "CLDR {}",
            version.if_supports_color(Stream::Stdout, |text| text.bold())
        );
    }
    println!("{}", format_locale_table(&summaries));

    let aliases: usize = summaries.iter().map(|s| s.aliases.len()).sum();
    println!(
        "\n{} rule tables, {} aliases, {} locales with only 'other'",
        summaries
            .len()
            .if_supports_color(Stream::Stdout, |count| count.green()),
        aliases,
        table.others.len()
    );
    if !table.others.is_empty() {
        println!(
            "{}",
            table
                .others
                .join(" ")
                .if_supports_color(Stream::Stdout, |text| text.dimmed())
        );
    }

    Ok(exitcode::OK)
}
