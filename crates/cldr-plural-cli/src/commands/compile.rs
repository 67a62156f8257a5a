//! Implementation of the `makeplural compile` command.

use std::fs::write;
use std::path::PathBuf;

use clap::Args;
use cldr_plural::PluralTable;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use tracing::info;

use super::InputArgs;

/// Arguments for the compile command.
#[derive(Debug, Args)]
pub struct CompileArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the JSON table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// JSON document written by the compile command.
#[derive(Debug, Serialize)]
struct CompiledTable<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    cldr_version: Option<&'a str>,
    #[serde(flatten)]
    table: &'a PluralTable,
}

/// Run the compile command.
pub fn run_compile(args: CompileArgs) -> Result<i32> {
    let (input, table) = match args.input.compile() {
        Ok(compiled) => compiled,
        Err(code) => return Ok(code),
    };

    let document = CompiledTable {
        cldr_version: input.version.as_deref(),
        table: &table,
    };
    let json = serde_json::to_string_pretty(&document).into_diagnostic()?;

    match &args.output {
        Some(path) => {
            write(path, format!("{json}\n"))
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot write {}", path.display()))?;
            info!(
                path = %path.display(),
                locales = table.locales.len(),
                others = table.others.len(),
                "wrote plural table"
            );
        }
        None => println!("{json}"),
    }

    Ok(exitcode::OK)
}
