//! CLI command implementations.

mod check;
mod compile;
mod operands;
mod relation;

use std::path::PathBuf;

use cldr_plural::{CompileOptions, LocaleSelection, MissingOtherPolicy, PluralTable};
use clap::{Args, ValueEnum};
use miette::Report;

use crate::input::{Input, load};
use crate::output::compile_report;

pub use check::{CheckArgs, run_check};
pub use compile::{CompileArgs, run_compile};
pub use operands::{OperandsArgs, run_operands};
pub use relation::{RelationArgs, run_relation};

/// Input files and compiler options shared by `compile` and `check`.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// CLDR supplemental plurals.json (cardinal rules)
    #[arg(long)]
    pub plurals: PathBuf,

    /// CLDR supplemental ordinals.json
    #[arg(long)]
    pub ordinals: Option<PathBuf>,

    /// Locales to compile: '*' or a comma-separated list
    #[arg(long, default_value = "*", env = "MAKEPLURAL_LOCALES")]
    pub locales: LocaleSelection,

    /// What to do with locales missing the 'other' category
    #[arg(long, value_enum, default_value_t = OnMissingOther::Skip)]
    pub on_missing_other: OnMissingOther,

    /// Require whole numbers for negated ranges over `n`
    #[arg(long)]
    pub guard_negated_ranges: bool,
}

/// Command-line spelling of [`MissingOtherPolicy`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OnMissingOther {
    Skip,
    Abort,
}

impl InputArgs {
    pub fn options(&self) -> CompileOptions {
        let missing_other = match self.on_missing_other {
            OnMissingOther::Skip => MissingOtherPolicy::Skip,
            OnMissingOther::Abort => MissingOtherPolicy::Abort,
        };
        CompileOptions::builder()
            .locales(self.locales.clone())
            .missing_other(missing_other)
            .guard_negated_ranges(self.guard_negated_ranges)
            .build()
    }

    /// Loads and compiles the inputs, reporting any failure on stderr.
    ///
    /// On failure the exit code for the process is returned as the error.
    pub fn compile(&self) -> Result<(Input, PluralTable), i32> {
        let input = load(&self.plurals, self.ordinals.as_deref()).map_err(|err| {
            let code = err.exit_code();
            eprintln!("{:?}", Report::new(err));
            code
        })?;
        let table = cldr_plural::compile(&input.data, &self.options()).map_err(|err| {
            eprintln!("{:?}", compile_report(&err));
            exitcode::DATAERR
        })?;
        Ok((input, table))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        input: InputArgs,
    }

    #[test]
    fn flags_map_onto_compile_options() {
        let harness = Harness::parse_from([
            "makeplural",
            "--plurals",
            "plurals.json",
            "--locales",
            "en,ru",
            "--on-missing-other",
            "abort",
            "--guard-negated-ranges",
        ]);
        let options = harness.input.options();
        assert_eq!(options.locales(), &LocaleSelection::only(["en", "ru"]));
        assert_eq!(options.missing_other(), MissingOtherPolicy::Abort);
        assert!(options.guard_negated_ranges());
    }

    #[test]
    fn defaults_compile_everything() {
        let harness = Harness::parse_from(["makeplural", "--plurals", "plurals.json"]);
        let options = harness.input.options();
        assert_eq!(options.locales(), &LocaleSelection::All);
        assert_eq!(options.missing_other(), MissingOtherPolicy::Skip);
        assert!(!options.guard_negated_ranges());
    }
}
