//! Implementation of the `makeplural relation` command.

use clap::Args;
use cldr_plural::compiler::{Preamble, resolve};
use cldr_plural::parser::{SampleSet, parse_relation, parse_samples};
use cldr_plural::{ModuloVar, Predicate, compile_relation};
use miette::{IntoDiagnostic, Report, Result};
use serde::Serialize;

use crate::output::RelationDiagnostic;

/// Arguments for the relation command.
#[derive(Debug, Args)]
pub struct RelationArgs {
    /// Relation to compile, e.g. "v = 0 and i % 10 = 2..4"
    pub relation: String,

    /// Require whole numbers for negated ranges over `n`
    #[arg(long)]
    pub guard_negated_ranges: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the relation command.
#[derive(Debug, Serialize)]
struct RelationJson {
    predicate: Predicate,
    preamble: Preamble,
    modulo_vars: Vec<ModuloVar>,
    #[serde(skip_serializing_if = "SampleSet::is_empty")]
    samples: SampleSet,
}

/// Run the relation command.
pub fn run_relation(args: RelationArgs) -> Result<i32> {
    let relation = match parse_relation(&args.relation) {
        Ok(relation) => relation,
        Err(err) => {
            match RelationDiagnostic::from_parse_error("relation", &err) {
                Some(diagnostic) => eprintln!("{:?}", Report::new(diagnostic)),
                None => eprintln!("{err}"),
            }
            return Ok(exitcode::DATAERR);
        }
    };

    let predicate = compile_relation(&relation, args.guard_negated_ranges);
    let preamble = resolve([&predicate], &relation.modulo_vars);
    let samples = parse_samples(&args.relation);

    if args.json {
        let output = RelationJson {
            predicate,
            preamble,
            modulo_vars: relation.modulo_vars,
            samples,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
        return Ok(exitcode::OK);
    }

    for statement in preamble.statements() {
        println!("{statement}");
    }
    println!("{predicate}");
    if !samples.integers.is_empty() {
        println!("@integer {}", samples.integers.join(", "));
    }
    if !samples.decimals.is_empty() {
        println!("@decimal {}", samples.decimals.join(", "));
    }

    Ok(exitcode::OK)
}
