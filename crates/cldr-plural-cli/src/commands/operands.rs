//! Implementation of the `makeplural operands` command.

use clap::Args;
use cldr_plural::Operands;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::format_operands_table;

/// Arguments for the operands command.
#[derive(Debug, Args)]
pub struct OperandsArgs {
    /// Decimal literals such as 1, 1.0 or -2.50
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one literal.
#[derive(Debug, Serialize)]
struct OperandsJson {
    value: String,
    n: f64,
    i: u64,
    v: u64,
    w: u64,
    f: u64,
    t: u64,
    p: bool,
}

impl OperandsJson {
    fn new(value: String, ops: &Operands) -> Self {
        OperandsJson {
            value,
            n: ops.n,
            i: ops.i,
            v: ops.v,
            w: ops.w,
            f: ops.f,
            t: ops.t,
            p: ops.p(),
        }
    }
}

/// Run the operands command.
pub fn run_operands(args: OperandsArgs) -> Result<i32> {
    let mut rows = Vec::with_capacity(args.values.len());
    for value in args.values {
        match Operands::parse(&value) {
            Ok(ops) => rows.push((value, ops)),
            Err(err) => {
                eprintln!("{err}");
                return Ok(exitcode::DATAERR);
            }
        }
    }

    if args.json {
        let output: Vec<OperandsJson> = rows
            .iter()
            .map(|(value, ops)| OperandsJson::new(value.clone(), ops))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!("{}", format_operands_table(&rows));
    }

    Ok(exitcode::OK)
}
