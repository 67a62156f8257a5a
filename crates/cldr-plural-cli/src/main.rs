//! `makeplural` entry point.
//!
//! Command-line tools for CLDR plural rules:
//! - `makeplural compile` - Compile CLDR plural JSON into a deduplicated table
//! - `makeplural check` - Summarize the compiled table
//! - `makeplural relation` - Compile a single relation
//! - `makeplural operands` - Show the operands of decimal literals

mod commands;
mod input;
mod logging;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, CompileArgs, OperandsArgs, RelationArgs, run_check, run_compile, run_operands,
    run_relation,
};

/// CLDR plural rule compiler.
#[derive(Debug, Parser)]
#[command(name = "makeplural")]
#[command(about = "Compile CLDR plural rules into per-locale predicate tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log compiler progress at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile CLDR plural JSON files into a JSON rule table
    Compile(CompileArgs),
    /// Compile and print a per-locale summary
    Check(CheckArgs),
    /// Compile one relation and print its predicate and preamble
    Relation(RelationArgs),
    /// Print the plural operands of decimal literals
    Operands(OperandsArgs),
}

fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {}
        ColorWhen::Always => owo_colors::set_override(true),
        ColorWhen::Never => owo_colors::set_override(false),
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    logging::init_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(1)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Compile(args) => run_compile(args),
        Commands::Check(args) => run_check(args),
        Commands::Relation(args) => run_relation(args),
        Commands::Operands(args) => run_operands(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
