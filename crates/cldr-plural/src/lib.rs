//! Compiles Unicode CLDR plural rules into static, per-locale decision tables.
//!
//! The input is CLDR's plural data as maps from locale to
//! `pluralRule-count-<category>` to relation text. The output is a
//! [`PluralTable`]: for every distinct rule set, the operand derivation
//! steps it needs ([`Preamble`]) and one [`Predicate`] per category, with all
//! locales sharing that rule set listed as aliases.
//!
//! ```
//! use cldr_plural::{compile_relation, parser::parse_relation};
//!
//! let relation = parse_relation("v = 0 and i % 10 = 2..4 and i % 100 != 12..14").unwrap();
//! let predicate = compile_relation(&relation, false);
//! assert_eq!(
//!     predicate.to_string(),
//!     "v == 0 && i10 >= 2 && i10 <= 4 && (i100 < 12 || i100 > 14)"
//! );
//! ```

pub mod compiler;
pub mod parser;
pub mod types;

pub use compiler::{
    CategoryPredicate, CompilationContext, CompileError, CompileOptions, LocaleEntry,
    LocaleSelection, MissingOtherPolicy, PluralData, PluralTable, Predicate, Preamble,
    Registration, RuleSet, RuleStrings, compile, compile_relation, compute_suggestions,
};
pub use parser::ParseError;
pub use types::{ModuloVar, Operand, OperandSet, Operands, PluralCategory, RuleType, Var};
