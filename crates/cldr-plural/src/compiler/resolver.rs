//! Operand resolution.
//!
//! Decides which operands a locale's predicates actually read and how to
//! derive them from the raw value, so an emitter only computes what is
//! needed. The fraction-digit breakdown (`v`, `w`, `f`, `t`) is the costly
//! step and is only requested when one of those operands is live.

use std::fmt;

use serde::Serialize;

use super::predicate::Predicate;
use crate::types::{ModuloVar, Operand, OperandSet, Var};

/// How the base operands are read from the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Extraction {
    /// Nothing is read (e.g. a locale whose only category is `other`).
    None,
    /// `n` and/or `i` are computed directly from the value.
    Direct { operands: OperandSet },
    /// One fraction-digit breakdown binds the listed operands.
    Digits { operands: OperandSet },
}

/// How the `p` flag (no significant fraction digits) is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoFractionSource {
    /// `p := w == 0`
    FractionDigits,
    /// `p := i == n`
    IntegerEquality,
    /// `p := round(n) == n`
    Rounding,
}

/// One modulo variable binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModuloAssignment {
    pub var: ModuloVar,
    /// The base operand is not bound on its own and is read from the raw
    /// value in place.
    pub inline: bool,
}

/// The derivation steps a locale needs before its predicates can run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Preamble {
    pub extraction: Extraction,
    pub no_fraction: Option<NoFractionSource>,
    pub modulo: Vec<ModuloAssignment>,
}

/// Order of the bindings produced by a fraction-digit breakdown.
const DIGIT_BINDINGS: [Operand; 6] = [
    Operand::F,
    Operand::I,
    Operand::N,
    Operand::V,
    Operand::T,
    Operand::W,
];

/// Computes the minimal preamble for a set of predicates.
///
/// `modulo_vars` are the modulo variables the predicates reference, in
/// first-seen order without duplicates.
pub fn resolve<'a>(
    predicates: impl IntoIterator<Item = &'a Predicate>,
    modulo_vars: &[ModuloVar],
) -> Preamble {
    let mut referenced = OperandSet::empty();
    for predicate in predicates {
        predicate.for_each_var(&mut |var| {
            if let Var::Operand(operand) = var {
                referenced.insert(*operand);
            }
        });
    }

    let no_fraction_live = referenced.contains(Operand::P);
    let mut bound: OperandSet = referenced
        .iter()
        .filter(|operand| *operand != Operand::P)
        .collect();

    let needs_digits =
        bound.any_fractional() || modulo_vars.iter().any(|var| var.operand.is_fractional());

    let (extraction, no_fraction) = if needs_digits {
        for var in modulo_vars {
            bound.insert(var.operand);
        }
        if no_fraction_live {
            bound.insert(Operand::W);
        }
        (
            Extraction::Digits { operands: bound },
            no_fraction_live.then_some(NoFractionSource::FractionDigits),
        )
    } else {
        if no_fraction_live {
            bound.insert(Operand::N);
        }
        let source = if bound.contains(Operand::I) {
            NoFractionSource::IntegerEquality
        } else {
            NoFractionSource::Rounding
        };
        let extraction = if bound.is_empty() {
            Extraction::None
        } else {
            Extraction::Direct { operands: bound }
        };
        (extraction, no_fraction_live.then_some(source))
    };

    let modulo = modulo_vars
        .iter()
        .map(|var| ModuloAssignment {
            var: *var,
            inline: !bound.contains(var.operand),
        })
        .collect();

    Preamble {
        extraction,
        no_fraction,
        modulo,
    }
}

impl Preamble {
    /// Whether no derivation step is needed at all.
    pub fn is_empty(&self) -> bool {
        self.extraction == Extraction::None && self.no_fraction.is_none() && self.modulo.is_empty()
    }

    /// Whether the fraction-digit breakdown is requested.
    pub fn uses_fraction_digits(&self) -> bool {
        matches!(self.extraction, Extraction::Digits { .. })
    }

    /// Operands bound by the extraction step.
    pub fn bound(&self) -> OperandSet {
        match self.extraction {
            Extraction::None => OperandSet::empty(),
            Extraction::Direct { operands } | Extraction::Digits { operands } => operands,
        }
    }

    /// Renders the preamble as pseudo-code statements, one per binding.
    ///
    /// `value` names the raw input; `abs`, `trunc`, `round`, `mod` and
    /// `digits` are left for the emitter to map onto its target language.
    pub fn statements(&self) -> Vec<String> {
        let mut statements = Vec::new();

        match self.extraction {
            Extraction::None => {}
            Extraction::Direct { operands } => {
                if operands.contains(Operand::N) {
                    statements.push("n := abs(value)".to_string());
                }
                if operands.contains(Operand::I) {
                    if operands.contains(Operand::N) {
                        statements.push("i := trunc(n)".to_string());
                    } else {
                        statements.push("i := trunc(abs(value))".to_string());
                    }
                }
            }
            Extraction::Digits { operands } => {
                let names: Vec<String> = DIGIT_BINDINGS
                    .iter()
                    .map(|operand| {
                        if operands.contains(*operand) {
                            operand.to_string()
                        } else {
                            "_".to_string()
                        }
                    })
                    .collect();
                statements.push(format!("{} := digits(value)", names.join(", ")));
            }
        }

        match self.no_fraction {
            Some(NoFractionSource::FractionDigits) => statements.push("p := w == 0".to_string()),
            Some(NoFractionSource::IntegerEquality) => statements.push("p := i == n".to_string()),
            Some(NoFractionSource::Rounding) => statements.push("p := round(n) == n".to_string()),
            None => {}
        }

        for assignment in &self.modulo {
            statements.push(assignment.to_string());
        }
        statements
    }
}

impl fmt::Display for ModuloAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ModuloVar { operand, modulus } = self.var;
        match (operand, self.inline) {
            (Operand::N, false) => write!(f, "{} := mod(n, {modulus})", self.var),
            (Operand::N, true) => write!(f, "{} := mod(abs(value), {modulus})", self.var),
            (Operand::I, true) => write!(f, "{} := trunc(abs(value)) % {modulus}", self.var),
            _ => write!(f, "{} := {operand} % {modulus}", self.var),
        }
    }
}

impl fmt::Display for Preamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.statements().join("\n"))
    }
}
