//! Integration tests for operand resolution.

use cldr_plural::compiler::{Extraction, NoFractionSource, resolve};
use cldr_plural::parser::parse_relation;
use cldr_plural::{ModuloVar, Operand, OperandSet, Preamble, Predicate, compile_relation};

/// Compiles the relations as if they were the categories of one locale.
fn preamble(relations: &[&str]) -> Preamble {
    let mut predicates: Vec<Predicate> = Vec::new();
    let mut modulo_vars: Vec<ModuloVar> = Vec::new();
    for text in relations {
        let relation = parse_relation(text).unwrap();
        for var in relation.modulo_vars.iter().copied() {
            if !modulo_vars.contains(&var) {
                modulo_vars.push(var);
            }
        }
        predicates.push(compile_relation(&relation, false));
    }
    resolve(&predicates, &modulo_vars)
}

fn operands(ops: &[Operand]) -> OperandSet {
    ops.iter().copied().collect()
}

// =============================================================================
// Integer-only rule sets
// =============================================================================

#[test]
fn integer_and_absolute_value_only() {
    let preamble = preamble(&["i = 0 or n = 1"]);
    assert_eq!(
        preamble.extraction,
        Extraction::Direct {
            operands: operands(&[Operand::N, Operand::I])
        }
    );
    assert!(!preamble.uses_fraction_digits());
    assert_eq!(preamble.no_fraction, None);
    assert_eq!(preamble.statements(), vec!["n := abs(value)", "i := trunc(n)"]);
}

#[test]
fn no_fraction_flag_from_rounding() {
    let preamble = preamble(&["n = 0", "n = 1", "n = 2", "n % 100 = 3..10", "n % 100 = 11..99"]);
    assert_eq!(preamble.no_fraction, Some(NoFractionSource::Rounding));
    insta::assert_snapshot!(preamble, @r"
    n := abs(value)
    p := round(n) == n
    n100 := mod(n, 100)
    ");
}

#[test]
fn no_fraction_flag_from_integer_equality() {
    let preamble = preamble(&["i = 0 or n = 2..4"]);
    assert_eq!(preamble.no_fraction, Some(NoFractionSource::IntegerEquality));
    assert_eq!(
        preamble.statements(),
        vec!["n := abs(value)", "i := trunc(n)", "p := i == n"]
    );
}

#[test]
fn modulo_base_read_inline_when_not_bound() {
    let preamble = preamble(&["i % 10 = 1 and i % 100 != 11", "i % 10 = 2 and i % 100 != 12"]);
    assert_eq!(preamble.extraction, Extraction::None);
    assert!(preamble.modulo.iter().all(|assignment| assignment.inline));
    assert_eq!(
        preamble.statements(),
        vec![
            "i10 := trunc(abs(value)) % 10",
            "i100 := trunc(abs(value)) % 100"
        ]
    );

    let preamble = self::preamble(&["n % 10 = 1"]);
    assert_eq!(preamble.statements(), vec!["n10 := mod(abs(value), 10)"]);
}

#[test]
fn modulo_base_bound_when_referenced() {
    let preamble = preamble(&["i = 1 or i % 10 = 2"]);
    assert_eq!(
        preamble.statements(),
        vec!["i := trunc(abs(value))", "i10 := i % 10"]
    );
}

// =============================================================================
// Fraction digits
// =============================================================================

#[test]
fn fraction_digits_bind_only_live_operands() {
    let preamble = preamble(&[
        "i = 1 and v = 0",
        "n % 10 = 1 and n % 100 != 11",
        "n % 10 = 2 and n % 100 != 12",
        "n % 10 = 3 and n % 100 != 13",
    ]);
    assert!(preamble.uses_fraction_digits());
    insta::assert_snapshot!(preamble, @r"
    _, i, n, v, _, _ := digits(value)
    n10 := mod(n, 10)
    n100 := mod(n, 100)
    ");
}

#[test]
fn no_fraction_flag_from_w_when_digits_are_extracted() {
    let preamble = preamble(&[
        "n % 10 = 1 and n % 100 != 11..19",
        "n % 10 = 2..9 and n % 100 != 11..19",
        "f != 0",
    ]);
    assert_eq!(preamble.no_fraction, Some(NoFractionSource::FractionDigits));
    assert!(preamble.bound().contains(Operand::W));
    insta::assert_snapshot!(preamble, @r"
    f, _, n, _, _, w := digits(value)
    p := w == 0
    n10 := mod(n, 10)
    n100 := mod(n, 100)
    ");
}

#[test]
fn fractional_modulo_base_requests_digits() {
    let preamble = preamble(&["v = 0 and i % 10 = 1 or f % 10 = 1"]);
    assert_eq!(
        preamble.extraction,
        Extraction::Digits {
            operands: operands(&[Operand::I, Operand::V, Operand::F])
        }
    );
    assert_eq!(
        preamble.statements(),
        vec!["f, i, _, v, _, _ := digits(value)", "i10 := i % 10", "f10 := f % 10"]
    );
}

// =============================================================================
// Modulo dedup
// =============================================================================

#[test]
fn shared_modulo_var_is_derived_once() {
    let preamble = preamble(&[
        "v = 0 and i % 10 = 1 and i % 100 != 11",
        "v = 0 and i % 10 = 2..4 and i % 100 != 12..14",
        "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14",
    ]);
    let statements = preamble.statements();
    assert_eq!(
        statements
            .iter()
            .filter(|s| s.starts_with("i10 :="))
            .count(),
        1
    );
    assert_eq!(
        statements,
        vec![
            "_, i, _, v, _, _ := digits(value)",
            "i10 := i % 10",
            "i100 := i % 100"
        ]
    );
}

// =============================================================================
// Degenerate and serialized forms
// =============================================================================

#[test]
fn no_predicates_need_nothing() {
    let preamble = resolve(Vec::<&Predicate>::new(), &[]);
    assert!(preamble.is_empty());
    assert!(preamble.statements().is_empty());
}

#[test]
fn preamble_serializes_structurally() {
    let preamble = preamble(&["n % 100 = 3..10"]);
    let json = serde_json::to_value(&preamble).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "extraction": { "kind": "direct", "operands": ["n"] },
            "no_fraction": "rounding",
            "modulo": [
                { "var": { "operand": "n", "modulus": 100 }, "inline": false }
            ]
        })
    );
}
