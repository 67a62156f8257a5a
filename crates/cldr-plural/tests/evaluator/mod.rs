//! A reference evaluator for compiled predicates, used to check them against
//! sample values and ICU4X.

use cldr_plural::compiler::{Clause, Term};
use cldr_plural::parser::Comparator;
use cldr_plural::{Operands, PluralCategory, Predicate, RuleSet, RuleType};

/// Whether `operands` satisfies the compiled predicate.
pub fn matches(predicate: &Predicate, operands: &Operands) -> bool {
    predicate
        .clauses
        .iter()
        .any(|clause| clause_matches(clause, operands))
}

fn clause_matches(clause: &Clause, operands: &Operands) -> bool {
    (!clause.guarded || operands.p())
        && clause
            .terms
            .iter()
            .all(|term| term_matches(term, operands))
}

fn term_matches(term: &Term, operands: &Operands) -> bool {
    match term {
        Term::Compare {
            var,
            comparator,
            value,
        } => {
            let equal = operands.value_of(var) == *value as f64;
            match comparator {
                Comparator::Equals => equal,
                Comparator::NotEquals => !equal,
            }
        }
        Term::Within { var, lo, hi } => {
            let x = operands.value_of(var);
            x >= *lo as f64 && x <= *hi as f64
        }
        Term::Outside { var, lo, hi } => {
            let x = operands.value_of(var);
            x < *lo as f64 || x > *hi as f64
        }
        Term::AnyOf(clauses) => clauses.iter().any(|clause| clause_matches(clause, operands)),
    }
}

/// The category a quantity falls into: the first category whose predicate
/// matches, else `other`.
pub fn classify(rules: &RuleSet, rule_type: RuleType, operands: &Operands) -> PluralCategory {
    let entries = match rule_type {
        RuleType::Cardinal => Some(&rules.cardinal),
        RuleType::Ordinal => rules.ordinal.as_ref(),
    };
    entries
        .into_iter()
        .flatten()
        .find(|entry| {
            entry
                .predicate
                .as_ref()
                .is_some_and(|predicate| matches(predicate, operands))
        })
        .map_or(PluralCategory::Other, |entry| entry.category)
}
