//! Compiles parsed relations into predicates.
//!
//! CLDR gives `and` precedence over `or`. The grouping pass keeps a buffer
//! of disjuncts for the current OR-run and folds AND-connected comparisons
//! into the most recent buffer entry, so `a or b and c` becomes
//! `a || b && c` and never `(a || b) && c`.

use super::predicate::{Clause, Predicate, Term, join_and, join_or};
use crate::parser::{Comparator, Connector, LogicOp, RangeItem, Relation};
use crate::types::Operand;

/// Expands the right-hand side of one comparison into one clause per item.
///
/// Ranges over `n` (or `n % m`) only match integer-valued quantities and are
/// guarded by `p`. Exclusions (`!=` ranges) are guarded only when
/// `guard_negated_ranges` is set.
pub fn conditions(op: &LogicOp, guard_negated_ranges: bool) -> Vec<Clause> {
    let guard = op.left.base() == Operand::N
        && (op.comparator == Comparator::Equals || guard_negated_ranges);

    op.right
        .iter()
        .map(|item| match *item {
            RangeItem::Value(value) => Clause::new(Term::Compare {
                var: op.left,
                comparator: op.comparator,
                value,
            }),
            RangeItem::Range { lo, hi } => {
                let term = match op.comparator {
                    Comparator::Equals => Term::Within {
                        var: op.left,
                        lo,
                        hi,
                    },
                    Comparator::NotEquals => Term::Outside {
                        var: op.left,
                        lo,
                        hi,
                    },
                };
                Clause {
                    guarded: guard,
                    terms: vec![term],
                }
            }
        })
        .collect()
}

/// Compiles a relation into a category predicate.
pub fn compile_relation(relation: &Relation, guard_negated_ranges: bool) -> Predicate {
    if let [op] = relation.ops.as_slice() {
        let conditions = conditions(op, guard_negated_ranges);
        let clauses = match op.comparator {
            Comparator::Equals => conditions,
            Comparator::NotEquals => vec![join_and(conditions)],
        };
        return Predicate { clauses };
    }

    let mut clauses = Vec::new();
    let mut buffer: Vec<Clause> = Vec::new();
    let mut last_previous = None;

    for op in &relation.ops {
        let conditions = conditions(op, guard_negated_ranges);
        last_previous = op.previous;

        if op.previous == Some(Connector::Or) {
            clauses.append(&mut buffer);
        }

        match (op.previous, op.next) {
            (Some(Connector::And), _) => {
                let combined = combine(op.comparator, conditions);
                match buffer.last_mut() {
                    Some(last) => last.join(combined),
                    None => buffer.push(combined),
                }
            }
            (_, Some(Connector::And)) => buffer.push(combine(op.comparator, conditions)),
            _ => match op.comparator {
                Comparator::Equals => buffer.extend(conditions),
                Comparator::NotEquals => buffer.push(join_and(conditions)),
            },
        }
    }

    if last_previous == Some(Connector::And) {
        clauses.push(join_and(buffer));
    } else {
        clauses.extend(buffer);
    }
    Predicate { clauses }
}

/// Collapses one comparison's conditions into a single clause: a list under
/// `==` means any of its items, under `!=` all of them.
fn combine(comparator: Comparator, conditions: Vec<Clause>) -> Clause {
    match comparator {
        Comparator::Equals => join_or(conditions),
        Comparator::NotEquals => join_and(conditions),
    }
}
