//! Compiled boolean predicates.
//!
//! A [`Predicate`] is a disjunction of [`Clause`]s; a clause is a
//! conjunction of [`Term`]s, optionally guarded by the derived `p` flag.
//! Rendering produces C-like text that any emitter can paste into a
//! `switch`/`match` arm:
//!
//! ```text
//! p && n >= 2 && n <= 4 || i == 7
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::parser::Comparator;
use crate::types::{Operand, Var};

/// One atomic condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// `var == value` or `var != value`.
    Compare {
        var: Var,
        comparator: Comparator,
        value: u64,
    },
    /// `var >= lo && var <= hi`.
    Within { var: Var, lo: u64, hi: u64 },
    /// `(var < lo || var > hi)`.
    Outside { var: Var, lo: u64, hi: u64 },
    /// Parenthesized disjunction of clauses.
    AnyOf(Vec<Clause>),
}

/// A conjunction of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    /// Whether the clause only holds when the quantity has no significant
    /// fraction digits (`p && ...`).
    pub guarded: bool,
    pub terms: Vec<Term>,
}

/// A disjunction of clauses: the full condition of one plural category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub clauses: Vec<Clause>,
}

impl Term {
    /// Calls `visit` for every variable referenced by this term.
    pub fn for_each_var(&self, visit: &mut impl FnMut(&Var)) {
        match self {
            Term::Compare { var, .. } | Term::Within { var, .. } | Term::Outside { var, .. } => {
                visit(var);
            }
            Term::AnyOf(clauses) => {
                for clause in clauses {
                    clause.for_each_var(visit);
                }
            }
        }
    }

    fn is_guarded(&self) -> bool {
        match self {
            Term::AnyOf(clauses) => clauses.iter().any(Clause::is_guarded),
            Term::Compare { .. } | Term::Within { .. } | Term::Outside { .. } => false,
        }
    }
}

impl Clause {
    pub fn new(term: Term) -> Self {
        Self {
            guarded: false,
            terms: vec![term],
        }
    }

    pub fn guarded(term: Term) -> Self {
        Self {
            guarded: true,
            terms: vec![term],
        }
    }

    /// Appends `other` with `&&`. At most one guard survives.
    pub fn join(&mut self, other: Clause) {
        self.guarded |= other.guarded;
        self.terms.extend(other.terms);
    }

    /// Whether `p` is referenced anywhere in the clause, including nested
    /// disjunctions.
    pub fn is_guarded(&self) -> bool {
        self.guarded || self.terms.iter().any(Term::is_guarded)
    }

    pub fn for_each_var(&self, visit: &mut impl FnMut(&Var)) {
        for term in &self.terms {
            term.for_each_var(visit);
        }
    }
}

impl Predicate {
    /// Calls `visit` for every variable the predicate reads. `p` is reported
    /// as [`Operand::P`] once per guarded clause.
    pub fn for_each_var(&self, visit: &mut impl FnMut(&Var)) {
        let p = Var::Operand(Operand::P);
        for clause in &self.clauses {
            if clause.is_guarded() {
                visit(&p);
            }
            clause.for_each_var(visit);
        }
    }
}

/// AND-joins clauses into one, hoisting the guard to the front.
pub(crate) fn join_and(clauses: Vec<Clause>) -> Clause {
    let mut joined = Clause::default();
    for clause in clauses {
        joined.join(clause);
    }
    joined
}

/// OR-groups clauses into one parenthesized clause; a single clause is
/// returned as is.
pub(crate) fn join_or(mut clauses: Vec<Clause>) -> Clause {
    if clauses.len() == 1 {
        if let Some(clause) = clauses.pop() {
            return clause;
        }
    }
    Clause::new(Term::AnyOf(clauses))
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Compare {
                var,
                comparator,
                value,
            } => write!(f, "{var} {comparator} {value}"),
            Term::Within { var, lo, hi } => write!(f, "{var} >= {lo} && {var} <= {hi}"),
            Term::Outside { var, lo, hi } => write!(f, "({var} < {lo} || {var} > {hi})"),
            Term::AnyOf(clauses) => {
                f.write_str("(")?;
                write_joined(f, clauses, " || ")?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.guarded {
            f.write_str("p && ")?;
        }
        write_joined(f, &self.terms, " && ")
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.clauses, " || ")
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
