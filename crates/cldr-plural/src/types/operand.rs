use std::fmt;

use serde::{Serialize, Serializer};

/// A CLDR plural operand, plus the derived `p` flag.
///
/// | Symbol | Meaning |
/// |---|---|
/// | `n` | absolute value of the source number |
/// | `i` | integer digits of `n` |
/// | `v` | number of visible fraction digits, with trailing zeros |
/// | `w` | number of visible fraction digits, without trailing zeros |
/// | `f` | visible fraction digits, with trailing zeros |
/// | `t` | visible fraction digits, without trailing zeros |
/// | `p` | `true` when `w == 0` (not a CLDR operand proper) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operand {
    N,
    I,
    V,
    W,
    F,
    T,
    P,
}

impl Operand {
    /// Every operand, in declaration order.
    pub const ALL: [Operand; 7] = [
        Operand::N,
        Operand::I,
        Operand::V,
        Operand::W,
        Operand::F,
        Operand::T,
        Operand::P,
    ];

    /// Resolves an operand letter as it may appear on the left of a CLDR
    /// relation. `p` is not accepted: it never appears in source rules.
    pub fn from_cldr(c: char) -> Option<Self> {
        match c {
            'n' => Some(Operand::N),
            'i' => Some(Operand::I),
            'v' => Some(Operand::V),
            'w' => Some(Operand::W),
            'f' => Some(Operand::F),
            't' => Some(Operand::T),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operand::N => 'n',
            Operand::I => 'i',
            Operand::V => 'v',
            Operand::W => 'w',
            Operand::F => 'f',
            Operand::T => 't',
            Operand::P => 'p',
        }
    }

    /// Operands that can only be computed from the visible fraction digits.
    pub fn is_fractional(self) -> bool {
        matches!(self, Operand::V | Operand::W | Operand::F | Operand::T)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// A small set of operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OperandSet(u8);

impl OperandSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, operand: Operand) {
        self.0 |= operand.bit();
    }

    pub fn contains(self, operand: Operand) -> bool {
        self.0 & operand.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any of `v`, `w`, `f` or `t` is in the set.
    pub fn any_fractional(self) -> bool {
        self.iter().any(Operand::is_fractional)
    }

    /// Iterates the members in declaration order (`n, i, v, w, f, t, p`).
    pub fn iter(self) -> impl Iterator<Item = Operand> {
        Operand::ALL.into_iter().filter(move |op| self.contains(*op))
    }
}

impl FromIterator<Operand> for OperandSet {
    fn from_iter<T: IntoIterator<Item = Operand>>(iter: T) -> Self {
        let mut set = OperandSet::empty();
        for operand in iter {
            set.insert(operand);
        }
        set
    }
}

impl Serialize for OperandSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// An operand reduced by a modulus, e.g. `i % 10`.
///
/// Identified by `(operand, modulus)`; every relation of a locale that
/// mentions the same pair shares one derived variable named `i10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModuloVar {
    pub operand: Operand,
    pub modulus: u64,
}

impl ModuloVar {
    pub fn new(operand: Operand, modulus: u64) -> Self {
        Self { operand, modulus }
    }

    /// Canonical variable name: `<operand><modulus>`.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ModuloVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operand, self.modulus)
    }
}

/// The left-hand side of a comparison: a bare operand or a modulo variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    Operand(Operand),
    Modulo(ModuloVar),
}

impl Var {
    /// The operand the value is ultimately read from.
    pub fn base(&self) -> Operand {
        match self {
            Var::Operand(operand) => *operand,
            Var::Modulo(var) => var.operand,
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Operand(operand) => write!(f, "{operand}"),
            Var::Modulo(var) => write!(f, "{var}"),
        }
    }
}

impl From<Operand> for Var {
    fn from(operand: Operand) -> Self {
        Var::Operand(operand)
    }
}

impl From<ModuloVar> for Var {
    fn from(var: ModuloVar) -> Self {
        Var::Modulo(var)
    }
}
