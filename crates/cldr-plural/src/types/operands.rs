use std::str::FromStr;

use crate::parser::ParseError;
use crate::types::{ModuloVar, Operand, Var};

/// The plural operands of one concrete quantity.
///
/// Built from the decimal literal as written, so visible trailing zeros
/// count: `"1"` and `"1.0"` share `n` and `i` but differ in `v`.
///
/// ```
/// use cldr_plural::Operands;
///
/// let ops: Operands = "12.50".parse().unwrap();
/// assert_eq!((ops.i, ops.v, ops.w, ops.f, ops.t), (12, 2, 1, 50, 5));
/// assert!(!ops.p());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Operands {
    pub n: f64,
    pub i: u64,
    pub v: u64,
    pub w: u64,
    pub f: u64,
    pub t: u64,
}

impl Operands {
    /// Derives the operands of a decimal literal such as `"-3"` or `"1.50"`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidQuantity {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }

        let significant = fraction.trim_end_matches('0');
        let digits = |s: &str| -> Result<u64, ParseError> {
            if s.is_empty() {
                Ok(0)
            } else {
                s.parse().map_err(|_| invalid())
            }
        };

        Ok(Operands {
            n: unsigned.parse().map_err(|_| invalid())?,
            i: digits(integer)?,
            v: fraction.len() as u64,
            w: significant.len() as u64,
            f: digits(fraction)?,
            t: digits(significant)?,
        })
    }

    /// The derived `p` flag: no significant fraction digits.
    pub fn p(&self) -> bool {
        self.w == 0
    }

    /// Numeric value of an operand; `p` reads as `1.0` or `0.0`.
    pub fn get(&self, operand: Operand) -> f64 {
        match operand {
            Operand::N => self.n,
            Operand::I => self.i as f64,
            Operand::V => self.v as f64,
            Operand::W => self.w as f64,
            Operand::F => self.f as f64,
            Operand::T => self.t as f64,
            Operand::P => {
                if self.p() {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Value of a comparison's left-hand side. `n % m` keeps the fraction.
    pub fn value_of(&self, var: &Var) -> f64 {
        match var {
            Var::Operand(operand) => self.get(*operand),
            Var::Modulo(ModuloVar { operand, modulus }) => self.get(*operand) % (*modulus as f64),
        }
    }
}

impl FromStr for Operands {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operands::parse(s)
    }
}

impl From<u64> for Operands {
    fn from(value: u64) -> Self {
        Operands {
            n: value as f64,
            i: value,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        }
    }
}
