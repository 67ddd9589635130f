//! Ring and field operations over the second (multiplicative) table.

use super::{Algebra, MultTable};
use crate::classify::classify_parts;
use crate::error::{AlgebraError, Axiom, Result};
use crate::operator::Operator;
use crate::table::CayleyTable;

/// Why the non-zero elements of `mult` fail to form a commutative group, if
/// they do fail.
///
/// A product of two non-zero elements landing on `zero` means the set is not
/// closed, which is reported as missing inverses. The single-element ring has
/// no non-zero elements and is reported as lacking an identity.
pub(crate) fn nonzero_multiplicative_violation(zero: usize, mult: &CayleyTable) -> Option<Axiom> {
    let nonzero: Vec<usize> = (0..mult.order()).filter(|&i| i != zero).collect();
    if nonzero.is_empty() {
        return Some(Axiom::NoIdentity);
    }
    let sub = match mult.restricted(&nonzero) {
        Ok(sub) => sub,
        Err(_) => return Some(Axiom::NoInverses),
    };
    if sub.identity().is_none() {
        Some(Axiom::NoIdentity)
    } else if !sub.has_inverses() {
        Some(Axiom::NoInverses)
    } else if !sub.is_commutative() {
        Some(Axiom::NotCommutative)
    } else {
        None
    }
}

impl Algebra {
    fn require_mult(&self) -> Result<&MultTable> {
        self.mult
            .as_ref()
            .ok_or_else(|| AlgebraError::missing("multiplicative table", &self.name))
    }

    /// The multiplicative table of a ring or field.
    pub fn mult_table(&self) -> Option<&CayleyTable> {
        self.mult.as_ref().map(|m| &m.table)
    }

    /// The additive table; the same as [`table`](Self::table).
    pub fn add_table(&self) -> &CayleyTable {
        &self.table
    }

    /// Ring addition, the primary operation folded over `args`.
    pub fn add<S: AsRef<str>>(&self, args: &[S]) -> Result<Option<&str>> {
        self.op_all(args)
    }

    /// Ring multiplication as a variadic [`Operator`].
    pub fn mult_operator(&self) -> Result<Operator<'_>> {
        let mult = self.require_mult()?;
        Ok(Operator::new(
            &self.elements,
            &self.index,
            mult.identity,
            &mult.table,
        ))
    }

    /// Ring multiplication folded over `args`.
    pub fn mult<S: AsRef<str>>(&self, args: &[S]) -> Result<Option<&str>> {
        self.mult_operator()?.call(args)
    }

    /// The additive identity.
    pub fn zero(&self) -> Option<&str> {
        self.identity()
    }

    pub fn add_identity(&self) -> Option<&str> {
        self.identity()
    }

    /// The multiplicative identity, if the ring has one.
    pub fn one(&self) -> Option<&str> {
        self.mult
            .as_ref()
            .and_then(|m| m.identity)
            .map(|idx| self.elements[idx].as_str())
    }

    pub fn mult_identity(&self) -> Option<&str> {
        self.one()
    }

    pub fn has_mult_identity(&self) -> bool {
        self.one().is_some()
    }

    /// Non-zero elements `a` for which some non-zero `b` gives `a*b == 0` or
    /// `b*a == 0`, in element order.
    pub fn zero_divisors(&self) -> Result<Vec<String>> {
        let mult = self.require_mult()?;
        let zero = self
            .identity
            .ok_or_else(|| AlgebraError::missing("additive identity", &self.name))?;

        let n = self.order();
        let mut implicated = vec![false; n];
        for a in (0..n).filter(|&a| a != zero) {
            for b in (0..n).filter(|&b| b != zero) {
                if mult.table.get(a, b) == zero {
                    implicated[a] = true;
                    implicated[b] = true;
                }
            }
        }

        Ok((0..n)
            .filter(|&i| implicated[i])
            .map(|i| self.elements[i].clone())
            .collect())
    }

    /// The elements under addition alone, classified (a commutative group for
    /// any ring).
    pub fn extract_additive_algebra(&self) -> Result<Algebra> {
        self.require_mult()?;
        classify_parts(
            format!("{}.Add", self.name),
            format!("Additive-only portion of {}", self.name),
            self.elements.clone(),
            self.table.clone(),
            None,
        )
    }

    /// The elements under multiplication alone, classified (at least a
    /// semigroup for any ring).
    pub fn extract_multiplicative_algebra(&self) -> Result<Algebra> {
        let mult = self.require_mult()?;
        classify_parts(
            format!("{}.Mult", self.name),
            format!("Multiplicative-only portion of {}", self.name),
            self.elements.clone(),
            mult.table.clone(),
            None,
        )
    }
}
