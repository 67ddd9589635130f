//! The algebra hierarchy as a single tagged value.
//!
//! An [`Algebra`] carries a [`Kind`] tag (Magma → Semigroup → Monoid → Group →
//! Ring → Field) and only the data valid for that kind: rings and fields hold
//! a second (multiplicative) table, everything else holds one. Operations that
//! need an identity, inverses or a second table check for that capability at
//! call time instead of relying on the tag.

mod group;
mod ring;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::AlgebraSpec;
use crate::config::DEFAULT_DELIMITER;
use crate::error::{AlgebraError, Axiom, Operation, Result};
use crate::operator::Operator;
use crate::table::CayleyTable;

pub(crate) use ring::nonzero_multiplicative_violation;

/// Structural level of an algebra, ordered from least to most specific.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    Magma,
    Semigroup,
    Monoid,
    Group,
    Ring,
    Field,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Magma,
        Kind::Semigroup,
        Kind::Monoid,
        Kind::Group,
        Kind::Ring,
        Kind::Field,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kind::Magma => "Magma",
            Kind::Semigroup => "Semigroup",
            Kind::Monoid => "Monoid",
            Kind::Group => "Group",
            Kind::Ring => "Ring",
            Kind::Field => "Field",
        }
    }

    /// Whether algebras of this kind carry a multiplicative table.
    pub fn has_second_table(self) -> bool {
        self >= Kind::Ring
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The multiplicative half of a ring or field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MultTable {
    pub(crate) table: CayleyTable,
    pub(crate) identity: Option<usize>,
}

/// A finite algebra defined by one (or, for rings and fields, two) Cayley tables.
///
/// Instances are immutable once built. Derived algebras (products,
/// subalgebras, reorderings) are always new values.
#[derive(Clone, Debug)]
pub struct Algebra {
    name: String,
    description: String,
    kind: Kind,
    elements: Vec<String>,
    index: HashMap<String, usize>,
    table: CayleyTable,
    identity: Option<usize>,
    inverses: Option<Vec<usize>>,
    mult: Option<MultTable>,
    delimiter: String,
}

/// Names that occur more than once, in order of first repetition.
pub(crate) fn duplicate_names(elements: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut dups = Vec::new();
    for name in elements {
        let count = counts.entry(name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            dups.push(name.clone());
        }
    }
    dups
}

impl Algebra {
    /// Assemble an algebra of the given kind.
    ///
    /// Shape and duplicate checks always run; axiom checks run only when
    /// `check_axioms` is set. The classifier passes `false` because it has
    /// already established the axioms while choosing `kind`.
    pub(crate) fn build(
        kind: Kind,
        name: String,
        description: String,
        elements: Vec<String>,
        table: CayleyTable,
        mult: Option<CayleyTable>,
        check_axioms: bool,
    ) -> Result<Self> {
        if elements.is_empty() {
            return Err(AlgebraError::shape("an algebra needs at least one element"));
        }
        let dups = duplicate_names(&elements);
        if !dups.is_empty() {
            return Err(AlgebraError::DuplicateElements { names: dups });
        }
        if table.order() != elements.len() {
            return Err(AlgebraError::shape(format!(
                "table is {0}x{0} but there are {1} elements",
                table.order(),
                elements.len()
            )));
        }

        let mult = match (kind.has_second_table(), mult) {
            (true, Some(mult)) => {
                if mult.order() != elements.len() {
                    return Err(AlgebraError::shape(format!(
                        "multiplicative table is {0}x{0} but there are {1} elements",
                        mult.order(),
                        elements.len()
                    )));
                }
                let identity = mult.identity();
                Some(MultTable {
                    table: mult,
                    identity,
                })
            }
            (true, None) => {
                return Err(AlgebraError::shape(format!(
                    "a {} requires a multiplicative table",
                    kind
                )))
            }
            (false, Some(_)) => {
                return Err(AlgebraError::shape(format!(
                    "a {} takes a single table",
                    kind
                )))
            }
            (false, None) => None,
        };

        let index = elements
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        let identity = table.identity();
        let inverses = table.inverses();

        let algebra = Self {
            name,
            description,
            kind,
            elements,
            index,
            table,
            identity,
            inverses,
            mult,
            delimiter: DEFAULT_DELIMITER.to_string(),
        };

        if check_axioms {
            algebra.check_axioms()?;
        }
        Ok(algebra)
    }

    fn check_axioms(&self) -> Result<()> {
        let kind = self.kind;
        let violation = |operation, axiom| AlgebraError::AxiomViolation {
            kind,
            operation,
            axiom,
        };

        if kind >= Kind::Semigroup && !self.table.is_associative() {
            return Err(violation(Operation::Primary, Axiom::NotAssociative));
        }
        if kind >= Kind::Monoid && self.identity.is_none() {
            return Err(violation(Operation::Primary, Axiom::NoIdentity));
        }
        if kind >= Kind::Group && self.inverses.is_none() {
            return Err(violation(Operation::Primary, Axiom::NoInverses));
        }
        if let Some(mult) = &self.mult {
            if !self.table.is_commutative() {
                return Err(violation(Operation::Primary, Axiom::NotCommutative));
            }
            if !mult.table.is_associative() {
                return Err(violation(Operation::Multiplicative, Axiom::NotAssociative));
            }
            if !mult.table.distributes_over(&self.table) {
                return Err(violation(Operation::Multiplicative, Axiom::NotDistributive));
            }
            if kind == Kind::Field {
                if let Some(zero) = self.identity {
                    if let Some(axiom) = nonzero_multiplicative_violation(zero, &mult.table) {
                        return Err(violation(Operation::Multiplicative, axiom));
                    }
                }
            }
        }
        Ok(())
    }

    /// Construct an algebra at an asserted level, verifying every axiom that
    /// level requires.
    ///
    /// Fails with [`AlgebraError::AxiomViolation`] naming the first axiom the
    /// tables break. Use [`make_finite_algebra`](crate::make_finite_algebra)
    /// to get the most specific level instead.
    pub fn with_kind(kind: Kind, spec: AlgebraSpec) -> Result<Self> {
        let (name, description, elements, table, table2) = spec.resolve()?;
        Self::build(kind, name, description, elements, table, table2, true)
    }

    fn single_table<I, S>(
        kind: Kind,
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = elements.into_iter().map(Into::into).collect();
        Self::build(
            kind,
            name.into(),
            description.into(),
            elements,
            CayleyTable::new(table)?,
            None,
            true,
        )
    }

    fn two_tables<I, S>(
        kind: Kind,
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
        table2: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = elements.into_iter().map(Into::into).collect();
        Self::build(
            kind,
            name.into(),
            description.into(),
            elements,
            CayleyTable::new(table)?,
            Some(CayleyTable::new(table2)?),
            true,
        )
    }

    pub fn magma<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::single_table(Kind::Magma, name, description, elements, table)
    }

    pub fn semigroup<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::single_table(Kind::Semigroup, name, description, elements, table)
    }

    pub fn monoid<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::single_table(Kind::Monoid, name, description, elements, table)
    }

    pub fn group<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::single_table(Kind::Group, name, description, elements, table)
    }

    pub fn ring<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
        table2: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::two_tables(Kind::Ring, name, description, elements, table, table2)
    }

    pub fn field<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: Vec<Vec<usize>>,
        table2: Vec<Vec<usize>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::two_tables(Kind::Field, name, description, elements, table, table2)
    }

    // ===== Accessors =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn order(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| AlgebraError::unknown(name))
    }

    /// The primary Cayley table (addition, for rings and fields).
    pub fn table(&self) -> &CayleyTable {
        &self.table
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.map(|idx| self.elements[idx].as_str())
    }

    pub fn identity_index(&self) -> Option<usize> {
        self.identity
    }

    pub fn has_identity(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_associative(&self) -> bool {
        self.table.is_associative()
    }

    pub fn is_commutative(&self) -> bool {
        self.table.is_commutative()
    }

    pub fn is_abelian(&self) -> bool {
        self.is_commutative()
    }

    pub fn has_inverses(&self) -> bool {
        self.inverses.is_some()
    }

    /// Separator placed between component names of direct-product elements.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Use a different separator for direct-product element names.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Rename an algebra, keeping its structure.
    pub fn with_name(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.name = name.into();
        self.description = description.into();
        self
    }

    pub(crate) fn inverse_indices(&self) -> Option<&[usize]> {
        self.inverses.as_deref()
    }

    pub(crate) fn indices_of<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        names.iter().map(|n| self.index_of(n.as_ref())).collect()
    }

    pub(crate) fn names_of(&self, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| self.elements[i].clone()).collect()
    }

    // ===== Operation =====

    /// The primary operation as a variadic [`Operator`].
    pub fn operator(&self) -> Operator<'_> {
        Operator::new(&self.elements, &self.index, self.identity, &self.table)
    }

    /// `a ∘ b` by name.
    pub fn op(&self, a: &str, b: &str) -> Result<&str> {
        let idx = self.table.get(self.index_of(a)?, self.index_of(b)?);
        Ok(self.elements[idx].as_str())
    }

    /// Left fold of the primary operation over any number of elements.
    pub fn op_all<S: AsRef<str>>(&self, args: &[S]) -> Result<Option<&str>> {
        self.operator().call(args)
    }

    /// Two-sided inverse of `name`.
    pub fn inv(&self, name: &str) -> Result<&str> {
        let idx = self.index_of(name)?;
        let inverses = self
            .inverses
            .as_ref()
            .ok_or_else(|| AlgebraError::missing("inverses", &self.name))?;
        Ok(self.elements[inverses[idx]].as_str())
    }

    /// Smallest `k ≥ 1` with `name^k == identity`.
    ///
    /// `None` when the powers of `name` never reach the identity, which can
    /// happen in a monoid.
    pub fn element_order(&self, name: &str) -> Result<Option<usize>> {
        let e = self
            .identity
            .ok_or_else(|| AlgebraError::missing("identity element", &self.name))?;
        let a = self.index_of(name)?;
        let mut prod = a;
        for k in 1..=self.order() {
            if prod == e {
                return Ok(Some(k));
            }
            prod = self.table.get(prod, a);
        }
        Ok(None)
    }

    /// The primary table with indices replaced by element names.
    pub fn table_with_names(&self) -> Vec<Vec<String>> {
        self.table.to_names(&self.elements)
    }

    /// A new algebra of the same kind with its elements listed in `reordered` order.
    pub fn reorder_elements<S: AsRef<str>>(&self, reordered: &[S]) -> Result<Self> {
        if reordered.len() != self.order() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.order(),
                actual: reordered.len(),
            });
        }
        let names: Vec<String> = reordered.iter().map(|s| s.as_ref().to_string()).collect();
        let dups = duplicate_names(&names);
        if !dups.is_empty() {
            return Err(AlgebraError::DuplicateElements { names: dups });
        }
        let perm = self.indices_of(&names)?;

        let table = self.table.permuted(&perm);
        let mult = self.mult.as_ref().map(|m| m.table.permuted(&perm));
        Self::build(
            self.kind,
            format!("{}_REORDERED", self.name),
            format!("{} (elements reordered)", self.description),
            names,
            table,
            mult,
            false,
        )
        .map(|alg| alg.with_delimiter(self.delimiter.clone()))
    }
}

/// Structural equality: same elements in the same order and the same tables.
/// Names, descriptions and delimiters are ignored.
impl PartialEq for Algebra {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
            && self.table == other.table
            && self.mult.as_ref().map(|m| &m.table) == other.mult.as_ref().map(|m| &m.table)
    }
}

impl Eq for Algebra {}
