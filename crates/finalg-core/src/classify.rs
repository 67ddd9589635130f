//! Classification of raw tables into the most specific algebra.
//!
//! The decision ladder, most specific match first:
//!
//! | Check failed                                  | Result    |
//! |-----------------------------------------------|-----------|
//! | primary table associative                     | Magma     |
//! | identity exists                               | Semigroup |
//! | every element invertible                      | Monoid    |
//! | second table present and ring axioms hold     | Group     |
//! | non-zero elements form a commutative group    | Ring      |
//! | (all passed)                                  | Field     |
//!
//! The classifier never fails on an axiom: it settles on the most specific
//! level the tables satisfy. It only fails on malformed input (shape,
//! duplicate or unknown element names).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algebra::{duplicate_names, nonzero_multiplicative_violation, Algebra, Kind};
use crate::error::{AlgebraError, Result};
use crate::table::CayleyTable;

/// A table given either as element indices or as element names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableInput {
    Indices(Vec<Vec<usize>>),
    Names(Vec<Vec<String>>),
}

impl TableInput {
    /// Build the Cayley table, resolving names against `elements` when needed.
    pub fn resolve(&self, elements: &[String]) -> Result<CayleyTable> {
        match self {
            TableInput::Indices(rows) => CayleyTable::new(rows.clone()),
            TableInput::Names(rows) => CayleyTable::from_names(elements, rows),
        }
    }
}

impl From<Vec<Vec<usize>>> for TableInput {
    fn from(rows: Vec<Vec<usize>>) -> Self {
        TableInput::Indices(rows)
    }
}

impl From<Vec<Vec<String>>> for TableInput {
    fn from(rows: Vec<Vec<String>>) -> Self {
        TableInput::Names(rows)
    }
}

impl From<Vec<Vec<&str>>> for TableInput {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        TableInput::Names(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }
}

impl From<&CayleyTable> for TableInput {
    fn from(table: &CayleyTable) -> Self {
        TableInput::Indices(table.to_rows())
    }
}

/// Construction input for an algebra. Unknown keys (such as `type`) are
/// ignored when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgebraSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub elements: Vec<String>,
    pub table: TableInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table2: Option<TableInput>,
}

impl AlgebraSpec {
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: I,
        table: impl Into<TableInput>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            elements: elements.into_iter().map(Into::into).collect(),
            table: table.into(),
            table2: None,
        }
    }

    /// Attach a second (multiplicative) table.
    pub fn with_table2(mut self, table2: impl Into<TableInput>) -> Self {
        self.table2 = Some(table2.into());
        self
    }

    /// Validate element names and build both tables.
    pub(crate) fn resolve(
        self,
    ) -> Result<(String, String, Vec<String>, CayleyTable, Option<CayleyTable>)> {
        let dups = duplicate_names(&self.elements);
        if !dups.is_empty() {
            return Err(AlgebraError::DuplicateElements { names: dups });
        }
        let table = self.table.resolve(&self.elements)?;
        let table2 = self
            .table2
            .as_ref()
            .map(|t| t.resolve(&self.elements))
            .transpose()?;
        Ok((self.name, self.description, self.elements, table, table2))
    }
}

/// True if the non-zero elements (every index except `zero`) form a
/// commutative group under `mult`.
pub fn is_field(zero: usize, mult: &CayleyTable) -> bool {
    nonzero_multiplicative_violation(zero, mult).is_none()
}

/// The most specific [`Kind`] whose axioms the tables satisfy.
///
/// A second table only matters once the primary table is a group; it lifts
/// the result to Ring when the primary operation is commutative and the
/// second one is associative and distributes over it, and to Field when its
/// non-zero elements also form a commutative group.
pub fn classify_tables(table: &CayleyTable, table2: Option<&CayleyTable>) -> Kind {
    if !table.is_associative() {
        return Kind::Magma;
    }
    let zero = match table.identity() {
        Some(zero) => zero,
        None => return Kind::Semigroup,
    };
    if !table.has_inverses() {
        return Kind::Monoid;
    }
    match table2 {
        Some(mult)
            if mult.order() == table.order()
                && mult.is_associative()
                && table.is_commutative()
                && mult.distributes_over(table) =>
        {
            if is_field(zero, mult) {
                Kind::Field
            } else {
                Kind::Ring
            }
        }
        _ => Kind::Group,
    }
}

/// Classify already-resolved parts and assemble the algebra.
pub(crate) fn classify_parts(
    name: String,
    description: String,
    elements: Vec<String>,
    table: CayleyTable,
    table2: Option<CayleyTable>,
) -> Result<Algebra> {
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
    if let Some(mult) = &table2 {
        if mult.order() != table.order() {
            return Err(AlgebraError::shape(format!(
                "second table is {0}x{0} but the first is {1}x{1}",
                mult.order(),
                table.order()
            )));
        }
    }

    let kind = classify_tables(&table, table2.as_ref());
    debug!(
        algebra = %name,
        order = elements.len(),
        kind = %kind,
        "classified algebra"
    );

    let table2 = if kind.has_second_table() { table2 } else { None };
    Algebra::build(kind, name, description, elements, table, table2, false)
}

/// Build the most specific algebra the given description satisfies.
///
/// Fails only on malformed input: duplicate element names, a table whose
/// shape disagrees with the element list, or a name table mentioning an
/// unknown element.
pub fn make_finite_algebra(spec: AlgebraSpec) -> Result<Algebra> {
    let (name, description, elements, table, table2) = spec.resolve()?;
    classify_parts(name, description, elements, table, table2)
}
