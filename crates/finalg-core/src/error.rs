//! Error types for finite algebra construction and derivation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algebra::Kind;

/// An algebraic axiom that a table failed to satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axiom {
    NotAssociative,
    NoIdentity,
    NoInverses,
    NotCommutative,
    NotDistributive,
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axiom::NotAssociative => write!(f, "operation is not associative"),
            Axiom::NoIdentity => write!(f, "no identity element"),
            Axiom::NoInverses => write!(f, "not every element has an inverse"),
            Axiom::NotCommutative => write!(f, "operation is not commutative"),
            Axiom::NotDistributive => {
                write!(f, "multiplication does not distribute over addition")
            }
        }
    }
}

/// Which of an algebra's operations an axiom check was applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// The primary table (addition, for rings and fields)
    Primary,
    /// The second table of a ring or field
    Multiplicative,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Primary => write!(f, "primary"),
            Operation::Multiplicative => write!(f, "multiplicative"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AlgebraError {
    #[error("Table shape error: {reason}")]
    Shape { reason: String },
    #[error("Table entry {value} at ({row}, {col}) is out of range for an algebra of order {order}")]
    EntryOutOfRange {
        row: usize,
        col: usize,
        value: usize,
        order: usize,
    },
    #[error("Duplicate element names: {names:?}")]
    DuplicateElements { names: Vec<String> },
    #[error("'{name}' is not a valid element name")]
    UnknownElement { name: String },
    #[error("Cannot construct {kind}: {operation} {axiom}")]
    AxiomViolation {
        kind: Kind,
        operation: Operation,
        axiom: Axiom,
    },
    #[error("Dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Element subset is not closed: product '{product}' falls outside it")]
    NotClosed { product: String },
    #[error("{algebra} has no {capability}")]
    MissingCapability {
        capability: &'static str,
        algebra: String,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlgebraError {
    /// True for the two table-shape variants.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            AlgebraError::Shape { .. } | AlgebraError::EntryOutOfRange { .. }
        )
    }

    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        AlgebraError::Shape {
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        AlgebraError::UnknownElement { name: name.into() }
    }

    pub(crate) fn missing(capability: &'static str, algebra: impl Into<String>) -> Self {
        AlgebraError::MissingCapability {
            capability,
            algebra: algebra.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
