//! JSON records for algebras.
//!
//! [`AlgebraRecord`] is the canonical output form: integer tables plus an
//! informational `type` tag. It deserializes into an [`AlgebraSpec`] input
//! as well, since the classifier ignores the tag and recomputes the kind.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algebra::{Algebra, Kind};
use crate::classify::{make_finite_algebra, AlgebraSpec, TableInput};
use crate::error::Result;

/// Current serialization format version
pub const FORMAT_VERSION: &str = "1.0.0";

/// Canonical serialized form of an algebra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgebraRecord {
    #[serde(rename = "type")]
    pub kind: Kind,
    pub name: String,
    pub description: String,
    pub elements: Vec<String>,
    pub table: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table2: Option<Vec<Vec<usize>>>,
}

impl AlgebraRecord {
    /// Re-classify the record; the `type` tag is not trusted.
    pub fn into_algebra(self) -> Result<Algebra> {
        make_finite_algebra(self.into())
    }
}

impl From<AlgebraRecord> for AlgebraSpec {
    fn from(record: AlgebraRecord) -> Self {
        AlgebraSpec {
            name: record.name,
            description: record.description,
            elements: record.elements,
            table: TableInput::Indices(record.table),
            table2: record.table2.map(TableInput::Indices),
        }
    }
}

impl Algebra {
    pub fn to_record(&self) -> AlgebraRecord {
        AlgebraRecord {
            kind: self.kind(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            elements: self.elements().to_vec(),
            table: self.table().to_rows(),
            table2: self.mult_table().map(|t| t.to_rows()),
        }
    }

    /// Construction input that rebuilds this algebra.
    pub fn to_spec(&self) -> AlgebraSpec {
        self.to_record().into()
    }
}

/// Versioned wrapper for algebra serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionedAlgebra {
    /// Format version (semver)
    pub version: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: Option<String>,
    pub algebra: AlgebraRecord,
}

impl VersionedAlgebra {
    pub fn new(algebra: &Algebra) -> Self {
        VersionedAlgebra {
            version: FORMAT_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            algebra: algebra.to_record(),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to compact JSON
    pub fn to_json_compact(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Major versions must match.
    pub fn is_compatible(&self) -> bool {
        let major = |v: &str| v.split('.').next().map(str::to_string);
        major(&self.version) == major(FORMAT_VERSION)
    }
}

/// Read an algebra description from a JSON file and classify it.
///
/// Accepts a bare [`AlgebraSpec`] (index or name tables, optional `type`
/// key) or a [`VersionedAlgebra`] envelope.
pub fn load_algebra(path: impl AsRef<Path>) -> Result<Algebra> {
    let text = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let spec: AlgebraSpec = if value.get("algebra").is_some() && value.get("version").is_some() {
        let envelope: VersionedAlgebra = serde_json::from_value(value)?;
        envelope.algebra.into()
    } else {
        serde_json::from_value(value)?
    };
    make_finite_algebra(spec)
}

/// Write an algebra as a pretty-printed [`AlgebraRecord`].
pub fn save_algebra(algebra: &Algebra, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&algebra.to_record())?;
    fs::write(path, json)?;
    Ok(())
}
