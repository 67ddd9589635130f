//! Library-level settings.

use serde::{Deserialize, Serialize};

/// Separator between component names in direct-product elements.
pub const DEFAULT_DELIMITER: &str = ":";

/// Tables larger than this are left out of reports by default.
pub const DEFAULT_REPORT_MAX_SIZE: usize = 12;

/// Settings for building and reporting on algebras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgebraConfig {
    /// Separator used when naming direct-product elements
    pub delimiter: String,
    /// Skip single-element seeds when enumerating closed subsets
    pub non_trivial: bool,
    /// Largest order whose tables are printed in reports
    pub report_max_size: usize,
    /// Print tables with element names instead of indices
    pub use_names: bool,
}

impl Default for AlgebraConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            non_trivial: true,
            report_max_size: DEFAULT_REPORT_MAX_SIZE,
            use_names: false,
        }
    }
}
