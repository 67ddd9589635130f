//! # finalg-core
//!
//! **Finite algebras defined by Cayley tables**
//!
//! This crate represents magmas, semigroups, monoids, groups, rings and
//! fields as explicit multiplication tables over named elements. It
//! classifies arbitrary tables, derives their properties, builds derived
//! structures and searches for isomorphisms.
//!
//! ## Core Components
//!
//! ### Tables ([`CayleyTable`])
//! A validated square table of element indices with the axiom checks:
//! associativity, commutativity, identity, inverses and distributivity.
//!
//! ### Algebras ([`Algebra`], [`Kind`])
//! One value type for the whole hierarchy. The [`Kind`] tag says which
//! axioms hold; rings and fields carry a second table. Capability checks
//! (`has_identity`, `has_inverses`, `mult_table`) guard the operations that
//! need them.
//!
//! ### Classification ([`make_finite_algebra`])
//! Turns an [`AlgebraSpec`] into the most specific algebra its tables
//! satisfy. Only malformed input fails; axioms never do.
//!
//! ### Derived structures
//! - Direct products and powers (`&a * &b`, [`Algebra::direct_product`])
//! - Closures, closed subsets and subalgebras
//! - Conjugation, normality and subgroup listings for groups
//! - Additive and multiplicative parts of rings
//!
//! ### Isomorphism ([`isomorphic`], [`partition_into_isomorphic_lists`])
//! Backtracking search with identity pinning and incremental pruning.
//!
//! ## Quick Start
//!
//! ```rust
//! use finalg_core::{make_finite_algebra, AlgebraSpec, Kind};
//!
//! let spec = AlgebraSpec::new(
//!     "Z4",
//!     "Cyclic group of order 4",
//!     ["e", "a", "a^2", "a^3"],
//!     vec![
//!         vec![0, 1, 2, 3],
//!         vec![1, 2, 3, 0],
//!         vec![2, 3, 0, 1],
//!         vec![3, 0, 1, 2],
//!     ],
//! );
//! let z4 = make_finite_algebra(spec).unwrap();
//!
//! assert_eq!(z4.kind(), Kind::Group);
//! assert_eq!(z4.inv("a").unwrap(), "a^3");
//! assert_eq!(z4.element_order("a").unwrap(), Some(4));
//! ```
//!
//! ### Products and isomorphism
//!
//! ```rust
//! use finalg_core::generators::{generate_cyclic_group, generate_powerset_group};
//!
//! let z2 = generate_cyclic_group(2, "e", "a").unwrap();
//! let v4 = (&z2 * &z2).unwrap();
//! let ps2 = generate_powerset_group(2).unwrap();
//!
//! assert!(v4.is_isomorphic_to(&ps2));
//! ```
//!
//! ## Architecture
//!
//! - **table**: Cayley tables and axiom checks
//! - **operator**: variadic operation over element names
//! - **algebra**: the tagged algebra value, group and ring operations
//! - **derive**: direct products, closures and subalgebras
//! - **classify**: construction input and the classification ladder
//! - **isomorphism**: isomorphism search and partitioning
//! - **[`generators`]**: standard families (cyclic, symmetric, powerset, modular)
//! - **[`serialization`]**: canonical JSON records and file helpers
//! - **config**: library settings
//! - **display**: text reports
//! - **error**: error types

mod algebra;
mod classify;
mod config;
mod derive;
mod display;
mod error;
pub mod generators;
mod isomorphism;
mod operator;
pub mod serialization;
mod table;


pub use algebra::{Algebra, Kind};
pub use classify::{classify_tables, is_field, make_finite_algebra, AlgebraSpec, TableInput};
pub use config::{AlgebraConfig, DEFAULT_DELIMITER, DEFAULT_REPORT_MAX_SIZE};
pub use error::{AlgebraError, Axiom, Operation, Result};
pub use isomorphism::{
    isomorphic, partition_into_isomorphic_lists, verify_isomorphism, IsomorphismResult,
};
pub use operator::Operator;
pub use serialization::{load_algebra, save_algebra, AlgebraRecord, VersionedAlgebra};
pub use table::CayleyTable;
