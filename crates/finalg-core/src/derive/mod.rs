//! Structures derived from existing algebras.

mod closure;
mod product;
