//! Variadic, name-level view of a Cayley table.

use std::collections::HashMap;

use crate::error::{AlgebraError, Result};
use crate::table::CayleyTable;

/// A binary operation bound to an element list, an optional identity and a table.
///
/// Calling it with zero arguments yields the identity (possibly none), one
/// argument yields that element back after validating it, and two or more
/// arguments are folded strictly from the left: `op(a, b, c) = op(op(a, b), c)`.
/// The left fold keeps the table's own grouping, so non-associative tables
/// are evaluated faithfully.
#[derive(Clone, Copy, Debug)]
pub struct Operator<'a> {
    elements: &'a [String],
    index: &'a HashMap<String, usize>,
    identity: Option<usize>,
    table: &'a CayleyTable,
}

impl<'a> Operator<'a> {
    pub(crate) fn new(
        elements: &'a [String],
        index: &'a HashMap<String, usize>,
        identity: Option<usize>,
        table: &'a CayleyTable,
    ) -> Self {
        Self {
            elements,
            index,
            identity,
            table,
        }
    }

    fn lookup(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| AlgebraError::unknown(name))
    }

    /// Apply the operation to any number of element names.
    pub fn call<S: AsRef<str>>(&self, args: &[S]) -> Result<Option<&'a str>> {
        let elements = self.elements;
        match args {
            [] => Ok(self.identity.map(|idx| elements[idx].as_str())),
            [first, rest @ ..] => {
                let mut acc = self.lookup(first.as_ref())?;
                for arg in rest {
                    acc = self.table.get(acc, self.lookup(arg.as_ref())?);
                }
                Ok(Some(elements[acc].as_str()))
            }
        }
    }

    /// `a ∘ b` by name.
    pub fn apply(&self, a: &str, b: &str) -> Result<&'a str> {
        let idx = self.table.get(self.lookup(a)?, self.lookup(b)?);
        Ok(self.elements[idx].as_str())
    }

    /// The bound identity element, if any.
    pub fn identity(&self) -> Option<&'a str> {
        let elements = self.elements;
        self.identity.map(|idx| elements[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<String>, HashMap<String, usize>, CayleyTable) {
        let elements: Vec<String> = ["r", "p", "s"].iter().map(|s| s.to_string()).collect();
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.clone(), i))
            .collect();
        let table = CayleyTable::new(vec![vec![0, 1, 0], vec![1, 1, 2], vec![0, 2, 2]]).unwrap();
        (elements, index, table)
    }

    #[test]
    fn test_zero_args_returns_identity() {
        let (elements, index, table) = fixture();
        let op = Operator::new(&elements, &index, None, &table);
        assert_eq!(op.call::<&str>(&[]).unwrap(), None);

        let op = Operator::new(&elements, &index, Some(1), &table);
        assert_eq!(op.call::<&str>(&[]).unwrap(), Some("p"));
    }

    #[test]
    fn test_single_arg() {
        let (elements, index, table) = fixture();
        let op = Operator::new(&elements, &index, None, &table);
        assert_eq!(op.call(&["s"]).unwrap(), Some("s"));
        assert!(matches!(
            op.call(&["x"]),
            Err(AlgebraError::UnknownElement { .. })
        ));
    }

    #[test]
    fn test_left_fold_keeps_grouping() {
        let (elements, index, table) = fixture();
        let op = Operator::new(&elements, &index, None, &table);
        // (r∘p)∘s = p∘s = s, while r∘(p∘s) = r∘s = r
        assert_eq!(op.call(&["r", "p", "s"]).unwrap(), Some("s"));
        let ps = op.apply("p", "s").unwrap();
        assert_eq!(op.apply("r", ps).unwrap(), "r");
    }

    #[test]
    fn test_unknown_in_fold() {
        let (elements, index, table) = fixture();
        let op = Operator::new(&elements, &index, None, &table);
        assert!(op.call(&["r", "p", "rock"]).is_err());
    }
}
