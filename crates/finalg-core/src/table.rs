//! Dense Cayley tables.
//!
//! A [`CayleyTable`] stores a closed binary operation over `n` elements as an
//! `n×n` matrix of element indices: `table[i][j]` is the index of `i ∘ j`.
//! Every structural query is a brute-force scan over the table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct CayleyTable {
    order: usize,
    /// Row-major cells, `order * order` long
    cells: Vec<usize>,
}

impl CayleyTable {
    /// Build a table from rows of element indices.
    ///
    /// Fails with a shape error if the matrix is empty, not square, or holds
    /// an entry outside `0..n`.
    pub fn new(rows: Vec<Vec<usize>>) -> Result<Self> {
        let order = rows.len();
        if order == 0 {
            return Err(AlgebraError::shape("table must have at least one row"));
        }

        let mut cells = Vec::with_capacity(order * order);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != order {
                return Err(AlgebraError::shape(format!(
                    "row {} has {} entries, expected {}",
                    row_idx,
                    row.len(),
                    order
                )));
            }
            for (col_idx, value) in row.into_iter().enumerate() {
                if value >= order {
                    return Err(AlgebraError::EntryOutOfRange {
                        row: row_idx,
                        col: col_idx,
                        value,
                        order,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self { order, cells })
    }

    /// Build a table whose cells are element names, resolved against `elements`.
    pub fn from_names<S: AsRef<str>>(elements: &[String], rows: &[Vec<S>]) -> Result<Self> {
        let lookup: HashMap<&str, usize> = elements
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();

        let index_rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|name| {
                        lookup
                            .get(name.as_ref())
                            .copied()
                            .ok_or_else(|| AlgebraError::unknown(name.as_ref()))
                    })
                    .collect::<Result<Vec<usize>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(index_rows)
    }

    /// Build an `order×order` table by evaluating `op` on every index pair.
    pub fn from_fn(order: usize, op: impl Fn(usize, usize) -> usize) -> Result<Self> {
        let rows = (0..order)
            .map(|a| (0..order).map(|b| op(a, b)).collect())
            .collect();
        Self::new(rows)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Index of `a ∘ b`. Both indices must be below [`order`](Self::order).
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> usize {
        self.cells[a * self.order + b]
    }

    pub fn row(&self, a: usize) -> &[usize] {
        &self.cells[a * self.order..(a + 1) * self.order]
    }

    /// Check `(a∘b)∘c == a∘(b∘c)` for every triple. Stops at the first violation.
    pub fn is_associative(&self) -> bool {
        let n = self.order;
        for a in 0..n {
            for b in 0..n {
                let ab = self.get(a, b);
                for c in 0..n {
                    if self.get(ab, c) != self.get(a, self.get(b, c)) {
                        return false;
                    }
                }
            }
        }
        true
    }

    pub fn is_commutative(&self) -> bool {
        let n = self.order;
        (0..n).all(|a| (a + 1..n).all(|b| self.get(a, b) == self.get(b, a)))
    }

    /// Index of the two-sided identity, if one exists.
    ///
    /// The first index passing the test is returned. In an associative table
    /// the identity is unique; in a malformed table the lowest index wins.
    pub fn identity(&self) -> Option<usize> {
        let n = self.order;
        (0..n).find(|&e| (0..n).all(|x| self.get(e, x) == x && self.get(x, e) == x))
    }

    /// True iff an identity exists and every row contains it exactly once, at a
    /// column whose row maps back to the identity (a two-sided inverse).
    pub fn has_inverses(&self) -> bool {
        match self.identity() {
            Some(e) => (0..self.order).all(|a| {
                let mut hits = self.row(a).iter().enumerate().filter(|(_, &v)| v == e);
                match (hits.next(), hits.next()) {
                    (Some((b, _)), None) => self.get(b, a) == e,
                    _ => false,
                }
            }),
            None => false,
        }
    }

    /// Two-sided inverse of `a`, if the table has an identity and `a` is invertible.
    pub fn inverse_of(&self, a: usize) -> Option<usize> {
        let e = self.identity()?;
        (0..self.order).find(|&b| self.get(a, b) == e && self.get(b, a) == e)
    }

    /// The inverse of every element, indexed by element, when all exist.
    pub fn inverses(&self) -> Option<Vec<usize>> {
        if !self.has_inverses() {
            return None;
        }
        let e = self.identity()?;
        // Each row holds the identity exactly once, at the inverse's column.
        (0..self.order)
            .map(|a| self.row(a).iter().position(|&v| v == e))
            .collect()
    }

    /// Check that this table (multiplication) distributes over `addition`
    /// from both sides:
    /// `a*(b+c) == a*b + a*c` and `(b+c)*a == b*a + c*a`.
    pub fn distributes_over(&self, addition: &CayleyTable) -> bool {
        if self.order != addition.order {
            return false;
        }
        let n = self.order;
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    let sum = addition.get(b, c);
                    let left = addition.get(self.get(a, b), self.get(a, c));
                    if self.get(a, sum) != left {
                        return false;
                    }
                    let right = addition.get(self.get(b, a), self.get(c, a));
                    if self.get(sum, a) != right {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Relabel the table so that new index `k` stands for old index `perm[k]`.
    ///
    /// `perm` must be a permutation of `0..order`.
    pub(crate) fn permuted(&self, perm: &[usize]) -> CayleyTable {
        let n = self.order;
        let mut position = vec![0; n];
        for (new_idx, &old_idx) in perm.iter().enumerate() {
            position[old_idx] = new_idx;
        }

        let mut cells = Vec::with_capacity(n * n);
        for &row in perm {
            for &col in perm {
                cells.push(position[self.get(row, col)]);
            }
        }
        CayleyTable { order: n, cells }
    }

    /// The table restricted to `subset`, reindexed so that local index `k`
    /// stands for `subset[k]`.
    ///
    /// Returns `Err(product)` with the first product index that falls outside
    /// the subset when the subset is not closed. `subset` must hold distinct,
    /// in-range indices.
    pub(crate) fn restricted(&self, subset: &[usize]) -> std::result::Result<CayleyTable, usize> {
        let mut position = vec![None; self.order];
        for (local, &global) in subset.iter().enumerate() {
            position[global] = Some(local);
        }

        let mut cells = Vec::with_capacity(subset.len() * subset.len());
        for &a in subset {
            for &b in subset {
                let product = self.get(a, b);
                match position[product] {
                    Some(local) => cells.push(local),
                    None => return Err(product),
                }
            }
        }
        Ok(CayleyTable {
            order: subset.len(),
            cells,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.cells.chunks(self.order).map(|r| r.to_vec()).collect()
    }

    /// The table with every index replaced by the matching element name.
    pub fn to_names(&self, elements: &[String]) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.order)
            .map(|r| r.iter().map(|&idx| elements[idx].clone()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<usize>>> for CayleyTable {
    type Error = AlgebraError;

    fn try_from(rows: Vec<Vec<usize>>) -> Result<Self> {
        CayleyTable::new(rows)
    }
}

impl From<CayleyTable> for Vec<Vec<usize>> {
    fn from(table: CayleyTable) -> Self {
        table.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> CayleyTable {
        CayleyTable::new(vec![vec![0, 1, 0], vec![1, 1, 2], vec![0, 2, 2]]).unwrap()
    }

    fn z4() -> CayleyTable {
        CayleyTable::from_fn(4, |a, b| (a + b) % 4).unwrap()
    }

    #[test]
    fn test_rejects_non_square() {
        let err = CayleyTable::new(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_rejects_out_of_range_entry() {
        let err = CayleyTable::new(vec![vec![0, 2], vec![1, 0]]).unwrap_err();
        assert!(matches!(
            err,
            AlgebraError::EntryOutOfRange {
                row: 0,
                col: 1,
                value: 2,
                order: 2
            }
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(CayleyTable::new(vec![]).unwrap_err().is_shape_error());
    }

    #[test]
    fn test_rps_structure() {
        let table = rps();
        assert!(!table.is_associative());
        assert!(table.is_commutative());
        assert_eq!(table.identity(), None);
        assert!(!table.has_inverses());
    }

    #[test]
    fn test_cyclic_structure() {
        let table = z4();
        assert!(table.is_associative());
        assert!(table.is_commutative());
        assert_eq!(table.identity(), Some(0));
        assert!(table.has_inverses());
        assert_eq!(table.inverses(), Some(vec![0, 3, 2, 1]));
        assert_eq!(table.inverse_of(1), Some(3));
    }

    #[test]
    fn test_monoid_without_inverses() {
        // Multiplication mod 4: identity 1, but 0 and 2 are not invertible
        let table = CayleyTable::from_fn(4, |a, b| (a * b) % 4).unwrap();
        assert_eq!(table.identity(), Some(1));
        assert!(!table.has_inverses());
        assert_eq!(table.inverse_of(3), Some(3));
        assert_eq!(table.inverse_of(2), None);
    }

    #[test]
    fn test_first_identity_wins() {
        // Only one identity can pass the two-sided test; index 1 here
        let table = CayleyTable::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(table.identity(), Some(1));
    }

    #[test]
    fn test_distributes_over() {
        let add = z4();
        let mul = CayleyTable::from_fn(4, |a, b| (a * b) % 4).unwrap();
        assert!(mul.distributes_over(&add));
        // Addition does not distribute over itself
        assert!(!add.distributes_over(&add));
    }

    #[test]
    fn test_from_names() {
        let elements: Vec<String> = ["r", "p", "s"].iter().map(|s| s.to_string()).collect();
        let named = vec![
            vec!["r", "p", "r"],
            vec!["p", "p", "s"],
            vec!["r", "s", "s"],
        ];
        let table = CayleyTable::from_names(&elements, &named).unwrap();
        assert_eq!(table, rps());
        assert_eq!(table.to_names(&elements), named);
    }

    #[test]
    fn test_from_names_unknown() {
        let elements = vec!["e".to_string()];
        let err = CayleyTable::from_names(&elements, &[vec!["x"]]).unwrap_err();
        assert!(matches!(err, AlgebraError::UnknownElement { name } if name == "x"));
    }

    #[test]
    fn test_permuted_preserves_structure() {
        let table = z4();
        let relabeled = table.permuted(&[2, 0, 3, 1]);
        assert!(relabeled.is_associative());
        assert_eq!(relabeled.identity(), Some(1));
        // new 0 = old 2, and 2 + 2 = 0 = new 1
        assert_eq!(relabeled.get(0, 0), 1);
    }

    #[test]
    fn test_restricted() {
        let table = z4();
        let sub = table.restricted(&[0, 2]).unwrap();
        assert_eq!(sub.to_rows(), vec![vec![0, 1], vec![1, 0]]);
        // 1 + 1 = 2 is missing from {0, 1}
        assert_eq!(table.restricted(&[0, 1]), Err(2));
    }

    #[test]
    fn test_serde_as_rows() {
        let table = rps();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "[[0,1,0],[1,1,2],[0,2,2]]");
        let back: CayleyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
        assert!(serde_json::from_str::<CayleyTable>("[[0,1],[5,0]]").is_err());
    }
}
