//! Closures, closed-subset enumeration and subalgebras.

use std::collections::BTreeSet;

use tracing::debug;

use crate::algebra::Algebra;
use crate::classify::classify_parts;
use crate::error::{AlgebraError, Result};

/// Lexicographic `k`-combinations of `0..n`.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance the rightmost index that still has room.
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

impl Algebra {
    /// Fixed point of "add inverses (when they exist), then add every pairwise
    /// product", returned as sorted element indices.
    pub(crate) fn closure_indices(&self, seed: &[usize]) -> Vec<usize> {
        let n = self.order();
        let mut member = vec![false; n];
        let mut current = Vec::with_capacity(n);
        for &i in seed {
            if !member[i] {
                member[i] = true;
                current.push(i);
            }
        }

        loop {
            let before = current.len();

            if let Some(inverses) = self.inverse_indices() {
                for k in 0..current.len() {
                    let inv = inverses[current[k]];
                    if !member[inv] {
                        member[inv] = true;
                        current.push(inv);
                    }
                }
            }

            let snapshot = current.clone();
            for &a in &snapshot {
                for &b in &snapshot {
                    let product = self.table().get(a, b);
                    if !member[product] {
                        member[product] = true;
                        current.push(product);
                    }
                }
            }

            if current.len() == before {
                break;
            }
        }

        (0..n).filter(|&i| member[i]).collect()
    }

    /// Smallest superset of `subset` closed under the operation (and under
    /// inverses, when the algebra has them), in element order.
    pub fn closure<S: AsRef<str>>(&self, subset: &[S]) -> Result<Vec<String>> {
        let seed = self.indices_of(subset)?;
        Ok(self.names_of(&self.closure_indices(&seed)))
    }

    /// True if `subset` already equals its own closure.
    pub fn is_closed<S: AsRef<str>>(&self, subset: &[S]) -> Result<bool> {
        let seed: BTreeSet<usize> = self.indices_of(subset)?.into_iter().collect();
        let seed: Vec<usize> = seed.into_iter().collect();
        Ok(self.closure_indices(&seed) == seed)
    }

    /// Every distinct closure of a subset of size `2..=n-2` (or `1..=n-2`
    /// when `non_trivial` is false) that is smaller than the whole algebra.
    ///
    /// Each closed subset is listed in element order; the list is sorted by
    /// element indices.
    pub fn closed_subsets_of_elements(&self, non_trivial: bool) -> Vec<Vec<String>> {
        let n = self.order();
        let low = if non_trivial { 2 } else { 1 };
        let mut closed: BTreeSet<Vec<usize>> = BTreeSet::new();
        let mut seeds = 0usize;

        for size in low..n.saturating_sub(1) {
            for combo in Combinations::new(n, size) {
                seeds += 1;
                let clo = self.closure_indices(&combo);
                if clo.len() < n {
                    closed.insert(clo);
                }
            }
        }

        debug!(
            algebra = %self.name(),
            seeds,
            closed = closed.len(),
            "enumerated closed subsets"
        );
        closed.iter().map(|idx| self.names_of(idx)).collect()
    }

    /// The algebra on a closed subset of elements, classified on its own.
    ///
    /// Elements are sorted by their position in this algebra, so the new
    /// table is a consistent restriction of this one. Fails with
    /// [`AlgebraError::NotClosed`] if some product leaves the subset.
    pub fn subalgebra_from_elements<S: AsRef<str>>(
        &self,
        subset: &[S],
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Algebra> {
        let sorted: BTreeSet<usize> = self.indices_of(subset)?.into_iter().collect();
        let sorted: Vec<usize> = sorted.into_iter().collect();
        if sorted.is_empty() {
            return Err(AlgebraError::shape("a subalgebra needs at least one element"));
        }

        let table = self
            .table()
            .restricted(&sorted)
            .map_err(|product| AlgebraError::NotClosed {
                product: self.elements()[product].clone(),
            })?;

        let sub = classify_parts(
            name.into(),
            description.into(),
            self.names_of(&sorted),
            table,
            None,
        )?;
        Ok(sub.with_delimiter(self.delimiter()))
    }

    /// Subalgebras on every closed subset found by
    /// [`closed_subsets_of_elements`](Self::closed_subsets_of_elements),
    /// named `<name>_subalgebra_<k>`.
    pub fn proper_subalgebras(&self) -> Result<Vec<Algebra>> {
        let description = format!("Subalgebra of: {}", self.description());
        self.closed_subsets_of_elements(true)
            .iter()
            .enumerate()
            .map(|(count, subset)| {
                self.subalgebra_from_elements(
                    subset,
                    format!("{}_subalgebra_{}", self.name(), count),
                    description.clone(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Kind;
    use crate::generators::{generate_commutative_monoid, generate_cyclic_group};

    #[test]
    fn test_combinations() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(Combinations::new(3, 0).count(), 1);
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn test_closure_of_generator() {
        let z6 = generate_cyclic_group(6, "e", "a").unwrap();
        assert_eq!(z6.closure(&["a^2"]).unwrap(), vec!["e", "a^2", "a^4"]);
        assert_eq!(z6.closure(&["a"]).unwrap().len(), 6);
        assert_eq!(z6.closure(&["a^3"]).unwrap(), vec!["e", "a^3"]);
    }

    #[test]
    fn test_closure_uses_inverses() {
        let z4 = generate_cyclic_group(4, "e", "a").unwrap();
        // Inverses are added before products are taken
        assert_eq!(z4.closure(&["e"]).unwrap(), vec!["e"]);
        assert_eq!(z4.closure(&["a^2"]).unwrap(), vec!["e", "a^2"]);
    }

    #[test]
    fn test_closure_is_idempotent() {
        let m = generate_commutative_monoid(6, "a").unwrap();
        let once = m.closure(&["a2"]).unwrap();
        let twice = m.closure(&once).unwrap();
        assert_eq!(once, twice);
        assert!(m.is_closed(&once).unwrap());
        assert!(!m.is_closed(&["a5"]).unwrap());
    }

    #[test]
    fn test_closure_unknown_element() {
        let z4 = generate_cyclic_group(4, "e", "a").unwrap();
        assert!(matches!(
            z4.closure(&["b"]),
            Err(AlgebraError::UnknownElement { .. })
        ));
    }

    #[test]
    fn test_closed_subsets_of_z6() {
        let z6 = generate_cyclic_group(6, "e", "a").unwrap();
        let closed = z6.closed_subsets_of_elements(true);
        assert_eq!(
            closed,
            vec![vec!["e", "a^2", "a^4"], vec!["e", "a^3"]]
        );

        // Allowing single-element seeds adds the trivial subgroup
        let with_trivial = z6.closed_subsets_of_elements(false);
        assert_eq!(with_trivial.len(), 3);
        assert!(with_trivial.contains(&vec!["e".to_string()]));
    }

    #[test]
    fn test_subalgebra_from_elements() {
        let z6 = generate_cyclic_group(6, "e", "a").unwrap();
        let sub = z6
            .subalgebra_from_elements(&["a^4", "e", "a^2"], "Z3", "even powers")
            .unwrap();
        assert_eq!(sub.kind(), Kind::Group);
        assert_eq!(sub.elements(), ["e", "a^2", "a^4"]);
        assert_eq!(sub.op("a^2", "a^4").unwrap(), "e");

        let err = z6
            .subalgebra_from_elements(&["e", "a"], "bad", "")
            .unwrap_err();
        assert!(matches!(err, AlgebraError::NotClosed { product } if product == "a^2"));
    }

    #[test]
    fn test_proper_subalgebras_names() {
        let z6 = generate_cyclic_group(6, "e", "a").unwrap();
        let subs = z6.proper_subalgebras().unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].name(), "Z6_subalgebra_0");
        assert_eq!(subs[1].name(), "Z6_subalgebra_1");
        assert!(subs.iter().all(|s| s.kind() == Kind::Group));
    }

    #[test]
    fn test_monoid_subalgebras() {
        // Multiplication mod 4 over a0..a3
        let m4 = generate_commutative_monoid(4, "a").unwrap();
        let closed = m4.closed_subsets_of_elements(true);
        assert!(closed.contains(&vec!["a0".to_string(), "a1".to_string()]));
        assert!(closed.contains(&vec!["a1".to_string(), "a3".to_string()]));
        for subset in &closed {
            assert!(m4.is_closed(subset).unwrap());
        }
    }
}
