//! Direct products.

use std::ops::Mul;

use tracing::debug;

use crate::algebra::Algebra;
use crate::classify::classify_parts;
use crate::error::{AlgebraError, Result};
use crate::table::CayleyTable;

/// Componentwise product of two tables over the lexicographic pair order:
/// pair `(i, j)` sits at index `i * right.order() + j`.
fn product_table(left: &CayleyTable, right: &CayleyTable) -> Result<CayleyTable> {
    let n = right.order();
    CayleyTable::from_fn(left.order() * n, |x, y| {
        let (a1, b1) = (x / n, x % n);
        let (a2, b2) = (y / n, y % n);
        left.get(a1, a2) * n + right.get(b1, b2)
    })
}

impl Algebra {
    /// The direct product `self ⊗ other`.
    ///
    /// Elements are the pairs of both element lists in lexicographic order,
    /// named `"{a}{delimiter}{b}"` with this algebra's delimiter, and combine
    /// componentwise. When both factors carry a multiplicative table the
    /// product carries the componentwise one too. The result is classified,
    /// so e.g. the product of two groups is a group.
    pub fn direct_product(&self, other: &Algebra) -> Result<Algebra> {
        let table = product_table(self.table(), other.table())?;
        let mult = match (self.mult_table(), other.mult_table()) {
            (Some(left), Some(right)) => Some(product_table(left, right)?),
            _ => None,
        };

        let delimiter = self.delimiter();
        let elements: Vec<String> = self
            .elements()
            .iter()
            .flat_map(|a| {
                other
                    .elements()
                    .iter()
                    .map(move |b| format!("{}{}{}", a, delimiter, b))
            })
            .collect();

        debug!(
            left = %self.name(),
            right = %other.name(),
            order = elements.len(),
            "building direct product"
        );

        let product = classify_parts(
            format!("{}_x_{}", self.name(), other.name()),
            format!("Direct product of {} & {}", self.name(), other.name()),
            elements,
            table,
            mult,
        )?;
        Ok(product.with_delimiter(delimiter))
    }

    /// Direct product of this algebra with itself `power` times
    /// (`power == 1` returns a copy).
    pub fn direct_power(&self, power: usize) -> Result<Algebra> {
        if power == 0 {
            return Err(AlgebraError::shape("direct power must be at least 1"));
        }
        let mut acc = self.clone();
        for _ in 1..power {
            acc = acc.direct_product(self)?;
        }
        Ok(acc)
    }
}

impl Mul for &Algebra {
    type Output = Result<Algebra>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.direct_product(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::algebra::Kind;
    use crate::error::AlgebraError;
    use crate::generators::{generate_commutative_ring, generate_cyclic_group};

    #[test]
    fn test_product_of_cyclic_groups() {
        let z2 = generate_cyclic_group(2, "e", "a").unwrap();
        let z3 = generate_cyclic_group(3, "e", "b").unwrap();
        let z6 = (&z2 * &z3).unwrap();
        assert_eq!(z6.order(), 6);
        assert_eq!(z6.kind(), Kind::Group);
        assert_eq!(z6.name(), "Z2_x_Z3");
        assert_eq!(
            z6.elements(),
            ["e:e", "e:b", "e:b^2", "a:e", "a:b", "a:b^2"]
        );
        assert_eq!(z6.identity(), Some("e:e"));
        assert_eq!(z6.op("a:b", "a:b^2").unwrap(), "e:e");
        assert_eq!(z6.element_order("a:b").unwrap(), Some(6));
    }

    #[test]
    fn test_custom_delimiter() {
        let z2 = generate_cyclic_group(2, "e", "a").unwrap().with_delimiter("-");
        let z2z2 = z2.direct_product(&z2).unwrap();
        assert!(z2z2.contains("a-a"));
        assert_eq!(z2z2.delimiter(), "-");
    }

    #[test]
    fn test_product_of_rings_is_ring() {
        let r2 = generate_commutative_ring(2, "a").unwrap();
        let r3 = generate_commutative_ring(3, "b").unwrap();
        let r6 = r2.direct_product(&r3).unwrap();
        // Z2 x Z3 is isomorphic to Z6, which is not a field
        assert_eq!(r6.kind(), Kind::Ring);
        assert_eq!(r6.one(), Some("a1:b1"));
        assert_eq!(r6.zero_divisors().unwrap().len(), 3);
    }

    #[test]
    fn test_direct_power() {
        let z2 = generate_cyclic_group(2, "e", "a").unwrap();
        assert_eq!(z2.direct_power(3).unwrap().order(), 8);
        assert!(matches!(
            z2.direct_power(0),
            Err(AlgebraError::Shape { .. })
        ));
    }

    #[test]
    fn test_ambiguous_names_are_rejected() {
        let left = crate::Algebra::magma("L", "", ["a", "a:"], vec![vec![0, 0], vec![0, 0]])
            .unwrap();
        let right = crate::Algebra::magma("R", "", [":b", "b"], vec![vec![0, 0], vec![0, 0]])
            .unwrap();
        // "a" + ":" + ":b" and "a:" + ":" + "b" collide
        assert!(matches!(
            left.direct_product(&right),
            Err(AlgebraError::DuplicateElements { .. })
        ));
    }
}
