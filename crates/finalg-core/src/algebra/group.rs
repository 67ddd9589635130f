//! Conjugation, normality and subgroup queries.

use tracing::debug;

use super::{Algebra, Kind};
use crate::error::{AlgebraError, Result};
use crate::isomorphism::partition_into_isomorphic_lists;
use crate::table::CayleyTable;

impl Algebra {
    /// `g ∘ a ∘ inv(g)`, the conjugate of `a` by `g`.
    pub fn conjugate(&self, a: &str, g: &str) -> Result<&str> {
        let g_inv = self.inv(g)?;
        let a_g_inv = self.op(a, g_inv)?;
        self.op(g, a_g_inv)
    }

    /// True if conjugating any element of `subgroup` by any element of this
    /// group stays inside `subgroup`.
    pub fn is_normal(&self, subgroup: &Algebra) -> Result<bool> {
        for x in &self.elements {
            for a in subgroup.elements() {
                if !subgroup.contains(self.conjugate(a, x)?) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// The identity-only subgroup and the whole group.
    pub fn trivial_subgroups(&self) -> Result<Vec<Algebra>> {
        if !self.has_inverses() {
            return Err(AlgebraError::missing("inverses", &self.name));
        }
        let identity = self
            .identity()
            .ok_or_else(|| AlgebraError::missing("identity element", &self.name))?;
        let trivial = Algebra::build(
            Kind::Group,
            format!("Subgroup of {}", self.name),
            format!("Trivial subgroup: {}", self.description),
            vec![identity.to_string()],
            CayleyTable::new(vec![vec![0]])?,
            None,
            false,
        )?;
        Ok(vec![trivial, self.clone()])
    }

    /// Every subgroup: the proper ones followed by the two trivial ones.
    pub fn subgroups(&self) -> Result<Vec<Algebra>> {
        let trivial = self.trivial_subgroups()?;
        let mut all = self.proper_subalgebras()?;
        all.extend(trivial);
        Ok(all)
    }

    /// One representative per isomorphism class of proper subgroups.
    ///
    /// When `subgroups` is `None` the proper subgroups are derived first.
    pub fn unique_proper_subgroups(&self, subgroups: Option<Vec<Algebra>>) -> Result<Vec<Algebra>> {
        let subgroups = match subgroups {
            Some(list) => list,
            None => self.proper_subalgebras()?,
        };
        let total = subgroups.len();
        let unique: Vec<Algebra> = partition_into_isomorphic_lists(subgroups)
            .into_iter()
            .filter_map(|class| class.into_iter().next())
            .collect();
        debug!(
            group = %self.name,
            subgroups = total,
            classes = unique.len(),
            "partitioned proper subgroups"
        );
        Ok(unique)
    }
}
