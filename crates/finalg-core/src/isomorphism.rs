//! Isomorphism search between algebras and partitioning into isomorphism classes.
//!
//! The search assigns images to the elements of the first algebra in element
//! order, trying candidates of the second algebra in ascending order. After
//! assigning `x` it checks each product of assigned operands that has `x` as
//! an operand or as the result:
//!
//! - if the product itself is already mapped, its image must be the product
//!   of the images;
//! - otherwise the product of the images must not already be claimed by
//!   another element.
//!
//! Identities are pinned to each other, so for algebras with an identity the
//! search covers at most `(n-1)!` bijections instead of `n!`. The worst case
//! stays exponential.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::algebra::Algebra;
use crate::table::CayleyTable;

/// Outcome of an isomorphism search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IsomorphismResult {
    /// A structure-preserving bijection, keyed by the first algebra's
    /// elements in element order.
    Isomorphic { mapping: IndexMap<String, String> },
    /// No bijection preserves the operation(s).
    NotIsomorphic,
}

impl IsomorphismResult {
    pub fn is_isomorphic(&self) -> bool {
        matches!(self, IsomorphismResult::Isomorphic { .. })
    }

    pub fn mapping(&self) -> Option<&IndexMap<String, String>> {
        match self {
            IsomorphismResult::Isomorphic { mapping } => Some(mapping),
            IsomorphismResult::NotIsomorphic => None,
        }
    }

    pub fn into_mapping(self) -> Option<IndexMap<String, String>> {
        match self {
            IsomorphismResult::Isomorphic { mapping } => Some(mapping),
            IsomorphismResult::NotIsomorphic => None,
        }
    }
}

/// Backtracking state over index tables.
struct Search<'a> {
    /// `(table of A, table of B)` for every operation that must be preserved.
    ops: Vec<(&'a CayleyTable, &'a CayleyTable)>,
    identities: Option<(usize, usize)>,
    forward: Vec<Option<usize>>,
    backward: Vec<Option<usize>>,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(
        ops: Vec<(&'a CayleyTable, &'a CayleyTable)>,
        identities: Option<(usize, usize)>,
        order: usize,
    ) -> Self {
        Self {
            ops,
            identities,
            forward: vec![None; order],
            backward: vec![None; order],
            nodes: 0,
        }
    }

    /// Every product of assigned operands in which `x` is an operand or the
    /// result is consistent with the current partial mapping.
    ///
    /// Each pair is checked once the last of its operands and product is
    /// assigned, so a complete assignment that passes every step preserves
    /// every operation.
    fn consistent(&self, x: usize) -> bool {
        if self.forward[x].is_none() {
            return false;
        }
        let assigned: Vec<(usize, usize)> = self
            .forward
            .iter()
            .enumerate()
            .filter_map(|(p, fp)| fp.map(|fp| (p, fp)))
            .collect();

        for &(ta, tb) in &self.ops {
            for &(p, fp) in &assigned {
                for &(q, fq) in &assigned {
                    let product = ta.get(p, q);
                    if p != x && q != x && product != x {
                        continue;
                    }
                    let image = tb.get(fp, fq);
                    match self.forward[product] {
                        Some(mapped) if mapped != image => return false,
                        None => {
                            if self.backward[image].is_some() {
                                return false;
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
        true
    }

    fn extend(&mut self, x: usize) -> bool {
        let n = self.forward.len();
        if x == n {
            return true;
        }
        self.nodes += 1;

        for candidate in 0..n {
            if self.backward[candidate].is_some() {
                continue;
            }
            if let Some((id_a, id_b)) = self.identities {
                if (x == id_a) != (candidate == id_b) {
                    continue;
                }
            }
            self.forward[x] = Some(candidate);
            self.backward[candidate] = Some(x);
            if self.consistent(x) && self.extend(x + 1) {
                return true;
            }
            self.forward[x] = None;
            self.backward[candidate] = None;
        }
        false
    }
}

/// Search for an isomorphism from `a` to `b`.
///
/// When both algebras carry a multiplicative table the mapping must preserve
/// it too; otherwise only the primary operation is compared. Returns the
/// first valid mapping in lexicographic candidate order.
pub fn isomorphic(a: &Algebra, b: &Algebra) -> IsomorphismResult {
    if a.order() != b.order()
        || a.has_identity() != b.has_identity()
        || a.is_commutative() != b.is_commutative()
    {
        return IsomorphismResult::NotIsomorphic;
    }

    let mut ops = vec![(a.table(), b.table())];
    if let (Some(ma), Some(mb)) = (a.mult_table(), b.mult_table()) {
        ops.push((ma, mb));
    }
    let identities = a.identity_index().zip(b.identity_index());

    let mut search = Search::new(ops, identities, a.order());
    let found = search.extend(0);
    trace!(
        left = %a.name(),
        right = %b.name(),
        nodes = search.nodes,
        found,
        "isomorphism search finished"
    );

    if !found {
        return IsomorphismResult::NotIsomorphic;
    }
    let mapping = search
        .forward
        .iter()
        .enumerate()
        .filter_map(|(x, fx)| {
            fx.map(|fx| (a.elements()[x].clone(), b.elements()[fx].clone()))
        })
        .collect();
    IsomorphismResult::Isomorphic { mapping }
}

/// True if `mapping` is a bijection from `a`'s elements onto `b`'s that
/// preserves the primary operation (and the multiplicative one when both
/// algebras have it).
pub fn verify_isomorphism(a: &Algebra, b: &Algebra, mapping: &IndexMap<String, String>) -> bool {
    if a.order() != b.order() || mapping.len() != a.order() {
        return false;
    }
    let mut forward = Vec::with_capacity(a.order());
    let mut hit = vec![false; b.order()];
    for name in a.elements() {
        let image = match mapping.get(name).and_then(|img| b.index_of(img).ok()) {
            Some(image) => image,
            None => return false,
        };
        if hit[image] {
            return false;
        }
        hit[image] = true;
        forward.push(image);
    }

    let preserves = |ta: &CayleyTable, tb: &CayleyTable| {
        (0..a.order()).all(|x| {
            (0..a.order()).all(|y| forward[ta.get(x, y)] == tb.get(forward[x], forward[y]))
        })
    };
    let mult_ok = match (a.mult_table(), b.mult_table()) {
        (Some(ma), Some(mb)) => preserves(ma, mb),
        _ => true,
    };
    preserves(a.table(), b.table()) && mult_ok
}

/// Group algebras into isomorphism classes.
///
/// Repeatedly takes the first remaining algebra, moves every remaining
/// algebra isomorphic to it into its class, and continues with the rest.
/// Classes and their members keep input order.
pub fn partition_into_isomorphic_lists(algebras: Vec<Algebra>) -> Vec<Vec<Algebra>> {
    let total = algebras.len();
    let mut classes = Vec::new();
    let mut remaining = algebras;

    while !remaining.is_empty() {
        let mut rest = remaining.into_iter();
        let first = match rest.next() {
            Some(first) => first,
            None => break,
        };
        let (same, other): (Vec<Algebra>, Vec<Algebra>) =
            rest.partition(|alg| isomorphic(&first, alg).is_isomorphic());

        let mut class = Vec::with_capacity(same.len() + 1);
        class.push(first);
        class.extend(same);
        classes.push(class);
        remaining = other;
    }

    debug!(algebras = total, classes = classes.len(), "partitioned into isomorphism classes");
    classes
}

impl Algebra {
    /// See [`isomorphic`].
    pub fn isomorphic(&self, other: &Algebra) -> IsomorphismResult {
        isomorphic(self, other)
    }

    pub fn is_isomorphic_to(&self, other: &Algebra) -> bool {
        isomorphic(self, other).is_isomorphic()
    }
}
