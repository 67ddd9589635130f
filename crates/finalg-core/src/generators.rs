//! Generators for standard families of finite algebras.
//!
//! Every generator builds its tables and hands them to
//! [`make_finite_algebra`], so the resulting [`Kind`](crate::Kind) is the
//! classifier's verdict (e.g. `generate_commutative_ring(5, ..)` yields a
//! Field). Use [`Algebra::with_name`] to override the default name.

use crate::algebra::Algebra;
use crate::classify::{make_finite_algebra, AlgebraSpec};
use crate::error::{AlgebraError, Result};
use crate::table::CayleyTable;

fn mod_table(order: usize, op: impl Fn(usize, usize) -> usize) -> Vec<Vec<usize>> {
    (0..order)
        .map(|a| (0..order).map(|b| op(a, b) % order).collect())
        .collect()
}

fn indexed_names(order: usize, elem_name: &str) -> Vec<String> {
    (0..order).map(|i| format!("{}{}", elem_name, i)).collect()
}

/// Cyclic group of the given order: elements `e, a, a^2, ...` under
/// addition modulo `order`. Named `Z<order>`.
pub fn generate_cyclic_group(order: usize, identity_name: &str, elem_name: &str) -> Result<Algebra> {
    let elements: Vec<String> = (0..order)
        .map(|i| match i {
            0 => identity_name.to_string(),
            1 => elem_name.to_string(),
            _ => format!("{}^{}", elem_name, i),
        })
        .collect();
    make_finite_algebra(AlgebraSpec::new(
        format!("Z{}", order),
        format!("Autogenerated cyclic Group of order {}", order),
        elements,
        mod_table(order, |a, b| a + b),
    ))
}

/// All permutations of `base..base+n` in lexicographic order.
fn permutations(n: usize, base: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (base..base + n).collect();
    let mut all = vec![current.clone()];
    // Standard next-permutation step
    loop {
        let pivot = match (1..current.len()).rev().find(|&i| current[i - 1] < current[i]) {
            Some(i) => i - 1,
            None => break,
        };
        let swap = match (pivot + 1..current.len()).rev().find(|&j| current[j] > current[pivot]) {
            Some(j) => j,
            None => break,
        };
        current.swap(pivot, swap);
        current[pivot + 1..].reverse();
        all.push(current.clone());
    }
    all
}

fn tuple_name(perm: &[usize]) -> String {
    let parts: Vec<String> = perm.iter().map(usize::to_string).collect();
    if parts.len() == 1 {
        format!("({},)", parts[0])
    } else {
        format!("({})", parts.join(", "))
    }
}

/// Symmetric group on `n` points, written as image tuples of
/// `(base, base+1, ..., base+n-1)`.
///
/// Composition applies the right operand first: `(p∘q)(i) = p(q(i))`.
/// Element names look like `"(2, 1, 3)"`. Named `S<n>`.
pub fn generate_symmetric_group(n: usize, base: usize) -> Result<Algebra> {
    let perms = permutations(n, base);
    let position: std::collections::HashMap<Vec<usize>, usize> = perms
        .iter()
        .enumerate()
        .map(|(i, p)| (p.clone(), i))
        .collect();

    let mut rows = Vec::with_capacity(perms.len());
    for p in &perms {
        let mut row = Vec::with_capacity(perms.len());
        for q in &perms {
            let composed: Vec<usize> = q.iter().map(|&qi| p[qi - base]).collect();
            let idx = position
                .get(&composed)
                .copied()
                .ok_or_else(|| AlgebraError::shape("permutation product left the group"))?;
            row.push(idx);
        }
        rows.push(row);
    }

    make_finite_algebra(AlgebraSpec::new(
        format!("S{}", n),
        format!("Autogenerated symmetric Group on {} elements", n),
        perms.iter().map(|p| tuple_name(p)),
        rows,
    ))
}

/// Subsets of `{0..n-1}` as bitmasks, ordered by size then lexicographically.
fn powerset_masks(n: usize) -> Vec<usize> {
    let mut masks: Vec<usize> = (0..1usize << n).collect();
    masks.sort_by_key(|&m| {
        let members: Vec<usize> = (0..n).filter(|&i| m & (1 << i) != 0).collect();
        (members.len(), members)
    });
    masks
}

fn set_name(mask: usize, n: usize) -> String {
    let members: Vec<String> = (0..n)
        .filter(|&i| mask & (1 << i) != 0)
        .map(|i| i.to_string())
        .collect();
    format!("{{{}}}", members.join(", "))
}

/// Largest number of points accepted by the powerset generators.
pub const MAX_POWERSET_POINTS: usize = 16;

fn powerset_tables(n: usize) -> Result<(Vec<String>, CayleyTable, CayleyTable)> {
    if n > MAX_POWERSET_POINTS {
        return Err(AlgebraError::shape(format!(
            "powerset of {} points is too large (at most {})",
            n, MAX_POWERSET_POINTS
        )));
    }
    let masks = powerset_masks(n);
    let mut position = vec![0usize; masks.len()];
    for (i, &m) in masks.iter().enumerate() {
        position[m] = i;
    }
    let names = masks.iter().map(|&m| set_name(m, n)).collect();
    let sym_diff = CayleyTable::from_fn(masks.len(), |a, b| position[masks[a] ^ masks[b]])?;
    let intersection = CayleyTable::from_fn(masks.len(), |a, b| position[masks[a] & masks[b]])?;
    Ok((names, sym_diff, intersection))
}

/// Group on the subsets of `{0..n-1}` under symmetric difference. Named `PS<n>`.
pub fn generate_powerset_group(n: usize) -> Result<Algebra> {
    let (names, sym_diff, _) = powerset_tables(n)?;
    make_finite_algebra(AlgebraSpec::new(
        format!("PS{}", n),
        format!(
            "Autogenerated Group on the powerset of {} elements, with symmetric difference operator",
            n
        ),
        names,
        &sym_diff,
    ))
}

/// Commutative monoid on `0..order` under multiplication modulo `order`.
/// Named `M<order>`.
pub fn generate_commutative_monoid(order: usize, elem_name: &str) -> Result<Algebra> {
    make_finite_algebra(AlgebraSpec::new(
        format!("M{}", order),
        format!("Autogenerated commutative Monoid of order {}", order),
        indexed_names(order, elem_name),
        mod_table(order, |a, b| a * b),
    ))
}

/// The integers modulo `order`. Named `R<order>`.
pub fn generate_commutative_ring(order: usize, elem_name: &str) -> Result<Algebra> {
    make_finite_algebra(
        AlgebraSpec::new(
            format!("R{}", order),
            format!("Autogenerated commutative Ring of order {}", order),
            indexed_names(order, elem_name),
            mod_table(order, |a, b| a + b),
        )
        .with_table2(mod_table(order, |a, b| a * b)),
    )
}

/// Ring on the subsets of `{0..n-1}` with symmetric difference as addition
/// and intersection as multiplication. Named `PSRing<n>`.
pub fn generate_powerset_ring(n: usize) -> Result<Algebra> {
    if n == 0 {
        return Err(AlgebraError::shape("powerset ring needs n >= 1"));
    }
    let base_set = match n {
        1 => "{0}".to_string(),
        2 => "{0, 1}".to_string(),
        3 => "{0, 1, 2}".to_string(),
        _ => format!("{{0,...,{}}}", n - 1),
    };
    let (names, sym_diff, intersection) = powerset_tables(n)?;
    make_finite_algebra(
        AlgebraSpec::new(
            format!("PSRing{}", n),
            format!(
                "Autogenerated Ring on powerset of {} w/ symm. diff. (add) & intersection (mult)",
                base_set
            ),
            names,
            &sym_diff,
        )
        .with_table2(&intersection),
    )
}

/// The prime field `Z/pZ`. Named `F<order>`; a non-prime order is a shape error.
pub fn generate_prime_field(order: usize, elem_name: &str) -> Result<Algebra> {
    if !is_prime(order) {
        return Err(AlgebraError::shape(format!(
            "{} must be a prime number",
            order
        )));
    }
    generate_commutative_ring(order, elem_name).map(|alg| {
        alg.with_name(
            format!("F{}", order),
            format!("Autogenerated prime field of order {}", order),
        )
    })
}

pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
