//! Property-based tests for finalg-core
//!
//! These tests use proptest to check invariants that must hold for every
//! algebra: group laws, closure idempotence, relabelling invariance and the
//! equivalence properties of isomorphism.

use finalg_core::generators::{
    generate_commutative_monoid, generate_cyclic_group, generate_powerset_group,
    generate_symmetric_group,
};
use finalg_core::{isomorphic, make_finite_algebra, verify_isomorphism, Algebra, AlgebraSpec, Kind};
use proptest::prelude::*;

// ===== Strategies for generating test data =====

/// Small groups from several families
fn arb_group() -> impl Strategy<Value = Algebra> {
    prop_oneof![
        (1usize..=9).prop_map(|n| generate_cyclic_group(n, "e", "a").unwrap()),
        (1usize..=3).prop_map(|n| generate_symmetric_group(n, 1).unwrap()),
        (0usize..=3).prop_map(|n| generate_powerset_group(n).unwrap()),
        (1usize..=4, 1usize..=4).prop_map(|(m, n)| {
            let a = generate_cyclic_group(m, "e", "a").unwrap();
            let b = generate_cyclic_group(n, "e", "b").unwrap();
            a.direct_product(&b).unwrap()
        }),
    ]
}

/// Arbitrary (usually non-associative) tables of order 1..=4
fn arb_magma() -> impl Strategy<Value = Algebra> {
    (1usize..=4)
        .prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0..n, n), n))
        .prop_map(|rows| {
            let elements: Vec<String> = (0..rows.len()).map(|i| format!("x{}", i)).collect();
            make_finite_algebra(AlgebraSpec::new("M", "", elements, rows)).unwrap()
        })
}

/// An algebra together with a shuffled copy of its element names
fn arb_relabelled() -> impl Strategy<Value = (Algebra, Vec<String>)> {
    prop_oneof![arb_group(), arb_magma()].prop_flat_map(|alg| {
        let names = alg.elements().to_vec();
        (Just(alg), Just(names).prop_shuffle())
    })
}

/// A random table of order 1..=5 and a relabelled copy, possibly with one
/// cell changed
fn arb_magma_pair() -> impl Strategy<Value = (Algebra, Algebra)> {
    (1usize..=5)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(0..n, n), n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                prop::option::of((0..n, 0..n, 0..n)),
            )
        })
        .prop_map(|(rows, perm, change)| {
            let n = rows.len();
            let mut relabelled = vec![vec![0; n]; n];
            for i in 0..n {
                for j in 0..n {
                    relabelled[perm[i]][perm[j]] = perm[rows[i][j]];
                }
            }
            if let Some((row, col, value)) = change {
                relabelled[row][col] = value;
            }
            (table_algebra("A", "x", rows), table_algebra("B", "y", relabelled))
        })
}

fn table_algebra(name: &str, prefix: &str, rows: Vec<Vec<usize>>) -> Algebra {
    let elements: Vec<String> = (0..rows.len()).map(|i| format!("{}{}", prefix, i)).collect();
    make_finite_algebra(AlgebraSpec::new(name, "", elements, rows)).unwrap()
}

/// Exhaustive search over all `n!` bijections of the primary tables.
fn brute_force_isomorphic(a: &Algebra, b: &Algebra) -> bool {
    fn search(a: &Algebra, b: &Algebra, image: &mut Vec<usize>, used: &mut Vec<bool>) -> bool {
        let n = a.order();
        if image.len() == n {
            return (0..n).all(|x| {
                (0..n).all(|y| image[a.table().get(x, y)] == b.table().get(image[x], image[y]))
            });
        }
        for candidate in 0..n {
            if used[candidate] {
                continue;
            }
            used[candidate] = true;
            image.push(candidate);
            let found = search(a, b, image, used);
            image.pop();
            used[candidate] = false;
            if found {
                return true;
            }
        }
        false
    }

    a.order() == b.order() && search(a, b, &mut Vec::new(), &mut vec![false; a.order()])
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_group_laws(g in arb_group()) {
        prop_assert!(g.kind() >= Kind::Group);
        let e = g.identity().unwrap();
        for a in g.elements() {
            let inv = g.inv(a).unwrap();
            prop_assert_eq!(g.op(a, inv).unwrap(), e);
            prop_assert_eq!(g.op(inv, a).unwrap(), e);
            prop_assert_eq!(g.op(e, a).unwrap(), a.as_str());
            prop_assert_eq!(g.op(a, e).unwrap(), a.as_str());
        }
    }

    #[test]
    fn prop_element_order_divides_group_order(g in arb_group()) {
        for a in g.elements() {
            let k = g.element_order(a).unwrap().unwrap();
            prop_assert_eq!(g.order() % k, 0);
        }
    }

    #[test]
    fn prop_closure_is_idempotent(alg in arb_magma(), seed in any::<prop::sample::Index>()) {
        let start = vec![alg.elements()[seed.index(alg.order())].clone()];
        let once = alg.closure(&start).unwrap();
        let twice = alg.closure(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(alg.is_closed(&once).unwrap());
    }

    #[test]
    fn prop_relabelling_preserves_structure((alg, names) in arb_relabelled()) {
        let shuffled = alg.reorder_elements(&names).unwrap();
        prop_assert_eq!(shuffled.kind(), alg.kind());
        prop_assert_eq!(shuffled.is_associative(), alg.is_associative());
        prop_assert_eq!(shuffled.is_commutative(), alg.is_commutative());
        prop_assert_eq!(shuffled.has_identity(), alg.has_identity());

        let result = isomorphic(&alg, &shuffled);
        let mapping = result.mapping();
        prop_assert!(mapping.is_some());
        prop_assert!(verify_isomorphism(&alg, &shuffled, mapping.unwrap()));
        prop_assert!(isomorphic(&shuffled, &alg).is_isomorphic());
    }

    #[test]
    fn prop_self_isomorphism(alg in prop_oneof![arb_group(), arb_magma()]) {
        let result = alg.isomorphic(&alg);
        let mapping = result.mapping().unwrap();
        for (from, to) in mapping {
            prop_assert_eq!(from, to);
        }
    }

    #[test]
    fn prop_isomorphism_matches_exhaustive_search((a, b) in arb_magma_pair()) {
        let result = isomorphic(&a, &b);
        prop_assert_eq!(result.is_isomorphic(), brute_force_isomorphic(&a, &b));
        if let Some(mapping) = result.mapping() {
            prop_assert!(verify_isomorphism(&a, &b, mapping));
        }
        prop_assert_eq!(isomorphic(&b, &a).is_isomorphic(), result.is_isomorphic());
    }

    #[test]
    fn prop_product_order_and_identity(m in 1usize..=5, n in 1usize..=5) {
        let a = generate_cyclic_group(m, "e", "a").unwrap();
        let b = generate_cyclic_group(n, "1", "b").unwrap();
        let product = a.direct_product(&b).unwrap();
        prop_assert_eq!(product.order(), a.order() * b.order());
        let expected = format!("{}:{}", a.identity().unwrap(), b.identity().unwrap());
        prop_assert_eq!(product.identity(), Some(expected.as_str()));
        prop_assert!(product.kind() >= Kind::Group);
        let cyclic = generate_cyclic_group(m * n, "e", "c").unwrap();
        prop_assert_eq!(product.is_isomorphic_to(&cyclic), gcd(m, n) == 1);
    }

    #[test]
    fn prop_monoid_closed_subsets_are_closed(n in 2usize..=8) {
        let m = generate_commutative_monoid(n, "a").unwrap();
        for subset in m.closed_subsets_of_elements(true) {
            prop_assert!(subset.len() < n);
            prop_assert!(m.is_closed(&subset).unwrap());
        }
    }
}
