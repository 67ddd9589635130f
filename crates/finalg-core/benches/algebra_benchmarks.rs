//! Performance benchmarks for finalg-core core operations
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use finalg_core::generators::{
    generate_commutative_ring, generate_cyclic_group, generate_powerset_group,
    generate_symmetric_group,
};
use finalg_core::{isomorphic, make_finite_algebra, partition_into_isomorphic_lists};

// ===== Axiom Check Benchmarks =====

fn bench_axiom_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("axiom_checks");

    for n in [8usize, 16, 32] {
        let zn = generate_cyclic_group(n, "e", "a").unwrap();
        group.bench_with_input(BenchmarkId::new("is_associative", n), &zn, |b, alg| {
            b.iter(|| black_box(alg.table().is_associative()));
        });
        group.bench_with_input(BenchmarkId::new("has_inverses", n), &zn, |b, alg| {
            b.iter(|| black_box(alg.table().has_inverses()));
        });
    }

    group.finish();
}

// ===== Classification Benchmarks =====

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for n in [7usize, 12, 24] {
        let spec = generate_commutative_ring(n, "a").unwrap().to_spec();
        group.bench_with_input(BenchmarkId::new("modular_ring", n), &spec, |b, spec| {
            b.iter(|| make_finite_algebra(black_box(spec.clone())).unwrap());
        });
    }

    group.finish();
}

// ===== Closure Benchmarks =====

fn bench_closed_subsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_subsets");
    group.sample_size(20);

    let s3 = generate_symmetric_group(3, 1).unwrap();
    let z12 = generate_cyclic_group(12, "e", "a").unwrap();
    let ps3 = generate_powerset_group(3).unwrap();

    for alg in [&s3, &z12, &ps3] {
        group.bench_with_input(BenchmarkId::new("non_trivial", alg.name()), alg, |b, alg| {
            b.iter(|| black_box(alg.closed_subsets_of_elements(true)));
        });
    }

    group.finish();
}

// ===== Isomorphism Benchmarks =====

fn bench_isomorphism(c: &mut Criterion) {
    let mut group = c.benchmark_group("isomorphism");

    let z2 = generate_cyclic_group(2, "e", "a").unwrap();
    let z4 = generate_cyclic_group(4, "e", "b").unwrap();
    let z8 = generate_cyclic_group(8, "e", "c").unwrap();
    let z2_cubed = z2.direct_power(3).unwrap();
    let z2_x_z4 = z2.direct_product(&z4).unwrap();
    let ps3 = generate_powerset_group(3).unwrap();

    group.bench_function("z2^3_vs_ps3", |b| {
        b.iter(|| isomorphic(black_box(&z2_cubed), black_box(&ps3)));
    });
    group.bench_function("z2xz4_vs_z8", |b| {
        b.iter(|| isomorphic(black_box(&z2_x_z4), black_box(&z8)));
    });

    let s4 = generate_symmetric_group(4, 1).unwrap();
    let names: Vec<String> = s4.elements().iter().rev().cloned().collect();
    let s4_reversed = s4.reorder_elements(&names).unwrap();
    group.bench_function("s4_relabelled", |b| {
        b.iter(|| isomorphic(black_box(&s4), black_box(&s4_reversed)));
    });

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    group.sample_size(20);

    let s3 = generate_symmetric_group(3, 1).unwrap();
    let subgroups = s3.proper_subalgebras().unwrap();
    group.bench_function("s3_proper_subgroups", |b| {
        b.iter(|| partition_into_isomorphic_lists(black_box(subgroups.clone())));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_axiom_checks,
    bench_classification,
    bench_closed_subsets,
    bench_isomorphism,
    bench_partition
);

criterion_main!(benches);
