//! Performance benchmarks for the ΔE formulas
//!
//! Per-pair cost of each formula, `palette`'s CIEDE2000 as a baseline, and
//! serial versus rayon batch evaluation.

use colormeter_core::batch;
use colormeter_core::difference::DifferenceFormula;
use colormeter_tests::parity::reference_ciede2000;
use colormeter_tests::patterns::generate_lab_pairs;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const PAIR_COUNTS: &[usize] = &[16, 1024, 65536];

fn bench_single_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single pair");
    let (a, b) = generate_lab_pairs(1, 1)[0];

    for formula in DifferenceFormula::ALL {
        group.bench_function(formula.name(), |bench| {
            bench.iter(|| formula.calculate(black_box(a), black_box(b)))
        });
    }

    group.bench_function("palette_ciede2000", |bench| {
        bench.iter(|| reference_ciede2000(black_box(a), black_box(b)))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("CIEDE2000 batch");

    for &count in PAIR_COUNTS {
        let pairs = generate_lab_pairs(2, count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("serial", count), &count, |bench, _| {
            bench.iter(|| {
                black_box(&pairs)
                    .iter()
                    .map(|(a, b)| DifferenceFormula::Ciede2000.calculate(*a, *b))
                    .collect::<Vec<f64>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("rayon", count), &count, |bench, _| {
            bench.iter(|| batch::differences(DifferenceFormula::Ciede2000, black_box(&pairs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_pair, bench_batch);
criterion_main!(benches);
