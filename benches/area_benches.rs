use RustedCurveArea::Examples::area_examples::area_examples;
use RustedCurveArea::numerical::root_finder::find_intersections;
use RustedCurveArea::symbolic::normalize::normalize_expression;
use RustedCurveArea::symbolic::symbolic_lambdify::compile_function;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_root_scan(c: &mut Criterion) {
    let f = compile_function(&normalize_expression("x^2 - 2x"));
    let g = compile_function(&normalize_expression("6x - x^2"));
    c.bench_function("root scan, two parabolas", |b| {
        b.iter(|| find_intersections(black_box(&f), black_box(&g)))
    });
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("area examples");
    for i in 0..3 {
        group.bench_function(format!("example {}", i), |b| {
            b.iter(|| area_examples(black_box(i)).calc_area())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_root_scan, bench_session);
criterion_main!(benches);
