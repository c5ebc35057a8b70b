use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use symdiff::Expr;

fn composite() -> Expr {
    4 * (2 * Expr::var()).sin() + (Expr::var().pow(3) / (Expr::var() + 1)).exp()
}

fn bench_diff(c: &mut Criterion) {
    let f = composite();
    c.bench_function("diff composite", |b| b.iter(|| black_box(&f).diff()));
}

fn bench_eval_derivative(c: &mut Criterion) {
    let df = composite().diff();
    c.bench_function("eval derivative", |b| b.iter(|| df.eval(black_box(0.7))));
}

fn bench_lambdified_derivative(c: &mut Criterion) {
    let df = composite().diff().lambdify();
    c.bench_function("lambdified derivative", |b| b.iter(|| df(black_box(0.7))));
}

criterion_group!(
    benches,
    bench_diff,
    bench_eval_derivative,
    bench_lambdified_derivative
);
criterion_main!(benches);
