use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use newton_cg::{truncated_cg, HessianMode, Model, NewtonCgSolver, SolverSettings};

/// Diagonal quadratic with condition number 10, minimum at `target`.
struct DiagModel {
    diag: Vec<f64>,
    target: Vec<f64>,
}

impl DiagModel {
    fn new(n: usize) -> Self {
        let diag = (0..n)
            .map(|i| 1.0 + 9.0 * i as f64 / (n - 1) as f64)
            .collect();
        let target = (0..n).map(|i| (i % 7) as f64 - 3.0).collect();
        Self { diag, target }
    }
}

impl Model<f64> for DiagModel {
    fn parameter_dim(&self) -> usize {
        self.diag.len()
    }

    fn cost(&mut self, p: &[f64]) -> f64 {
        let mut acc = 0.0;
        for i in 0..p.len() {
            let d = p[i] - self.target[i];
            acc += self.diag[i] * d * d;
        }
        0.5 * acc
    }

    fn gradient(&mut self, p: &[f64]) -> Vec<f64> {
        (0..p.len())
            .map(|i| self.diag[i] * (p[i] - self.target[i]))
            .collect()
    }

    fn hessian_action(&mut self, _p: &[f64], dir: &[f64], _mode: HessianMode) -> Vec<f64> {
        dir.iter().zip(&self.diag).map(|(&v, &d)| d * v).collect()
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("newton_cg_solve");
    for n in [10, 100, 1000] {
        let initial = vec![0.0; n];
        let mut solver = NewtonCgSolver::new(SolverSettings::default(), DiagModel::new(n)).unwrap();

        group.bench_with_input(BenchmarkId::new("diag_quadratic", n), &initial, |b, x| {
            b.iter(|| black_box(solver.solve(black_box(x)).unwrap()))
        });
    }
    group.finish();
}

fn bench_truncated_cg(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncated_cg");
    for n in [10, 100, 1000] {
        let mut model = DiagModel::new(n);
        let p = vec![0.0; n];
        let grad = model.gradient(&p);

        group.bench_with_input(BenchmarkId::new("spd_system", n), &grad, |b, g| {
            b.iter(|| {
                black_box(truncated_cg(
                    &mut model,
                    &p,
                    black_box(g),
                    HessianMode::Full,
                    1e-10,
                    200,
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_truncated_cg);
criterion_main!(benches);
