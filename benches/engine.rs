use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectro_scan::{CalibrationModel, Calibrator, ColorReading, LinearSolver, ReferenceSample};

fn benchmark_estimate(c: &mut Criterion) {
    let model = CalibrationModel::new();
    let reading = ColorReading::new(120.0, 150.0, 100.0);

    c.bench_function("estimate_absorbance", |b| {
        b.iter(|| model.estimate_absorbance(black_box(&reading), black_box(540)))
    });
}

fn benchmark_fit(c: &mut Criterion) {
    let calibrator = Calibrator::new();
    let samples: Vec<ReferenceSample> = (0..16)
        .map(|i: u32| {
            // Scrambled channel values keep the design matrix well-conditioned
            let hue = f64::from(i * 37 % 180);
            let saturation = f64::from(i * 91 % 256);
            let value = f64::from(20 + i * 53 % 230);
            ReferenceSample {
                reading: ColorReading::new(hue, saturation, value),
                known_absorbance: 0.05 + 0.1 * f64::from(i),
                wavelength: 540,
            }
        })
        .collect();

    c.bench_function("fit_16_samples", |b| {
        b.iter(|| calibrator.fit(black_box(&samples)))
    });
}

fn benchmark_solver(c: &mut Criterion) {
    let solver = LinearSolver::new();
    let a = vec![
        vec![4.0, 1.0, 0.0, 0.5],
        vec![1.0, 3.0, 1.0, 0.0],
        vec![0.0, 1.0, 4.0, 2.0],
        vec![0.5, 0.0, 2.0, 5.0],
    ];
    let rhs = vec![1.0, 2.0, 3.0, 4.0];

    c.bench_function("solve_4x4", |b| {
        b.iter(|| solver.solve(black_box(&a), black_box(&rhs)))
    });
}

criterion_group!(benches, benchmark_estimate, benchmark_fit, benchmark_solver);
criterion_main!(benches);
