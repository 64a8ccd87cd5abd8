use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex;
use permittivity::models::{
    HavriliakNegamiModel, MultiPoleDebyeModel, Permittivity, PermittivityModel, PermittivityTable,
};
use permittivity::sweep::{angular_freq_logspace, permittivity_sweep};

fn models() -> Vec<(&'static str, PermittivityModel)> {
    let table_omegas = angular_freq_logspace(1.0e3, 1.0e13, 4_096);
    let table_eps = table_omegas
        .iter()
        .map(|w| Complex::new(1.0 + 1.0e6 / w.sqrt(), -1.0e3 / w.sqrt()))
        .collect();
    vec![
        (
            "havriliak_negami",
            HavriliakNegamiModel::new(80.0, 5.0, 1.0e-11, 0.8, 0.6)
                .expect("valid parameters")
                .into(),
        ),
        (
            "multi_debye_8",
            MultiPoleDebyeModel::from_parameters(
                4.0,
                0.01,
                &[10.0, 8.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
                &[1.0e-3, 1.0e-4, 1.0e-5, 1.0e-6, 1.0e-7, 1.0e-8, 1.0e-9, 1.0e-10],
            )
            .expect("valid parameters")
            .into(),
        ),
        (
            "table_4096",
            PermittivityTable::new(table_omegas, table_eps)
                .expect("valid table")
                .into(),
        ),
    ]
}

fn bench_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("permittivity_sweep");
    let omegas = angular_freq_logspace(1.0e4, 1.0e12, 10_000);

    for (name, model) in models() {
        group.bench_function(BenchmarkId::new(name, omegas.len()), |b| {
            b.iter(|| {
                let _ = permittivity_sweep(&model, omegas.iter().copied());
            })
        });
        group.bench_function(BenchmarkId::new(format!("{name}_trait_sweep"), omegas.len()), |b| {
            b.iter(|| {
                let _ = model.sweep(&omegas);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweeps);
criterion_main!(benches);
