use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sweeper::axis::Axis;
use sweeper::sweep::Sweep;
use sweeper_bench::preset;

fn random_axis(rand: &fastrand::Rng, name: &str, len: usize) -> Axis {
    Axis::new(name, (0..len).map(|_| rand.u64(1..1_000_000_000)))
}

fn criterion_benchmark(c: &mut Criterion) {
    let rand = fastrand::Rng::default();
    let template = preset::list_template(preset::JAVA, preset::JAR).unwrap();
    let sweep = Sweep::new(
        template.clone(),
        vec![
            random_axis(&rand, "threads", 16),
            random_axis(&rand, "ops", 16),
            random_axis(&rand, "mode", 4),
        ],
    )
    .unwrap();

    c.bench_function("sweep/points", |b| {
        b.iter(|| sweep.points().count());
    });

    c.bench_function("sweep/invocations", |b| {
        b.iter(|| sweep.invocations().count());
    });

    let len = sweep.len();
    c.bench_function("sweep/invocation_at", |b| {
        b.iter(|| sweep.invocation(black_box(rand.usize(0..len))).unwrap());
    });

    c.bench_function("sweep/command_line", |b| {
        let invocation = sweep.invocation(len - 1).unwrap();
        b.iter(|| invocation.command_line());
    });

    c.bench_function("sweep/new", |b| {
        b.iter(|| {
            Sweep::new(
                template.clone(),
                vec![
                    Axis::new("threads", [2, 8, 16]),
                    Axis::new("ops", [1_000_000, 10_000_000]),
                    Axis::new("mode", [0, 1]),
                ],
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
