// Available modules
mod assets;
mod records;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};
use records::*;

fn criterion_benchmark(c: &mut Criterion) {
    bench_parse_records(c);
    bench_collision_table(c);
}

#[cfg(unix)]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(unix))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
