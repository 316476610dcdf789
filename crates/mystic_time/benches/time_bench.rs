use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mystic_time::{CivilMoment, gmst_deg, local_sidereal_time_deg, to_julian_day};

fn julian_bench(c: &mut Criterion) {
    let m = CivilMoment::new(1993, 7, 12, 12, 26, 0.0);

    let mut group = c.benchmark_group("julian");
    group.bench_function("to_julian_day", |b| b.iter(|| to_julian_day(black_box(&m))));
    group.bench_function("validate", |b| b.iter(|| black_box(&m).validate()));
    group.finish();
}

fn sidereal_bench(c: &mut Criterion) {
    let jd = 2_449_181.018;

    let mut group = c.benchmark_group("sidereal");
    group.bench_function("gmst_deg", |b| b.iter(|| gmst_deg(black_box(jd))));
    group.bench_function("lst_deg", |b| {
        b.iter(|| local_sidereal_time_deg(black_box(116.9), black_box(75.77)))
    });
    group.finish();
}

criterion_group!(benches, julian_bench, sidereal_bench);
criterion_main!(benches);
