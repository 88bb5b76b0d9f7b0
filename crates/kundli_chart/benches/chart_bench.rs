use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kundli_chart::dasha::{build_tree, snapshot};
use kundli_chart::{BirthMoment, Planet, compute_chart};

fn bench_compute_chart(c: &mut Criterion) {
    let moment = BirthMoment::from_parts(
        "1990-01-15T10:30:00Z",
        19.0760,
        72.8777,
        "Asia/Kolkata",
        1,
    )
    .expect("valid birth moment");

    c.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&moment)).expect("chart"))
    });
}

fn bench_dasha(c: &mut Criterion) {
    let birth_jd = 2_447_906.937_5;

    c.bench_function("dasha_build_tree_4_levels", |b| {
        b.iter(|| build_tree(black_box(birth_jd), Planet::Moon, 3))
    });

    c.bench_function("dasha_snapshot_drill_down", |b| {
        b.iter(|| snapshot(black_box(birth_jd), Planet::Moon, birth_jd + 12_345.0, 3))
    });
}

criterion_group!(benches, bench_compute_chart, bench_dasha);
criterion_main!(benches);
