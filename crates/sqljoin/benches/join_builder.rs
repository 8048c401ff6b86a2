use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqljoin::{Join, join};

/// Build a filter list with `n` clauses and `n` parameters:
/// col0 = ? AND col1 = ? AND ...
fn build_filters(n: usize) -> Join {
    let mut filters = join(" AND ");
    for i in 0..n {
        filters.add_with(format!("col{i} = ?"), (i as i64,));
    }
    filters
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("join/add");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_filters(n)));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("join/nested");

    for n in [1, 5, 10, 50, 100] {
        let filters = build_filters(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &filters, |b, filters| {
            b.iter(|| {
                let (text, params) = join(" ")
                    .add("SELECT * FROM t WHERE")
                    .add(filters)
                    .add_with("LIMIT ?", (10_i64,))
                    .must_end();
                black_box((text, params));
            });
        });
    }

    group.finish();
}

fn bench_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("join/end");

    for n in [1, 10, 100] {
        let filters = build_filters(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &filters, |b, filters| {
            b.iter(|| black_box(filters.end()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_nested, bench_end);
criterion_main!(benches);
