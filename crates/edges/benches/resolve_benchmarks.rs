use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use edges::EdgeDirective::{self, *};
use edges::parser::parse_directives;
use edges::resolve;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let cases: [(&str, Vec<EdgeDirective>); 4] = [
        ("empty", vec![]),
        ("single", vec![All(16.0)]),
        ("mixed", vec![Top(20.0), All(16.0), Horizontal(4.0), Trailing(2.0)]),
        (
            "long",
            (0..64)
                .map(|i| match i % 4 {
                    0 => All(i as f64),
                    1 => Vertical(i as f64),
                    2 => Leading(i as f64),
                    _ => Bottom(i as f64),
                })
                .collect(),
        ),
    ];

    for (name, directives) in &cases {
        group.bench_with_input(BenchmarkId::new("resolve", name), directives, |b, d| {
            b.iter(|| resolve(black_box(d)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let source = "all: 16; vertical: 8; top: 2; padding-trailing: 4.5";

    c.bench_function("parse_directives", |b| {
        b.iter(|| parse_directives(black_box(source)))
    });
}

criterion_group!(benches, bench_resolve, bench_parse);
criterion_main!(benches);
