use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use webbuilder::{combinator::*, HandlerFn, PathFormat, Recorder};

fn format_compile_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_compile");

    let templates = [
        ("literal", "/health"),
        ("one", "/user/%i"),
        ("three", "/blog/%s/%d/%b"),
    ];

    for (name, template) in templates.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), template, |b, &template| {
            b.iter(|| match *name {
                "literal" => PathFormat::<()>::exact(black_box(template), false).is_ok(),
                "one" => PathFormat::<i32>::exact(black_box(template), false).is_ok(),
                _ => PathFormat::<(String, i64, bool)>::exact(black_box(template), false).is_ok(),
            });
        });
    }

    group.finish();
}

fn format_extract_benchmark(c: &mut Criterion) {
    let format = PathFormat::<(String, i64, bool)>::exact("/blog/%s/%d/%b", false).unwrap();

    c.bench_function("format_extract_match", |b| {
        b.iter(|| format.extract(black_box("/blog/rust%2Fweb/20260101/true")));
    });

    c.bench_function("format_extract_miss", |b| {
        b.iter(|| format.extract(black_box("/blog/rust/not-a-number/true")));
    });
}

fn pipeline_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_build");

    for size in [1, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let recorder = Recorder::new().with_path("/item/42");
                let handlers: Vec<HandlerFn<Recorder>> = (0..size)
                    .map(|i| -> HandlerFn<Recorder> {
                        Box::new(fish(
                            move |b: &Recorder| route(&format!("/route/{}", i), b),
                            |b: &Recorder| text("ok", b),
                        ))
                    })
                    .collect();
                black_box(compose(
                    move |b: &Recorder| choose(handlers, b),
                    |b: &Recorder| routef("/item/%i", |id: i32, b: &Recorder| json(&id, b), b),
                    &recorder,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    format_compile_benchmark,
    format_extract_benchmark,
    pipeline_build_benchmark
);
criterion_main!(benches);
