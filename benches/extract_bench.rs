use criterion::{black_box, criterion_group, criterion_main, Criterion};
use goiface::config::ExtractConfig;
use goiface::extract::{extract_interfaces, extract_package_name};
use goiface::strip::strip;

fn go_source_snippet() -> &'static str {
    "package store\n\n// Saver persists things.\ntype Saver interface {\n\tSave(v any) error\n}\n\n/* scratch:\ntype Old interface { X() }\n*/\n\ntype Loader interface {\n\tLoad(id string) (any, error)\n\tBatch() interface{ Flush() }\n}\n\nfunc helper() string { return \"// not a comment\" }\n"
}

fn bench_strip(c: &mut Criterion) {
    let source = go_source_snippet();
    c.bench_function("strip_comments", |b| {
        b.iter(|| black_box(strip(black_box(source))))
    });
}

fn bench_extract(c: &mut Criterion) {
    let stripped = strip(go_source_snippet());
    let config = ExtractConfig::default();
    c.bench_function("extract_interfaces", |b| {
        b.iter(|| black_box(extract_interfaces(black_box(&stripped), &config)))
    });
}

fn bench_strip_and_extract(c: &mut Criterion) {
    let source = go_source_snippet();
    let config = ExtractConfig::default();
    c.bench_function("strip_then_extract", |b| {
        b.iter(|| {
            let stripped = strip(black_box(source));
            let package = extract_package_name(&stripped);
            let names = extract_interfaces(&stripped, &config);
            black_box((package, names))
        })
    });
}

criterion_group!(benches, bench_strip, bench_extract, bench_strip_and_extract);
criterion_main!(benches);
