use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;
use grif_data::{
    export_to_string, load_from_str, parse_document, ExportOptions, PassthroughFormatter,
};

fn sample_store(rooms: usize) -> IndexMap<String, String> {
    let mut store = IndexMap::new();
    for i in 1..=rooms {
        store.insert(format!("room.{i}.name"), format!("Room {i}"));
        store.insert(
            format!("room.{i}.desc"),
            "A low stone room. Cobwebs hang from every beam.".to_string(),
        );
        store.insert(
            format!("room.{i}.on.look"),
            "@if @get(seen) @then @say(again) @else @say(first) @endif".to_string(),
        );
    }
    store
}

fn benchmark_export_grif(c: &mut Criterion) {
    let store = sample_store(100);
    c.bench_function("export_grif_300_entries", |b| {
        b.iter(|| export_to_string(black_box(&store), &ExportOptions::grif(), &PassthroughFormatter))
    });
}

fn benchmark_export_json(c: &mut Criterion) {
    let store = sample_store(100);
    c.bench_function("export_json_300_entries", |b| {
        b.iter(|| export_to_string(black_box(&store), &ExportOptions::json(), &PassthroughFormatter))
    });
}

fn benchmark_parse_grif(c: &mut Criterion) {
    let store = sample_store(100);
    let text = export_to_string(&store, &ExportOptions::grif(), &PassthroughFormatter).unwrap();
    c.bench_function("parse_grif_300_entries", |b| {
        b.iter(|| parse_document(black_box(&text)))
    });
}

fn benchmark_parse_json(c: &mut Criterion) {
    let store = sample_store(100);
    let text = export_to_string(&store, &ExportOptions::json(), &PassthroughFormatter).unwrap();
    c.bench_function("parse_json_300_entries", |b| {
        b.iter(|| parse_document(black_box(&text)))
    });
}

fn benchmark_full_load(c: &mut Criterion) {
    let store = sample_store(100);
    let text = export_to_string(&store, &ExportOptions::json(), &PassthroughFormatter).unwrap();
    c.bench_function("load_json_300_entries", |b| {
        b.iter(|| {
            let mut target: IndexMap<String, String> = IndexMap::new();
            load_from_str(black_box(&text), &mut target, &PassthroughFormatter).unwrap();
            target
        })
    });
}

criterion_group!(
    benches,
    benchmark_export_grif,
    benchmark_export_json,
    benchmark_parse_grif,
    benchmark_parse_json,
    benchmark_full_load
);
criterion_main!(benches);
