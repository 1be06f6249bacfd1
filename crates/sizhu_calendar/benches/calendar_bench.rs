use std::path::Path;

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_calendar::{
    CalendarDate, ReferenceTables, day_ganzhi, prev_jie, solar_to_ganzhi, solar_to_lunar,
};

fn load_tables() -> ReferenceTables {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_reference.txt");
    ReferenceTables::load(&path).expect("sample tables")
}

fn table_bench(c: &mut Criterion) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_reference.txt");
    let content = std::fs::read_to_string(path).expect("sample tables");
    c.bench_function("tables_parse", |b| {
        b.iter(|| ReferenceTables::parse(black_box(&content)))
    });
}

fn conversion_bench(c: &mut Criterion) {
    let tables = load_tables();
    let solar = CalendarDate::solar(1998, 3, 17);
    let naive = NaiveDate::from_ymd_opt(1998, 3, 17).expect("valid date");

    let mut group = c.benchmark_group("convert");
    group.bench_function("solar_to_ganzhi", |b| {
        b.iter(|| solar_to_ganzhi(&tables, black_box(&solar)))
    });
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(&tables, black_box(&solar)))
    });
    group.bench_function("prev_jie", |b| b.iter(|| prev_jie(&tables, black_box(naive))));
    group.bench_function("day_ganzhi", |b| b.iter(|| day_ganzhi(black_box(naive))));
    group.finish();
}

criterion_group!(benches, table_bench, conversion_bench);
criterion_main!(benches);
