use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inicfg::{parse_str, IniOptions};

fn flat_document(sections: usize, keys_per_section: usize) -> String {
    let mut out = String::new();
    for s in 0..sections {
        out.push_str(&format!("[section{s}]\n"));
        for k in 0..keys_per_section {
            out.push_str(&format!("key{k} = value{k}\n"));
        }
    }
    out
}

fn nested_document(sections: usize) -> String {
    let mut out = String::new();
    for s in 0..sections {
        out.push_str(&format!("[app.module{s}.settings]\n"));
        out.push_str("enabled = true\nretries = 3\n");
    }
    out
}

fn quoted_document(keys: usize) -> String {
    let mut out = String::from("[strings]\n");
    for k in 0..keys {
        out.push_str(&format!("key{k} = 'value with\\ttab and \\u00e9scapes'\n"));
    }
    out
}

fn benchmark_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");
    for sections in [10, 100].iter() {
        let source = flat_document(*sections, 20);
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &source,
            |b, source| b.iter(|| parse_str(black_box(source), IniOptions::stable())),
        );
    }
    group.finish();
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let source = nested_document(100);
    let options = IniOptions::stable().with_nesting(true);
    c.bench_function("parse_nested", |b| {
        b.iter(|| parse_str(black_box(&source), options))
    });
}

fn benchmark_parse_quoted(c: &mut Criterion) {
    let source = quoted_document(200);
    let options = IniOptions::all();
    c.bench_function("parse_quoted", |b| {
        b.iter(|| parse_str(black_box(&source), options))
    });
}

fn benchmark_query(c: &mut Criterion) {
    let source = flat_document(50, 20);
    let ini = parse_str(&source, IniOptions::stable()).unwrap();
    c.bench_function("query_value", |b| {
        b.iter(|| ini.get(black_box("section25"), black_box("key10")))
    });
}

criterion_group!(
    benches,
    benchmark_parse_flat,
    benchmark_parse_nested,
    benchmark_parse_quoted,
    benchmark_query
);
criterion_main!(benches);
