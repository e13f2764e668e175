use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kestrel_diagnostics::{DiagnosticEngine, ScanConfig};

fn synthetic_source(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        match i % 5 {
            0 => out.push_str(&format!("let value{i} = data |> filter |> map;\n")),
            1 => out.push_str(&format!("function handler{i}(event) => event.payload;\n")),
            2 => out.push_str(&format!("    {i}..{} => \"bucket\",\n", i + 1)),
            3 => out.push_str(&format!("let label{i} = \"item {i}\";\n")),
            _ => out.push_str(&format!("let total{i} = from item in batch{i} select item;\n")),
        }
    }
    out
}

fn bench_clean_scan(c: &mut Criterion) {
    let engine = DiagnosticEngine::new().unwrap();
    let config = ScanConfig::default();
    let text = synthetic_source(2_000);
    c.bench_function("scan/clean_2k_lines", |b| {
        b.iter(|| black_box(engine.scan(black_box(&text), &config)))
    });
}

fn bench_noisy_scan(c: &mut Criterion) {
    let engine = DiagnosticEngine::new().unwrap();
    let config = ScanConfig::default();
    // Every line trips at least one rule.
    let mut text = String::new();
    for i in 0..2_000 {
        text.push_str(&format!("\t let bad{i} = data | filter | {}..{i};\n", i + 1));
    }
    c.bench_function("scan/noisy_2k_lines", |b| {
        b.iter(|| black_box(engine.scan(black_box(&text), &config)))
    });
}

fn bench_many_open_matches(c: &mut Criterion) {
    let engine = DiagnosticEngine::new().unwrap();
    let config = ScanConfig::default();
    // Worst case for the forward closure scan: O(n) per occurrence.
    let mut text = String::new();
    for _ in 0..200 {
        text.push_str("let k = match {\n");
    }
    c.bench_function("scan/200_open_matches", |b| {
        b.iter(|| black_box(engine.scan(black_box(&text), &config)))
    });
}

criterion_group!(
    benches,
    bench_clean_scan,
    bench_noisy_scan,
    bench_many_open_matches
);
criterion_main!(benches);
