//! Performance benchmarks for the RTT summarizer
//!
//! Measures tokenizing, row parsing and the single-pass fold over logs of
//! increasing size, plus report rendering.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rtt_summarizer::{
    input::{parse_row, tokenize, RowLayout},
    output::OutputFormatterFactory,
    stats::{Summarizer, SummaryConfig},
    types::{OutputFormat, ParseMode},
};
use std::hint::black_box;

/// Build a shape A log (`timestamp,rtt`) with `rows` lines
fn create_sample_log(rows: usize) -> String {
    (0..rows)
        .map(|i| format!("{},{}\n", 1_700_000_000_000u64 + i as u64 * 250, 40.0 + (i % 7000) as f64 * 0.75))
        .collect()
}

/// Same log with every tenth row replaced by garbage
fn create_noisy_log(rows: usize) -> String {
    (0..rows)
        .map(|i| {
            if i % 10 == 0 {
                "timeout,n/a\n".to_string()
            } else {
                format!("{},{}\n", 1_700_000_000_000u64 + i as u64 * 250, 40.0 + (i % 7000) as f64 * 0.75)
            }
        })
        .collect()
}

fn benchmark_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let summarizer = Summarizer::with_defaults();

    for size in [1_000usize, 10_000, 100_000].iter() {
        let log = create_sample_log(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("strict", size), &log, |b, log| {
            b.iter(|| summarizer.summarize_str(black_box(log)))
        });
    }

    let lenient = Summarizer::new(SummaryConfig {
        parse_mode: ParseMode::Lenient,
        ..SummaryConfig::default()
    })
    .unwrap();
    let noisy = create_noisy_log(10_000);
    group.bench_function("lenient_noisy_10000", |b| {
        b.iter(|| lenient.summarize_str(black_box(&noisy)))
    });

    group.finish();
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let log = create_sample_log(10_000);
    let layout = RowLayout::new(1, Some(0));

    group.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(&log), true).count())
    });

    group.bench_function("parse_rows", |b| {
        b.iter(|| {
            tokenize(&log, true)
                .filter_map(|line| parse_row(line.number, line.content, &layout).ok())
                .count()
        })
    });

    group.finish();
}

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let report = Summarizer::with_defaults()
        .summarize_str(&create_sample_log(1_000))
        .unwrap();

    for format in [OutputFormat::Text, OutputFormat::Json] {
        let formatter = OutputFormatterFactory::create_formatter(format, false, true);
        group.bench_function(format!("{:?}", format), |b| {
            b.iter(|| formatter.format_report(black_box(&report)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_summarize,
    benchmark_parsing,
    benchmark_formatting
);
criterion_main!(benches);
