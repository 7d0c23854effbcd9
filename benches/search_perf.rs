//! Criterion benchmarks for the tokenizer and the full search pipeline.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use civsearch::{HoursStatus, SearchConfig, SearchEngine, SearchableRecord, tokenize};

fn synthetic_records(count: usize) -> Vec<SearchableRecord> {
    (0..count)
        .map(|i| SearchableRecord {
            id: format!("org-{i}"),
            name: format!("Community Service {i}"),
            category: (if i % 2 == 0 { "Food Relief" } else { "Legal Aid" }).to_string(),
            description: format!("Support service number {i} offering food advice and referrals"),
            address: format!("{i} Main Street, Adelaide"),
            services: vec!["food distribution".to_string(), "referrals".to_string()],
            languages: vec!["English".to_string(), "Arabic".to_string()],
            accessibility: i % 3 == 0,
            verified: i % 2 == 0,
            rating: 3.0 + (i % 20) as f64 / 10.0,
            distance_km: format!("{}.5 km", i % 40),
            hours_status: if i % 4 == 0 {
                HoursStatus::Open
            } else {
                HoursStatus::Closed
            },
            hours_today: "9am-5pm".to_string(),
        })
        .collect()
}

fn tokenize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let stop_words = SearchConfig::default().stop_words;

    for words in [4, 16, 64].iter() {
        let query: String = "i need emergency food help near the city ".repeat(words / 4);
        group.throughput(Throughput::Bytes(query.len() as u64));
        group.bench_with_input(BenchmarkId::new("words", words), &query, |b, query| {
            b.iter(|| tokenize(black_box(query), &stop_words));
        });
    }

    group.finish();
}

fn search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let engine = SearchEngine::with_defaults();

    for size in [10, 100, 1000].iter() {
        let records = synthetic_records(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("candidates", size), &records, |b, records| {
            b.iter(|| {
                engine
                    .search(black_box("emergency food adelaide"), records, 20, None)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, tokenize_benchmarks, search_benchmarks);
criterion_main!(benches);
