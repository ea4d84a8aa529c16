// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use covid_rank::config::options::{ColumnLayout, FilterOptions, NumberLocale, RunOptions};
use covid_rank::{pipeline, specs};

const SAMPLE: &str = include_str!("../tests/fixtures/worldometers_sample.html");

/// Blow the fixture up to roughly a live page's size (~200 countries, two tables).
fn load_sample() -> String {
    let mut doc = String::with_capacity(SAMPLE.len() * 30);
    for _ in 0..30 {
        doc.push_str(SAMPLE);
    }
    doc
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = load_sample();
    let layout = ColumnLayout::default();
    let filter = FilterOptions::default();
    let locale = NumberLocale::default();

    c.bench_function("extract_country_rows", |b| {
        b.iter(|| {
            let rows = specs::countries::extract_country_rows(black_box(&doc), &layout);
            black_box(rows.len())
        })
    });

    let rows = specs::countries::extract_country_rows(&doc, &layout);
    c.bench_function("rank_countries", |b| {
        b.iter(|| {
            let ranking = pipeline::rank_countries(black_box(rows.clone()), &filter, &locale, None)
                .expect("fixture parses");
            black_box(ranking.metrics.len())
        })
    });

    let opts = RunOptions::default();
    c.bench_function("rank_page", |b| {
        b.iter(|| {
            let ranking = covid_rank::runner::rank_page(black_box(&doc), &opts, None).expect("fixture parses");
            black_box(ranking.metrics.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
