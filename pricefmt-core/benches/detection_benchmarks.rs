//! Benchmarks for price detection and filtering throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricefmt_core::{LocaleCatalog, PriceFilter, PriceParser};
use std::hint::black_box;
use std::sync::Arc;

/// Generate a price list of specified size
fn generate_text(size_kb: usize) -> String {
    let base_text = "Starter: €9.99\nMain course 24,50 EUR TTC\nWine: -$12\nDessert 7,- €\nNo price here.\n";
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base_text.len() + 1;
    let text = base_text.repeat(repeat_count);

    // Cut on a char boundary
    let mut end = target_size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

fn bench_find_prices(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_prices");
    let catalog = Arc::new(LocaleCatalog::builtin().unwrap());

    for size_kb in [1, 10, 100, 1000] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("euro", format!("{}KB", size_kb)),
            &text,
            |b, text| {
                let mut parser = PriceParser::new(catalog.clone());
                parser.expect_currency("EUR").unwrap();
                b.iter(|| parser.find_prices(black_box(text)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("any_currency", format!("{}KB", size_kb)),
            &text,
            |b, text| {
                let mut parser = PriceParser::new(catalog.clone());
                parser.expect_any_currency();
                b.iter(|| parser.find_prices(black_box(text)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_string");
    let catalog = Arc::new(LocaleCatalog::builtin().unwrap());
    let filter = PriceFilter::for_locales(catalog, &["EUR_FR", "USD"]).unwrap();

    for size_kb in [10, 100] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("eur_fr_usd", format!("{}KB", size_kb)),
            &text,
            |b, text| b.iter(|| filter.filter_string(black_box(text)).unwrap()),
        );
    }

    group.finish();
}

/// Pattern compilation happens once per expected-set change
fn bench_pattern_compilation(c: &mut Criterion) {
    let catalog = Arc::new(LocaleCatalog::builtin().unwrap());

    c.bench_function("compile_any_currency", |b| {
        b.iter(|| {
            let mut parser = PriceParser::new(catalog.clone());
            parser.expect_any_currency();
            parser.find_prices(black_box("€1")).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_find_prices,
    bench_filter,
    bench_pattern_compilation
);
criterion_main!(benches);
