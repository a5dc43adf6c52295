//! Criterion benchmark over the offline extraction path.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use webharvest::{extract_html, ExtractionConfig};

fn article_page() -> String {
    let paragraphs: String = (0..40)
        .map(|i| {
            format!(
                "<p>Paragraph {i} of the article body carries enough prose to look \
                 like real editorial content rather than navigation chrome.</p>"
            )
        })
        .collect();

    format!(
        r#"<html lang="en"><head><title>Benchmark Page</title>
        <meta name="description" content="A synthetic article for benchmarking.">
        </head><body>
        <nav><a href="/">Home</a><a href="/about">About</a></nav>
        <div class="sidebar">widget widget widget</div>
        <h1>Benchmark Article</h1>
        <article>{paragraphs}</article>
        <footer>fine print</footer>
        </body></html>"#
    )
}

fn bench_extract_html(c: &mut Criterion) {
    let html = article_page();
    let config = ExtractionConfig::default();

    c.bench_function("extract_html/article_page", |b| {
        b.iter(|| extract_html(black_box("https://example.com/bench"), black_box(&html), &config));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let text = "Some sentence that is long enough to survive.  ".repeat(200);

    c.bench_function("normalize/long_text", |b| {
        b.iter(|| webharvest::normalize::normalize(black_box(&text)));
    });
}

criterion_group!(benches, bench_extract_html, bench_normalize);
criterion_main!(benches);
