use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strip_blocks::{Markers, Selection, find_spans, remove_blocks};

/// A document with `count` multi-line blocks separated by prose.
fn document(count: usize) -> String {
    let mut doc = String::new();
    for i in 0..count {
        doc.push_str("Some surrounding prose that is kept.\n");
        doc.push_str(&format!(
            "<SAMPLE>\n<PROMPT> question {i}\n<RESPONSE> answer {i}\n<DOMAIN> Culture\n<SOURCE>\n"
        ));
    }
    doc
}

fn find_spans_benchmark(c: &mut Criterion) {
    let doc = document(1_000);
    let markers = Markers::default();

    c.bench_function("span::find_spans (1k blocks)", |b| {
        b.iter(|| find_spans(black_box(&doc), black_box(&markers)))
    });
}

fn remove_blocks_benchmark(c: &mut Criterion) {
    let doc = document(1_000);
    let markers = Markers::default();

    c.bench_function("remover::remove_blocks (every other block)", |b| {
        let set = Selection::Indices((1..=1_000).step_by(2).collect())
            .resolve()
            .unwrap();
        b.iter(|| remove_blocks(black_box(&doc), &markers, &set))
    });

    c.bench_function("remover::remove_blocks (huge range)", |b| {
        let set = Selection::Range {
            start: 1,
            end: i64::MAX,
        }
        .resolve()
        .unwrap();
        b.iter(|| remove_blocks(black_box(&doc), &markers, &set))
    });
}

criterion_group!(benches, find_spans_benchmark, remove_blocks_benchmark);
criterion_main!(benches);
