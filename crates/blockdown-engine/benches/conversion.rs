use blockdown_engine::{Block, classify, parse_markdown, serialize_blocks};
use criterion::{Criterion, criterion_group, criterion_main};

mod common;

fn bench_document_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(10);

    let content = common::generate_note_content(100);
    group.bench_function("parse_markdown", |b| {
        b.iter(|| {
            let blocks = parse_markdown(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    let blocks = parse_markdown(&content);
    group.bench_function("serialize_blocks", |b| {
        b.iter(|| {
            let text = serialize_blocks(std::hint::black_box(&blocks));
            std::hint::black_box(text);
        });
    });

    group.finish();
}

fn bench_live_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.sample_size(10);

    let block = Block::empty_paragraph();
    let keystrokes = common::keystroke_sequence();
    group.bench_function("keystroke_burst", |b| {
        b.iter(|| {
            for text in &keystrokes {
                std::hint::black_box(classify(std::hint::black_box(text), &block));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_document_conversion, bench_live_classification);
criterion_main!(benches);
