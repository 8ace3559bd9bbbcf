//! Benchmarks for the pagination core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mini_pager::{
    paginate, render_content_for, tokenize, GridRenderer, PaginationSession, PaginatorOptions,
    Style,
};

fn sample_text(paragraphs: usize) -> String {
    let mut text = String::new();
    for i in 0..paragraphs {
        text.push_str(&format!(
            "Paragraph {} contains enough text to span multiple lines and test the  pagination   algorithm.\n",
            i
        ));
        if i % 3 == 0 {
            text.push('\n');
        }
    }
    text
}

fn bench_tokenize(c: &mut Criterion) {
    let text = sample_text(50);
    c.bench_function("tokenize", |b| {
        b.iter(|| black_box(tokenize(black_box(&text))));
    });
}

fn bench_paginate_small(c: &mut Criterion) {
    let text = "Hello, World! This is a small document.\n\nIt has a few paragraphs.";
    c.bench_function("paginate_small_document", |b| {
        let mut renderer = GridRenderer::new(320.0, 200.0);
        b.iter(|| black_box(paginate(black_box(text), &mut renderer)));
    });
}

fn bench_paginate_medium(c: &mut Criterion) {
    let text = sample_text(50);
    c.bench_function("paginate_medium_document", |b| {
        let mut renderer = GridRenderer::new(640.0, 400.0);
        b.iter(|| black_box(paginate(black_box(&text), &mut renderer)));
    });
}

fn bench_restyle(c: &mut Criterion) {
    let text = sample_text(50);
    c.bench_function("restyle_cycle", |b| {
        let mut session = PaginationSession::new(
            GridRenderer::new(640.0, 400.0),
            Style::default(),
            PaginatorOptions::default(),
        );
        session.submit(text.clone()).ok();

        b.iter(|| {
            session.set_style(Style::with_font_size(24.0)).ok();
            session.set_style(Style::with_font_size(16.0)).ok();
        });
    });
}

fn bench_render_content(c: &mut Criterion) {
    let text = sample_text(50);
    let mut renderer = GridRenderer::new(640.0, 400.0);
    let pages = paginate(&text, &mut renderer).unwrap_or_default();

    c.bench_function("render_content_for", |b| {
        b.iter(|| {
            for index in 0..pages.len() {
                black_box(render_content_for(&pages, index, &text).ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_paginate_small,
    bench_paginate_medium,
    bench_restyle,
    bench_render_content,
);

criterion_main!(benches);
