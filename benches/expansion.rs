//! Benchmarks for shorthand expansion.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use longhand::block::expand_block;
use longhand::{CssGrammar, Grammar, expand_shorthands, value};

const DECLARATIONS: &[(&str, &str)] = &[
    ("margin", "0 auto"),
    ("padding", "1em 2em 1em"),
    ("border", "1px solid #ccc"),
    ("border-radius", "4px 4px 0 0 / 2px"),
    ("border-image", "url(frame.png) 30 30 / 10px round"),
    ("font", "italic bold 14px/1.4 \"Helvetica Neue\", Arial, sans-serif"),
    ("text-decoration", "underline dotted red"),
    ("gap", "8px 16px"),
    ("place-items", "center"),
    ("color", "#333"),
];

const BLOCK: &str = "margin: 0 auto; padding: 1em 2em; border: 1px solid #ccc; \
                     font: 14px/1.4 serif; color: #333 !important";

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_expand_declarations(c: &mut Criterion) {
    c.bench_function("expand_declarations", |b| {
        b.iter(|| expand_shorthands(black_box(DECLARATIONS)));
    });
}

fn bench_expand_block(c: &mut Criterion) {
    c.bench_function("expand_block", |b| {
        b.iter(|| expand_block(black_box(BLOCK)));
    });
}

// ============================================================================
// Grammar Benchmarks
// ============================================================================

fn bench_font_family_match(c: &mut Criterion) {
    let value = value::parse("\"Helvetica Neue\", Arial, \"Liberation Sans\", sans-serif").unwrap();
    c.bench_function("match_font_family", |b| {
        b.iter(|| CssGrammar.matches(black_box("<'font-family'>"), value.value_list()));
    });
}

fn bench_parse_value(c: &mut Criterion) {
    c.bench_function("parse_value", |b| {
        b.iter(|| value::parse(black_box("calc(100% - 2px) rgb(0, 0, 0) / 1.5")).unwrap());
    });
}

criterion_group!(
    benches,
    // Pipeline
    bench_expand_declarations,
    bench_expand_block,
    // Grammar
    bench_font_family_match,
    bench_parse_value,
);
criterion_main!(benches);
