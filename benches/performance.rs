// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for scalecalc
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Spelling a single scale
//! - Interval quality lookups
//! - Full reports for every supported input

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scalecalc::music::{build_chords, interval_quality};
use scalecalc::{Accidental, Letter, Note, NoteStyle, Scale, ScaleReport, ScaleType};

/// Benchmark scale spelling per scale type
fn bench_scale_spelling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_spelling");
    let root = Note::new(Letter::E, Accidental::Flat);

    for scale_type in ScaleType::ALL {
        group.bench_with_input(
            BenchmarkId::new("spell", scale_type.name()),
            &scale_type,
            |b, &scale_type| b.iter(|| black_box(Scale::new(black_box(root), scale_type))),
        );
    }

    group.finish();
}

/// Benchmark interval quality between two spelled notes
fn bench_interval_quality(c: &mut Criterion) {
    let low = Note::new(Letter::G, Accidental::Sharp);
    let high = Note::new(Letter::D, Accidental::Natural);

    c.bench_function("interval_quality", |b| {
        b.iter(|| black_box(interval_quality(black_box(low), black_box(high))))
    });
}

/// Benchmark triad classification on a spelled scale
fn bench_chords(c: &mut Criterion) {
    let scale = Scale::new(Note::natural(Letter::A), ScaleType::HarmonicMinor).unwrap();

    c.bench_function("build_chords", |b| {
        b.iter(|| black_box(build_chords(black_box(&scale))))
    });
}

/// Benchmark full reports across every root, accidental and scale type
fn bench_all_reports(c: &mut Criterion) {
    c.bench_function("all_reports", |b| {
        b.iter(|| {
            let mut count = 0;
            for letter in Letter::ALL {
                for accidental in Accidental::ALL {
                    for scale_type in ScaleType::ALL {
                        let root = Note::new(letter, accidental);
                        if ScaleReport::calculate(root, scale_type, NoteStyle::Unicode).is_ok() {
                            count += 1;
                        }
                    }
                }
            }
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_scale_spelling,
    bench_interval_quality,
    bench_chords,
    bench_all_reports,
);

criterion_main!(benches);
