// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine for the scale calculator.
//!
//! This module spells scales with correct accidentals, measures the
//! intervals between their degrees and classifies the triads built on them.

pub mod chord;
pub mod error;
pub mod interval;
pub mod note;
pub mod scale;

pub use chord::{build_chords, triad_quality, Chord, TriadQuality};
pub use error::TheoryError;
pub use interval::{interval_class, interval_distance, interval_quality, Interval, IntervalQuality};
pub use note::{Accidental, Letter, Note};
pub use scale::{pattern_for, Scale, ScaleType, StepPattern, NATURAL_STEPS};
