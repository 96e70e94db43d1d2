// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval class and quality between two spelled notes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;
use super::note::Note;
use super::scale::{StepPattern, NATURAL_STEPS};

/// Chromatic qualifier of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalQuality {
    Diminished,
    Minor,
    Major,
    Perfect,
    Augmented,
}

impl IntervalQuality {
    /// Short label (d, m, M, P, A)
    pub fn symbol(self) -> &'static str {
        match self {
            IntervalQuality::Diminished => "d",
            IntervalQuality::Minor => "m",
            IntervalQuality::Major => "M",
            IntervalQuality::Perfect => "P",
            IntervalQuality::Augmented => "A",
        }
    }
}

impl fmt::Display for IntervalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Unisons, fourths and fifths
const PERFECT_FAMILY: [IntervalQuality; 3] = [
    IntervalQuality::Diminished,
    IntervalQuality::Perfect,
    IntervalQuality::Augmented,
];

// Seconds, thirds, sixths and sevenths
const MAJOR_FAMILY: [IntervalQuality; 4] = [
    IntervalQuality::Diminished,
    IntervalQuality::Minor,
    IntervalQuality::Major,
    IntervalQuality::Augmented,
];

/// An interval between two scale notes, e.g. M2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Diatonic distance counted inclusively (1-7)
    pub class: u8,
    pub quality: IntervalQuality,
}

impl Interval {
    /// Measure the ascending interval from `low` to `high`
    pub fn between(low: Note, high: Note) -> Result<Self, TheoryError> {
        Ok(Self {
            class: interval_class(low, high),
            quality: interval_quality(low, high)?,
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality, self.class)
    }
}

/// Letter positions of `low` and `high`, with `high` moved up an octave
/// when its letter comes earlier in the cycle.
fn letter_span(low: Note, high: Note) -> (usize, usize) {
    let low_pos = low.letter.position();
    let mut high_pos = high.letter.position();
    if high_pos < low_pos {
        high_pos = high.letter.wrap_position();
    }
    (low_pos, high_pos)
}

/// Diatonic interval class from `low` up to `high` (1 = unison)
pub fn interval_class(low: Note, high: Note) -> u8 {
    let (low_pos, high_pos) = letter_span(low, high);
    (1 + high_pos - low_pos) as u8
}

/// Half-steps from `low` up to `high`, summing `steps` across the letters
/// between them and applying both notes' accidentals.
pub fn interval_distance(low: Note, high: Note, steps: &StepPattern) -> i8 {
    let (low_pos, high_pos) = letter_span(low, high);
    let natural: i8 = steps[low_pos..high_pos].iter().sum();
    natural - low.accidental.offset() + high.accidental.offset()
}

/// Quality of the ascending interval from `low` to `high`
pub fn interval_quality(low: Note, high: Note) -> Result<IntervalQuality, TheoryError> {
    let class = interval_class(low, high);
    let distance = interval_distance(low, high, &NATURAL_STEPS);

    // (qualities, half-steps of the first entry in the table)
    let (family, lowest): (&[IntervalQuality], i8) = match class {
        1 => (&PERFECT_FAMILY[..], -1),
        2 => (&MAJOR_FAMILY[..], 0),
        3 => (&MAJOR_FAMILY[..], 2),
        4 => (&PERFECT_FAMILY[..], 4),
        5 => (&PERFECT_FAMILY[..], 6),
        6 => (&MAJOR_FAMILY[..], 7),
        7 => (&MAJOR_FAMILY[..], 9),
        _ => return Err(TheoryError::UnrepresentableInterval { class, distance }),
    };

    usize::try_from(distance - lowest)
        .ok()
        .and_then(|index| family.get(index).copied())
        .ok_or(TheoryError::UnrepresentableInterval { class, distance })
}
