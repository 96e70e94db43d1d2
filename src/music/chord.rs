// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Triads stacked in thirds on each scale degree.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;
use super::interval::{interval_quality, IntervalQuality};
use super::note::Note;
use super::scale::{Scale, SCALE_LEN};

/// Distinct degrees in a scale; the eighth note repeats the root.
const DEGREES: usize = SCALE_LEN - 1;

/// Triad qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriadQuality {
    Augmented,
    Major,
    Minor,
    Diminished,
}

impl TriadQuality {
    /// Short label used in chord names
    pub fn abbreviation(self) -> &'static str {
        match self {
            TriadQuality::Augmented => "Aug",
            TriadQuality::Major => "Maj",
            TriadQuality::Minor => "Min",
            TriadQuality::Diminished => "Dim",
        }
    }
}

impl fmt::Display for TriadQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Classify a triad from its lower and upper thirds
pub fn triad_quality(
    first: IntervalQuality,
    second: IntervalQuality,
) -> Result<TriadQuality, TheoryError> {
    use IntervalQuality::{Major, Minor};

    match (first, second) {
        (Major, Major) => Ok(TriadQuality::Augmented),
        (Major, Minor) => Ok(TriadQuality::Major),
        (Minor, Major) => Ok(TriadQuality::Minor),
        (Minor, Minor) => Ok(TriadQuality::Diminished),
        _ => Err(TheoryError::UnsupportedChordShape { first, second }),
    }
}

/// A triad built on one degree of a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Degree index of the chord root (0-7)
    pub root_index: usize,
    pub root: Note,
    pub third: Note,
    pub fifth: Note,
    pub quality: TriadQuality,
}

impl Chord {
    /// Chord name, e.g. "G♯ Dim"
    pub fn name(&self) -> String {
        format!("{} {}", self.root, self.quality)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build the triad on every note of the scale, octave included
pub fn build_chords(scale: &Scale) -> Result<Vec<Chord>, TheoryError> {
    let notes = scale.notes();

    notes
        .iter()
        .enumerate()
        .map(|(root_index, &root)| -> Result<Chord, TheoryError> {
            let third = notes[(root_index + 2) % DEGREES];
            let fifth = notes[(root_index + 4) % DEGREES];
            let quality = triad_quality(
                interval_quality(root, third)?,
                interval_quality(third, fifth)?,
            )?;
            Ok(Chord {
                root_index,
                root,
                third,
                fifth,
                quality,
            })
        })
        .collect()
}
