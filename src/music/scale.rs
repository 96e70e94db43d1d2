// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale types and spelled one-octave scales.
//!
//! A scale is built in two passes: the eight degree letters are laid out
//! from the root ignoring accidentals, then each degree is stamped with the
//! accidental needed to make the natural step pattern match the scale
//! type's step pattern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;
use super::note::{Accidental, Note, NATURAL_LETTERS};

/// Number of notes in a scale, root repeated at the octave
pub const SCALE_LEN: usize = 8;

/// Half-steps between consecutive degrees, written out twice so a walk
/// starting anywhere in the first octave never has to wrap.
pub type StepPattern = [i8; 14];

/// Half-steps between consecutive natural letters, from A-B onward.
pub const NATURAL_STEPS: StepPattern = [2, 1, 2, 2, 1, 2, 2, 2, 1, 2, 2, 1, 2, 2];

const MAJOR: StepPattern = [2, 2, 1, 2, 2, 2, 1, 2, 2, 1, 2, 2, 2, 1];
const NATURAL_MINOR: StepPattern = [2, 1, 2, 2, 1, 2, 2, 2, 1, 2, 2, 1, 2, 2];
const HARMONIC_MINOR: StepPattern = [2, 1, 2, 2, 1, 3, 1, 2, 1, 2, 2, 1, 3, 1];
const DORIAN: StepPattern = [2, 1, 2, 2, 2, 1, 2, 2, 1, 2, 2, 2, 1, 2];
const PHRYGIAN: StepPattern = [1, 2, 2, 2, 1, 2, 2, 1, 2, 2, 2, 1, 2, 2];
const LYDIAN: StepPattern = [2, 2, 2, 1, 2, 2, 1, 2, 2, 2, 1, 2, 2, 1];
const MIXOLYDIAN: StepPattern = [2, 2, 1, 2, 2, 1, 2, 2, 2, 1, 2, 2, 1, 2];
const AEOLIAN: StepPattern = [2, 1, 2, 2, 1, 2, 2, 2, 1, 2, 2, 1, 2, 2];
const LOCRIAN: StepPattern = [1, 2, 2, 1, 2, 2, 2, 1, 2, 2, 1, 2, 2, 2];

/// Scale types supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl ScaleType {
    pub const ALL: [ScaleType; 9] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
    ];

    /// Half-step pattern for this scale type
    pub fn steps(self) -> &'static StepPattern {
        match self {
            ScaleType::Major => &MAJOR,
            ScaleType::NaturalMinor => &NATURAL_MINOR,
            ScaleType::HarmonicMinor => &HARMONIC_MINOR,
            ScaleType::Dorian => &DORIAN,
            ScaleType::Phrygian => &PHRYGIAN,
            ScaleType::Lydian => &LYDIAN,
            ScaleType::Mixolydian => &MIXOLYDIAN,
            ScaleType::Aeolian => &AEOLIAN,
            ScaleType::Locrian => &LOCRIAN,
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Aeolian => "Aeolian",
            ScaleType::Locrian => "Locrian",
        }
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    /// Case-insensitive; spaces, dashes and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" | "ionian" => Ok(ScaleType::Major),
            "naturalminor" => Ok(ScaleType::NaturalMinor),
            "harmonicminor" => Ok(ScaleType::HarmonicMinor),
            "dorian" => Ok(ScaleType::Dorian),
            "phrygian" => Ok(ScaleType::Phrygian),
            "lydian" => Ok(ScaleType::Lydian),
            "mixolydian" => Ok(ScaleType::Mixolydian),
            "aeolian" => Ok(ScaleType::Aeolian),
            "locrian" => Ok(ScaleType::Locrian),
            _ => Err(TheoryError::UnknownScaleType(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Look up the step pattern for a scale type by name
pub fn pattern_for(name: &str) -> Result<&'static StepPattern, TheoryError> {
    name.parse::<ScaleType>().map(ScaleType::steps)
}

/// A spelled scale of eight notes, root repeated at the octave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    notes: [Note; SCALE_LEN],
}

impl Scale {
    /// Lay out the degree letters from `root`. The root keeps its
    /// accidental; every other degree starts out natural.
    pub fn build(root: Note) -> Self {
        let base = root.letter.position();
        let mut notes = [root; SCALE_LEN];
        for (i, note) in notes.iter_mut().enumerate().skip(1) {
            *note = Note::natural(NATURAL_LETTERS[base + i]);
        }
        Self { notes }
    }

    /// Build and spell a scale of the given type on `root`
    pub fn new(root: Note, scale_type: ScaleType) -> Result<Self, TheoryError> {
        let mut scale = Self::build(root);
        scale.resolve_accidentals(&NATURAL_STEPS, scale_type.steps())?;
        Ok(scale)
    }

    /// Stamp each degree with the accidental that turns the natural steps
    /// (read from the root's position) into `target` (read from zero).
    ///
    /// Leaves the scale untouched if any degree would need more than a
    /// double accidental.
    pub fn resolve_accidentals(
        &mut self,
        natural: &StepPattern,
        target: &StepPattern,
    ) -> Result<(), TheoryError> {
        let base = self.notes[0].letter.position();
        let mut offset = self.notes[0].accidental.offset();
        let mut resolved = self.notes;

        for degree in 1..SCALE_LEN {
            offset += target[degree - 1] - natural[base + degree - 1];
            resolved[degree].accidental = Accidental::from_offset(offset)
                .ok_or(TheoryError::AccidentalOutOfRange { degree, offset })?;
        }

        self.notes = resolved;
        Ok(())
    }

    pub fn root(&self) -> Note {
        self.notes[0]
    }

    /// Get the notes in this scale
    pub fn notes(&self) -> &[Note; SCALE_LEN] {
        &self.notes
    }

    /// Note at a 0-based degree index
    pub fn degree(&self, index: usize) -> Option<Note> {
        self.notes.get(index).copied()
    }

    /// Display forms of every degree
    pub fn display_forms(&self) -> Vec<String> {
        self.notes.iter().map(Note::display_form).collect()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_forms().join(" "))
    }
}
