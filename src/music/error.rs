// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors raised by the theory engine.

use thiserror::Error;

use super::interval::IntervalQuality;

/// Contract violations surfaced by scale, interval and chord calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The root letter is not one of A through G.
    #[error("invalid root letter `{0}` (expected A-G)")]
    InvalidRootLetter(String),

    /// The accidental text is not a recognised spelling.
    #[error("invalid accidental `{0}`")]
    InvalidAccidental(String),

    /// The scale type name is not one of the built-in patterns.
    #[error("unknown scale type `{0}`")]
    UnknownScaleType(String),

    /// A scale degree would need more than two sharps or flats.
    #[error("degree {degree} needs an accidental offset of {offset}, beyond double-flat..double-sharp")]
    AccidentalOutOfRange {
        /// Scale degree (0-based) that overflowed.
        degree: usize,
        /// The accumulated half-step offset.
        offset: i8,
    },

    /// No interval quality exists for this class and half-step distance.
    #[error("no interval of class {class} spans {distance} half-steps")]
    UnrepresentableInterval {
        /// Diatonic interval class (1-7).
        class: u8,
        /// Half-step distance between the two notes.
        distance: i8,
    },

    /// The stacked thirds do not form one of the four triad shapes.
    #[error("thirds ({first}, {second}) do not form a supported triad")]
    UnsupportedChordShape {
        /// Quality of the root-to-third interval.
        first: IntervalQuality,
        /// Quality of the third-to-fifth interval.
        second: IntervalQuality,
    },
}
