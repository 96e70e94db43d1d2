// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale calculator: spells a scale from a root, accidental and scale
//! type, then derives its step pattern, chord tones and triads.

pub mod config;
pub mod music;
pub mod report;

pub use config::{OutputConfig, OutputFormat, RequestFile, ScaleRequest};
pub use music::{Accidental, Letter, Note, Scale, ScaleType, TheoryError};
pub use report::{NoteStyle, Region, ReportSink, ScaleReport, TextSink};
