// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale reports: the full calculation for one request, and the sinks
//! that display it.
//!
//! A report is computed in one pass (spell the scale, measure the steps,
//! stack the triads, format the notes) and holds the five sequences a
//! display needs. Sinks receive them region by region.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::music::{build_chords, Interval, Note, Scale, ScaleType, TheoryError};

/// How accidentals are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteStyle {
    /// ♭ ♯ x symbols
    #[default]
    Unicode,
    /// b # x
    Ascii,
}

impl NoteStyle {
    pub fn render(self, note: &Note) -> String {
        match self {
            NoteStyle::Unicode => note.display_form(),
            NoteStyle::Ascii => note.ascii_form(),
        }
    }
}

/// Output regions, in the order they are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    StepPattern,
    Notes,
    Thirds,
    Fifths,
    Chords,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::StepPattern,
        Region::Notes,
        Region::Thirds,
        Region::Fifths,
        Region::Chords,
    ];

    /// Row label for text output
    pub fn label(self) -> &'static str {
        match self {
            Region::StepPattern => "Steps",
            Region::Notes => "Notes",
            Region::Thirds => "3rds",
            Region::Fifths => "5ths",
            Region::Chords => "Chords",
        }
    }
}

/// Everything displayed for one scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleReport {
    pub root: String,
    pub scale_type: ScaleType,
    /// Interval between each pair of adjacent notes, e.g. "M2"
    pub steps: Vec<String>,
    pub notes: Vec<String>,
    pub thirds: Vec<String>,
    pub fifths: Vec<String>,
    /// Triad on each degree, e.g. "D Min"
    pub chords: Vec<String>,
}

impl ScaleReport {
    /// Run the full calculation for one root and scale type
    pub fn calculate(root: Note, scale_type: ScaleType, style: NoteStyle) -> Result<Self, TheoryError> {
        debug!(root = %root, scale_type = %scale_type, "calculating scale");

        let scale = Scale::new(root, scale_type)?;
        debug!(scale = %scale, "accidentals resolved");

        let steps = scale
            .notes()
            .windows(2)
            .map(|pair| Interval::between(pair[0], pair[1]).map(|interval| interval.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let chords = build_chords(&scale)?;
        debug!(chords = chords.len(), "triads classified");

        Ok(Self {
            root: style.render(&root),
            scale_type,
            steps,
            notes: scale.notes().iter().map(|n| style.render(n)).collect(),
            thirds: chords.iter().map(|c| style.render(&c.third)).collect(),
            fifths: chords.iter().map(|c| style.render(&c.fifth)).collect(),
            chords: chords
                .iter()
                .map(|c| format!("{} {}", style.render(&c.root), c.quality))
                .collect(),
        })
    }

    /// The sequence shown in `region`
    pub fn sequence(&self, region: Region) -> &[String] {
        match region {
            Region::StepPattern => &self.steps,
            Region::Notes => &self.notes,
            Region::Thirds => &self.thirds,
            Region::Fifths => &self.fifths,
            Region::Chords => &self.chords,
        }
    }

    /// Clear every region of `sink`, then fill them in order
    pub fn write_to(&self, sink: &mut dyn ReportSink) -> Result<()> {
        for region in Region::ALL {
            sink.clear(region)?;
        }
        for region in Region::ALL {
            sink.write(region, self.sequence(region))?;
        }
        Ok(())
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize report to YAML")
    }

    /// Plain-text table, one labelled row per region
    pub fn render_text(&self) -> Result<String> {
        let mut sink = TextSink::new(Vec::new());
        writeln!(sink.writer_mut(), "{} {}", self.root, self.scale_type)?;
        self.write_to(&mut sink)?;
        let bytes = sink.finish()?;
        String::from_utf8(bytes).context("Report text was not valid UTF-8")
    }
}

/// Destination for the five output sequences of a report.
pub trait ReportSink {
    /// Remove anything previously shown in `region`.
    fn clear(&mut self, region: Region) -> Result<()>;

    /// Show `items` in `region`.
    fn write(&mut self, region: Region, items: &[String]) -> Result<()>;
}

/// Column width for text output
const CELL_WIDTH: usize = 9;

/// Collects regions as rows and writes them out on [`TextSink::finish`].
pub struct TextSink<W: Write> {
    writer: W,
    rows: Vec<(Region, Vec<String>)>,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Write collected rows in region order and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.rows.sort_by_key(|(region, _)| Region::ALL.iter().position(|r| r == region));
        for (region, items) in &self.rows {
            write!(self.writer, "{:<8}", region.label())?;
            for item in items {
                // pad by chars, not bytes, so ♭ and ♯ line up
                let pad = CELL_WIDTH.saturating_sub(item.chars().count());
                write!(self.writer, "{}{}", item, " ".repeat(pad))?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn clear(&mut self, region: Region) -> Result<()> {
        self.rows.retain(|(r, _)| *r != region);
        Ok(())
    }

    fn write(&mut self, region: Region, items: &[String]) -> Result<()> {
        match self.rows.iter_mut().find(|(r, _)| *r == region) {
            Some((_, row)) => row.extend_from_slice(items),
            None => self.rows.push((region, items.to_vec())),
        }
        Ok(())
    }
}
