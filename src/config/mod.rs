// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Request files for the scale calculator.
//!
//! A request names the root, accidental and scale type to calculate, plus
//! how the result should be printed. Files may be YAML or TOML; the
//! extension decides which parser is used.

pub mod watcher;

pub use watcher::{validate_request, RequestEvent, RequestWatcher};

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{Accidental, Letter, Note, ScaleType, TheoryError};
use crate::report::NoteStyle;

/// Root configuration for a request file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RequestFile {
    /// Which scale to calculate
    #[serde(default)]
    pub request: ScaleRequest,
    /// How to print it
    #[serde(default)]
    pub output: OutputConfig,
}

impl RequestFile {
    /// Load a request from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {:?}", path))?;
        if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse a request from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML request")
    }

    /// Parse a request from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML request")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize request to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize request to TOML")
    }

    /// Save the request, as TOML or YAML depending on the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write request file: {:?}", path))
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "toml")
}

/// The three selections that define a scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleRequest {
    /// Root letter (A-G)
    #[serde(default = "default_root")]
    pub root: String,
    /// Accidental on the root (e.g. "flat", "#", "♭")
    #[serde(default = "default_accidental")]
    pub accidental: String,
    /// Scale type name (e.g. "Harmonic Minor")
    #[serde(default = "default_scale")]
    pub scale: String,
}

fn default_root() -> String {
    "C".to_string()
}
fn default_accidental() -> String {
    "natural".to_string()
}
fn default_scale() -> String {
    "Major".to_string()
}

impl Default for ScaleRequest {
    fn default() -> Self {
        Self {
            root: default_root(),
            accidental: default_accidental(),
            scale: default_scale(),
        }
    }
}

impl ScaleRequest {
    pub fn new(root: &str, accidental: &str, scale: &str) -> Self {
        Self {
            root: root.to_string(),
            accidental: accidental.to_string(),
            scale: scale.to_string(),
        }
    }

    /// Parse the selections into a root note and scale type
    pub fn resolve(&self) -> Result<(Note, ScaleType), TheoryError> {
        let letter: Letter = self.root.parse()?;
        let accidental: Accidental = self.accidental.parse()?;
        let scale_type: ScaleType = self.scale.parse()?;
        Ok((Note::new(letter, accidental), scale_type))
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(anyhow!("Unknown output format: {}", s)),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print accidentals as b / # / x
    #[serde(default)]
    pub ascii: bool,
}

impl OutputConfig {
    pub fn note_style(&self) -> NoteStyle {
        if self.ascii {
            NoteStyle::Ascii
        } else {
            NoteStyle::Unicode
        }
    }
}
