// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled notes: natural letters, accidentals and their display forms.
//!
//! Letters are indexed from A so that step tables can be read starting at
//! a root's position. Positions 7-13 address the same letters one octave
//! up, which lets interval and scale code walk past G without wrapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// The natural letters, twice over, starting from A.
pub const NATURAL_LETTERS: [Letter; 14] = [
    Letter::A,
    Letter::B,
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
];

impl Letter {
    /// All letters in cycle order
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Position in the A-G cycle (0-6)
    pub fn position(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 6,
        }
    }

    /// Position one octave up (7-13), for walks that cross G -> A
    pub fn wrap_position(self) -> usize {
        self.position() + 7
    }

    /// Parse a letter from a single character (case-insensitive)
    pub fn from_char(c: char) -> Result<Self, TheoryError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Letter::A),
            'B' => Ok(Letter::B),
            'C' => Ok(Letter::C),
            'D' => Ok(Letter::D),
            'E' => Ok(Letter::E),
            'F' => Ok(Letter::F),
            'G' => Ok(Letter::G),
            _ => Err(TheoryError::InvalidRootLetter(c.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }
}

impl FromStr for Letter {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::from_char(c),
            _ => Err(TheoryError::InvalidRootLetter(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidentals, ordered from lowest to highest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    pub const ALL: [Accidental; 5] = [
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];

    /// Half-steps this accidental moves a natural note
    pub fn offset(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Accidental for a half-step offset, if one exists
    pub fn from_offset(offset: i8) -> Option<Self> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "♭♭",
            Accidental::Flat => "♭",
            Accidental::Natural => "♮",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Plain-ASCII symbol, empty for natural
    pub fn ascii_symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "double-flat",
            Accidental::Flat => "flat",
            Accidental::Natural => "natural",
            Accidental::Sharp => "sharp",
            Accidental::DoubleSharp => "double-sharp",
        }
    }
}

impl FromStr for Accidental {
    type Err = TheoryError;

    /// Accepts display symbols, ASCII spellings and names. Empty means natural.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "" | "♮" | "n" | "natural" => Ok(Accidental::Natural),
            "♭" | "b" | "flat" => Ok(Accidental::Flat),
            "♭♭" | "bb" | "doubleflat" => Ok(Accidental::DoubleFlat),
            "♯" | "#" | "sharp" => Ok(Accidental::Sharp),
            "x" | "##" | "♯♯" | "𝄪" | "doublesharp" => Ok(Accidental::DoubleSharp),
            _ => Err(TheoryError::InvalidAccidental(s.to_string())),
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A spelled note: letter plus accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Natural note on `letter`
    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Display form: the letter alone when natural, otherwise letter + symbol
    pub fn display_form(&self) -> String {
        match self.accidental {
            Accidental::Natural => self.letter.to_string(),
            accidental => format!("{}{}", self.letter, accidental.symbol()),
        }
    }

    /// Same as [`Note::display_form`] with ASCII accidentals
    pub fn ascii_form(&self) -> String {
        format!("{}{}", self.letter, self.accidental.ascii_symbol())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse a spelled note such as "C", "Eb", "F♯" or "Gx"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars
            .next()
            .ok_or_else(|| TheoryError::InvalidRootLetter(String::new()))?;
        let letter = Letter::from_char(first)?;
        let accidental = chars.as_str().parse()?;
        Ok(Note::new(letter, accidental))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_form())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_positions() {
        assert_eq!(Letter::A.position(), 0);
        assert_eq!(Letter::C.position(), 2);
        assert_eq!(Letter::G.position(), 6);
        assert_eq!(Letter::A.wrap_position(), 7);
        assert_eq!(Letter::G.wrap_position(), 13);
    }

    #[test]
    fn test_natural_letters_cycle() {
        for letter in Letter::ALL {
            assert_eq!(NATURAL_LETTERS[letter.position()], letter);
            assert_eq!(NATURAL_LETTERS[letter.wrap_position()], letter);
        }
    }

    #[test]
    fn test_letter_from_str() {
        assert_eq!("C".parse::<Letter>(), Ok(Letter::C));
        assert_eq!("g".parse::<Letter>(), Ok(Letter::G));
        assert_eq!(
            "H".parse::<Letter>(),
            Err(TheoryError::InvalidRootLetter("H".to_string()))
        );
        assert!("CD".parse::<Letter>().is_err());
        assert!("".parse::<Letter>().is_err());
    }

    #[test]
    fn test_accidental_from_str() {
        assert_eq!("".parse::<Accidental>(), Ok(Accidental::Natural));
        assert_eq!("♮".parse::<Accidental>(), Ok(Accidental::Natural));
        assert_eq!("b".parse::<Accidental>(), Ok(Accidental::Flat));
        assert_eq!("♭♭".parse::<Accidental>(), Ok(Accidental::DoubleFlat));
        assert_eq!("#".parse::<Accidental>(), Ok(Accidental::Sharp));
        assert_eq!("x".parse::<Accidental>(), Ok(Accidental::DoubleSharp));
        assert_eq!("Double Sharp".parse::<Accidental>(), Ok(Accidental::DoubleSharp));
        assert_eq!("double-flat".parse::<Accidental>(), Ok(Accidental::DoubleFlat));
        assert!("###".parse::<Accidental>().is_err());
    }

    #[test]
    fn test_accidental_offsets() {
        for accidental in Accidental::ALL {
            assert_eq!(Accidental::from_offset(accidental.offset()), Some(accidental));
        }
        assert_eq!(Accidental::from_offset(3), None);
        assert_eq!(Accidental::from_offset(-3), None);
    }

    #[test]
    fn test_note_from_str() {
        assert_eq!("C".parse::<Note>(), Ok(Note::natural(Letter::C)));
        assert_eq!("Eb".parse::<Note>(), Ok(Note::new(Letter::E, Accidental::Flat)));
        assert_eq!("Bbb".parse::<Note>(), Ok(Note::new(Letter::B, Accidental::DoubleFlat)));
        assert_eq!("F♯".parse::<Note>(), Ok(Note::new(Letter::F, Accidental::Sharp)));
        assert!("Q#".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
    }

    #[test]
    fn test_display_form_strips_natural() {
        assert_eq!(Note::natural(Letter::A).display_form(), "A");
        assert_eq!(Note::new(Letter::G, Accidental::Sharp).display_form(), "G♯");
        assert_eq!(Note::new(Letter::B, Accidental::DoubleFlat).display_form(), "B♭♭");
        assert_eq!(Note::new(Letter::F, Accidental::DoubleSharp).display_form(), "Fx");
        assert_eq!(Note::new(Letter::E, Accidental::Flat).ascii_form(), "Eb");
    }

    #[test]
    fn test_display_form_is_idempotent() {
        for letter in Letter::ALL {
            for accidental in Accidental::ALL {
                let note = Note::new(letter, accidental);
                let shown = note.display_form();
                let reparsed: Note = shown.parse().unwrap();
                assert_eq!(reparsed, note);
                assert_eq!(reparsed.display_form(), shown);
            }
        }
    }
}
