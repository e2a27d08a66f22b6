// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a note is, as far as the frequency table is concerned.

use std::fmt;

/// Number of semitones in an octave.
pub const SEMITONES_PER_OCTAVE: usize = 12;

/// Number of octaves covered by the rendered table (C0 up to B6).
pub const OCTAVES: usize = 7;

/// A note given as its distance in semitones from the reference note A4.
///
/// The table spans C0 (`-57`) up to C6 (`15`), which is six octaves plus one note.
///
/// # Examples
///
/// ```
/// use tune_table::note::*;
///
/// assert_eq!(NoteOffset::A4.slot(), 57);
/// assert_eq!(NoteOffset::LOWEST.pitch_class(), PitchClass::C);
/// assert_eq!(NoteOffset::LOWEST.octave(), 0);
/// assert_eq!(NoteOffset::HIGHEST.pitch_class(), PitchClass::C);
/// assert_eq!(NoteOffset::HIGHEST.octave(), 6);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct NoteOffset(i32);

impl NoteOffset {
    /// C0, the first entry of the table.
    pub const LOWEST: NoteOffset = NoteOffset(-57);
    /// C6, the last entry of the table.
    pub const HIGHEST: NoteOffset = NoteOffset(15);
    /// The reference note itself.
    pub const A4: NoteOffset = NoteOffset(0);

    /// Number of notes in the table.
    pub const COUNT: usize = (Self::HIGHEST.0 - Self::LOWEST.0 + 1) as usize;

    /// Returns `None` if the offset is outside of the table range.
    pub fn try_new(semitones: i32) -> Option<NoteOffset> {
        if semitones >= Self::LOWEST.0 && semitones <= Self::HIGHEST.0 {
            Some(NoteOffset(semitones))
        } else {
            None
        }
    }

    /// All notes of the table in ascending order.
    pub fn all() -> impl Iterator<Item = NoteOffset> {
        (Self::LOWEST.0..=Self::HIGHEST.0).map(NoteOffset)
    }

    pub fn semitones(self) -> i32 {
        self.0
    }

    /// Position of this note in the table, 0 being C0.
    pub fn slot(self) -> usize {
        (self.0 - Self::LOWEST.0) as usize
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass::ALL[self.slot() % SEMITONES_PER_OCTAVE]
    }

    pub fn octave(self) -> usize {
        self.slot() / SEMITONES_PER_OCTAVE
    }
}

/// The twelve chromatic note names, in table order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; SEMITONES_PER_OCTAVE] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Index of the pitch class within an octave, `C` being 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The table slot holding this pitch class in the given octave.
    /// The slot may lie past the end of the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use tune_table::note::*;
    ///
    /// assert_eq!(PitchClass::A.slot(4), NoteOffset::A4.slot());
    /// assert_eq!(PitchClass::CSharp.slot(6), 73);
    /// ```
    pub fn slot(self, octave: usize) -> usize {
        self.index() + SEMITONES_PER_OCTAVE * octave
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for NoteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn range() {
        assert_eq!(NoteOffset::COUNT, 73);
        assert_eq!(NoteOffset::all().count(), NoteOffset::COUNT);
        assert_eq!(NoteOffset::try_new(-58), None);
        assert_eq!(NoteOffset::try_new(16), None);
        assert_eq!(NoteOffset::try_new(0), Some(NoteOffset::A4));
    }

    #[test]
    fn names() {
        assert_eq!(NoteOffset::A4.to_string(), "A4");
        assert_eq!(NoteOffset::LOWEST.to_string(), "C0");
        assert_eq!(NoteOffset::HIGHEST.to_string(), "C6");
        assert_eq!(NoteOffset::try_new(-8).unwrap().to_string(), "C#4");
        assert_eq!(NoteOffset::try_new(2).unwrap().to_string(), "B4");
    }

    #[test]
    fn octave_steps() {
        let c4 = NoteOffset::try_new(-9).unwrap();
        let c5 = NoteOffset::try_new(-9 + SEMITONES_PER_OCTAVE as i32).unwrap();
        assert_eq!(c5.slot() - c4.slot(), SEMITONES_PER_OCTAVE);
        assert_eq!(c4.pitch_class(), c5.pitch_class());
        assert_eq!(c5.octave(), c4.octave() + 1);
    }

    #[test]
    fn slots_agree() {
        for note in NoteOffset::all() {
            assert_eq!(note.pitch_class().slot(note.octave()), note.slot());
        }
    }
}
