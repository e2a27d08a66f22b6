// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::config::Config;
use crate::note::NoteOffset;
use crate::util;

/// Defines the tuning by assigning a frequency to A4.
/// This defines the frequencies of all other notes at a standard tuning of 12 half-tones per octave.
///
/// Frequencies are given in tenths of Hz, the unit of the generated table.
///
/// # Examples
///
/// ```
/// use tune_table::config::Config;
/// use tune_table::note::*;
/// use tune_table::tuning::*;
///
/// let concert = Tuning::new(&Config::default());
/// assert_eq!(concert.frequency(NoteOffset::A4), 4400.0);
/// assert_eq!(concert.frequency(NoteOffset::try_new(-12).unwrap()), 2200.0);
/// assert_eq!(concert.frequency(NoteOffset::try_new(12).unwrap()), 8800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub reference_frequency: f64,
}

impl Tuning {
    pub fn new(config: &Config) -> Tuning {
        Tuning {
            reference_frequency: config.reference,
        }
    }

    /// Return the frequency of a note relative to this tuning.
    pub fn frequency(&self, note: NoteOffset) -> f64 {
        self.reference_frequency * util::from_semitones(note.semitones() as f64)
    }
}
