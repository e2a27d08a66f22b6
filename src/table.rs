// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Computing the frequency windows of every note in the table.

use log::trace;

use crate::config::Config;
use crate::note::{NoteOffset, PitchClass};
use crate::tuning::Tuning;
use crate::util::{from_cents, round_tenth, round_tenth_trunc};

/// Half-width of the boundary window, in cents. Half a semitone either way.
pub const BOUNDARY_CENTS: f64 = 50.0;

/// The frequency window of a single note, in tenths of Hz.
///
/// Always ordered `min_boundary <= min_acceptable <= central <= max_acceptable <= max_boundary`
/// for tolerances up to [`BOUNDARY_CENTS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    pub min_boundary: i64,
    pub min_acceptable: i64,
    /// Exact note frequency, rounded to one decimal.
    pub central: f64,
    pub max_acceptable: i64,
    pub max_boundary: i64,
}

impl FrequencyEntry {
    /// Window around `central`, `cents` wide on either side for the acceptable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tune_table::table::FrequencyEntry;
    ///
    /// let a4 = FrequencyEntry::around(4400.0, 10.0);
    /// assert_eq!(a4.min_boundary, 4274);
    /// assert_eq!(a4.min_acceptable, 4374);
    /// assert_eq!(a4.max_acceptable, 4425);
    /// assert_eq!(a4.max_boundary, 4528);
    /// ```
    pub fn around(central: f64, cents: f64) -> FrequencyEntry {
        let shifted = |cents: f64| round_tenth_trunc(central * from_cents(cents));
        FrequencyEntry {
            min_boundary: shifted(-BOUNDARY_CENTS),
            min_acceptable: shifted(-cents),
            central,
            max_acceptable: shifted(cents),
            max_boundary: shifted(BOUNDARY_CENTS),
        }
    }
}

/// Frequency windows of all notes from C0 to C6, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn compute(config: &Config) -> FrequencyTable {
        let tuning = Tuning::new(config);
        let entries = NoteOffset::all()
            .map(|note| {
                let central = round_tenth(tuning.frequency(note));
                let entry = FrequencyEntry::around(central, config.cents);
                trace!("{:>3} {:?}", note.to_string(), entry);
                entry
            })
            .collect();
        FrequencyTable { entries }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn note(&self, note: NoteOffset) -> &FrequencyEntry {
        &self.entries[note.slot()]
    }

    /// Entry for a pitch class in an octave, `None` past the end of the table.
    pub fn get(&self, pitch_class: PitchClass, octave: usize) -> Option<&FrequencyEntry> {
        self.entries.get(pitch_class.slot(octave))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::note::OCTAVES;

    fn config(hz: &str, cents: &str) -> Config {
        Config::from_args(Some(hz), Some(cents))
    }

    fn assert_ordered(table: &FrequencyTable) {
        for entry in table.entries() {
            assert!(entry.min_boundary <= entry.min_acceptable, "{:?}", entry);
            assert!(entry.min_acceptable as f64 <= entry.central, "{:?}", entry);
            assert!(entry.central <= entry.max_acceptable as f64 + 1.0, "{:?}", entry);
            assert!(entry.max_acceptable <= entry.max_boundary, "{:?}", entry);
        }
    }

    #[test]
    fn a4_default() {
        let table = FrequencyTable::compute(&Config::default());
        assert_eq!(table.entries().len(), 73);
        assert_eq!(
            *table.note(NoteOffset::A4),
            FrequencyEntry {
                min_boundary: 4274,
                min_acceptable: 4374,
                central: 4400.0,
                max_acceptable: 4425,
                max_boundary: 4528,
            }
        );
        assert_eq!(table.entries()[57], *table.note(NoteOffset::A4));
    }

    #[test]
    fn defaults_on_invalid_reference() {
        for raw in &["399", "500", "x"] {
            let table = FrequencyTable::compute(&Config::from_args(Some(*raw), None));
            assert_eq!(table.note(NoteOffset::A4).central, 4400.0);
        }
    }

    #[test]
    fn lowest_and_highest() {
        let table = FrequencyTable::compute(&Config::default());
        // C0 = 16.35 Hz, C6 = 1046.50 Hz
        assert_eq!(table.note(NoteOffset::LOWEST).central, 163.5);
        assert_eq!(table.note(NoteOffset::HIGHEST).central, 10465.0);
    }

    #[test]
    fn ordered_for_all_valid_inputs() {
        for hz in 401..500 {
            for cents in 1..50 {
                let table = FrequencyTable::compute(&config(&hz.to_string(), &cents.to_string()));
                assert_eq!(table.entries().len(), NoteOffset::COUNT);
                assert_ordered(&table);
            }
        }
    }

    #[test]
    fn octave_doubling() {
        let table = FrequencyTable::compute(&config("443", "10"));
        for (low, high) in table.entries().iter().zip(&table.entries()[12..]) {
            assert!((high.central - 2.0 * low.central).abs() <= 0.2, "{:?} {:?}", low, high);
        }
    }

    #[test]
    fn wider_tolerance_widens_window() {
        let narrow = FrequencyTable::compute(&config("440", "5"));
        let wide = FrequencyTable::compute(&config("440", "30"));
        for (n, w) in narrow.entries().iter().zip(wide.entries()) {
            assert_eq!(n.central, w.central);
            assert_eq!(n.min_boundary, w.min_boundary);
            assert_eq!(n.max_boundary, w.max_boundary);
            assert!(
                w.max_acceptable - w.min_acceptable > n.max_acceptable - n.min_acceptable,
                "{:?} {:?}",
                n,
                w
            );
        }
    }

    #[test]
    fn table_addressing() {
        let table = FrequencyTable::compute(&Config::default());
        assert_eq!(table.get(PitchClass::A, 4), Some(table.note(NoteOffset::A4)));
        assert!(table.get(PitchClass::C, OCTAVES - 1).is_some());
        for &pitch_class in &PitchClass::ALL[1..] {
            assert_eq!(table.get(pitch_class, OCTAVES - 1), None);
        }
    }
}
