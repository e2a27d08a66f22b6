// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Printing the table as the body of a C array initializer.
//!
//! Every pitch class gets three rows, one pair per octave:
//! `min_boundary, min_acceptable`, then `min_acceptable, max_acceptable`,
//! then `max_acceptable, max_boundary`. Slots past the end of the table print as `0, 0`.

use std::io::{self, Write};

use crate::config::Config;
use crate::note::{PitchClass, OCTAVES};
use crate::table::{FrequencyEntry, FrequencyTable};

const BANNER: &str = "Frequency ranges for Tune-O-Matic, in 1/10 Hz\n\n\
                      Copy/paste output in array 'frequencyTable'\n\n\
                      ---------------------\n";

const INDENT: &str = "  ";

/// Which two values of an entry a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Lower,
    Acceptable,
    Upper,
}

impl Row {
    const ALL: [Row; 3] = [Row::Lower, Row::Acceptable, Row::Upper];

    fn pair(self, entry: &FrequencyEntry) -> (i64, i64) {
        match self {
            Row::Lower => (entry.min_boundary, entry.min_acceptable),
            Row::Acceptable => (entry.min_acceptable, entry.max_acceptable),
            Row::Upper => (entry.max_acceptable, entry.max_boundary),
        }
    }
}

/// Write the complete output: banner, header comments and all rows.
pub fn render<W: Write>(out: &mut W, config: &Config, table: &FrequencyTable) -> io::Result<()> {
    out.write_all(BANNER.as_bytes())?;
    writeln!(out, "{}// A4 = {} Hz", INDENT, config.reference_hz())?;
    writeln!(out, "{}// Allowed range = {:?} cents", INDENT, config.cents)?;
    writeln!(out)?;

    for &pitch_class in PitchClass::ALL.iter() {
        for &row in Row::ALL.iter() {
            render_row(out, table, pitch_class, row)?;
        }
    }
    writeln!(out)
}

fn render_row<W: Write>(
    out: &mut W,
    table: &FrequencyTable,
    pitch_class: PitchClass,
    row: Row,
) -> io::Result<()> {
    out.write_all(INDENT.as_bytes())?;
    for octave in 0..OCTAVES {
        match table.get(pitch_class, octave) {
            Some(entry) => {
                let (a, b) = row.pair(entry);
                write!(out, "{},\t{},\t", a, b)?;
            }
            // The very last value of the array has no trailing comma.
            None if row == Row::Upper && pitch_class == PitchClass::B => {
                out.write_all(b"0,\t0\t")?
            }
            None => out.write_all(b"0,\t0,\t")?,
        }
    }
    if row == Row::Lower {
        write!(out, "// {}", pitch_class)?;
    }
    writeln!(out)
}
