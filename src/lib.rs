// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Generator for the note frequency lookup table of a standalone tuner.
//!
//! For every note from C0 to C6 the table holds an acceptable window, a configurable
//! number of cents around the exact pitch, and a boundary window half a semitone
//! either way. All values are in tenths of Hz.

pub mod cli;
pub mod config;
pub mod note;
pub mod render;
pub mod table;
pub mod tuning;

// Utility modules
pub mod util;

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not initialize logging: {}", source))]
    Logger { source: log::SetLoggerError },
    #[snafu(display("Could not write the table: {}", source))]
    Output { source: std::io::Error },
}
