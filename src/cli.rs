// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Command line front end of the table generator.

use std::io::{self, Write};

use snafu::ResultExt;
use structopt::StructOpt;

use crate::config::Config;
use crate::render;
use crate::table::FrequencyTable;
use crate::{Error, Logger, Output};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tune-table",
    about = "Frequency ranges for the tuner firmware, in 1/10 Hz"
)]
pub struct Opt {
    /// Print diagnostics along with the table, repeat for more detail.
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// A4 reference frequency (in Hz). Default is 440 Hz.
    #[structopt(short, long, allow_hyphen_values = true)]
    frequency: Option<String>,

    /// Variation allowed, in cents. Default is 10 cents.
    #[structopt(short, long, allow_hyphen_values = true)]
    cents: Option<String>,
}

impl Opt {
    pub fn config(&self) -> Config {
        Config::from_args(self.frequency.as_deref(), self.cents.as_deref())
    }
}

pub fn main() -> Result<(), Error> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).context(Logger)?;

    let config = opt.config();
    let table = FrequencyTable::compute(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::render(&mut out, &config, &table).context(Output)?;
    out.flush().context(Output)
}
