// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `tune-table` prints the frequency ranges of C0 to C6, ready to be pasted
//! into the `frequencyTable` array of the tuner firmware.

fn main() -> Result<(), tune_table::Error> {
    tune_table::cli::main()
}
