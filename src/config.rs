// tune-table -- frequency range tables for tuner firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turning the raw command line values into a table configuration.
//!
//! Invalid values are never reported to the user. Each option is checked on the integer
//! part of its leading number, and if that passes, the full decimal value is used.
//! Otherwise the default is substituted silently.

use log::{debug, info};
use snafu::Snafu;

/// Default reference pitch of A4, in Hz.
pub const DEFAULT_REFERENCE_HZ: f64 = 440.0;
/// Default tolerance, in cents.
pub const DEFAULT_CENTS: f64 = 10.0;

/// Accepted integer parts of the reference pitch, both exclusive.
const REFERENCE_BOUNDS: (i64, i64) = (400, 500);
/// Accepted integer parts of the tolerance, both exclusive.
const CENTS_BOUNDS: (i64, i64) = (0, 50);

/// Immutable settings of a single table generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Frequency of A4 in tenths of Hz.
    pub reference: f64,
    /// Half-width of the acceptable window, in cents.
    pub cents: f64,
}

/// Why a raw option value was replaced by its default.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum Rejected {
    #[snafu(display("no value given"))]
    Missing,
    #[snafu(display("{} is not strictly between {} and {}", value, low, high))]
    OutOfRange { value: i64, low: i64, high: i64 },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reference: DEFAULT_REFERENCE_HZ * 10.0,
            cents: DEFAULT_CENTS,
        }
    }
}

impl Config {
    /// Build the configuration from the raw `--frequency` and `--cents` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tune_table::config::Config;
    ///
    /// assert_eq!(Config::from_args(Some("442"), Some("5")), Config { reference: 4420.0, cents: 5.0 });
    /// assert_eq!(Config::from_args(Some("500"), None), Config::default());
    /// assert_eq!(Config::from_args(Some("499.99"), Some("foo")).cents, 10.0);
    /// ```
    pub fn from_args(frequency: Option<&str>, cents: Option<&str>) -> Config {
        let default = Config::default();

        let reference = match check_bounds(frequency, REFERENCE_BOUNDS) {
            Ok(hz) => hz * 10.0,
            Err(reason) => {
                debug!(
                    "reference frequency rejected ({}), using {} Hz",
                    reason, DEFAULT_REFERENCE_HZ
                );
                default.reference
            }
        };

        let cents = match check_bounds(cents, CENTS_BOUNDS) {
            Ok(cents) => cents,
            Err(reason) => {
                debug!("tolerance rejected ({}), using {} cents", reason, DEFAULT_CENTS);
                default.cents
            }
        };

        let config = Config { reference, cents };
        info!(
            "A4 = {} (1/10 Hz), tolerance = {} cents",
            config.reference, config.cents
        );
        config
    }

    /// The reference pitch in whole Hz, as printed in the table header.
    pub fn reference_hz(&self) -> i64 {
        self.reference.trunc() as i64 / 10
    }
}

/// Validate on the integer prefix, then hand out the decimal prefix of the same string.
fn check_bounds(raw: Option<&str>, (low, high): (i64, i64)) -> Result<f64, Rejected> {
    let raw = raw.ok_or(Rejected::Missing)?;
    let value = leading_int(raw);
    if value > low && value < high {
        Ok(leading_float(raw))
    } else {
        Err(Rejected::OutOfRange { value, low, high })
    }
}

/// Length of an optional sign followed by digits at the start of `s`.
fn number_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    sign + digits_len(&bytes[sign..])
}

/// Length of a run of ASCII digits, allowing single underscores between two digits.
fn digits_len(bytes: &[u8]) -> usize {
    let mut len = 0;
    while let Some(&b) = bytes.get(len) {
        match b {
            b'0'..=b'9' => len += 1,
            b'_' if len > 0 && bytes.get(len + 1).map_or(false, u8::is_ascii_digit) => len += 1,
            _ => break,
        }
    }
    len
}

/// Integer value of the leading number in `s`, or 0 if there is none.
///
/// Leading whitespace is skipped and anything after the digits is ignored.
/// Digits may be grouped with single underscores, e.g. `4_42`.
pub fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let len = number_prefix_len(s);
    // Values too large for i64 are out of every range we check anyway.
    s[..len].replace('_', "").parse().unwrap_or(0)
}

/// Decimal value of the leading number in `s`, or 0.0 if there is none.
///
/// Accepts an optional fractional part and exponent after the integer digits.
pub fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut len = number_prefix_len(s);

    if bytes.get(len) == Some(&b'.') {
        let frac = digits_len(&bytes[len + 1..]);
        if frac > 0 {
            len += 1 + frac;
        }
    }
    if let Some(b'e') | Some(b'E') = bytes.get(len) {
        let exp = number_prefix_len(&s[len + 1..]);
        if digits_len(&bytes[len + 1..]) > 0 || exp > 1 {
            len += 1 + exp;
        }
    }

    s[..len].replace('_', "").parse().unwrap_or(0.0)
}
