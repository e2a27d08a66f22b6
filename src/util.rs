//! Utility functions that I don't know where to put else

/// Compute a factor measured in cents (1/100 of a semitone)
///
/// # Example
///
/// ```
/// # use tune_table::util::*;
///
/// assert_eq!(from_cents(1200.0), 2.0);
/// assert_eq!(from_cents(-1200.0), 0.5);
/// ```
pub fn from_cents(cents: f64) -> f64 {
    2.0f64.powf(cents / 1200.0)
}

/// Compute a factor measured in semitones (one octave consists of 12 semitones)
///
/// # Example
///
/// ```
/// # use tune_table::util::*;
///
/// assert_eq!(from_semitones(12.0), 2.0);
/// assert_eq!(from_semitones(-24.0), 0.25);
/// ```
pub fn from_semitones(semitones: f64) -> f64 {
    2.0f64.powf(semitones / 12.0)
}

/// Round to one decimal place, ties away from zero.
///
/// # Example
///
/// ```
/// # use tune_table::util::*;
///
/// assert_eq!(round_tenth(4374.657), 4374.7);
/// assert_eq!(round_tenth(4425.44), 4425.4);
/// ```
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to one decimal place and drop the fraction, truncating towards zero.
///
/// The intermediate rounding only matters when it carries into the next integer,
/// e.g. `4274.96` becomes `4275` rather than `4274`.
///
/// # Example
///
/// ```
/// # use tune_table::util::*;
///
/// assert_eq!(round_tenth_trunc(4374.657), 4374);
/// assert_eq!(round_tenth_trunc(4274.96), 4275);
/// ```
pub fn round_tenth_trunc(value: f64) -> i64 {
    round_tenth(value).trunc() as i64
}
