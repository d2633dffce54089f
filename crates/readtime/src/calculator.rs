use serde::Serialize;

use crate::{error::CalculationError, profile::LanguageProfile};

const CENTISECONDS_PER_SECOND: u128 = 100;
const CENTISECONDS_PER_MINUTE: u128 = 60 * CENTISECONDS_PER_SECOND;

/// Read time of one document, ready to be attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadTimeResult {
    pub minutes: u64,
    /// Always in `0..60`.
    pub seconds: u8,
    /// For example `6 minutes`.
    pub minute_label: String,
    /// For example `6 minutes, 7 seconds`.
    pub combined_label: String,
}

impl ReadTimeResult {
    pub fn with_seconds(&self) -> (u64, u8) {
        (self.minutes, self.seconds)
    }

    /// Whole minutes, counting any started minute as a full one.
    pub fn minutes_rounded_up(&self) -> u64 {
        self.minutes + u64::from(self.seconds > 0)
    }
}

/// Splits the read time of `word_count` words at `words_per_minute` into minutes
/// and seconds.
///
/// The total is first rounded half up to hundredths of a second, then split; the
/// leftover fraction of a second is truncated. All arithmetic is done on integer
/// centiseconds so the result does not depend on float rounding.
pub fn compute_minutes_seconds(
    word_count: u64,
    words_per_minute: i64,
) -> Result<(u64, u8), CalculationError> {
    if words_per_minute <= 0 {
        return Err(CalculationError::NonPositiveRate { words_per_minute });
    }

    let rate = words_per_minute as u128;
    let centiseconds = (u128::from(word_count) * CENTISECONDS_PER_MINUTE * 2 + rate) / (2 * rate);

    // rate >= 1, so minutes <= word_count and both casts are lossless.
    let minutes = (centiseconds / CENTISECONDS_PER_MINUTE) as u64;
    let seconds = (centiseconds % CENTISECONDS_PER_MINUTE / CENTISECONDS_PER_SECOND) as u8;

    Ok((minutes, seconds))
}

pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

pub fn build_result(
    word_count: u64,
    profile: &LanguageProfile,
) -> Result<ReadTimeResult, CalculationError> {
    let (minutes, seconds) =
        compute_minutes_seconds(word_count, i64::from(profile.words_per_minute))?;

    let minute_label = pluralize(minutes, &profile.minute_singular, &profile.minute_plural);
    let second_label = pluralize(
        u64::from(seconds),
        &profile.second_singular,
        &profile.second_plural,
    );
    let combined_label = format!("{minute_label}, {second_label}");

    Ok(ReadTimeResult {
        minutes,
        seconds,
        minute_label,
        combined_label,
    })
}

/// Number of whitespace separated words in `text`.
pub fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}
