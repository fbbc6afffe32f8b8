use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::dates::{format_date, parse_date};
use crate::error::CoreError;

/// Largest accepted step for the `d` rule.
pub const MAX_DAY_INTERVAL: u32 = 400;

/// A parsed repeat rule.
///
/// Rule text is a list of space separated tokens whose first token is a
/// single-letter class tag:
///
/// | text    | rule                   |
/// |---------|------------------------|
/// | `""`    | [`RecurrenceRule::None`] (via [`RecurrenceRule::parse_optional`]) |
/// | `d <n>` | [`RecurrenceRule::EveryNDays`], `1 <= n <= 400` |
/// | `y`     | [`RecurrenceRule::EveryYear`] |
/// | `w ...` | recognized, rejected with [`CoreError::UnsupportedRule`] |
/// | `m ...` | recognized, rejected with [`CoreError::UnsupportedRule`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// One-shot task.
    None,
    EveryNDays(u32),
    EveryYear,
}

impl RecurrenceRule {
    /// Like [`FromStr`], but maps empty text to [`RecurrenceRule::None`].
    pub fn parse_optional(text: &str) -> Result<Self, CoreError> {
        match text.parse() {
            Err(CoreError::EmptyRule) => Ok(RecurrenceRule::None),
            other => other,
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceRule::None)
    }
}

impl FromStr for RecurrenceRule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CoreError::EmptyRule);
        }

        let tokens: Vec<&str> = s.split(' ').collect();
        match tokens[0] {
            "d" => {
                let [_, interval] = tokens.as_slice() else {
                    return Err(CoreError::MalformedRule(s.to_string()));
                };
                let out_of_range = || CoreError::IntervalOutOfRange {
                    value: interval.to_string(),
                    max: MAX_DAY_INTERVAL,
                };
                let value: i64 = interval.parse().map_err(|e: ParseIntError| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
                    _ => CoreError::MalformedRule(s.to_string()),
                })?;
                let days = u32::try_from(value)
                    .ok()
                    .filter(|days| (1..=MAX_DAY_INTERVAL).contains(days))
                    .ok_or_else(out_of_range)?;
                Ok(RecurrenceRule::EveryNDays(days))
            }
            "y" if tokens.len() == 1 => Ok(RecurrenceRule::EveryYear),
            "w" | "m" => Err(CoreError::UnsupportedRule(s.to_string())),
            _ => Err(CoreError::MalformedRule(s.to_string())),
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::None => Ok(()),
            RecurrenceRule::EveryNDays(days) => write!(f, "d {}", days),
            RecurrenceRule::EveryYear => write!(f, "y"),
        }
    }
}

/// Computes the first occurrence of `rule` that is strictly after `reference`,
/// stepping forward from `start`.
///
/// At least one step is always taken: when `start` is already after
/// `reference` the result is `start` plus one step, never `start` itself.
pub fn advance(
    rule: RecurrenceRule,
    start: NaiveDate,
    reference: NaiveDate,
) -> Result<NaiveDate, CoreError> {
    let mut current = start;
    loop {
        current = match rule {
            RecurrenceRule::None => return Err(CoreError::EmptyRule),
            RecurrenceRule::EveryNDays(days) => current.checked_add_days(Days::new(u64::from(days))),
            RecurrenceRule::EveryYear => add_year(current),
        }
        .ok_or(CoreError::DateOutOfRange)?;

        if current > reference {
            return Ok(current);
        }
    }
}

/// Text-level next occurrence: parses `date` and `repeat`, then advances
/// past `now`. Empty `repeat` is an error here.
pub fn next_date(now: NaiveDate, date: &str, repeat: &str) -> Result<String, CoreError> {
    if repeat.is_empty() {
        return Err(CoreError::EmptyRule);
    }
    let start = parse_date(date)?;
    let rule: RecurrenceRule = repeat.parse()?;
    advance(rule, start, now).map(format_date)
}

// Feb 29 rolls over to Mar 1 of the following year.
fn add_year(date: NaiveDate) -> Option<NaiveDate> {
    let year = date.year().checked_add(1)?;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
