use crate::error::CoreError;
use chrono::NaiveDate;

/// Canonical on-the-wire and in-store date layout: 8 digits, no separators.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Parses a canonical `YYYYMMDD` date.
///
/// Only exactly eight ASCII digits forming a real calendar day are accepted;
/// chrono alone would also take signed or wider years.
pub fn parse_date(text: &str) -> Result<NaiveDate, CoreError> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::MalformedDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| CoreError::MalformedDate(text.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter storing a `NaiveDate` as `YYYYMMDD`.
///
/// Use with `#[serde(with = "crate::dates::compact")]`.
pub mod compact {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_date(&text).map_err(de::Error::custom)
    }
}
