//! Serde adapters for the store's loose wire encoding.
//!
//! The store sends absent enum codes and dates as empty strings (sometimes as
//! `null`), and expects the same back. These adapters map both spellings to
//! `None` on the way in and write `""` for `None` on the way out.

use serde::{de, Deserialize, Deserializer, Serializer};

/// Wire date format used by the store and the search criteria.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A closed set of values that travel as short string codes (`"M"`, `"Y"`, ...).
pub trait Coded: Sized + Copy {
    /// Wire code of the value.
    fn code(self) -> &'static str;

    /// Parses a wire code, returning `None` for unknown codes.
    fn from_code(code: &str) -> Option<Self>;
}

/// `Option<T: Coded>` encoded as the code or `""`.
pub mod optional_code {
    use super::{de, Coded, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Coded,
        S: Serializer,
    {
        serializer.serialize_str(value.map_or("", Coded::code))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Coded,
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => T::from_code(code)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unknown code `{code}`"))),
        }
    }
}

/// `Option<NaiveDate>` encoded as `YYYY-MM-DD` or `""`.
///
/// Timestamps such as `2024-03-01T00:00:00` are accepted on input; only the
/// date part is kept.
pub mod optional_date {
    use super::{de, Deserialize, Deserializer, Serializer, DATE_FORMAT};
    use chrono::NaiveDate;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_date(text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date `{text}`"))),
        }
    }

    fn parse_date(text: &str) -> Option<NaiveDate> {
        let date_part = text.get(..10).unwrap_or(text);
        NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
    }
}

/// `String` that may arrive as `null`.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `Option<String>` where `""` and `null` both mean absent.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
