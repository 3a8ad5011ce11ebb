//! Calendar date carried by a user record.
//!
//! On the wire a birthdate is an ISO-8601 string in the same shape
//! JavaScript's `toISOString` produces (`YYYY-MM-DDTHH:MM:SS.sssZ`). Parsing
//! accepts either that full form (any offset) or a bare `YYYY-MM-DD`, which
//! is read as UTC midnight. Instants are held at millisecond precision so a
//! value always survives a format/parse round trip unchanged.

use crate::error::CoreError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Birthdate of a user, stored as a UTC instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthdate(DateTime<Utc>);

impl Birthdate {
    /// Earliest year with a four-digit ISO form
    pub const MIN_YEAR: i32 = 0;

    /// Latest year with a four-digit ISO form
    pub const MAX_YEAR: i32 = 9999;

    /// Wrap an instant, dropping anything finer than a millisecond
    ///
    /// Fails for years outside `MIN_YEAR..=MAX_YEAR`, which have no
    /// four-digit ISO form.
    pub fn from_datetime(value: DateTime<Utc>) -> Result<Self, CoreError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&value.year()) {
            return Err(CoreError::invalid_date(value.to_rfc3339()));
        }
        Ok(Self(value.trunc_subsecs(3)))
    }

    /// UTC midnight of the given calendar date
    pub fn from_date(date: NaiveDate) -> Result<Self, CoreError> {
        Self::from_datetime(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// UTC midnight of `year-month-day`, or `None` for an impossible or
    /// out-of-range date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| Self::from_date(date).ok())
    }

    /// Parse an ISO-8601 date or date-time string
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let instant = if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            parsed.with_timezone(&Utc)
        } else if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            // Date-time without an offset is read as UTC
            naive.and_utc()
        } else {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map_err(|_| CoreError::invalid_date(value))?
                .and_time(chrono::NaiveTime::MIN)
                .and_utc()
        };

        Self::from_datetime(instant).map_err(|_| CoreError::invalid_date(value))
    }

    /// ISO-8601 form with millisecond precision and a `Z` suffix
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `YYYY-MM-DD` form, as date pickers submit it
    pub fn to_date_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Calendar date in UTC
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Underlying instant
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Birthdate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthdate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthdate> for String {
    fn from(value: Birthdate) -> Self {
        value.to_iso_string()
    }
}

impl TryFrom<NaiveDate> for Birthdate {
    type Error = CoreError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(date)
    }
}

#[cfg(feature = "graphql")]
mod scalar {
    use super::Birthdate;
    use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};

    /// Custom scalar for Date values
    #[Scalar(name = "Date")]
    impl ScalarType for Birthdate {
        fn parse(value: Value) -> InputValueResult<Self> {
            match value {
                Value::String(s) => Birthdate::parse(&s).map_err(InputValueError::custom),
                other => Err(InputValueError::expected_type(other)),
            }
        }

        fn to_value(&self) -> Value {
            Value::String(self.to_iso_string())
        }
    }
}
