//! Purpose: Parse and format the accepted timestamp and calendar date texts.
//! Exports: `TimestampFormat`, `TIMESTAMP_FORMATS`, `parse_timestamp`, `parse_date`, `format_date`.
//! Role: Time-specific half of the parser switch, built on the `time` crate.
//! Invariants: Formats are tried most precise first; first match wins.
//! Invariants: Both formats yield an `OffsetDateTime` that compares by instant.
//! Notes: The accepted literal sets are a compatibility contract; do not widen casually.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::core::error::{BindError, BindErrorKind};
use crate::core::kind::Kind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimestampFormat {
    /// RFC 3339 with up to nanosecond fractional seconds.
    Rfc3339Nano,
    /// RFC 3339 truncated to whole seconds.
    Rfc3339,
}

const MAX_OFFSET_HOURS: i8 = 23;

pub const TIMESTAMP_FORMATS: [TimestampFormat; 2] =
    [TimestampFormat::Rfc3339Nano, TimestampFormat::Rfc3339];

impl TimestampFormat {
    pub fn parse(self, text: &str) -> Result<OffsetDateTime, time::error::Parse> {
        // Literal `T` and `Z` are case-sensitive; `[second]` stops at 59.
        match (self, text.ends_with('Z')) {
            (TimestampFormat::Rfc3339Nano, true) => {
                let utc = format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond digits:1+]]]Z"
                );
                PrimitiveDateTime::parse(text, utc).map(PrimitiveDateTime::assume_utc)
            }
            (TimestampFormat::Rfc3339Nano, false) => {
                let offset = format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond digits:1+]]][offset_hour sign:mandatory]:[offset_minute]"
                );
                OffsetDateTime::parse(text, offset)
            }
            (TimestampFormat::Rfc3339, true) => {
                let utc = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
                PrimitiveDateTime::parse(text, utc).map(PrimitiveDateTime::assume_utc)
            }
            (TimestampFormat::Rfc3339, false) => {
                let offset = format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
                );
                OffsetDateTime::parse(text, offset)
            }
        }
    }

    /// Render `value` in this format; the whole-second form drops any
    /// fractional part rather than rounding.
    pub fn format(self, value: OffsetDateTime) -> Result<String, time::error::Format> {
        match self {
            TimestampFormat::Rfc3339Nano => value.format(&Rfc3339),
            TimestampFormat::Rfc3339 => {
                let truncated = value - time::Duration::nanoseconds(i64::from(value.nanosecond()));
                truncated.format(&Rfc3339)
            }
        }
    }
}

pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, BindError> {
    // Whole-second text also matches the nanosecond form, so the order only
    // decides whose error is reported: the most precise format's.
    let [precise, coarse] = TIMESTAMP_FORMATS;
    let value = precise
        .parse(text)
        .or_else(|err| coarse.parse(text).map_err(|_| err))
        .map_err(|source| calendar_error(text, Kind::Timestamp, source))?;
    // `UtcOffset` reaches ±25:59 but RFC 3339 text stops at ±23:59.
    if value.offset().whole_hours().abs() > MAX_OFFSET_HOURS {
        return Err(BindError::new(BindErrorKind::Range)
            .with_text(text)
            .with_target(Kind::Timestamp)
            .with_message(format!("offset exceeds ±{MAX_OFFSET_HOURS}:59")));
    }
    Ok(value)
}

pub fn parse_date(text: &str) -> Result<Date, BindError> {
    let full_date = format_description!("[year]-[month]-[day]");
    Date::parse(text, full_date).map_err(|source| calendar_error(text, Kind::Date, source))
}

pub fn format_date(value: Date) -> Result<String, time::error::Format> {
    value.format(format_description!("[year]-[month]-[day]"))
}

// Well-formed text naming an impossible calendar value (Feb 30) is a range
// failure; everything else is syntax.
fn calendar_error(text: &str, target: Kind, source: time::error::Parse) -> BindError {
    let kind = match &source {
        time::error::Parse::TryFromParsed(time::error::TryFromParsed::ComponentRange(_)) => {
            BindErrorKind::Range
        }
        _ => BindErrorKind::Syntax,
    };
    BindError::new(kind)
        .with_text(text)
        .with_target(target)
        .with_message(source.to_string())
        .with_hint(format!("Use {}.", target.literals()))
        .with_source(source)
}
