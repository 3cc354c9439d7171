//! Purpose: Turn text into a kind-tagged `Value`, rejecting lossy input.
//! Exports: `parse_value`.
//! Role: The per-kind parser switch behind every bind.
//! Invariants: No truncation, wraparound, or saturation; out-of-width is `Range`.
//! Invariants: Unsigned kinds reject any sign character, including `-0` and `+1`.
//! Invariants: Comma lists never bind to a scalar; there is no first-element pick.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::core::error::{BindError, BindErrorKind};
use crate::core::kind::Kind;
use crate::core::timestamp::{parse_date, parse_timestamp};
use crate::core::value::Value;

/// Parse `text` as a literal of `kind`.
///
/// The result carries `text` and `kind` on failure so callers can report the
/// offending input without keeping their own copy.
pub fn parse_value(text: &str, kind: Kind) -> Result<Value, BindError> {
    match kind {
        Kind::I8 => parse_signed(text, kind).map(Value::I8),
        Kind::I16 => parse_signed(text, kind).map(Value::I16),
        Kind::I32 => parse_signed(text, kind).map(Value::I32),
        Kind::I64 => parse_signed(text, kind).map(Value::I64),
        Kind::U8 => parse_unsigned(text, kind).map(Value::U8),
        Kind::U16 => parse_unsigned(text, kind).map(Value::U16),
        Kind::U32 => parse_unsigned(text, kind).map(Value::U32),
        Kind::U64 => parse_unsigned(text, kind).map(Value::U64),
        Kind::F32 => parse_float(text, kind, f32::is_infinite).map(Value::F32),
        Kind::F64 => parse_float(text, kind, f64::is_infinite).map(Value::F64),
        Kind::Bool => parse_bool(text).map(Value::Bool),
        Kind::Timestamp => parse_timestamp(text).map(Value::Timestamp),
        Kind::Date => parse_date(text).map(Value::Date),
    }
}

fn parse_signed<T>(text: &str, kind: Kind) -> Result<T, BindError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse::<T>().map_err(|err| int_error(text, kind, err))
}

fn parse_unsigned<T>(text: &str, kind: Kind) -> Result<T, BindError>
where
    T: FromStr<Err = ParseIntError>,
{
    // `u32::from_str` tolerates a leading '+'; the unsigned grammar does not.
    if let Some(sign) = text.chars().next().filter(|c| *c == '+' || *c == '-') {
        let digits = &text[1..];
        let is_number = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        let err_kind = if sign == '-' && is_number {
            BindErrorKind::Range
        } else {
            BindErrorKind::Syntax
        };
        return Err(BindError::new(err_kind)
            .with_text(text)
            .with_target(kind)
            .with_message(format!("{kind} does not accept a sign"))
            .with_hint(format!("Use {}.", kind.literals())));
    }
    text.parse::<T>().map_err(|err| int_error(text, kind, err))
}

fn int_error(text: &str, kind: Kind, err: ParseIntError) -> BindError {
    let err_kind = match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => BindErrorKind::Range,
        _ => BindErrorKind::Syntax,
    };
    let mut bind_err = BindError::new(err_kind)
        .with_text(text)
        .with_target(kind)
        .with_message(err.to_string());
    if err_kind == BindErrorKind::Syntax {
        bind_err = bind_err.with_hint(format!("Use {}.", kind.literals()));
    }
    bind_err.with_source(err)
}

fn parse_float<T>(text: &str, kind: Kind, is_infinite: fn(T) -> bool) -> Result<T, BindError>
where
    T: FromStr<Err = ParseFloatError> + Copy,
{
    let value = text.parse::<T>().map_err(|err| {
        BindError::new(BindErrorKind::Syntax)
            .with_text(text)
            .with_target(kind)
            .with_message(err.to_string())
            .with_hint(format!("Use {}.", kind.literals()))
            .with_source(err)
    })?;
    // Rounding to the nearest representable value is fine; overflowing to
    // infinity from a finite literal is not.
    if is_infinite(value) && !is_infinity_literal(text) {
        return Err(BindError::new(BindErrorKind::Range)
            .with_text(text)
            .with_target(kind)
            .with_message(format!("magnitude exceeds {kind} range")));
    }
    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_bool(text: &str) -> Result<bool, BindError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(BindError::new(BindErrorKind::Syntax)
            .with_text(text)
            .with_target(Kind::Bool)
            .with_message("not a boolean literal")
            .with_hint(format!("Use one of: {}.", Kind::Bool.literals()))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_value;
    use crate::core::error::BindErrorKind;
    use crate::core::kind::Kind;
    use crate::core::value::Value;

    fn failure(text: &str, kind: Kind) -> BindErrorKind {
        parse_value(text, kind)
            .expect_err(&format!("{text:?} should not parse as {kind}"))
            .kind()
    }

    #[test]
    fn signed_widths_honor_their_bounds() {
        assert_eq!(parse_value("-128", Kind::I8).unwrap(), Value::I8(i8::MIN));
        assert_eq!(parse_value("127", Kind::I8).unwrap(), Value::I8(i8::MAX));
        assert_eq!(failure("128", Kind::I8), BindErrorKind::Range);
        assert_eq!(failure("-129", Kind::I8), BindErrorKind::Range);
        assert_eq!(failure("32768", Kind::I16), BindErrorKind::Range);
        assert_eq!(failure("2147483648", Kind::I32), BindErrorKind::Range);
        assert_eq!(failure("9223372036854775808", Kind::I64), BindErrorKind::Range);
        assert_eq!(parse_value("+5", Kind::I32).unwrap(), Value::I32(5));
    }

    #[test]
    fn unsigned_rejects_signs() {
        assert_eq!(failure("-12", Kind::U32), BindErrorKind::Range);
        assert_eq!(failure("-0", Kind::U8), BindErrorKind::Range);
        assert_eq!(failure("+12", Kind::U64), BindErrorKind::Syntax);
        assert_eq!(failure("-", Kind::U16), BindErrorKind::Syntax);
        assert_eq!(failure("-foo", Kind::U16), BindErrorKind::Syntax);
        assert_eq!(failure("256", Kind::U8), BindErrorKind::Range);
        assert_eq!(
            parse_value("18446744073709551615", Kind::U64).unwrap(),
            Value::U64(u64::MAX)
        );
    }

    #[test]
    fn integers_never_truncate_floats_or_lists() {
        for kind in Kind::ALL.into_iter().filter(|k| k.is_signed() || k.is_unsigned()) {
            for text in ["5.7", "foo", "1,2,3", "", " 5", "5 ", "1e3", "0x10"] {
                assert_eq!(failure(text, kind), BindErrorKind::Syntax, "{text:?} as {kind}");
            }
        }
    }

    #[test]
    fn floats_accept_rounding_but_not_overflow() {
        assert_eq!(parse_value("1.25", Kind::F64).unwrap(), Value::F64(1.25));
        assert_eq!(parse_value("3.125", Kind::F32).unwrap(), Value::F32(3.125));
        assert_eq!(parse_value("0.1", Kind::F32).unwrap(), Value::F32(0.1));
        assert_eq!(parse_value("-Inf", Kind::F64).unwrap(), Value::F64(f64::NEG_INFINITY));
        assert_eq!(failure("1e39", Kind::F32), BindErrorKind::Range);
        assert_eq!(failure("1e309", Kind::F64), BindErrorKind::Range);
        assert!(matches!(parse_value("1e39", Kind::F64), Ok(Value::F64(_))));
        for text in ["foo", "1,2,3", "", "1.2.3", "1.5f"] {
            assert_eq!(failure(text, Kind::F64), BindErrorKind::Syntax, "{text:?}");
            assert_eq!(failure(text, Kind::F32), BindErrorKind::Syntax, "{text:?}");
        }
    }

    #[test]
    fn nan_is_a_float_literal() {
        match parse_value("NaN", Kind::F64).unwrap() {
            Value::F64(value) => assert!(value.is_nan()),
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn bool_literal_set_is_closed() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_value(text, Kind::Bool).unwrap(), Value::Bool(true), "{text}");
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_value(text, Kind::Bool).unwrap(), Value::Bool(false), "{text}");
        }
        for text in ["yes", "on", "tRUE", "2", "", "1,0", " true"] {
            assert_eq!(failure(text, Kind::Bool), BindErrorKind::Syntax, "{text:?}");
        }
    }

    #[test]
    fn failures_carry_text_and_target() {
        let err = parse_value("foo", Kind::U16).unwrap_err();
        assert_eq!(err.text(), Some("foo"));
        assert_eq!(err.target(), Some(Kind::U16));
        assert!(err.hint().is_some());
    }
}
