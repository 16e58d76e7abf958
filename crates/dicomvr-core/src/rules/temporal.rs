//! Date (DA), Time (TM) and Date Time (DT).
//!
//! Dates are `YYYYMMDD`. Times are `HH[MM[SS[.F{1,6}]]]`; missing trailing
//! components default to zero. Date times combine a `YYYY[MM[DD]]` date with
//! an optional time and an optional `&ZZXX` UTC offset. The ACR-NEMA
//! separators (`YYYY.MM.DD`, `HH:MM:SS`) are tolerated on input.

use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};

use super::error::RuleError;
use super::layout;
use super::reader::{TextReader, parse_digits};
use super::{RuleContext, trim_padding};
use crate::value::Value;

pub fn parse_date(raw: &str, _ctx: &RuleContext) -> Result<Value, RuleError> {
    let text = trim_padding(raw);
    if text.is_empty() {
        return Ok(Value::Null);
    }
    let compact;
    let text = if text.len() == layout::LEGACY_DATE_LEN {
        compact = text.replace(layout::LEGACY_DATE_SEPARATOR, "");
        compact.as_str()
    } else {
        text
    };
    let reader = TextReader::new(text);
    reader.require_len("YYYYMMDD", &[layout::DATE_LEN])?;
    read_date(&reader).map(Value::Date)
}

pub fn parse_time(raw: &str, _ctx: &RuleContext) -> Result<Value, RuleError> {
    let text = trim_padding(raw);
    if text.is_empty() {
        return Ok(Value::Null);
    }
    read_time(text).map(Value::Time)
}

pub fn parse_datetime(raw: &str, _ctx: &RuleContext) -> Result<Value, RuleError> {
    let text = trim_padding(raw);
    if text.is_empty() {
        return Ok(Value::Null);
    }
    let (text, offset) = split_offset(text)?;
    let date_len = text.len().min(layout::DATE_LEN);
    let (Some(date_part), Some(time_part)) = (text.get(..date_len), text.get(date_len..)) else {
        return Err(RuleError::InvalidDigits { field: "date" });
    };

    let reader = TextReader::new(date_part);
    reader.require_len("YYYY[MM[DD]]", &[4, 6, layout::DATE_LEN])?;
    let date = read_date(&reader)?;
    let time = if time_part.is_empty() {
        Time::MIDNIGHT
    } else {
        read_time(time_part)?
    };

    let datetime = PrimitiveDateTime::new(date, time);
    Ok(match offset {
        Some(offset) => Value::OffsetDateTime(datetime.assume_offset(offset)),
        None => Value::DateTime(datetime),
    })
}

/// Reads `YYYY[MM[DD]]`; a missing month or day is the first one.
fn read_date(reader: &TextReader<'_>) -> Result<Date, RuleError> {
    let year = reader.read_digits(layout::YEAR_RANGE, "year")?;
    let month = reader
        .read_optional_digits(layout::MONTH_RANGE, "month")?
        .unwrap_or(1);
    let day = reader
        .read_optional_digits(layout::DAY_RANGE, "day")?
        .unwrap_or(1);
    let month = Month::try_from(month as u8)?;
    Ok(Date::from_calendar_date(year as i32, month, day as u8)?)
}

fn read_time(text: &str) -> Result<Time, RuleError> {
    let compact;
    let text = if text.contains(layout::LEGACY_TIME_SEPARATOR) {
        compact = text.replace(layout::LEGACY_TIME_SEPARATOR, "");
        compact.as_str()
    } else {
        text
    };
    let (clock, fraction) = match text.split_once(layout::FRACTION_SEPARATOR) {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (text, None),
    };

    let reader = TextReader::new(clock);
    reader.require_len("HH[MM[SS]]", &[2, 4, 6])?;
    if fraction.is_some() {
        reader.require_len("HHMMSS before a fraction", &[6])?;
    }
    let hour = reader.read_digits(layout::HOUR_RANGE, "hour")?;
    let minute = reader
        .read_optional_digits(layout::MINUTE_RANGE, "minute")?
        .unwrap_or(0);
    let second = reader
        .read_optional_digits(layout::SECOND_RANGE, "second")?
        .unwrap_or(0);
    let micro = match fraction {
        Some(fraction) => read_fraction(fraction)?,
        None => 0,
    };

    Ok(Time::from_hms_micro(
        hour as u8,
        minute as u8,
        second as u8,
        micro,
    )?)
}

/// Fractional seconds, right-padded to microseconds.
fn read_fraction(fraction: &str) -> Result<u32, RuleError> {
    if fraction.len() > layout::MAX_FRACTION_DIGITS {
        return Err(RuleError::InvalidLength {
            expected: "at most 6 fractional digits",
            actual: fraction.len(),
        });
    }
    let value = parse_digits(fraction, "fraction")?;
    let scale = 10u32.pow((layout::MAX_FRACTION_DIGITS - fraction.len()) as u32);
    Ok(value * scale)
}

fn split_offset(text: &str) -> Result<(&str, Option<UtcOffset>), RuleError> {
    let Some(index) = text.rfind(['+', '-']) else {
        return Ok((text, None));
    };
    let (rest, suffix) = text.split_at(index);
    let reader = TextReader::new(suffix);
    reader.require_len("&ZZXX offset", &[layout::OFFSET_LEN])?;
    let hours = reader.read_digits(layout::OFFSET_HOUR_RANGE, "offset hour")? as i8;
    let minutes = reader.read_digits(layout::OFFSET_MINUTE_RANGE, "offset minute")? as i8;
    let sign = if suffix.starts_with('-') { -1 } else { 1 };
    let offset = UtcOffset::from_hms(sign * hours, sign * minutes, 0)?;
    Ok((rest, Some(offset)))
}

#[cfg(test)]
mod tests {
    use super::{parse_date, parse_datetime, parse_time};
    use crate::rules::RuleContext;
    use crate::rules::error::RuleError;
    use crate::value::Value;
    use time::macros::{date, datetime, time};

    fn ctx() -> RuleContext {
        RuleContext::default()
    }

    #[test]
    fn date_from_eight_digits() {
        assert_eq!(
            parse_date("20180501", &ctx()),
            Ok(Value::Date(date!(2018 - 05 - 01)))
        );
        assert_eq!(
            parse_date("2018.05.01", &ctx()),
            Ok(Value::Date(date!(2018 - 05 - 01)))
        );
    }

    #[test]
    fn date_rejects_bad_input() {
        assert!(matches!(
            parse_date("2018051", &ctx()),
            Err(RuleError::InvalidLength { actual: 7, .. })
        ));
        assert!(matches!(
            parse_date("20181301", &ctx()),
            Err(RuleError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_date("20180231", &ctx()),
            Err(RuleError::OutOfRange(_))
        ));
        assert!(parse_date("2018AB01", &ctx()).is_err());
        assert_eq!(parse_date("", &ctx()), Ok(Value::Null));
    }

    #[test]
    fn time_with_fraction() {
        assert_eq!(
            parse_time("122156.958000", &ctx()),
            Ok(Value::Time(time!(12:21:56.958)))
        );
        assert_eq!(
            parse_time("122156.5", &ctx()),
            Ok(Value::Time(time!(12:21:56.5)))
        );
    }

    #[test]
    fn time_without_fraction_or_seconds() {
        assert_eq!(
            parse_time("122156", &ctx()),
            Ok(Value::Time(time!(12:21:56)))
        );
        assert_eq!(parse_time("1221", &ctx()), Ok(Value::Time(time!(12:21))));
        assert_eq!(parse_time("12", &ctx()), Ok(Value::Time(time!(12:00))));
        assert_eq!(
            parse_time("12:21:56", &ctx()),
            Ok(Value::Time(time!(12:21:56)))
        );
    }

    #[test]
    fn time_rejects_bad_input() {
        assert!(parse_time("1221.5", &ctx()).is_err());
        assert!(parse_time("122156.1234567", &ctx()).is_err());
        assert!(matches!(
            parse_time("250000", &ctx()),
            Err(RuleError::OutOfRange(_))
        ));
        assert!(parse_time("12a156", &ctx()).is_err());
    }

    #[test]
    fn datetime_full_and_partial() {
        assert_eq!(
            parse_datetime("20180501122156.958000", &ctx()),
            Ok(Value::DateTime(datetime!(2018-05-01 12:21:56.958)))
        );
        assert_eq!(
            parse_datetime("20180501", &ctx()),
            Ok(Value::DateTime(datetime!(2018-05-01 0:00)))
        );
        assert_eq!(
            parse_datetime("201805", &ctx()),
            Ok(Value::DateTime(datetime!(2018-05-01 0:00)))
        );
        assert_eq!(
            parse_datetime("2018050112", &ctx()),
            Ok(Value::DateTime(datetime!(2018-05-01 12:00)))
        );
    }

    #[test]
    fn datetime_with_offset() {
        assert_eq!(
            parse_datetime("20180501122156-0500", &ctx()),
            Ok(Value::OffsetDateTime(datetime!(2018-05-01 12:21:56 -5)))
        );
        assert_eq!(
            parse_datetime("20180501+0130", &ctx()),
            Ok(Value::OffsetDateTime(datetime!(2018-05-01 0:00 +1:30)))
        );
        assert!(parse_datetime("20180501122156+05", &ctx()).is_err());
    }

    #[test]
    fn datetime_rejects_non_ascii_across_date_boundary() {
        assert_eq!(
            parse_datetime("2018050\u{e9}1", &ctx()),
            Err(RuleError::InvalidDigits { field: "date" })
        );
        assert!(parse_datetime("20180501\u{e9}", &ctx()).is_err());
        assert!(parse_date("2018\u{e9}01", &ctx()).is_err());
        assert!(parse_time("12\u{e9}", &ctx()).is_err());
    }

    #[test]
    fn datetime_rejects_odd_date_length() {
        assert!(matches!(
            parse_datetime("20185", &ctx()),
            Err(RuleError::InvalidLength { actual: 5, .. })
        ));
    }
}
