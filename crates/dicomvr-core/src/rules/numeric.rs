//! Age String (AS), Decimal String (DS) and Integer String (IS).

use super::error::RuleError;
use super::layout;
use super::reader::parse_digits;
use super::{RuleContext, trim_padding};
use crate::value::Value;

/// Age String such as `027Y`, converted to a fractional number of years.
pub fn parse_age_string(raw: &str, _ctx: &RuleContext) -> Result<Value, RuleError> {
    let text = trim_padding(raw);
    let Some(unit) = text.chars().last() else {
        return Ok(Value::Null);
    };
    let magnitude = parse_digits(&text[..text.len() - unit.len_utf8()], "age")? as f64;
    let years = match unit {
        'D' => magnitude / layout::DAYS_PER_YEAR,
        'W' => magnitude / layout::WEEKS_PER_YEAR,
        'M' => magnitude / layout::MONTHS_PER_YEAR,
        'Y' => magnitude,
        other => return Err(RuleError::InvalidAgeUnit { unit: other }),
    };
    Ok(Value::Float(years))
}

/// Decimal String; an empty value is `Null`.
pub fn parse_decimal_string(raw: &str, _ctx: &RuleContext) -> Result<Value, RuleError> {
    let text = trim_padding(raw);
    if text.is_empty() {
        return Ok(Value::Null);
    }
    // f64::from_str also takes "inf" and "NaN", which DS does not allow.
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Value::Float(value)),
        _ => Err(RuleError::InvalidNumber {
            text: text.to_string(),
        }),
    }
}

/// Integer String; an empty value is `Null`.
pub fn parse_integer_string(raw: &str, _ctx: &RuleContext) -> Result<Value, RuleError> {
    let text = trim_padding(raw);
    if text.is_empty() {
        return Ok(Value::Null);
    }
    text.parse::<i64>()
        .map(Value::Int)
        .map_err(|_| RuleError::InvalidNumber {
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_age_string, parse_decimal_string, parse_integer_string};
    use crate::rules::RuleContext;
    use crate::rules::error::RuleError;
    use crate::value::Value;

    fn ctx() -> RuleContext {
        RuleContext::default()
    }

    #[test]
    fn age_in_years() {
        assert_eq!(parse_age_string("027Y", &ctx()), Ok(Value::Float(27.0)));
    }

    #[test]
    fn age_in_other_units() {
        assert_eq!(parse_age_string("006M", &ctx()), Ok(Value::Float(0.5)));
        assert_eq!(
            parse_age_string("365D", &ctx()),
            Ok(Value::Float(365.0 / 365.25))
        );
        assert_eq!(
            parse_age_string("052W", &ctx()),
            Ok(Value::Float(52.0 / 52.1775))
        );
    }

    #[test]
    fn age_with_unknown_unit() {
        assert_eq!(
            parse_age_string("027X", &ctx()),
            Err(RuleError::InvalidAgeUnit { unit: 'X' })
        );
        assert!(parse_age_string("Y", &ctx()).is_err());
        assert_eq!(parse_age_string("", &ctx()), Ok(Value::Null));
    }

    #[test]
    fn decimal_string_trims() {
        assert_eq!(parse_decimal_string(" 3.5 ", &ctx()), Ok(Value::Float(3.5)));
        assert_eq!(parse_decimal_string("94", &ctx()), Ok(Value::Float(94.0)));
        assert_eq!(
            parse_decimal_string("-1.5e2", &ctx()),
            Ok(Value::Float(-150.0))
        );
        assert_eq!(parse_decimal_string("  ", &ctx()), Ok(Value::Null));
    }

    #[test]
    fn decimal_string_rejects_text() {
        let err = parse_decimal_string("abc", &ctx()).unwrap_err();
        assert!(err.to_string().contains("invalid number"));
        assert!(parse_decimal_string("NaN", &ctx()).is_err());
        assert!(parse_decimal_string("inf", &ctx()).is_err());
    }

    #[test]
    fn integer_string() {
        assert_eq!(parse_integer_string("13", &ctx()), Ok(Value::Int(13)));
        assert_eq!(parse_integer_string(" -4 ", &ctx()), Ok(Value::Int(-4)));
        assert_eq!(parse_integer_string("+7", &ctx()), Ok(Value::Int(7)));
        assert_eq!(parse_integer_string("", &ctx()), Ok(Value::Null));
        assert!(parse_integer_string("13.0", &ctx()).is_err());
    }
}
