//! Typed values produced by the engine.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::element::RawValue;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:6]");
const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]");
const OFFSET_DATETIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory]:[offset_minute]"
);

/// A single converted value.
///
/// `Null` stands for a present-but-empty numeric or temporal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Date(Date),
    Time(Time),
    DateTime(PrimitiveDateTime),
    OffsetDateTime(OffsetDateTime),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Date(date) => {
                let text = date.format(DATE_FORMAT).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            Value::Time(time) => {
                let text = time.format(TIME_FORMAT).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            Value::DateTime(datetime) => {
                let text = datetime.format(DATETIME_FORMAT).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            Value::OffsetDateTime(datetime) => {
                let text = datetime
                    .format(OFFSET_DATETIME_FORMAT)
                    .map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            Value::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Result of parsing one element.
///
/// `Raw` is returned untouched when no conversion applies, so it compares
/// equal to the element's own value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    Single(Value),
    Multi(Vec<Value>),
    Raw(RawValue),
}

impl ParsedValue {
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            ParsedValue::Single(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[Value]> {
        match self {
            ParsedValue::Multi(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ParsedValue::Raw(_))
    }

    /// Collapse converted members into a single value when there is exactly one.
    pub(crate) fn from_values(mut values: Vec<Value>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return ParsedValue::Single(value);
            }
        }
        ParsedValue::Multi(values)
    }
}

impl From<Value> for ParsedValue {
    fn from(value: Value) -> Self {
        ParsedValue::Single(value)
    }
}

impl PartialEq<RawValue> for ParsedValue {
    fn eq(&self, other: &RawValue) -> bool {
        matches!(self, ParsedValue::Raw(raw) if raw == other)
    }
}
