use chrono::{DateTime, SecondsFormat, Utc};

use crate::constants::{TAG_DATE_EPOCH, TAG_DATE_STRING};
use crate::error::CborError;
use crate::input::Value;
use crate::serializer::{CborEncoder, CborSerializer};
use crate::types::CborValue;
use crate::value;

const NAME: &str = "date";
const PRIORITY: i32 = -10;

fn date_of(value: &Value) -> Option<&DateTime<Utc>> {
    value.downcast_ref::<DateTime<Utc>>()
}

/// Writes a [`Value::Custom`] holding a `DateTime<Utc>` as tag 0 around an
/// RFC 3339 string with millisecond precision, e.g.
/// `2000-02-02T11:04:05.006Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateStringEncoder;

impl DateStringEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl CborEncoder for DateStringEncoder {
    fn name(&self) -> &str {
        NAME
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn matches(&self, value: &Value) -> bool {
        date_of(value).is_some()
    }

    fn encode(&self, value: &Value, _: &CborSerializer) -> Result<CborValue, CborError> {
        let date = date_of(value).ok_or(CborError::UnsupportedValueShape(value.kind()))?;
        let text = date.to_rfc3339_opts(SecondsFormat::Millis, true);
        Ok(value::tagged(TAG_DATE_STRING, &value::string(&text)))
    }
}

/// Writes a [`Value::Custom`] holding a `DateTime<Utc>` as tag 1 around
/// whole seconds since the epoch. Sub-second parts truncate toward zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNumberEncoder;

impl DateNumberEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl CborEncoder for DateNumberEncoder {
    fn name(&self) -> &str {
        NAME
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn matches(&self, value: &Value) -> bool {
        date_of(value).is_some()
    }

    fn encode(&self, value: &Value, _: &CborSerializer) -> Result<CborValue, CborError> {
        let date = date_of(value).ok_or(CborError::UnsupportedValueShape(value.kind()))?;
        let seconds = value::number(date.timestamp_millis() as f64 / 1000.0)?;
        Ok(value::tagged(TAG_DATE_EPOCH, &seconds))
    }
}
