//! Date/time target.
//!
//! Text never converts to a date/time implicitly: a format has to be
//! registered first, which installs a [`Transformer`].

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{CoercionMode, Scalar, Transformer, mismatch};
use crate::foundation::{ParseError, Value};

/// A textual date/time layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `2006-01-02T15:04:05Z07:00`
    Rfc3339,
    /// `Mon, 02 Jan 2006 15:04:05 -0700`
    Rfc2822,
    /// A `chrono` strftime layout. Layouts without an offset are read as
    /// UTC; date-only layouts yield midnight UTC.
    Layout(String),
}

impl From<&str> for TimeFormat {
    fn from(layout: &str) -> Self {
        Self::Layout(layout.to_owned())
    }
}

impl From<String> for TimeFormat {
    fn from(layout: String) -> Self {
        Self::Layout(layout)
    }
}

impl TimeFormat {
    /// Parses `text` with this layout.
    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>, ParseError> {
        let parsed = match self {
            Self::Rfc3339 => DateTime::parse_from_rfc3339(text).map(|dt| dt.with_timezone(&Utc)),
            Self::Rfc2822 => DateTime::parse_from_rfc2822(text).map(|dt| dt.with_timezone(&Utc)),
            Self::Layout(layout) => DateTime::parse_from_str(text, layout)
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|_| NaiveDateTime::parse_from_str(text, layout).map(|dt| dt.and_utc()))
                .or_else(|_| {
                    NaiveDate::parse_from_str(text, layout)
                        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
                }),
        };
        parsed.map_err(|e| {
            ParseError::invalid_value()
                .with_code("invalid_time")
                .with_param("layout", self.layout_name())
                .with_cause(e)
        })
    }

    fn layout_name(&self) -> String {
        match self {
            Self::Rfc3339 => "rfc3339".to_owned(),
            Self::Rfc2822 => "rfc2822".to_owned(),
            Self::Layout(layout) => layout.clone(),
        }
    }

    /// Wraps this layout as a transformer.
    pub(crate) fn into_transformer(self) -> Transformer<DateTime<Utc>> {
        Arc::new(move |value: &Value| match value {
            Value::Text(text) => self.parse(text),
            other => Err(mismatch::<DateTime<Utc>>(other)),
        })
    }
}

impl Scalar for DateTime<Utc> {
    const TYPE_NAME: &'static str = "datetime";
    type RuleInput = Self;

    fn adopt(value: &Value) -> Option<Self> {
        match value {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    fn convert(value: &Value, _mode: CoercionMode) -> Result<Self, ParseError> {
        match value {
            Value::Text(_) => Err(ParseError::missing_transformer()),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn into_value(self) -> Value {
        Value::DateTime(self)
    }

    fn inspect<R>(&self, _magnitude: Option<f64>, check: impl FnOnce(&Self) -> R) -> R {
        check(self)
    }
}
