use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};

use crate::modules::loyalty_history::core::mutation::ValidationError;

/// A row of `histPoints`: points a user earned, e.g. by scanning a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointEvent {
    pub id: String,
    pub user_id: String,
    pub points: i64,
    pub date: String,
}

/// A row of `histtransactions`: points a user redeemed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEvent {
    pub id: i64,
    pub user_id: String,
    pub description: String,
    pub points: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPointEvent {
    pub id: String,
    pub user_id: String,
    pub points: i64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransactionEvent {
    pub user_id: String,
    pub description: String,
    pub points: i64,
    pub date: DateTime<Utc>,
}

/// Whole days from `from` through `to`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Build a range from the raw `YYYY-MM-DD` bounds of a request.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, ValidationError> {
        let (Some(from), Some(to)) = (non_blank(from), non_blank(to)) else {
            return Err(ValidationError::MissingDateRange);
        };
        Ok(Self {
            from: parse_day("from", from)?,
            to: parse_day("to", to)?,
        })
    }

    pub fn lower_bound(&self) -> NaiveDateTime {
        self.from.and_time(chrono::NaiveTime::MIN)
    }

    /// First instant after the range.
    pub fn upper_bound(&self) -> NaiveDateTime {
        self.to
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .and_time(chrono::NaiveTime::MIN)
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.lower_bound() && at < self.upper_bound()
    }
}

/// A text field that must be present and not blank.
pub fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingRequiredField { field })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_day(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
