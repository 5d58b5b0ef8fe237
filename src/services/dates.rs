//! Date helpers for the paired start/end inputs.

use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` input value. Blank or invalid input is `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// End-date input state after its paired start date changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EndConstraint {
    pub min: NaiveDate,
    pub value: Option<NaiveDate>,
}

/// The end minimum follows the start (or today when the start is blank). An
/// end at or before that minimum moves to the day after it.
pub fn constrain_end(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> EndConstraint {
    let min = start.unwrap_or(today);
    let value = match end {
        Some(end) if end <= min => min.succ_opt().or(Some(end)),
        other => other,
    };
    EndConstraint { min, value }
}

/// A start/end input pair with its minimums.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DatePair {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub start_min: NaiveDate,
    pub end_min: NaiveDate,
}

impl DatePair {
    /// Both inputs blank, both minimums at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start: None,
            end: None,
            start_min: today,
            end_min: today,
        }
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>, today: NaiveDate) {
        self.start = start;
        let EndConstraint { min, value } = constrain_end(start, self.end, today);
        self.end_min = min;
        self.end = value;
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.end = end;
    }

    /// Copies the values of another pair, keeping the end after the start.
    pub fn copy_from(&mut self, other: &DatePair, today: NaiveDate) {
        self.end = other.end;
        self.set_start(other.start, today);
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}
