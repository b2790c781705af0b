//! Date handling for entry queries and payloads.

use chrono::{Local, NaiveDate};

/// Format used for every date sent to the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
