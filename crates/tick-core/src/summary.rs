//! Today aggregation: total logged hours against a nominal workday.

use serde_json::Value;
use thiserror::Error;

use crate::models::LoggedEntry;

/// Length of the workday the remaining hours are measured against.
pub const NOMINAL_WORKDAY_HOURS: f64 = 8.0;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A listed entry had no numeric `hours`.
    #[error("entry has no numeric hours: {entry}")]
    InvalidEntry {
        entry: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Entries logged today with their total.
#[derive(Debug, Clone, PartialEq)]
pub struct TodaySummary {
    pub entries: Vec<LoggedEntry>,
    pub total_hours: f64,
}

impl TodaySummary {
    /// Builds the summary from raw entry objects, in the order given.
    ///
    /// Fails on the first entry whose `hours` is missing or not a number.
    pub fn from_entries(raw: &[Value]) -> Result<Self, CoreError> {
        let entries = raw
            .iter()
            .map(|value| {
                serde_json::from_value::<LoggedEntry>(value.clone()).map_err(|source| {
                    CoreError::InvalidEntry {
                        entry: value.to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total_hours: f64 = entries.iter().map(|entry| entry.hours).sum();
        tracing::debug!(count = entries.len(), total_hours, "summarized entries");
        Ok(Self {
            entries,
            total_hours,
        })
    }

    /// Hours left in the nominal workday. Negative once it is exceeded.
    pub fn hours_remaining(&self) -> f64 {
        NOMINAL_WORKDAY_HOURS - self.total_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn sums_hours_and_reports_remaining() {
        let raw = vec![
            json!({"hours": 2, "notes": "review"}),
            json!({"hours": 3.5, "notes": "feature/login"}),
        ];
        let summary = TodaySummary::from_entries(&raw).unwrap();
        assert_eq!(summary.entries.len(), 2);
        assert!((summary.total_hours - 5.5).abs() < f64::EPSILON);
        assert!((summary.hours_remaining() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_day_leaves_full_workday() {
        let summary = TodaySummary::from_entries(&[]).unwrap();
        assert!((summary.hours_remaining() - NOMINAL_WORKDAY_HOURS).abs() < f64::EPSILON);
    }

    #[test]
    fn overtime_goes_negative() {
        let summary = TodaySummary::from_entries(&[json!({"hours": 9.5})]).unwrap();
        assert!((summary.hours_remaining() + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_hours_fails_loudly() {
        let err = TodaySummary::from_entries(&[json!({"notes": "no hours here"})]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEntry { .. }));
        assert!(err.to_string().contains("no hours here"));
    }

    #[test]
    fn non_numeric_hours_fails_loudly() {
        let err = TodaySummary::from_entries(&[json!({"hours": "2"})]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEntry { .. }));
    }
}
