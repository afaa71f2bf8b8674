use crate::error::{WdayError, WdayResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recurrence kind of a dataset record. Any other string in the dataset is
/// rejected at deserialization, so the matching predicate only ever sees
/// these two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Yearly,
    Monthly,
}

/// One dataset entry. Records are immutable once deserialized.
///
/// The `date` field keeps the dataset's `YYYY-MM-DD` string form; the year is
/// a placeholder for `monthly` entries and only significant for `yearly`
/// entries under exact-match precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub date: String,
    pub frequency: Frequency,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Parse the record's date field as a calendar date.
    ///
    /// The dataset is trusted build-time content, so a parse failure aborts
    /// with the offending record id rather than skipping the record.
    pub fn calendar_date(&self) -> WdayResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|err| {
            WdayError::DataIntegrity(format!(
                "event {} has unparseable date '{}': {err}",
                self.id, self.date
            ))
        })
    }
}
