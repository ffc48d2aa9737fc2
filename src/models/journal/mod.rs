// Journal module
// One saved text note per calendar date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::{display_date, entry_key};

/// A saved text note associated with one calendar date.
///
/// Content is plain text with no size limit; an entry exists on disk only
/// after it has been saved through the journal store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub content: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            date,
            content: content.into(),
        }
    }

    /// Path-safe storage key for this entry.
    pub fn key(&self) -> String {
        entry_key(self.date)
    }

    /// Human-readable date shown alongside the note.
    pub fn display_date(&self) -> String {
        display_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn key_is_the_iso_date() {
        let entry = JournalEntry::new(sample_date(), "draft");
        assert_eq!(entry.key(), "2024-01-05");
    }

    #[test]
    fn display_date_uses_the_short_month_form() {
        let entry = JournalEntry::new(sample_date(), "draft");
        assert_eq!(entry.display_date(), "Jan 05, 2024");
    }
}
