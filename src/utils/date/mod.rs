// Date utility functions
// Key and display formatting for journal entry dates

use chrono::NaiveDate;

const KEY_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Path-safe storage key for a date, e.g. `2024-01-05`.
pub fn entry_key(date: NaiveDate) -> String {
    date.format(KEY_FORMAT).to_string()
}

/// Parses a storage key back into a date.
pub fn parse_entry_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, KEY_FORMAT).ok()
}

/// Human-readable date, e.g. `Jan 05, 2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a display-formatted date, tolerating surrounding whitespace.
pub fn parse_display_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DISPLAY_FORMAT).ok()
}
