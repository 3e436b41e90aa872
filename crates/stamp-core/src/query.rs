// crates/stamp-core/src/query.rs - Note Queries
//
// Every query is a pure filter over the rows returned by `Page::read_all`.
// There is no index: pages are small and a linear scan is all that is needed.
//
// TIMESTAMP MATCHING:
// Timestamps are fixed-width ("YYYY-MM-DD HH:MM:SS"), so string order equals
// chronological order and a string prefix selects a calendar period:
// - "2025"                -> the whole year
// - "2025-07-30"          -> one day
// - "2025-07-30 10"       -> one hour of that day
// - "10:30"               -> 10:30 on any day (time-of-day query)
// - "2025-07-01 to 2025-07-31" -> inclusive range, the end bound covers its whole period

use regex::Regex;
use std::sync::LazyLock;

use crate::page::Note;

/// Rows shown by `foot` and `show head`/`show foot` when no count is given
pub const DEFAULT_COUNT: usize = 10;

static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}(:\d{2})?$").expect("valid time-of-day pattern"));

/// Which rows of a page to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First n rows
    Head(usize),
    /// Last n rows
    Tail(usize),
    /// Every row
    All,
    /// One row, 1-based
    Single(usize),
    /// Inclusive 1-based range
    Range(usize, usize),
}

/// Timestamp filter used by `timenote`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeQuery {
    /// Timestamp starts with the given string
    Prefix(String),
    /// Time portion of the timestamp starts with the given string
    TimeOfDay(String),
    /// Inclusive lexicographic range over the full timestamp
    Range { from: String, to: String },
    /// Inclusive range over the time portion only, e.g. `08:00 to 09:00`
    TimeOfDayRange { from: String, to: String },
}

impl TimeQuery {
    /// Build a single-value query, detecting time-of-day input like `08:30`
    pub fn single<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        if is_time_of_day(&query) {
            Self::TimeOfDay(query)
        } else {
            Self::Prefix(query)
        }
    }

    /// Build a range query. When both bounds look like `08:30` the range
    /// applies to the time of day on every date.
    pub fn range<S: Into<String>>(from: S, to: S) -> Self {
        let (from, to) = (from.into(), to.into());
        if is_time_of_day(&from) && is_time_of_day(&to) {
            Self::TimeOfDayRange { from, to }
        } else {
            Self::Range { from, to }
        }
    }

    /// Whether `timestamp` satisfies this query
    pub fn matches(&self, timestamp: &str) -> bool {
        match self {
            Self::Prefix(prefix) => timestamp.starts_with(prefix.as_str()),
            Self::TimeOfDay(prefix) => {
                time_part(timestamp).is_some_and(|time| time.starts_with(prefix.as_str()))
            }
            Self::Range { from, to } => within(timestamp, from, to),
            Self::TimeOfDayRange { from, to } => {
                time_part(timestamp).is_some_and(|time| within(time, from, to))
            }
        }
    }
}

/// `HH:MM` or `HH:MM:SS`
pub fn is_time_of_day(query: &str) -> bool {
    TIME_OF_DAY.is_match(query)
}

fn time_part(timestamp: &str) -> Option<&str> {
    timestamp.split_once(' ').map(|(_, time)| time)
}

// Upper bound also matches anything it prefixes, so `to 2025-07-31` keeps
// the whole final day.
fn within(value: &str, from: &str, to: &str) -> bool {
    value >= from && (value <= to || value.starts_with(to))
}

/// First `min(n, len)` rows
pub fn head(notes: &[Note], n: usize) -> &[Note] {
    &notes[..n.min(notes.len())]
}

/// Last `min(n, len)` rows
pub fn tail(notes: &[Note], n: usize) -> &[Note] {
    &notes[notes.len() - n.min(notes.len())..]
}

/// Rows `first..=last` using 1-based positions, clamped to the page
///
/// Empty when `first` is past the end or the range is inverted.
pub fn range(notes: &[Note], first: usize, last: usize) -> &[Note] {
    let start = first.max(1) - 1;
    let end = last.min(notes.len());
    if start >= end {
        return &[];
    }
    &notes[start..end]
}

/// Row at 1-based `index`
pub fn nth(notes: &[Note], index: usize) -> Option<&Note> {
    index.checked_sub(1).and_then(|i| notes.get(i))
}

/// Apply a `Selection`
pub fn select(notes: &[Note], selection: Selection) -> &[Note] {
    match selection {
        Selection::Head(n) => head(notes, n),
        Selection::Tail(n) => tail(notes, n),
        Selection::All => notes,
        Selection::Single(i) => range(notes, i, i),
        Selection::Range(first, last) => range(notes, first, last),
    }
}

/// Rows whose text contains `keyword` (case-sensitive)
pub fn search_text<'a>(notes: &'a [Note], keyword: &str) -> Vec<&'a Note> {
    notes.iter().filter(|n| n.text.contains(keyword)).collect()
}

/// Rows whose timestamp satisfies `query`
pub fn search_time<'a>(notes: &'a [Note], query: &TimeQuery) -> Vec<&'a Note> {
    notes.iter().filter(|n| query.matches(&n.timestamp)).collect()
}
