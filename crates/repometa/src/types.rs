//! Domain records produced by the metadata adapter.

use chrono::NaiveDate;
use serde::Serialize;

/// A point-in-time event with a URL pointing at the evidence.
///
/// Used uniformly for "first release", "latest release", and "last commit".
/// Purely a value; no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Release page or commit page backing the event.
    pub url: String,
}

/// A detected license: human-readable name and a URL to its page.
///
/// Absence of a license is a valid terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub name: String,
    pub url: String,
}
