//! Due-date value object.

use super::TaskDomainError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, Utc};
use std::fmt;

/// Moment by which a task should be finished.
///
/// Accepted input is an RFC 3339 date-time or a bare `YYYY-MM-DD` date, which
/// is read as midnight UTC. The original offset is kept so stored values
/// render the way they were entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DueDate(DateTime<FixedOffset>);

impl DueDate {
    /// Parses a due date submitted at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDueDate`] for blank input,
    /// [`TaskDomainError::InvalidDueDate`] when the text is not a recognised
    /// date format, and [`TaskDomainError::DueDateInPast`] when the moment
    /// precedes `now`.
    pub fn parse(raw: &str, now: DateTime<Utc>) -> Result<Self, TaskDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyDueDate);
        }
        let moment = parse_moment(trimmed).ok_or_else(|| TaskDomainError::InvalidDueDate {
            value: trimmed.to_owned(),
        })?;
        if moment.with_timezone(&Utc) < now {
            return Err(TaskDomainError::DueDateInPast(trimmed.to_owned()));
        }
        Ok(Self(moment))
    }

    /// Wraps an already-validated moment, e.g. one read back from storage.
    #[must_use]
    pub const fn from_date_time(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }

    /// Returns the due moment.
    #[must_use]
    pub const fn as_date_time(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

fn parse_moment(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok().or_else(|| {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
    })
}
