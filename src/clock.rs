//! Clock abstraction.
//!
//! Provides a trait for reading the current local date-time, with a system
//! implementation and a fixed one for deterministic tests.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};

use crate::error::BuildError;

/// Source of "now" as a calendar date and time-of-day.
pub trait Clock {
    /// Current date-time in the clock's zone.
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Builds a `FixedOffset` from a signed number of minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, BuildError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(BuildError::InvalidOffset { minutes })
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Clock pinned to a single instant, viewed from a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }

    /// Fixed clock that reports `instant` in UTC.
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, utc_offset())
    }

    /// Parses an RFC 3339 timestamp such as `2022-10-01T10:30:00.000Z`.
    ///
    /// The clock reports the instant in UTC regardless of the offset written
    /// in the timestamp; use [`FixedClock::with_offset`] to change the view.
    pub fn parse_rfc3339(value: &str) -> Result<Self, BuildError> {
        let parsed =
            DateTime::parse_from_rfc3339(value).map_err(|source| BuildError::InvalidInstant {
                value: value.to_string(),
                source,
            })?;
        Ok(Self::utc(parsed.with_timezone(&Utc)))
    }

    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self { offset, ..self }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant.with_timezone(&self.offset).naive_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Local,
    Fixed(FixedOffset),
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    zone: Zone,
}

impl SystemClock {
    /// Wall-clock time in the host's default zone.
    pub fn local() -> Self {
        Self { zone: Zone::Local }
    }

    pub fn utc() -> Self {
        Self::with_offset(utc_offset())
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            zone: Zone::Fixed(offset),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::local()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.zone {
            Zone::Local => Local::now().naive_local(),
            Zone::Fixed(offset) => Utc::now().with_timezone(&offset).naive_local(),
        }
    }
}
