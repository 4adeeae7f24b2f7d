// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar days and inclusive day ranges.
//!
//! Rooms only care about the date component. A `Day` is serialized as an
//! ISO `YYYY-MM-DD` string so that it can key JSON objects directly.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

const ISO_DAY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A timezone-naive calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(Date);

impl Day {
    /// Wraps an existing `time::Date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Builds a day from its calendar components.
    ///
    /// # Errors
    ///
    /// Returns an error if the components do not name a real day.
    pub fn from_calendar_date(year: i32, month: Month, day: u8) -> Result<Self, DomainError> {
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|e| DomainError::DateParseError {
                date_string: format!("{year}-{}-{day}", u8::from(month)),
                error: e.to_string(),
            })
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }

    /// Returns the following calendar day, if representable.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    /// Parses a day, ignoring any time-of-day suffix (`2024-03-01T00:00:00Z`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the date part is malformed.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let date_part: &str = value.split('T').next().unwrap_or(value).trim();
        Date::parse(date_part, ISO_DAY)
            .map(Self)
            .map_err(|e| DomainError::DateParseError {
                date_string: value.to_string(),
                error: e.to_string(),
            })
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for Day {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Date> for Day {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// An inclusive range of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Day,
    end: Day,
}

impl DateRange {
    /// Creates a range from its inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `start` is after `end`.
    pub fn new(start: Day, end: Day) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the range covering a whole calendar month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not representable.
    pub fn for_month(year: i32, month: Month) -> Result<Self, DomainError> {
        let start: Day = Day::from_calendar_date(year, month, 1)?;
        let (next_year, next_month) = if month == Month::December {
            (year + 1, Month::January)
        } else {
            (year, month.next())
        };
        let end: Date = Date::from_calendar_date(next_year, next_month, 1)
            .ok()
            .and_then(Date::previous_day)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("deriving the last day of {year}-{}", u8::from(month)),
            })?;
        Self::new(start, Day(end))
    }

    /// Parses a `YYYY-MM` month selector into the range of that month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` for malformed selectors.
    pub fn parse_month(selector: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidMonth(format!("expected YYYY-MM, got '{selector}'"));
        let (year, month) = selector.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month: Month = Month::try_from(month).map_err(|_| invalid())?;
        Self::for_month(year, month)
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> Day {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> Day {
        self.end
    }

    /// Returns true if `day` falls within the range.
    #[must_use]
    pub fn contains(&self, day: Day) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days in the range, counting both ends.
    #[must_use]
    pub fn len(&self) -> usize {
        let span: i64 = (self.end.0 - self.start.0).whole_days();
        usize::try_from(span).map_or(0, |span| span + 1)
    }

    /// A range always holds at least one day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates every day in order, from `start` through `end`.
    #[must_use]
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Day>,
    end: Day,
}

impl Iterator for Days {
    type Item = Day;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Day = self.next?;
        self.next = if current < self.end {
            current.next()
        } else {
            None
        };
        Some(current)
    }
}
