// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::day::Day;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse a calendar day from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The start of a date range falls after its end.
    InvalidDateRange {
        /// The first day of the range.
        start: Day,
        /// The last day of the range.
        end: Day,
    },
    /// A month selector could not be understood.
    InvalidMonth(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A room or participant name is empty or invalid.
    InvalidName(String),
    /// A shift symbol is not one of the three known shifts.
    InvalidShift(String),
    /// A preference value is not recognised.
    InvalidPreference(String),
    /// A room status value is not recognised.
    InvalidStatus(String),
    /// A schedule names someone who is not a participant of the room.
    UnknownParticipant {
        /// The name found in the schedule.
        name: String,
    },
    /// A day outside the room's date range was addressed.
    DayNotInRoom {
        /// The offending day.
        date: Day,
    },
    /// A schedule contains a day outside the room's date range.
    DateOutOfRange {
        /// The participant whose row contains the day.
        name: String,
        /// The offending day.
        date: Day,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: start {start} is after end {end}")
            }
            Self::InvalidMonth(msg) => write!(f, "Invalid month: {msg}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidShift(value) => write!(f, "Invalid shift: '{value}'"),
            Self::InvalidPreference(value) => write!(f, "Invalid preference: '{value}'"),
            Self::InvalidStatus(value) => write!(f, "Invalid room status: '{value}'"),
            Self::UnknownParticipant { name } => {
                write!(f, "'{name}' is not a participant of this room")
            }
            Self::DayNotInRoom { date } => {
                write!(f, "{date} is outside the room's date range")
            }
            Self::DateOutOfRange { name, date } => {
                write!(
                    f,
                    "Schedule row for '{name}' contains {date}, which is outside the room's date range"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
