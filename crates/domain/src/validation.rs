// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::day::DateRange;
use crate::error::DomainError;
use crate::schedule::Schedule;

/// Validates a display name (room, admin or participant).
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is blank.
pub fn validate_name(kind: &str, name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(format!("{kind} cannot be empty")));
    }
    Ok(())
}

/// Validates that a schedule only refers to known participants and days.
///
/// # Arguments
///
/// * `schedule` - The schedule to check
/// * `participants` - Every name that may appear as a row
/// * `range` - The room's date range
///
/// # Errors
///
/// Returns an error if:
/// - A row belongs to someone who is not a participant
/// - A row contains a day outside the date range
pub fn validate_schedule(
    schedule: &Schedule,
    participants: &[String],
    range: &DateRange,
) -> Result<(), DomainError> {
    for (name, row) in schedule.rows() {
        if !participants.contains(name) {
            return Err(DomainError::UnknownParticipant { name: name.clone() });
        }
        if let Some(day) = row.keys().find(|day| !range.contains(**day)) {
            return Err(DomainError::DateOutOfRange {
                name: name.clone(),
                date: *day,
            });
        }
    }
    Ok(())
}
