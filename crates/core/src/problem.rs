// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structured inputs and outputs exchanged with the external solver.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use shift_room_domain::{
    DateRange, Day, DomainError, PerShift, Preference, Room, RoomStatus, Schedule, Shift,
    ShiftBounds,
};
use std::collections::BTreeMap;

/// Staffing requirement for one day, as seen by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRequirement {
    pub is_holiday: bool,
    /// Effective bounds; all zero on holidays.
    pub shifts: PerShift<ShiftBounds>,
}

/// Everything the solver needs to produce a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingProblem {
    /// Everyone to schedule, participating admin included once.
    pub participants: Vec<String>,
    /// Every day of the room, in order.
    pub dates: Vec<Day>,
    /// A requirement for every day in `dates`.
    pub requirements: BTreeMap<Day, DayRequirement>,
    /// A full preference table per participant; unset entries are `available`.
    pub preferences: BTreeMap<String, BTreeMap<Day, PerShift<Preference>>>,
}

/// A validated solver response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    pub schedule: Schedule,
    pub notes: String,
}

/// Context for asking the solver who could take over a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapContext {
    pub schedule: Schedule,
    pub preferences: BTreeMap<String, BTreeMap<Day, PerShift<Preference>>>,
    pub participant: String,
    pub date: Day,
    pub shift: Shift,
}

fn preference_table(
    room: &Room,
    participants: &[String],
    range: &DateRange,
) -> BTreeMap<String, BTreeMap<Day, PerShift<Preference>>> {
    participants
        .iter()
        .map(|name| {
            let days = range
                .days()
                .map(|day| {
                    (
                        day,
                        PerShift::from_fn(|shift| room.preference_of(name, day, shift)),
                    )
                })
                .collect();
            (name.clone(), days)
        })
        .collect()
}

/// Builds the problem description for a room.
///
/// # Errors
///
/// Returns an error if the room's date range is inverted.
pub fn build_problem(room: &Room) -> Result<SchedulingProblem, DomainError> {
    let range: DateRange = room.date_range()?;
    let participants: Vec<String> = room.participant_names();

    let requirements: BTreeMap<Day, DayRequirement> = range
        .days()
        .map(|day| {
            let constraint = room.constraint_for(day);
            (
                day,
                DayRequirement {
                    is_holiday: constraint.is_holiday,
                    shifts: PerShift::from_fn(|shift| constraint.effective(shift)),
                },
            )
        })
        .collect();

    let preferences = preference_table(room, &participants, &range);

    Ok(SchedulingProblem {
        participants,
        dates: range.days().collect(),
        requirements,
        preferences,
    })
}

/// Builds the context for a swap suggestion.
///
/// # Errors
///
/// Returns an error if:
/// - The room has no schedule yet
/// - `participant` is not scheduled in this room
/// - `date` is outside the room's range
pub fn build_swap_context(
    room: &Room,
    participant: &str,
    date: Day,
    shift: Shift,
) -> Result<SwapContext, CoreError> {
    let schedule: &Schedule = match (&room.status, &room.schedule) {
        (RoomStatus::Complete, Some(schedule)) => schedule,
        _ => {
            return Err(CoreError::NoSchedule {
                status: room.status,
            });
        }
    };

    let participants: Vec<String> = room.participant_names();
    if !participants.iter().any(|name| name == participant) {
        return Err(CoreError::ParticipantNotFound {
            name: participant.to_string(),
        });
    }

    let range: DateRange = room.date_range()?;
    if !range.contains(date) {
        return Err(CoreError::DomainViolation(DomainError::DayNotInRoom { date }));
    }

    Ok(SwapContext {
        schedule: schedule.clone(),
        preferences: preference_table(room, &participants, &range),
        participant: participant.to_string(),
        date,
        shift,
    })
}
