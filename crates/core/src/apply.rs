// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::constraints::{set_shift_bound, toggle_holiday};
use crate::error::CoreError;
use crate::preferences::{cycle_preference, submit, with_preference};
use crate::problem::{GeneratedSchedule, SchedulingProblem, build_problem};
use crate::state::{TransitionOutcome, TransitionResult};
use shift_room_domain::{
    DateRange, Day, DomainError, Pharmacist, Preference, Room, RoomStatus, validate_schedule,
};

/// Applies a command to a room, producing a new room snapshot.
///
/// The input room is never modified. Callers persist `new_room` as a whole.
///
/// # Arguments
///
/// * `room` - The current room snapshot (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new room and any extra output
/// * `Err(CoreError)` if the command is invalid in the room's current state
///
/// # Errors
///
/// Returns an error if:
/// - An edit is attempted outside `collecting`
/// - A lifecycle transition is not permitted from the current status
/// - Generation is requested before every participant has submitted
/// - The solver's schedule does not fit the room
pub fn apply(room: &Room, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CyclePreference { name, date, shift } => {
            ensure_editable(room)?;
            ensure_day_in_room(room, date)?;
            let pharmacist: Pharmacist = editable_pharmacist(room, &name)?;

            let next: Preference = cycle_preference(&pharmacist, date, shift);
            let updated: Pharmacist = with_preference(&pharmacist, date, shift, next);

            Ok(TransitionResult {
                new_room: replace_pharmacist(room, updated),
                outcome: TransitionOutcome::Preference(next),
            })
        }
        Command::Submit { name } => {
            ensure_editable(room)?;
            let pharmacist: Pharmacist = match editable_pharmacist(room, &name) {
                Ok(pharmacist) => pharmacist,
                // Submitting twice changes nothing.
                Err(CoreError::AlreadySubmitted { .. }) => {
                    return Ok(unchanged(room));
                }
                Err(err) => return Err(err),
            };

            Ok(TransitionResult {
                new_room: replace_pharmacist(room, submit(&pharmacist)),
                outcome: TransitionOutcome::Updated,
            })
        }
        Command::SetShiftBound {
            date,
            shift,
            bound,
            value,
        } => {
            ensure_editable(room)?;
            ensure_day_in_room(room, date)?;
            let new_room: Room = Room {
                constraints: set_shift_bound(&room.constraints, date, shift, bound, value),
                ..room.clone()
            };
            Ok(TransitionResult {
                new_room,
                outcome: TransitionOutcome::Updated,
            })
        }
        Command::ToggleHoliday { date } => {
            ensure_editable(room)?;
            ensure_day_in_room(room, date)?;
            let new_room: Room = Room {
                constraints: toggle_holiday(&room.constraints, date),
                ..room.clone()
            };
            Ok(TransitionResult {
                new_room,
                outcome: TransitionOutcome::Updated,
            })
        }
        Command::BeginGeneration => begin_generation(room),
        Command::CompleteGeneration(generated) => complete_generation(room, generated),
        Command::FailGeneration => {
            ensure_transition(room, RoomStatus::Generating, RoomStatus::Collecting)?;
            // Schedule and notes stay as they were (null while generating).
            let new_room: Room = Room {
                status: RoomStatus::Collecting,
                ..room.clone()
            };
            Ok(TransitionResult {
                new_room,
                outcome: TransitionOutcome::Updated,
            })
        }
        Command::Restart => {
            ensure_transition(room, RoomStatus::Complete, RoomStatus::Collecting)?;
            let pharmacists: Vec<Pharmacist> = room
                .pharmacists
                .iter()
                .map(|p| Pharmacist {
                    submitted: false,
                    ..p.clone()
                })
                .collect();
            let new_room: Room = Room {
                status: RoomStatus::Collecting,
                schedule: None,
                ai_notes: None,
                pharmacists,
                ..room.clone()
            };
            Ok(TransitionResult {
                new_room,
                outcome: TransitionOutcome::Updated,
            })
        }
    }
}

fn begin_generation(room: &Room) -> Result<TransitionResult, CoreError> {
    ensure_transition(room, RoomStatus::Collecting, RoomStatus::Generating)?;

    if room.participant_names().is_empty() {
        return Err(CoreError::NoParticipants);
    }

    let pending: Vec<String> = room
        .pharmacists
        .iter()
        .filter(|p| !p.submitted)
        .map(|p| p.name.clone())
        .collect();
    if !pending.is_empty() {
        return Err(CoreError::SubmissionsPending { pending });
    }

    let problem: SchedulingProblem = build_problem(room)?;
    let new_room: Room = Room {
        status: RoomStatus::Generating,
        ..room.clone()
    };

    Ok(TransitionResult {
        new_room,
        outcome: TransitionOutcome::Problem(Box::new(problem)),
    })
}

fn complete_generation(
    room: &Room,
    generated: GeneratedSchedule,
) -> Result<TransitionResult, CoreError> {
    ensure_transition(room, RoomStatus::Generating, RoomStatus::Complete)?;

    let range: DateRange = room.date_range()?;
    validate_schedule(&generated.schedule, &room.participant_names(), &range)
        .map_err(CoreError::InvalidSchedule)?;

    let new_room: Room = Room {
        status: RoomStatus::Complete,
        schedule: Some(generated.schedule),
        ai_notes: Some(generated.notes),
        ..room.clone()
    };

    Ok(TransitionResult {
        new_room,
        outcome: TransitionOutcome::Updated,
    })
}

/// Checks that the room is in `from` and that `from -> to` is a lifecycle edge.
fn ensure_transition(room: &Room, from: RoomStatus, to: RoomStatus) -> Result<(), CoreError> {
    if room.status != from || !from.can_transition_to(to) {
        return Err(CoreError::InvalidTransition {
            from: room.status,
            to,
        });
    }
    Ok(())
}

const fn ensure_editable(room: &Room) -> Result<(), CoreError> {
    if room.status.allows_editing() {
        Ok(())
    } else {
        Err(CoreError::EditingClosed {
            status: room.status,
        })
    }
}

fn ensure_day_in_room(room: &Room, date: Day) -> Result<(), CoreError> {
    if room.date_range()?.contains(date) {
        Ok(())
    } else {
        Err(CoreError::DomainViolation(DomainError::DayNotInRoom { date }))
    }
}

/// Finds the pharmacist entry `name` edits, materializing one for a
/// participating admin who has none yet.
///
/// Submission locks a participant's preferences. The admin stays editable.
fn editable_pharmacist(room: &Room, name: &str) -> Result<Pharmacist, CoreError> {
    let pharmacist: Pharmacist = match room.pharmacist(name) {
        Some(existing) => existing.clone(),
        None if room.is_admin(name) && room.admin.is_participant => Pharmacist::new(name),
        None => {
            return Err(CoreError::ParticipantNotFound {
                name: name.to_string(),
            });
        }
    };
    if pharmacist.submitted && !room.is_admin(name) {
        return Err(CoreError::AlreadySubmitted {
            name: name.to_string(),
        });
    }
    Ok(pharmacist)
}

fn replace_pharmacist(room: &Room, updated: Pharmacist) -> Room {
    let mut new_room: Room = room.clone();
    match new_room
        .pharmacists
        .iter_mut()
        .find(|p| p.name == updated.name)
    {
        Some(slot) => *slot = updated,
        None => new_room.pharmacists.push(updated),
    }
    new_room
}

fn unchanged(room: &Room) -> TransitionResult {
    TransitionResult {
        new_room: room.clone(),
        outcome: TransitionOutcome::Updated,
    }
}
