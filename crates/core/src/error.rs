// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_room_domain::{DomainError, RoomStatus};

/// Errors that can occur during state transitions.
///
/// A transition that fails never produces a partially updated room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The room's lifecycle does not permit this transition.
    InvalidTransition {
        /// The current status.
        from: RoomStatus,
        /// The requested status.
        to: RoomStatus,
    },
    /// Preferences or constraints were edited outside `collecting`.
    EditingClosed {
        /// The current status.
        status: RoomStatus,
    },
    /// Generation was requested while some participants have not submitted.
    SubmissionsPending {
        /// Names of participants still editing.
        pending: Vec<String>,
    },
    /// Generation was requested for a room with nobody to schedule.
    NoParticipants,
    /// The participant has already submitted and their preferences are locked.
    AlreadySubmitted {
        /// The participant's name.
        name: String,
    },
    /// The named participant is not in the room.
    ParticipantNotFound {
        /// The participant's name.
        name: String,
    },
    /// The room has no generated schedule.
    NoSchedule {
        /// The current status.
        status: RoomStatus,
    },
    /// The supplied room password does not match.
    WrongPassword,
    /// The solver's schedule does not fit the room.
    InvalidSchedule(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidTransition { from, to } => {
                write!(f, "Cannot move room from '{from}' to '{to}'")
            }
            Self::EditingClosed { status } => {
                write!(f, "Room is '{status}'; edits are only accepted while collecting")
            }
            Self::SubmissionsPending { pending } => {
                write!(f, "Waiting for submissions from: {}", pending.join(", "))
            }
            Self::NoParticipants => write!(f, "Room has no participants to schedule"),
            Self::AlreadySubmitted { name } => {
                write!(f, "'{name}' has already submitted their preferences")
            }
            Self::ParticipantNotFound { name } => {
                write!(f, "'{name}' is not a participant of this room")
            }
            Self::NoSchedule { status } => {
                write!(f, "Room is '{status}' and has no schedule yet")
            }
            Self::WrongPassword => write!(f, "Wrong room password"),
            Self::InvalidSchedule(err) => write!(f, "Invalid schedule: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
