// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password::PasswordError;
use shift_room::CoreError;
use shift_room_domain::DomainError;
use shift_room_persistence::PersistenceError;
use shift_room_solver::SolverError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The room password did not match.
    WrongPassword,
    /// A precondition of the requested operation does not hold.
    ValidationFailure {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The solver call failed or returned an unusable answer.
    SolverFailure {
        /// A description of the failure.
        message: String,
    },
    /// The store could not be read or written.
    PersistenceFailure {
        /// A description of the failure.
        message: String,
    },
    /// The session's identity may not perform this action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound {
                resource_type,
                message,
            } => write!(f, "{resource_type} not found: {message}"),
            Self::WrongPassword => write!(f, "Wrong room password"),
            Self::ValidationFailure { rule, message } => {
                write!(f, "Validation failed ({rule}): {message}")
            }
            Self::SolverFailure { message } => write!(f, "Solver failure: {message}"),
            Self::PersistenceFailure { message } => write!(f, "Persistence failure: {message}"),
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::InvalidInput {
            field: String::from("password"),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{date_string}' is not a date: {error}"),
        },
        DomainError::InvalidDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: format!("start {start} is after end {end}"),
        },
        DomainError::InvalidMonth(msg) => ApiError::InvalidInput {
            field: String::from("month"),
            message: msg,
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("date overflow while {operation}"),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidShift(value) => ApiError::InvalidInput {
            field: String::from("shift"),
            message: format!("'{value}' is not a shift"),
        },
        DomainError::InvalidPreference(value) => ApiError::InvalidInput {
            field: String::from("preference"),
            message: format!("'{value}' is not a preference"),
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{value}' is not a room status"),
        },
        DomainError::UnknownParticipant { name } => ApiError::NotFound {
            resource_type: String::from("Participant"),
            message: format!("'{name}' is not in this room"),
        },
        DomainError::DayNotInRoom { date } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("{date} is outside the room's date range"),
        },
        err @ DomainError::DateOutOfRange { .. } => ApiError::ValidationFailure {
            rule: String::from("schedule_within_range"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// A schedule the room rejects is reported as a solver failure: the solver
/// produced it.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let validation = |rule: &str, err: &CoreError| ApiError::ValidationFailure {
        rule: rule.to_string(),
        message: err.to_string(),
    };
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidTransition { .. } => validation("room_lifecycle", &err),
        CoreError::EditingClosed { .. } => validation("editing_open", &err),
        CoreError::SubmissionsPending { .. } => validation("all_submitted", &err),
        CoreError::NoParticipants => validation("participants_required", &err),
        CoreError::AlreadySubmitted { .. } => validation("submission_locked", &err),
        CoreError::NoSchedule { .. } => validation("schedule_required", &err),
        CoreError::ParticipantNotFound { name } => ApiError::NotFound {
            resource_type: String::from("Participant"),
            message: format!("'{name}' is not in this room"),
        },
        CoreError::WrongPassword => ApiError::WrongPassword,
        CoreError::InvalidSchedule(domain_err) => ApiError::SolverFailure {
            message: format!("Solver schedule does not fit the room: {domain_err}"),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    ApiError::PersistenceFailure {
        message: err.to_string(),
    }
}

/// Translates a solver error into an API error.
#[must_use]
pub fn translate_solver_error(err: &SolverError) -> ApiError {
    ApiError::SolverFailure {
        message: err.to_string(),
    }
}
