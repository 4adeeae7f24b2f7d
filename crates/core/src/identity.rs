// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Binding a display name to a room identity.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use shift_room_domain::{Pharmacist, Room, validate_name};

/// What an identity may do inside a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Edits constraints, triggers generation and restarts.
    Admin,
    /// Edits and submits their own preferences.
    Participant,
}

/// A name bound to a room for the length of a client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub role: Role,
}

impl Identity {
    /// Returns true for the room admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinResult {
    pub identity: Identity,
    /// The room with the newcomer appended; `None` when nothing changed.
    pub new_room: Option<Room>,
}

/// Resolves the identity a name has in `room`, without joining.
///
/// The admin name always resolves to the admin. Anyone else must already
/// be a participant.
///
/// # Errors
///
/// Returns `CoreError::ParticipantNotFound` for unknown names.
pub fn resolve_identity(room: &Room, name: &str) -> Result<Identity, CoreError> {
    if room.is_admin(name) {
        return Ok(Identity {
            name: name.to_string(),
            role: Role::Admin,
        });
    }
    if room.pharmacist(name).is_some() {
        return Ok(Identity {
            name: name.to_string(),
            role: Role::Participant,
        });
    }
    Err(CoreError::ParticipantNotFound {
        name: name.to_string(),
    })
}

/// Joins `room` as `name`.
///
/// The room password is checked first. The admin name and existing
/// participant names are resumed without any further proof. A new name
/// is appended as a participant with no preferences.
///
/// # Errors
///
/// Returns an error if:
/// - The room has a password and `password` does not match it
/// - `name` is blank
pub fn join(room: &Room, name: &str, password: Option<&str>) -> Result<JoinResult, CoreError> {
    if room
        .password
        .as_deref()
        .is_some_and(|expected| password != Some(expected))
    {
        return Err(CoreError::WrongPassword);
    }
    validate_name("Participant name", name)?;

    if let Ok(identity) = resolve_identity(room, name) {
        return Ok(JoinResult {
            identity,
            new_room: None,
        });
    }

    let mut new_room: Room = room.clone();
    new_room.pharmacists.push(Pharmacist::new(name));
    Ok(JoinResult {
        identity: Identity {
            name: name.to_string(),
            role: Role::Participant,
        },
        new_room: Some(new_room),
    })
}
