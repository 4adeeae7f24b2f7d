// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room creation, joining and the read-modify-write edit operations.
//!
//! Every operation loads the full room, applies one core command and
//! writes the full room back. Nothing is merged: the last save wins.

use std::collections::BTreeMap;

use shift_room::{Command, Identity, JoinResult, Role, TransitionResult, apply, join};
use shift_room_domain::{
    AdminAccount, DateRange, Pharmacist, Preference, Room, RoomId, RoomStatus, validate_name,
};
use shift_room_persistence::{KeyValueStore, RoomStore};
use tracing::{info, warn};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::password::{hash_password, verify_password};
use crate::request_response::{
    CreateRoomRequest, CyclePreferenceRequest, JoinRoomRequest, RoomUpdate, SetShiftBoundRequest,
    ToggleHolidayRequest, VerifyAdminRequest,
};
use crate::session::Session;
use crate::store::{load_room, persist};

const ROOM_ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ROOM_ID_LENGTH: usize = 7;
const ROOM_ID_ATTEMPTS: usize = 8;

/// Generates a random 7-character base-36 room id.
#[must_use]
pub fn generate_room_id() -> RoomId {
    let mut value: u64 = rand::random::<u64>();
    let id: String = (0..ROOM_ID_LENGTH)
        .map(|_| {
            let digit: usize = usize::try_from(value % 36).unwrap_or_default();
            value /= 36;
            char::from(ROOM_ID_ALPHABET[digit])
        })
        .collect();
    RoomId::new(id)
}

fn unused_room_id<B: KeyValueStore>(store: &mut RoomStore<B>) -> Result<RoomId, ApiError> {
    for _ in 0..ROOM_ID_ATTEMPTS {
        let candidate: RoomId = generate_room_id();
        let existing = store
            .get(&candidate)
            .map_err(|e| translate_persistence_error(&e))?;
        if existing.is_none() {
            return Ok(candidate);
        }
    }
    Err(ApiError::PersistenceFailure {
        message: String::from("Could not find an unused room id"),
    })
}

fn resolve_period(request: &CreateRoomRequest) -> Result<DateRange, ApiError> {
    match (&request.month, request.start_date, request.end_date) {
        (Some(month), None, None) => DateRange::parse_month(month),
        (None, Some(start), Some(end)) => DateRange::new(start, end),
        _ => {
            return Err(ApiError::InvalidInput {
                field: String::from("period"),
                message: String::from("Give either a month or both a start and an end date"),
            });
        }
    }
    .map_err(translate_domain_error)
}

/// Fails with `Unauthorized` unless the session is the room admin.
///
/// # Errors
///
/// Returns `Unauthorized` for any non-admin identity.
pub fn require_admin(room: &Room, session: &Session, action: &str) -> Result<(), ApiError> {
    if room.is_admin(session.name()) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized {
            action: action.to_string(),
            required_role: String::from("Admin"),
        })
    }
}

fn apply_and_save<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    room: &Room,
    command: Command,
) -> Result<RoomUpdate, ApiError> {
    let action: &'static str = command.name();
    let result: TransitionResult = apply(room, command).map_err(translate_core_error)?;
    info!(room_id = %room.id, action, status = %result.new_room.status, "Room updated");
    let save_error: Option<ApiError> = persist(store, &result.new_room);
    Ok(RoomUpdate {
        room: result.new_room,
        output: (),
        save_error,
    })
}

/// Creates a room and returns the admin's session.
///
/// # Errors
///
/// Returns an error if:
/// - The room name, admin name or admin password is blank
/// - The period is missing, ambiguous or invalid
/// - The admin password cannot be hashed
/// - The store cannot be read while picking a room id
pub fn create_room<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    request: &CreateRoomRequest,
) -> Result<RoomUpdate<Session>, ApiError> {
    validate_name("Room name", &request.name).map_err(translate_domain_error)?;
    validate_name("Admin name", &request.admin_name).map_err(translate_domain_error)?;
    if request.admin_password.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("admin_password"),
            message: String::from("Admin password cannot be empty"),
        });
    }
    let range: DateRange = resolve_period(request)?;
    let id: RoomId = unused_room_id(store)?;
    let password_digest: String = hash_password(&request.admin_password)?;

    let pharmacists: Vec<Pharmacist> = if request.is_participant {
        vec![Pharmacist::new(request.admin_name.clone())]
    } else {
        Vec::new()
    };

    let room: Room = Room {
        id: id.clone(),
        name: request.name.clone(),
        password: request.password.clone().filter(|p| !p.is_empty()),
        admin: AdminAccount {
            name: request.admin_name.clone(),
            password_digest,
            is_participant: request.is_participant,
        },
        start_date: range.start(),
        end_date: range.end(),
        pharmacists,
        constraints: BTreeMap::new(),
        status: RoomStatus::Collecting,
        schedule: None,
        ai_notes: None,
    };

    info!(room_id = %id, days = range.len(), "Room created");
    let save_error: Option<ApiError> = persist(store, &room);
    let session: Session = Session::new(
        id,
        Identity {
            name: request.admin_name.clone(),
            role: Role::Admin,
        },
    );

    Ok(RoomUpdate {
        room,
        output: session,
        save_error,
    })
}

/// Loads a room by id.
///
/// # Errors
///
/// Returns `NotFound` if no room with this id was ever saved.
pub fn get_room<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    room_id: &RoomId,
) -> Result<Room, ApiError> {
    load_room(store, room_id)
}

/// Checks the admin password of a room.
///
/// # Errors
///
/// Returns an error if the room does not exist or its digest is unreadable.
pub fn verify_admin_password<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    room_id: &RoomId,
    request: &VerifyAdminRequest,
) -> Result<bool, ApiError> {
    let room: Room = load_room(store, room_id)?;
    Ok(verify_password(&request.password, &room.admin.password_digest)?)
}

/// Joins a room. A new name is appended and saved at once.
///
/// # Errors
///
/// Returns an error if:
/// - The room does not exist
/// - The room password does not match
/// - The name is blank
pub fn join_room<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    room_id: &RoomId,
    request: &JoinRoomRequest,
) -> Result<RoomUpdate<Session>, ApiError> {
    let room: Room = load_room(store, room_id)?;
    let result: JoinResult = join(&room, &request.name, request.password.as_deref())
        .map_err(|err| {
            warn!(room_id = %room_id, error = %err, "Join rejected");
            translate_core_error(err)
        })?;

    let session: Session = Session::new(room_id.clone(), result.identity);
    match result.new_room {
        Some(new_room) => {
            info!(room_id = %room_id, name = session.name(), "Participant joined");
            let save_error: Option<ApiError> = persist(store, &new_room);
            Ok(RoomUpdate {
                room: new_room,
                output: session,
                save_error,
            })
        }
        None => Ok(RoomUpdate {
            room,
            output: session,
            save_error: None,
        }),
    }
}

/// Cycles one of the session's own preferences.
///
/// # Errors
///
/// Returns an error if the room is not collecting, the session has
/// already submitted, or the day is outside the room.
pub fn cycle_preference<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    session: &Session,
    request: &CyclePreferenceRequest,
) -> Result<RoomUpdate<Preference>, ApiError> {
    let room: Room = load_room(store, session.room_id())?;
    let update: RoomUpdate = apply_and_save(
        store,
        &room,
        Command::CyclePreference {
            name: session.name().to_string(),
            date: request.date,
            shift: request.shift,
        },
    )?;
    let preference: Preference = update
        .room
        .preference_of(session.name(), request.date, request.shift);
    Ok(RoomUpdate {
        room: update.room,
        output: preference,
        save_error: update.save_error,
    })
}

/// Locks in the session's own preferences.
///
/// # Errors
///
/// Returns an error if the room is not collecting or the session is not
/// a participant.
pub fn submit_preferences<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    session: &Session,
) -> Result<RoomUpdate, ApiError> {
    let room: Room = load_room(store, session.room_id())?;
    apply_and_save(
        store,
        &room,
        Command::Submit {
            name: session.name().to_string(),
        },
    )
}

/// Sets a shift bound. Admin only.
///
/// # Errors
///
/// Returns an error if the session is not the admin, the room is not
/// collecting, or the day is outside the room.
pub fn set_shift_bound<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    session: &Session,
    request: &SetShiftBoundRequest,
) -> Result<RoomUpdate, ApiError> {
    let room: Room = load_room(store, session.room_id())?;
    require_admin(&room, session, "set_shift_bound")?;
    apply_and_save(
        store,
        &room,
        Command::SetShiftBound {
            date: request.date,
            shift: request.shift,
            bound: request.bound,
            value: request.value,
        },
    )
}

/// Toggles a holiday. Admin only.
///
/// # Errors
///
/// Returns an error if the session is not the admin, the room is not
/// collecting, or the day is outside the room.
pub fn toggle_holiday<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    session: &Session,
    request: &ToggleHolidayRequest,
) -> Result<RoomUpdate, ApiError> {
    let room: Room = load_room(store, session.room_id())?;
    require_admin(&room, session, "toggle_holiday")?;
    apply_and_save(store, &room, Command::ToggleHoliday { date: request.date })
}

/// Discards the schedule and reopens collection. Admin only.
///
/// # Errors
///
/// Returns an error if the session is not the admin or the room is not
/// complete.
pub fn restart<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    session: &Session,
) -> Result<RoomUpdate, ApiError> {
    let room: Room = load_room(store, session.room_id())?;
    require_admin(&room, session, "restart")?;
    apply_and_save(store, &room, Command::Restart)
}
