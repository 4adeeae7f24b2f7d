// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use shift_room_domain::{Room, RoomId};
use shift_room_persistence::{KeyValueStore, RoomStore};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::{ApiError, translate_persistence_error};

/// A room store shared between request handlers and poll tasks.
pub type SharedStore<B> = Arc<Mutex<RoomStore<B>>>;

/// Wraps a store for sharing.
#[must_use]
pub fn share<B: KeyValueStore>(store: RoomStore<B>) -> SharedStore<B> {
    Arc::new(Mutex::new(store))
}

/// Loads a room, mapping absence to `NotFound`.
///
/// # Errors
///
/// Returns `NotFound` for unknown ids and `PersistenceFailure` if the
/// store cannot be read.
pub fn load_room<B: KeyValueStore>(
    store: &mut RoomStore<B>,
    room_id: &RoomId,
) -> Result<Room, ApiError> {
    store
        .get(room_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("Room"),
            message: format!("No room with id '{room_id}'"),
        })
}

/// Saves a room. A failure is logged and handed back, never raised.
pub fn persist<B: KeyValueStore>(store: &mut RoomStore<B>, room: &Room) -> Option<ApiError> {
    match store.save(room) {
        Ok(()) => None,
        Err(err) => {
            warn!(room_id = %room.id, error = %err, "Room snapshot not saved");
            Some(translate_persistence_error(&err))
        }
    }
}
