// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_room_domain::{Room, RoomId};
use tracing::{debug, warn};

use crate::error::PersistenceError;
use crate::kv::{KeyValueStore, MemoryStore};

/// Namespace prefix for room snapshot keys.
pub const ROOM_KEY_PREFIX: &str = "room-state:";

/// Returns the store key for a room.
#[must_use]
pub fn room_key(id: &RoomId) -> String {
    format!("{ROOM_KEY_PREFIX}{id}")
}

/// Whole-snapshot storage of rooms, last writer wins.
pub struct RoomStore<B> {
    backend: B,
}

impl<B: KeyValueStore> RoomStore<B> {
    /// Wraps a key-value backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persists the full room snapshot under its id, overwriting any
    /// previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the room cannot be encoded or the backend
    /// rejects the write.
    pub fn save(&mut self, room: &Room) -> Result<(), PersistenceError> {
        let encoded: String = serde_json::to_string(room)?;
        self.backend.put(&room_key(&room.id), &encoded)?;
        debug!(room_id = %room.id, status = %room.status, "Saved room snapshot");
        Ok(())
    }

    /// Returns the most recently saved snapshot for `id`.
    ///
    /// A snapshot that no longer decodes is reported as absent.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself cannot be read.
    pub fn get(&mut self, id: &RoomId) -> Result<Option<Room>, PersistenceError> {
        let Some(encoded) = self.backend.get(&room_key(id))? else {
            return Ok(None);
        };
        match serde_json::from_str::<Room>(&encoded) {
            Ok(room) => Ok(Some(room)),
            Err(err) => {
                warn!(room_id = %id, error = %err, "Discarding undecodable room snapshot");
                Ok(None)
            }
        }
    }

    /// Direct access to the underlying backend.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl RoomStore<MemoryStore> {
    /// Creates a store over a fresh in-memory map.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}
