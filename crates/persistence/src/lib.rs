// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room snapshot storage.
//!
//! Rooms are stored whole, as JSON, under `room-state:<room id>` in a
//! key-value backend. Two backends are provided:
//!
//! - [`MemoryStore`] for tests and throwaway servers
//! - [`SqliteStore`], a single Diesel-managed `SQLite` table
//!
//! Every save overwrites the previous snapshot. Concurrent writers race and
//! the last one wins.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod diesel_schema;
mod error;
mod kv;
mod room_store;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use kv::{KeyValueStore, MemoryStore};
pub use room_store::{ROOM_KEY_PREFIX, RoomStore, room_key};
pub use sqlite::SqliteStore;
