// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::room_snapshots;
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = room_snapshots)]
struct NewSnapshot<'a> {
    snapshot_key: &'a str,
    snapshot_value: &'a str,
}

/// Writes `value` under `key`, replacing any previous row.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn upsert_snapshot(
    conn: &mut SqliteConnection,
    key: &str,
    value: &str,
) -> Result<(), PersistenceError> {
    diesel::replace_into(room_snapshots::table)
        .values(&NewSnapshot {
            snapshot_key: key,
            snapshot_value: value,
        })
        .execute(conn)?;
    Ok(())
}

/// Reads the value stored under `key`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_snapshot(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    Ok(room_snapshots::table
        .filter(room_snapshots::snapshot_key.eq(key))
        .select(room_snapshots::snapshot_value)
        .first::<String>(conn)
        .optional()?)
}
