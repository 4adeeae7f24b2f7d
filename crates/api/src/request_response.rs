// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response shapes of the API operations.

use serde::{Deserialize, Serialize};
use shift_room::Role;
use shift_room_domain::{
    Bound, Day, DayConstraint, Pharmacist, Preference, Room, RoomId, RoomStatus, Schedule, Shift,
    WorkloadSummary,
};
use std::collections::BTreeMap;

use crate::error::ApiError;

/// Request to create a room.
///
/// Exactly one of `month` (`YYYY-MM`) or the pair `start_date`/`end_date`
/// selects the date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: String,
    /// Join secret; blank or absent means the room is open.
    #[serde(default)]
    pub password: Option<String>,
    pub admin_name: String,
    pub admin_password: String,
    #[serde(default)]
    pub is_participant: bool,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub start_date: Option<Day>,
    #[serde(default)]
    pub end_date: Option<Day>,
}

/// Request to join a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    pub name: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Request to check the admin password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyAdminRequest {
    pub password: String,
}

/// Request to cycle one preference cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePreferenceRequest {
    pub date: Day,
    pub shift: Shift,
}

/// Request to set one shift bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetShiftBoundRequest {
    pub date: Day,
    pub shift: Shift,
    pub bound: Bound,
    pub value: i64,
}

/// Request to toggle a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleHolidayRequest {
    pub date: Day,
}

/// Request for a swap suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestSwapRequest {
    /// Whose shift to hand over; defaults to the session's own name.
    #[serde(default)]
    pub participant: Option<String>,
    pub date: Day,
    pub shift: Shift,
}

/// The outcome of a mutating operation.
///
/// `room` is the new snapshot. When the store could not be written,
/// `save_error` carries the failure and `room` is still the authoritative
/// copy for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomUpdate<T = ()> {
    pub room: Room,
    pub output: T,
    pub save_error: Option<ApiError>,
}

impl<T> RoomUpdate<T> {
    /// Returns true if the snapshot reached the store.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

/// A room as shown to clients: no secrets, plus presentation figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub id: RoomId,
    pub name: String,
    pub has_password: bool,
    pub admin_name: String,
    pub admin_is_participant: bool,
    pub start_date: Day,
    pub end_date: Day,
    pub dates: Vec<Day>,
    pub pharmacists: Vec<Pharmacist>,
    pub constraints: BTreeMap<Day, DayConstraint>,
    pub status: RoomStatus,
    pub schedule: Option<Schedule>,
    pub ai_notes: Option<String>,
    /// Grid rows: the participating admin first, then the pharmacists.
    pub personnel: Vec<String>,
    pub workload: Vec<WorkloadSummary>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            name: room.name.clone(),
            has_password: room.password.is_some(),
            admin_name: room.admin.name.clone(),
            admin_is_participant: room.admin.is_participant,
            start_date: room.start_date,
            end_date: room.end_date,
            dates: room.dates().unwrap_or_default(),
            pharmacists: room.pharmacists.clone(),
            constraints: room.constraints.clone(),
            status: room.status,
            schedule: room.schedule.clone(),
            ai_notes: room.ai_notes.clone(),
            personnel: room.schedule_personnel(),
            workload: room
                .schedule
                .as_ref()
                .map(Schedule::summary)
                .unwrap_or_default(),
        }
    }
}

/// Response to a successful join or room creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub room_id: RoomId,
    pub name: String,
    pub role: Role,
    pub room: RoomView,
}

/// Response to a preference cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceResponse {
    pub preference: Preference,
    pub room: RoomView,
    /// Set when the room could not be saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<&RoomUpdate<Preference>> for PreferenceResponse {
    fn from(update: &RoomUpdate<Preference>) -> Self {
        Self {
            preference: update.output,
            room: RoomView::from(&update.room),
            warning: update.save_error.as_ref().map(ToString::to_string),
        }
    }
}
