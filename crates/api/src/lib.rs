// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The library surface of a shift room.
//!
//! Synchronous operations take `&mut RoomStore<B>` and perform one
//! load-apply-save cycle. Operations that wait on the solver take a
//! [`SharedStore`] so the lock can be released during the call.

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

mod error;
mod generation;
mod password;
mod poller;
mod request_response;
mod rooms;
mod session;
mod store;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
    translate_solver_error,
};
pub use generation::{analyze_fairness, generate_schedule, scheduling_tips, suggest_swap};
pub use password::{PasswordError, hash_password, verify_password};
pub use poller::{DEFAULT_POLL_INTERVAL, PollConfig, RoomPoller};
pub use request_response::{
    CreateRoomRequest, CyclePreferenceRequest, JoinRoomRequest, PreferenceResponse, RoomUpdate,
    RoomView, SessionResponse, SetShiftBoundRequest, SuggestSwapRequest, ToggleHolidayRequest,
    VerifyAdminRequest,
};
pub use rooms::{
    create_room, cycle_preference, generate_room_id, get_room, join_room, require_admin,
    restart, set_shift_bound, submit_preferences, toggle_holiday, verify_admin_password,
};
pub use session::{Session, SessionContext};
pub use shift_room::{Identity, Role};
pub use store::{SharedStore, share};
