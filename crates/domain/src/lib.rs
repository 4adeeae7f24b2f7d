// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod constraint;
mod day;
mod error;
mod room;
mod schedule;
mod shift;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use constraint::{Bound, DayConstraint, ShiftBounds};
pub use day::{DateRange, Day, Days};
pub use error::DomainError;
pub use room::{AdminAccount, Pharmacist, PreferenceMap, Room, RoomId, RoomStatus};
pub use schedule::{Schedule, ScheduleRow, WorkloadSummary};
pub use shift::{PerShift, Preference, Shift};
pub use validation::{validate_name, validate_schedule};
