// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::problem::GeneratedSchedule;
use shift_room_domain::{Bound, Day, Shift};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request room changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Advance one participant's preference for a day and shift.
    CyclePreference {
        /// The participant editing their own preferences.
        name: String,
        /// The day being edited.
        date: Day,
        /// The shift being edited.
        shift: Shift,
    },
    /// Lock a participant's preferences as final.
    Submit {
        /// The participant submitting.
        name: String,
    },
    /// Set the minimum or maximum headcount of one shift on one day.
    SetShiftBound {
        /// The day being edited.
        date: Day,
        /// The shift being edited.
        shift: Shift,
        /// Which bound to set.
        bound: Bound,
        /// Requested value; negative values are clamped to zero.
        value: i64,
    },
    /// Flip the holiday flag of one day.
    ToggleHoliday {
        /// The day being edited.
        date: Day,
    },
    /// Start schedule generation (`collecting` → `generating`).
    BeginGeneration,
    /// Record a successful solver response (`generating` → `complete`).
    CompleteGeneration(GeneratedSchedule),
    /// Record a solver failure (`generating` → `collecting`).
    FailGeneration,
    /// Discard the schedule and reopen the room (`complete` → `collecting`).
    Restart,
}

impl Command {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CyclePreference { .. } => "CyclePreference",
            Self::Submit { .. } => "Submit",
            Self::SetShiftBound { .. } => "SetShiftBound",
            Self::ToggleHoliday { .. } => "ToggleHoliday",
            Self::BeginGeneration => "BeginGeneration",
            Self::CompleteGeneration(_) => "CompleteGeneration",
            Self::FailGeneration => "FailGeneration",
            Self::Restart => "Restart",
        }
    }
}
