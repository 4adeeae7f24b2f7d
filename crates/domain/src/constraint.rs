// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day staffing requirements.

use crate::shift::{PerShift, Shift};
use serde::{Deserialize, Serialize};

/// Minimum and maximum headcount for one shift.
///
/// Editing keeps `min <= max` when `min` is raised. Lowering `max` below
/// `min` is accepted as-is; see `set_shift_bound` in the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBounds {
    pub min: u32,
    pub max: u32,
}

impl ShiftBounds {
    /// The bounds applied to any shift nobody has configured.
    pub const DEFAULT: Self = Self { min: 1, max: 1 };

    /// Zero staffing, used for holidays.
    pub const NONE: Self = Self { min: 0, max: 0 };

    /// Creates a new pair of bounds.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Default for ShiftBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which side of [`ShiftBounds`] an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Min,
    Max,
}

/// Staffing requirement for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayConstraint {
    /// Headcount bounds per shift. Kept, but ignored, while `is_holiday` is set.
    pub shifts: PerShift<ShiftBounds>,
    /// When set, nobody needs to work this day.
    pub is_holiday: bool,
}

impl DayConstraint {
    /// Returns the bounds that actually apply to `shift`.
    ///
    /// Holidays require nobody, whatever the stored bounds say.
    #[must_use]
    pub const fn effective(&self, shift: Shift) -> ShiftBounds {
        if self.is_holiday {
            ShiftBounds::NONE
        } else {
            *self.shifts.get(shift)
        }
    }
}

impl Default for DayConstraint {
    fn default() -> Self {
        Self {
            shifts: PerShift::from_fn(|_| ShiftBounds::DEFAULT),
            is_holiday: false,
        }
    }
}
