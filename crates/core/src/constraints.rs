// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin-side editing of per-day staffing constraints.

use shift_room_domain::{Bound, Day, DayConstraint, Shift, ShiftBounds};
use std::collections::BTreeMap;

/// Per-day constraints keyed by day.
pub type Constraints = BTreeMap<Day, DayConstraint>;

fn clamp_bound(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Sets one bound of one shift on one day.
///
/// A missing day is first materialized with the default constraint.
/// Raising `min` above `max` lifts `max` to match. Lowering `max` below
/// `min` leaves `min` alone, so the result may have `max < min`.
#[must_use]
pub fn set_shift_bound(
    constraints: &Constraints,
    date: Day,
    shift: Shift,
    bound: Bound,
    value: i64,
) -> Constraints {
    let mut updated: Constraints = constraints.clone();
    let value: u32 = clamp_bound(value);
    let bounds: &mut ShiftBounds = updated.entry(date).or_default().shifts.get_mut(shift);
    match bound {
        Bound::Min => {
            if value > bounds.max {
                bounds.max = value;
            }
            bounds.min = value;
        }
        Bound::Max => bounds.max = value,
    }
    updated
}

/// Flips the holiday flag of one day, keeping its shift bounds.
#[must_use]
pub fn toggle_holiday(constraints: &Constraints, date: Day) -> Constraints {
    let mut updated: Constraints = constraints.clone();
    let constraint: &mut DayConstraint = updated.entry(date).or_default();
    constraint.is_holiday = !constraint.is_holiday;
    updated
}
