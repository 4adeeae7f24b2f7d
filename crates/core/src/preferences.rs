// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Participant-side editing of preferences.

use shift_room_domain::{Day, Pharmacist, Preference, Shift};

/// Returns the next preference for `(date, shift)` without changing anything.
///
/// Unset entries count as [`Preference::Available`], so the first cycle of
/// an untouched slot yields [`Preference::PreferredOff`].
#[must_use]
pub fn cycle_preference(pharmacist: &Pharmacist, date: Day, shift: Shift) -> Preference {
    pharmacist.preference(date, shift).next()
}

/// Returns a copy of `pharmacist` with `(date, shift)` set to `preference`.
#[must_use]
pub fn with_preference(
    pharmacist: &Pharmacist,
    date: Day,
    shift: Shift,
    preference: Preference,
) -> Pharmacist {
    let mut updated: Pharmacist = pharmacist.clone();
    updated
        .preferences
        .entry(date)
        .or_default()
        .insert(shift, preference);
    updated
}

/// Returns a copy of `pharmacist` with the submission lock set.
///
/// Only a room restart clears the lock again.
#[must_use]
pub fn submit(pharmacist: &Pharmacist) -> Pharmacist {
    Pharmacist {
        submitted: true,
        ..pharmacist.clone()
    }
}
