// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use shift_room::{SchedulingProblem, build_problem};
use shift_room_domain::{
    AdminAccount, Day, DayConstraint, Pharmacist, Preference, Room, RoomId, RoomStatus, Shift,
};

pub fn day(s: &str) -> Day {
    Day::parse(s).unwrap()
}

/// Two days, two pharmacists, the second day a holiday, and one
/// unavailable shift for A.
pub fn create_test_room() -> Room {
    let mut a: Pharmacist = Pharmacist::new("A");
    a.preferences
        .entry(day("2024-03-01"))
        .or_default()
        .insert(Shift::Evening, Preference::Unavailable);
    a.submitted = true;
    let mut b: Pharmacist = Pharmacist::new("B");
    b.submitted = true;

    let mut constraints: BTreeMap<Day, DayConstraint> = BTreeMap::new();
    constraints.insert(
        day("2024-03-02"),
        DayConstraint {
            is_holiday: true,
            ..DayConstraint::default()
        },
    );

    Room {
        id: RoomId::new("abcdefg"),
        name: String::from("Ward"),
        password: None,
        admin: AdminAccount {
            name: String::from("Admin"),
            password_digest: String::new(),
            is_participant: false,
        },
        start_date: day("2024-03-01"),
        end_date: day("2024-03-02"),
        pharmacists: vec![a, b],
        constraints,
        status: RoomStatus::Collecting,
        schedule: None,
        ai_notes: None,
    }
}

pub fn create_test_problem() -> SchedulingProblem {
    build_problem(&create_test_room()).unwrap()
}
