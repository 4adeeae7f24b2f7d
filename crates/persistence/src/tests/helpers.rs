// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use shift_room_domain::{
    AdminAccount, Day, DayConstraint, Pharmacist, Preference, Room, RoomId, RoomStatus, Schedule,
    Shift,
};
use time::Month;

use crate::{KeyValueStore, RoomStore};

fn day(n: u8) -> Day {
    Day::from_calendar_date(2024, Month::March, n).unwrap()
}

/// A room exercising every field of the snapshot.
pub fn create_full_room(id: &str) -> Room {
    let mut alice: Pharmacist = Pharmacist::new("Alice");
    alice
        .preferences
        .entry(day(1))
        .or_default()
        .insert(Shift::Evening, Preference::Unavailable);
    alice.submitted = true;

    let mut constraints: BTreeMap<Day, DayConstraint> = BTreeMap::new();
    let mut holiday: DayConstraint = DayConstraint::default();
    holiday.is_holiday = true;
    constraints.insert(day(2), holiday);

    let mut schedule: Schedule = Schedule::new();
    schedule.assign("Alice", day(1), Some(Shift::Morning));
    schedule.assign("Alice", day(2), None);

    Room {
        id: RoomId::new(id),
        name: String::from("Central"),
        password: Some(String::from("x")),
        admin: AdminAccount {
            name: String::from("Boss"),
            password_digest: String::from("$2b$12$digest"),
            is_participant: true,
        },
        start_date: day(1),
        end_date: day(2),
        pharmacists: vec![alice, Pharmacist::new("Bob")],
        constraints,
        status: RoomStatus::Complete,
        schedule: Some(schedule),
        ai_notes: Some(String::from("ملاحظات")),
    }
}

/// Shared assertions run against every backend.
pub fn assert_store_contract<B: KeyValueStore>(store: &mut RoomStore<B>) {
    let room: Room = create_full_room("abc1234");

    assert_eq!(store.get(&room.id).unwrap(), None);

    store.save(&room).unwrap();
    assert_eq!(store.get(&room.id).unwrap(), Some(room.clone()));

    // Last writer wins.
    let restarted: Room = Room {
        status: RoomStatus::Collecting,
        schedule: None,
        ai_notes: None,
        ..room.clone()
    };
    store.save(&restarted).unwrap();
    assert_eq!(store.get(&room.id).unwrap(), Some(restarted));

    // Other rooms are untouched.
    assert_eq!(store.get(&RoomId::new("zzzzzzz")).unwrap(), None);
}
