// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use shift_room_domain::{AdminAccount, Day, Pharmacist, Room, RoomId, RoomStatus};

pub fn day(s: &str) -> Day {
    Day::parse(s).unwrap()
}

/// A two-day room (2024-03-01..=2024-03-02) with the given participants.
pub fn create_test_room(participants: &[(&str, bool)]) -> Room {
    Room {
        id: RoomId::new("room123"),
        name: String::from("Night Pharmacy"),
        password: None,
        admin: AdminAccount {
            name: String::from("Admin"),
            password_digest: String::from("digest"),
            is_participant: false,
        },
        start_date: day("2024-03-01"),
        end_date: day("2024-03-02"),
        pharmacists: participants
            .iter()
            .map(|(name, submitted)| Pharmacist {
                submitted: *submitted,
                ..Pharmacist::new(*name)
            })
            .collect(),
        constraints: BTreeMap::new(),
        status: RoomStatus::Collecting,
        schedule: None,
        ai_notes: None,
    }
}

pub fn create_submitted_room() -> Room {
    create_test_room(&[("A", true), ("B", true)])
}
