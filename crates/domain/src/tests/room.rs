// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::{
    AdminAccount, Day, DayConstraint, Pharmacist, Preference, Room, RoomId, RoomStatus,
    ShiftBounds, Shift,
};

fn day(s: &str) -> Day {
    Day::parse(s).unwrap()
}

fn create_test_room(admin_participates: bool) -> Room {
    Room {
        id: RoomId::new("abc1234"),
        name: String::from("Central Pharmacy"),
        password: None,
        admin: AdminAccount {
            name: String::from("Admin"),
            password_digest: String::from("digest"),
            is_participant: admin_participates,
        },
        start_date: day("2024-03-01"),
        end_date: day("2024-03-03"),
        pharmacists: vec![Pharmacist::new("A"), Pharmacist::new("B")],
        constraints: BTreeMap::new(),
        status: RoomStatus::Collecting,
        schedule: None,
        ai_notes: None,
    }
}

#[test]
fn test_room_status_transitions() {
    assert!(RoomStatus::Collecting.can_transition_to(RoomStatus::Generating));
    assert!(RoomStatus::Generating.can_transition_to(RoomStatus::Complete));
    assert!(RoomStatus::Generating.can_transition_to(RoomStatus::Collecting));
    assert!(RoomStatus::Complete.can_transition_to(RoomStatus::Collecting));

    assert!(!RoomStatus::Collecting.can_transition_to(RoomStatus::Complete));
    assert!(!RoomStatus::Complete.can_transition_to(RoomStatus::Generating));
    assert!(!RoomStatus::Collecting.can_transition_to(RoomStatus::Collecting));
}

#[test]
fn test_room_status_parses_lowercase() {
    assert_eq!("generating".parse::<RoomStatus>().unwrap(), RoomStatus::Generating);
    assert!("Generating".parse::<RoomStatus>().is_err());
}

#[test]
fn test_unset_preference_defaults_to_available() {
    let pharmacist: Pharmacist = Pharmacist::new("A");
    assert_eq!(
        pharmacist.preference(day("2024-03-01"), Shift::Noon),
        Preference::Available
    );
}

#[test]
fn test_preference_cycle_has_period_three() {
    for start in [
        Preference::Available,
        Preference::PreferredOff,
        Preference::Unavailable,
    ] {
        assert_eq!(start.next().next().next(), start);
    }
    assert_eq!(Preference::Available.next(), Preference::PreferredOff);
}

#[test]
fn test_missing_constraint_uses_default() {
    let room: Room = create_test_room(false);
    let constraint: DayConstraint = room.constraint_for(day("2024-03-02"));
    assert!(!constraint.is_holiday);
    for (_, bounds) in constraint.shifts.iter() {
        assert_eq!(*bounds, ShiftBounds::new(1, 1));
    }
}

#[test]
fn test_holiday_constraint_requires_nobody() {
    let mut constraint: DayConstraint = DayConstraint::default();
    constraint.shifts.get_mut(Shift::Evening).max = 3;
    constraint.is_holiday = true;

    assert_eq!(constraint.effective(Shift::Evening), ShiftBounds::NONE);
    assert_eq!(constraint.shifts.get(Shift::Evening).max, 3);
}

#[test]
fn test_participant_names_appends_participating_admin_once() {
    let room: Room = create_test_room(true);
    assert_eq!(room.participant_names(), vec!["A", "B", "Admin"]);

    let mut listed: Room = create_test_room(true);
    listed.pharmacists.insert(0, Pharmacist::new("Admin"));
    assert_eq!(listed.participant_names(), vec!["Admin", "A", "B"]);

    let organizer_only: Room = create_test_room(false);
    assert_eq!(organizer_only.participant_names(), vec!["A", "B"]);
}

#[test]
fn test_schedule_personnel_puts_admin_first() {
    let mut room: Room = create_test_room(true);
    room.pharmacists.push(Pharmacist::new("Admin"));
    assert_eq!(room.schedule_personnel(), vec!["Admin", "A", "B"]);
}

#[test]
fn test_room_json_uses_documented_field_names() {
    let mut room: Room = create_test_room(true);
    room.password = Some(String::from("x"));
    room.constraints.insert(day("2024-03-02"), DayConstraint::default());
    room.pharmacists[0]
        .preferences
        .entry(day("2024-03-01"))
        .or_default()
        .insert(Shift::Morning, Preference::Unavailable);

    let json: serde_json::Value = serde_json::to_value(&room).unwrap();
    assert_eq!(json["startDate"], "2024-03-01");
    assert_eq!(json["endDate"], "2024-03-03");
    assert_eq!(json["status"], "collecting");
    assert_eq!(json["aiNotes"], serde_json::Value::Null);
    assert_eq!(json["admin"]["isParticipant"], true);
    assert_eq!(json["admin"]["passwordDigest"], "digest");
    assert_eq!(json["constraints"]["2024-03-02"]["isHoliday"], false);
    assert_eq!(json["constraints"]["2024-03-02"]["shifts"]["م"]["max"], 1);
    assert_eq!(
        json["pharmacists"][0]["preferences"]["2024-03-01"]["ص"],
        "unavailable"
    );

    let back: Room = serde_json::from_value(json).unwrap();
    assert_eq!(back, room);
}

#[test]
fn test_room_without_password_omits_field() {
    let room: Room = create_test_room(false);
    let json: serde_json::Value = serde_json::to_value(&room).unwrap();
    assert!(json.get("password").is_none());
}
