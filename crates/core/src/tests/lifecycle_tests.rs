// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the `collecting -> generating -> complete` lifecycle.

use crate::{
    Command, CoreError, GeneratedSchedule, SchedulingProblem, TransitionOutcome,
    TransitionResult, apply,
};
use shift_room_domain::{DayConstraint, DomainError, Preference, Room, RoomStatus, Schedule, Shift};

use super::helpers::{create_submitted_room, create_test_room, day};

fn stub_schedule() -> Schedule {
    let mut schedule: Schedule = Schedule::new();
    schedule.assign("A", day("2024-03-01"), Some(Shift::Morning));
    schedule.assign("A", day("2024-03-02"), None);
    schedule.assign("B", day("2024-03-01"), None);
    schedule.assign("B", day("2024-03-02"), Some(Shift::Evening));
    schedule
}

fn generating_room() -> Room {
    apply(&create_submitted_room(), Command::BeginGeneration)
        .unwrap()
        .new_room
}

fn complete_room() -> Room {
    let generated: GeneratedSchedule = GeneratedSchedule {
        schedule: stub_schedule(),
        notes: String::from("balanced"),
    };
    apply(&generating_room(), Command::CompleteGeneration(generated))
        .unwrap()
        .new_room
}

// ============================================================================
// Begin generation
// ============================================================================

#[test]
fn test_begin_generation_moves_to_generating_and_returns_problem() {
    let room: Room = create_submitted_room();

    let result: TransitionResult = apply(&room, Command::BeginGeneration).unwrap();

    assert_eq!(result.new_room.status, RoomStatus::Generating);
    assert_eq!(result.new_room.schedule, None);
    let TransitionOutcome::Problem(problem) = result.outcome else {
        panic!("expected a problem description");
    };
    let problem: SchedulingProblem = *problem;
    assert_eq!(problem.participants, vec!["A", "B"]);
    assert_eq!(problem.dates, vec![day("2024-03-01"), day("2024-03-02")]);
}

#[test]
fn test_begin_generation_rejected_while_submissions_pending() {
    let room: Room = create_test_room(&[("A", true), ("B", false), ("C", false)]);

    let result = apply(&room, Command::BeginGeneration);

    assert_eq!(
        result,
        Err(CoreError::SubmissionsPending {
            pending: vec![String::from("B"), String::from("C")]
        })
    );
    // The input snapshot is never touched.
    assert_eq!(room.status, RoomStatus::Collecting);
}

#[test]
fn test_begin_generation_rejected_without_participants() {
    let room: Room = create_test_room(&[]);
    assert_eq!(
        apply(&room, Command::BeginGeneration),
        Err(CoreError::NoParticipants)
    );
}

#[test]
fn test_begin_generation_counts_participating_admin() {
    let mut room: Room = create_test_room(&[]);
    room.admin.is_participant = true;

    let result: TransitionResult = apply(&room, Command::BeginGeneration).unwrap();
    assert_eq!(result.new_room.status, RoomStatus::Generating);
}

#[test]
fn test_begin_generation_rejected_when_not_collecting() {
    let room: Room = generating_room();
    assert_eq!(
        apply(&room, Command::BeginGeneration),
        Err(CoreError::InvalidTransition {
            from: RoomStatus::Generating,
            to: RoomStatus::Generating,
        })
    );

    let room: Room = complete_room();
    assert!(matches!(
        apply(&room, Command::BeginGeneration),
        Err(CoreError::InvalidTransition { .. })
    ));
}

// ============================================================================
// Complete / fail generation
// ============================================================================

#[test]
fn test_complete_generation_stores_exact_schedule() {
    let room: Room = complete_room();

    assert_eq!(room.status, RoomStatus::Complete);
    assert_eq!(room.schedule, Some(stub_schedule()));
    assert_eq!(room.ai_notes.as_deref(), Some("balanced"));
}

#[test]
fn test_complete_generation_rejects_unknown_participant() {
    let mut schedule: Schedule = stub_schedule();
    schedule.assign("Mallory", day("2024-03-01"), Some(Shift::Noon));
    let generated: GeneratedSchedule = GeneratedSchedule {
        schedule,
        notes: String::new(),
    };

    let result = apply(&generating_room(), Command::CompleteGeneration(generated));

    assert_eq!(
        result,
        Err(CoreError::InvalidSchedule(DomainError::UnknownParticipant {
            name: String::from("Mallory")
        }))
    );
}

#[test]
fn test_complete_generation_requires_generating() {
    let generated: GeneratedSchedule = GeneratedSchedule {
        schedule: stub_schedule(),
        notes: String::new(),
    };
    let result = apply(
        &create_submitted_room(),
        Command::CompleteGeneration(generated),
    );
    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
}

#[test]
fn test_fail_generation_reverts_to_collecting() {
    let result: TransitionResult = apply(&generating_room(), Command::FailGeneration).unwrap();

    assert_eq!(result.new_room.status, RoomStatus::Collecting);
    assert_eq!(result.new_room.schedule, None);
    assert_eq!(result.new_room.ai_notes, None);
    assert!(result.new_room.all_submitted());
}

#[test]
fn test_fail_generation_requires_generating() {
    assert!(matches!(
        apply(&create_submitted_room(), Command::FailGeneration),
        Err(CoreError::InvalidTransition { .. })
    ));
}

// ============================================================================
// Restart
// ============================================================================

#[test]
fn test_restart_clears_schedule_notes_and_submissions() {
    let room: Room = complete_room();

    let result: TransitionResult = apply(&room, Command::Restart).unwrap();

    assert_eq!(result.new_room.status, RoomStatus::Collecting);
    assert_eq!(result.new_room.schedule, None);
    assert_eq!(result.new_room.ai_notes, None);
    assert!(result.new_room.pharmacists.iter().all(|p| !p.submitted));
    assert_eq!(result.new_room.pharmacists.len(), 2);
}

#[test]
fn test_restart_keeps_preferences_and_constraints() {
    let mut room: Room = complete_room();
    room.pharmacists[0]
        .preferences
        .entry(day("2024-03-01"))
        .or_default()
        .insert(Shift::Noon, Preference::Unavailable);
    room.constraints
        .insert(day("2024-03-02"), DayConstraint::default());

    let restarted: Room = apply(&room, Command::Restart).unwrap().new_room;

    assert_eq!(restarted.pharmacists[0].preferences, room.pharmacists[0].preferences);
    assert_eq!(restarted.constraints, room.constraints);
}

#[test]
fn test_restart_only_from_complete() {
    for room in [create_submitted_room(), generating_room()] {
        assert!(matches!(
            apply(&room, Command::Restart),
            Err(CoreError::InvalidTransition { .. })
        ));
    }
}
