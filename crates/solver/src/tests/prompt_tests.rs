// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_room::{SwapContext, build_swap_context};
use shift_room_domain::{Room, RoomStatus, Schedule, Shift};

use super::helpers::{create_test_problem, create_test_room, day};
use crate::prompt::{fairness_prompt, schedule_prompt, swap_prompt, tips_prompt};

#[test]
fn test_schedule_prompt_lists_inputs() {
    let prompt: String = schedule_prompt(&create_test_problem(), "Arabic");

    assert!(prompt.contains("A, B"));
    assert!(prompt.contains("From 2024-03-01 to 2024-03-02"));
    assert!(prompt.contains("- 2024-03-01: ص (min: 1, max: 1), ن (min: 1, max: 1), م (min: 1, max: 1)"));
    assert!(prompt.contains("- 2024-03-02: Holiday (no shifts)"));
    assert!(prompt.contains("- 2024-03-01: م: unavailable"));
    assert!(prompt.contains("observations in Arabic"));
}

#[test]
fn test_schedule_prompt_marks_participants_without_preferences() {
    let prompt: String = schedule_prompt(&create_test_problem(), "English");

    let b_section: &str = prompt.split("Pharmacist: B").nth(1).unwrap();
    assert!(b_section.starts_with("\n- No specific preferences submitted."));
    assert!(prompt.contains("observations in English"));
}

#[test]
fn test_fairness_prompt_includes_figures() {
    let mut schedule: Schedule = Schedule::new();
    schedule.assign("A", day("2024-03-01"), Some(Shift::Evening));
    schedule.assign("A", day("2024-03-02"), Some(Shift::Morning));

    let prompt: String = fairness_prompt(&schedule, "Arabic");

    assert!(prompt.contains("- A: 2 shifts, 1 evening, longest streak 2 days"));
    assert!(prompt.contains("\"2024-03-01\": \"م\""));
}

#[test]
fn test_swap_prompt_names_the_shift() {
    let mut room: Room = create_test_room();
    let mut schedule: Schedule = Schedule::new();
    schedule.assign("A", day("2024-03-01"), Some(Shift::Noon));
    room.schedule = Some(schedule);
    room.status = RoomStatus::Complete;
    let context: SwapContext =
        build_swap_context(&room, "A", day("2024-03-01"), Shift::Noon).unwrap();

    let prompt: String = swap_prompt(&context, "Arabic");

    assert!(prompt.starts_with("Pharmacist 'A' wants to swap their 'ن' shift on 2024-03-01."));
    assert!(prompt.contains("recommendation in Arabic"));
}

#[test]
fn test_tips_prompt_language() {
    assert!(tips_prompt("French").contains("tips in French"));
}
