// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Day, Schedule, Shift, WorkloadSummary};

fn day(s: &str) -> Day {
    Day::parse(s).unwrap()
}

#[test]
fn test_schedule_json_shape_uses_shift_symbols_and_null() {
    let mut schedule: Schedule = Schedule::new();
    schedule.assign("A", day("2024-03-01"), Some(Shift::Morning));
    schedule.assign("A", day("2024-03-02"), None);

    let json: serde_json::Value = serde_json::to_value(&schedule).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "A": { "2024-03-01": "ص", "2024-03-02": null } })
    );
}

#[test]
fn test_schedule_assignment_lookup() {
    let mut schedule: Schedule = Schedule::new();
    schedule.assign("A", day("2024-03-01"), Some(Shift::Noon));
    schedule.assign("A", day("2024-03-02"), None);

    assert_eq!(schedule.assignment("A", day("2024-03-01")), Some(Shift::Noon));
    assert_eq!(schedule.assignment("A", day("2024-03-02")), None);
    assert_eq!(schedule.assignment("B", day("2024-03-01")), None);
}

#[test]
fn test_workload_summary_counts_shifts_and_streaks() {
    let mut schedule: Schedule = Schedule::new();
    schedule.assign("A", day("2024-03-01"), Some(Shift::Morning));
    schedule.assign("A", day("2024-03-02"), Some(Shift::Evening));
    schedule.assign("A", day("2024-03-03"), Some(Shift::Evening));
    schedule.assign("A", day("2024-03-04"), None);
    schedule.assign("A", day("2024-03-05"), Some(Shift::Noon));
    // Gap in the row: the 7th does not continue the run ending on the 5th.
    schedule.assign("A", day("2024-03-07"), Some(Shift::Noon));

    let summary: Vec<WorkloadSummary> = schedule.summary();
    assert_eq!(
        summary,
        vec![WorkloadSummary {
            name: String::from("A"),
            total_shifts: 5,
            evening_shifts: 2,
            longest_streak: 3,
        }]
    );
}
