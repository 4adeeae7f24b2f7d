// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The solver's assignment of shifts to participants.

use crate::day::Day;
use crate::shift::Shift;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One participant's row: the assigned shift for each day, `None` for a day off.
pub type ScheduleRow = BTreeMap<Day, Option<Shift>>;

/// Participant name to assigned shift (or day off) per day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(BTreeMap<String, ScheduleRow>);

impl Schedule {
    /// Creates an empty schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets the assignment for `name` on `day`.
    pub fn assign(&mut self, name: &str, day: Day, shift: Option<Shift>) {
        self.0.entry(name.to_string()).or_default().insert(day, shift);
    }

    /// Returns the assignment for `name` on `day`; `None` if off or absent.
    #[must_use]
    pub fn assignment(&self, name: &str, day: Day) -> Option<Shift> {
        self.0.get(name).and_then(|row| row.get(&day).copied().flatten())
    }

    /// Returns the row for one participant.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&ScheduleRow> {
        self.0.get(name)
    }

    /// Iterates over `(name, row)` pairs in name order.
    pub fn rows(&self) -> impl Iterator<Item = (&String, &ScheduleRow)> {
        self.0.iter()
    }

    /// Number of participants with a row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nobody has a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Computes per-participant workload figures.
    #[must_use]
    pub fn summary(&self) -> Vec<WorkloadSummary> {
        self.0
            .iter()
            .map(|(name, row)| WorkloadSummary::from_row(name, row))
            .collect()
    }
}

impl From<BTreeMap<String, ScheduleRow>> for Schedule {
    fn from(rows: BTreeMap<String, ScheduleRow>) -> Self {
        Self(rows)
    }
}

/// Workload figures for one participant, as used by fairness reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSummary {
    pub name: String,
    pub total_shifts: usize,
    pub evening_shifts: usize,
    /// Longest run of consecutive calendar days with a shift.
    pub longest_streak: usize,
}

impl WorkloadSummary {
    fn from_row(name: &str, row: &ScheduleRow) -> Self {
        let mut total_shifts: usize = 0;
        let mut evening_shifts: usize = 0;
        let mut longest_streak: usize = 0;
        let mut streak: usize = 0;
        let mut previous_worked: Option<Day> = None;

        for (day, shift) in row {
            let Some(shift) = shift else {
                streak = 0;
                continue;
            };
            total_shifts += 1;
            if *shift == Shift::Evening {
                evening_shifts += 1;
            }
            // Rows may skip days; only adjacent calendar days extend a streak.
            streak = match previous_worked {
                Some(prev) if prev.next() == Some(*day) && streak > 0 => streak + 1,
                _ => 1,
            };
            previous_worked = Some(*day);
            longest_streak = longest_streak.max(streak);
        }

        Self {
            name: name.to_string(),
            total_shifts,
            evening_shifts,
            longest_streak,
        }
    }
}
