// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The room entity graph.
//!
//! A [`Room`] is the only unit of persistence. Participants, constraints and
//! the generated schedule are owned by it and serialized with it.

use crate::constraint::DayConstraint;
use crate::day::{DateRange, Day};
use crate::error::DomainError;
use crate::schedule::Schedule;
use crate::shift::{Preference, Shift};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Opaque room identifier, also the storage key suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Wraps an identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Participants are entering preferences. Initial state.
    #[default]
    Collecting,
    /// A solver request is outstanding.
    Generating,
    /// A schedule has been generated.
    Complete,
}

impl RoomStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collecting => "collecting",
            Self::Generating => "generating",
            Self::Complete => "complete",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - `collecting` → `generating`
    /// - `generating` → `complete`
    /// - `generating` → `collecting` (solver failure)
    /// - `complete` → `collecting` (restart)
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Collecting, Self::Generating)
                | (Self::Generating, Self::Complete | Self::Collecting)
                | (Self::Complete, Self::Collecting)
        )
    }

    /// Returns whether preferences and constraints may be edited.
    #[must_use]
    pub const fn allows_editing(&self) -> bool {
        matches!(self, Self::Collecting)
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collecting" => Ok(Self::Collecting),
            "generating" => Ok(Self::Generating),
            "complete" => Ok(Self::Complete),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

/// The room administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub name: String,
    /// One-way digest of the admin password.
    pub password_digest: String,
    /// Whether the admin also works shifts and appears on the schedule.
    pub is_participant: bool,
}

/// Per-day, per-shift preferences. Missing entries mean [`Preference::Available`].
pub type PreferenceMap = BTreeMap<Day, BTreeMap<Shift, Preference>>;

/// One participant's submission state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmacist {
    /// Unique within the room; acts as the identity key.
    pub name: String,
    #[serde(default)]
    pub preferences: PreferenceMap,
    #[serde(default)]
    pub submitted: bool,
}

impl Pharmacist {
    /// Creates a participant with no preferences who has not submitted.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
            submitted: false,
        }
    }

    /// Returns the preference for `(day, shift)`, defaulting to available.
    #[must_use]
    pub fn preference(&self, day: Day, shift: Shift) -> Preference {
        self.preferences
            .get(&day)
            .and_then(|shifts| shifts.get(&shift))
            .copied()
            .unwrap_or_default()
    }
}

/// An isolated scheduling session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Shared join secret; `None` means the room is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub admin: AdminAccount,
    pub start_date: Day,
    pub end_date: Day,
    #[serde(default)]
    pub pharmacists: Vec<Pharmacist>,
    /// Explicit per-day constraints. Missing days use [`DayConstraint::default`].
    #[serde(default)]
    pub constraints: BTreeMap<Day, DayConstraint>,
    pub status: RoomStatus,
    pub schedule: Option<Schedule>,
    pub ai_notes: Option<String>,
}

impl Room {
    /// Returns the room's inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bounds are inverted.
    pub fn date_range(&self) -> Result<DateRange, DomainError> {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Returns every day of the room in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bounds are inverted.
    pub fn dates(&self) -> Result<Vec<Day>, DomainError> {
        Ok(self.date_range()?.days().collect())
    }

    /// Returns the constraint for `day`, or the implicit default.
    #[must_use]
    pub fn constraint_for(&self, day: Day) -> DayConstraint {
        self.constraints.get(&day).copied().unwrap_or_default()
    }

    /// Looks up a participant by name.
    #[must_use]
    pub fn pharmacist(&self, name: &str) -> Option<&Pharmacist> {
        self.pharmacists.iter().find(|p| p.name == name)
    }

    /// Returns true if `name` is the admin's name.
    #[must_use]
    pub fn is_admin(&self, name: &str) -> bool {
        self.admin.name == name
    }

    /// Returns true if every participant has submitted.
    #[must_use]
    pub fn all_submitted(&self) -> bool {
        self.pharmacists.iter().all(|p| p.submitted)
    }

    /// Names of everyone to be scheduled: the pharmacists in order, then the
    /// participating admin when not already listed.
    #[must_use]
    pub fn participant_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.pharmacists.iter().map(|p| p.name.clone()).collect();
        if self.admin.is_participant && !names.contains(&self.admin.name) {
            names.push(self.admin.name.clone());
        }
        names
    }

    /// Names shown on the schedule grid: the participating admin first,
    /// then the other pharmacists.
    #[must_use]
    pub fn schedule_personnel(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.pharmacists.len() + 1);
        if self.admin.is_participant {
            names.push(self.admin.name.clone());
        }
        for pharmacist in &self.pharmacists {
            if !names.contains(&pharmacist.name) {
                names.push(pharmacist.name.clone());
            }
        }
        names
    }

    /// Returns the preference of `name` for `(day, shift)`.
    ///
    /// Anyone without a stored entry (including a participating admin who
    /// never edited) is available everywhere.
    #[must_use]
    pub fn preference_of(&self, name: &str, day: Day, shift: Shift) -> Preference {
        self.pharmacist(name)
            .map(|p| p.preference(day, shift))
            .unwrap_or_default()
    }
}
