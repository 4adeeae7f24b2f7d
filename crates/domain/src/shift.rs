// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift kinds and participant preferences.
//!
//! The set of shifts is closed. Adding a shift means touching every
//! `match` on [`Shift`] and every [`PerShift`] table, which the compiler
//! enforces.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the three fixed daily work periods.
///
/// The serialized form is the single-letter symbol used on the schedule grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    #[serde(rename = "ص")]
    Morning,
    #[serde(rename = "ن")]
    Noon,
    #[serde(rename = "م")]
    Evening,
}

impl Shift {
    /// Every shift, in the order of the day.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Noon, Self::Evening];

    /// Returns the grid symbol for this shift.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Morning => "ص",
            Self::Noon => "ن",
            Self::Evening => "م",
        }
    }

    /// Returns an English label, used in logs and prompts.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Noon => "Noon",
            Self::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Shift {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ص" | "Morning" | "morning" => Ok(Self::Morning),
            "ن" | "Noon" | "noon" => Ok(Self::Noon),
            "م" | "Evening" | "evening" => Ok(Self::Evening),
            _ => Err(DomainError::InvalidShift(s.to_string())),
        }
    }
}

/// A value held for each of the three shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerShift<T> {
    #[serde(rename = "ص")]
    pub morning: T,
    #[serde(rename = "ن")]
    pub noon: T,
    #[serde(rename = "م")]
    pub evening: T,
}

impl<T> PerShift<T> {
    /// Builds a table by evaluating `f` for every shift.
    pub fn from_fn(mut f: impl FnMut(Shift) -> T) -> Self {
        Self {
            morning: f(Shift::Morning),
            noon: f(Shift::Noon),
            evening: f(Shift::Evening),
        }
    }

    /// Returns the value for `shift`.
    #[must_use]
    pub const fn get(&self, shift: Shift) -> &T {
        match shift {
            Shift::Morning => &self.morning,
            Shift::Noon => &self.noon,
            Shift::Evening => &self.evening,
        }
    }

    /// Returns the value for `shift` mutably.
    pub const fn get_mut(&mut self, shift: Shift) -> &mut T {
        match shift {
            Shift::Morning => &mut self.morning,
            Shift::Noon => &mut self.noon,
            Shift::Evening => &mut self.evening,
        }
    }

    /// Iterates `(shift, value)` pairs in shift order.
    pub fn iter(&self) -> impl Iterator<Item = (Shift, &T)> {
        Shift::ALL.into_iter().map(move |shift| (shift, self.get(shift)))
    }
}

/// A participant's stated willingness to work a given shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Can be scheduled. Unset entries mean this.
    #[default]
    Available,
    /// Would rather not work, but can if needed.
    PreferredOff,
    /// Must not be scheduled.
    Unavailable,
}

impl Preference {
    /// Returns the string representation used in storage and prompts.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::PreferredOff => "preferred_off",
            Self::Unavailable => "unavailable",
        }
    }

    /// Advances through `Available -> PreferredOff -> Unavailable -> Available`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Available => Self::PreferredOff,
            Self::PreferredOff => Self::Unavailable,
            Self::Unavailable => Self::Available,
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Preference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "preferred_off" => Ok(Self::PreferredOff),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(DomainError::InvalidPreference(s.to_string())),
        }
    }
}
