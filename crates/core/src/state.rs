// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::problem::SchedulingProblem;
use shift_room_domain::{Preference, Room};

/// The result of a successful room transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new room snapshot after the transition.
    pub new_room: Room,
    /// What the transition produced besides the new snapshot.
    pub outcome: TransitionOutcome,
}

/// Extra output of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Nothing beyond the new room.
    Updated,
    /// The new value of a cycled preference.
    Preference(Preference),
    /// The problem to hand to the solver after `BeginGeneration`.
    Problem(Box<SchedulingProblem>),
}
