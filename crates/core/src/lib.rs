// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod constraints;
mod error;
mod identity;
mod preferences;
mod problem;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use constraints::{Constraints, set_shift_bound, toggle_holiday};
pub use error::CoreError;
pub use identity::{Identity, JoinResult, Role, join, resolve_identity};
pub use preferences::{cycle_preference, submit, with_preference};
pub use problem::{
    DayRequirement, GeneratedSchedule, SchedulingProblem, SwapContext, build_problem,
    build_swap_context,
};
pub use state::{TransitionOutcome, TransitionResult};
