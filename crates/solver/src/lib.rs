// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The external solver: schedule generation, fairness review, swap
//! suggestions and scheduling tips.
//!
//! [`Solver`] is the seam the rest of the workspace depends on.
//! [`GeminiSolver`] implements it over HTTP; tests supply their own stubs.

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
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod gemini;
mod parse;
pub mod prompt;
mod solver;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_ASSISTANT_MODEL, DEFAULT_BASE_URL, DEFAULT_RESPONSE_LANGUAGE, DEFAULT_SCHEDULE_MODEL,
    DEFAULT_THINKING_BUDGET, SolverConfig,
};
pub use error::SolverError;
pub use gemini::GeminiSolver;
pub use parse::parse_schedule_reply;
pub use solver::{Citation, SchedulingTips, Solver};
