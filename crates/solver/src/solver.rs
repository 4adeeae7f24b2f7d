// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shift_room::{GeneratedSchedule, SchedulingProblem, SwapContext};
use shift_room_domain::Schedule;

use crate::error::SolverError;

/// A source cited by the tips answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub url: String,
}

/// General scheduling advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingTips {
    pub text: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// The external collaborator that builds and reviews schedules.
///
/// Every call is a single request/response with no streaming.
#[async_trait]
pub trait Solver: Send + Sync {
    /// Produces a schedule for `problem`.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the reply is not a well-formed schedule.
    async fn generate_schedule(
        &self,
        problem: &SchedulingProblem,
    ) -> Result<GeneratedSchedule, SolverError>;

    /// Summarizes how evenly `schedule` spreads the work.
    ///
    /// # Errors
    ///
    /// Fails if the call fails.
    async fn analyze_fairness(&self, schedule: &Schedule) -> Result<String, SolverError>;

    /// Recommends who could take over one assigned shift.
    ///
    /// # Errors
    ///
    /// Fails if the call fails.
    async fn suggest_swap(&self, context: &SwapContext) -> Result<String, SolverError>;

    /// Returns general scheduling tips with their sources.
    ///
    /// # Errors
    ///
    /// Fails if the call fails.
    async fn scheduling_tips(&self) -> Result<SchedulingTips, SolverError>;
}
