// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors produced while talking to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The HTTP request could not be sent or its body read.
    #[error("Solver request failed: {0}")]
    Request(String),
    /// The service answered with a non-success status.
    #[error("Solver returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    /// The service answered without any text.
    #[error("Solver returned an empty response")]
    EmptyResponse,
    /// The generated schedule does not have the expected shape.
    #[error("Failed to parse schedule from solver response: {0}")]
    MalformedSchedule(String),
    /// No API key was configured.
    #[error("No solver API key configured")]
    MissingApiKey,
}

impl From<reqwest::Error> for SolverError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}
