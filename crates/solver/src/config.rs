// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Default Generative Language API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for schedule generation and fairness review.
pub const DEFAULT_SCHEDULE_MODEL: &str = "gemini-2.5-pro";
/// Model used for swap suggestions and tips.
pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-2.5-flash";
/// Language requested for notes, analyses and tips.
pub const DEFAULT_RESPONSE_LANGUAGE: &str = "Arabic";
/// Reasoning token budget for the schedule model.
pub const DEFAULT_THINKING_BUDGET: u32 = 32_768;

/// Settings for [`crate::GeminiSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub api_key: String,
    pub base_url: String,
    pub schedule_model: String,
    pub assistant_model: String,
    pub response_language: String,
    pub thinking_budget: u32,
}

impl SolverConfig {
    /// Creates a configuration with default models for `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            schedule_model: DEFAULT_SCHEDULE_MODEL.to_string(),
            assistant_model: DEFAULT_ASSISTANT_MODEL.to_string(),
            response_language: DEFAULT_RESPONSE_LANGUAGE.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
        }
    }
}
