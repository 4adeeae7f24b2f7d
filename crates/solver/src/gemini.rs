// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! [`Solver`] backed by the Gemini `generateContent` REST endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shift_room::{GeneratedSchedule, SchedulingProblem, SwapContext};
use shift_room_domain::Schedule;
use tracing::{debug, error, info};

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::parse::parse_schedule_reply;
use crate::prompt;
use crate::solver::{Citation, SchedulingTips, Solver};

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
    /// Set on reasoning summaries, which are not part of the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    #[must_use]
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some(String::from("user")),
                parts: vec![Part {
                    text: Some(prompt),
                    thought: None,
                }],
            }],
            generation_config: None,
            tools: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSource {
    pub uri: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated answer text of the first candidate.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content: &Content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Web sources the first candidate was grounded on, without duplicates.
    #[must_use]
    pub fn citations(&self) -> Vec<Citation> {
        let mut citations: Vec<Citation> = Vec::new();
        let chunks = self
            .candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| metadata.grounding_chunks.as_slice())
            .unwrap_or_default();
        for web in chunks.iter().filter_map(|chunk| chunk.web.as_ref()) {
            if citations.iter().any(|c| c.url == web.uri) {
                continue;
            }
            citations.push(Citation {
                title: web.title.clone().unwrap_or_else(|| web.uri.clone()),
                url: web.uri.clone(),
            });
        }
        citations
    }
}

/// Talks to the Gemini API over HTTPS.
pub struct GeminiSolver {
    config: SolverConfig,
    client: Client,
}

impl GeminiSolver {
    /// Creates a solver with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be built.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        let client: Client = Client::builder().build()?;
        Self::with_client(config, client)
    }

    /// Creates a solver sharing an existing HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn with_client(config: SolverConfig, client: Client) -> Result<Self, SolverError> {
        if config.api_key.trim().is_empty() {
            return Err(SolverError::MissingApiKey);
        }
        Ok(Self { config, client })
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn call(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, SolverError> {
        debug!(model, "Calling generateContent");
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response.text().await.unwrap_or_default();
            error!(model, status = status.as_u16(), "Solver request rejected");
            return Err(SolverError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }

    async fn call_for_text(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, SolverError> {
        self.call(model, request)
            .await?
            .text()
            .ok_or(SolverError::EmptyResponse)
    }

    const fn thinking(&self) -> ThinkingConfig {
        ThinkingConfig {
            thinking_budget: self.config.thinking_budget,
        }
    }
}

#[async_trait]
impl Solver for GeminiSolver {
    async fn generate_schedule(
        &self,
        problem: &SchedulingProblem,
    ) -> Result<GeneratedSchedule, SolverError> {
        info!(
            participants = problem.participants.len(),
            days = problem.dates.len(),
            "Requesting schedule"
        );
        let mut request = GenerateContentRequest::from_prompt(prompt::schedule_prompt(
            problem,
            &self.config.response_language,
        ));
        request.generation_config = Some(GenerationConfig {
            response_mime_type: Some(JSON_MIME_TYPE),
            thinking_config: Some(self.thinking()),
        });

        let text: String = self
            .call_for_text(&self.config.schedule_model, &request)
            .await?;
        parse_schedule_reply(&text).inspect_err(|err| {
            error!(error = %err, "Solver reply is not a valid schedule");
        })
    }

    async fn analyze_fairness(&self, schedule: &Schedule) -> Result<String, SolverError> {
        let mut request = GenerateContentRequest::from_prompt(prompt::fairness_prompt(
            schedule,
            &self.config.response_language,
        ));
        request.generation_config = Some(GenerationConfig {
            response_mime_type: None,
            thinking_config: Some(self.thinking()),
        });
        self.call_for_text(&self.config.schedule_model, &request)
            .await
    }

    async fn suggest_swap(&self, context: &SwapContext) -> Result<String, SolverError> {
        let request = GenerateContentRequest::from_prompt(prompt::swap_prompt(
            context,
            &self.config.response_language,
        ));
        self.call_for_text(&self.config.assistant_model, &request)
            .await
    }

    async fn scheduling_tips(&self) -> Result<SchedulingTips, SolverError> {
        let mut request = GenerateContentRequest::from_prompt(prompt::tips_prompt(
            &self.config.response_language,
        ));
        request.tools = vec![Tool {
            google_search: GoogleSearch {},
        }];

        let response = self.call(&self.config.assistant_model, &request).await?;
        let text: String = response.text().ok_or(SolverError::EmptyResponse)?;
        Ok(SchedulingTips {
            text,
            citations: response.citations(),
        })
    }
}
