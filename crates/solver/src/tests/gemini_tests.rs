// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_problem;
use crate::gemini::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleSearch,
    ThinkingConfig, Tool,
};
use crate::{Citation, GeminiSolver, Solver, SolverConfig, SolverError};

#[test]
fn test_request_body_shape() {
    let mut request = GenerateContentRequest::from_prompt(String::from("hello"));
    request.generation_config = Some(GenerationConfig {
        response_mime_type: Some("application/json"),
        thinking_config: Some(ThinkingConfig {
            thinking_budget: 32_768,
        }),
    });

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    assert_eq!(
        json["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(
        json["generationConfig"]["thinkingConfig"]["thinkingBudget"],
        32_768
    );
    assert!(json.get("tools").is_none());
}

#[test]
fn test_search_tool_serialization() {
    let mut request = GenerateContentRequest::from_prompt(String::from("tips"));
    request.tools = vec![Tool {
        google_search: GoogleSearch {},
    }];

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["tools"][0]["googleSearch"], serde_json::json!({}));
    assert!(json.get("generationConfig").is_none());
}

#[test]
fn test_response_text_skips_thoughts() {
    let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "thinking...", "thought": true},
                    {"text": "part one, "},
                    {"text": "part two"}
                ]
            }
        }]
    }))
    .unwrap();

    assert_eq!(response.text().as_deref(), Some("part one, part two"));
}

#[test]
fn test_response_without_candidates_has_no_text() {
    let response: GenerateContentResponse =
        serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(response.text(), None);
    assert!(response.citations().is_empty());
}

#[test]
fn test_citations_from_grounding_chunks() {
    let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": "tips"}]},
            "groundingMetadata": {
                "groundingChunks": [
                    {"web": {"uri": "https://a.example/1", "title": "First"}},
                    {"web": {"uri": "https://a.example/1", "title": "First again"}},
                    {"web": {"uri": "https://b.example/2"}},
                    {}
                ]
            }
        }]
    }))
    .unwrap();

    assert_eq!(
        response.citations(),
        vec![
            Citation {
                title: String::from("First"),
                url: String::from("https://a.example/1"),
            },
            Citation {
                title: String::from("https://b.example/2"),
                url: String::from("https://b.example/2"),
            },
        ]
    );
}

#[test]
fn test_missing_api_key_is_rejected() {
    assert!(matches!(
        GeminiSolver::new(SolverConfig::new("  ")),
        Err(SolverError::MissingApiKey)
    ));
}

#[test]
fn test_default_config() {
    let config: SolverConfig = SolverConfig::new("key");
    assert_eq!(config.schedule_model, "gemini-2.5-pro");
    assert_eq!(config.assistant_model, "gemini-2.5-flash");
    assert_eq!(config.response_language, "Arabic");
    assert_eq!(config.thinking_budget, 32_768);
}

#[tokio::test]
async fn test_unreachable_service_is_a_request_error() {
    let mut config: SolverConfig = SolverConfig::new("key");
    config.base_url = String::from("http://127.0.0.1:9");
    let solver: GeminiSolver = GeminiSolver::new(config).unwrap();

    let result = solver.generate_schedule(&create_test_problem()).await;

    assert!(matches!(result, Err(SolverError::Request(_))));
}
