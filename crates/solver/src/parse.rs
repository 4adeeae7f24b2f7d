// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Deserialize;
use shift_room::GeneratedSchedule;
use shift_room_domain::Schedule;

use crate::error::SolverError;

#[derive(Deserialize)]
struct ScheduleReply {
    schedule: Schedule,
    notes: String,
}

/// Removes a surrounding markdown code fence, if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed: &str = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body: &str = body.strip_suffix("```").unwrap_or(body);
    // Drop an info string such as `json` on the opening line.
    match body.split_once('\n') {
        Some((info, rest)) if !info.trim_start().starts_with('{') => rest.trim(),
        _ => body.trim(),
    }
}

/// Parses a schedule generation reply.
///
/// The reply must be a JSON object with a `schedule` object (name to date to
/// shift symbol or null) and a `notes` string. Anything else is rejected as a
/// whole.
///
/// # Errors
///
/// Returns `SolverError::EmptyResponse` for blank text and
/// `SolverError::MalformedSchedule` for any other shape.
pub fn parse_schedule_reply(text: &str) -> Result<GeneratedSchedule, SolverError> {
    let body: &str = strip_code_fence(text);
    if body.is_empty() {
        return Err(SolverError::EmptyResponse);
    }
    let reply: ScheduleReply =
        serde_json::from_str(body).map_err(|e| SolverError::MalformedSchedule(e.to_string()))?;
    Ok(GeneratedSchedule {
        schedule: reply.schedule,
        notes: reply.notes,
    })
}
