// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text prompts sent to the language model.

use std::collections::BTreeMap;

use shift_room::{DayRequirement, SchedulingProblem, SwapContext};
use shift_room_domain::{Day, PerShift, Preference, Schedule, Shift};

type PreferenceTable = BTreeMap<String, BTreeMap<Day, PerShift<Preference>>>;

fn requirement_line(day: Day, requirement: &DayRequirement) -> String {
    if requirement.is_holiday {
        return format!("- {day}: Holiday (no shifts)");
    }
    let shifts: Vec<String> = requirement
        .shifts
        .iter()
        .map(|(shift, bounds)| {
            format!("{shift} (min: {}, max: {})", bounds.min, bounds.max)
        })
        .collect();
    format!("- {day}: {}", shifts.join(", "))
}

/// Lists every participant's non-default preferences.
fn preference_lines(preferences: &PreferenceTable) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for (name, days) in preferences {
        lines.push(format!("Pharmacist: {name}"));
        let mut any = false;
        for (day, shifts) in days {
            let marked: Vec<String> = shifts
                .iter()
                .filter(|(_, preference)| **preference != Preference::Available)
                .map(|(shift, preference)| format!("{shift}: {preference}"))
                .collect();
            if !marked.is_empty() {
                any = true;
                lines.push(format!("- {day}: {}", marked.join(", ")));
            }
        }
        if !any {
            lines.push(String::from("- No specific preferences submitted."));
        }
    }
    lines
}

fn shift_symbols() -> String {
    Shift::ALL
        .iter()
        .map(|shift| format!("'{shift}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn pretty_schedule(schedule: &Schedule) -> String {
    serde_json::to_string_pretty(schedule).unwrap_or_default()
}

/// Builds the schedule generation prompt.
#[must_use]
pub fn schedule_prompt(problem: &SchedulingProblem, language: &str) -> String {
    let period: String = match (problem.dates.first(), problem.dates.last()) {
        (Some(first), Some(last)) => format!("From {first} to {last}"),
        _ => String::from("(empty)"),
    };
    let requirements: Vec<String> = problem
        .requirements
        .iter()
        .map(|(day, requirement)| requirement_line(*day, requirement))
        .collect();

    [
        String::from(
            "You are an expert scheduler for a hospital pharmacy. Your goal is to create the most fair and optimal schedule possible.",
        ),
        String::new(),
        String::from("CRITICAL INSTRUCTIONS:"),
        String::from(
            "1. Return ONLY a valid JSON object, with no text before or after it and no markdown fences.",
        ),
        String::from(
            "2. The JSON object must have two top-level keys: \"schedule\" and \"notes\".",
        ),
        format!(
            "3. \"schedule\" maps each pharmacist's name to an object whose keys are dates (YYYY-MM-DD) and whose values are the assigned shift ({}) or null for a day off.",
            shift_symbols()
        ),
        format!(
            "4. \"notes\" is a string with your observations in {language}, such as fairness assessments or unmet requirements."
        ),
        String::new(),
        String::from("SCHEDULING RULES:"),
        String::from(
            "- Staffing: schedule at least `min` pharmacists on every shift and never more than `max`. Meeting the minimum has the highest priority.",
        ),
        String::from(
            "- Availability: never schedule a pharmacist on a shift marked 'unavailable'.",
        ),
        String::from(
            "- Preferences: try to respect 'preferred_off', but fill every minimum first.",
        ),
        format!(
            "- Fairness: spread total shifts and evening shifts ('{}') as evenly as possible, and avoid more than 5 consecutive working days.",
            Shift::Evening
        ),
        String::from("- Each pharmacist works at most one shift per day."),
        String::new(),
        String::from("Pharmacists:"),
        problem.participants.join(", "),
        String::new(),
        String::from("Schedule period:"),
        period,
        String::new(),
        String::from("Shift requirements (min/max) and holidays:"),
        requirements.join("\n"),
        String::new(),
        String::from("Pharmacist preferences:"),
        preference_lines(&problem.preferences).join("\n"),
        String::new(),
        String::from("Now generate the schedule. Output ONLY the JSON object."),
    ]
    .join("\n")
}

/// Builds the fairness review prompt.
#[must_use]
pub fn fairness_prompt(schedule: &Schedule, language: &str) -> String {
    let figures: Vec<String> = schedule
        .summary()
        .iter()
        .map(|summary| {
            format!(
                "- {}: {} shifts, {} evening, longest streak {} days",
                summary.name, summary.total_shifts, summary.evening_shifts, summary.longest_streak
            )
        })
        .collect();

    [
        format!(
            "Analyze the following pharmacy schedule for fairness. Provide a concise summary in {language}."
        ),
        String::from("Consider for each person:"),
        String::from("1. Total number of shifts."),
        format!("2. Number of evening shifts ({}).", Shift::Evening),
        String::from("3. Longest streak of consecutive workdays."),
        String::from("Conclude with an overall fairness assessment."),
        String::new(),
        String::from("Precomputed figures:"),
        figures.join("\n"),
        String::new(),
        String::from("Schedule data:"),
        pretty_schedule(schedule),
    ]
    .join("\n")
}

/// Builds the swap suggestion prompt.
#[must_use]
pub fn swap_prompt(context: &SwapContext, language: &str) -> String {
    [
        format!(
            "Pharmacist '{}' wants to swap their '{}' shift on {}.",
            context.participant, context.shift, context.date
        ),
        String::from(
            "Based on the complete schedule and everyone's original preferences, who is the best person to swap with?",
        ),
        String::new(),
        String::from(
            "- A good candidate was 'available' on that day and has fewer total or evening shifts.",
        ),
        String::from("- Never suggest anyone who was 'unavailable'."),
        String::from(
            "- If nobody is suitable, explain why (for example, everyone else is unavailable or already working).",
        ),
        format!("- Give a concise recommendation in {language}."),
        String::new(),
        String::from("Current schedule:"),
        pretty_schedule(&context.schedule),
        String::new(),
        String::from("Original preferences:"),
        preference_lines(&context.preferences).join("\n"),
    ]
    .join("\n")
}

/// Builds the scheduling tips prompt.
#[must_use]
pub fn tips_prompt(language: &str) -> String {
    [
        format!(
            "Provide some tips in {language} for creating fair and effective pharmacy shift schedules."
        ),
        String::from("Focus on:"),
        String::from("- Minimizing burnout."),
        String::from("- Ensuring adequate coverage."),
        String::from("- Handling last-minute changes."),
        String::from("- Fairly distributing unpopular shifts."),
        String::from(
            "The answer should help a pharmacy manager in a hospital setting.",
        ),
    ]
    .join("\n")
}
