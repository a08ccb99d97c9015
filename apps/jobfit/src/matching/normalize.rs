//! Coerces whatever the backend sent into a safe `MatchResult`.
//!
//! Scores are clamped to [0, 100]. Anything that cannot be read as a finite
//! number becomes 0 and is logged, never shown to the user.

use serde_json::Value;
use tracing::warn;

use crate::models::match_result::{BackendMatchResponse, MatchResult, ReportRequest};

pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedScore {
    /// Clamped score in [0, 100].
    pub score: f64,
    /// True when a value was present but could not be coerced.
    pub malformed: bool,
}

/// Coerces a raw score. A missing field is a plain zero, not a malformed one.
pub fn normalize_score(raw: Option<&Value>) -> NormalizedScore {
    let Some(raw) = raw else {
        return NormalizedScore {
            score: 0.0,
            malformed: false,
        };
    };

    match coerce_number(raw) {
        Some(value) => {
            // `+ 0.0` folds -0.0 so it never displays as "-0".
            let score = value.clamp(0.0, MAX_SCORE) + 0.0;
            NormalizedScore {
                score,
                malformed: false,
            }
        }
        None => NormalizedScore {
            score: 0.0,
            malformed: true,
        },
    }
}

/// Progress ratio in [0, 1] for a score.
pub fn ratio_of(score: f64) -> f64 {
    score.clamp(0.0, MAX_SCORE) / MAX_SCORE
}

fn coerce_number(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Validates a backend response once, at the client boundary.
pub fn normalize_response(raw: BackendMatchResponse) -> MatchResult {
    MatchResult {
        match_score: checked_score(raw.match_score.as_ref()),
        matched_skills: raw.common_skills,
        missing_skills: raw.missing_skills,
    }
}

pub fn normalize_report_request(raw: ReportRequest) -> MatchResult {
    MatchResult {
        match_score: checked_score(raw.match_score.as_ref()),
        matched_skills: raw.matched_skills,
        missing_skills: raw.missing_skills,
    }
}

fn checked_score(raw: Option<&Value>) -> f64 {
    let normalized = normalize_score(raw);
    if normalized.malformed {
        warn!("Malformed match score {:?}; using 0", raw);
    }
    normalized.score
}

/// Formats a score the way it is displayed: `87`, `87.5`, `87.25`.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        let fixed = format!("{score:.2}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
