use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::matching::normalize::ratio_of;

/// Normalized outcome of one match request.
///
/// `match_score` is always within [0, 100]; construct it through
/// `matching::normalize` rather than by hand when the value came off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

impl MatchResult {
    /// The zeroed result shown when the backend call fails.
    pub fn degraded() -> Self {
        Self::default()
    }

    /// Progress-bar ratio in [0, 1].
    pub fn ratio(&self) -> f64 {
        ratio_of(self.match_score)
    }
}

/// Wire schema of the remote match endpoint's success body.
///
/// Every field is optional. `match_score` is kept as a raw JSON value so the
/// normalizer can decide how to coerce it.
#[derive(Debug, Default, Deserialize)]
pub struct BackendMatchResponse {
    #[serde(default)]
    pub match_score: Option<Value>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub common_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub missing_skills: Vec<String>,
}

/// Body accepted by the report endpoint. Same shape as `MatchResult`, but the
/// score goes through normalization again since it comes from a client.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub match_score: Option<Value>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub matched_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub missing_skills: Vec<String>,
}

/// Accepts `null`, a non-array, or an array of mixed scalars.
/// Strings pass through, numbers and booleans are stringified, anything else is dropped.
fn lenient_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect())
}
