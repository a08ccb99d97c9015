//! View model for the Demo result panel. Pure data; `templates` turns it into HTML.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::matching::normalize::format_score;
use crate::matching::AnalysisOutcome;
use crate::report::REPORT_CONTENT_TYPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTone {
    Positive,
    Negative,
}

impl SkillTone {
    pub fn color(self) -> &'static str {
        match self {
            SkillTone::Positive => "lightgreen",
            SkillTone::Negative => "#FF6666",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SkillTone::Positive => "skill skill-positive",
            SkillTone::Negative => "skill skill-negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledSkill {
    pub text: String,
    pub tone: SkillTone,
}

#[derive(Debug, Clone)]
pub struct ResultView {
    /// Progress ratio in [0, 1].
    pub ratio: f64,
    /// Display score without the percent sign, e.g. `87`.
    pub score_label: String,
    pub matched: Vec<StyledSkill>,
    pub missing: Vec<StyledSkill>,
    /// Inline error when the result is the degraded one.
    pub error: Option<String>,
    /// `data:` URL carrying the PDF report.
    pub report_href: String,
}

impl ResultView {
    pub fn new(outcome: &AnalysisOutcome, report: &[u8]) -> Self {
        let result = &outcome.result;
        Self {
            ratio: result.ratio(),
            score_label: format_score(result.match_score),
            matched: styled(&result.matched_skills, SkillTone::Positive),
            missing: styled(&result.missing_skills, SkillTone::Negative),
            error: outcome.error.as_ref().map(|e| e.to_string()),
            report_href: format!(
                "data:{REPORT_CONTENT_TYPE};base64,{}",
                STANDARD.encode(report)
            ),
        }
    }
}

fn styled(skills: &[String], tone: SkillTone) -> Vec<StyledSkill> {
    skills
        .iter()
        .map(|s| StyledSkill {
            text: s.clone(),
            tone,
        })
        .collect()
}

/// What the Demo page shows under the form.
#[derive(Debug, Clone)]
pub enum DemoPanel {
    /// Submission blocked before any backend call.
    Warning(String),
    Result(ResultView),
}
