//! Wire types for the remote AI/ATS/interview service. Field names follow the
//! service's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
use crate::render::catalog::TemplateInfo;

pub const DEFAULT_TONE: &str = "professional";

// ────────────────────────────────────────────────────────────────────────────
// Writing assistance
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub full_name: String,
    pub title: String,
    pub skills: Vec<String>,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletsRequest {
    pub job_title: String,
    pub company: String,
    pub responsibilities: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulletsResponse {
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveBulletRequest {
    pub bullet_point: String,
    #[serde(default)]
    pub add_metrics: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarRequest {
    pub experience: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarResponse {
    #[serde(default)]
    pub star_bullets: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// ATS analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsRequest {
    pub resume_data: ResumeDocument,
    pub job_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub technical_skills: Option<f64>,
    pub experience: Option<f64>,
    pub keywords: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub category_scores: Option<CategoryScores>,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl AtsReport {
    /// `overallScore` when the service sends it, otherwise `score`.
    pub fn headline_score(&self) -> f64 {
        self.overall_score.or(self.score).unwrap_or(0.0)
    }
}

/// Coarse rating of a score against two thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    /// ATS percentages: 80 and up is strong, 60 and up fair.
    pub fn for_percent(score: f64) -> Self {
        Self::classify(score, 80.0, 60.0)
    }

    /// Interview answers scored out of 10: 7 and up strong, 5 and up fair.
    pub fn for_answer(score: f64) -> Self {
        Self::classify(score, 7.0, 5.0)
    }

    fn classify(score: f64, strong: f64, fair: f64) -> Self {
        if score >= strong {
            ScoreBand::Strong
        } else if score >= fair {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub templates: Vec<TemplateInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Interview practice
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    #[default]
    Mixed,
    Behavioral,
    Technical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    pub interview_type: InterviewType,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub answer_framework: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub question: String,
    pub user_answer: String,
    pub question_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Evaluation {
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_compliance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improved_answer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_serialize_camel_case() {
        let req = SummaryRequest {
            full_name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            skills: vec!["Rust".to_string()],
            tone: DEFAULT_TONE.to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["tone"], "professional");

        let req = QuestionsRequest {
            job_title: "SRE".to_string(),
            job_description: None,
            interview_type: InterviewType::default(),
            count: 5,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["interviewType"], "mixed");
        assert!(value.get("jobDescription").is_none());
    }

    #[test]
    fn test_ats_headline_prefers_overall_score() {
        let report: AtsReport = serde_json::from_str(r#"{"overallScore": 72, "score": 10}"#).unwrap();
        assert_eq!(report.headline_score(), 72.0);

        let report: AtsReport = serde_json::from_str(r#"{"score": 55, "matchedKeywords": ["rust"]}"#).unwrap();
        assert_eq!(report.headline_score(), 55.0);
        assert_eq!(report.matched_keywords, vec!["rust"]);
        assert!(report.category_scores.is_none());
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_percent(80.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_percent(65.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_percent(59.9), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_answer(7.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_answer(4.0), ScoreBand::Weak);
    }

    #[test]
    fn test_question_type_field_renamed() {
        let q: InterviewQuestion =
            serde_json::from_str(r#"{"question": "Why?", "type": "behavioral"}"#).unwrap();
        assert_eq!(q.kind, "behavioral");
        assert_eq!(q.answer_framework, "");
    }
}
