//! The résumé document: the single aggregate the editor mutates and every
//! other view reads back.
//!
//! The serialized shape is the persisted `resumeData` record:
//! `personalInfo{}`, `summary`, `skills[]`, `experience[]`, `education[]`,
//! `selectedTemplate`. Missing or `null` fields take their defaults here, once,
//! so nothing downstream has to re-guard them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::template::TemplateId;

// ────────────────────────────────────────────────────────────────────────────
// Document types
// ────────────────────────────────────────────────────────────────────────────

/// Contact and headline fields. An empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(rename = "position", deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub graduation_year: String,
}

/// Canonical in-memory résumé.
///
/// `experiences` and `education` are never null: a stored `null` loads as an
/// empty sequence. `selected_template` always names a registered template;
/// unknown stored identifiers resolve to the baseline during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(rename = "personalInfo", default, deserialize_with = "null_as_default")]
    pub personal: PersonalInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(rename = "experience", default, deserialize_with = "null_as_default")]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient_template")]
    pub selected_template: TemplateId,
}

impl Default for ResumeDocument {
    /// A fresh editor state: one blank experience (with one blank bullet) and
    /// one blank education entry, so the form has something to fill in.
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            summary: String::new(),
            skills: Vec::new(),
            experiences: vec![ExperienceEntry::blank()],
            education: vec![EducationEntry::default()],
            selected_template: TemplateId::BASELINE,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content queries
// ────────────────────────────────────────────────────────────────────────────

/// True when the string has no visible content.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl ExperienceEntry {
    /// An editor-ready entry with a single empty bullet slot.
    pub fn blank() -> Self {
        Self {
            bullets: vec![String::new()],
            ..Self::default()
        }
    }

    /// An entry with neither a company nor a role carries nothing to show.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.company) && is_blank(&self.role)
    }

    /// Bullets with visible content, in order.
    pub fn visible_bullets(&self) -> impl Iterator<Item = &str> {
        self.bullets
            .iter()
            .map(String::as_str)
            .filter(|b| !is_blank(b))
    }
}

impl EducationEntry {
    pub fn is_empty(&self) -> bool {
        is_blank(&self.school) && is_blank(&self.degree)
    }
}

impl ResumeDocument {
    /// The person's name, if one was entered.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.personal.name.trim();
        (!name.is_empty()).then_some(name)
    }

    pub fn has_summary(&self) -> bool {
        !is_blank(&self.summary)
    }

    /// Skills with visible content, trimmed, in order.
    pub fn visible_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Skills as one comma-joined blob.
    pub fn skills_text(&self) -> String {
        self.visible_skills().join(", ")
    }

    /// Skills as discrete list items: the joined blob split back on commas,
    /// so a single stored skill like `"Rust, Go"` yields two items.
    pub fn skill_items(&self) -> Vec<String> {
        split_skills(&self.skills_text())
    }

    pub fn visible_experiences(&self) -> impl Iterator<Item = &ExperienceEntry> {
        self.experiences.iter().filter(|e| !e.is_empty())
    }

    pub fn visible_education(&self) -> impl Iterator<Item = &EducationEntry> {
        self.education.iter().filter(|e| !e.is_empty())
    }

    /// Replaces the skills from the editor's comma-separated text field.
    pub fn set_skills_text(&mut self, text: &str) {
        self.skills = split_skills(text);
    }
}

/// Splits comma-separated skills, trimming and dropping blanks.
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Template selection never rejects the record: strings resolve leniently,
/// `null` and non-string values take the baseline.
fn lenient_template<'de, D>(deserializer: D) -> Result<TemplateId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => TemplateId::resolve(&id),
        None | Some(Value::Null) => TemplateId::BASELINE,
        Some(other) => {
            warn!(stored = %other, "Stored template is not a string, using baseline");
            TemplateId::BASELINE
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_has_blank_slots() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.experiences.len(), 1);
        assert_eq!(doc.experiences[0].bullets, vec![String::new()]);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.selected_template, TemplateId::Professional);
        assert!(doc.display_name().is_none());
    }

    #[test]
    fn test_deserialize_persisted_shape() {
        let json = r#"{
            "personalInfo": {"name": "Jane Doe", "title": "Engineer", "linkedin": "in/jane"},
            "summary": "Builds things",
            "skills": ["React", "CSS"],
            "experience": [{"company": "Acme", "position": "Engineer", "duration": "2022", "bullets": ["Shipped X"]}],
            "education": [{"school": "MIT", "degree": "BS", "field": "CS", "graduationYear": "2020"}],
            "selectedTemplate": "classy"
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.personal.name, "Jane Doe");
        assert_eq!(doc.personal.email, "");
        assert_eq!(doc.experiences[0].role, "Engineer");
        assert_eq!(doc.education[0].graduation_year, "2020");
        assert_eq!(doc.selected_template, TemplateId::Classy);
    }

    #[test]
    fn test_nulls_and_missing_fields_default() {
        let json = r#"{"personalInfo": null, "experience": null, "education": null, "summary": null}"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert!(doc.experiences.is_empty());
        assert!(doc.education.is_empty());
        assert_eq!(doc.summary, "");
        assert_eq!(doc.selected_template, TemplateId::BASELINE);
    }

    #[test]
    fn test_unknown_template_resolves_to_baseline() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{"selectedTemplate": "neon-glitter"}"#).unwrap();
        assert_eq!(doc.selected_template, TemplateId::BASELINE);
    }

    #[test]
    fn test_null_or_non_string_template_keeps_document() {
        for stored in ["null", "7", r#"{"id": "classy"}"#] {
            let json = format!(r#"{{"summary": "Keep me", "selectedTemplate": {stored}}}"#);
            let doc: ResumeDocument = serde_json::from_str(&json).unwrap();
            assert_eq!(doc.summary, "Keep me");
            assert_eq!(doc.selected_template, TemplateId::BASELINE);
        }
    }

    #[test]
    fn test_serialize_uses_persisted_keys() {
        let mut doc = ResumeDocument::default();
        doc.experiences[0].role = "Engineer".to_string();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert_eq!(value["experience"][0]["position"], "Engineer");
        assert!(value["education"][0].get("graduationYear").is_some());
        assert_eq!(value["selectedTemplate"], "professional");
    }

    #[test]
    fn test_experience_emptiness_ignores_duration_and_bullets() {
        let entry = ExperienceEntry {
            duration: "2020".to_string(),
            bullets: vec!["orphan".to_string()],
            ..ExperienceEntry::default()
        };
        assert!(entry.is_empty());
        let entry = ExperienceEntry {
            role: "Engineer".to_string(),
            ..ExperienceEntry::default()
        };
        assert!(!entry.is_empty());
    }

    #[test]
    fn test_visible_bullets_filter_whitespace() {
        let entry = ExperienceEntry {
            company: "Acme".to_string(),
            bullets: vec!["Shipped X".into(), "   ".into(), "".into(), "Improved Y".into()],
            ..ExperienceEntry::default()
        };
        let bullets: Vec<&str> = entry.visible_bullets().collect();
        assert_eq!(bullets, vec!["Shipped X", "Improved Y"]);
    }

    #[test]
    fn test_skill_items_split_on_commas() {
        let doc = ResumeDocument {
            skills: vec!["Rust, Go".into(), " ".into(), "SQL".into()],
            ..ResumeDocument::default()
        };
        assert_eq!(doc.skills_text(), "Rust, Go, SQL");
        assert_eq!(doc.skill_items(), vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_set_skills_text_trims_and_drops_blanks() {
        let mut doc = ResumeDocument::default();
        doc.set_skills_text("React, , JavaScript ,CSS,");
        assert_eq!(doc.skills, vec!["React", "JavaScript", "CSS"]);
    }
}
