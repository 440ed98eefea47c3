use serde::{Deserialize, Serialize};

use crate::models::TemplateId;

/// Template metadata, in the same shape the remote catalog returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub is_premium: bool,
}

impl TemplateInfo {
    pub fn describe(id: TemplateId) -> Self {
        let (name, description, category) = match id {
            TemplateId::Professional => (
                "Professional",
                "Two-column layout with a contact and summary sidebar",
                "professional",
            ),
            TemplateId::Classy => (
                "Classy",
                "Centered serif header over a single elegant column",
                "classic",
            ),
            TemplateId::Simple => (
                "Simple",
                "Clean single-column chronological layout",
                "minimal",
            ),
            TemplateId::Stylish => (
                "Stylish",
                "Bold banner header with a two-column body",
                "creative",
            ),
        };
        Self {
            id: id.as_str().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            is_premium: false,
        }
    }
}

/// Every locally renderable template, baseline first.
pub fn local_catalog() -> Vec<TemplateInfo> {
    TemplateId::ALL.into_iter().map(TemplateInfo::describe).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_catalog_covers_every_template() {
        let catalog = local_catalog();
        assert_eq!(catalog.len(), TemplateId::ALL.len());
        assert_eq!(catalog[0].id, TemplateId::BASELINE.as_str());
        for info in &catalog {
            assert!(TemplateId::parse(&info.id).is_some(), "{} not registered", info.id);
        }
    }

    #[test]
    fn test_remote_shape_without_premium_flag() {
        let info: TemplateInfo = serde_json::from_str(
            r#"{"id":"ats","name":"ATS","description":"Plain","category":"ats"}"#,
        )
        .unwrap();
        assert!(!info.is_premium);
        let value = serde_json::to_value(TemplateInfo::describe(TemplateId::Classy)).unwrap();
        assert_eq!(value["isPremium"], false);
    }
}
