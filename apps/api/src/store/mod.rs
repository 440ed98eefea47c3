//! Local Persistence Adapter: load/save of the résumé document to on-device
//! key-value storage.
//!
//! The store is injected (`Arc<dyn DocumentStore>` in `AppState`, or borrowed by
//! the CLI and the editor) rather than reached as ambient global state.
//!
//! # Contract
//! - `load` never fails: nothing stored, or a record that fails to parse, yields
//!   `ResumeDocument::default()`. Parse failures are logged, not returned.
//! - `save` overwrites the whole record. No merge, no versioning.

pub mod file;
pub mod memory;

use thiserror::Error;
use tracing::warn;

use crate::models::ResumeDocument;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key of the single persisted record.
pub const RECORD_KEY: &str = "resumeData";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to persist record: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub trait DocumentStore: Send + Sync {
    /// Returns the last-saved document, or the default document.
    fn load(&self) -> ResumeDocument;

    /// Overwrites the stored record with `doc`.
    fn save(&self, doc: &ResumeDocument) -> Result<(), StoreError>;
}

/// Decodes a raw stored record. Absent or corrupt records yield the default.
pub(crate) fn decode_record(raw: Option<&str>) -> ResumeDocument {
    let Some(raw) = raw else {
        return ResumeDocument::default();
    };

    match serde_json::from_str::<ResumeDocument>(raw) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Failed to parse stored {RECORD_KEY} record, using defaults: {e}");
            ResumeDocument::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_absent_is_default() {
        assert_eq!(decode_record(None), ResumeDocument::default());
    }

    #[test]
    fn test_decode_corrupt_is_default() {
        assert_eq!(decode_record(Some("{not json")), ResumeDocument::default());
        assert_eq!(decode_record(Some("[1, 2, 3]")), ResumeDocument::default());
    }

    #[test]
    fn test_decode_null_template_keeps_entered_fields() {
        let raw = r#"{
            "personalInfo": {"name": "Jane Doe"},
            "summary": "Keep me",
            "skills": ["Rust"],
            "experience": [],
            "education": [],
            "selectedTemplate": null
        }"#;
        let doc = decode_record(Some(raw));
        assert_eq!(doc.personal.name, "Jane Doe");
        assert_eq!(doc.summary, "Keep me");
        assert_eq!(doc.skills, vec!["Rust"]);
        assert_eq!(doc.selected_template, crate::models::TemplateId::BASELINE);
    }

    #[test]
    fn test_decode_empty_object_uses_field_defaults() {
        let doc = decode_record(Some("{}"));
        assert!(doc.experiences.is_empty());
        assert!(doc.education.is_empty());
    }
}
