use std::sync::Mutex;

use crate::models::ResumeDocument;
use crate::store::{decode_record, DocumentStore, StoreError};

/// Holds the serialized record in memory. Used by tests and by callers that
/// want a throwaway session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already-serialized record (which may be corrupt).
    #[cfg(test)]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// The currently stored serialized record.
    #[cfg(test)]
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> ResumeDocument {
        let guard = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        decode_record(guard.as_deref())
    }

    fn save(&self, doc: &ResumeDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string(doc)?;
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, TemplateId};

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let doc = ResumeDocument {
            summary: "Hello".to_string(),
            skills: vec!["Rust".to_string()],
            experiences: vec![ExperienceEntry {
                company: "Acme".to_string(),
                bullets: vec![String::new(), "Did a thing".to_string()],
                ..ExperienceEntry::default()
            }],
            education: vec![],
            selected_template: TemplateId::Classy,
            ..ResumeDocument::default()
        };
        store.save(&doc).unwrap();
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn test_corrupt_raw_loads_default() {
        let store = MemoryStore::with_raw("<<garbage>>");
        assert_eq!(store.load(), ResumeDocument::default());
        assert_eq!(store.raw().as_deref(), Some("<<garbage>>"));
    }
}
