use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::models::ResumeDocument;
use crate::store::{decode_record, DocumentStore, StoreError, RECORD_KEY};

/// Keeps the record as `<data_dir>/resumeData.json`.
///
/// Writes go to a temp file in the same directory and are renamed into place,
/// so a reader never observes a half-written record.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens (and creates, if needed) the data directory.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(format!("{RECORD_KEY}.json"));
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> ResumeDocument {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode_record(Some(&raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => decode_record(None),
            Err(e) => {
                warn!("Failed to read {}: {e}", self.path.display());
                ResumeDocument::default()
            }
        }
    }

    fn save(&self, doc: &ResumeDocument) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(doc)?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.persist(&self.path)?;

        debug!("Saved {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo, TemplateId};

    fn sample_document() -> ResumeDocument {
        ResumeDocument {
            personal: PersonalInfo {
                name: "Jane Doe".to_string(),
                title: "Frontend Engineer".to_string(),
                email: "jane@example.com".to_string(),
                ..PersonalInfo::default()
            },
            summary: "Ships accessible interfaces.".to_string(),
            skills: vec!["React".to_string(), "CSS".to_string()],
            experiences: vec![ExperienceEntry {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                duration: "2022–Present".to_string(),
                bullets: vec!["Shipped X".to_string(), "  ".to_string()],
            }],
            education: vec![EducationEntry {
                school: "State University".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                graduation_year: "2021".to_string(),
            }],
            selected_template: TemplateId::Stylish,
        }
    }

    #[test]
    fn test_load_without_record_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.load(), ResumeDocument::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let doc = sample_document();

        store.save(&doc).unwrap();
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.save(&sample_document()).unwrap();
        let replacement = ResumeDocument {
            summary: "Only this".to_string(),
            experiences: vec![],
            ..ResumeDocument::default()
        };
        store.save(&replacement).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, replacement);
        assert!(loaded.skills.is_empty());
    }

    #[test]
    fn test_corrupt_record_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        std::fs::write(store.path(), b"{\"personalInfo\": ").unwrap();

        assert_eq!(store.load(), ResumeDocument::default());
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.path(), nested.join("resumeData.json"));
    }
}
