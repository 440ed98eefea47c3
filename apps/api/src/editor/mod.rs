//! Editor: field-by-field mutation of the résumé document.
//!
//! An [`Editor`] loads the document from the injected store when opened and
//! writes the whole document back after every successful mutation. A mutation
//! that fails validation changes nothing and saves nothing.

pub mod handlers;
pub mod progress;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{EducationEntry, ExperienceEntry, ResumeDocument, TemplateId};
use crate::store::{DocumentStore, StoreError};

pub use progress::progress;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("No {section} entry at index {index}")]
    NoSuchEntry { section: &'static str, index: usize },

    #[error("No bullet {bullet} in experience entry {index}")]
    NoSuchBullet { index: usize, bullet: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceField {
    Company,
    #[serde(alias = "position")]
    Role,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    School,
    Degree,
    Field,
    GraduationYear,
}

pub struct Editor<'a> {
    store: &'a dyn DocumentStore,
    doc: ResumeDocument,
}

impl<'a> Editor<'a> {
    pub fn open(store: &'a dyn DocumentStore) -> Self {
        Self {
            doc: store.load(),
            store,
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.doc
    }

    pub fn into_document(self) -> ResumeDocument {
        self.doc
    }

    fn commit(&self) -> Result<(), EditorError> {
        self.store.save(&self.doc)?;
        Ok(())
    }

    fn experience_mut(&mut self, index: usize) -> Result<&mut ExperienceEntry, EditorError> {
        self.doc.experiences.get_mut(index).ok_or(EditorError::NoSuchEntry {
            section: "experience",
            index,
        })
    }

    fn education_mut(&mut self, index: usize) -> Result<&mut EducationEntry, EditorError> {
        self.doc.education.get_mut(index).ok_or(EditorError::NoSuchEntry {
            section: "education",
            index,
        })
    }

    /// Replaces the whole document.
    pub fn replace(&mut self, doc: ResumeDocument) -> Result<(), EditorError> {
        self.doc = doc;
        self.commit()
    }

    pub fn set_personal(&mut self, field: PersonalField, value: impl Into<String>) -> Result<(), EditorError> {
        let p = &mut self.doc.personal;
        let slot = match field {
            PersonalField::Name => &mut p.name,
            PersonalField::Title => &mut p.title,
            PersonalField::Email => &mut p.email,
            PersonalField::Phone => &mut p.phone,
            PersonalField::Location => &mut p.location,
            PersonalField::Linkedin => &mut p.linkedin,
        };
        *slot = value.into();
        debug!(?field, "Updated personal field");
        self.commit()
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) -> Result<(), EditorError> {
        self.doc.summary = summary.into();
        self.commit()
    }

    /// Sets skills from the comma-separated text field.
    pub fn set_skills_text(&mut self, text: &str) -> Result<(), EditorError> {
        self.doc.set_skills_text(text);
        self.commit()
    }

    /// Appends a blank experience entry (with one empty bullet) and returns
    /// its index.
    pub fn add_experience(&mut self) -> Result<usize, EditorError> {
        self.doc.experiences.push(ExperienceEntry::blank());
        self.commit()?;
        Ok(self.doc.experiences.len() - 1)
    }

    pub fn set_experience_field(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let entry = self.experience_mut(index)?;
        let slot = match field {
            ExperienceField::Company => &mut entry.company,
            ExperienceField::Role => &mut entry.role,
            ExperienceField::Duration => &mut entry.duration,
        };
        *slot = value.into();
        self.commit()
    }

    /// Appends an empty bullet to entry `index` and returns its position.
    pub fn add_bullet(&mut self, index: usize) -> Result<usize, EditorError> {
        let entry = self.experience_mut(index)?;
        entry.bullets.push(String::new());
        let position = entry.bullets.len() - 1;
        self.commit()?;
        Ok(position)
    }

    pub fn set_bullet(&mut self, index: usize, bullet: usize, value: impl Into<String>) -> Result<(), EditorError> {
        let entry = self.experience_mut(index)?;
        let slot = entry
            .bullets
            .get_mut(bullet)
            .ok_or(EditorError::NoSuchBullet { index, bullet })?;
        *slot = value.into();
        self.commit()
    }

    pub fn replace_bullets(&mut self, index: usize, bullets: Vec<String>) -> Result<(), EditorError> {
        self.experience_mut(index)?.bullets = bullets;
        self.commit()
    }

    pub fn add_education(&mut self) -> Result<usize, EditorError> {
        self.doc.education.push(EducationEntry::default());
        self.commit()?;
        Ok(self.doc.education.len() - 1)
    }

    pub fn set_education_field(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let entry = self.education_mut(index)?;
        let slot = match field {
            EducationField::School => &mut entry.school,
            EducationField::Degree => &mut entry.degree,
            EducationField::Field => &mut entry.field,
            EducationField::GraduationYear => &mut entry.graduation_year,
        };
        *slot = value.into();
        self.commit()
    }

    pub fn select_template(&mut self, template: TemplateId) -> Result<(), EditorError> {
        self.doc.selected_template = template;
        self.commit()
    }

    pub fn progress(&self) -> u8 {
        progress(&self.doc)
    }
}
