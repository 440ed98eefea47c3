pub mod resume;
pub mod template;

pub use resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};
pub use template::TemplateId;
