use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The registered résumé templates.
///
/// Serialized as its lowercase identifier. Deserializing an unknown identifier
/// never fails: it resolves to [`TemplateId::BASELINE`] and logs a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateId {
    /// Two columns with a contact/summary sidebar.
    #[default]
    Professional,
    /// Centered header, single column.
    Classy,
    /// Single-column chronological.
    Simple,
    /// Banner header over two columns.
    Stylish,
}

impl TemplateId {
    pub const BASELINE: TemplateId = TemplateId::Professional;

    pub const ALL: [TemplateId; 4] = [
        TemplateId::Professional,
        TemplateId::Classy,
        TemplateId::Simple,
        TemplateId::Stylish,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Professional => "professional",
            TemplateId::Classy => "classy",
            TemplateId::Simple => "simple",
            TemplateId::Stylish => "stylish",
        }
    }

    /// Strict lookup (case-insensitive, surrounding whitespace ignored).
    pub fn parse(id: &str) -> Option<TemplateId> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(id))
    }

    /// Lenient lookup: unknown identifiers fall back to the baseline.
    pub fn resolve(id: &str) -> TemplateId {
        Self::parse(id).unwrap_or_else(|| {
            warn!(
                requested = id,
                fallback = Self::BASELINE.as_str(),
                "Unknown template id, falling back to baseline"
            );
            Self::BASELINE
        })
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        TemplateId::resolve(&id)
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        id.as_str().to_string()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
