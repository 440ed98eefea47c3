use crate::models::resume::is_blank;
use crate::models::ResumeDocument;

/// How complete the document is, 0–100.
///
/// Weights: name 10, title 10, email 5, phone 5, location 5, summary 15,
/// skills 15, an experience with both company and role 20, an education entry
/// with both school and degree 15.
pub fn progress(doc: &ResumeDocument) -> u8 {
    let p = &doc.personal;
    let checks: [(bool, u32); 9] = [
        (!is_blank(&p.name), 10),
        (!is_blank(&p.title), 10),
        (!is_blank(&p.email), 5),
        (!is_blank(&p.phone), 5),
        (!is_blank(&p.location), 5),
        (doc.has_summary(), 15),
        (!doc.visible_skills().is_empty(), 15),
        (
            doc.experiences
                .iter()
                .any(|e| !is_blank(&e.company) && !is_blank(&e.role)),
            20,
        ),
        (
            doc.education
                .iter()
                .any(|e| !is_blank(&e.school) && !is_blank(&e.degree)),
            15,
        ),
    ];

    let score: u32 = checks.iter().filter(|(ok, _)| *ok).map(|(_, w)| w).sum();
    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_scores_zero() {
        assert_eq!(progress(&ResumeDocument::default()), 0);
    }

    #[test]
    fn test_partial_entries_do_not_count() {
        let mut doc = ResumeDocument::default();
        doc.personal.name = "Jane".to_string();
        doc.experiences[0].company = "Acme".to_string();
        doc.education[0].school = "MIT".to_string();
        assert_eq!(progress(&doc), 10);
    }

    #[test]
    fn test_complete_document_scores_100() {
        let mut doc = ResumeDocument::default();
        let p = &mut doc.personal;
        p.name = "Jane".into();
        p.title = "Engineer".into();
        p.email = "j@example.com".into();
        p.phone = "555".into();
        p.location = "Berlin".into();
        doc.summary = "Builds".into();
        doc.skills = vec!["Rust".into()];
        doc.experiences[0].company = "Acme".into();
        doc.experiences[0].role = "Engineer".into();
        doc.education[0].school = "MIT".into();
        doc.education[0].degree = "BS".into();
        assert_eq!(progress(&doc), 100);
    }
}
