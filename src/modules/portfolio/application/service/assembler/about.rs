use crate::modules::portfolio::application::ports::outgoing::{RowError, SheetRow};
use crate::modules::portfolio::domain::entities::{Certification, Course, Education};

/// Which list an about-sheet row belongs to, read from its `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutEntryKind {
    Education,
    Certification,
    Course,
}

const EDUCATION_KEYWORDS: &[&str] = &["formacao", "formação"];
const CERTIFICATION_KEYWORDS: &[&str] = &["certificaco", "certificações"];
const COURSE_KEYWORDS: &[&str] = &["curso"];

impl AboutEntryKind {
    /// Case-insensitive substring match. Education is tested first, then
    /// certification, then course, so a row maps to at most one kind.
    pub fn classify(raw_type: &str) -> Option<Self> {
        let t = raw_type.to_lowercase();
        let hit = |keywords: &[&str]| keywords.iter().any(|k| t.contains(k));

        if hit(EDUCATION_KEYWORDS) {
            Some(Self::Education)
        } else if hit(CERTIFICATION_KEYWORDS) {
            Some(Self::Certification)
        } else if hit(COURSE_KEYWORDS) {
            Some(Self::Course)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutEntries {
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub courses: Vec<Course>,
}

pub fn build_about_entries(rows: &[SheetRow]) -> Result<AboutEntries, RowError> {
    let mut entries = AboutEntries::default();

    for row in rows {
        let Some(kind) = AboutEntryKind::classify(&row.text("type")?) else {
            continue;
        };

        let title = row.text("title")?;
        let issuer = row.text("issuer")?;

        match kind {
            AboutEntryKind::Education => entries.education.push(Education {
                degree: title,
                institution: issuer,
                period: row.text("year")?,
            }),
            AboutEntryKind::Certification => entries
                .certifications
                .push(Certification { title, issuer }),
            AboutEntryKind::Course => entries.courses.push(Course {
                title,
                issuer,
                year: row.text("year")?,
            }),
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::sheet_fixtures::row;
    use serde_json::json;

    #[test]
    fn classify_accepts_spelling_variants() {
        assert_eq!(
            AboutEntryKind::classify("Formação"),
            Some(AboutEntryKind::Education)
        );
        assert_eq!(
            AboutEntryKind::classify("FORMACAO ACADEMICA"),
            Some(AboutEntryKind::Education)
        );
        assert_eq!(
            AboutEntryKind::classify("Certificações"),
            Some(AboutEntryKind::Certification)
        );
        assert_eq!(
            AboutEntryKind::classify("certificacoes"),
            Some(AboutEntryKind::Certification)
        );
        assert_eq!(
            AboutEntryKind::classify("Curso Extra"),
            Some(AboutEntryKind::Course)
        );
        assert_eq!(AboutEntryKind::classify("Hobby"), None);
        assert_eq!(AboutEntryKind::classify(""), None);
    }

    #[test]
    fn rows_are_routed_to_exactly_one_list() {
        let rows = vec![
            row(&[("type", "Formação"), ("title", "BSc"), ("issuer", "USP"), ("year", "2016 - 2020")]),
            row(&[("type", "Certificações"), ("title", "AWS"), ("issuer", "Amazon")]),
            row(&[("type", "Curso Extra"), ("title", "Rust"), ("issuer", "Udemy"), ("year", "2024")]),
            row(&[("type", "Outro"), ("title", "Skip")]),
        ];

        let entries = build_about_entries(&rows).unwrap();

        assert_eq!(
            entries.education,
            vec![Education {
                degree: "BSc".into(),
                institution: "USP".into(),
                period: "2016 - 2020".into(),
            }]
        );
        assert_eq!(
            entries.certifications,
            vec![Certification {
                title: "AWS".into(),
                issuer: "Amazon".into(),
            }]
        );
        assert_eq!(
            entries.courses,
            vec![Course {
                title: "Rust".into(),
                issuer: "Udemy".into(),
                year: "2024".into(),
            }]
        );
    }

    #[test]
    fn ambiguous_type_goes_to_first_matching_kind() {
        let rows = vec![row(&[("type", "Curso de Formação"), ("title", "X")])];
        let entries = build_about_entries(&rows).unwrap();
        assert_eq!(entries.education.len(), 1);
        assert!(entries.courses.is_empty());
    }

    #[test]
    fn numeric_year_is_rendered_as_text() {
        let mut r = row(&[("type", "curso"), ("title", "SQL")]);
        r.insert("year", json!(2021.0));
        let entries = build_about_entries(&[r]).unwrap();
        assert_eq!(entries.courses[0].year, "2021");
    }
}
