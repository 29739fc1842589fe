//! Pure reshaping of raw sheet rows into a [`PortfolioData`].
//!
//! Each section is resolved on its own: an absent sheet and an empty sheet
//! are treated the same and fall back to the bundled dataset for that section
//! only. A row with an unreadable cell aborts the whole assembly.

mod about;
mod profile;
mod projects;
mod skills;

pub use about::{build_about_entries, AboutEntries, AboutEntryKind};
pub use profile::{build_contact_info, build_personal_info};
pub use projects::{build_projects, UNTITLED_PROJECT};
pub use skills::build_skills;

use tracing::{debug, warn};

use crate::modules::portfolio::application::ports::outgoing::{RowError, SheetRow};
use crate::modules::portfolio::domain::entities::PortfolioData;

/// Result of the best-effort join over the four sheets. `None` means the sheet
/// could not be fetched or parsed.
#[derive(Debug, Clone, Default)]
pub struct SheetBatch {
    pub profile: Option<Vec<SheetRow>>,
    pub projects: Option<Vec<SheetRow>>,
    pub about: Option<Vec<SheetRow>>,
    pub skills: Option<Vec<SheetRow>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssemblyError {
    #[error(transparent)]
    Row(#[from] RowError),
}

fn rows(sheet: &Option<Vec<SheetRow>>) -> &[SheetRow] {
    sheet.as_deref().unwrap_or(&[])
}

fn or_fallback<T: Clone>(remote: Vec<T>, fallback: &[T]) -> Vec<T> {
    if remote.is_empty() {
        fallback.to_vec()
    } else {
        remote
    }
}

pub fn assemble(
    batch: &SheetBatch,
    fallback: &PortfolioData,
) -> Result<PortfolioData, AssemblyError> {
    let profile_rows = rows(&batch.profile);
    match profile_rows.first() {
        Some(first) => debug!(columns = ?first.keys().collect::<Vec<_>>(), "Profile row columns"),
        None => warn!("Profile sheet is empty or unavailable; using bundled profile"),
    }

    let personal_info = build_personal_info(profile_rows, &fallback.personal_info)?;
    let contact_info = build_contact_info(profile_rows, &fallback.contact_info)?;
    let projects = build_projects(rows(&batch.projects))?;
    let about = build_about_entries(rows(&batch.about))?;
    let skills = build_skills(rows(&batch.skills))?;

    Ok(PortfolioData {
        personal_info,
        contact_info,
        projects: or_fallback(projects, &fallback.projects),
        education: or_fallback(about.education, &fallback.education),
        certifications: or_fallback(about.certifications, &fallback.certifications),
        courses: or_fallback(about.courses, &fallback.courses),
        skills: or_fallback(skills, &fallback.skills),
    })
}
