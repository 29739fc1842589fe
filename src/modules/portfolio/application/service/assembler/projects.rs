use crate::modules::portfolio::application::helpers::{normalize_image_url, split_list_default};
use crate::modules::portfolio::application::ports::outgoing::{RowError, SheetRow};
use crate::modules::portfolio::domain::entities::Project;

pub const UNTITLED_PROJECT: &str = "Projeto Sem Título";

const NUMBERED_IMAGE_COLUMNS: [&str; 3] = ["images1", "images2", "images3"];

/// Image list resolution: numbered columns, then the legacy comma-separated
/// `images` column, then the primary image alone.
fn resolve_images(row: &SheetRow, primary: &str) -> Result<Vec<String>, RowError> {
    let mut images = Vec::new();
    for column in NUMBERED_IMAGE_COLUMNS {
        let raw = row.text(column)?;
        if !raw.is_empty() {
            images.push(normalize_image_url(&raw));
        }
    }

    if images.is_empty() {
        let legacy = row.text("images")?;
        if !legacy.is_empty() {
            images = split_list_default(&legacy)
                .iter()
                .map(|url| normalize_image_url(url))
                .collect();
        } else if !primary.is_empty() {
            images = vec![primary.to_string()];
        }
    }

    if images.is_empty() && !primary.is_empty() {
        images = vec![primary.to_string()];
    }

    Ok(images)
}

/// Absent or blank means featured.
fn parse_featured(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("true")
}

fn build_project(row: &SheetRow) -> Result<Project, RowError> {
    let primary = normalize_image_url(&row.text("image")?);
    let images = resolve_images(row, &primary)?;

    let image = if !primary.is_empty() {
        primary
    } else {
        images.first().cloned().unwrap_or_default()
    };

    let title = row.text("title")?;
    let project_url = row.text("projecturl")?;

    Ok(Project {
        title: if title.is_empty() {
            UNTITLED_PROJECT.to_string()
        } else {
            title
        },
        long_description: row.text("longdescription")?,
        image,
        images,
        tags: split_list_default(&row.text("tags")?),
        project_url: if project_url.is_empty() {
            "#".to_string()
        } else {
            project_url
        },
        featured: parse_featured(&row.text("featured")?),
    })
}

/// One project per row. An empty result is left to the caller to replace.
pub fn build_projects(rows: &[SheetRow]) -> Result<Vec<Project>, RowError> {
    rows.iter().map(build_project).collect()
}
