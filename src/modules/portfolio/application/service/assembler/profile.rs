use crate::modules::portfolio::application::helpers::{normalize_image_url, split_paragraphs};
use crate::modules::portfolio::application::ports::outgoing::{RowError, SheetRow};
use crate::modules::portfolio::domain::entities::{
    ContactInfo, PersonalInfo, SocialLink, SocialPlatform,
};

const LINK_PLACEHOLDER: &str = "#";

const CONTACT_TYPE_COLUMNS: &[&str] = &["contatotipo", "tipo"];
// "contto" covers a common typo in the sheet header
const CONTACT_VALUE_COLUMNS: &[&str] = &["contato", "contto", "link", "url"];

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Builds the personal block from the first profile row.
pub fn build_personal_info(
    rows: &[SheetRow],
    fallback: &PersonalInfo,
) -> Result<PersonalInfo, RowError> {
    let empty = SheetRow::default();
    let p = rows.first().unwrap_or(&empty);

    let about_me = split_paragraphs(&p.text("aboutme")?);

    Ok(PersonalInfo {
        name: or_default(p.text("name")?, &fallback.name),
        role: or_default(p.text("role")?, &fallback.role),
        profile_pic: or_default(
            normalize_image_url(&p.text("profilepic")?),
            &fallback.profile_pic,
        ),
        banner_pic: or_default(
            normalize_image_url(&p.text("bannerpic")?),
            &fallback.banner_pic,
        ),
        short_summary: or_default(p.text("shortsummary")?, &fallback.short_summary),
        welcome_message: or_default(p.text("welcomemessage")?, &fallback.welcome_message),
        about_me: if about_me.is_empty() {
            fallback.about_me.clone()
        } else {
            about_me
        },
    })
}

/// Resolves contact data in two passes: alias columns on the first row, then
/// every row's type/value pair. The last matching row wins per category.
pub fn build_contact_info(
    rows: &[SheetRow],
    fallback: &ContactInfo,
) -> Result<ContactInfo, RowError> {
    let empty = SheetRow::default();
    let p = rows.first().unwrap_or(&empty);

    let mut linkedin = p.first_text(&["linkedinurl", "linkedin"])?;
    let mut github = p.first_text(&["githuburl", "github"])?;
    let mut email = p.text("email")?;

    for row in rows {
        let kind = row.first_text(CONTACT_TYPE_COLUMNS)?.to_lowercase();
        let value = row.first_text(CONTACT_VALUE_COLUMNS)?;
        if value.is_empty() {
            continue;
        }

        if kind.contains("linkedin") {
            linkedin = value;
        } else if kind.contains("github") {
            github = value;
        } else if kind.contains("mail") || kind.contains("e-mail") {
            email = value;
        }
    }

    let social_links = [(SocialPlatform::LinkedIn, linkedin), (SocialPlatform::Github, github)]
        .into_iter()
        .filter(|(_, url)| !url.is_empty() && url != LINK_PLACEHOLDER)
        .map(|(platform, url)| SocialLink {
            name: platform,
            url,
            username: platform.label().to_string(),
        })
        .collect();

    Ok(ContactInfo {
        email: or_default(email, &fallback.email),
        social_links,
    })
}
