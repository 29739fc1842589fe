use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub profile_pic: String,
    pub banner_pic: String,
    pub short_summary: String,
    pub welcome_message: String,
    /// Biography, one entry per paragraph.
    pub about_me: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    LinkedIn,
    Github,
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Github => "Github",
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: SocialPlatform,
    pub url: String,
    pub username: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Either a mail address or a contact-form URL.
    pub email: String,
    pub social_links: Vec<SocialLink>,
}

impl ContactInfo {
    pub fn email_is_url(&self) -> bool {
        self.email.to_lowercase().starts_with("http")
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub long_description: String,
    pub image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub project_url: String,
    pub featured: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: String,
    pub technologies: Vec<String>,
}

/// Aggregate handed to the presentation layer. Built once at start-up and
/// never mutated afterwards.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub contact_info: ContactInfo,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub courses: Vec<Course>,
    pub skills: Vec<SkillCategory>,
}

impl PortfolioData {
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Every tag used by at least one project, sorted and de-duplicated.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .projects
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn projects_with_tag(&self, tag: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}
