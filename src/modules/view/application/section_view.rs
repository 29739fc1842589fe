use serde::Serialize;

use crate::modules::portfolio::domain::entities::{
    Certification, ContactInfo, Course, Education, PersonalInfo, PortfolioData, Project,
    SkillCategory,
};
use crate::modules::view::domain::state::{Section, ViewState};

/// Content for the main area given the current state.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SectionView {
    #[serde(rename_all = "camelCase")]
    ProjectDetail { index: usize, project: Project },
    #[serde(rename_all = "camelCase")]
    Home {
        personal_info: PersonalInfo,
        featured_projects: Vec<Project>,
        skills: Vec<SkillCategory>,
    },
    #[serde(rename_all = "camelCase")]
    About {
        about_me: Vec<String>,
        education: Vec<Education>,
        certifications: Vec<Certification>,
        courses: Vec<Course>,
        skills: Vec<SkillCategory>,
    },
    #[serde(rename_all = "camelCase")]
    Projects {
        tags: Vec<String>,
        selected_tag: Option<String>,
        projects: Vec<Project>,
    },
    #[serde(rename_all = "camelCase")]
    Contact {
        contact: ContactInfo,
        email_is_url: bool,
    },
}

/// A selected project wins over the section. A selection pointing past the
/// end of the list is ignored.
pub fn render_view(data: &PortfolioData, state: &ViewState) -> SectionView {
    if let Some((index, project)) = state
        .selected_project
        .and_then(|i| data.project(i).map(|p| (i, p)))
    {
        return SectionView::ProjectDetail {
            index,
            project: project.clone(),
        };
    }

    match state.section {
        Section::Home => SectionView::Home {
            personal_info: data.personal_info.clone(),
            featured_projects: data.featured_projects().into_iter().cloned().collect(),
            skills: data.skills.clone(),
        },
        Section::About => SectionView::About {
            about_me: data.personal_info.about_me.clone(),
            education: data.education.clone(),
            certifications: data.certifications.clone(),
            courses: data.courses.clone(),
            skills: data.skills.clone(),
        },
        Section::Projects => {
            let projects = match state.selected_tag.as_deref() {
                Some(tag) => data.projects_with_tag(tag).into_iter().cloned().collect(),
                None => data.projects.clone(),
            };
            SectionView::Projects {
                tags: data.all_tags(),
                selected_tag: state.selected_tag.clone(),
                projects,
            }
        }
        Section::Contact => SectionView::Contact {
            contact: data.contact_info.clone(),
            email_is_url: data.contact_info.email_is_url(),
        },
    }
}
