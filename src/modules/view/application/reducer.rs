use crate::modules::view::domain::state::{Section, ViewAction, ViewState};

/// True while the project list (and so its tag filter) is on screen.
fn showing_project_list(state: &ViewState) -> bool {
    state.section == Section::Projects && state.selected_project.is_none()
}

/// Pure state transition. The previous state is consumed and the next one
/// returned.
///
/// The tag filter lives only as long as the project list is shown: leaving
/// the list, or opening a project from it, resets it.
pub fn reduce(mut state: ViewState, action: ViewAction) -> ViewState {
    match action {
        ViewAction::Navigate(section) => {
            let stays_on_list = showing_project_list(&state) && section == Section::Projects;
            if !stays_on_list {
                state.selected_tag = None;
            }
            state.selected_project = None;
            state.section = section;
            state.sidebar_open = false;
        }
        ViewAction::SelectProject(index) => {
            state.selected_project = Some(index);
            state.section = Section::Projects;
            state.selected_tag = None;
        }
        ViewAction::BackToProjects => {
            state.selected_project = None;
        }
        ViewAction::ToggleTheme => state.theme = state.theme.toggled(),
        ViewAction::SetTheme(theme) => state.theme = theme,
        ViewAction::SetSidebarOpen(open) => state.sidebar_open = open,
        ViewAction::ToggleSidebar => state.sidebar_open = !state.sidebar_open,
        ViewAction::ZoomImage(url) => state.zoomed_image = Some(url),
        ViewAction::CloseZoom => state.zoomed_image = None,
        ViewAction::FilterTag(tag) => state.selected_tag = tag,
    }
    state
}
