use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    #[serde(rename = "inicio")]
    Home,
    #[serde(rename = "sobre")]
    About,
    #[serde(rename = "projetos")]
    Projects,
    #[serde(rename = "contato")]
    Contact,
}

/// Stored as `"light"` / `"dark"`. Any other stored value reads as light.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String", into = "&'static str")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Theme::from_stored(&value)
    }
}

impl From<Theme> for &'static str {
    fn from(theme: Theme) -> Self {
        theme.as_str()
    }
}

/// Everything the front end keeps between renders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub section: Section,
    /// Position of the project opened in detail view.
    pub selected_project: Option<usize>,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub zoomed_image: Option<String>,
    pub selected_tag: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ViewAction {
    Navigate(Section),
    SelectProject(usize),
    BackToProjects,
    ToggleTheme,
    SetTheme(Theme),
    SetSidebarOpen(bool),
    ToggleSidebar,
    ZoomImage(String),
    CloseZoom,
    FilterTag(Option<String>),
}
