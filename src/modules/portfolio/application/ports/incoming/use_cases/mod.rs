pub mod get_portfolio;
pub mod get_project;
pub mod list_projects;
pub mod list_tags;
pub mod load_portfolio;

pub use get_portfolio::GetPortfolioUseCase;
pub use get_project::{GetProjectError, GetProjectUseCase};
pub use list_projects::{ListProjectsUseCase, ProjectFilter};
pub use list_tags::ListTagsUseCase;
pub use load_portfolio::{LoadPortfolioError, LoadPortfolioUseCase};
