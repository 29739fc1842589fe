pub mod get_portfolio;
pub mod get_project;
pub mod list_projects;
pub mod list_tags;

pub use get_portfolio::get_portfolio_handler;
pub use get_project::get_project_handler;
pub use list_projects::list_projects_handler;
pub use list_tags::list_tags_handler;
