use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::portfolio::domain::entities::Project;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    /// Exact tag match.
    pub tag: Option<String>,
    pub featured: Option<bool>,
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectFilter) -> Vec<Project>;
}
