use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    /// Projects are addressed by their position in the aggregate.
    async fn execute(&self, index: usize) -> Result<Project, GetProjectError>;
}
