use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::portfolio::domain::entities::Project;

pub struct StubGetProjectUseCase {
    result: Result<Project, GetProjectError>,
}

impl StubGetProjectUseCase {
    pub fn found(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetProjectError::NotFound),
        }
    }
}

#[async_trait]
impl GetProjectUseCase for StubGetProjectUseCase {
    async fn execute(&self, _index: usize) -> Result<Project, GetProjectError> {
        self.result.clone()
    }
}
