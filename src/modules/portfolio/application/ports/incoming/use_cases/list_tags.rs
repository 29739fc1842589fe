use async_trait::async_trait;

#[async_trait]
pub trait ListTagsUseCase: Send + Sync {
    /// Sorted, de-duplicated tags across all projects.
    async fn execute(&self) -> Vec<String>;
}
