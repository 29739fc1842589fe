use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::domain::entities::PortfolioData;

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Arc<PortfolioData>;
}
