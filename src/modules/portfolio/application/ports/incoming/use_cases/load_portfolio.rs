use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::PortfolioData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Either variant means the caller serves the bundled dataset as a whole.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadPortfolioError {
    #[error("No spreadsheet configured")]
    NotConfigured,

    #[error("Assembly failed: {0}")]
    Assembly(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadPortfolioUseCase: Send + Sync {
    /// One best-effort load from the remote spreadsheet. Missing sections are
    /// already filled from the fallback in the returned aggregate.
    async fn execute(&self) -> Result<PortfolioData, LoadPortfolioError>;
}
