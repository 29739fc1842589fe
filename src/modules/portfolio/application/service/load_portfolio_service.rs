use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    LoadPortfolioError, LoadPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{SheetRow, SheetSource};
use crate::modules::portfolio::application::service::assembler::{assemble, SheetBatch};
use crate::modules::portfolio::domain::entities::PortfolioData;
use crate::modules::portfolio::domain::fallback::fallback_portfolio;

/// Tab names inside the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub profile: String,
    pub projects: String,
    pub about: String,
    pub skills: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            profile: "Me".to_string(),
            projects: "Proje".to_string(),
            about: "SobM".to_string(),
            skills: "Tec".to_string(),
        }
    }
}

async fn fetch_or_absent<S: SheetSource>(source: &S, sheet_name: &str) -> Option<Vec<SheetRow>> {
    match source.fetch_rows(sheet_name).await {
        Ok(rows) => Some(rows),
        Err(e) => {
            warn!("Failed to fetch sheet '{}': {}", sheet_name, e);
            None
        }
    }
}

/// Fetches the four sheets concurrently and waits for all of them. A failed
/// sheet becomes `None` without affecting its siblings.
pub async fn fetch_batch<S: SheetSource>(source: &S, names: &SheetNames) -> SheetBatch {
    let (profile, projects, about, skills) = futures::join!(
        fetch_or_absent(source, &names.profile),
        fetch_or_absent(source, &names.projects),
        fetch_or_absent(source, &names.about),
        fetch_or_absent(source, &names.skills),
    );

    SheetBatch {
        profile,
        projects,
        about,
        skills,
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct LoadPortfolioService<S>
where
    S: SheetSource,
{
    /// `None` when no spreadsheet id is configured.
    source: Option<S>,
    names: SheetNames,
}

impl<S> LoadPortfolioService<S>
where
    S: SheetSource,
{
    pub fn new(source: Option<S>, names: SheetNames) -> Self {
        Self { source, names }
    }
}

#[async_trait]
impl<S> LoadPortfolioUseCase for LoadPortfolioService<S>
where
    S: SheetSource + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioData, LoadPortfolioError> {
        let Some(source) = &self.source else {
            info!("No spreadsheet configured; serving bundled portfolio data");
            return Err(LoadPortfolioError::NotConfigured);
        };

        let batch = fetch_batch(source, &self.names).await;

        assemble(&batch, fallback_portfolio()).map_err(|e| {
            error!("Failed to assemble portfolio from spreadsheet: {}", e);
            LoadPortfolioError::Assembly(e.to_string())
        })
    }
}

/// Runs the single start-up load. Any failure yields the bundled dataset.
pub async fn resolve_portfolio(use_case: &dyn LoadPortfolioUseCase) -> PortfolioData {
    match use_case.execute().await {
        Ok(data) => {
            info!(
                projects = data.projects.len(),
                skills = data.skills.len(),
                "Portfolio loaded from spreadsheet"
            );
            data
        }
        Err(_) => fallback_portfolio().clone(),
    }
}
