use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetProjectUseCase, ListProjectsUseCase, ListTagsUseCase,
};
use crate::modules::portfolio::application::service::PortfolioCatalogService;

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub list_projects: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub get_project: Arc<dyn GetProjectUseCase + Send + Sync>,
    pub list_tags: Arc<dyn ListTagsUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    /// Wires every read use case to one shared catalog.
    pub fn from_catalog(catalog: PortfolioCatalogService) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            get_portfolio: catalog.clone(),
            list_projects: catalog.clone(),
            get_project: catalog.clone(),
            list_tags: catalog,
        }
    }
}
