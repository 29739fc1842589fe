use actix_web::web;
use std::sync::Arc;

use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetProjectUseCase;
use crate::modules::portfolio::application::service::PortfolioCatalogService;
use crate::modules::portfolio::domain::entities::PortfolioData;
use crate::modules::portfolio::domain::fallback::fallback_portfolio;
use crate::AppState;

fn catalog(data: PortfolioData) -> PortfolioUseCases {
    PortfolioUseCases::from_catalog(PortfolioCatalogService::new(Arc::new(data)))
}

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: catalog(fallback_portfolio().clone()),
        }
    }
}

impl TestAppStateBuilder {
    /// Every read use case served from `data`.
    pub fn with_portfolio(mut self, data: PortfolioData) -> Self {
        self.portfolio = catalog(data);
        self
    }

    pub fn with_get_project(mut self, use_case: impl GetProjectUseCase + 'static) -> Self {
        self.portfolio.get_project = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
        })
    }
}
