use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetProjectError, GetProjectUseCase, ListProjectsUseCase,
    ListTagsUseCase, ProjectFilter,
};
use crate::modules::portfolio::domain::entities::{PortfolioData, Project};

/// Read side over the aggregate resolved at start-up.
#[derive(Clone)]
pub struct PortfolioCatalogService {
    data: Arc<PortfolioData>,
}

impl PortfolioCatalogService {
    pub fn new(data: Arc<PortfolioData>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl GetPortfolioUseCase for PortfolioCatalogService {
    async fn execute(&self) -> Arc<PortfolioData> {
        Arc::clone(&self.data)
    }
}

#[async_trait]
impl ListProjectsUseCase for PortfolioCatalogService {
    async fn execute(&self, filter: ProjectFilter) -> Vec<Project> {
        self.data
            .projects
            .iter()
            .filter(|p| filter.featured.map_or(true, |f| p.featured == f))
            .filter(|p| {
                filter
                    .tag
                    .as_deref()
                    .map_or(true, |tag| p.tags.iter().any(|t| t == tag))
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ListTagsUseCase for PortfolioCatalogService {
    async fn execute(&self) -> Vec<String> {
        self.data.all_tags()
    }
}

#[async_trait]
impl GetProjectUseCase for PortfolioCatalogService {
    async fn execute(&self, index: usize) -> Result<Project, GetProjectError> {
        self.data
            .project(index)
            .cloned()
            .ok_or(GetProjectError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::fallback::fallback_portfolio;

    fn service() -> PortfolioCatalogService {
        PortfolioCatalogService::new(Arc::new(fallback_portfolio().clone()))
    }

    #[tokio::test]
    async fn lists_all_projects_without_filter() {
        let projects = ListProjectsUseCase::execute(&service(), ProjectFilter::default()).await;
        assert_eq!(projects.len(), fallback_portfolio().projects.len());
    }

    #[tokio::test]
    async fn filters_by_featured_and_tag() {
        let filter = ProjectFilter {
            tag: Some("Tableau".to_string()),
            featured: Some(true),
        };
        let projects = ListProjectsUseCase::execute(&service(), filter).await;

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Otimização da Cadeia de Suprimentos");
    }

    #[tokio::test]
    async fn non_featured_filter() {
        let filter = ProjectFilter {
            tag: None,
            featured: Some(false),
        };
        let projects = ListProjectsUseCase::execute(&service(), filter).await;
        assert!(projects.iter().all(|p| !p.featured));
        assert_eq!(projects.len(), 1);
    }

    #[tokio::test]
    async fn get_project_by_index() {
        let s = service();
        let first = GetProjectUseCase::execute(&s, 0).await.unwrap();
        assert_eq!(first, fallback_portfolio().projects[0]);

        assert_eq!(
            GetProjectUseCase::execute(&s, 99).await,
            Err(GetProjectError::NotFound)
        );
    }

    #[tokio::test]
    async fn tags_are_sorted() {
        let tags = ListTagsUseCase::execute(&service()).await;
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
        assert!(tags.contains(&"SQL".to_string()));
    }

    #[tokio::test]
    async fn portfolio_is_shared_not_copied() {
        let s = service();
        let a = GetPortfolioUseCase::execute(&s).await;
        let b = GetPortfolioUseCase::execute(&s).await;
        assert!(Arc::ptr_eq(&a, &b));
    }
}
