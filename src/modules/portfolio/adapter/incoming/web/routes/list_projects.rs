use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::ProjectFilter;
use crate::modules::portfolio::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio/projects",
    tag = "portfolio",
    params(
        ("tag" = Option<String>, Query, description = "Only projects carrying this exact tag"),
        ("featured" = Option<bool>, Query, description = "Only featured (or non-featured) projects")
    ),
    responses(
        (status = 200, description = "Filtered project list", body = Vec<Project>),
        (status = 400, description = "Malformed query string", body = ErrorResponse)
    )
)]
#[get("/api/portfolio/projects")]
pub async fn list_projects_handler(
    query: web::Query<ProjectFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let projects = data.portfolio.list_projects.execute(query.into_inner()).await;
    ApiResponse::success(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::shared::api::custom_query_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn call(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(custom_query_config())
                .service(list_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn lists_every_project_without_filters() {
        let (status, body) = call("/api/portfolio/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn applies_tag_and_featured_filters() {
        let (status, body) = call("/api/portfolio/projects?tag=Tableau&featured=false").await;
        assert_eq!(status, StatusCode::OK);

        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Dashboard de Análise de Churn");
        assert_eq!(items[0]["featured"], false);
    }

    #[actix_web::test]
    async fn url_encoded_tag() {
        let (_, body) = call("/api/portfolio/projects?tag=Power%20BI").await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn malformed_featured_flag_is_a_validation_error() {
        let (status, body) = call("/api/portfolio/projects?featured=maybe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
