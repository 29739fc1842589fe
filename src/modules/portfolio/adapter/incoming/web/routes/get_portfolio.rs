use actix_web::{get, web, Responder};

use crate::modules::portfolio::domain::entities::PortfolioData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Whole portfolio aggregate", body = PortfolioData)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let portfolio = data.portfolio.get_portfolio.execute().await;
    ApiResponse::success(portfolio.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::portfolio::domain::fallback::fallback_portfolio;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn returns_the_aggregate_in_envelope() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["personalInfo"]["name"],
            fallback_portfolio().personal_info.name
        );
        assert!(body["data"]["projects"].is_array());
        assert!(body["data"]["contactInfo"]["socialLinks"].is_array());
    }

    #[actix_web::test]
    async fn serves_whatever_was_loaded_at_startup() {
        let mut loaded = fallback_portfolio().clone();
        loaded.personal_info.name = "Ana Souza".to_string();
        loaded.projects.truncate(1);

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_portfolio(loaded).build())
                .service(get_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["personalInfo"]["name"], "Ana Souza");
        assert_eq!(body["data"]["projects"].as_array().map(Vec::len), Some(1));
    }
}
