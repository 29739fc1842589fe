use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio/tags",
    tag = "portfolio",
    responses(
        (status = 200, description = "Sorted distinct project tags", body = Vec<String>)
    )
)]
#[get("/api/portfolio/tags")]
pub async fn list_tags_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.list_tags.execute().await)
}
