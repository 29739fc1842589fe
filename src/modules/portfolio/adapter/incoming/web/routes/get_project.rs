use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetProjectError;
use crate::modules::portfolio::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio/projects/{index}",
    tag = "portfolio",
    params(
        ("index" = usize, Path, description = "Position of the project in the portfolio")
    ),
    responses(
        (status = 200, description = "Single project", body = Project),
        (status = 404, description = "No project at that position", body = ErrorResponse)
    )
)]
#[get("/api/portfolio/projects/{index}")]
pub async fn get_project_handler(
    path: web::Path<usize>,
    data: web::Data<AppState>,
) -> impl Responder {
    let index = path.into_inner();

    match data.portfolio.get_project.execute(index).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
