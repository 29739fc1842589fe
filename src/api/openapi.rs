use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::portfolio::domain::entities::{
    Certification, ContactInfo, Course, Education, PersonalInfo, PortfolioData, Project,
    SkillCategory, SocialLink, SocialPlatform,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio content assembled from a spreadsheet with a bundled fallback"
    ),
    paths(
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::list_projects::list_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_project::get_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::list_tags::list_tags_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            PortfolioData,
            PersonalInfo,
            ContactInfo,
            SocialLink,
            SocialPlatform,
            Project,
            Education,
            Certification,
            Course,
            SkillCategory
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio content endpoints"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
