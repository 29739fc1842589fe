use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::view::application::{reduce, render_view, SectionView};
use crate::modules::view::domain::state::{ViewAction, ViewState};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DispatchViewRequest {
    #[serde(default)]
    pub state: ViewState,
    pub action: ViewAction,
}

#[derive(Debug, Serialize)]
pub struct DispatchViewResponse {
    pub state: ViewState,
    pub view: SectionView,
}

/// Applies one action to the client's view state and returns the next state
/// with the content it selects.
#[post("/api/view/dispatch")]
pub async fn dispatch_view_handler(
    req: web::Json<DispatchViewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let DispatchViewRequest { state, action } = req.into_inner();

    let next = reduce(state, action);
    let portfolio = data.portfolio.get_portfolio.execute().await;
    let view = render_view(&portfolio, &next);

    ApiResponse::success(DispatchViewResponse { state: next, view })
}
