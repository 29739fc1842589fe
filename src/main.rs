pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::portfolio;
pub use modules::view;

use crate::config::AppConfig;
use crate::portfolio::adapter::outgoing::gviz::{build_http_client, GvizSheetSource};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::service::{
    resolve_portfolio, LoadPortfolioService, PortfolioCatalogService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    // Remote source is only built when a spreadsheet is configured
    let client = build_http_client(config.request_timeout)?;
    let sheet_source = config.spreadsheet_id.as_ref().map(|id| {
        GvizSheetSource::new(client.clone(), config.sheets_base_url.clone(), id.clone())
    });

    let load_portfolio = LoadPortfolioService::new(sheet_source, config.sheet_names.clone());
    let portfolio_data = resolve_portfolio(&load_portfolio).await;

    let state = AppState {
        portfolio: PortfolioUseCases::from_catalog(PortfolioCatalogService::new(Arc::new(
            portfolio_data,
        ))),
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_project_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::list_tags_handler);
    // View state
    cfg.service(crate::view::adapter::incoming::web::routes::dispatch_view_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
