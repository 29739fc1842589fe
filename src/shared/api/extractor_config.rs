use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, QueryConfig};
use actix_web::Error;

use crate::shared::api::ApiResponse;

/// Extractor failures answer 400 inside the usual envelope.
fn validation_error<E>(err: E) -> Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let message = err.to_string();
    InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
        .into()
}

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| validation_error(err))
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| validation_error(err))
}
