use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use super::table::parse_response;
use crate::modules::portfolio::application::ports::outgoing::{
    SheetRow, SheetSource, SheetSourceError,
};

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Builds the shared HTTP client. Without a timeout the transport default
/// applies and a hung request blocks the load.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Reads sheets through the spreadsheet's public visualization-query
/// endpoint.
#[derive(Clone)]
pub struct GvizSheetSource {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
}

impl GvizSheetSource {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    pub fn sheet_url(&self, sheet_name: &str) -> Result<Url, SheetSourceError> {
        let endpoint = format!(
            "{}/{}/gviz/tq",
            self.base_url.trim_end_matches('/'),
            self.spreadsheet_id
        );

        Url::parse_with_params(
            &endpoint,
            &[("tqx", "out:json"), ("headers", "1"), ("sheet", sheet_name)],
        )
        .map_err(|e| SheetSourceError::Transport(e.to_string()))
    }
}

#[async_trait]
impl SheetSource for GvizSheetSource {
    async fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<SheetRow>, SheetSourceError> {
        let url = self.sheet_url(sheet_name)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SheetSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetSourceError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SheetSourceError::Transport(e.to_string()))?;

        parse_response(&body)
    }
}
