//! Google Fonts Developer API integration (`webfonts/v1/webfonts`).

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::domain::FontCatalog;
use crate::error::{AppError, ErrorKind};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const WEBFONTS_PATH: &str = "/webfonts/v1/webfonts";

pub struct GoogleFontsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleFontsClient {
    /// Build a client; a missing or blank key is rejected before any request is made.
    pub fn new(api_key: Option<&str>, base_url: &str) -> Result<Self, AppError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::configuration(
                    "This script requires Google Fonts API, please set the API_TOKEN env variable",
                )
            })?;
        Ok(Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full catalog with a single GET.
    pub fn fetch_catalog(&self) -> Result<FontCatalog, AppError> {
        let url = format!("{}{WEBFONTS_PATH}", self.base_url);
        tracing::info!(%url, "fetching font catalog");

        // `without_url` keeps the key (a query parameter) out of error text.
        let resp = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| {
                AppError::new(ErrorKind::Remote { status: None }, "Request failed")
                    .with_cause(e.without_url())
            })?;

        let status = resp.status();
        tracing::debug!(%status, "font catalog response");
        check_status(status)?;

        let body = resp.text().map_err(|e| {
            AppError::new(
                ErrorKind::Remote {
                    status: Some(status.as_u16()),
                },
                "Failed to read response body",
            )
            .with_cause(e.without_url())
        })?;

        let catalog: FontCatalog = serde_json::from_str(&body)
            .map_err(|e| AppError::parse("Unexpected response body").with_cause(e))?;
        tracing::info!(families = catalog.len(), "fetched font catalog");
        Ok(catalog)
    }
}

fn check_status(status: StatusCode) -> Result<(), AppError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AppError::new(
            ErrorKind::RateLimit,
            "Rate limit exceeded, please try again later",
        ));
    }
    if !status.is_success() {
        return Err(AppError::new(
            ErrorKind::Remote {
                status: Some(status.as_u16()),
            },
            format!("Request failed with status {}", status.as_u16()),
        ));
    }
    Ok(())
}
