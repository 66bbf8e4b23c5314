use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::{AppError, AppResult, HttpError};

/// Posts form-encoded bodies and hands back the raw response bytes.
///
/// The driver talks to the service only through this trait so a run can be
/// replayed against a recording double.
#[async_trait]
pub trait FormTransport {
    /// Sends one `POST` with `fields` as an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent or its body cannot be read.
    async fn post_form(&self, url: Url, fields: &[(String, String)]) -> AppResult<Vec<u8>>;
}

/// Transport backed by a single [`reqwest::Client`], created once per run.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the client with reqwest defaults: no timeout override, no extra headers.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialised.
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClient { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FormTransport for ReqwestTransport {
    async fn post_form(&self, url: Url, fields: &[(String, String)]) -> AppResult<Vec<u8>> {
        let url_text = url.to_string();
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|err| {
                AppError::http(HttpError::Request {
                    url: url_text.clone(),
                    source: err,
                })
            })?;
        tracing::debug!("{} answered {}", url_text, response.status());
        let body = response.bytes().await.map_err(|err| {
            AppError::http(HttpError::ReadBody {
                url: url_text,
                source: err,
            })
        })?;
        Ok(body.to_vec())
    }
}

/// Joins a deployment base URL and a service path.
///
/// # Errors
///
/// Returns an error when the joined string is not an absolute URL.
pub fn endpoint_url(base_url: &str, path: &str) -> AppResult<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|err| {
        AppError::http(HttpError::InvalidUrl {
            url: joined,
            source: err,
        })
    })
}
