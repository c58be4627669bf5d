//! HTTP client capability and its reqwest backend.

use std::future::Future;

use crate::config::AppConfig;
use crate::errors::FetchError;
use crate::net::Response;

/// Anything that can perform a GET and hand back a buffered response.
///
/// Implementations decide what counts as an error. The reqwest backend fails
/// on transport problems and on any non-2xx status.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<Response, FetchError>> + Send;
}

/// An [`HttpClient`] backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        log::debug!("GET {url}");
        let res = self.client.get(url).send().await?.error_for_status()?;

        let final_url = res.url().clone();
        let status = res.status().as_u16();
        let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
        let headers = res.headers().clone();

        // Fetch body. We don't do streaming
        let body = res.bytes().await?.to_vec();
        log::debug!("{final_url} answered {status} with {} bytes", body.len());

        Ok(Response {
            url: final_url,
            status,
            status_text,
            headers,
            body,
        })
    }
}
