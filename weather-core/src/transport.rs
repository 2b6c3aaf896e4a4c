use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
    redirect::Policy,
};

use crate::error::TransportError;

pub const DEFAULT_USER_AGENT: &str = concat!("berlin-weather/", env!("CARGO_PKG_VERSION"));

const MAX_REDIRECTS: usize = 10;

/// Status code and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub total: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            total: Duration::from_secs(10),
        }
    }
}

/// GET capability the fetcher is handed.
///
/// Implementations report network faults as [`TransportError`] and return
/// every HTTP status, successful or not, as an [`HttpResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&str, String)])
    -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(timeouts: Timeouts, user_agent: &str) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.total)
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| TransportError::Setup(Box::new(e)))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<HttpResponse, TransportError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = res.status().as_u16();
        tracing::debug!(status, "received response headers");

        let body = res.text().await.map_err(|e| {
            if e.is_timeout() {
                classify(url, e)
            } else {
                TransportError::Body {
                    url: url.to_owned(),
                    source: Box::new(e),
                }
            }
        })?;

        Ok(HttpResponse { status, body })
    }
}

fn classify(url: &str, err: reqwest::Error) -> TransportError {
    let url = url.to_owned();
    if err.is_timeout() {
        TransportError::Timeout {
            url,
            source: Box::new(err),
        }
    } else if err.is_connect() {
        TransportError::Connect {
            url,
            source: Box::new(err),
        }
    } else {
        TransportError::Request {
            url,
            source: Box::new(err),
        }
    }
}
