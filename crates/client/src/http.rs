//! HTTP transport backed by reqwest
//!
//! GET with a query string for small hits, POST with a form body for large
//! ones, newline-joined POST for batches. Size and count limits are
//! enforced before any request leaves the process.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::endpoint;
use crate::error::ClientError;
use crate::transport::{HitMethod, Transport, MAX_BATCH_BODY, MAX_BATCH_HITS, MAX_HIT_BODY};

/// Request timeout for collection calls
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Form content type for POST bodies
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport that sends hits to the collection endpoint over HTTPS
pub struct HttpTransport {
    client: reqwest::Client,
    collect_url: String,
    batch_url: String,
    user_agent: Option<String>,
}

impl HttpTransport {
    /// Create a transport against the default collection endpoint
    pub fn new() -> Self {
        Self::with_endpoint(endpoint::collect_url(), endpoint::batch_url())
    }

    /// Create a transport against custom URLs (tests, proxies)
    pub fn with_endpoint(collect_url: impl Into<String>, batch_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            collect_url: collect_url.into(),
            batch_url: batch_url.into(),
            user_agent: None,
        }
    }

    /// Set the User-Agent header sent with collection requests
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.user_agent {
            Some(ua) => request.header(reqwest::header::USER_AGENT, ua),
            None => request,
        }
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = self
            .apply_headers(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "collection endpoint rejected hit");
            return Err(ClientError::Server(status.as_u16()));
        }
        Ok(())
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, body: &str, method: HitMethod) -> Result<(), ClientError> {
        if body.len() > MAX_HIT_BODY {
            return Err(ClientError::HitTooLarge {
                size: body.len(),
                max: MAX_HIT_BODY,
            });
        }

        debug!(bytes = body.len(), ?method, "sending hit");
        let request = match method {
            HitMethod::Get => self.client.get(format!("{}?{}", self.collect_url, body)),
            HitMethod::Post => self
                .client
                .post(&self.collect_url)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body.to_owned()),
        };

        self.dispatch(request).await
    }

    async fn send_batch(&self, bodies: &[String]) -> Result<(), ClientError> {
        if bodies.len() > MAX_BATCH_HITS {
            return Err(ClientError::TooManyHits {
                count: bodies.len(),
                max: MAX_BATCH_HITS,
            });
        }
        for body in bodies {
            if body.len() > MAX_HIT_BODY {
                return Err(ClientError::HitTooLarge {
                    size: body.len(),
                    max: MAX_HIT_BODY,
                });
            }
        }

        let joined = bodies.join("\n");
        if joined.len() > MAX_BATCH_BODY {
            return Err(ClientError::BatchTooLarge {
                size: joined.len(),
                max: MAX_BATCH_BODY,
            });
        }

        debug!(hits = bodies.len(), bytes = joined.len(), "sending batch");
        let request = self
            .client
            .post(&self.batch_url)
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(joined);

        self.dispatch(request).await
    }
}
