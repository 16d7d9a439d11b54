//! The seam between the pure client and the network.

use std::time::Duration;

use ureq::http::{HeaderName, HeaderValue};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Performs the HTTP round-trip for a request built by the client.
///
/// Implementations must return non-2xx responses as `Ok(HttpResponse)`;
/// only failures that produced no response at all are errors, and those
/// should be reported as [`ApiError::Transport`]. A request carrying a
/// `timeout` must be abandoned once it elapses.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Default transport backed by a shared `ureq` agent.
///
/// Cloning is cheap and clones share the agent's connection pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `timeout` bounds each request as a whole, from connect to the last
    /// byte of the body. `None` waits indefinitely.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .user_agent(user_agent)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.config().timeout_global(Some(timeout)).build();
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| header_pair(name, value))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Header values may legally carry non-ASCII bytes; keep them, lossily.
fn header_pair(name: &HeaderName, value: &HeaderValue) -> (String, String) {
    (
        name.as_str().to_string(),
        String::from_utf8_lossy(value.as_bytes()).into_owned(),
    )
}
