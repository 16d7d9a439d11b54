//! Client construction settings.
//!
//! `ClientBuilder` collects the base URL, user agent and timeout, validates
//! them once in `build`, and hands back an immutable [`Client`]. A malformed
//! base URL fails here rather than on the first request.

use std::time::Duration;

use url::Url;

use crate::client::Client;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Environment variable that overrides the base URL in [`ClientBuilder::from_env`].
pub const BASE_URL_ENV_VAR: &str = "SCRYFALL_BASE_URL";

pub const DEFAULT_USER_AGENT: &str = concat!("scryfall-core/", env!("CARGO_PKG_VERSION"));

/// Builder for [`Client`].
///
/// `T` is the transport the client will use. Until [`ClientBuilder::transport`]
/// supplies one, it is [`DefaultTransport`], and `build` creates a
/// [`UreqTransport`] from the user agent and timeout set here.
#[derive(Debug, Clone)]
pub struct ClientBuilder<T = DefaultTransport> {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    transport: T,
}

/// Stands in for "no transport supplied yet".
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTransport;

/// Turns the builder's transport slot into the transport the client keeps.
pub trait IntoTransport {
    type Transport: Transport;

    fn into_transport(self, user_agent: &str, timeout: Option<Duration>) -> Self::Transport;
}

impl IntoTransport for DefaultTransport {
    type Transport = UreqTransport;

    fn into_transport(self, user_agent: &str, timeout: Option<Duration>) -> UreqTransport {
        UreqTransport::new(user_agent, timeout)
    }
}

/// A supplied transport is used as is; it owns its own deadlines.
impl<T: Transport> IntoTransport for T {
    type Transport = T;

    fn into_transport(self, _user_agent: &str, _timeout: Option<Duration>) -> T {
        self
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            transport: DefaultTransport,
        }
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the base URL taken from `SCRYFALL_BASE_URL` when it is
    /// set and not blank.
    pub fn from_env() -> Self {
        Self::default().with_env_base_url(std::env::var(BASE_URL_ENV_VAR).ok())
    }
}

impl<T> ClientBuilder<T> {
    fn with_env_base_url(self, value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.base_url(v.trim()),
            _ => self,
        }
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Deadline for every request made through the default transport. When
    /// it elapses the in-flight request is abandoned and the call fails with
    /// [`ApiError::Transport`]. Single calls can set their own deadline with
    /// [`Client::get_catalog_with_timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send requests through `transport` instead of a `UreqTransport`. The
    /// timeout setting is then not applied.
    pub fn transport<U: Transport>(self, transport: U) -> ClientBuilder<U> {
        ClientBuilder {
            base_url: self.base_url,
            user_agent: self.user_agent,
            timeout: self.timeout,
            transport,
        }
    }

    /// Shorthand for `.transport(transport).build()`.
    pub fn build_with_transport<U: Transport>(self, transport: U) -> Result<Client<U>, ApiError> {
        self.transport(transport).build()
    }
}

impl<T: IntoTransport> ClientBuilder<T> {
    pub fn build(self) -> Result<Client<T::Transport>, ApiError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let transport = self.transport.into_transport(&self.user_agent, self.timeout);
        Ok(Client::from_parts(base_url, self.user_agent, transport))
    }
}

/// Validate `raw` and strip trailing slashes so paths can be appended with a
/// single `/`.
fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let invalid = |reason: &str| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not contain a query or fragment"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpRequest, HttpResponse};

    #[test]
    fn default_points_at_production() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn base_url_override_is_normalized() {
        let client = ClientBuilder::new()
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn base_url_keeps_subpath() {
        let client = ClientBuilder::new()
            .base_url("https://proxy.example.com/scryfall//")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://proxy.example.com/scryfall");
    }

    #[test]
    fn malformed_base_url_fails_at_build() {
        let err = ClientBuilder::new().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { url, .. } if url == "not a url"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = ClientBuilder::new()
            .base_url("ftp://api.scryfall.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn query_in_base_url_is_rejected() {
        let err = ClientBuilder::new()
            .base_url("https://api.scryfall.com/?pretty=true")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn env_value_overrides_base_url() {
        let builder =
            ClientBuilder::new().with_env_base_url(Some(" http://localhost:3000 ".to_string()));
        assert_eq!(builder.base_url, "http://localhost:3000");
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let builder = ClientBuilder::new().with_env_base_url(Some("   ".to_string()));
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        let builder = ClientBuilder::new().with_env_base_url(None);
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn supplied_transport_is_used() {
        struct Offline;
        impl Transport for Offline {
            fn execute(&self, _: HttpRequest) -> Result<HttpResponse, ApiError> {
                Ok(HttpResponse {
                    status: 200,
                    headers: Vec::new(),
                    body: r#"{"uri": "offline", "total_values": 1, "data": ["Trap"]}"#.to_string(),
                })
            }
        }

        let client = ClientBuilder::new()
            .base_url("http://localhost:3000")
            .timeout(Duration::from_secs(1))
            .transport(Offline)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        let catalog = client.get_spell_types_catalog().unwrap();
        assert_eq!(catalog.uri, "offline");
    }

    #[test]
    fn supplied_transport_still_validates_base_url() {
        struct Unused;
        impl Transport for Unused {
            fn execute(&self, _: HttpRequest) -> Result<HttpResponse, ApiError> {
                unreachable!("build must fail first")
            }
        }

        let err = ClientBuilder::new()
            .base_url("mailto:someone@example.com")
            .transport(Unused)
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn custom_user_agent() {
        let client = ClientBuilder::new().user_agent("deckbuilder/2.1").build().unwrap();
        assert_eq!(client.user_agent(), "deckbuilder/2.1");
    }
}
