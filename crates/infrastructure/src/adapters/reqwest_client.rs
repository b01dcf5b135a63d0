//! HTTP client binding using reqwest.
//!
//! `ReqwestApiClient` is the single HTTP client of the admin app. It
//! implements the `TokenBinding` port: the session controller pushes every
//! token change into it, and every request built afterwards carries
//! `Authorization: Bearer <token>` (or no `Authorization` header at all).
//!
//! A cookie store is enabled so the HTTP-only refresh cookie set by the
//! login response is replayed on `POST /auth/refresh-token`.

use std::time::Duration;

use libris_application::ports::TokenBinding;
use libris_domain::AccessToken;
use parking_lot::RwLock;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::{debug, warn};

use crate::error::{InfrastructureError, InfrastructureResult};

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared reqwest client with the current bearer token attached.
pub struct ReqwestApiClient {
    client: Client,
    base_url: Url,
    authorization: RwLock<Option<HeaderValue>>,
}

impl ReqwestApiClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// Default configuration:
    /// - Cookie store: enabled
    /// - Request timeout: as given
    /// - User-Agent: "Libris/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or
    /// the client cannot be created.
    pub fn new(base_url: &str, request_timeout: Duration) -> InfrastructureResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("Libris/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .timeout(request_timeout)
            .build()
            .map_err(|e| InfrastructureError::HttpClient(e.to_string()))?;

        Self::with_client(client, base_url)
    }

    /// Creates a binding around a custom reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL.
    pub fn with_client(client: Client, base_url: &str) -> InfrastructureResult<Self> {
        Ok(Self {
            client,
            base_url: Self::parse_base_url(base_url)?,
            authorization: RwLock::new(None),
        })
    }

    fn parse_base_url(raw: &str) -> InfrastructureResult<Url> {
        let invalid = |message: String| InfrastructureError::InvalidBaseUrl {
            url: raw.to_string(),
            message,
        };
        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }
        Ok(url)
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an API path such as `/auth/login` against the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Starts a request to an API path, decorated with the current token.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        let builder = self.client.request(method.clone(), &url);
        match self.authorization.read().clone() {
            Some(value) => {
                debug!(%method, %url, "building authorized request");
                builder.header(AUTHORIZATION, value)
            }
            None => {
                debug!(%method, %url, "building anonymous request");
                builder
            }
        }
    }

    /// Returns true if a bearer token is currently attached.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.authorization.read().is_some()
    }
}

impl TokenBinding for ReqwestApiClient {
    fn bind(&self, token: Option<&AccessToken>) {
        let value = token.and_then(|token| match HeaderValue::from_str(&token.bearer()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                Some(value)
            }
            Err(_) => {
                warn!(token = ?token, "token rejected as header value, sending requests without it");
                None
            }
        });
        *self.authorization.write() = value;
    }
}

impl std::fmt::Debug for ReqwestApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("authorized", &self.is_authorized())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client() -> ReqwestApiClient {
        ReqwestApiClient::new("http://localhost:3002/api", DEFAULT_REQUEST_TIMEOUT)
            .expect("client builds")
    }

    fn authorization_of(client: &ReqwestApiClient) -> Option<String> {
        let request = client
            .request(Method::GET, "/book/get")
            .build()
            .expect("request builds");
        request
            .headers()
            .get(AUTHORIZATION)
            .map(|v| v.to_str().expect("ascii header").to_string())
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client = client();
        assert_eq!(
            client.endpoint("/auth/refresh-token"),
            "http://localhost:3002/api/auth/refresh-token"
        );
        assert_eq!(
            client.endpoint("auth/login"),
            "http://localhost:3002/api/auth/login"
        );
    }

    #[test]
    fn test_requests_are_anonymous_until_bound() {
        let client = client();
        assert!(!client.is_authorized());
        assert_eq!(authorization_of(&client), None);
    }

    #[test]
    fn test_bound_token_is_attached() {
        let client = client();
        let token = AccessToken::new("abc123").expect("token");

        client.bind(Some(&token));

        assert_eq!(authorization_of(&client), Some("Bearer abc123".to_string()));
    }

    #[test]
    fn test_unbinding_removes_header() {
        let client = client();
        client.bind(Some(&AccessToken::new("abc123").expect("token")));

        client.bind(None);

        assert!(!client.is_authorized());
        assert_eq!(authorization_of(&client), None);
    }

    #[test]
    fn test_rebinding_replaces_token() {
        let client = client();
        client.bind(Some(&AccessToken::new("first").expect("token")));
        client.bind(Some(&AccessToken::new("second").expect("token")));
        assert_eq!(authorization_of(&client), Some("Bearer second".to_string()));
    }

    #[test]
    fn test_every_constructible_token_is_attached() {
        let client = client();
        for raw in ["abc123", "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.c2ln", "a-b_c~d+e/f="] {
            client.bind(Some(&AccessToken::new(raw).expect("token")));
            assert!(client.is_authorized());
            assert_eq!(authorization_of(&client), Some(format!("Bearer {raw}")));
        }
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        for url in ["not a url", "ftp://example.com/api", "mailto:desk@bookclub.lk"] {
            let result = ReqwestApiClient::new(url, DEFAULT_REQUEST_TIMEOUT);
            assert!(matches!(
                result,
                Err(InfrastructureError::InvalidBaseUrl { .. })
            ));
        }
    }

    #[test]
    fn test_debug_hides_token() {
        let client = client();
        client.bind(Some(&AccessToken::new("super-secret-token").expect("token")));
        let debug = format!("{client:?}");
        assert!(debug.contains("authorized: true"));
        assert!(!debug.contains("super-secret-token"));
    }
}
