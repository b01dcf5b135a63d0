//! API client token binding port.

use libris_domain::AccessToken;

/// Attaches the current access token to outgoing requests.
///
/// The session controller calls [`TokenBinding::bind`] synchronously on
/// every token change, before the change becomes visible to observers.
/// Every request built after `bind` returns must reflect the new token.
pub trait TokenBinding: Send + Sync {
    /// Sets (`Some`) or removes (`None`) the bearer token.
    fn bind(&self, token: Option<&AccessToken>);
}
