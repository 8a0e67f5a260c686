//! Bearer-token lifecycle for the Kroger API.
//!
//! Kroger issues short-lived client-credentials tokens. The adapter keeps a
//! single cached token and only re-exchanges credentials once the cached one
//! is absent or expired. Overlapping calls on one instance may both refresh;
//! the caller is expected to drive the adapter sequentially.

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, Url};

use crate::error::KrogerError;
use crate::types::TokenResponse;

/// OAuth scope granting read access to the product catalog.
const PRODUCT_SCOPE: &str = "product.compact";

/// Client id/secret pair issued by the Kroger developer portal.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

/// A bearer token together with its expiry instant.
#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Single-slot token cache. Refreshing replaces the slot wholesale; the slot
/// is never partially updated.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    cached: Option<CachedToken>,
}

impl TokenCache {
    /// Returns a valid bearer token, exchanging credentials only when the
    /// cached token is absent or expired. A cached token whose expiry is
    /// strictly in the future is returned with zero network calls.
    ///
    /// # Errors
    ///
    /// Returns [`KrogerError::Auth`] if the exchange fails (transport error
    /// or non-2xx status) or the token payload is malformed. No retry.
    pub(crate) async fn bearer(
        &mut self,
        http: &Client,
        token_url: &Url,
        credentials: &Credentials,
    ) -> Result<String, KrogerError> {
        if let Some(token) = &self.cached {
            if Utc::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let response = http
            .post(token_url.clone())
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", PRODUCT_SCOPE),
            ])
            .send()
            .await
            .map_err(|e| KrogerError::Auth(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "token exchange rejected");
            return Err(KrogerError::Auth(format!(
                "token exchange returned status {}",
                response.status()
            )));
        }

        let payload: TokenResponse = response
            .json()
            .await
            .map_err(|e| KrogerError::Auth(format!("malformed token payload: {e}")))?;

        let expires_at = Utc::now() + Duration::seconds(payload.expires_in);
        tracing::debug!(expires_in = payload.expires_in, "refreshed bearer token");

        let value = payload.access_token;
        self.cached = Some(CachedToken {
            value: value.clone(),
            expires_at,
        });
        Ok(value)
    }
}
