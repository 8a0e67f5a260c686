//! Adapter configuration.

use crate::error::KrogerError;

/// Production API root for the Kroger v1 REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.kroger.com/v1/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`crate::KrogerStore`].
///
/// Credentials come from the Kroger developer portal and are never mutated
/// after construction.
#[derive(Clone)]
pub struct KrogerConfig {
    pub client_id: String,
    pub client_secret: String,
    /// API root. Point at a mock server in tests.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl KrogerConfig {
    /// Config pointed at the production API with the default timeout.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` first so a local `.env` file is picked
    /// up. `KROGER_CLIENT_ID` and `KROGER_CLIENT_SECRET` are required;
    /// `KROGER_BASE_URL` and `KROGER_TIMEOUT_SECS` fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`KrogerError::Config`] listing any missing variables, or if
    /// `KROGER_TIMEOUT_SECS` is not an integer.
    pub fn from_env() -> Result<Self, KrogerError> {
        dotenvy::dotenv().ok();
        build_config(|key| std::env::var(key))
    }
}

impl std::fmt::Debug for KrogerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrogerConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Build a config using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the process environment so it can be
/// tested with a pure `HashMap` lookup.
fn build_config<F>(lookup: F) -> Result<KrogerConfig, KrogerError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let client_id = lookup("KROGER_CLIENT_ID").ok();
    let client_secret = lookup("KROGER_CLIENT_SECRET").ok();

    let (Some(client_id), Some(client_secret)) = (client_id, client_secret) else {
        let mut missing = Vec::new();
        if lookup("KROGER_CLIENT_ID").is_err() {
            missing.push("KROGER_CLIENT_ID");
        }
        if lookup("KROGER_CLIENT_SECRET").is_err() {
            missing.push("KROGER_CLIENT_SECRET");
        }
        return Err(KrogerError::Config(format!(
            "missing environment variables: {}",
            missing.join(", ")
        )));
    };

    let base_url = lookup("KROGER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let timeout_secs = match lookup("KROGER_TIMEOUT_SECS") {
        Ok(raw) => raw.parse().map_err(|e| {
            KrogerError::Config(format!("invalid KROGER_TIMEOUT_SECS \"{raw}\": {e}"))
        })?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    Ok(KrogerConfig {
        client_id,
        client_secret,
        base_url,
        timeout_secs,
    })
}
