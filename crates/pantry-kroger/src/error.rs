use thiserror::Error;

/// Errors surfaced by the Kroger adapter.
///
/// Each variant corresponds to one phase of the adapter's lifecycle, and
/// transport failures are folded into the phase that performed the call.
/// Missing or oddly-shaped payload fields (image gallery, price, size string)
/// are never errors: they degrade the corresponding item field instead.
#[derive(Debug, Error)]
pub enum KrogerError {
    /// Credential exchange failed or the token payload was malformed.
    #[error("token exchange failed: {0}")]
    Auth(String),

    /// Location search failed or returned no candidates.
    #[error("location lookup failed: {0}")]
    Lookup(String),

    /// Product search transport or parse failure.
    #[error("product search failed: {0}")]
    Search(String),

    /// Invalid or incomplete adapter configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
