use thiserror::Error;

/// Top-level error type for the `fridayctl-api` crate.
///
/// Covers every failure mode the device API can produce: transport
/// failures, non-2xx statuses, and bodies that fail to decode.
/// `fridayctl-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Device API ──────────────────────────────────────────────────
    /// Non-2xx response from the device. The body is the device's own
    /// error text (often a plain string, sometimes empty).
    #[error("Device API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Returns `true` if the device rejected the call because the Hue
    /// bridge is not paired yet (it answers 403 on the lights routes).
    pub fn is_hue_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 403, .. })
    }
}
