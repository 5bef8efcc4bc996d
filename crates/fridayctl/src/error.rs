//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text.

use miette::Diagnostic;
use thiserror::Error;

use fridayctl_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("No device configured")]
    #[diagnostic(
        code(fridayctl::no_device),
        help(
            "Pass --device, set FRIDAY_DEVICE, or run: fridayctl config init\n\
             Config file: {path}"
        )
    )]
    NoDevice { path: String },

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(fridayctl::validation))]
    Validation { field: String, reason: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the device at {url}")]
    #[diagnostic(
        code(fridayctl::connection_failed),
        help("Check that the device is powered on and on the same network.")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: CoreError,
    },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(fridayctl::not_found),
        help("Run: fridayctl {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("The device is not paired with a Hue bridge")]
    #[diagnostic(
        code(fridayctl::hue_not_paired),
        help("Press the bridge's link button, then run: fridayctl hue login")
    )]
    HueNotPaired,

    // ── Device API ───────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(fridayctl::device_error))]
    Device(CoreError),

    // ── Local I/O ────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    #[diagnostic(code(fridayctl::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to its process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoDevice { .. } | Self::Validation { .. } => exit_code::USAGE,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }

    /// Wrap a core error, picking the most specific CLI variant.
    pub fn from_core(err: CoreError, device_url: &url::Url) -> Self {
        if err.is_hue_unauthorized() {
            Self::HueNotPaired
        } else if err.is_transient() {
            Self::ConnectionFailed {
                url: device_url.to_string(),
                source: err,
            }
        } else {
            Self::Device(err)
        }
    }
}
