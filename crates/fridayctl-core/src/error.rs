use thiserror::Error;

/// Error type for the core layer.
///
/// Mostly a passthrough of API failures; the facade never swallows an
/// error and never touches a cache on the failure path.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Failure reported by the device API client.
    #[error(transparent)]
    Api(#[from] fridayctl_api::Error),

    /// The configured device URL could not be parsed.
    #[error("Invalid device URL '{url}': {reason}")]
    InvalidDeviceUrl { url: String, reason: String },
}

impl CoreError {
    /// Returns `true` if retrying the operation might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_transient())
    }

    /// Returns `true` if the device answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }

    /// Returns `true` if the Hue bridge is not paired yet.
    pub fn is_hue_unauthorized(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_hue_unauthorized())
    }
}
