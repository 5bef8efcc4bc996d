// Device API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, status checking, and
// typed JSON decoding. All endpoint groups (discovery, inference,
// scripts, hue, recording) are implemented as inherent methods via
// separate files to keep this module focused on transport mechanics.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the friday device API.
///
/// Every method issues one request, checks the status, and decodes the
/// body into its typed shape. There is no retry, no caching, and no
/// request deduplication at this layer -- that lives in
/// `fridayctl-core`.
pub struct FridayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FridayClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` is the device root, e.g. `http://friday.local:8000`
    /// on the LAN or a loopback address during development.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Build a full URL for a device API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::decode_json(resp).await
    }

    /// Send a PUT request with a JSON body, discarding the response body.
    ///
    /// The device answers writes with an informational message we have no
    /// use for; only the status matters.
    pub(crate) async fn put_json(&self, path: &str, body: &impl Serialize) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await.map(|_| ())
    }

    /// Send a PUT request with an empty body.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).send().await.map_err(Error::Transport)?;
        Self::check_status(resp).await.map(|_| ())
    }

    /// Send a POST request with a JSON body and return the raw bytes of
    /// the response. Used for the clip audio stream.
    pub(crate) async fn post_bytes(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<Bytes, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        let resp = Self::check_status(resp).await?;
        resp.bytes().await.map_err(Error::Transport)
    }

    /// Send a GET request, returning only whether it succeeded.
    ///
    /// The hue login-status route encodes its answer entirely in the
    /// status code: 200 means paired, 403 means not paired.
    pub(crate) async fn get_ok(&self, path: &str) -> Result<bool, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        match Self::check_status(resp).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_hue_unauthorized() => Ok(false),
            Err(err) => Err(err),
        }
    }

    // ── Decoding ─────────────────────────────────────────────────────

    /// Map a non-2xx response to `Error::Api` carrying the body text.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a JSON body, keeping the raw text around for diagnostics.
    async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
