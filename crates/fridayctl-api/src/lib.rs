//! Async client for the friday voice-assistant device's HTTP API.
//!
//! The device exposes a handful of small JSON services on the local
//! network: discovery (device name), inference (keyword examples and
//! classifier classes), vendor integrations (script bindings, Philips
//! Hue), and the voice-clip recorder. [`FridayClient`] wraps them all
//! behind typed methods.
//!
//! Responses are decoded into serde types at the transport boundary; a
//! body that does not match the expected shape fails loudly as
//! [`Error::Deserialization`] instead of leaking malformed data to the
//! caller.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod discovery;
mod hue;
mod inference;
mod recording;
mod scripts;

pub use client::FridayClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{ClipList, ClipRef, Light, LightState, LightUpdate};
