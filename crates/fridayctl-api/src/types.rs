//! Wire types for the device API.
//!
//! Shapes mirror what the device actually serializes. Unknown fields are
//! tolerated everywhere so a firmware update that adds a field does not
//! break decoding.

use serde::{Deserialize, Serialize};

/// Body of `GET`/`PUT /friday-discovery/name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameMessage {
    pub name: String,
}

/// Body of `GET /record/clips`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipList {
    pub ids: Vec<String>,
}

/// Body of `GET /record/new` and of the `listen`/`remove` requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipRef {
    pub id: String,
}

/// A Philips Hue light as reported by `GET /friday-vendor/philips-hue/lights`.
///
/// The device flattens the bridge's light resource into this shape; the
/// optional product metadata is absent on older bulbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub state: LightState,
    pub model_id: String,
    pub unique_id: String,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub manufacturer_name: Option<String>,
    pub software_version: String,
}

/// Partial light state. Only the fields present are applied by the
/// bridge, so every field is optional and absent fields are omitted on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<u8>,
}

/// One state change for one light. `PUT .../lights` takes a list of
/// these, and the keyword command map groups them per keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightUpdate {
    pub id: String,
    pub state: LightState,
}

impl LightUpdate {
    /// Convenience constructor for a plain on/off command.
    pub fn power(id: impl Into<String>, on: bool) -> Self {
        Self {
            id: id.into(),
            state: LightState {
                on: Some(on),
                ..LightState::default()
            },
        }
    }
}
