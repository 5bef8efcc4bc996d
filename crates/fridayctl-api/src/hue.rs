// Philips Hue vendor endpoints
//
// The device proxies a paired Hue bridge: light listing and ad-hoc
// state changes, plus the keyword to command-list map that fires light
// commands on recognition. The lights routes answer 403 until a login
// (bridge pairing) has completed.

use std::collections::BTreeMap;

use tracing::debug;

use crate::client::FridayClient;
use crate::error::Error;
use crate::types::{Light, LightUpdate};

const LIGHTS_PATH: &str = "/friday-vendor/philips-hue/lights";
const COMMANDS_PATH: &str = "/friday-vendor/philips-hue/lights/commands";
const LOGIN_PATH: &str = "/friday-vendor/philips-hue/login";

impl FridayClient {
    /// List all lights known to the paired bridge.
    ///
    /// `GET /friday-vendor/philips-hue/lights`
    pub async fn lights(&self) -> Result<Vec<Light>, Error> {
        self.get_json(LIGHTS_PATH).await
    }

    /// Apply ad-hoc state changes to lights.
    ///
    /// `PUT /friday-vendor/philips-hue/lights`
    pub async fn set_lights(&self, updates: &[LightUpdate]) -> Result<(), Error> {
        self.put_json(LIGHTS_PATH, &updates).await
    }

    /// Fetch the keyword to light-command bindings.
    ///
    /// `GET /friday-vendor/philips-hue/lights/commands`
    pub async fn light_commands(&self) -> Result<BTreeMap<String, Vec<LightUpdate>>, Error> {
        self.get_json(COMMANDS_PATH).await
    }

    /// Replace the keyword to light-command bindings.
    ///
    /// `PUT /friday-vendor/philips-hue/lights/commands`
    pub async fn set_light_commands(
        &self,
        commands: &BTreeMap<String, Vec<LightUpdate>>,
    ) -> Result<(), Error> {
        self.put_json(COMMANDS_PATH, commands).await
    }

    /// Whether the device is paired with a Hue bridge.
    ///
    /// `GET /friday-vendor/philips-hue/login` -- 200 means paired, 403
    /// means not paired.
    pub async fn hue_login_status(&self) -> Result<bool, Error> {
        self.get_ok(LOGIN_PATH).await
    }

    /// Start bridge pairing. The bridge's link button must be pressed
    /// within its pairing window for this to succeed.
    ///
    /// `PUT /friday-vendor/philips-hue/login`
    pub async fn hue_login(&self) -> Result<(), Error> {
        debug!("starting hue bridge pairing");
        self.put_empty(LOGIN_PATH).await
    }
}
