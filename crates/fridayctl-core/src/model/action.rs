use fridayctl_api::LightUpdate;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

/// Which vendor integration executes an action's command.
///
/// Philips Hue is the only integration the device currently proxies;
/// the tag exists so grouped wire maps from other vendors can coexist
/// in one action list later.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Vendor {
    #[strum(serialize = "hue-lights")]
    #[serde(rename = "hueLights")]
    HueLights,
}

/// One vendor command bound to a keyword.
///
/// Many actions may share a keyword; the bijection layer groups them by
/// keyword when serializing to the device's wire shape and flattens
/// them back, assigning fresh ids, when deserializing.
#[derive(Debug)]
pub struct DAction {
    id: Uuid,
    keyword: String,
    vendor: Vendor,
    command: LightUpdate,
    revision: watch::Sender<u64>,
}

impl DAction {
    pub fn new(keyword: impl Into<String>, vendor: Vendor, command: LightUpdate) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            id: Uuid::new_v4(),
            keyword: keyword.into(),
            vendor,
            command,
            revision,
        }
    }

    /// Generated UI-only identifier. Never serialized.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    pub fn command(&self) -> &LightUpdate {
        &self.command
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.bump();
    }

    pub fn set_command(&mut self, command: LightUpdate) {
        self.command = command;
        self.bump();
    }

    /// Subscribe to mutations, same contract as [`super::Command::subscribe`].
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}
