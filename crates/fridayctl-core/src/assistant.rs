//! The facade: one access point for every device operation.
//!
//! Reads are memoized through the per-resource [`Caches`] slots; writes
//! go straight to the device and, only after success, apply the
//! cross-resource invalidation rules. All of those rules live in this
//! file:
//!
//! - `set_examples` clears the examples cache AND the keywords cache
//!   (keywords are derived from examples server-side)
//! - `set_bound_scripts` clears the bound-scripts cache only
//! - `new_clip` / `remove_clip` / `rename_clip` edit the cached clip id
//!   list in place instead of re-fetching
//! - the hue setters clear their own resource's cache
//!
//! A failed write propagates its error and leaves every cache untouched.

use std::collections::BTreeMap;

use bytes::Bytes;
use tracing::debug;

use fridayctl_api::{FridayClient, Light, LightUpdate, TransportConfig};

use crate::config::AssistantConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::{Command, DAction};
use crate::store::Caches;

/// Facade over one friday device.
///
/// Owns the HTTP client and all cache slots. Cheap to share behind an
/// `Arc`; all methods take `&self`.
pub struct Assistant {
    api: FridayClient,
    caches: Caches,
}

impl Assistant {
    /// Connect settings -> facade. No request is issued until the first
    /// read.
    pub fn new(config: &AssistantConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let api = FridayClient::new(config.url.clone(), &transport)?;
        Ok(Self::from_client(api))
    }

    /// Wrap an existing API client, starting with empty caches.
    pub fn from_client(api: FridayClient) -> Self {
        Self {
            api,
            caches: Caches::default(),
        }
    }

    /// The underlying API client, for operations that bypass caching.
    pub fn api(&self) -> &FridayClient {
        &self.api
    }

    // ── Device name ──────────────────────────────────────────────────

    /// The device's user-visible name (cached).
    pub async fn device_name(&self) -> Result<String, CoreError> {
        self.caches
            .device_name
            .get_or_fetch(|| self.api.device_name())
            .await
            .map_err(CoreError::Api)
    }

    /// Rename the device, then drop the cached name.
    pub async fn set_device_name(&self, name: &str) -> Result<(), CoreError> {
        self.api.set_device_name(name).await?;
        self.caches.device_name.clear().await;
        Ok(())
    }

    // ── Keywords & examples ──────────────────────────────────────────

    /// Recognized keywords (cached). Derived server-side from examples.
    pub async fn keywords(&self) -> Result<Vec<String>, CoreError> {
        self.caches
            .keywords
            .get_or_fetch(|| self.api.classes())
            .await
            .map_err(CoreError::Api)
    }

    /// The clip-file to keyword example map (cached).
    pub async fn examples(&self) -> Result<BTreeMap<String, String>, CoreError> {
        self.caches
            .examples
            .get_or_fetch(|| self.api.examples())
            .await
            .map_err(CoreError::Api)
    }

    /// Replace the example map.
    ///
    /// Clears the examples cache and the derived keywords cache, so the
    /// next read of either re-fetches.
    pub async fn set_examples(&self, examples: &BTreeMap<String, String>) -> Result<(), CoreError> {
        self.api.set_examples(examples).await?;
        self.caches.examples.clear().await;
        self.caches.keywords.clear().await;
        Ok(())
    }

    // ── Scripts ──────────────────────────────────────────────────────

    /// Keyword to script-list bindings (cached).
    pub async fn bound_scripts(&self) -> Result<BTreeMap<String, Vec<String>>, CoreError> {
        self.caches
            .bound_scripts
            .get_or_fetch(|| self.api.bound_scripts())
            .await
            .map_err(CoreError::Api)
    }

    /// Replace the script bindings. Clears the bound-scripts cache only.
    pub async fn set_bound_scripts(
        &self,
        bound: &BTreeMap<String, Vec<String>>,
    ) -> Result<(), CoreError> {
        self.api.set_bound_scripts(bound).await?;
        self.caches.bound_scripts.clear().await;
        Ok(())
    }

    /// Every script present on the device (cached).
    pub async fn all_scripts(&self) -> Result<Vec<String>, CoreError> {
        self.caches
            .all_scripts
            .get_or_fetch(|| self.api.all_scripts())
            .await
            .map_err(CoreError::Api)
    }

    /// The script bindings reshaped into `Command` view entities.
    ///
    /// Entities are rebuilt (with fresh ids) on every call; the
    /// underlying map read is cached.
    pub async fn commands(&self) -> Result<Vec<Command>, CoreError> {
        Ok(convert::commands_from_bound(&self.bound_scripts().await?))
    }

    // ── Philips Hue ──────────────────────────────────────────────────

    /// Lights known to the paired bridge (cached).
    pub async fn lights(&self) -> Result<Vec<Light>, CoreError> {
        self.caches
            .lights
            .get_or_fetch(|| self.api.lights())
            .await
            .map_err(CoreError::Api)
    }

    /// Apply ad-hoc light state changes, then drop the cached light
    /// list so the next read reflects them.
    pub async fn set_lights(&self, updates: &[LightUpdate]) -> Result<(), CoreError> {
        self.api.set_lights(updates).await?;
        self.caches.lights.clear().await;
        Ok(())
    }

    /// Keyword to light-command bindings (cached).
    pub async fn light_commands(&self) -> Result<BTreeMap<String, Vec<LightUpdate>>, CoreError> {
        self.caches
            .light_commands
            .get_or_fetch(|| self.api.light_commands())
            .await
            .map_err(CoreError::Api)
    }

    /// Replace the light-command bindings. Clears their cache only.
    pub async fn set_light_commands(
        &self,
        commands: &BTreeMap<String, Vec<LightUpdate>>,
    ) -> Result<(), CoreError> {
        self.api.set_light_commands(commands).await?;
        self.caches.light_commands.clear().await;
        Ok(())
    }

    /// The light-command bindings as flat `DAction` entities.
    pub async fn light_actions(&self) -> Result<Vec<DAction>, CoreError> {
        Ok(convert::light_commands_to_actions(
            &self.light_commands().await?,
        ))
    }

    /// Serialize `DAction` entities into the wire map and push it.
    pub async fn set_light_actions(&self, actions: &[DAction]) -> Result<(), CoreError> {
        self.set_light_commands(&convert::actions_to_light_commands(actions))
            .await
    }

    /// Whether the device is paired with a Hue bridge.
    pub async fn hue_login_status(&self) -> Result<bool, CoreError> {
        Ok(self.api.hue_login_status().await?)
    }

    /// Start bridge pairing.
    pub async fn hue_login(&self) -> Result<(), CoreError> {
        Ok(self.api.hue_login().await?)
    }

    // ── Recording clips ──────────────────────────────────────────────

    /// Recorded clip ids (cached).
    pub async fn clips(&self) -> Result<Vec<String>, CoreError> {
        self.caches
            .clips
            .get_or_fetch(|| async { self.api.clips().await.map(|list| list.ids) })
            .await
            .map_err(CoreError::Api)
    }

    /// Record a new clip. On success the returned id is appended to the
    /// cached clip list -- no re-fetch.
    pub async fn new_clip(&self) -> Result<String, CoreError> {
        let clip = self.api.new_clip().await?;
        debug!("recorded new clip {}", clip.id);
        let id = clip.id.clone();
        self.caches.clips.mutate(|ids| ids.push(id)).await;
        Ok(clip.id)
    }

    /// Delete a clip. On success exactly that id is filtered out of the
    /// cached clip list.
    pub async fn remove_clip(&self, id: &str) -> Result<(), CoreError> {
        self.api.remove_clip(id).await?;
        self.caches.clips.mutate(|ids| ids.retain(|v| v != id)).await;
        Ok(())
    }

    /// Rename a clip. On success the old id is filtered out of the
    /// cached list and the new id appended.
    pub async fn rename_clip(&self, old_id: &str, new_id: &str) -> Result<(), CoreError> {
        self.api.rename_clip(old_id, new_id).await?;
        self.caches
            .clips
            .mutate(|ids| {
                ids.retain(|v| v != old_id);
                ids.push(new_id.to_owned());
            })
            .await;
        Ok(())
    }

    /// A clip's WAV audio. Never cached.
    pub async fn clip_audio(&self, id: &str) -> Result<Bytes, CoreError> {
        Ok(self.api.listen(id).await?)
    }
}
