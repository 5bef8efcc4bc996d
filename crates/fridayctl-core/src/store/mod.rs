//! In-memory mirrors of device state.
//!
//! One [`CacheSlot`] per REST resource, grouped in [`Caches`] and owned
//! by the facade. Nothing here is persistent: the device is the source
//! of truth and every slot is a disposable mirror.

mod slot;

pub use slot::CacheSlot;

use std::collections::BTreeMap;

use fridayctl_api::{Light, LightUpdate};

/// All per-resource cache slots, one field per resource kind.
///
/// Constructed empty at facade creation. The facade is the only place
/// that clears slots, so every cross-resource invalidation rule is
/// visible in one file rather than scattered across call sites.
#[derive(Default)]
pub(crate) struct Caches {
    pub device_name: CacheSlot<String>,
    pub examples: CacheSlot<BTreeMap<String, String>>,
    pub keywords: CacheSlot<Vec<String>>,
    pub bound_scripts: CacheSlot<BTreeMap<String, Vec<String>>>,
    pub all_scripts: CacheSlot<Vec<String>>,
    pub lights: CacheSlot<Vec<Light>>,
    pub light_commands: CacheSlot<BTreeMap<String, Vec<LightUpdate>>>,
    pub clips: CacheSlot<Vec<String>>,
}
