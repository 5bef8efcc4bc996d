//! Cache-backed data layer between `fridayctl-api` and UI consumers.
//!
//! This crate owns the business logic and in-memory state for the
//! fridayctl workspace:
//!
//! - **[`Assistant`]** -- Central facade aggregating every device
//!   operation behind one type. Reads go through per-resource
//!   single-slot caches; writes go straight to the device and apply the
//!   cross-resource invalidation rules (for example, replacing the
//!   example map also drops the derived keyword cache).
//!
//! - **[`CacheSlot`]** -- One nullable cached value per resource,
//!   populated lazily on first read and cleared only by an explicit
//!   invalidation. There is no TTL: a populated slot is served until a
//!   write on a related resource clears it. Concurrent first reads are
//!   deduplicated; one fetch is issued and both callers see its result.
//!
//! - **Entity model** ([`model`]) -- View entities ([`Command`],
//!   [`DAction`]) reshaped from the device's wire maps, each carrying a
//!   generated id and a `watch`-based revision channel that rendering
//!   layers can subscribe to.
//!
//! - **Bijection layer** ([`convert`]) -- Converts between the device's
//!   grouped-by-keyword wire maps and the flat entity lists the UI
//!   edits. Round-trips preserve content, never ids.

pub mod assistant;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod sync;

// ── Primary re-exports ──────────────────────────────────────────────
pub use assistant::Assistant;
pub use config::AssistantConfig;
pub use error::CoreError;
pub use model::{Command, DAction, Vendor};
pub use store::CacheSlot;

// Re-export the wire types callers see through the facade.
pub use fridayctl_api::{Light, LightState, LightUpdate};
