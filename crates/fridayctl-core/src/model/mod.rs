//! View-model entities reshaped from the device's wire maps.
//!
//! Entities carry a generated [`uuid::Uuid`] id for list rendering. Ids
//! are never persisted and are regenerated every time a wire map is
//! reshaped into entities. Instead of holding a pointer back into
//! whatever renders them, entities expose a `watch`-based revision
//! channel; a rendering layer subscribes and re-reads on change.

mod action;
mod command;

pub use action::{DAction, Vendor};
pub use command::Command;
