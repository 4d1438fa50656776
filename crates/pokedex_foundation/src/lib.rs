//! Identifiers, errors, persistent collections, and the sync trigger contract.
//!
//! This crate provides:
//! - [`RecordId`] - Integer identifiers shared by every concept
//! - [`Error`] - Error types for concept mutations
//! - Persistent collections ([`PVec`], [`PMap`]) whose clones are independent values
//! - [`SyncTrigger`] - The output-notification contract concepts call after a mutation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod id;
pub mod trigger;

pub use collections::{PMap, PVec};
pub use error::{Error, ErrorKind, Result};
pub use id::RecordId;
pub use trigger::{NoopTrigger, SyncTrigger};
