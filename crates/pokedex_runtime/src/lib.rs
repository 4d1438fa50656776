//! Sync engine, configuration, logging, and demo CLI for Pokedex concepts.
//!
//! This crate provides:
//! - [`SyncEngine`] - A coordinator that records and dispatches `data_updated` events
//! - [`Pokedex`] - Both concepts wired to one engine
//! - [`RuntimeConfig`] - Command-line configuration
//! - [`logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod pokedex;
pub mod sync;

pub use config::RuntimeConfig;
pub use error::{Error, Result};
pub use pokedex::Pokedex;
pub use sync::{SyncEngine, SyncEvent};
