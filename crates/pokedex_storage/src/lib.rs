//! Entity stores and the generic concept service for Pokedex concepts.
//!
//! This crate provides:
//! - [`EntityStore`] - Insertion-ordered record storage keyed by [`RecordId`]
//! - [`Concept`] - The per-concept record, draft, and patch definitions
//! - [`ConceptService`] - The `view`/`create`/`update` action surface
//! - [`ConceptConfig`] - Identifier allocation policy
//!
//! [`RecordId`]: pokedex_foundation::RecordId

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod concept;
pub mod config;
pub mod service;
pub mod store;

pub use concept::Concept;
pub use config::{ConceptConfig, IdAllocation};
pub use service::ConceptService;
pub use store::EntityStore;
