//! Showroom Domain - Core business types
//!
//! This crate defines the domain model for the Showroom catalog client:
//! catalog entities and their wire format, the authenticated profile,
//! the synchronized catalog state with its cascade rules, and client settings.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod settings;
pub mod state;

pub use auth::{AccountCredentials, AuthError, AuthState, Credential, Profile, TokenResponse};
pub use catalog::{
    Brand, BrandFields, CatalogEntity, Entity, EntityFields, EntityId, EntityKind, Segment,
    SegmentFields, Vehicle, VehicleFields,
};
pub use error::{DomainError, DomainResult};
pub use settings::ClientSettings;
pub use state::{CatalogAction, CatalogState, OperationStatus, Removal};
