//! Catalog entities: brands, segments and vehicles.
//!
//! Field names follow the Rust model; the `serde` attributes map them onto
//! the service's snake_case wire names (`brand_name`, `segment`, ...).

mod brand;
mod entity;
mod segment;
mod vehicle;

pub use brand::{Brand, BrandFields};
pub use entity::{CatalogEntity, Entity, EntityFields, EntityId, EntityKind};
pub use segment::{Segment, SegmentFields};
pub use vehicle::{Vehicle, VehicleFields};
