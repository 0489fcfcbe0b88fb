//! Entity kinds and the trait shared by every catalog collection.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Brand, BrandFields, Segment, SegmentFields, Vehicle, VehicleFields};
use crate::state::CatalogState;

/// Server-assigned identifier. Ids are never reused within a session.
pub type EntityId = i64;

/// The three catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Vehicle manufacturers.
    Brand,
    /// Market segments.
    Segment,
    /// Vehicles, each referencing one brand and one segment.
    Vehicle,
}

impl EntityKind {
    /// All kinds, in the order the main page loads them.
    pub const ALL: [Self; 3] = [Self::Segment, Self::Brand, Self::Vehicle];

    /// Lowercase singular name, as used in status messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Segment => "segment",
            Self::Vehicle => "vehicle",
        }
    }

    /// Path of the collection endpoint, relative to the API origin.
    #[must_use]
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Brand => "api/brands/",
            Self::Segment => "api/segments/",
            Self::Vehicle => "api/vehicles/",
        }
    }

    /// Path of a single entity's endpoint.
    #[must_use]
    pub fn member_path(self, id: EntityId) -> String {
        format!("{}{id}/", self.collection_path())
    }

    /// Whether deleting an entity of this kind removes dependent vehicles.
    #[must_use]
    pub const fn cascades_to_vehicles(self) -> bool {
        matches!(self, Self::Brand | Self::Segment)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entity type bound to its slot in [`CatalogState`].
///
/// Implemented by [`Brand`], [`Segment`] and [`Vehicle`]; lets the store run
/// one generic fetch/create/update/delete path for all three collections.
pub trait CatalogEntity:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Writable fields sent on create and update.
    type Fields: Clone + fmt::Debug + Serialize + Send + Sync + 'static;

    /// Which collection this entity lives in.
    const KIND: EntityKind;

    /// The entity's id.
    fn id(&self) -> EntityId;

    /// Display name.
    fn name(&self) -> &str;

    /// The writable fields of this entity, used to prefill edit forms.
    fn fields(&self) -> Self::Fields;

    /// Read access to this entity's collection.
    fn collection(state: &CatalogState) -> &[Self];

    /// Write access to this entity's collection.
    fn collection_mut(state: &mut CatalogState) -> &mut Vec<Self>;

    /// Wraps the entity in the kind-tagged [`Entity`] enum.
    fn into_entity(self) -> Entity;
}

/// Any catalog entity, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// A brand.
    Brand(Brand),
    /// A segment.
    Segment(Segment),
    /// A vehicle.
    Vehicle(Vehicle),
}

impl Entity {
    /// The entity's kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Brand(_) => EntityKind::Brand,
            Self::Segment(_) => EntityKind::Segment,
            Self::Vehicle(_) => EntityKind::Vehicle,
        }
    }

    /// The entity's id.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        match self {
            Self::Brand(b) => b.id,
            Self::Segment(s) => s.id,
            Self::Vehicle(v) => v.id,
        }
    }
}

/// Writable fields for any kind, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityFields {
    /// Brand fields.
    Brand(BrandFields),
    /// Segment fields.
    Segment(SegmentFields),
    /// Vehicle fields.
    Vehicle(VehicleFields),
}

impl EntityFields {
    /// The kind these fields belong to.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Brand(_) => EntityKind::Brand,
            Self::Segment(_) => EntityKind::Segment,
            Self::Vehicle(_) => EntityKind::Vehicle,
        }
    }
}
