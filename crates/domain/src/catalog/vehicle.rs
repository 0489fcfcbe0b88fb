//! Vehicle entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CatalogEntity, Entity, EntityId, EntityKind};
use crate::state::CatalogState;

/// A vehicle in the catalog.
///
/// `segment_name` and `brand_name` are copies taken when the vehicle was
/// fetched or saved. Renaming a brand or segment does not touch them; they
/// refresh on the next vehicle fetch or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Server-assigned id.
    pub id: EntityId,
    /// Model name.
    #[serde(rename = "vehicle_name")]
    pub name: String,
    /// Model year.
    pub release_year: i32,
    /// List price. Accepted as a JSON number or a decimal string.
    pub price: Decimal,
    /// Id of the vehicle's segment.
    #[serde(rename = "segment")]
    pub segment_id: EntityId,
    /// Id of the vehicle's brand.
    #[serde(rename = "brand")]
    pub brand_id: EntityId,
    /// Segment display name at fetch time.
    #[serde(default)]
    pub segment_name: String,
    /// Brand display name at fetch time.
    #[serde(default)]
    pub brand_name: String,
}

impl Vehicle {
    /// Returns true if this vehicle references the given brand or segment.
    #[must_use]
    pub fn depends_on(&self, kind: EntityKind, id: EntityId) -> bool {
        match kind {
            EntityKind::Brand => self.brand_id == id,
            EntityKind::Segment => self.segment_id == id,
            EntityKind::Vehicle => false,
        }
    }
}

/// Writable vehicle fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VehicleFields {
    /// Model name.
    #[serde(rename = "vehicle_name")]
    pub name: String,
    /// Model year.
    pub release_year: i32,
    /// List price.
    pub price: Decimal,
    /// Id of the vehicle's segment.
    #[serde(rename = "segment")]
    pub segment_id: EntityId,
    /// Id of the vehicle's brand.
    #[serde(rename = "brand")]
    pub brand_id: EntityId,
}

impl CatalogEntity for Vehicle {
    type Fields = VehicleFields;

    const KIND: EntityKind = EntityKind::Vehicle;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> VehicleFields {
        VehicleFields {
            name: self.name.clone(),
            release_year: self.release_year,
            price: self.price,
            segment_id: self.segment_id,
            brand_id: self.brand_id,
        }
    }

    fn collection(state: &CatalogState) -> &[Self] {
        &state.vehicles
    }

    fn collection_mut(state: &mut CatalogState) -> &mut Vec<Self> {
        &mut state.vehicles
    }

    fn into_entity(self) -> Entity {
        Entity::Vehicle(self)
    }
}
