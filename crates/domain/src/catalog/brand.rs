//! Brand entity

use serde::{Deserialize, Serialize};

use super::{CatalogEntity, Entity, EntityId, EntityKind};
use crate::state::CatalogState;

/// A vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Server-assigned id.
    pub id: EntityId,
    /// Display name.
    #[serde(rename = "brand_name")]
    pub name: String,
}

/// Writable brand fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BrandFields {
    /// Display name.
    #[serde(rename = "brand_name")]
    pub name: String,
}

impl BrandFields {
    /// Creates brand fields with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl CatalogEntity for Brand {
    type Fields = BrandFields;

    const KIND: EntityKind = EntityKind::Brand;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> BrandFields {
        BrandFields::new(self.name.clone())
    }

    fn collection(state: &CatalogState) -> &[Self] {
        &state.brands
    }

    fn collection_mut(state: &mut CatalogState) -> &mut Vec<Self> {
        &mut state.brands
    }

    fn into_entity(self) -> Entity {
        Entity::Brand(self)
    }
}
