//! Segment entity

use serde::{Deserialize, Serialize};

use super::{CatalogEntity, Entity, EntityId, EntityKind};
use crate::state::CatalogState;

/// A market segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Server-assigned id.
    pub id: EntityId,
    /// Display name.
    #[serde(rename = "segment_name")]
    pub name: String,
}

/// Writable segment fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SegmentFields {
    /// Display name.
    #[serde(rename = "segment_name")]
    pub name: String,
}

impl SegmentFields {
    /// Creates segment fields with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl CatalogEntity for Segment {
    type Fields = SegmentFields;

    const KIND: EntityKind = EntityKind::Segment;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> SegmentFields {
        SegmentFields::new(self.name.clone())
    }

    fn collection(state: &CatalogState) -> &[Self] {
        &state.segments
    }

    fn collection_mut(state: &mut CatalogState) -> &mut Vec<Self> {
        &mut state.segments
    }

    fn into_entity(self) -> Entity {
        Entity::Segment(self)
    }
}
