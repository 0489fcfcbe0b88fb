//! Catalog state and per-collection operation status.
//!
//! `CatalogState` holds the three ordered collections. Every mutation here is
//! a plain in-memory step; the store publishes the resulting snapshot as one
//! update, so a delete and its cascade are never observed separately.

use serde::{Deserialize, Serialize};

use crate::catalog::{Brand, CatalogEntity, EntityId, EntityKind, Segment, Vehicle};

/// The four catalog operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogAction {
    /// Load the whole collection.
    Fetch,
    /// Add one entity.
    Create,
    /// Replace one entity.
    Update,
    /// Remove one entity.
    Delete,
}

/// Status of the last operation on one collection.
///
/// The UI maps this to a fixed message per collection and action:
/// - `Idle`: nothing to show
/// - `Pending`: request in flight
/// - `Succeeded`: confirmation message
/// - `Failed`: per-action error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OperationStatus {
    /// No operation has run yet.
    #[default]
    Idle,

    /// A request is in flight.
    Pending {
        /// The running action.
        action: CatalogAction,
    },

    /// The last request succeeded.
    Succeeded {
        /// The completed action.
        action: CatalogAction,
    },

    /// The last request failed.
    Failed {
        /// The failed action.
        action: CatalogAction,
        /// Error detail from the transport.
        message: String,
    },
}

impl OperationStatus {
    /// Creates a Pending state.
    #[must_use]
    pub const fn pending(action: CatalogAction) -> Self {
        Self::Pending { action }
    }

    /// Creates a Succeeded state.
    #[must_use]
    pub const fn succeeded(action: CatalogAction) -> Self {
        Self::Succeeded { action }
    }

    /// Creates a Failed state.
    #[must_use]
    pub fn failed(action: CatalogAction, message: impl Into<String>) -> Self {
        Self::Failed {
            action,
            message: message.into(),
        }
    }

    /// Returns true if a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Returns true if the last request failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The action this status refers to, if any.
    #[must_use]
    pub const fn action(&self) -> Option<CatalogAction> {
        match self {
            Self::Idle => None,
            Self::Pending { action } | Self::Succeeded { action } | Self::Failed { action, .. } => {
                Some(*action)
            }
        }
    }

    /// The error detail, if the last request failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result of removing an entity from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Removal {
    /// Whether the entity itself was present.
    pub removed: bool,
    /// Ids of vehicles removed because they referenced the entity.
    pub cascaded: Vec<EntityId>,
}

/// The synchronized catalog: brands, segments and vehicles, each in server
/// order, plus the status of the last operation on each collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    pub(crate) brands: Vec<Brand>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) vehicles: Vec<Vehicle>,
    brand_status: OperationStatus,
    segment_status: OperationStatus,
    vehicle_status: OperationStatus,
}

impl CatalogState {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brands in server order.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Segments in server order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Vehicles in server order.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The collection for entity type `E`.
    #[must_use]
    pub fn collection<E: CatalogEntity>(&self) -> &[E] {
        E::collection(self)
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn find<E: CatalogEntity>(&self, id: EntityId) -> Option<&E> {
        E::collection(self).iter().find(|e| e.id() == id)
    }

    /// Status of the last operation on a collection.
    #[must_use]
    pub const fn status(&self, kind: EntityKind) -> &OperationStatus {
        match kind {
            EntityKind::Brand => &self.brand_status,
            EntityKind::Segment => &self.segment_status,
            EntityKind::Vehicle => &self.vehicle_status,
        }
    }

    /// Sets the status of a collection.
    pub fn set_status(&mut self, kind: EntityKind, status: OperationStatus) {
        match kind {
            EntityKind::Brand => self.brand_status = status,
            EntityKind::Segment => self.segment_status = status,
            EntityKind::Vehicle => self.vehicle_status = status,
        }
    }

    /// Replaces a whole collection with the server's list.
    pub fn replace_all<E: CatalogEntity>(&mut self, items: Vec<E>) {
        *E::collection_mut(self) = items;
    }

    /// Appends a newly created entity.
    pub fn append<E: CatalogEntity>(&mut self, item: E) {
        E::collection_mut(self).push(item);
    }

    /// Replaces the entity with the same id in place.
    ///
    /// Returns false and leaves the collection untouched if no entity has
    /// that id (for example, it was deleted while the update was in flight).
    pub fn replace<E: CatalogEntity>(&mut self, item: E) -> bool {
        let id = item.id();
        match E::collection_mut(self).iter_mut().find(|e| e.id() == id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Removes an entity and, for brands and segments, every vehicle that
    /// references it.
    pub fn remove(&mut self, kind: EntityKind, id: EntityId) -> Removal {
        let removed = match kind {
            EntityKind::Brand => remove_by_id(&mut self.brands, id),
            EntityKind::Segment => remove_by_id(&mut self.segments, id),
            EntityKind::Vehicle => remove_by_id(&mut self.vehicles, id),
        };

        let mut cascaded = Vec::new();
        if kind.cascades_to_vehicles() {
            self.vehicles.retain(|v| {
                let dependent = v.depends_on(kind, id);
                if dependent {
                    cascaded.push(v.id);
                }
                !dependent
            });
        }

        Removal { removed, cascaded }
    }
}

fn remove_by_id<E: CatalogEntity>(items: &mut Vec<E>, id: EntityId) -> bool {
    let before = items.len();
    items.retain(|e| e.id() != id);
    items.len() != before
}
