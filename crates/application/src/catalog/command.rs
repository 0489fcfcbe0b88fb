//! Catalog commands

use showroom_domain::{CatalogAction, Entity, EntityFields, EntityId, EntityKind};

/// An operation on the [`CatalogStore`](super::CatalogStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    /// Replace a collection with the server's list.
    FetchAll(EntityKind),
    /// Create an entity; the kind follows from the fields.
    Create(EntityFields),
    /// Update the entity with the given id; the kind follows from the fields.
    Update(EntityId, EntityFields),
    /// Delete an entity, cascading to vehicles for brands and segments.
    Delete(EntityKind, EntityId),
}

impl CatalogCommand {
    /// The collection this command targets.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::FetchAll(kind) | Self::Delete(kind, _) => *kind,
            Self::Create(fields) | Self::Update(_, fields) => fields.kind(),
        }
    }

    /// The action this command performs.
    #[must_use]
    pub const fn action(&self) -> CatalogAction {
        match self {
            Self::FetchAll(_) => CatalogAction::Fetch,
            Self::Create(_) => CatalogAction::Create,
            Self::Update(..) => CatalogAction::Update,
            Self::Delete(..) => CatalogAction::Delete,
        }
    }
}

/// Successful result of a [`CatalogCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// The collection now holds exactly these entities, in this order.
    Fetched(Vec<Entity>),
    /// The entity was appended.
    Created(Entity),
    /// The entity was replaced in place.
    Updated(Entity),
    /// The entity was removed.
    Deleted {
        /// Kind of the removed entity.
        kind: EntityKind,
        /// Id of the removed entity.
        id: EntityId,
    },
}
