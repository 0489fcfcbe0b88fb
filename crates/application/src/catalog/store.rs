//! Catalog store: brands, segments and vehicles kept in sync with the service.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use showroom_domain::{
    Brand, CatalogAction, CatalogEntity, CatalogState, EntityFields, EntityId, EntityKind,
    OperationStatus, Segment, Vehicle,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{CatalogCommand, CatalogOutcome};
use crate::{HttpError, HttpMethod, HttpResult, Transport};

/// Owns the three catalog collections and their operation status.
///
/// Every operation publishes at most three snapshots: `Pending` when the
/// request starts, then one snapshot carrying both the collection change and
/// the final status. Failed requests never touch the collections.
///
/// Independent operations may run concurrently; each writes only its own
/// collection and status slot. Two racing operations on the same entity
/// resolve in completion order.
pub struct CatalogStore<T: Transport> {
    transport: Arc<T>,
    state: watch::Sender<CatalogState>,
}

impl<T: Transport> CatalogStore<T> {
    /// Creates a store with empty collections.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            state: watch::Sender::new(CatalogState::new()),
        }
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Status of the last operation on a collection.
    #[must_use]
    pub fn status(&self, kind: EntityKind) -> OperationStatus {
        self.state.borrow().status(kind).clone()
    }

    /// Receives every subsequent state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    /// Runs one command.
    ///
    /// # Errors
    ///
    /// Returns the failure of the underlying operation.
    pub async fn dispatch(&self, command: CatalogCommand) -> HttpResult<CatalogOutcome> {
        match command {
            CatalogCommand::FetchAll(EntityKind::Brand) => self.fetch_entities::<Brand>().await,
            CatalogCommand::FetchAll(EntityKind::Segment) => {
                self.fetch_entities::<Segment>().await
            }
            CatalogCommand::FetchAll(EntityKind::Vehicle) => {
                self.fetch_entities::<Vehicle>().await
            }
            CatalogCommand::Create(EntityFields::Brand(fields)) => {
                self.create::<Brand>(&fields).await.map(created)
            }
            CatalogCommand::Create(EntityFields::Segment(fields)) => {
                self.create::<Segment>(&fields).await.map(created)
            }
            CatalogCommand::Create(EntityFields::Vehicle(fields)) => {
                self.create::<Vehicle>(&fields).await.map(created)
            }
            CatalogCommand::Update(id, EntityFields::Brand(fields)) => {
                self.update::<Brand>(id, &fields).await.map(updated)
            }
            CatalogCommand::Update(id, EntityFields::Segment(fields)) => {
                self.update::<Segment>(id, &fields).await.map(updated)
            }
            CatalogCommand::Update(id, EntityFields::Vehicle(fields)) => {
                self.update::<Vehicle>(id, &fields).await.map(updated)
            }
            CatalogCommand::Delete(kind, id) => self
                .delete(kind, id)
                .await
                .map(|()| CatalogOutcome::Deleted { kind, id }),
        }
    }

    async fn fetch_entities<E: CatalogEntity>(&self) -> HttpResult<CatalogOutcome> {
        let items = self.fetch_all::<E>().await?;
        Ok(CatalogOutcome::Fetched(
            items.into_iter().map(CatalogEntity::into_entity).collect(),
        ))
    }

    /// Loads a whole collection and replaces the local one with it.
    ///
    /// # Errors
    ///
    /// Returns the request or decode failure; the local collection is kept.
    pub async fn fetch_all<E: CatalogEntity>(&self) -> HttpResult<Vec<E>> {
        let kind = E::KIND;
        self.begin(kind, CatalogAction::Fetch);

        let result: HttpResult<Vec<E>> = self
            .send(HttpMethod::Get, kind.collection_path(), None)
            .await;

        match &result {
            Ok(items) => {
                debug!(%kind, count = items.len(), "collection fetched");
                let items = items.clone();
                self.complete(kind, CatalogAction::Fetch, |state| state.replace_all(items));
            }
            Err(error) => self.fail(kind, CatalogAction::Fetch, error),
        }
        result
    }

    /// Creates an entity and appends the server's copy to the collection.
    ///
    /// # Errors
    ///
    /// Returns the request or decode failure; the collection is unchanged.
    pub async fn create<E: CatalogEntity>(&self, fields: &E::Fields) -> HttpResult<E> {
        let kind = E::KIND;
        self.begin(kind, CatalogAction::Create);

        let result: HttpResult<E> = match encode(fields) {
            Ok(body) => {
                self.send(HttpMethod::Post, kind.collection_path(), Some(body))
                    .await
            }
            Err(error) => Err(error),
        };

        match &result {
            Ok(entity) => {
                info!(%kind, id = entity.id(), name = entity.name(), "entity created");
                let entity = entity.clone();
                self.complete(kind, CatalogAction::Create, |state| state.append(entity));
            }
            Err(error) => self.fail(kind, CatalogAction::Create, error),
        }
        result
    }

    /// Updates an entity and replaces it in place with the server's copy.
    ///
    /// Vehicles keep the brand and segment names they were fetched with.
    ///
    /// # Errors
    ///
    /// Returns the request or decode failure; the collection is unchanged.
    pub async fn update<E: CatalogEntity>(
        &self,
        id: EntityId,
        fields: &E::Fields,
    ) -> HttpResult<E> {
        let kind = E::KIND;
        self.begin(kind, CatalogAction::Update);

        let result: HttpResult<E> = match encode(fields) {
            Ok(body) => {
                self.send(HttpMethod::Put, &kind.member_path(id), Some(body))
                    .await
            }
            Err(error) => Err(error),
        };

        match &result {
            Ok(entity) => {
                info!(%kind, id, name = entity.name(), "entity updated");
                let entity = entity.clone();
                self.complete(kind, CatalogAction::Update, |state| {
                    if !state.replace(entity) {
                        warn!(%kind, id, "updated entity is no longer in the collection");
                    }
                });
            }
            Err(error) => self.fail(kind, CatalogAction::Update, error),
        }
        result
    }

    /// Deletes an entity. Deleting a brand or segment also removes every
    /// vehicle that references it, in the same published update.
    ///
    /// # Errors
    ///
    /// Returns the request failure; no collection is changed.
    pub async fn delete(&self, kind: EntityKind, id: EntityId) -> HttpResult<()> {
        self.begin(kind, CatalogAction::Delete);

        let result = self
            .transport
            .request(HttpMethod::Delete, &kind.member_path(id), None, true)
            .await
            .map(|_| ());

        match &result {
            Ok(()) => self.complete(kind, CatalogAction::Delete, |state| {
                let removal = state.remove(kind, id);
                info!(
                    %kind,
                    id,
                    cascaded = removal.cascaded.len(),
                    "entity deleted"
                );
            }),
            Err(error) => self.fail(kind, CatalogAction::Delete, error),
        }
        result
    }

    async fn send<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> HttpResult<R> {
        let response = self.transport.request(method, path, body, true).await?;
        serde_json::from_value(response).map_err(|e| HttpError::Decode(e.to_string()))
    }

    fn begin(&self, kind: EntityKind, action: CatalogAction) {
        self.state
            .send_modify(|state| state.set_status(kind, OperationStatus::pending(action)));
    }

    fn complete(
        &self,
        kind: EntityKind,
        action: CatalogAction,
        apply: impl FnOnce(&mut CatalogState),
    ) {
        self.state.send_modify(|state| {
            apply(state);
            state.set_status(kind, OperationStatus::succeeded(action));
        });
    }

    fn fail(&self, kind: EntityKind, action: CatalogAction, error: &HttpError) {
        warn!(%kind, ?action, %error, "catalog request failed");
        let status = OperationStatus::failed(action, error.to_string());
        self.state.send_modify(|state| state.set_status(kind, status));
    }
}

fn encode<F: serde::Serialize>(fields: &F) -> HttpResult<Value> {
    serde_json::to_value(fields).map_err(|e| HttpError::InvalidRequest(e.to_string()))
}

fn created<E: CatalogEntity>(entity: E) -> CatalogOutcome {
    CatalogOutcome::Created(entity.into_entity())
}

fn updated<E: CatalogEntity>(entity: E) -> CatalogOutcome {
    CatalogOutcome::Updated(entity.into_entity())
}
