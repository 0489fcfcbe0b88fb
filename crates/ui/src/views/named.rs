//! Brand and segment views.
//!
//! Both collections are a list of names with one text input, so they share
//! one view parameterized by entity type.

use std::marker::PhantomData;
use std::sync::Arc;

use showroom_application::{CatalogStore, HttpResult, Transport};
use showroom_domain::{Brand, BrandFields, CatalogEntity, EntityId, Segment, SegmentFields};

use crate::messages::status_message;

/// An entity whose only writable field is its name.
pub trait NamedEntity: CatalogEntity {
    /// Builds the create/update payload from the name input.
    fn fields_from_name(name: &str) -> Self::Fields;
}

impl NamedEntity for Brand {
    fn fields_from_name(name: &str) -> BrandFields {
        BrandFields::new(name)
    }
}

impl NamedEntity for Segment {
    fn fields_from_name(name: &str) -> SegmentFields {
        SegmentFields::new(name)
    }
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRow {
    /// Entity id.
    pub id: EntityId,
    /// Display name.
    pub name: String,
}

/// List, name input and edit mode for one named collection.
pub struct NamedView<E: NamedEntity, T: Transport> {
    catalog: Arc<CatalogStore<T>>,
    /// Name input.
    pub name: String,
    editing: Option<EntityId>,
    message: Option<String>,
    _entity: PhantomData<fn() -> E>,
}

/// The brand list.
pub type BrandView<T> = NamedView<Brand, T>;

/// The segment list.
pub type SegmentView<T> = NamedView<Segment, T>;

impl<E: NamedEntity, T: Transport> NamedView<E, T> {
    /// Creates a view with an empty input.
    pub const fn new(catalog: Arc<CatalogStore<T>>) -> Self {
        Self {
            catalog,
            name: String::new(),
            editing: None,
            message: None,
            _entity: PhantomData,
        }
    }

    /// Rows in store order.
    #[must_use]
    pub fn rows(&self) -> Vec<NamedRow> {
        self.catalog
            .snapshot()
            .collection::<E>()
            .iter()
            .map(|e| NamedRow {
                id: e.id(),
                name: e.name().to_string(),
            })
            .collect()
    }

    /// Last status message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Id of the entity being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<EntityId> {
        self.editing
    }

    /// Whether submitting would send a request.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Loads the collection.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure; the message is set either way.
    pub async fn load(&mut self) -> HttpResult<()> {
        let result = self.catalog.fetch_all::<E>().await.map(|_| ());
        self.refresh_message();
        result
    }

    /// Enters edit mode for `id`, prefilling the input with its name.
    ///
    /// Returns false if no such entity is loaded.
    pub fn edit(&mut self, id: EntityId) -> bool {
        let Some(name) = self
            .catalog
            .snapshot()
            .find::<E>(id)
            .map(|e| e.name().to_string())
        else {
            return false;
        };
        self.name = name;
        self.editing = Some(id);
        true
    }

    /// Leaves edit mode and clears the input.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.name.clear();
    }

    /// Creates a new entity, or updates the one being edited.
    ///
    /// Does nothing while the input is blank. On success the input is
    /// cleared and edit mode ends; on failure both are kept.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn submit(&mut self) -> HttpResult<Option<E>> {
        if !self.can_submit() {
            return Ok(None);
        }

        let fields = E::fields_from_name(self.name.trim());
        let result = match self.editing {
            Some(id) => self.catalog.update::<E>(id, &fields).await,
            None => self.catalog.create::<E>(&fields).await,
        };
        self.refresh_message();

        let entity = result?;
        self.cancel_edit();
        Ok(Some(entity))
    }

    /// Deletes an entity. Brands and segments take their vehicles with them.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn delete(&mut self, id: EntityId) -> HttpResult<()> {
        let result = self.catalog.delete(E::KIND, id).await;
        self.refresh_message();
        if result.is_ok() && self.editing == Some(id) {
            self.cancel_edit();
        }
        result
    }

    fn refresh_message(&mut self) {
        self.message = status_message(E::KIND, &self.catalog.status(E::KIND));
    }
}
