//! Vehicle view: list, form with brand/segment selection, edit mode.

use std::sync::Arc;

use rust_decimal::Decimal;
use showroom_application::{CatalogStore, HttpResult, Transport};
use showroom_domain::{CatalogEntity, EntityId, EntityKind, Vehicle, VehicleFields};

use super::named::NamedRow;
use crate::messages::status_message;

/// Release year the form starts with.
pub const DEFAULT_RELEASE_YEAR: i32 = 2020;

/// Vehicle form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleForm {
    /// Model name.
    pub name: String,
    /// Model year.
    pub release_year: i32,
    /// List price.
    pub price: Decimal,
    /// Selected segment.
    pub segment_id: Option<EntityId>,
    /// Selected brand.
    pub brand_id: Option<EntityId>,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            release_year: DEFAULT_RELEASE_YEAR,
            price: Decimal::ZERO,
            segment_id: None,
            brand_id: None,
        }
    }
}

impl VehicleForm {
    /// The payload to send, or `None` while the name is blank or a brand or
    /// segment is not selected.
    #[must_use]
    pub fn to_fields(&self) -> Option<VehicleFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(VehicleFields {
            name: name.to_string(),
            release_year: self.release_year,
            price: self.price,
            segment_id: self.segment_id?,
            brand_id: self.brand_id?,
        })
    }
}

impl From<VehicleFields> for VehicleForm {
    fn from(fields: VehicleFields) -> Self {
        Self {
            name: fields.name,
            release_year: fields.release_year,
            price: fields.price,
            segment_id: Some(fields.segment_id),
            brand_id: Some(fields.brand_id),
        }
    }
}

/// One rendered vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRow {
    /// Vehicle id.
    pub id: EntityId,
    /// Model name.
    pub name: String,
    /// Model year.
    pub release_year: i32,
    /// Price as displayed.
    pub price: String,
    /// Segment name as of the last vehicle fetch or save.
    pub segment_name: String,
    /// Brand name as of the last vehicle fetch or save.
    pub brand_name: String,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name.clone(),
            release_year: vehicle.release_year,
            price: vehicle.price.to_string(),
            segment_name: vehicle.segment_name.clone(),
            brand_name: vehicle.brand_name.clone(),
        }
    }
}

/// State of the vehicle section.
pub struct VehicleView<T: Transport> {
    catalog: Arc<CatalogStore<T>>,
    /// Form inputs.
    pub form: VehicleForm,
    editing: Option<EntityId>,
    message: Option<String>,
}

impl<T: Transport> VehicleView<T> {
    /// Creates a view with a blank form.
    pub fn new(catalog: Arc<CatalogStore<T>>) -> Self {
        Self {
            catalog,
            form: VehicleForm::default(),
            editing: None,
            message: None,
        }
    }

    /// Vehicles in store order.
    #[must_use]
    pub fn rows(&self) -> Vec<VehicleRow> {
        self.catalog
            .snapshot()
            .vehicles()
            .iter()
            .map(VehicleRow::from)
            .collect()
    }

    /// Options for the segment selector.
    #[must_use]
    pub fn segment_options(&self) -> Vec<NamedRow> {
        let state = self.catalog.snapshot();
        state
            .segments()
            .iter()
            .map(|s| NamedRow {
                id: s.id,
                name: s.name.clone(),
            })
            .collect()
    }

    /// Options for the brand selector.
    #[must_use]
    pub fn brand_options(&self) -> Vec<NamedRow> {
        let state = self.catalog.snapshot();
        state
            .brands()
            .iter()
            .map(|b| NamedRow {
                id: b.id,
                name: b.name.clone(),
            })
            .collect()
    }

    /// Last status message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Id of the vehicle being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<EntityId> {
        self.editing
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form.to_fields().is_some()
    }

    /// Loads the vehicle collection.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure; the message is set either way.
    pub async fn load(&mut self) -> HttpResult<()> {
        let result = self.catalog.fetch_all::<Vehicle>().await.map(|_| ());
        self.refresh_message();
        result
    }

    /// Enters edit mode for `id`, loading its fields into the form.
    ///
    /// Returns false if no such vehicle is loaded.
    pub fn edit(&mut self, id: EntityId) -> bool {
        let Some(fields) = self
            .catalog
            .snapshot()
            .find::<Vehicle>(id)
            .map(CatalogEntity::fields)
        else {
            return false;
        };
        self.form = VehicleForm::from(fields);
        self.editing = Some(id);
        true
    }

    /// Leaves edit mode and resets the form.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = VehicleForm::default();
    }

    /// Creates a vehicle, or updates the one being edited.
    ///
    /// Does nothing until the form is complete. On success the form resets
    /// and edit mode ends; on failure both are kept.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn submit(&mut self) -> HttpResult<Option<Vehicle>> {
        let Some(fields) = self.form.to_fields() else {
            return Ok(None);
        };

        let result = match self.editing {
            Some(id) => self.catalog.update::<Vehicle>(id, &fields).await,
            None => self.catalog.create::<Vehicle>(&fields).await,
        };
        self.refresh_message();

        let vehicle = result?;
        self.cancel_edit();
        Ok(Some(vehicle))
    }

    /// Deletes a vehicle.
    ///
    /// # Errors
    ///
    /// Returns the request failure.
    pub async fn delete(&mut self, id: EntityId) -> HttpResult<()> {
        let result = self.catalog.delete(EntityKind::Vehicle, id).await;
        self.refresh_message();
        if result.is_ok() && self.editing == Some(id) {
            self.cancel_edit();
        }
        result
    }

    fn refresh_message(&mut self) {
        let kind = EntityKind::Vehicle;
        self.message = status_message(kind, &self.catalog.status(kind));
    }
}
