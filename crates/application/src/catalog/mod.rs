//! Catalog store.
//!
//! This module provides:
//! - `CatalogStore`: brands, segments and vehicles synchronized with the
//!   service, with the brand/segment delete cascade
//! - `CatalogCommand`/`CatalogOutcome`: the store's operations as a tagged
//!   command, parameterized by entity kind

mod command;
mod store;

pub use command::{CatalogCommand, CatalogOutcome};
pub use store::CatalogStore;
