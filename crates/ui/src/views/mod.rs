//! View models, one per screen section.

mod auth;
mod main_page;
mod named;
mod vehicle;

pub use auth::{AuthMode, AuthView};
pub use main_page::MainPageView;
pub use named::{BrandView, NamedEntity, NamedRow, NamedView, SegmentView};
pub use vehicle::{DEFAULT_RELEASE_YEAR, VehicleForm, VehicleRow, VehicleView};
