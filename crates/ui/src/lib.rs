//! Showroom UI - View models
//!
//! This crate holds the state behind each screen of the admin client:
//! - `AuthView`: login/register form with its status message and route
//! - `MainPageView`: profile header, logout, and the three catalog views
//! - `BrandView` / `SegmentView` / `VehicleView`: lists, forms and edit mode
//!
//! Views own only transient input. Everything they render comes from the
//! stores, so a cascade triggered in one view shows up in the others.

pub mod messages;
pub mod route;
pub mod views;

pub use messages::status_message;
pub use route::Route;
pub use views::{
    AuthMode, AuthView, BrandView, DEFAULT_RELEASE_YEAR, MainPageView, NamedEntity, NamedRow,
    NamedView, SegmentView, VehicleForm, VehicleRow, VehicleView,
};
