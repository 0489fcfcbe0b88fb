//! The catalog main page.

use std::sync::Arc;

use showroom_application::{AuthStore, CatalogStore, HttpResult, Transport};
use tracing::{info, warn};

use super::{BrandView, SegmentView, VehicleView};
use crate::route::Route;

/// Header with the logged-in user plus the three catalog sections.
pub struct MainPageView<T: Transport> {
    auth: Arc<AuthStore<T>>,
    /// Segment section.
    pub segments: SegmentView<T>,
    /// Brand section.
    pub brands: BrandView<T>,
    /// Vehicle section.
    pub vehicles: VehicleView<T>,
}

impl<T: Transport> MainPageView<T> {
    /// Creates the page and its sections over shared stores.
    pub fn new(auth: Arc<AuthStore<T>>, catalog: &Arc<CatalogStore<T>>) -> Self {
        Self {
            auth,
            segments: SegmentView::new(Arc::clone(catalog)),
            brands: BrandView::new(Arc::clone(catalog)),
            vehicles: VehicleView::new(Arc::clone(catalog)),
        }
    }

    /// Loads the profile and all three collections concurrently.
    ///
    /// Each failure is reported by its own section; the page itself only
    /// counts them. Returns the number of loads that failed.
    pub async fn mount(&mut self) -> usize {
        let (profile, segments, brands, vehicles) = tokio::join!(
            self.auth.fetch_profile(),
            self.segments.load(),
            self.brands.load(),
            self.vehicles.load(),
        );

        let failed = [
            profile.is_err(),
            segments.is_err(),
            brands.is_err(),
            vehicles.is_err(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count();

        if failed > 0 {
            warn!(failed, "main page loaded with errors");
        }
        failed
    }

    /// Name of the logged-in user, empty until the profile loads.
    #[must_use]
    pub fn username(&self) -> String {
        self.auth.profile().username
    }

    /// Clears the credential and profile and returns to the auth page.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored credential cannot be removed.
    pub async fn logout(&self) -> HttpResult<Route> {
        self.auth.logout().await?;
        info!("returning to auth page");
        Ok(Route::Auth)
    }
}
