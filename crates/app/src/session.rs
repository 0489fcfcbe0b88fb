//! Interactive session: routes commands to the auth page or the main page.

use std::sync::Arc;

use showroom_application::{AuthStore, CatalogStore, HttpResult, Transport};
use showroom_domain::{EntityId, EntityKind};
use showroom_ui::{AuthMode, AuthView, MainPageView, NamedEntity, NamedView, Route, VehicleForm};
use tracing::debug;

use crate::command::{Command, HELP};

const LOGIN_FIRST: &str = "Log in first.";
const NOTHING_TO_SUBMIT: &str = "Nothing to submit.";

/// One user session over shared stores.
///
/// Mirrors the two pages of the client: commands other than login and
/// register are only accepted once the session is on the main page.
pub struct Session<T: Transport> {
    auth_page: AuthView<T>,
    main_page: MainPageView<T>,
    route: Route,
}

impl<T: Transport> Session<T> {
    /// Creates a session on the auth page.
    pub fn new(auth: Arc<AuthStore<T>>, catalog: &Arc<CatalogStore<T>>) -> Self {
        Self {
            auth_page: AuthView::new(Arc::clone(&auth)),
            main_page: MainPageView::new(auth, catalog),
            route: Route::Auth,
        }
    }

    /// The current page.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Opens the main page with a credential stored by an earlier run.
    pub async fn resume(&mut self) -> String {
        self.enter_main_page().await
    }

    /// Runs one command and returns the text to show.
    pub async fn execute(&mut self, command: Command) -> String {
        debug!(route = %self.route, "executing command");
        match command {
            Command::Login { username, password } => {
                self.authenticate(username, password, false).await
            }
            Command::Register { username, password } => {
                self.authenticate(username, password, true).await
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
            _ if self.route == Route::Auth => LOGIN_FIRST.to_string(),
            Command::Profile => self.main_page.username(),
            Command::List(kind) => self.render(kind),
            Command::AddNamed(kind, name) => self.submit_named(kind, None, name).await,
            Command::EditNamed(kind, id, name) => self.submit_named(kind, Some(id), name).await,
            Command::AddVehicle(form) => self.submit_vehicle(None, form).await,
            Command::EditVehicle(id, form) => self.submit_vehicle(Some(id), form).await,
            Command::Delete(kind, id) => self.delete(kind, id).await,
            Command::Logout => match self.main_page.logout().await {
                Ok(route) => {
                    self.route = route;
                    "Logged out.".to_string()
                }
                Err(error) => error.to_string(),
            },
        }
    }

    async fn authenticate(
        &mut self,
        username: String,
        password: String,
        register: bool,
    ) -> String {
        let page = &mut self.auth_page;
        page.username = username;
        page.password = password;
        if (page.mode() == AuthMode::Register) != register {
            page.toggle_mode();
        }

        let route = page.submit().await;
        let mut output = page.message().unwrap_or_default().to_string();
        page.password.clear();

        if route == Some(Route::Vehicle) {
            output.push('\n');
            output.push_str(&self.enter_main_page().await);
        }
        output
    }

    async fn enter_main_page(&mut self) -> String {
        self.route = Route::Vehicle;
        let failed = self.main_page.mount().await;
        let username = self.main_page.username();

        let mut output = if username.is_empty() {
            "Welcome.".to_string()
        } else {
            format!("Welcome, {username}.")
        };
        for kind in EntityKind::ALL {
            if let Some(message) = self.message(kind) {
                output.push_str(&format!("\n{kind}: {message}"));
            }
        }
        if failed > 0 {
            output.push_str(&format!("\n{failed} section(s) failed to load."));
        }
        output
    }

    fn message(&self, kind: EntityKind) -> Option<&str> {
        match kind {
            EntityKind::Brand => self.main_page.brands.message(),
            EntityKind::Segment => self.main_page.segments.message(),
            EntityKind::Vehicle => self.main_page.vehicles.message(),
        }
    }

    fn render(&self, kind: EntityKind) -> String {
        let lines: Vec<String> = match kind {
            EntityKind::Brand => named_lines(&self.main_page.brands),
            EntityKind::Segment => named_lines(&self.main_page.segments),
            EntityKind::Vehicle => self
                .main_page
                .vehicles
                .rows()
                .into_iter()
                .map(|v| {
                    format!(
                        "{}\t{}\t{}\t{}\t{}\t{}",
                        v.id, v.name, v.release_year, v.price, v.segment_name, v.brand_name
                    )
                })
                .collect(),
        };

        if lines.is_empty() {
            format!("No {kind} entries.")
        } else {
            lines.join("\n")
        }
    }

    async fn submit_named(
        &mut self,
        kind: EntityKind,
        id: Option<EntityId>,
        name: String,
    ) -> String {
        match kind {
            EntityKind::Brand => submit_named_view(&mut self.main_page.brands, id, name).await,
            EntityKind::Segment => submit_named_view(&mut self.main_page.segments, id, name).await,
            EntityKind::Vehicle => NOTHING_TO_SUBMIT.to_string(),
        }
    }

    async fn submit_vehicle(&mut self, id: Option<EntityId>, form: VehicleForm) -> String {
        let view = &mut self.main_page.vehicles;
        match id {
            Some(id) if !view.edit(id) => return format!("No vehicle with id {id}."),
            Some(_) => {}
            None => view.cancel_edit(),
        }
        view.form = form;

        let result = view.submit().await;
        outcome(result.map(|v| v.is_some()), view.message())
    }

    async fn delete(&mut self, kind: EntityKind, id: EntityId) -> String {
        let page = &mut self.main_page;
        let result = match kind {
            EntityKind::Brand => page.brands.delete(id).await,
            EntityKind::Segment => page.segments.delete(id).await,
            EntityKind::Vehicle => page.vehicles.delete(id).await,
        };
        outcome(result.map(|()| true), self.message(kind))
    }
}

fn named_lines<E: NamedEntity, T: Transport>(view: &NamedView<E, T>) -> Vec<String> {
    view.rows()
        .into_iter()
        .map(|row| format!("{}\t{}", row.id, row.name))
        .collect()
}

async fn submit_named_view<E: NamedEntity, T: Transport>(
    view: &mut NamedView<E, T>,
    id: Option<EntityId>,
    name: String,
) -> String {
    match id {
        Some(id) if !view.edit(id) => return format!("No {} with id {id}.", E::KIND),
        Some(_) => {}
        None => view.cancel_edit(),
    }
    view.name = name;

    let result = view.submit().await;
    outcome(result.map(|e| e.is_some()), view.message())
}

fn outcome(result: HttpResult<bool>, message: Option<&str>) -> String {
    match (result, message) {
        (Ok(false), _) => NOTHING_TO_SUBMIT.to_string(),
        (_, Some(message)) => message.to_string(),
        (Ok(true), None) => String::new(),
        (Err(error), None) => error.to_string(),
    }
}
