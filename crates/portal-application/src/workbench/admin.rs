//! Admin console: user creation.

use std::sync::Arc;

use portal_core::gateway::PortalApi;
use portal_core::i18n::{Catalog, TextKey};
use portal_core::model::NewUser;

use crate::in_flight::InFlight;
use crate::session::PortalSession;
use crate::update::{Panel, ViewUpdate};

pub struct AdminConsole {
    api: Arc<dyn PortalApi>,
    catalog: Catalog,
    create_control: InFlight,
}

impl AdminConsole {
    pub fn bind(session: &PortalSession) -> Self {
        Self {
            api: session.api(),
            catalog: session.catalog(),
            create_control: InFlight::new(),
        }
    }

    /// Creates an account. `modules` is a comma-separated list of keys.
    /// Whether the caller may do this is decided by the server.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        department: &str,
        modules: &str,
    ) -> ViewUpdate<Panel> {
        let Some(_guard) = self.create_control.try_acquire() else {
            return ViewUpdate::rejected(self.catalog.text(TextKey::Submitting));
        };

        let user = NewUser::from_form(username, password, department, modules);
        match self.api.create_user(&user).await {
            Ok(created) => {
                tracing::info!("[Admin] Created user {}", created.created);
                ViewUpdate::Show(Panel::new(
                    self.catalog.format(TextKey::CreatedUser, &created.created),
                ))
            }
            Err(err) => ViewUpdate::from_error(err, &self.catalog),
        }
    }
}
