//! Quick task runner shown on every module page.

use std::sync::Arc;

use portal_core::gateway::PortalApi;
use portal_core::i18n::{Catalog, TextKey};
use portal_core::model::RunTasksRequest;
use portal_core::view::TaskSelector;

use crate::in_flight::InFlight;
use crate::session::PortalSession;
use crate::update::{Panel, ViewUpdate, pretty};

pub struct QuickTasks {
    api: Arc<dyn PortalApi>,
    catalog: Catalog,
    selector: TaskSelector,
    run_control: InFlight,
}

impl QuickTasks {
    /// Pills for the tasks of `module_key`.
    pub fn bind(session: &PortalSession, module_key: &str) -> Self {
        Self::with_selector(
            session,
            TaskSelector::new(session.tasks(module_key), session.language()),
        )
    }

    /// Pills for the tasks of every accessible module (dashboard
    /// integration center).
    pub fn bind_all(session: &PortalSession) -> Self {
        Self::with_selector(
            session,
            TaskSelector::new(session.all_tasks(), session.language()),
        )
    }

    fn with_selector(session: &PortalSession, selector: TaskSelector) -> Self {
        Self {
            api: session.api(),
            catalog: session.catalog(),
            selector,
            run_control: InFlight::new(),
        }
    }

    pub fn selector(&self) -> &TaskSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut TaskSelector {
        &mut self.selector
    }

    /// Panel shown while a run is pending.
    pub fn running_panel(&self) -> Panel {
        Panel {
            status: self.catalog.text(TextKey::Running),
            output: Some(self.catalog.text(TextKey::Awaiting)),
        }
    }

    /// Runs the selected tasks. Nothing is sent when no pill is selected.
    pub async fn run(&self) -> ViewUpdate<Panel> {
        let tasks = self.selector.selected_ids();
        if tasks.is_empty() {
            return ViewUpdate::rejected(self.catalog.text(TextKey::PickOne));
        }
        let Some(_guard) = self.run_control.try_acquire() else {
            return ViewUpdate::rejected(self.catalog.text(TextKey::Running));
        };

        tracing::info!("[QuickTasks] Running {:?}", tasks);
        match self.api.run_tasks(&RunTasksRequest { tasks }).await {
            Ok(response) => ViewUpdate::Show(Panel {
                status: self.catalog.text(TextKey::Done),
                output: Some(pretty(&response.results)),
            }),
            Err(err) => ViewUpdate::from_error(err, &self.catalog),
        }
    }
}
