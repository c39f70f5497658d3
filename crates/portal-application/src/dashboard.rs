//! Dashboard: module cards, integration center and feature coverage.

use portal_core::view::{FeatureMapView, ModuleGridView, feature_map, module_grid};

use crate::session::PortalSession;
use crate::update::{ViewUpdate, failure_status};
use crate::workbench::QuickTasks;

pub struct DashboardView {
    pub grid: ModuleGridView,
    /// Pill selector over the tasks of every accessible module.
    pub integration: QuickTasks,
    pub features: FeatureMapView,
    /// Set when the feature map could not be loaded; the rest still renders.
    pub feature_error: Option<String>,
}

pub struct DashboardController<'a> {
    session: &'a PortalSession,
}

impl<'a> DashboardController<'a> {
    pub fn bind(session: &'a PortalSession) -> Self {
        Self { session }
    }

    pub async fn load(&self) -> ViewUpdate<DashboardView> {
        let lang = self.session.language();
        let grid = module_grid(self.session.modules(), lang);
        let integration = QuickTasks::bind_all(self.session);

        let (features, feature_error) = match self.session.api().features().await {
            Ok(areas) => (feature_map(&areas, lang), None),
            Err(err) if err.is_unauthenticated() => {
                return ViewUpdate::from_error(err, &self.session.catalog());
            }
            Err(err) => {
                tracing::warn!("[Dashboard] Feature map unavailable: {}", err);
                (
                    FeatureMapView::default(),
                    Some(failure_status(&err, &self.session.catalog())),
                )
            }
        };

        ViewUpdate::Show(DashboardView {
            grid,
            integration,
            features,
            feature_error,
        })
    }
}
