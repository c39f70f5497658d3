//! Per-module workbench controllers.
//!
//! Every workbench is bound from an active [`PortalSession`](crate::PortalSession).
//! Submissions follow one sequence: claim the control, build the payload,
//! call the gateway, render the returned entity, refresh the feed.

mod admin;
mod finance;
mod oa;
mod office;
mod quick_tasks;

pub use admin::AdminConsole;
pub use finance::FinanceWorkbench;
pub use oa::OaWorkbench;
pub use office::OfficeWorkbench;
pub use quick_tasks::QuickTasks;

use std::future::Future;

use portal_core::error::Result;
use portal_core::i18n::{Catalog, TextKey};
use portal_core::view::FeedView;
use serde_json::Value;

use crate::in_flight::InFlight;
use crate::update::{Panel, Submitted, ViewUpdate};

/// Runs one submission on `control`.
///
/// `payload` is evaluated after the control is claimed, so invalid input
/// never reaches the network. `refresh` runs only when the call succeeded.
pub(crate) async fn submit<P, T, Call, CallFut, Refresh, RefreshFut>(
    control: &InFlight,
    catalog: &Catalog,
    payload: Result<P>,
    call: Call,
    entity: impl FnOnce(&T) -> &Value,
    refresh: Refresh,
) -> ViewUpdate<Submitted>
where
    Call: FnOnce(P) -> CallFut,
    CallFut: Future<Output = Result<T>>,
    Refresh: FnOnce() -> RefreshFut,
    RefreshFut: Future<Output = ViewUpdate<FeedView>>,
{
    let Some(_guard) = control.try_acquire() else {
        tracing::debug!("[Workbench] Submission ignored, previous one still in flight");
        return ViewUpdate::rejected(catalog.text(TextKey::Submitting));
    };

    let payload = match payload {
        Ok(payload) => payload,
        Err(err) => return ViewUpdate::rejected(err.to_string()),
    };

    let response = match call(payload).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("[Workbench] Submission failed: {}", err);
            return ViewUpdate::from_error(err, catalog);
        }
    };
    let panel = Panel::done(catalog, entity(&response));

    match refresh().await {
        ViewUpdate::Show(feed) => ViewUpdate::Show(Submitted {
            panel,
            feed: Some(feed),
        }),
        ViewUpdate::Redirect { location } => ViewUpdate::Redirect { location },
        other => {
            tracing::warn!("[Workbench] Feed refresh after submit failed: {:?}", other.status());
            ViewUpdate::Show(Submitted { panel, feed: None })
        }
    }
}

/// Newest first: the server appends, so the array is reversed.
pub(crate) fn newest_first<T>(mut items: Vec<T>) -> Vec<T> {
    items.reverse();
    items
}
