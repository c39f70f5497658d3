//! OA workbench: approval forms.

use std::sync::Arc;

use portal_core::gateway::PortalApi;
use portal_core::i18n::Catalog;
use portal_core::model::{ApprovalRequest, ApprovalSubmitted};
use portal_core::view::{FeedView, approval_card, feed};

use super::{newest_first, submit};
use crate::in_flight::InFlight;
use crate::session::PortalSession;
use crate::update::{Submitted, ViewUpdate};

pub struct OaWorkbench {
    api: Arc<dyn PortalApi>,
    catalog: Catalog,
    approval_control: InFlight,
}

impl OaWorkbench {
    pub fn bind(session: &PortalSession) -> Self {
        Self {
            api: session.api(),
            catalog: session.catalog(),
            approval_control: InFlight::new(),
        }
    }

    /// Submits a workflow form. A blank type means `leave`.
    pub async fn submit_approval(
        &self,
        kind: &str,
        amount: &str,
        reason: &str,
    ) -> ViewUpdate<Submitted> {
        submit(
            &self.approval_control,
            &self.catalog,
            ApprovalRequest::from_form(kind, amount, reason),
            |request| async move { self.api.submit_approval(&request).await },
            |response: &ApprovalSubmitted| &response.approval,
            || self.refresh(),
        )
        .await
    }

    pub async fn refresh(&self) -> ViewUpdate<FeedView> {
        match self.api.list_approvals().await {
            Ok(items) => ViewUpdate::Show(feed(
                &newest_first(items),
                approval_card,
                self.catalog.language(),
            )),
            Err(err) => ViewUpdate::from_error(err, &self.catalog),
        }
    }
}
