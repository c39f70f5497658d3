//! Finance workbench: expense claims.

use std::sync::Arc;

use portal_core::gateway::PortalApi;
use portal_core::i18n::Catalog;
use portal_core::model::{ExpenseRequest, ExpenseSubmitted};
use portal_core::view::{FeedView, expense_card, feed};

use super::{newest_first, submit};
use crate::in_flight::InFlight;
use crate::session::PortalSession;
use crate::update::{Submitted, ViewUpdate};

pub struct FinanceWorkbench {
    api: Arc<dyn PortalApi>,
    catalog: Catalog,
    expense_control: InFlight,
}

impl FinanceWorkbench {
    pub fn bind(session: &PortalSession) -> Self {
        Self {
            api: session.api(),
            catalog: session.catalog(),
            expense_control: InFlight::new(),
        }
    }

    /// Submits an expense claim. A non-numeric amount is rejected locally.
    pub async fn submit_expense(
        &self,
        kind: &str,
        amount: &str,
        description: &str,
    ) -> ViewUpdate<Submitted> {
        submit(
            &self.expense_control,
            &self.catalog,
            ExpenseRequest::from_form(kind, amount, description),
            |request| async move { self.api.submit_expense(&request).await },
            |response: &ExpenseSubmitted| &response.expense,
            || self.refresh(),
        )
        .await
    }

    pub async fn refresh(&self) -> ViewUpdate<FeedView> {
        match self.api.list_expenses().await {
            Ok(items) => ViewUpdate::Show(feed(
                &newest_first(items),
                expense_card,
                self.catalog.language(),
            )),
            Err(err) => ViewUpdate::from_error(err, &self.catalog),
        }
    }
}
