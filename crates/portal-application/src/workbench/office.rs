//! Office workbench: document saving and chat.

use std::sync::Arc;

use portal_core::gateway::PortalApi;
use portal_core::i18n::Catalog;
use portal_core::model::{ChatDraft, ChatSent, DocumentDraft, DocumentSaved};
use portal_core::view::{FeedView, feed, office_card};

use super::{newest_first, submit};
use crate::in_flight::InFlight;
use crate::session::PortalSession;
use crate::update::{Submitted, ViewUpdate};

pub struct OfficeWorkbench {
    api: Arc<dyn PortalApi>,
    catalog: Catalog,
    document_control: InFlight,
    chat_control: InFlight,
}

impl OfficeWorkbench {
    pub fn bind(session: &PortalSession) -> Self {
        Self {
            api: session.api(),
            catalog: session.catalog(),
            document_control: InFlight::new(),
            chat_control: InFlight::new(),
        }
    }

    /// Saves a document version. `collaborators` is comma-separated.
    pub async fn save_document(
        &self,
        title: &str,
        content: &str,
        collaborators: &str,
    ) -> ViewUpdate<Submitted> {
        submit(
            &self.document_control,
            &self.catalog,
            Ok(DocumentDraft::from_form(title, content, collaborators)),
            |draft| async move { self.api.save_document(&draft).await },
            |response: &DocumentSaved| &response.document,
            || self.refresh(),
        )
        .await
    }

    /// Posts a message. A blank channel means `general`.
    pub async fn send_chat(&self, channel: &str, message: &str) -> ViewUpdate<Submitted> {
        submit(
            &self.chat_control,
            &self.catalog,
            Ok(ChatDraft::from_form(channel, message)),
            |draft| async move { self.api.send_chat(&draft).await },
            |response: &ChatSent| &response.message,
            || self.refresh(),
        )
        .await
    }

    /// Documents then messages, reversed as one list.
    pub async fn refresh(&self) -> ViewUpdate<FeedView> {
        match self.api.office_feed().await {
            Ok(office) => ViewUpdate::Show(feed(
                &newest_first(office.into_activities()),
                office_card,
                self.catalog.language(),
            )),
            Err(err) => ViewUpdate::from_error(err, &self.catalog),
        }
    }
}
