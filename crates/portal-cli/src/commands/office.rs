use anyhow::Result;
use portal_application::OfficeWorkbench;

use crate::app::AppState;
use crate::commands::{finish, open_page};
use crate::render;

const MODULE_KEY: &str = "office";

pub async fn save_document(
    state: &AppState,
    title: &str,
    content: &str,
    collaborators: &str,
) -> Result<()> {
    let page = open_page(state, MODULE_KEY).await?;
    let update = OfficeWorkbench::bind(&page.session)
        .save_document(title, content, collaborators)
        .await;
    finish(update, render::submitted)
}

pub async fn send_chat(state: &AppState, channel: &str, message: &str) -> Result<()> {
    let page = open_page(state, MODULE_KEY).await?;
    let update = OfficeWorkbench::bind(&page.session)
        .send_chat(channel, message)
        .await;
    finish(update, render::submitted)
}

pub async fn feed(state: &AppState) -> Result<()> {
    let page = open_page(state, MODULE_KEY).await?;
    let update = OfficeWorkbench::bind(&page.session).refresh().await;
    finish(update, render::feed)
}
