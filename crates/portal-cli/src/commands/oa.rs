use anyhow::Result;
use portal_application::OaWorkbench;

use crate::app::AppState;
use crate::commands::{finish, open_page};
use crate::render;

const MODULE_KEY: &str = "oa";

pub async fn submit(state: &AppState, kind: &str, amount: &str, reason: &str) -> Result<()> {
    let page = open_page(state, MODULE_KEY).await?;
    let update = OaWorkbench::bind(&page.session)
        .submit_approval(kind, amount, reason)
        .await;
    finish(update, render::submitted)
}

pub async fn feed(state: &AppState) -> Result<()> {
    let page = open_page(state, MODULE_KEY).await?;
    let update = OaWorkbench::bind(&page.session).refresh().await;
    finish(update, render::feed)
}
