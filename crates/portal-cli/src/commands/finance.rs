use anyhow::Result;
use portal_application::FinanceWorkbench;

use crate::app::AppState;
use crate::commands::{finish, open_page};
use crate::render;

const MODULE_KEY: &str = "finance";

pub async fn submit(state: &AppState, kind: &str, amount: &str, description: &str) -> Result<()> {
    let page = open_page(state, MODULE_KEY).await?;
    let update = FinanceWorkbench::bind(&page.session)
        .submit_expense(kind, amount, description)
        .await;
    finish(update, render::submitted)
}

pub async fn feed(state: &AppState) -> Result<()> {
    let page = open_page(state, MODULE_KEY).await?;
    let update = FinanceWorkbench::bind(&page.session).refresh().await;
    finish(update, render::feed)
}
