use anyhow::Result;
use portal_application::AdminConsole;
use portal_core::model::DASHBOARD_KEY;

use crate::app::AppState;
use crate::commands::{finish, open_page};
use crate::render;

pub async fn create(
    state: &AppState,
    username: &str,
    password: &str,
    department: &str,
    modules: &str,
) -> Result<()> {
    let page = open_page(state, DASHBOARD_KEY).await?;
    let update = AdminConsole::bind(&page.session)
        .create_user(username, password, department, modules)
        .await;
    finish(update, render::panel)
}
