//! Dashboard, module pages and quick tasks.

use anyhow::Result;
use colored::Colorize;
use portal_application::{
    DashboardController, FinanceWorkbench, OaWorkbench, OfficeWorkbench, PortalSession, QuickTasks,
};
use portal_core::i18n::TextKey;
use portal_core::model::DASHBOARD_KEY;

use crate::app::AppState;
use crate::commands::{finish, open_page};
use crate::render;

pub async fn dashboard(state: &AppState) -> Result<()> {
    let page = open_page(state, DASHBOARD_KEY).await?;
    show_dashboard(&page.session).await
}

/// Prints a module page: its quick tasks followed by its activity feed.
pub async fn open(state: &AppState, module_key: &str) -> Result<()> {
    let page = open_page(state, module_key).await?;
    if module_key == DASHBOARD_KEY {
        return show_dashboard(&page.session).await;
    }

    let catalog = page.session.catalog();
    let tasks = QuickTasks::bind(&page.session, module_key);
    if !tasks.selector().is_empty() {
        render::section(&catalog.text(TextKey::QuickTasks), "");
        render::selector(tasks.selector());
        println!();
    }

    let feed = match module_key {
        "office" => OfficeWorkbench::bind(&page.session).refresh().await,
        "oa" => OaWorkbench::bind(&page.session).refresh().await,
        "finance" => FinanceWorkbench::bind(&page.session).refresh().await,
        _ => return Ok(()),
    };
    render::section(
        &catalog.text(TextKey::LatestActivity),
        &catalog.text(TextKey::LatestActivityHint),
    );
    finish(feed, render::feed)
}

/// Selects `task_ids` on the module's quick task pills and runs them. On the
/// dashboard the pills cover every accessible module.
pub async fn run(state: &AppState, module_key: &str, task_ids: &[String]) -> Result<()> {
    let page = open_page(state, module_key).await?;
    let mut tasks = if module_key == DASHBOARD_KEY {
        QuickTasks::bind_all(&page.session)
    } else {
        QuickTasks::bind(&page.session, module_key)
    };

    for id in task_ids {
        if !tasks.selector_mut().select(id) {
            tracing::warn!("[Run] '{}' is not a task of '{}'", id, module_key);
        }
    }
    render::selector(tasks.selector());
    println!("{}", tasks.running_panel().status.dimmed());

    let update = tasks.run().await;
    finish(update, render::panel)
}

async fn show_dashboard(session: &PortalSession) -> Result<()> {
    let catalog = session.catalog();
    let update = DashboardController::bind(session).load().await;
    finish(update, |view| {
        render::section(
            &catalog.text(TextKey::ModulesHeader),
            &catalog.text(TextKey::DashboardSubtitle),
        );
        render::grid(&view.grid);
        println!();

        render::section(
            &catalog.text(TextKey::IntegrationCenter),
            &catalog.text(TextKey::IntegrationHint),
        );
        render::selector(view.integration.selector());
        println!();

        render::section(
            &catalog.text(TextKey::FeatureHeader),
            &catalog.text(TextKey::FeatureHint),
        );
        render::features(&view.features, view.feature_error.as_deref());

        if session.user().is_admin() {
            println!();
            render::section(&catalog.text(TextKey::AdminCreate), "");
            println!("  {}", "portal users create <username> --password <password>".cyan());
        }
    })
}
