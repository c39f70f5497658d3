//! Subcommand handlers.
//!
//! Each protected command loads its page through the bootstrap controller
//! first. A redirect, a permission-denied page or a refused action ends the
//! command with an error, so the process exits non-zero.

pub mod auth;
pub mod finance;
pub mod lang;
pub mod oa;
pub mod office;
pub mod page;
pub mod users;

use anyhow::{Result, anyhow};
use portal_application::{BootstrapController, BootstrapOutcome, ModulePage, ViewUpdate};

use crate::app::AppState;
use crate::render;

/// Loads `module_key` and prints the page chrome. Fails unless the module is
/// active for the signed-in user.
pub(crate) async fn open_page(state: &AppState, module_key: &str) -> Result<ModulePage> {
    let mut controller = BootstrapController::new(
        state.api(),
        state.language().await,
        state.config.login_path.clone(),
    );
    match controller.load(module_key).await {
        BootstrapOutcome::Redirect { location, notice } => {
            if let Some(notice) = notice {
                render::notice(&notice);
            }
            Err(redirect_error(&location))
        }
        BootstrapOutcome::Forbidden(page) => {
            render::chrome(&page.chrome);
            Err(anyhow!(page.message))
        }
        BootstrapOutcome::Active(page) => {
            render::chrome(&page.chrome);
            Ok(*page)
        }
    }
}

/// Renders a shown result; every other outcome becomes the command's error.
pub(crate) fn finish<T>(update: ViewUpdate<T>, show: impl FnOnce(&T)) -> Result<()> {
    match update {
        ViewUpdate::Show(value) => {
            show(&value);
            Ok(())
        }
        ViewUpdate::Rejected { status } | ViewUpdate::Failed { status } => Err(anyhow!(status)),
        ViewUpdate::Redirect { location } => Err(redirect_error(&location)),
    }
}

fn redirect_error(location: &str) -> anyhow::Error {
    anyhow!("Not signed in (redirected to {location}); run `portal login <username>`")
}
