use anyhow::Result;
use colored::Colorize;
use portal_application::AuthController;

use crate::app::AppState;
use crate::commands::finish;

async fn controller(state: &AppState) -> AuthController {
    AuthController::new(
        state.api(),
        state.preference_repository(),
        state.config.clone(),
        state.catalog().await,
    )
}

pub async fn login(state: &AppState, username: &str, password: &str) -> Result<()> {
    let controller = controller(state).await;
    println!("{}", controller.signing_in().dimmed());

    let update = controller.login(username, password).await;
    finish(update, |signed_in| {
        println!("{}", signed_in.status.green());
        if !signed_in.modules.is_empty() {
            println!("  {}", signed_in.modules.join(", "));
        }
        println!("{}", format!("-> {}", signed_in.location).yellow());
    })
}

pub async fn logout(state: &AppState) -> Result<()> {
    let location = controller(state).await.logout().await?;
    println!("{}", format!("-> {location}").yellow());
    Ok(())
}
