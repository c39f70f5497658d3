use anyhow::Result;
use portal_application::LanguageController;
use portal_core::i18n::Language;

use crate::app::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangChange {
    Show,
    Toggle,
    Set(Language),
}

pub async fn run(state: &AppState, change: LangChange) -> Result<()> {
    let controller = LanguageController::new(state.preference_repository());
    let lang = match change {
        LangChange::Show => controller.current().await,
        LangChange::Toggle => controller.toggle().await?,
        LangChange::Set(lang) => {
            controller.set(lang).await?;
            lang
        }
    };
    println!("{lang}");
    Ok(())
}
