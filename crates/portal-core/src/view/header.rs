//! Page header: signed-in user line and module title.

use crate::i18n::{Language, ModuleCopy, module_copy};
use crate::model::UserContext;

/// `"username · department"`; the department part is blank when unknown.
pub fn user_info(user: &UserContext) -> String {
    format!(
        "{} · {}",
        user.username,
        user.department.as_deref().unwrap_or_default()
    )
}

/// Title and description for a module page. `None` for keys without copy,
/// in which case the page keeps its static heading.
pub fn module_header(key: &str, lang: Language) -> Option<ModuleCopy> {
    module_copy(key, lang)
}
