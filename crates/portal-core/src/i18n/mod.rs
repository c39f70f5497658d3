//! Localization.
//!
//! # Module Structure
//!
//! - `language`: language codes and preference resolution
//! - `catalog`: UI string table keyed by [`TextKey`]
//! - `module_copy`: page header copy per module

mod catalog;
mod language;
mod module_copy;

pub use catalog::{Catalog, TextKey, Translation};
pub use language::Language;
pub use module_copy::{ModuleCopy, module_copy};
