//! View models.
//!
//! Pure functions from data to structured page descriptions. Nothing here
//! touches the network or the terminal; `portal-cli` materializes the
//! results.

mod feature_map;
mod feed;
mod header;
mod module_grid;
mod navigation;
mod task_selector;

pub use feature_map::{FeatureGroup, FeatureMapView, FeatureRow, feature_map};
pub use feed::{
    FeedCard, FeedView, approval_card, chat_card, document_card, expense_card, feed, office_card,
};
pub use header::{module_header, user_info};
pub use module_grid::{ModuleCard, ModuleGridView, module_grid};
pub use navigation::{NavLink, NavigationView, navigation};
pub use task_selector::{TaskPill, TaskSelector};
