//! Application layer for the portal client.
//!
//! Controllers that sit between the gateway and the presentation layer:
//! bootstrap a module page, bind its workbenches, run submissions and
//! refresh feeds. Results are [`ViewUpdate`] values; nothing here prints.

pub mod auth;
pub mod bootstrap;
pub mod dashboard;
pub mod in_flight;
pub mod language;
pub mod session;
pub mod update;
pub mod workbench;

pub use auth::{AuthController, SignedIn};
pub use bootstrap::{
    BootstrapController, BootstrapOutcome, BootstrapState, ForbiddenPage, ModulePage, PageChrome,
};
pub use dashboard::{DashboardController, DashboardView};
pub use in_flight::{InFlight, InFlightGuard};
pub use language::LanguageController;
pub use session::PortalSession;
pub use update::{Panel, Submitted, ViewUpdate};
pub use workbench::{AdminConsole, FinanceWorkbench, OaWorkbench, OfficeWorkbench, QuickTasks};
