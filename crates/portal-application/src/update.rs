//! Results handed from controllers to the presentation layer.

use portal_core::error::PortalError;
use portal_core::i18n::{Catalog, TextKey};
use portal_core::view::FeedView;
use serde_json::Value;

/// What the presentation layer should do after a controller action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate<T> {
    /// Render the result.
    Show(T),
    /// Blocked client-side before any network call; show `status`.
    Rejected { status: String },
    /// The server or the network refused the action; show `status`.
    Failed { status: String },
    /// Leave the page. Nothing else from this action may be rendered.
    Redirect { location: String },
}

impl<T> ViewUpdate<T> {
    /// Maps a gateway error: 401 becomes a redirect, anything else a
    /// failure carrying displayable text.
    pub fn from_error(err: PortalError, catalog: &Catalog) -> Self {
        match err {
            PortalError::Unauthenticated { login_path } => Self::Redirect {
                location: login_path,
            },
            other => Self::Failed {
                status: failure_status(&other, catalog),
            },
        }
    }

    pub fn rejected(status: impl Into<String>) -> Self {
        Self::Rejected {
            status: status.into(),
        }
    }

    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            Self::Redirect { location } => Some(location),
            _ => None,
        }
    }

    pub fn shown(&self) -> Option<&T> {
        match self {
            Self::Show(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_shown(self) -> Option<T> {
        match self {
            Self::Show(value) => Some(value),
            _ => None,
        }
    }

    /// Status text for non-`Show` updates.
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Rejected { status } | Self::Failed { status } => Some(status),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewUpdate<U> {
        match self {
            Self::Show(value) => ViewUpdate::Show(f(value)),
            Self::Rejected { status } => ViewUpdate::Rejected { status },
            Self::Failed { status } => ViewUpdate::Failed { status },
            Self::Redirect { location } => ViewUpdate::Redirect { location },
        }
    }
}

/// Text shown in a status area for a failed call.
///
/// Server rejections keep the server's wording; network failures use the
/// generic localized notice.
pub fn failure_status(err: &PortalError, catalog: &Catalog) -> String {
    match err {
        PortalError::Transport(_) => catalog.text(TextKey::LoadError),
        other => other.to_string(),
    }
}

/// Status line plus output block of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub status: String,
    pub output: Option<String>,
}

impl Panel {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            output: None,
        }
    }

    /// `done` status with the returned entity pretty-printed.
    pub fn done(catalog: &Catalog, entity: &Value) -> Self {
        Self {
            status: catalog.text(TextKey::Done),
            output: Some(pretty(entity)),
        }
    }
}

/// A successful submission and the feed as refreshed right after it.
///
/// `feed` is `None` when the refresh itself failed; the submission still
/// went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub panel: Panel,
    pub feed: Option<FeedView>,
}

pub(crate) fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
