//! Seams to the hosting environment: opening URLs and resolving images.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use showcase_types::{ExternalUrl, ImageRef};

#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("failed to open {url} in a browser: {source}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Opens a URL in a new browsing context. Must return without waiting on
/// the browser.
pub trait Navigator {
    fn open_external(&self, url: &ExternalUrl) -> Result<(), NavigateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Resolved(PathBuf),
    /// Not found; render a placeholder.
    Unresolved,
}

pub trait AssetResolver {
    fn resolve(&self, image: &ImageRef) -> AssetStatus;
}
