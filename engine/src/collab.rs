//! Production collaborators: the system browser and an on-disk asset directory.

use std::path::{Path, PathBuf};

use showcase_core::{AssetResolver, AssetStatus, NavigateError, Navigator};
use showcase_types::{ExternalUrl, ImageRef};

/// Opens URLs with the platform opener (`xdg-open`, `open`, `start`).
///
/// The opener is spawned detached; the frame loop never waits on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn open_external(&self, url: &ExternalUrl) -> Result<(), NavigateError> {
        open::that_detached(url.as_str()).map_err(|source| NavigateError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Looks preview images up by file name under a root directory.
#[derive(Debug, Default, Clone)]
pub struct AssetDir {
    root: Option<PathBuf>,
}

impl AssetDir {
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl AssetResolver for AssetDir {
    fn resolve(&self, image: &ImageRef) -> AssetStatus {
        let Some(root) = &self.root else {
            return AssetStatus::Unresolved;
        };
        // Handles are bare file names; anything that tries to leave the root is unresolved.
        let name = Path::new(image.as_str());
        if name.components().count() != 1 || name.file_name().is_none() {
            tracing::warn!(
                image = image.as_str(),
                "Ignoring image reference with path components"
            );
            return AssetStatus::Unresolved;
        }
        let path = root.join(name);
        if path.is_file() {
            AssetStatus::Resolved(path)
        } else {
            tracing::warn!(image = image.as_str(), root = %root.display(), "Image asset not found");
            AssetStatus::Unresolved
        }
    }
}
