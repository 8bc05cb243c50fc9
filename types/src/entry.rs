//! The Business Entry record and its field types.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{ExternalUrl, NonEmptyString, SupplementalDetail};

/// Positive identifier of a catalog entry. Unique within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(NonZeroU32);

impl EntryId {
    #[must_use]
    pub const fn new(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Open-ended category label ("Advertising", "Signage", ...).
///
/// Deliberately not an enum: new ventures bring new labels without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(NonEmptyString);

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque handle to a preview image, resolved by the asset collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(NonEmptyString);

impl ImageRef {
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for ImageRef {
    fn from(name: NonEmptyString) -> Self {
        Self(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    Live,
    Development,
}

impl LifecycleStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Development => "Development",
        }
    }

    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

/// One venture in the portfolio catalog.
///
/// Records are authored once in the catalog data file and never mutated; every
/// field is validated on load, so holders of a `BusinessEntry` can rely on
/// non-empty text and a well-formed absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessEntry {
    id: EntryId,
    title: NonEmptyString,
    short_summary: NonEmptyString,
    full_summary: NonEmptyString,
    category: Category,
    #[serde(default)]
    features: Vec<NonEmptyString>,
    image: ImageRef,
    external_url: ExternalUrl,
    status: LifecycleStatus,
    service_role: NonEmptyString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supplemental: Option<SupplementalDetail>,
}

impl BusinessEntry {
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn short_summary(&self) -> &str {
        self.short_summary.as_str()
    }

    #[must_use]
    pub fn full_summary(&self) -> &str {
        self.full_summary.as_str()
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn features(&self) -> &[NonEmptyString] {
        &self.features
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn external_url(&self) -> &ExternalUrl {
        &self.external_url
    }

    #[must_use]
    pub fn status(&self) -> LifecycleStatus {
        self.status
    }

    #[must_use]
    pub fn service_role(&self) -> &str {
        self.service_role.as_str()
    }

    /// Supplemental detail, `None` when the entry carries nothing beyond the base record.
    ///
    /// An authored-but-empty `[supplemental]` table is folded into `None` here so
    /// callers never have to distinguish the two.
    #[must_use]
    pub fn supplemental(&self) -> Option<&SupplementalDetail> {
        self.supplemental.as_ref().filter(|detail| !detail.is_empty())
    }
}
