//! Sparse per-venture extras: stats, certifications, markets, contact details.
//!
//! Every part is optional and no venture kind requires any particular field.
//! Unknown keys are rejected at load time instead of being carried around as an
//! untyped bag.

use serde::{Deserialize, Serialize};

use crate::NonEmptyString;

/// A headline figure such as `500+ Screens Installed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: NonEmptyString,
    pub label: NonEmptyString,
}

/// Category-specific detail for the ventures that have any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum VentureProfile {
    Signage {
        #[serde(default)]
        stats: Vec<Stat>,
    },
    Export {
        #[serde(default)]
        certifications: Vec<NonEmptyString>,
        #[serde(default)]
        markets: Vec<NonEmptyString>,
    },
    Fashion {
        #[serde(default)]
        categories: Vec<NonEmptyString>,
    },
    News {
        #[serde(default)]
        categories: Vec<NonEmptyString>,
    },
    Directory {
        #[serde(default)]
        stats: Vec<Stat>,
    },
}

impl VentureProfile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Signage { stats } | Self::Directory { stats } => stats.is_empty(),
            Self::Export {
                certifications,
                markets,
            } => certifications.is_empty() && markets.is_empty(),
            Self::Fashion { categories } | Self::News { categories } => categories.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<NonEmptyString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<NonEmptyString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<NonEmptyString>,
}

impl ContactInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplementalDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<VentureProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl SupplementalDetail {
    /// True when nothing in the record would render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profile.as_ref().is_none_or(VentureProfile::is_empty)
            && self.contact.as_ref().is_none_or(ContactInfo::is_empty)
    }
}
