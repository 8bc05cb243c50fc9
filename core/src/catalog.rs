//! The Catalog Store.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use showcase_types::{BusinessEntry, Category, EntryId};

/// The canonical catalog, embedded at build time.
pub const BUILTIN_CATALOG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.toml"));

const BUILTIN_ORIGIN: &str = "built-in catalog";

/// Authoring defects found while loading a catalog.
///
/// These only surface at startup; a loaded [`Catalog`] has no failure modes.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("{origin} has no entries")]
    Empty { origin: String },
    #[error("{origin} repeats entry id {id} (\"{first}\" and \"{second}\")")]
    DuplicateId {
        origin: String,
        id: EntryId,
        first: String,
        second: String,
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<BusinessEntry>,
}

/// Ordered, immutable list of ventures. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<BusinessEntry>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(BUILTIN_CATALOG, BUILTIN_ORIGIN)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, &format!("catalog {}", path.display()))
    }

    /// Parse and validate catalog TOML. `origin` names the source in errors.
    pub fn parse(source: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source).map_err(|source| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        if file.entries.is_empty() {
            return Err(CatalogError::Empty {
                origin: origin.to_string(),
            });
        }

        let mut seen: HashMap<EntryId, usize> = HashMap::with_capacity(file.entries.len());
        for (index, entry) in file.entries.iter().enumerate() {
            if let Some(&first) = seen.get(&entry.id()) {
                return Err(CatalogError::DuplicateId {
                    origin: origin.to_string(),
                    id: entry.id(),
                    first: file.entries[first].title().to_string(),
                    second: entry.title().to_string(),
                });
            }
            seen.insert(entry.id(), index);
        }

        tracing::debug!(origin, entries = file.entries.len(), "Catalog loaded");
        Ok(Self {
            entries: file.entries,
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[BusinessEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BusinessEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BusinessEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn find(&self, id: EntryId) -> Option<&BusinessEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        let mut out: Vec<&Category> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.category()) {
                out.push(entry.category());
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BusinessEntry;
    type IntoIter = std::slice::Iter<'a, BusinessEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use showcase_types::{EntryId, LifecycleStatus};

    use super::{Catalog, CatalogError};

    fn entry_toml(id: u32, title: &str) -> String {
        format!(
            r#"
[[entries]]
id = {id}
title = "{title}"
short_summary = "short"
full_summary = "full"
category = "Printing"
image = "x.png"
external_url = "https://example.com/"
status = "live"
service_role = "Role"
"#
        )
    }

    #[test]
    fn builtin_catalog_loads_in_display_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 10);
        let ids: Vec<u32> = catalog.iter().map(|e| e.id().get()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(catalog.entries()[0].title(), "Media Web 6");
        assert_eq!(catalog.entries()[9].title(), "Focus Yellow Pages");
    }

    #[test]
    fn builtin_catalog_keeps_final_revision_urls() {
        let catalog = Catalog::builtin().unwrap();
        let concept = catalog.find(EntryId::new(5).unwrap()).unwrap();
        assert_eq!(
            concept.external_url().as_str(),
            "https://chandraaconcepts.com/"
        );
    }

    #[test]
    fn builtin_catalog_has_a_development_entry() {
        let catalog = Catalog::builtin().unwrap();
        assert!(
            catalog
                .iter()
                .any(|entry| entry.status() == LifecycleStatus::Development)
        );
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let catalog = Catalog::builtin().unwrap();
        let categories: Vec<&str> = catalog.categories().iter().map(|c| c.as_str()).collect();
        assert_eq!(categories.len(), 10);
        assert_eq!(&categories[..3], ["Development", "Advertising", "Events"]);

        let source = format!("{}{}", entry_toml(1, "A"), entry_toml(2, "B"));
        let small = Catalog::parse(&source, "test").unwrap();
        assert_eq!(small.categories().len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = format!("{}{}", entry_toml(4, "First"), entry_toml(4, "Second"));
        let err = Catalog::parse(&source, "test catalog").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
        assert_eq!(
            err.to_string(),
            "test catalog repeats entry id 4 (\"First\" and \"Second\")"
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::parse("", "test catalog").unwrap_err();
        assert!(matches!(err, CatalogError::Empty { .. }));
    }

    #[test]
    fn malformed_url_is_a_parse_error() {
        let source = entry_toml(1, "A").replace("https://example.com/", "#");
        let err = Catalog::parse(&source, "test catalog").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let source = format!("theme = \"gold\"\n{}", entry_toml(1, "A"));
        assert!(Catalog::parse(&source, "test").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(entry_toml(3, "From Disk").as_bytes())
            .unwrap();
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.position(EntryId::new(3).unwrap()), Some(0));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Catalog::from_path(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
