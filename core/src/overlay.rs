//! The Detail Overlay model.

use showcase_types::{
    BusinessEntry, Category, ContactInfo, ExternalUrl, ImageRef, LifecycleStatus, NonEmptyString,
    Stat, VentureProfile,
};

/// The overlay's only outbound action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction<'c> {
    OpenExternal(&'c ExternalUrl),
}

impl<'c> OverlayAction<'c> {
    #[must_use]
    pub fn url(self) -> &'c ExternalUrl {
        match self {
            Self::OpenExternal(url) => url,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenExternal(_) => "Visit Live Website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody<'c> {
    Stats(&'c [Stat]),
    Labels(&'c [NonEmptyString]),
    /// Label/value pairs, only the populated ones.
    Fields(Vec<(&'static str, &'c str)>),
}

/// One populated block of supplemental detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection<'c> {
    pub heading: &'static str,
    pub body: SectionBody<'c>,
}

/// Full detail for the selected entry.
///
/// Only obtainable from [`ShowcaseView::detail_overlay`](crate::ShowcaseView::detail_overlay),
/// so it exists exactly while the selection is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailOverlay<'c> {
    entry: &'c BusinessEntry,
}

impl<'c> DetailOverlay<'c> {
    pub(crate) fn new(entry: &'c BusinessEntry) -> Self {
        Self { entry }
    }

    #[must_use]
    pub fn entry(&self) -> &'c BusinessEntry {
        self.entry
    }

    #[must_use]
    pub fn title(&self) -> &'c str {
        self.entry.title()
    }

    #[must_use]
    pub fn short_summary(&self) -> &'c str {
        self.entry.short_summary()
    }

    #[must_use]
    pub fn full_summary(&self) -> &'c str {
        self.entry.full_summary()
    }

    #[must_use]
    pub fn category(&self) -> &'c Category {
        self.entry.category()
    }

    #[must_use]
    pub fn status(&self) -> LifecycleStatus {
        self.entry.status()
    }

    #[must_use]
    pub fn service_role(&self) -> &'c str {
        self.entry.service_role()
    }

    /// Every feature, untruncated.
    #[must_use]
    pub fn features(&self) -> &'c [NonEmptyString] {
        self.entry.features()
    }

    #[must_use]
    pub fn image(&self) -> &'c ImageRef {
        self.entry.image()
    }

    #[must_use]
    pub fn action(&self) -> OverlayAction<'c> {
        OverlayAction::OpenExternal(self.entry.external_url())
    }

    /// Supplemental sections that have content; empty when there is nothing to show.
    #[must_use]
    pub fn sections(&self) -> Vec<DetailSection<'c>> {
        let mut sections = Vec::new();
        let Some(detail) = self.entry.supplemental() else {
            return sections;
        };

        if let Some(profile) = &detail.profile {
            profile_sections(profile, &mut sections);
        }
        if let Some(contact) = &detail.contact {
            let fields = contact_fields(contact);
            if !fields.is_empty() {
                sections.push(DetailSection {
                    heading: "Contact",
                    body: SectionBody::Fields(fields),
                });
            }
        }
        sections
    }
}

fn profile_sections<'c>(profile: &'c VentureProfile, out: &mut Vec<DetailSection<'c>>) {
    match profile {
        VentureProfile::Signage { stats } => push_stats(out, "Network at a Glance", stats),
        VentureProfile::Directory { stats } => push_stats(out, "Directory Reach", stats),
        VentureProfile::Export {
            certifications,
            markets,
        } => {
            push_labels(out, "Certifications", certifications);
            push_labels(out, "Export Markets", markets);
        }
        VentureProfile::Fashion { categories } => push_labels(out, "Collections", categories),
        VentureProfile::News { categories } => push_labels(out, "Coverage", categories),
    }
}

fn push_stats<'c>(out: &mut Vec<DetailSection<'c>>, heading: &'static str, stats: &'c [Stat]) {
    if !stats.is_empty() {
        out.push(DetailSection {
            heading,
            body: SectionBody::Stats(stats),
        });
    }
}

fn push_labels<'c>(
    out: &mut Vec<DetailSection<'c>>,
    heading: &'static str,
    labels: &'c [NonEmptyString],
) {
    if !labels.is_empty() {
        out.push(DetailSection {
            heading,
            body: SectionBody::Labels(labels),
        });
    }
}

fn contact_fields(contact: &ContactInfo) -> Vec<(&'static str, &str)> {
    [
        ("Phone", contact.phone.as_ref()),
        ("Email", contact.email.as_ref()),
        ("Address", contact.address.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|value| (label, value.as_str())))
    .collect()
}

#[cfg(test)]
mod tests {
    use showcase_types::EntryId;

    use super::SectionBody;
    use crate::{Catalog, ShowcaseView};

    fn overlay_headings(catalog: &Catalog, id: u32) -> Vec<&'static str> {
        let mut view = ShowcaseView::new(catalog);
        let entry = catalog.find(EntryId::new(id).unwrap()).unwrap();
        view.on_card_select(entry);
        view.detail_overlay()
            .unwrap()
            .sections()
            .into_iter()
            .map(|section| section.heading)
            .collect()
    }

    #[test]
    fn entry_without_supplemental_detail_has_no_sections() {
        let catalog = Catalog::builtin().unwrap();
        for id in 1..=5 {
            assert!(overlay_headings(&catalog, id).is_empty(), "entry {id}");
        }
    }

    #[test]
    fn only_populated_sections_render() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(overlay_headings(&catalog, 6), ["Network at a Glance"]);
        assert_eq!(
            overlay_headings(&catalog, 7),
            ["Certifications", "Export Markets"]
        );
        assert_eq!(overlay_headings(&catalog, 9), ["Coverage", "Contact"]);
        assert_eq!(overlay_headings(&catalog, 10), ["Directory Reach"]);
    }

    #[test]
    fn contact_lists_only_present_fields() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ShowcaseView::new(&catalog);
        view.select_index(8);
        let sections = view.detail_overlay().unwrap().sections();
        let contact = sections.last().unwrap();
        assert_eq!(
            contact.body,
            SectionBody::Fields(vec![("Email", "newsdesk@chandraanews.com")])
        );
    }

    #[test]
    fn export_profile_with_only_markets_skips_certifications() {
        let source = r#"
[[entries]]
id = 1
title = "Exporter"
short_summary = "short"
full_summary = "full"
category = "Export Manufacturing"
image = "e.png"
external_url = "https://exporter.example.com/"
status = "live"
service_role = "Role"

[entries.supplemental.profile.export]
markets = ["Germany"]
"#;
        let catalog = Catalog::parse(source, "test").unwrap();
        assert_eq!(overlay_headings(&catalog, 1), ["Export Markets"]);
    }

    #[test]
    fn overlay_shows_full_feature_list_and_action() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = ShowcaseView::new(&catalog);
        view.select_index(0);
        let overlay = view.detail_overlay().unwrap();
        assert_eq!(overlay.features().len(), 6);
        assert_eq!(overlay.action().label(), "Visit Live Website");
        assert_eq!(overlay.action().url().as_str(), "https://mediaweb6.com/");
    }
}
