//! The Showcase View: summary cards plus the selection state machine.

use std::fmt;

use showcase_types::{BusinessEntry, Category, ExternalUrl, ImageRef, LifecycleStatus};

use crate::{Catalog, DetailOverlay};

/// Features shown on a summary card before the `+N more` indicator.
pub const CARD_FEATURE_LIMIT: usize = 3;

/// Which entry, if any, is open for detailed viewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<'c> {
    #[default]
    Empty,
    Selected(&'c BusinessEntry),
}

impl<'c> Selection<'c> {
    #[must_use]
    pub fn entry(self) -> Option<&'c BusinessEntry> {
        match self {
            Self::Empty => None,
            Self::Selected(entry) => Some(entry),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Outcome of a selection transition, for callers that animate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange<'c> {
    /// `Empty -> Selected(entry)`.
    Opened(&'c BusinessEntry),
    /// `Selected(from) -> Selected(to)` with no Empty in between.
    Replaced {
        from: &'c BusinessEntry,
        to: &'c BusinessEntry,
    },
    /// `Selected(entry) -> Empty`.
    Closed(&'c BusinessEntry),
    Unchanged,
}

/// Affordances offered by every summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction<'c> {
    SelectForDetail,
    OpenExternal(&'c ExternalUrl),
}

/// The features a card has room for, plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePreview<'c> {
    shown: Vec<&'c str>,
    hidden: usize,
}

impl<'c> FeaturePreview<'c> {
    fn of(entry: &'c BusinessEntry) -> Self {
        let features = entry.features();
        let shown = features
            .iter()
            .take(CARD_FEATURE_LIMIT)
            .map(|feature| feature.as_str())
            .collect();
        Self {
            shown,
            hidden: features.len().saturating_sub(CARD_FEATURE_LIMIT),
        }
    }

    #[must_use]
    pub fn shown(&self) -> &[&'c str] {
        &self.shown
    }

    #[must_use]
    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// `+N more`, or `None` when every feature fits.
    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }

    /// Short chip text: the first word of a feature.
    #[must_use]
    pub fn chip(feature: &str) -> &str {
        feature.split_whitespace().next().unwrap_or(feature)
    }
}

impl fmt::Display for FeaturePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for feature in &self.shown {
            if !first {
                f.write_str(" · ")?;
            }
            f.write_str(Self::chip(feature))?;
            first = false;
        }
        if let Some(label) = self.overflow_label() {
            if !first {
                f.write_str(" · ")?;
            }
            f.write_str(&label)?;
        }
        Ok(())
    }
}

/// One card of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard<'c> {
    index: usize,
    entry: &'c BusinessEntry,
    features: FeaturePreview<'c>,
}

impl<'c> SummaryCard<'c> {
    /// Position in the catalog (and the grid).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
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
    pub fn category(&self) -> &'c Category {
        self.entry.category()
    }

    #[must_use]
    pub fn status(&self) -> LifecycleStatus {
        self.entry.status()
    }

    #[must_use]
    pub fn image(&self) -> &'c ImageRef {
        self.entry.image()
    }

    #[must_use]
    pub fn features(&self) -> &FeaturePreview<'c> {
        &self.features
    }

    #[must_use]
    pub fn actions(&self) -> [CardAction<'c>; 2] {
        [
            CardAction::SelectForDetail,
            CardAction::OpenExternal(self.entry.external_url()),
        ]
    }
}

/// Grid of summary cards over a catalog, plus the selection reference.
///
/// The selection borrows from the catalog, so it can only ever point at an
/// entry that exists. The detail overlay is derived from it on demand.
#[derive(Debug, Clone)]
pub struct ShowcaseView<'c> {
    catalog: &'c Catalog,
    selection: Selection<'c>,
}

impl<'c> ShowcaseView<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::Empty,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[must_use]
    pub fn selection(&self) -> Selection<'c> {
        self.selection
    }

    /// One card per entry, in catalog order.
    #[must_use]
    pub fn render_grid(&self) -> Vec<SummaryCard<'c>> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| SummaryCard {
                index,
                entry,
                features: FeaturePreview::of(entry),
            })
            .collect()
    }

    /// Select `entry` for detail. Re-selecting the open entry is a no-op.
    pub fn on_card_select(&mut self, entry: &'c BusinessEntry) -> SelectionChange<'c> {
        debug_assert!(
            self.catalog.find(entry.id()).is_some(),
            "selected entry must come from the catalog"
        );
        let change = match self.selection {
            Selection::Selected(current) if current.id() == entry.id() => {
                return SelectionChange::Unchanged;
            }
            Selection::Selected(from) => SelectionChange::Replaced { from, to: entry },
            Selection::Empty => SelectionChange::Opened(entry),
        };
        self.selection = Selection::Selected(entry);
        tracing::debug!(id = %entry.id(), title = entry.title(), "Entry selected");
        change
    }

    /// Select the entry at `index`; `None` if the index is out of range.
    pub fn select_index(&mut self, index: usize) -> Option<SelectionChange<'c>> {
        let entry = self.catalog.get(index)?;
        Some(self.on_card_select(entry))
    }

    /// Clear the selection. Always leaves it Empty.
    pub fn on_overlay_dismiss(&mut self) -> SelectionChange<'c> {
        match std::mem::take(&mut self.selection) {
            Selection::Empty => SelectionChange::Unchanged,
            Selection::Selected(entry) => {
                tracing::debug!(id = %entry.id(), "Detail overlay dismissed");
                SelectionChange::Closed(entry)
            }
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let entry = self.selection.entry()?;
        self.catalog.position(entry.id())
    }

    /// Move the selection `step` entries along the catalog, wrapping at the ends.
    /// Does nothing while the selection is empty.
    pub fn select_adjacent(&mut self, step: isize) -> SelectionChange<'c> {
        let Some(current) = self.selected_index() else {
            return SelectionChange::Unchanged;
        };
        let len = self.catalog.len();
        let next = wrap_index(current, step, len);
        self.select_index(next).unwrap_or(SelectionChange::Unchanged)
    }

    /// The overlay for the current selection; `None` while Empty.
    #[must_use]
    pub fn detail_overlay(&self) -> Option<DetailOverlay<'c>> {
        self.selection.entry().map(DetailOverlay::new)
    }
}

fn wrap_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let current = current as isize;
    (current + step).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use showcase_types::EntryId;

    use super::{CardAction, FeaturePreview, Selection, SelectionChange, ShowcaseView};
    use crate::Catalog;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn small_catalog(feature_lists: &[&[&str]]) -> Catalog {
        let mut source = String::new();
        for (index, features) in feature_lists.iter().enumerate() {
            let features = features
                .iter()
                .map(|f| format!("\"{f}\""))
                .collect::<Vec<_>>()
                .join(", ");
            source.push_str(&format!(
                r#"
[[entries]]
id = {id}
title = "Venture {id}"
short_summary = "short"
full_summary = "full"
category = "Printing"
features = [{features}]
image = "v.png"
external_url = "https://v{id}.example.com/"
status = "live"
service_role = "Role"
"#,
                id = index + 1
            ));
        }
        Catalog::parse(&source, "test catalog").unwrap()
    }

    #[test]
    fn initial_load_renders_every_entry_in_order() {
        let catalog = builtin();
        let view = ShowcaseView::new(&catalog);
        let cards = view.render_grid();

        assert_eq!(cards.len(), 10);
        for (index, (card, entry)) in cards.iter().zip(catalog.iter()).enumerate() {
            assert_eq!(card.index(), index);
            assert_eq!(card.title(), entry.title());
        }
        assert_eq!(view.selection(), Selection::Empty);
        assert!(view.detail_overlay().is_none());
    }

    #[test]
    fn selecting_any_entry_shows_its_title_and_url() {
        let catalog = builtin();
        for entry in &catalog {
            let mut view = ShowcaseView::new(&catalog);
            view.on_card_select(entry);
            let overlay = view.detail_overlay().unwrap();
            assert_eq!(overlay.title(), entry.title());
            assert_eq!(overlay.action().url(), entry.external_url());
        }
    }

    #[test]
    fn dismiss_always_empties_the_selection() {
        let catalog = builtin();
        let mut view = ShowcaseView::new(&catalog);

        assert_eq!(view.on_overlay_dismiss(), SelectionChange::Unchanged);
        assert_eq!(view.selection(), Selection::Empty);

        let entry = &catalog.entries()[2];
        view.on_card_select(entry);
        assert_eq!(view.on_overlay_dismiss(), SelectionChange::Closed(entry));
        assert_eq!(view.selection(), Selection::Empty);
        assert!(view.detail_overlay().is_none());

        assert_eq!(view.on_overlay_dismiss(), SelectionChange::Unchanged);
    }

    #[test]
    fn reselection_replaces_without_passing_through_empty() {
        let catalog = builtin();
        let mut view = ShowcaseView::new(&catalog);
        let first = &catalog.entries()[0];
        let second = &catalog.entries()[5];

        assert_eq!(view.on_card_select(first), SelectionChange::Opened(first));
        assert_eq!(
            view.on_card_select(second),
            SelectionChange::Replaced {
                from: first,
                to: second
            }
        );
        assert_eq!(view.selection(), Selection::Selected(second));
    }

    #[test]
    fn selecting_the_open_entry_is_idempotent() {
        let catalog = builtin();
        let mut view = ShowcaseView::new(&catalog);
        let entry = &catalog.entries()[4];

        view.on_card_select(entry);
        assert_eq!(view.on_card_select(entry), SelectionChange::Unchanged);
        assert_eq!(view.selection(), Selection::Selected(entry));
    }

    #[test]
    fn five_features_show_three_and_an_overflow_count() {
        let catalog = small_catalog(&[&["One", "Two", "Three", "Four", "Five"]]);
        let view = ShowcaseView::new(&catalog);
        let cards = view.render_grid();
        let preview = cards[0].features();

        assert_eq!(preview.shown(), ["One", "Two", "Three"]);
        assert_eq!(preview.overflow_label().as_deref(), Some("+2 more"));
    }

    #[test]
    fn three_or_fewer_features_have_no_indicator() {
        let catalog = small_catalog(&[&["One", "Two", "Three"], &["Solo"], &[]]);
        let view = ShowcaseView::new(&catalog);
        let cards = view.render_grid();

        assert_eq!(cards[0].features().shown().len(), 3);
        assert_eq!(cards[1].features().shown(), ["Solo"]);
        assert!(cards[2].features().shown().is_empty());
        assert!(
            cards
                .iter()
                .all(|card| card.features().overflow_label().is_none())
        );
        assert_eq!(cards[2].features().to_string(), "");
    }

    #[test]
    fn card_preview_uses_first_words() {
        let catalog = builtin();
        let view = ShowcaseView::new(&catalog);
        let cards = view.render_grid();
        insta::assert_snapshot!(cards[0].features(), @"Custom · Mobile · Desktop · +3 more");
        assert_eq!(FeaturePreview::chip("LED Video Walls"), "LED");
    }

    #[test]
    fn cards_offer_select_and_open_actions() {
        let catalog = builtin();
        let view = ShowcaseView::new(&catalog);
        let cards = view.render_grid();
        let [select, open] = cards[1].actions();
        assert_eq!(select, CardAction::SelectForDetail);
        assert_eq!(
            open,
            CardAction::OpenExternal(catalog.entries()[1].external_url())
        );
    }

    #[test]
    fn signage_scenario_then_dismiss() {
        let catalog = builtin();
        let mut view = ShowcaseView::new(&catalog);
        let signage = catalog.find(EntryId::new(6).unwrap()).unwrap();

        view.on_card_select(signage);
        let overlay = view.detail_overlay().unwrap();
        assert_eq!(overlay.title(), "Chandra Digital Signage");
        assert_eq!(overlay.service_role(), "Digital Signage Solutions Provider");
        assert_eq!(overlay.features().len(), 8);

        view.on_overlay_dismiss();
        assert!(view.detail_overlay().is_none());
        assert_eq!(view.selection(), Selection::Empty);
    }

    #[test]
    fn adjacent_selection_wraps() {
        let catalog = builtin();
        let mut view = ShowcaseView::new(&catalog);
        assert_eq!(view.select_adjacent(1), SelectionChange::Unchanged);

        view.select_index(9);
        view.select_adjacent(1);
        assert_eq!(view.selected_index(), Some(0));
        view.select_adjacent(-1);
        assert_eq!(view.selected_index(), Some(9));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let catalog = builtin();
        let mut view = ShowcaseView::new(&catalog);
        assert!(view.select_index(10).is_none());
        assert!(view.selection().is_empty());
    }
}
