//! Application state for the showcase.
//!
//! [`App`] wraps the [`ShowcaseView`] selection state machine with everything a
//! frame loop needs around it: scroll position, the card cursor, entrance
//! animations, the overlay's transition effect and click routing. It does no
//! rendering and no terminal IO; the TUI crate draws it and feeds it input.

mod collab;

pub use collab::{AssetDir, SystemBrowser};
pub use showcase_core::{
    AssetResolver, AssetStatus, CARD_FEATURE_LIMIT, CardAction, Catalog, CatalogError,
    DetailOverlay, DetailSection, FeaturePreview, NavigateError, Navigator, OverlayAction,
    SectionBody, Selection, SelectionChange, ShowcaseView, SummaryCard,
};
pub use showcase_types::ui::{
    CardSpan, HitMap, HitTarget, NavItem, OverlayMotion, OverlayTransition, PageMetrics, Region,
    SwapDirection, ThemeName, UiOptions,
};

use std::time::{Duration, Instant};

use showcase_types::ui::{Pulse, ScrollState, Stagger};
use showcase_types::{BusinessEntry, ExternalUrl};

/// Rows scrolled before the navigation bar turns solid.
pub const NAV_SOLID_THRESHOLD: u16 = 2;

const HERO_STAGGER: Duration = Duration::from_millis(300);
const HERO_ITEM_DURATION: Duration = Duration::from_millis(800);
const CARD_STAGGER: Duration = Duration::from_millis(200);
const CARD_REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Fraction of the portfolio section that must be on screen to start the card reveal.
const REVEAL_THRESHOLD: f32 = 0.1;
const SCROLL_CUE_PERIOD: Duration = Duration::from_millis(1500);
const SCROLL_GLIDE: Duration = Duration::from_millis(400);
const NOTICE_TTL: Duration = Duration::from_secs(4);

static UNRESOLVED: AssetStatus = AssetStatus::Unresolved;

/// Parts of the hero section, in entrance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPart {
    Badge,
    Headline,
    Tagline,
    Actions,
    Stats,
    Highlights,
}

impl HeroPart {
    pub const ALL: [HeroPart; 6] = [
        HeroPart::Badge,
        HeroPart::Headline,
        HeroPart::Tagline,
        HeroPart::Actions,
        HeroPart::Stats,
        HeroPart::Highlights,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

#[derive(Debug, Clone)]
struct Notice {
    message: String,
    remaining: Duration,
}

/// Application state
pub struct App<'c> {
    view: ShowcaseView<'c>,
    options: UiOptions,
    navigator: Box<dyn Navigator>,
    /// Asset status per catalog entry, resolved once at startup.
    assets: Vec<AssetStatus>,
    scroll: ScrollState,
    metrics: PageMetrics,
    hits: HitMap,
    /// Card under the keyboard cursor, by catalog index.
    cursor: usize,
    menu_open: bool,
    hero: Stagger,
    /// `None` until the portfolio first scrolls into view.
    card_reveal: Option<Stagger>,
    scroll_cue: Pulse,
    /// Frame timing for animations.
    last_frame: Instant,
    overlay_motion: Option<OverlayMotion>,
    overlay_scroll: u16,
    notice: Option<Notice>,
    should_quit: bool,
}

impl<'c> App<'c> {
    pub fn new(
        catalog: &'c Catalog,
        options: UiOptions,
        navigator: Box<dyn Navigator>,
        assets: &dyn AssetResolver,
    ) -> Self {
        let assets = catalog
            .iter()
            .map(|entry| assets.resolve(entry.image()))
            .collect::<Vec<_>>();
        let unresolved = assets
            .iter()
            .filter(|status| matches!(status, AssetStatus::Unresolved))
            .count();
        tracing::info!(
            entries = catalog.len(),
            unresolved_images = unresolved,
            reduced_motion = options.reduced_motion,
            "Showcase ready"
        );

        let hero = if options.reduced_motion {
            Stagger::finished(HeroPart::ALL.len())
        } else {
            Stagger::new(HeroPart::ALL.len(), HERO_STAGGER, HERO_ITEM_DURATION)
        };

        Self {
            view: ShowcaseView::new(catalog),
            options,
            navigator,
            assets,
            scroll: ScrollState::default(),
            metrics: PageMetrics::default(),
            hits: HitMap::default(),
            cursor: 0,
            menu_open: false,
            hero,
            card_reveal: None,
            scroll_cue: Pulse::new(SCROLL_CUE_PERIOD),
            last_frame: Instant::now(),
            overlay_motion: None,
            overlay_scroll: 0,
            notice: None,
            should_quit: false,
        }
    }

    // ---- read side ----

    pub fn catalog(&self) -> &'c Catalog {
        self.view.catalog()
    }

    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    pub fn cards(&self) -> Vec<SummaryCard<'c>> {
        self.view.render_grid()
    }

    pub fn selection(&self) -> Selection<'c> {
        self.view.selection()
    }

    /// `None` while nothing is selected.
    pub fn detail_overlay(&self) -> Option<DetailOverlay<'c>> {
        self.view.detail_overlay()
    }

    pub fn asset_status(&self, index: usize) -> &AssetStatus {
        self.assets.get(index).unwrap_or(&UNRESOLVED)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn overlay_scroll(&self) -> u16 {
        self.overlay_scroll
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// Whether the navigation bar has turned solid.
    pub fn nav_solid(&self) -> bool {
        self.scroll.offset() > NAV_SOLID_THRESHOLD
    }

    /// Entrance progress of a hero part, `0.0..=1.0`.
    pub fn hero_progress(&self, part: HeroPart) -> f32 {
        self.hero.item_progress(part.index())
    }

    /// Reveal progress of a card. Zero until the portfolio has been seen.
    pub fn card_progress(&self, index: usize) -> f32 {
        if self.options.reduced_motion {
            return 1.0;
        }
        self.card_reveal
            .as_ref()
            .map_or(0.0, |reveal| reveal.item_progress(index))
    }

    /// Phase of the hero's bobbing scroll cue.
    pub fn scroll_cue_phase(&self) -> f32 {
        if self.options.reduced_motion {
            0.0
        } else {
            self.scroll_cue.phase()
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|notice| notice.message.as_str())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ---- frame timing ----

    /// Advance animations by the wall time since the previous tick.
    pub fn tick(&mut self) {
        let elapsed = self.frame_elapsed();
        self.advance(elapsed);
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Advance every animation clock by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.hero.advance(delta);
        if let Some(reveal) = &mut self.card_reveal {
            reveal.advance(delta);
        }
        self.scroll_cue.advance(delta);
        self.scroll.advance(delta);
        self.check_reveal();

        if let Some(motion) = &mut self.overlay_motion {
            motion.advance(delta);
            if motion.is_finished() {
                self.overlay_motion = None;
            }
        }

        if let Some(notice) = &mut self.notice {
            notice.remaining = notice.remaining.saturating_sub(delta);
            if notice.remaining.is_zero() {
                self.notice = None;
            }
        }
    }

    /// Overlay transition in flight, if any.
    pub fn overlay_motion(&self) -> Option<&OverlayMotion> {
        self.overlay_motion.as_ref()
    }

    // ---- layout feedback from the renderer ----

    /// Record the measurements of the frame just laid out.
    pub fn update_layout(&mut self, metrics: PageMetrics) {
        self.scroll.set_max(metrics.max_scroll());
        if metrics.cards.len() < self.catalog().len() {
            tracing::debug!(
                measured = metrics.cards.len(),
                "Layout measured fewer cards than the catalog holds"
            );
        }
        self.metrics = metrics;
        self.check_reveal();
    }

    /// Replace the click targets with the ones drawn this frame.
    pub fn set_hit_map(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    fn check_reveal(&mut self) {
        if self.card_reveal.is_some() || self.metrics.document_height == 0 {
            return;
        }
        let visible = self.metrics.portfolio_visibility(self.scroll.offset());
        if visible >= REVEAL_THRESHOLD {
            let items = self.catalog().len();
            tracing::debug!(visible, "Portfolio revealed");
            self.card_reveal = Some(if self.options.reduced_motion {
                Stagger::finished(items)
            } else {
                Stagger::new(items, CARD_STAGGER, CARD_REVEAL_DURATION)
            });
        }
    }

    // ---- page navigation ----

    pub fn scroll_by(&mut self, rows: i32) {
        self.scroll.scroll_by(rows);
        self.check_reveal();
    }

    pub fn scroll_page(&mut self, down: bool) {
        let page = i32::from(self.metrics.viewport_height.saturating_sub(2).max(1));
        self.scroll_by(if down { page } else { -page });
    }

    /// Scroll to an in-document anchor and close the menu drawer.
    pub fn scroll_to(&mut self, item: NavItem) {
        let target = self.metrics.anchor(item);
        tracing::debug!(anchor = item.anchor(), target, "Scrolling to anchor");
        self.glide_to(target);
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open && self.metrics.compact_nav;
    }

    fn glide_to(&mut self, target: u16) {
        let duration = if self.options.reduced_motion {
            Duration::ZERO
        } else {
            SCROLL_GLIDE
        };
        self.scroll.glide_to(target, duration);
        self.check_reveal();
    }

    // ---- card cursor ----

    pub fn move_cursor(&mut self, motion: CursorMove) {
        let len = self.catalog().len();
        if len == 0 {
            return;
        }
        let columns = usize::from(self.metrics.columns.max(1));
        let last = len - 1;
        self.cursor = match motion {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(last),
            CursorMove::Up => self.cursor.checked_sub(columns).unwrap_or(self.cursor),
            CursorMove::Down => {
                let next = self.cursor + columns;
                if next <= last { next } else { self.cursor }
            }
            CursorMove::First => 0,
            CursorMove::Last => last,
        };
        self.reveal_cursor();
    }

    /// Scroll just enough to bring the cursor's card on screen.
    fn reveal_cursor(&mut self) {
        let Some(span) = self.metrics.cards.get(self.cursor).copied() else {
            return;
        };
        let viewport = self.metrics.viewport_height;
        let offset = self.scroll.target();
        let bottom = span.top.saturating_add(span.height);
        if span.top < offset {
            self.glide_to(span.top);
        } else if bottom > offset.saturating_add(viewport) {
            let target = if span.height > viewport {
                span.top
            } else {
                bottom.saturating_sub(viewport)
            };
            self.glide_to(target);
        }
    }

    // ---- selection ----

    /// Open the overlay for the card under the cursor.
    pub fn select_cursor(&mut self) {
        self.select_card(self.cursor);
    }

    pub fn select_card(&mut self, index: usize) {
        if let Some(change) = self.view.select_index(index) {
            self.on_selection_change(change, None);
        }
    }

    /// Step the open overlay to the previous or next entry.
    pub fn select_adjacent(&mut self, step: isize) {
        let change = self.view.select_adjacent(step);
        self.on_selection_change(change, Some(SwapDirection::from_step(step)));
    }

    /// Close the overlay. Every dismissal path ends here.
    pub fn dismiss_overlay(&mut self) {
        let change = self.view.on_overlay_dismiss();
        self.on_selection_change(change, None);
    }

    /// React to a selection transition. `step` is the direction of a catalog
    /// step, when the change came from one.
    fn on_selection_change(&mut self, change: SelectionChange<'c>, step: Option<SwapDirection>) {
        let transition = match change {
            SelectionChange::Opened(entry) => {
                self.follow_selection(entry);
                // Regions from the last frame still describe the page underneath.
                self.hits.clear();
                Some(OverlayTransition::Open)
            }
            SelectionChange::Replaced { from, to } => {
                let direction = step.unwrap_or_else(|| self.catalog_direction(from, to));
                self.follow_selection(to);
                Some(OverlayTransition::Swap { direction })
            }
            SelectionChange::Closed(_) => {
                self.overlay_motion = None;
                self.overlay_scroll = 0;
                self.hits.clear();
                None
            }
            SelectionChange::Unchanged => None,
        };

        if let Some(transition) = transition {
            tracing::debug!(?transition, "Overlay transition");
            self.overlay_motion =
                (!self.options.reduced_motion).then(|| OverlayMotion::new(transition));
            self.last_frame = Instant::now();
        }
    }

    fn catalog_direction(&self, from: &BusinessEntry, to: &BusinessEntry) -> SwapDirection {
        let catalog = self.catalog();
        match (catalog.position(from.id()), catalog.position(to.id())) {
            (Some(from), Some(to)) if to < from => SwapDirection::Backward,
            _ => SwapDirection::Forward,
        }
    }

    fn follow_selection(&mut self, entry: &BusinessEntry) {
        self.overlay_scroll = 0;
        if let Some(index) = self.catalog().position(entry.id()) {
            self.cursor = index;
        }
    }

    pub fn scroll_overlay_by(&mut self, rows: i32) {
        let next = (i32::from(self.overlay_scroll) + rows).clamp(0, i32::from(u16::MAX));
        self.overlay_scroll = next as u16;
    }

    /// Clamp the overlay body scroll to what the renderer could show.
    pub fn clamp_overlay_scroll(&mut self, max: u16) {
        self.overlay_scroll = self.overlay_scroll.min(max);
    }

    // ---- outbound ----

    pub fn open_cursor_url(&mut self) {
        self.open_card_url(self.cursor);
    }

    pub fn open_card_url(&mut self, index: usize) {
        if let Some(entry) = self.catalog().get(index) {
            self.open_url(entry.external_url());
        }
    }

    /// Run the overlay's action. No-op while nothing is selected.
    pub fn open_selected_url(&mut self) {
        if let Some(overlay) = self.view.detail_overlay() {
            let OverlayAction::OpenExternal(url) = overlay.action();
            self.open_url(url);
        }
    }

    fn open_url(&mut self, url: &ExternalUrl) {
        match self.navigator.open_external(url) {
            Ok(()) => tracing::info!(%url, "Opened external site"),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to open external site");
                self.notice = Some(Notice {
                    message: format!("Could not open {} in a browser", url.display_host()),
                    remaining: NOTICE_TTL,
                });
            }
        }
    }

    // ---- pointer ----

    pub fn click(&mut self, column: u16, row: u16) {
        let Some(target) = self.hits.hit(column, row) else {
            self.menu_open = false;
            return;
        };
        tracing::debug!(?target, column, row, "Click");
        match target {
            HitTarget::Nav(item) => self.scroll_to(item),
            HitTarget::MenuToggle => self.toggle_menu(),
            HitTarget::ExploreButton => self.scroll_to(NavItem::Portfolio),
            HitTarget::Card(index) | HitTarget::CardDetails(index) => {
                self.cursor = index;
                self.select_card(index);
            }
            HitTarget::CardVisit(index) => {
                self.cursor = index;
                self.open_card_url(index);
            }
            HitTarget::OverlayBackdrop | HitTarget::OverlayClose => self.dismiss_overlay(),
            HitTarget::OverlayVisit => self.open_selected_url(),
            HitTarget::OverlayPanel => {}
        }
    }

    /// Mouse wheel: scrolls the overlay body while it is open, the page otherwise.
    pub fn wheel(&mut self, rows: i32) {
        if self.selection().is_empty() {
            self.scroll_by(rows);
        } else {
            self.scroll_overlay_by(rows);
        }
    }
}
