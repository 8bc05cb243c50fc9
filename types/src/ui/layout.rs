//! Geometry shared between the renderer (which measures) and the engine
//! (which routes clicks and keeps the cursor in view).

/// A screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// In-document anchors reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Home,
    Portfolio,
}

impl NavItem {
    pub const ALL: [NavItem; 2] = [NavItem::Home, NavItem::Portfolio];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Portfolio => "Portfolio",
        }
    }

    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Portfolio => "portfolio",
        }
    }
}

/// Something clickable that the renderer drew this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Nav(NavItem),
    MenuToggle,
    ExploreButton,
    /// Card body, by catalog index.
    Card(usize),
    CardDetails(usize),
    CardVisit(usize),
    /// Anywhere outside the overlay's content panel.
    OverlayBackdrop,
    OverlayPanel,
    OverlayClose,
    OverlayVisit,
}

/// Click targets for the current frame, in paint order.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Region, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, region: Region, target: HitTarget) {
        if region.width > 0 && region.height > 0 {
            self.regions.push((region, target));
        }
    }

    /// The topmost (last painted) target under the pointer.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(region, _)| region.contains(column, row))
            .map(|(_, target)| *target)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Vertical extent of one card in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardSpan {
    pub top: u16,
    pub height: u16,
}

/// Document measurements from the last layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetrics {
    /// Rows available for the scrolling document (below the nav bar).
    pub viewport_height: u16,
    pub document_height: u16,
    pub portfolio_anchor: u16,
    /// Grid columns at the current width.
    pub columns: u16,
    /// Whether the nav bar collapsed into a menu toggle.
    pub compact_nav: bool,
    pub cards: Vec<CardSpan>,
}

impl PageMetrics {
    #[must_use]
    pub fn max_scroll(&self) -> u16 {
        self.document_height.saturating_sub(self.viewport_height)
    }

    #[must_use]
    pub fn anchor(&self, item: NavItem) -> u16 {
        match item {
            NavItem::Home => 0,
            NavItem::Portfolio => self.portfolio_anchor,
        }
    }

    /// Rows of the portfolio section visible at `offset`, as a fraction of the section.
    #[must_use]
    pub fn portfolio_visibility(&self, offset: u16) -> f32 {
        let section = self.document_height.saturating_sub(self.portfolio_anchor);
        if section == 0 {
            return 0.0;
        }
        let view_end = offset.saturating_add(self.viewport_height);
        let visible_start = offset.max(self.portfolio_anchor);
        let visible = view_end.min(self.document_height).saturating_sub(visible_start);
        f32::from(visible) / f32::from(section)
    }
}
