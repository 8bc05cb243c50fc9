//! Document layout: where each hero part and card sits on the scrolling page.
//!
//! Coordinates here are document coordinates (row 0 is the top of the hero),
//! not screen coordinates. The renderer draws the whole document off-screen
//! and copies the rows currently scrolled into view.

use ratatui::layout::Rect;
use ratatui::text::Line;

use showcase_engine::{App, CardSpan, PageMetrics, SummaryCard};

use crate::cards;
use crate::hero;
use crate::shared::{KEEP_INDENT, PROSE, wrapped_rows};
use crate::theme::Palette;

/// Terminals narrower than this collapse the nav links into a menu toggle.
pub(crate) const COMPACT_NAV_BELOW: u16 = 72;
const TWO_COLUMNS_FROM: u16 = 100;
const THREE_COLUMNS_FROM: u16 = 150;

pub(crate) const PAGE_MARGIN: u16 = 2;
const GRID_GAP: u16 = 2;
const ROW_GAP: u16 = 1;
const TEXT_WIDTH: u16 = 90;
/// Rows the hero reserves below its content for the scroll cue.
const CUE_ROWS: u16 = 2;

#[must_use]
pub(crate) fn columns_for(width: u16) -> u16 {
    if width >= THREE_COLUMNS_FROM {
        3
    } else if width >= TWO_COLUMNS_FROM {
        2
    } else {
        1
    }
}

#[must_use]
pub(crate) fn is_compact_nav(width: u16) -> bool {
    width < COMPACT_NAV_BELOW
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HeroLayout {
    pub height: u16,
    pub badge: Rect,
    pub headline: Rect,
    pub tagline: Rect,
    pub actions: Rect,
    pub stats: Rect,
    pub highlights: Rect,
    pub cue: Rect,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PageLayout {
    pub width: u16,
    pub hero: HeroLayout,
    pub portfolio_top: u16,
    pub heading: Rect,
    pub subtitle: Rect,
    pub cards: Vec<Rect>,
    pub columns: u16,
    pub compact_nav: bool,
    pub document_height: u16,
}

impl PageLayout {
    pub(crate) fn compute(
        app: &App,
        width: u16,
        viewport_height: u16,
        palette: &Palette,
    ) -> Self {
        let text = text_column(width);
        let hero = hero_layout(app, text, viewport_height, palette);

        let portfolio_top = hero.height;
        let heading = Rect::new(text.x, portfolio_top + 2, text.width, 1);
        let subtitle_rows = wrapped_rows(&[Line::from(cards::SUBTITLE)], text.width, PROSE).max(1);
        let subtitle = Rect::new(text.x, heading.bottom() + 1, text.width, subtitle_rows);

        let columns = columns_for(width);
        let grid_top = subtitle.bottom() + 2;
        let (cards, grid_bottom) = grid(&app.cards(), width, columns, grid_top, palette);

        Self {
            width,
            hero,
            portfolio_top,
            heading,
            subtitle,
            cards,
            columns,
            compact_nav: is_compact_nav(width),
            document_height: grid_bottom.saturating_add(2),
        }
    }

    pub(crate) fn metrics(&self, viewport_height: u16) -> PageMetrics {
        PageMetrics {
            viewport_height,
            document_height: self.document_height,
            portfolio_anchor: self.portfolio_top,
            columns: self.columns,
            compact_nav: self.compact_nav,
            cards: self
                .cards
                .iter()
                .map(|rect| CardSpan {
                    top: rect.y,
                    height: rect.height,
                })
                .collect(),
        }
    }
}

/// Centered column that hero and heading text wraps within.
fn text_column(width: u16) -> Rect {
    let usable = width.saturating_sub(PAGE_MARGIN * 2).max(1);
    let text_width = usable.min(TEXT_WIDTH);
    Rect::new((width - text_width.min(width)) / 2, 0, text_width, 0)
}

fn hero_layout(app: &App, text: Rect, viewport_height: u16, palette: &Palette) -> HeroLayout {
    let tagline_rows = wrapped_rows(&[Line::from(hero::TAGLINE)], text.width, PROSE).max(1);
    let highlight_rows =
        wrapped_rows(&[hero::highlight_line(app, palette)], text.width, KEEP_INDENT);
    // badge, gap, headline, gap, tagline, gap, actions, gap, stats (2), gap, highlights
    let content = 1 + 1 + 1 + 1 + tagline_rows + 1 + 1 + 1 + 2 + 1 + highlight_rows;
    let height = viewport_height.max(content + CUE_ROWS + 3);
    let top = (height.saturating_sub(content + CUE_ROWS + 1) / 2).max(1);

    let row = |y: u16, rows: u16| Rect::new(text.x, y, text.width, rows);
    let badge = row(top, 1);
    let headline = row(badge.bottom() + 1, 1);
    let tagline = row(headline.bottom() + 1, tagline_rows);
    let actions = row(tagline.bottom() + 1, 1);
    let stats = row(actions.bottom() + 1, 2);
    let highlights = row(stats.bottom() + 1, highlight_rows);
    let cue = row(height - CUE_ROWS - 1, CUE_ROWS);

    HeroLayout {
        height,
        badge,
        headline,
        tagline,
        actions,
        stats,
        highlights,
        cue,
    }
}

/// Card rectangles, row by row, and the row just below the grid.
fn grid(
    cards: &[SummaryCard],
    width: u16,
    columns: u16,
    top: u16,
    palette: &Palette,
) -> (Vec<Rect>, u16) {
    let usable = width.saturating_sub(PAGE_MARGIN * 2);
    let card_width = usable
        .saturating_sub(GRID_GAP * (columns - 1))
        .checked_div(columns)
        .unwrap_or(usable)
        .max(1);

    let mut rects = Vec::with_capacity(cards.len());
    let mut y = top;
    for row in cards.chunks(usize::from(columns)) {
        let height = row
            .iter()
            .map(|card| cards::card_height(card, card_width, palette))
            .max()
            .unwrap_or(0);
        for (col, _) in row.iter().enumerate() {
            let x = PAGE_MARGIN + (card_width + GRID_GAP) * col as u16;
            rects.push(Rect::new(x, y, card_width, height));
        }
        y = y.saturating_add(height + ROW_GAP);
    }
    (rects, y)
}
