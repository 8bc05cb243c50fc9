//! TUI rendering for the showcase using ratatui.

mod cards;
mod effects;
mod hero;
mod input;
mod layout;
mod overlay;
mod shared;
mod theme;

pub use effects::overlay_panel_rect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};

use showcase_engine::{App, HitMap, HitTarget, NavItem};

use crate::layout::{PAGE_MARGIN, PageLayout};
use crate::shared::{clean, display_width, doc_to_screen, region, span_width};

const NAV_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
const MIN_WIDTH: u16 = 24;
const MIN_HEIGHT: u16 = 6;
const MENU_WIDTH: u16 = 16;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg).fg(palette.text_primary));
    frame.render_widget(bg_block, area);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(
            Paragraph::new("Terminal too small")
                .style(Style::default().fg(palette.text_muted))
                .alignment(Alignment::Center),
            area,
        );
        app.set_hit_map(HitMap::default());
        return;
    }

    let [nav_area, page_area, footer_area] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let layout = PageLayout::compute(app, page_area.width, page_area.height, &palette);
    app.update_layout(layout.metrics(page_area.height));

    let mut hits = HitMap::default();
    draw_page(frame, app, &layout, page_area, &palette, &glyphs, &mut hits);
    draw_nav(frame, app, &layout, nav_area, &palette, &glyphs, &mut hits);
    draw_footer(frame, app, &layout, footer_area, &palette, &glyphs);

    if let Some(detail) = app.detail_overlay() {
        overlay::draw_overlay(frame, app, &detail, area, &palette, &glyphs, &mut hits);
    }

    app.set_hit_map(hits);
}

/// Draw the whole document off-screen, then copy the rows scrolled into view.
fn draw_page(
    frame: &mut Frame,
    app: &App,
    layout: &PageLayout,
    page: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitMap,
) {
    let doc_area = Rect::new(0, 0, layout.width, layout.document_height);
    let mut doc = Buffer::empty(doc_area);
    doc.set_style(
        doc_area,
        Style::default().bg(palette.bg).fg(palette.text_primary),
    );

    let mut doc_hits = Vec::new();
    hero::render(&mut doc, &layout.hero, app, palette, glyphs, &mut doc_hits);
    cards::render_heading(&mut doc, layout, palette);
    cards::render_grid(&mut doc, layout, app, palette, glyphs, &mut doc_hits);

    let offset = app.scroll_offset();
    let buf = frame.buffer_mut();
    for row in 0..page.height {
        let doc_y = offset.saturating_add(row);
        if doc_y >= doc_area.height {
            break;
        }
        for col in 0..page.width.min(doc_area.width) {
            if let (Some(src), Some(dst)) = (
                doc.cell((col, doc_y)),
                buf.cell_mut((page.x + col, page.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }

    for (rect, target) in doc_hits {
        if let Some(screen) = doc_to_screen(rect, offset, page) {
            hits.push(screen, target);
        }
    }

    let max_scroll = layout.document_height.saturating_sub(page.height);
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut state = ScrollbarState::new(usize::from(max_scroll))
            .position(usize::from(offset))
            .viewport_content_length(usize::from(page.height));
        frame.render_stateful_widget(scrollbar, page, &mut state);
    }
}

fn draw_nav(
    frame: &mut Frame,
    app: &App,
    layout: &PageLayout,
    nav: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitMap,
) {
    let solid = app.nav_solid();
    let bg = if solid { palette.bg_panel } else { palette.bg };
    frame.render_widget(Block::default().style(Style::default().bg(bg)), nav);

    let mut brand_style = Style::default().fg(palette.text_primary);
    if solid {
        brand_style = brand_style.add_modifier(Modifier::BOLD);
    }
    let brand = vec![
        Span::styled(
            format!("{} ", glyphs.badge),
            Style::default().fg(palette.accent),
        ),
        Span::styled(format!("{} ", hero::BRAND), brand_style),
        Span::styled(hero::BRAND_SUFFIX, brand_style.fg(palette.accent_strong)),
    ];
    let brand_width = span_width(&brand);
    let brand_rect = Rect::new(nav.x + PAGE_MARGIN, nav.y, brand_width, 1).intersection(nav);
    frame.render_widget(Paragraph::new(Line::from(brand)), brand_rect);
    hits.push(region(brand_rect), HitTarget::Nav(NavItem::Home));

    let current = if app.scroll_offset() >= layout.portfolio_top.saturating_sub(1) {
        NavItem::Portfolio
    } else {
        NavItem::Home
    };

    if !layout.compact_nav {
        let labels: Vec<(NavItem, String)> = NavItem::ALL
            .iter()
            .map(|item| (*item, format!(" {} ", item.label())))
            .collect();
        let total: u16 = labels
            .iter()
            .map(|(_, label)| display_width(label) + 1)
            .sum();
        let mut x = nav.right().saturating_sub(total + PAGE_MARGIN);
        for (item, label) in labels {
            let width = display_width(&label);
            let style = if item == current {
                Style::default()
                    .fg(palette.accent_strong)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            let rect = Rect::new(x, nav.y, width, 1).intersection(nav);
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            hits.push(region(rect), HitTarget::Nav(item));
            x += width + 1;
        }
        return;
    }

    let toggle = format!(
        " {} ",
        if app.menu_open() {
            glyphs.close
        } else {
            glyphs.menu
        }
    );
    let toggle_width = display_width(&toggle);
    let toggle_rect = Rect::new(
        nav.right().saturating_sub(toggle_width + PAGE_MARGIN),
        nav.y,
        toggle_width,
        1,
    )
    .intersection(nav);
    frame.render_widget(
        Paragraph::new(Span::styled(toggle, styles::key_highlight(palette))),
        toggle_rect,
    );
    hits.push(region(toggle_rect), HitTarget::MenuToggle);

    if app.menu_open() {
        let height = NavItem::ALL.len() as u16 + 2;
        // Drops down from the nav bar over the page.
        let drawer = Rect::new(
            nav.right().saturating_sub(MENU_WIDTH + PAGE_MARGIN),
            nav.bottom(),
            MENU_WIDTH,
            height,
        )
        .intersection(frame.area());
        frame.render_widget(Clear, drawer);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border_focus))
            .style(Style::default().bg(palette.bg_panel))
            .padding(Padding::horizontal(1));
        let inner = block.inner(drawer);
        frame.render_widget(block, drawer);
        hits.push(region(drawer), HitTarget::MenuToggle);
        for (i, item) in NavItem::ALL.iter().enumerate() {
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1).intersection(inner);
            let style = if *item == current {
                Style::default()
                    .fg(palette.accent_strong)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_primary)
            };
            frame.render_widget(Paragraph::new(Span::styled(item.label(), style)), row);
            hits.push(region(row), HitTarget::Nav(*item));
        }
    }
}

fn draw_footer(
    frame: &mut Frame,
    app: &App,
    layout: &PageLayout,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_panel)),
        area,
    );

    if let Some(notice) = app.notice() {
        let line = Line::from(Span::styled(
            format!(" ! {}", clean(notice)),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let overlay_open = !app.selection().is_empty();
    let mut hints: Vec<(&str, &str)> = if overlay_open {
        vec![
            ("Esc", "close"),
            ("[ ]", "prev/next"),
            (glyphs.up_down, "scroll"),
            ("o", "visit site"),
        ]
    } else {
        vec![
            (glyphs.arrows, "move"),
            ("Enter", "details"),
            ("o", "visit"),
            ("g/p", "home/portfolio"),
        ]
    };
    if !overlay_open && layout.compact_nav {
        hints.push(("m", "menu"));
    }
    hints.push(("q", "quit"));

    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in hints {
        spans.push(Span::styled(key.to_string(), styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {desc}  "), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let total = app.catalog().len();
    if total > 0 {
        let position = Span::styled(
            format!("{}/{total} ", app.cursor() + 1),
            styles::key_hint(palette),
        );
        frame.render_widget(
            Paragraph::new(Line::from(position)).alignment(Alignment::Right),
            area,
        );
    }
}
