//! The portfolio section: heading and the grid of summary cards.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use showcase_engine::{App, AssetStatus, CardAction, FeaturePreview, HitTarget, SummaryCard};
use showcase_types::LifecycleStatus;

use crate::effects::{is_faint, rise_offset};
use crate::layout::PageLayout;
use crate::shared::{
    KEEP_INDENT, PROSE, chip_line, clean, display_width, fade, truncate_with_ellipsis, wrapped_rows,
};
use crate::theme::{Glyphs, Palette, styles};

pub(crate) const HEADING: &str = "Our";
pub(crate) const HEADING_ACCENT: &str = "Businesses";
pub(crate) const SUBTITLE: &str =
    "Explore our diverse portfolio of professional services and business ventures.";

/// Borders plus one column of padding on each side.
const CARD_CHROME_X: u16 = 4;
/// Browser strip (3), gap, title, gap before chips or actions, actions, borders (2).
const CARD_FIXED_ROWS: u16 = 3 + 1 + 1 + 1 + 1 + 2;
const RISE: u16 = 2;

fn summary_lines(card: &SummaryCard, palette: &Palette) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        clean(card.short_summary()),
        Style::default().fg(palette.text_secondary),
    ))]
}

/// Feature chips plus the `+N more` marker, or `None` for a card without features.
fn feature_line(card: &SummaryCard, palette: &Palette) -> Option<Line<'static>> {
    let preview = card.features();
    if preview.shown().is_empty() {
        return None;
    }
    let labels: Vec<String> = preview
        .shown()
        .iter()
        .map(|feature| clean(FeaturePreview::chip(feature)))
        .collect();
    let mut line = chip_line(&labels, styles::chip(palette));
    if let Some(more) = preview.overflow_label() {
        line.spans.push(Span::raw(" "));
        line.spans.push(Span::styled(more, Style::default().fg(palette.text_muted)));
    }
    Some(line)
}

pub(crate) fn card_height(card: &SummaryCard, width: u16, palette: &Palette) -> u16 {
    let text_width = width.saturating_sub(CARD_CHROME_X).max(1);
    let summary = wrapped_rows(&summary_lines(card, palette), text_width, PROSE);
    let features = feature_line(card, palette)
        .map_or(0, |line| wrapped_rows(&[line], text_width, KEEP_INDENT) + 1);
    CARD_FIXED_ROWS + summary + features
}

fn status_span(status: LifecycleStatus, palette: &Palette, glyphs: &Glyphs) -> Span<'static> {
    let fg = if status.is_live() {
        palette.live
    } else {
        palette.development
    };
    Span::styled(
        format!(" {} {} ", glyphs.status_dot, status.label()),
        Style::default()
            .fg(fg)
            .bg(palette.live_bg)
            .add_modifier(Modifier::BOLD),
    )
}

/// Button label and click target for one of a card's actions.
fn action_button(
    action: CardAction,
    index: usize,
    glyphs: &Glyphs,
    palette: &Palette,
) -> (Span<'static>, HitTarget) {
    match action {
        CardAction::SelectForDetail => (
            Span::styled(
                format!(" {} View Details ", glyphs.details),
                styles::button(palette),
            ),
            HitTarget::CardDetails(index),
        ),
        CardAction::OpenExternal(_) => (
            Span::styled(
                format!(" {} Visit Site ", glyphs.external),
                styles::secondary_button(palette),
            ),
            HitTarget::CardVisit(index),
        ),
    }
}

pub(crate) fn render_heading(buf: &mut Buffer, layout: &PageLayout, palette: &Palette) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let heading = Line::from(vec![
        Span::styled(format!("{HEADING} "), bold.fg(palette.text_primary)),
        Span::styled(HEADING_ACCENT, bold.fg(palette.accent_strong)),
    ]);
    Paragraph::new(heading)
        .alignment(Alignment::Center)
        .render(layout.heading, buf);
    Paragraph::new(SUBTITLE)
        .style(Style::default().fg(palette.text_secondary))
        .alignment(Alignment::Center)
        .wrap(PROSE)
        .render(layout.subtitle, buf);
}

pub(crate) fn render_grid(
    buf: &mut Buffer,
    layout: &PageLayout,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut Vec<(Rect, HitTarget)>,
) {
    for (card, rect) in app.cards().iter().zip(&layout.cards) {
        let progress = app.card_progress(card.index());
        if progress <= 0.0 {
            continue;
        }
        let area = Rect {
            y: rect.y + rise_offset(progress, RISE),
            ..*rect
        }
        .intersection(buf.area);
        render_card(buf, area, card, app, palette, glyphs, hits);
        if is_faint(progress) {
            fade(buf, area);
        }
    }
}

fn render_card(
    buf: &mut Buffer,
    area: Rect,
    card: &SummaryCard,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut Vec<(Rect, HitTarget)>,
) {
    let index = card.index();
    let focused = app.cursor() == index;
    let block = Block::bordered()
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if focused {
            palette.border_focus
        } else {
            palette.border
        }))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);
    hits.push((area, HitTarget::Card(index)));
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let mut y = inner.y;
    let row = |rows: u16, y: &mut u16| {
        let rect = Rect::new(inner.x, *y, inner.width, rows).intersection(inner);
        *y = y.saturating_add(rows);
        rect
    };

    // Mock browser strip.
    let strip = Rect::new(inner.x, y, inner.width, 3).intersection(inner);
    buf.set_style(strip, Style::default().bg(palette.bg_preview));
    let dots_row = row(1, &mut y);
    let dots = Line::from(vec![
        Span::styled(glyphs.browser_dot, Style::default().fg(palette.dot_red)),
        Span::raw(" "),
        Span::styled(glyphs.browser_dot, Style::default().fg(palette.dot_yellow)),
        Span::raw(" "),
        Span::styled(glyphs.browser_dot, Style::default().fg(palette.dot_green)),
    ]);
    Paragraph::new(dots).render(dots_row, buf);
    Paragraph::new(Line::from(status_span(card.status(), palette, glyphs)))
        .alignment(Alignment::Right)
        .render(dots_row, buf);

    let image_row = row(1, &mut y);
    let image = match app.asset_status(index) {
        AssetStatus::Resolved(_) => Span::styled(
            truncate_with_ellipsis(&clean(card.image().as_str()), image_row.width),
            Style::default().fg(palette.text_secondary),
        ),
        AssetStatus::Unresolved => Span::styled(
            "preview unavailable",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        ),
    };
    Paragraph::new(Line::from(image))
        .alignment(Alignment::Center)
        .render(image_row, buf);

    let category_row = row(1, &mut y);
    let category = Span::styled(
        format!(" {} ", clean(card.category().as_str())),
        styles::chip(palette),
    );
    Paragraph::new(Line::from(category)).render(category_row, buf);
    y += 1;

    let title_row = row(1, &mut y);
    let marker = if focused {
        format!("{} ", glyphs.selected)
    } else {
        String::new()
    };
    let title_width = title_row.width.saturating_sub(display_width(&marker));
    let title = Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent_strong)),
        Span::styled(
            truncate_with_ellipsis(&clean(card.title()), title_width),
            styles::heading(palette),
        ),
    ]);
    Paragraph::new(title).render(title_row, buf);

    let summary = summary_lines(card, palette);
    let summary_rows = wrapped_rows(&summary, inner.width, PROSE);
    let summary_area = row(summary_rows, &mut y);
    Paragraph::new(summary)
        .wrap(PROSE)
        .render(summary_area, buf);
    y += 1;

    if let Some(features) = feature_line(card, palette) {
        let rows = wrapped_rows(&[features.clone()], inner.width, KEEP_INDENT);
        let features_area = row(rows, &mut y);
        Paragraph::new(features)
            .wrap(KEEP_INDENT)
            .render(features_area, buf);
        y += 1;
    }

    // Actions sit on the card's last inner row so a row of cards lines them up.
    let actions_y = inner.bottom().saturating_sub(1);
    // First action on the left, second flush right.
    let [(primary, primary_hit), (secondary, secondary_hit)] = card
        .actions()
        .map(|action| action_button(action, index, glyphs, palette));

    let primary_width = display_width(&primary.content);
    let primary_rect = Rect::new(inner.x, actions_y, primary_width, 1).intersection(inner);
    Paragraph::new(Line::from(primary)).render(primary_rect, buf);
    hits.push((primary_rect, primary_hit));

    let secondary_width = display_width(&secondary.content);
    let secondary_x = inner
        .right()
        .saturating_sub(secondary_width)
        .max(primary_rect.right() + 1);
    let secondary_rect = Rect::new(secondary_x, actions_y, secondary_width, 1).intersection(inner);
    Paragraph::new(Line::from(secondary)).render(secondary_rect, buf);
    hits.push((secondary_rect, secondary_hit));
}

#[cfg(test)]
mod tests {
    use showcase_engine::{App, Catalog, HitTarget, UiOptions};

    use super::{CARD_FIXED_ROWS, action_button, card_height, feature_line};
    use crate::test_support::{NoAssets, NullNavigator};
    use crate::theme::{glyphs, palette};

    #[test]
    fn buttons_follow_card_actions() {
        let catalog = Catalog::builtin().unwrap();
        let options = UiOptions::default();
        let app = App::new(&catalog, options, Box::new(NullNavigator), &NoAssets);
        let cards = app.cards();
        let [details, visit] = cards[3]
            .actions()
            .map(|action| action_button(action, 3, &glyphs(options), &palette(options)));

        assert_eq!(details.0.content, " ◎ View Details ");
        assert_eq!(details.1, HitTarget::CardDetails(3));
        assert_eq!(visit.0.content, " ↗ Visit Site ");
        assert_eq!(visit.1, HitTarget::CardVisit(3));
    }

    #[test]
    fn feature_chips_show_first_words_and_overflow() {
        let catalog = Catalog::builtin().unwrap();
        let options = UiOptions::default();
        let app = App::new(&catalog, options, Box::new(NullNavigator), &NoAssets);
        let cards = app.cards();
        let line = feature_line(&cards[0], &palette(options)).unwrap();
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, " Custom   Mobile   Desktop  +3 more");
    }

    #[test]
    fn narrow_cards_grow_taller() {
        let catalog = Catalog::builtin().unwrap();
        let options = UiOptions::default();
        let app = App::new(&catalog, options, Box::new(NullNavigator), &NoAssets);
        let cards = app.cards();
        let p = palette(options);
        let wide = card_height(&cards[0], 140, &p);
        let narrow = card_height(&cards[0], 30, &p);
        assert!(wide > CARD_FIXED_ROWS);
        assert!(narrow > wide);
    }
}
