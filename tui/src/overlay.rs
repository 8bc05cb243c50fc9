//! Detail overlay: dimmed backdrop, centered panel, scrollable body.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use showcase_engine::{App, DetailOverlay, HitMap, HitTarget, SectionBody};

use crate::effects::overlay_panel_rect;
use crate::shared::{
    KEEP_INDENT, clean, display_width, region, span_width, truncate_with_ellipsis, wrapped_rows,
};
use crate::theme::{Glyphs, Palette, styles};

const MAX_PANEL_WIDTH: u16 = 96;
/// Title, summary and rule above the body; blank row and action below it.
const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 2;
const MIN_PANEL_HEIGHT: u16 = 10;

fn heading(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(palette.accent_strong)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: Span<'static>, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(palette.text_muted)),
        value,
    ])
}

/// Body lines of the overlay, before wrapping.
pub(crate) fn body_lines(
    overlay: &DetailOverlay,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let primary = Style::default().fg(palette.text_primary);
    let secondary = Style::default().fg(palette.text_secondary);
    let mut lines = vec![
        heading("Service Overview", palette),
        Line::from(Span::styled(clean(overlay.full_summary()), secondary)),
        Line::default(),
        field(
            "Category",
            Span::styled(clean(overlay.category().as_str()), primary),
            palette,
        ),
    ];

    let status = overlay.status();
    let status_color = if status.is_live() {
        palette.live
    } else {
        palette.development
    };
    lines.push(field(
        "Status",
        Span::styled(
            format!("{} {}", glyphs.status_dot, status.label()),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        palette,
    ));
    lines.push(field(
        "Service Type",
        Span::styled(clean(overlay.service_role()), primary),
        palette,
    ));

    if !overlay.features().is_empty() {
        lines.push(Line::default());
        lines.push(heading("Key Services & Features", palette));
        for feature in overlay.features() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", glyphs.check),
                    Style::default().fg(palette.live),
                ),
                Span::styled(clean(feature), primary),
            ]));
        }
    }

    for section in overlay.sections() {
        lines.push(Line::default());
        lines.push(heading(section.heading, palette));
        match section.body {
            SectionBody::Stats(stats) => {
                for stat in stats {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {}  ", clean(&stat.value)),
                            Style::default()
                                .fg(palette.accent_strong)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(clean(&stat.label), secondary),
                    ]));
                }
            }
            SectionBody::Labels(labels) => {
                for label in labels {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {} ", glyphs.bullet),
                            Style::default().fg(palette.accent),
                        ),
                        Span::styled(clean(label), primary),
                    ]));
                }
            }
            SectionBody::Fields(fields) => {
                for (label, value) in fields {
                    let mut line = field(label, Span::styled(clean(value), primary), palette);
                    line.spans.insert(0, Span::raw("  "));
                    lines.push(line);
                }
            }
        }
    }

    lines
}

pub(crate) fn draw_overlay(
    frame: &mut Frame,
    app: &mut App,
    overlay: &DetailOverlay,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut HitMap,
) {
    // Backdrop: everything behind the panel is dimmed and closes the overlay when clicked.
    frame.buffer_mut().set_style(
        area,
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::DIM),
    );
    hits.push(region(area), HitTarget::OverlayBackdrop);

    let lines = body_lines(overlay, palette, glyphs);
    let panel_width = area.width.saturating_sub(4).min(MAX_PANEL_WIDTH).max(1);
    // Borders plus horizontal padding.
    let body_width = panel_width.saturating_sub(4).max(1);
    let body_rows = wrapped_rows(&lines, body_width, KEEP_INDENT);
    let chrome = 2 + HEADER_ROWS + FOOTER_ROWS;
    let panel_height = (body_rows + chrome)
        .max(MIN_PANEL_HEIGHT)
        .min(area.height.saturating_sub(2))
        .max(1);
    let base = Rect {
        x: area.x + (area.width.saturating_sub(panel_width)) / 2,
        y: area.y + (area.height.saturating_sub(panel_height)) / 2,
        width: panel_width,
        height: panel_height,
    };
    let panel = app
        .overlay_motion()
        .map_or(base, |motion| overlay_panel_rect(motion, base, area));

    frame.render_widget(Clear, panel);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border_focus))
        .style(Style::default().bg(palette.bg_overlay))
        .padding(Padding::horizontal(1));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    hits.push(region(panel), HitTarget::OverlayPanel);

    // Close control sits on the top border.
    let close = format!("[{}]", glyphs.close);
    let close_width = display_width(&close);
    if panel.width > close_width + 4 {
        let close_rect = Rect::new(panel.right() - close_width - 2, panel.y, close_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(close, styles::key_highlight(palette))),
            close_rect,
        );
        hits.push(region(close_rect), HitTarget::OverlayClose);
    }

    if inner.height < HEADER_ROWS + FOOTER_ROWS + 1 || inner.width == 0 {
        return;
    }

    let title = Line::from(Span::styled(
        truncate_with_ellipsis(&clean(overlay.title()), inner.width),
        styles::heading(palette),
    ));
    frame.render_widget(Paragraph::new(title), Rect { height: 1, ..inner });
    let summary = Line::from(Span::styled(
        truncate_with_ellipsis(&clean(overlay.short_summary()), inner.width),
        Style::default().fg(palette.text_secondary),
    ));
    frame.render_widget(
        Paragraph::new(summary),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );
    let rule = glyphs.rule.repeat(usize::from(inner.width));
    frame.render_widget(
        Paragraph::new(Span::styled(rule, Style::default().fg(palette.border))),
        Rect::new(inner.x, inner.y + 2, inner.width, 1),
    );

    let body = Rect::new(
        inner.x,
        inner.y + HEADER_ROWS,
        inner.width,
        inner.height - HEADER_ROWS - FOOTER_ROWS,
    );
    let body_rows = wrapped_rows(&lines, body.width, KEEP_INDENT);
    let max_scroll = body_rows.saturating_sub(body.height);
    app.clamp_overlay_scroll(max_scroll);
    let scroll = app.overlay_scroll();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(KEEP_INDENT)
            .scroll((scroll, 0)),
        body,
    );
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut state = ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll));
        frame.render_stateful_widget(
            scrollbar,
            Rect {
                x: panel.right().saturating_sub(1),
                ..body
            }
            .intersection(panel),
            &mut state,
        );
    }

    let action = overlay.action();
    let button = vec![Span::styled(
        format!("  {} {}  ", glyphs.external, action.label()),
        styles::button(palette),
    )];
    let button_width = span_width(&button).min(inner.width);
    let button_rect = Rect::new(inner.x, inner.bottom() - 1, button_width, 1);
    frame.render_widget(Paragraph::new(Line::from(button)), button_rect);
    hits.push(region(button_rect), HitTarget::OverlayVisit);

    let host = Span::styled(
        clean(action.url().display_host()),
        Style::default().fg(palette.text_muted),
    );
    let host_rect = Rect::new(
        inner.x + button_width + 2,
        inner.bottom() - 1,
        inner.width.saturating_sub(button_width + 2),
        1,
    );
    if host_rect.width > 0 {
        frame.render_widget(
            Paragraph::new(Line::from(host)).alignment(Alignment::Right),
            host_rect,
        );
    }
}
