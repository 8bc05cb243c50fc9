//! Small text helpers shared by the page and overlay renderers.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use showcase_engine::Region;
use showcase_types::sanitize_display_text;

/// Catalog text made safe to write into the terminal.
pub(crate) fn clean(text: &str) -> String {
    sanitize_display_text(text).into_owned()
}

pub(crate) fn display_width(text: &str) -> u16 {
    text.width().min(usize::from(u16::MAX)) as u16
}

pub(crate) fn span_width(spans: &[Span]) -> u16 {
    spans
        .iter()
        .map(|span| display_width(&span.content))
        .fold(0, u16::saturating_add)
}

/// Cut `text` to at most `max` columns, ending in `...` when shortened.
pub(crate) fn truncate_with_ellipsis(text: &str, max: u16) -> String {
    let max = usize::from(max);
    let trimmed = text.trim();
    if trimmed.width() <= max {
        return trimmed.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let budget = max - 3;
    let mut used = 0;
    let mut out = String::new();
    for ch in trimmed.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Rows the lines occupy when word-wrapped to `width`.
/// Wrapping for prose: continuation rows start at the margin.
pub(crate) const PROSE: Wrap = Wrap { trim: true };
/// Wrapping for indented list rows and padded chips, which keep their leading blanks.
pub(crate) const KEEP_INDENT: Wrap = Wrap { trim: false };

pub(crate) fn wrapped_rows(lines: &[Line], width: u16, wrap: Wrap) -> u16 {
    if lines.is_empty() {
        return 0;
    }
    Paragraph::new(lines.to_vec())
        .wrap(wrap)
        .line_count(width.max(1))
        .min(usize::from(u16::MAX)) as u16
}

/// Padded chip spans separated by single blanks.
pub(crate) fn chip_line(labels: &[String], style: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {label} "), style));
    }
    Line::from(spans)
}

pub(crate) fn fade(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
}

/// Column where content of `width` starts when centered in `area`.
pub(crate) fn centered_x(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

/// Map a document rectangle onto the screen, clipped to the visible rows.
pub(crate) fn doc_to_screen(rect: Rect, offset: u16, page: Rect) -> Option<Region> {
    let top = rect.y.max(offset);
    let bottom = rect.bottom().min(offset.saturating_add(page.height));
    if bottom <= top || rect.x >= page.width {
        return None;
    }
    let width = rect.width.min(page.width - rect.x);
    Some(Region::new(
        page.x + rect.x,
        page.y + (top - offset),
        width,
        bottom - top,
    ))
}

pub(crate) fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}
