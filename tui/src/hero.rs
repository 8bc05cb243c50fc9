//! The hero section: badge, headline, tagline, call to action, stats, highlights.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use showcase_engine::{App, HeroPart, HitTarget};

use crate::effects::{bob_offset, is_faint, rise_offset};
use crate::layout::HeroLayout;
use crate::shared::{KEEP_INDENT, PROSE, centered_x, chip_line, clean, fade, span_width};
use crate::theme::{Glyphs, Palette, styles};

pub(crate) const BADGE: &str = "Business Portfolio Showcase";
pub(crate) const BRAND: &str = "Chandraa";
pub(crate) const BRAND_SUFFIX: &str = "Group";
pub(crate) const TAGLINE: &str = "A diverse portfolio of professional businesses serving various \
    industries with excellence. From digital solutions to printing services, we deliver quality \
    and innovation across all ventures.";
const EXPLORE: &str = "Explore Businesses";

/// Rows a hero part travels while entering.
const RISE: u16 = 2;

/// Category chips, one per distinct catalog category.
pub(crate) fn highlight_line(app: &App, palette: &Palette) -> Line<'static> {
    let labels: Vec<String> = app
        .catalog()
        .categories()
        .into_iter()
        .map(|category| clean(category.as_str()))
        .collect();
    chip_line(&labels, styles::chip(palette))
}

fn stats(app: &App) -> [(String, &'static str); 3] {
    [
        (app.catalog().len().to_string(), "Business Ventures"),
        ("1000+".to_string(), "Satisfied Clients"),
        ("10+".to_string(), "Years Experience"),
    ]
}

pub(crate) fn explore_spans(glyphs: &Glyphs, palette: &Palette) -> Vec<Span<'static>> {
    vec![Span::styled(
        format!("  {EXPLORE} {}  ", glyphs.arrow_down),
        styles::button(palette),
    )]
}

pub(crate) fn render(
    buf: &mut Buffer,
    layout: &HeroLayout,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut Vec<(Rect, HitTarget)>,
) {
    for part in HeroPart::ALL {
        let progress = app.hero_progress(part);
        if progress <= 0.0 {
            continue;
        }
        let resting = match part {
            HeroPart::Badge => layout.badge,
            HeroPart::Headline => layout.headline,
            HeroPart::Tagline => layout.tagline,
            HeroPart::Actions => layout.actions,
            HeroPart::Stats => layout.stats,
            HeroPart::Highlights => layout.highlights,
        };
        let area = Rect {
            y: resting.y + rise_offset(progress, RISE),
            ..resting
        }
        .intersection(buf.area);

        match part {
            HeroPart::Badge => {
                let line = Line::from(Span::styled(
                    format!(" {} {BADGE} ", glyphs.badge),
                    styles::chip(palette),
                ));
                Paragraph::new(line)
                    .alignment(Alignment::Center)
                    .render(area, buf);
            }
            HeroPart::Headline => {
                let brand = Style::default().add_modifier(Modifier::BOLD);
                let line = Line::from(vec![
                    Span::styled(format!("{BRAND} "), brand.fg(palette.text_primary)),
                    Span::styled(BRAND_SUFFIX, brand.fg(palette.accent_strong)),
                ]);
                Paragraph::new(line)
                    .alignment(Alignment::Center)
                    .render(area, buf);
            }
            HeroPart::Tagline => {
                Paragraph::new(TAGLINE)
                    .style(Style::default().fg(palette.text_secondary))
                    .alignment(Alignment::Center)
                    .wrap(PROSE)
                    .render(area, buf);
            }
            HeroPart::Actions => {
                let spans = explore_spans(glyphs, palette);
                let width = span_width(&spans);
                let button = Rect::new(centered_x(area, width), area.y, width, 1);
                Paragraph::new(Line::from(spans))
                    .alignment(Alignment::Center)
                    .render(area, buf);
                // Clickable once it has settled.
                if progress >= 1.0 {
                    hits.push((button.intersection(buf.area), HitTarget::ExploreButton));
                }
            }
            HeroPart::Stats => render_stats(buf, area, app, palette),
            HeroPart::Highlights => {
                Paragraph::new(highlight_line(app, palette))
                    .alignment(Alignment::Center)
                    .wrap(KEEP_INDENT)
                    .render(area, buf);
            }
        }

        if is_faint(progress) {
            fade(buf, area);
        }
    }

    let cue = layout.cue;
    let y = cue.y + bob_offset(app.scroll_cue_phase());
    let line = Line::from(Span::styled(
        glyphs.arrow_down,
        Style::default().fg(palette.accent_strong),
    ));
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(Rect::new(cue.x, y, cue.width, 1).intersection(buf.area), buf);
}

fn render_stats(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    let column = area.width / 3;
    for (i, (value, label)) in stats(app).into_iter().enumerate() {
        let x = area.x + column * i as u16;
        let cell = Rect::new(x, area.y, column, area.height.min(2));
        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(palette.accent_strong)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(palette.text_muted))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(cell, buf);
    }
}
