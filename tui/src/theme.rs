//! Color themes and glyphs for the showcase.
//!
//! Gold is the warm yellow-on-cream look of the landing page; navy is the
//! darker professional variant. Either can be overridden by the high-contrast
//! palette.

use ratatui::style::{Color, Modifier, Style};

use showcase_types::ui::{ThemeName, UiOptions};

/// Tailwind-derived color constants.
mod colors {
    use super::Color;

    // === Gold (yellow-on-cream) ===
    pub const CREAM: Color = Color::Rgb(254, 252, 232); // yellow-50
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const YELLOW_100: Color = Color::Rgb(254, 249, 195);
    pub const YELLOW_200: Color = Color::Rgb(254, 240, 138);
    pub const YELLOW_500: Color = Color::Rgb(234, 179, 8);
    pub const YELLOW_600: Color = Color::Rgb(202, 138, 4);
    pub const YELLOW_700: Color = Color::Rgb(161, 98, 7);
    pub const GRAY_100: Color = Color::Rgb(243, 244, 246);
    pub const GRAY_400: Color = Color::Rgb(156, 163, 175);
    pub const GRAY_600: Color = Color::Rgb(75, 85, 99);
    pub const GRAY_800: Color = Color::Rgb(31, 41, 55);
    pub const GREEN_100: Color = Color::Rgb(220, 252, 231);
    pub const GREEN_700: Color = Color::Rgb(21, 128, 61);
    pub const RED_400: Color = Color::Rgb(248, 113, 113);
    pub const GREEN_400: Color = Color::Rgb(74, 222, 128);

    // === Navy (professional) ===
    pub const NAVY: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const NAVY_PANEL: Color = Color::Rgb(30, 41, 59); // slate-800
    pub const NAVY_RAISED: Color = Color::Rgb(51, 65, 85); // slate-700
    pub const NAVY_BORDER: Color = Color::Rgb(71, 85, 105); // slate-600
    pub const SLATE_100: Color = Color::Rgb(241, 245, 249);
    pub const SLATE_400: Color = Color::Rgb(148, 163, 184);
    pub const SLATE_500: Color = Color::Rgb(100, 116, 139);
    pub const BLUE_500: Color = Color::Rgb(59, 130, 246);
    pub const BLUE_400: Color = Color::Rgb(96, 165, 250);
    pub const BLUE_900: Color = Color::Rgb(30, 58, 138);
    pub const GREEN_500: Color = Color::Rgb(34, 197, 94);
    pub const AMBER_400: Color = Color::Rgb(251, 191, 36);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Page background.
    pub bg: Color,
    /// Cards and the solid nav bar.
    pub bg_panel: Color,
    /// Mock browser strip at the top of each card.
    pub bg_preview: Color,
    /// Detail overlay panel.
    pub bg_overlay: Color,
    pub border: Color,
    pub border_focus: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_strong: Color,
    /// Text drawn on an accent background.
    pub on_accent: Color,
    pub chip_bg: Color,
    pub chip_text: Color,
    pub live_bg: Color,
    pub live: Color,
    pub development: Color,
    pub warning: Color,
    pub dot_red: Color,
    pub dot_yellow: Color,
    pub dot_green: Color,
}

impl Palette {
    #[must_use]
    pub fn gold() -> Self {
        Self {
            bg: colors::CREAM,
            bg_panel: colors::WHITE,
            bg_preview: colors::GRAY_100,
            bg_overlay: colors::WHITE,
            border: colors::YELLOW_200,
            border_focus: colors::YELLOW_500,
            text_primary: colors::GRAY_800,
            text_secondary: colors::GRAY_600,
            text_muted: colors::GRAY_400,
            accent: colors::YELLOW_500,
            accent_strong: colors::YELLOW_600,
            on_accent: colors::WHITE,
            chip_bg: colors::YELLOW_100,
            chip_text: colors::YELLOW_700,
            live_bg: colors::GREEN_100,
            live: colors::GREEN_700,
            development: colors::YELLOW_700,
            warning: colors::YELLOW_700,
            dot_red: colors::RED_400,
            dot_yellow: colors::YELLOW_500,
            dot_green: colors::GREEN_400,
        }
    }

    #[must_use]
    pub fn navy() -> Self {
        Self {
            bg: colors::NAVY,
            bg_panel: colors::NAVY_PANEL,
            bg_preview: colors::NAVY_RAISED,
            bg_overlay: colors::NAVY_PANEL,
            border: colors::NAVY_BORDER,
            border_focus: colors::BLUE_400,
            text_primary: colors::SLATE_100,
            text_secondary: colors::SLATE_400,
            text_muted: colors::SLATE_500,
            accent: colors::BLUE_500,
            accent_strong: colors::BLUE_400,
            on_accent: colors::SLATE_100,
            chip_bg: colors::BLUE_900,
            chip_text: colors::BLUE_400,
            live_bg: colors::NAVY_RAISED,
            live: colors::GREEN_500,
            development: colors::AMBER_400,
            warning: colors::AMBER_400,
            dot_red: colors::RED_400,
            dot_yellow: colors::AMBER_400,
            dot_green: colors::GREEN_500,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            bg_preview: Color::Black,
            bg_overlay: Color::Black,
            border: Color::Gray,
            border_focus: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            accent: Color::Yellow,
            accent_strong: Color::Yellow,
            on_accent: Color::Black,
            chip_bg: Color::Black,
            chip_text: Color::Yellow,
            live_bg: Color::Black,
            live: Color::Green,
            development: Color::Yellow,
            warning: Color::Yellow,
            dot_red: Color::Red,
            dot_yellow: Color::Yellow,
            dot_green: Color::Green,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette::high_contrast();
    }
    match options.theme {
        ThemeName::Gold => Palette::gold(),
        ThemeName::Navy => Palette::navy(),
    }
}

/// ASCII/Unicode glyphs for icons and decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub badge: &'static str,
    pub browser_dot: &'static str,
    pub status_dot: &'static str,
    pub check: &'static str,
    pub bullet: &'static str,
    pub arrow_down: &'static str,
    pub external: &'static str,
    pub details: &'static str,
    pub close: &'static str,
    pub rule: &'static str,
    pub menu: &'static str,
    pub selected: &'static str,
    pub arrows: &'static str,
    pub up_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            badge: "@",
            browser_dot: "o",
            status_dot: "*",
            check: "+",
            bullet: "*",
            arrow_down: "v",
            external: "->",
            details: ">",
            close: "x",
            rule: "-",
            menu: "=",
            selected: ">",
            arrows: "arrows",
            up_down: "up/down",
            track: "|",
            thumb: "#",
        }
    } else {
        Glyphs {
            badge: "◉",
            browser_dot: "●",
            status_dot: "●",
            check: "✓",
            bullet: "•",
            arrow_down: "↓",
            external: "↗",
            details: "◎",
            close: "✕",
            rule: "─",
            menu: "☰",
            selected: "▸",
            arrows: "←↑↓→",
            up_down: "↑↓",
            track: "│",
            thumb: "█",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.on_accent)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn secondary_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .bg(palette.bg_preview)
    }

    #[must_use]
    pub fn chip(palette: &Palette) -> Style {
        Style::default().fg(palette.chip_text).bg(palette.chip_bg)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent_strong)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use showcase_types::ui::{ThemeName, UiOptions};

    use super::{Palette, glyphs, palette};

    #[test]
    fn theme_selects_palette() {
        let navy = UiOptions {
            theme: ThemeName::Navy,
            ..UiOptions::default()
        };
        assert_eq!(palette(navy).bg, Palette::navy().bg);
        assert_eq!(palette(UiOptions::default()).bg, Palette::gold().bg);
    }

    #[test]
    fn high_contrast_overrides_theme() {
        let options = UiOptions {
            theme: ThemeName::Navy,
            high_contrast: true,
            ..UiOptions::default()
        };
        assert_eq!(palette(options).bg, Color::Black);
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.badge,
            g.browser_dot,
            g.status_dot,
            g.check,
            g.bullet,
            g.arrow_down,
            g.external,
            g.details,
            g.close,
            g.rule,
            g.menu,
            g.selected,
            g.arrows,
            g.up_down,
            g.track,
            g.thumb,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} is not ascii");
        }
    }
}
