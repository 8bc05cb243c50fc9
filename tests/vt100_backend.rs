//! Virtual terminal backend for render tests.
//!
//! Feeds ratatui's output through a `vt100::Parser` so tests can read the
//! screen back as text and find where things were drawn.

use std::fmt;
use std::io::{self, Write};

use crossterm::Command;
use crossterm::style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Modifier, Style};

pub struct VT100Backend {
    parser: vt100::Parser,
    width: u16,
    height: u16,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            width,
            height,
        }
    }

    /// The whole screen as text, rows separated by newlines.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// One screen row as text.
    pub fn row_text(&self, row: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.width)
            .nth(usize::from(row))
            .unwrap_or_default()
    }

    /// Top-left cell of the first occurrence of `needle`, as `(column, row)`.
    ///
    /// Columns are counted in characters, so this is exact only for rows of
    /// single-width text before the match.
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        (0..self.height).find_map(|row| {
            let text = self.row_text(row);
            let byte = text.find(needle)?;
            let column = text[..byte].chars().count();
            Some((column as u16, row))
        })
    }

    pub fn is_bold(&self, column: u16, row: u16) -> bool {
        self.parser
            .screen()
            .cell(row, column)
            .is_some_and(vt100::Cell::bold)
    }
}

impl Write for VT100Backend {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.parser.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for VT100Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.contents())
    }
}

fn write_style(buf: &mut String, style: Style) {
    let _ = SetAttribute(Attribute::Reset).write_ansi(buf);
    if let Some(fg) = to_crossterm_color(style.fg) {
        let _ = SetForegroundColor(fg).write_ansi(buf);
    }
    if let Some(bg) = to_crossterm_color(style.bg) {
        let _ = SetBackgroundColor(bg).write_ansi(buf);
    }
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
    ] {
        if style.add_modifier.contains(modifier) {
            let _ = SetAttribute(attribute).write_ansi(buf);
        }
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut buf = String::new();
        let mut last_pos: Option<(u16, u16)> = None;
        let mut last_style: Option<Style> = None;

        for (x, y, cell) in content {
            if last_pos != Some((x, y)) {
                let _ = crossterm::cursor::MoveTo(x, y).write_ansi(&mut buf);
            }

            let cell_style = cell.style();
            if last_style != Some(cell_style) {
                write_style(&mut buf, cell_style);
                last_style = Some(cell_style);
            }

            buf.push_str(cell.symbol());
            last_pos = Some((x + 1, y));
        }

        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, column) = self.parser.screen().cursor_position();
        Ok(Position::new(column, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let pos = position.into();
        let mut buf = String::new();
        let _ = crossterm::cursor::MoveTo(pos.x, pos.y).write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut buf = String::new();
        let _ =
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All).write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(Size::new(self.width, self.height))
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: Size::new(self.width, self.height),
            pixels: Size::new(self.width * 8, self.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn to_crossterm_color(color: Option<Color>) -> Option<crossterm::style::Color> {
    use crossterm::style::Color as CColor;

    match color? {
        Color::Reset => None,
        Color::Black => Some(CColor::Black),
        Color::Red => Some(CColor::DarkRed),
        Color::Green => Some(CColor::DarkGreen),
        Color::Yellow => Some(CColor::DarkYellow),
        Color::Blue => Some(CColor::DarkBlue),
        Color::Magenta => Some(CColor::DarkMagenta),
        Color::Cyan => Some(CColor::DarkCyan),
        Color::Gray => Some(CColor::Grey),
        Color::DarkGray => Some(CColor::DarkGrey),
        Color::LightRed => Some(CColor::Red),
        Color::LightGreen => Some(CColor::Green),
        Color::LightYellow => Some(CColor::Yellow),
        Color::LightBlue => Some(CColor::Blue),
        Color::LightMagenta => Some(CColor::Magenta),
        Color::LightCyan => Some(CColor::Cyan),
        Color::White => Some(CColor::White),
        Color::Rgb(r, g, b) => Some(CColor::Rgb { r, g, b }),
        Color::Indexed(i) => Some(CColor::AnsiValue(i)),
    }
}
