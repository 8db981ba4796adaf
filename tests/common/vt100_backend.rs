//! Virtual terminal backend for board rendering tests.
//!
//! Feeds ratatui's output through a `vt100::Parser`, so assertions see the
//! screen a real terminal would show (wide CJK glyphs included).

use std::io;

use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Modifier, Style};

pub struct VT100Backend {
    parser: vt100::Parser,
    size: Size,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            size: Size::new(width, height),
        }
    }

    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// One screen row, trailing blanks trimmed.
    pub fn row(&self, y: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.size.width)
            .nth(usize::from(y))
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// Index of the first row containing `needle`.
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.size.height).find(|&y| self.row(y).contains(needle))
    }

    /// Whether the cell at `(x, y)` is drawn bold.
    pub fn is_bold(&self, x: u16, y: u16) -> bool {
        self.parser
            .screen()
            .cell(y, x)
            .is_some_and(|cell| cell.bold())
    }

    fn process(&mut self, bytes: &str) {
        self.parser.process(bytes.as_bytes());
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        use crossterm::{Command, cursor, style};
        use std::fmt::Write as _;

        let mut out = String::new();
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut current: Option<Style> = None;

        for (x, y, cell) in content {
            if cursor_at != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut out);
            }

            let cell_style = cell.style();
            if current != Some(cell_style) {
                let _ = style::SetAttribute(style::Attribute::Reset).write_ansi(&mut out);
                if cell_style.add_modifier.contains(Modifier::BOLD) {
                    let _ = style::SetAttribute(style::Attribute::Bold).write_ansi(&mut out);
                }
                if let Some(fg) = cell_style.fg.and_then(to_crossterm) {
                    let _ = style::SetForegroundColor(fg).write_ansi(&mut out);
                }
                if let Some(bg) = cell_style.bg.and_then(to_crossterm) {
                    let _ = style::SetBackgroundColor(bg).write_ansi(&mut out);
                }
                current = Some(cell_style);
            }

            let _ = write!(out, "{}", cell.symbol());
            cursor_at = Some((x + 1, y));
        }

        self.process(&out);
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, col) = self.parser.screen().cursor_position();
        Ok(Position::new(col, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        use crossterm::{Command, cursor};
        let position = position.into();
        let mut out = String::new();
        let _ = cursor::MoveTo(position.x, position.y).write_ansi(&mut out);
        self.process(&out);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        use crossterm::{Command, terminal};
        let mut out = String::new();
        let _ = terminal::Clear(terminal::ClearType::All).write_ansi(&mut out);
        self.process(&out);
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: self.size,
            pixels: Size::new(self.size.width * 8, self.size.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn to_crossterm(color: Color) -> Option<crossterm::style::Color> {
    use crossterm::style::Color as Term;

    Some(match color {
        Color::Reset => return None,
        Color::Black => Term::Black,
        Color::Red => Term::DarkRed,
        Color::Green => Term::DarkGreen,
        Color::Yellow => Term::DarkYellow,
        Color::Blue => Term::DarkBlue,
        Color::Magenta => Term::DarkMagenta,
        Color::Cyan => Term::DarkCyan,
        Color::Gray => Term::Grey,
        Color::DarkGray => Term::DarkGrey,
        Color::LightRed => Term::Red,
        Color::LightGreen => Term::Green,
        Color::LightYellow => Term::Yellow,
        Color::LightBlue => Term::Blue,
        Color::LightMagenta => Term::Magenta,
        Color::LightCyan => Term::Cyan,
        Color::White => Term::White,
        Color::Rgb(r, g, b) => Term::Rgb { r, g, b },
        Color::Indexed(i) => Term::AnsiValue(i),
    })
}
