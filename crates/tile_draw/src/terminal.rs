//! Crossterm backed display surface.

use std::io::{self, Stdout, Write};

use codepages::tables::CP437_TO_UNICODE;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, BeginSynchronizedUpdate, ClearType, DisableLineWrap, EnableLineWrap, EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen},
};
use tile_engine::{ScreenBuffer, TextAttribute, TextPane};
use tile_engine_edit::{DisplaySurface, EditorMode, Frame, Layout, Notification};

/// The 16 color DOS palette in attribute order.
const DOS_PALETTE: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // 0: Black
    [0x00, 0x00, 0xAA], // 1: Blue
    [0x00, 0xAA, 0x00], // 2: Green
    [0x00, 0xAA, 0xAA], // 3: Cyan
    [0xAA, 0x00, 0x00], // 4: Red
    [0xAA, 0x00, 0xAA], // 5: Magenta
    [0xAA, 0x55, 0x00], // 6: Brown/Yellow
    [0xAA, 0xAA, 0xAA], // 7: Light Gray
    [0x55, 0x55, 0x55], // 8: Dark Gray
    [0x55, 0x55, 0xFF], // 9: Light Blue
    [0x55, 0xFF, 0x55], // 10: Light Green
    [0x55, 0xFF, 0xFF], // 11: Light Cyan
    [0xFF, 0x55, 0x55], // 12: Light Red
    [0xFF, 0x55, 0xFF], // 13: Light Magenta
    [0xFF, 0xFF, 0x55], // 14: Yellow
    [0xFF, 0xFF, 0xFF], // 15: White
];

fn palette_color(index: u8) -> Color {
    let [r, g, b] = DOS_PALETTE[(index & 0b1111) as usize];
    Color::Rgb { r, g, b }
}

pub(crate) fn attribute_colors(attribute: TextAttribute) -> (Color, Color) {
    (palette_color(attribute.foreground()), palette_color(attribute.background()))
}

pub(crate) fn glyph_char(glyph: u8) -> char {
    match CP437_TO_UNICODE.get(glyph as usize).copied() {
        Some(ch) if !ch.is_control() => ch,
        _ => ' ',
    }
}

/// Row of the status line below a screen of `screen_height` rows.
///
/// `None` when the terminal has no row left below the screen.
pub(crate) fn status_row(screen_height: i32, terminal_rows: u16) -> Option<u16> {
    u16::try_from(screen_height).ok().filter(|row| *row < terminal_rows)
}

/// Terminal title for a frame. Without a status line the notification goes into the title.
pub(crate) fn frame_title(mode: EditorMode, notification: Option<&Notification>, has_status_line: bool) -> String {
    match notification {
        Some(notification) if !has_status_line => format!("{} - {}", mode.title(), notification.text()),
        _ => mode.title().to_string(),
    }
}

/// Owns the terminal while the editor runs.
///
/// Raw mode, alternate screen, mouse capture and the hidden cursor are set up in
/// [`TerminalDisplay::new`] and undone on drop.
pub struct TerminalDisplay<W: Write = Stdout> {
    out: W,
    title: String,
}

impl TerminalDisplay<Stdout> {
    pub fn new() -> io::Result<Self> {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn with_writer(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // from here on drop restores the terminal, also when the setup below fails
        let mut display = Self { out, title: String::new() };
        execute!(
            display.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            DisableLineWrap,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let (_, rows) = terminal::size()?;
        if status_row(Layout::default().screen_size().height, rows).is_none() {
            log::warn!("Terminal has {rows} rows, messages are shown in the title instead of a status line");
        }
        Ok(display)
    }

    fn queue_screen(&mut self, screen: &ScreenBuffer) -> io::Result<()> {
        let mut colors = None;
        for (y, row) in screen.rows().enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for cell in row {
                let cell_colors = attribute_colors(cell.attribute);
                if colors != Some(cell_colors) {
                    queue!(self.out, SetForegroundColor(cell_colors.0), SetBackgroundColor(cell_colors.1))?;
                    colors = Some(cell_colors);
                }
                queue!(self.out, Print(glyph_char(cell.glyph)))?;
            }
        }
        Ok(())
    }

    fn queue_status_line(&mut self, row: u16, notification: Option<&Notification>) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, row), ResetColor, terminal::Clear(ClearType::CurrentLine))?;
        if let Some(notification) = notification {
            if notification.is_error() {
                queue!(self.out, SetForegroundColor(palette_color(12)))?;
            }
            queue!(self.out, Print(notification.text()), ResetColor)?;
        }
        Ok(())
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let (_, rows) = terminal::size()?;
        let status_row = status_row(frame.screen.height(), rows);

        queue!(self.out, BeginSynchronizedUpdate)?;
        let title = frame_title(frame.mode, frame.notification, status_row.is_some());
        if self.title != title {
            queue!(self.out, terminal::SetTitle(&title))?;
            self.title = title;
        }
        self.queue_screen(frame.screen)?;
        if let Some(row) = status_row {
            self.queue_status_line(row, frame.notification)?;
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalDisplay<W> {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            ResetColor,
            DisableMouseCapture,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
