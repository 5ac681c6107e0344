//! Render targets for the tree view.
//!
//! The view is handed its target at construction and never looks anything
//! up on its own. Presenting a frame cannot fail; targets that talk to a
//! terminal buffer the frame and write it out in `flush`, where I/O errors
//! reach the caller.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};

use super::render::truncate_to_width;

/// One rendered screen of the tree view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    /// Number of lines above the first tree row (search line)
    pub header_lines: usize,
    /// Line index of the cursor row, if any row is visible
    pub cursor_line: Option<usize>,
}

impl Frame {
    pub fn text(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Where a tree view draws itself
pub trait RenderTarget {
    fn present(&mut self, frame: &Frame);
}

/// Keeps the most recent frame; used by tests and non-interactive output
#[derive(Debug, Default)]
pub struct MemoryTarget {
    last: Option<Frame>,
    presents: usize,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    /// Text of the last frame, or an empty string
    pub fn text(&self) -> String {
        self.last.as_ref().map(Frame::text).unwrap_or_default()
    }

    /// How many frames have been presented
    pub fn presents(&self) -> usize {
        self.presents
    }
}

impl RenderTarget for MemoryTarget {
    fn present(&mut self, frame: &Frame) {
        self.last = Some(frame.clone());
        self.presents += 1;
    }
}

/// The slice of tree rows drawn by the last flush
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Screen lines above the first tree row
    pub header_lines: usize,
    /// Visible-row index drawn on the first tree line
    pub first_row: usize,
    /// Number of tree rows on screen
    pub rows: usize,
}

impl Viewport {
    /// Visible-row index under `screen_row`, if a tree row is drawn there
    pub fn row_at(&self, screen_row: usize) -> Option<usize> {
        let offset = screen_row.checked_sub(self.header_lines)?;
        (offset < self.rows).then_some(self.first_row + offset)
    }
}

/// Draws frames on a raw-mode terminal.
///
/// Rows that do not fit between the header and the footer are scrolled so
/// the cursor row stays on screen. A height of 0 means unknown and draws
/// everything.
pub struct TerminalTarget<W: Write> {
    out: W,
    pending: Option<Frame>,
    viewport: Viewport,
    width: u16,
    height: u16,
    highlight: bool,
}

impl<W: Write> TerminalTarget<W> {
    /// `highlight` draws the cursor row in reverse video
    pub fn new(out: W, width: u16, height: u16, highlight: bool) -> Self {
        Self {
            out,
            pending: None,
            viewport: Viewport::default(),
            width,
            height,
            highlight,
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Rows drawn by the last flush; mouse rows are mapped through it
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether a frame is waiting to be drawn
    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Draw the pending frame followed by `footer`. Does nothing when no
    /// frame is pending.
    pub fn flush(&mut self, footer: &[String]) -> io::Result<()> {
        let Some(frame) = self.pending.take() else {
            return Ok(());
        };

        let header_lines = frame.header_lines.min(frame.lines.len());
        let (head, rows) = frame.lines.split_at(header_lines);
        let cursor_row = frame
            .cursor_line
            .and_then(|line| line.checked_sub(header_lines));

        let height = usize::from(self.height);
        let room = if height == 0 {
            rows.len()
        } else {
            height.saturating_sub(header_lines + footer.len()).max(1)
        };
        let first_row = self.scroll_to(cursor_row, room, rows.len());
        let shown = room.min(rows.len() - first_row);
        self.viewport = Viewport {
            header_lines,
            first_row,
            rows: shown,
        };
        let footer_room = if height == 0 {
            footer.len()
        } else {
            height.saturating_sub(header_lines + shown)
        };

        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let width = usize::from(self.width);
        let body = rows[first_row..first_row + shown]
            .iter()
            .enumerate()
            .map(|(i, line)| (line, cursor_row == Some(first_row + i)));
        let lines = head
            .iter()
            .map(|line| (line, false))
            .chain(body)
            .chain(footer.iter().take(footer_room).map(|line| (line, false)));

        // No newline after the last line, or the bottom row scrolls the screen
        for (i, (line, is_cursor)) in lines.enumerate() {
            if i > 0 {
                queue!(self.out, Print("\r\n"))?;
            }
            let line = truncate_to_width(line, width);
            if self.highlight && is_cursor {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Reverse),
                    Print(line),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(self.out, Print(line))?;
            }
        }

        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// First row to draw so that `cursor_row` is inside a window of `room`
    /// rows, moving the previous window as little as possible
    fn scroll_to(&self, cursor_row: Option<usize>, room: usize, total: usize) -> usize {
        let mut first = self.viewport.first_row;
        if let Some(cursor) = cursor_row {
            if cursor < first {
                first = cursor;
            } else if cursor >= first + room {
                first = cursor + 1 - room;
            }
        }
        first.min(total.saturating_sub(room))
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn present(&mut self, frame: &Frame) {
        self.pending = Some(frame.clone());
    }
}
