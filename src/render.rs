//! Frame-buffered terminal output.
//!
//! A widget composes its whole repaint into a [`Frame`] (an in-memory byte
//! buffer of queued ANSI fragments) and commits it with one write, so a
//! redraw never flickers mid-frame. Frames overwrite in place: each repaint
//! first moves the cursor up over the rows the previous frame painted, then
//! clears downward before drawing.

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::style::{Print, PrintStyledContent, StyledContent};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::fmt::Display;
use std::io::{self, Write};

/// One pending repaint: queued ANSI fragments plus a painted-row count.
pub(crate) struct Frame {
    buf: Vec<u8>,
    rows: usize,
}

impl Frame {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(256),
            rows: 0,
        }
    }

    /// Move back over the previous frame and clear everything it painted.
    pub(crate) fn rewind(&mut self, previous_rows: usize) -> io::Result<()> {
        if previous_rows > 0 {
            let rows = u16::try_from(previous_rows).unwrap_or(u16::MAX);
            self.buf.queue(MoveUp(rows))?;
        }
        self.buf.queue(MoveToColumn(0))?;
        self.buf.queue(Clear(ClearType::CurrentLine))?;
        self.buf.queue(Clear(ClearType::FromCursorDown))?;
        Ok(())
    }

    pub(crate) fn hide_cursor(&mut self) -> io::Result<()> {
        self.buf.queue(Hide)?;
        Ok(())
    }

    pub(crate) fn show_cursor(&mut self) -> io::Result<()> {
        self.buf.queue(Show)?;
        Ok(())
    }

    pub(crate) fn text(&mut self, text: &str) -> io::Result<()> {
        self.buf.queue(Print(text))?;
        Ok(())
    }

    pub(crate) fn styled<D: Display>(&mut self, content: StyledContent<D>) -> io::Result<()> {
        self.buf.queue(PrintStyledContent(content))?;
        Ok(())
    }

    /// Break to the next row. Raw mode needs an explicit carriage return.
    pub(crate) fn newline(&mut self) -> io::Result<()> {
        self.buf.queue(Print("\r\n"))?;
        self.rows += 1;
        Ok(())
    }

    /// How many rows below the first one the cursor ends up on.
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    /// Write the whole frame atomically and flush.
    pub(crate) fn commit(self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(&self.buf)?;
        out.flush()
    }
}
