//! Interactive prompt widgets and the shared read/update/render loop.
//!
//! Each widget owns a tiny state struct and supplies its transition table
//! through [`PromptWidget`]; the loop here owns everything else — raw-mode
//! acquisition, frame pacing, Enter/interrupt handling, and the collapsed
//! "answered" line left behind on submit.

mod confirm;
mod input;
mod rating;
mod select;

pub use confirm::confirm;
pub use input::input;
pub use rating::rating;
pub use select::select;

use crate::error::PromptError;
use crate::key::{self, Key};
use crate::render::Frame;
use crate::settings;
use crate::term::RawModeGuard;
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// How one prompt call resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    /// The user confirmed a value with Enter.
    Submitted(T),
    /// The user pressed Ctrl-C; terminal state was restored before returning.
    Cancelled,
}

impl<T> PromptOutcome<T> {
    /// The submitted value, or `None` when the prompt was cancelled.
    pub fn submitted(self) -> Option<T> {
        match self {
            Self::Submitted(value) => Some(value),
            Self::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

static EXIT_ON_INTERRUPT: AtomicBool = AtomicBool::new(false);

/// Opt into the classic CLI behavior where Ctrl-C inside a prompt ends the
/// whole process with exit status 130 instead of returning
/// [`PromptOutcome::Cancelled`]. Terminal state is restored either way.
pub fn set_exit_on_interrupt(enabled: bool) {
    EXIT_ON_INTERRUPT.store(enabled, Ordering::Relaxed);
}

/// One widget's contribution to the shared loop: a repaint, a transition
/// table, and a finalizer.
pub(crate) trait PromptWidget {
    type Output;

    /// The question shown on the first row and on the answered line.
    fn question(&self) -> &str;

    /// Queue this widget's full frame. The loop has already rewound and
    /// cleared the previous frame.
    fn render(&self, frame: &mut Frame) -> io::Result<()>;

    /// Apply one key to the widget state. Irrelevant keys must be no-ops.
    fn update(&mut self, key: &Key);

    /// Short text shown on the collapsed line after submission.
    fn answered(&self) -> String;

    fn submit(self) -> Self::Output;
}

/// Queue the standard `• question` header row.
pub(crate) fn render_question(frame: &mut Frame, question: &str) -> io::Result<()> {
    frame.styled(
        settings::GLYPH_QUESTION_BULLET.with(settings::COLOR_QUESTION_BULLET),
    )?;
    frame.text(" ")?;
    frame.styled(question.with(settings::COLOR_QUESTION_TEXT).bold())?;
    Ok(())
}

/// Run one widget's interactive loop until Enter or Ctrl-C.
///
/// Redraws happen strictly after the state mutation caused by a key and
/// before the next blocking read, so the terminal always shows the committed
/// state while the loop waits.
pub(crate) fn run_interactive<W: PromptWidget>(
    mut widget: W,
) -> Result<PromptOutcome<W::Output>, PromptError> {
    let guard = RawModeGuard::acquire()?;
    let mut stdout = io::stdout();
    let mut stdin = io::stdin();
    let mut previous_rows = 0usize;

    loop {
        let mut frame = Frame::new();
        frame.rewind(previous_rows)?;
        widget.render(&mut frame)?;
        previous_rows = frame.rows();
        frame.commit(&mut stdout)?;

        match key::read_key(&mut stdin)? {
            Key::Enter => {
                finalize(&mut stdout, &widget, previous_rows)?;
                drop(guard);
                return Ok(PromptOutcome::Submitted(widget.submit()));
            }
            Key::Interrupt => {
                clear_surface(&mut stdout, previous_rows)?;
                drop(guard);
                if EXIT_ON_INTERRUPT.load(Ordering::Relaxed) {
                    debug!("interrupt inside prompt, hard exit requested");
                    std::process::exit(settings::INTERRUPT_EXIT_CODE);
                }
                return Ok(PromptOutcome::Cancelled);
            }
            other => widget.update(&other),
        }
    }
}

/// Collapse the widget surface to one answered line plus a newline.
fn finalize<W: PromptWidget>(
    stdout: &mut impl Write,
    widget: &W,
    previous_rows: usize,
) -> io::Result<()> {
    let mut frame = Frame::new();
    frame.rewind(previous_rows)?;
    render_question(&mut frame, widget.question())?;
    frame.text(" ")?;
    frame.styled(widget.answered().with(settings::COLOR_ANSWER))?;
    frame.newline()?;
    frame.commit(stdout)
}

/// Erase the widget surface entirely (cancellation path).
fn clear_surface(stdout: &mut impl Write, previous_rows: usize) -> io::Result<()> {
    let mut frame = Frame::new();
    frame.rewind(previous_rows)?;
    frame.commit(stdout)
}
