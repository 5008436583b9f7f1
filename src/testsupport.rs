//! Shared test helpers for the widget state machines.
//!
//! The interactive loop itself needs a TTY, so widget tests drive the
//! `PromptWidget` transition tables directly with key sequences (an implicit
//! trailing Enter is the `submit` call).

use crate::key::Key;
use crate::render::Frame;
use crate::widgets::PromptWidget;

/// Apply a key sequence to a fresh widget and press Enter.
pub(crate) fn drive<W: PromptWidget>(mut widget: W, keys: &[Key]) -> W::Output {
    for key in keys {
        widget.update(key);
    }
    widget.submit()
}

/// Turn a string into the per-character key events interactive typing yields.
pub(crate) fn chars(text: &str) -> Vec<Key> {
    text.chars().map(|c| Key::Char(c.to_string())).collect()
}

/// Render one frame to a lossy string for content assertions.
pub(crate) fn rendered<W: PromptWidget>(widget: &W) -> String {
    let mut frame = Frame::new();
    widget.render(&mut frame).expect("in-memory render failed");
    let mut sink = Vec::new();
    frame.commit(&mut sink).expect("in-memory commit failed");
    String::from_utf8_lossy(&sink).into_owned()
}
