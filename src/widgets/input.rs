//! One-line text entry prompt.

use crate::error::PromptError;
use crate::fallback;
use crate::key::Key;
use crate::render::Frame;
use crate::settings;
use crate::term;
use crate::widgets::{render_question, run_interactive, PromptOutcome, PromptWidget};
use crossterm::style::Stylize;
use std::io;
use tracing::debug;

pub(crate) struct InputState {
    question: String,
    default_text: String,
    buffer: String,
}

impl InputState {
    pub(crate) fn new(question: &str, default_text: &str) -> Self {
        Self {
            question: question.to_string(),
            default_text: default_text.to_string(),
            buffer: String::new(),
        }
    }
}

impl PromptWidget for InputState {
    type Output = String;

    fn question(&self) -> &str {
        &self.question
    }

    fn render(&self, frame: &mut Frame) -> io::Result<()> {
        render_question(frame, &self.question)?;
        frame.text(" ")?;
        if self.buffer.is_empty() && !self.default_text.is_empty() {
            frame.styled(
                self.default_text
                    .as_str()
                    .with(settings::COLOR_DEFAULT_HINT)
                    .dim(),
            )?;
        } else {
            frame.styled(self.buffer.as_str().with(settings::COLOR_INPUT_TEXT))?;
        }
        Ok(())
    }

    fn update(&mut self, key: &Key) {
        match key {
            Key::Char(text) => self.buffer.push_str(text),
            Key::Backspace => {
                self.buffer.pop();
            }
            _ => {}
        }
    }

    fn answered(&self) -> String {
        if self.buffer.is_empty() {
            self.default_text.clone()
        } else {
            self.buffer.clone()
        }
    }

    fn submit(self) -> String {
        if self.buffer.is_empty() {
            self.default_text
        } else {
            self.buffer
        }
    }
}

/// Ask for one line of text; Enter on an empty buffer returns the default.
pub fn input(question: &str, default_text: &str) -> Result<PromptOutcome<String>, PromptError> {
    if !term::is_interactive() {
        debug!("input using line fallback");
        let stdin = io::stdin();
        let text = fallback::input(&mut stdin.lock(), &mut io::stdout(), question, default_text)?;
        return Ok(PromptOutcome::Submitted(text));
    }

    run_interactive(InputState::new(question, default_text))
}
