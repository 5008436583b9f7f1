//! Yes/no confirmation prompt.

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

pub(crate) struct ConfirmState {
    question: String,
    value: bool,
}

impl ConfirmState {
    pub(crate) fn new(question: &str, default_value: bool) -> Self {
        Self {
            question: question.to_string(),
            value: default_value,
        }
    }
}

impl PromptWidget for ConfirmState {
    type Output = bool;

    fn question(&self) -> &str {
        &self.question
    }

    fn render(&self, frame: &mut Frame) -> io::Result<()> {
        render_question(frame, &self.question)?;
        frame.text(settings::INDENT_1)?;
        let (yes, no) = (settings::LABEL_CONFIRM_YES, settings::LABEL_CONFIRM_NO);
        if self.value {
            frame.styled(yes.with(settings::COLOR_OPTION_SELECTED_TEXT).bold())?;
            frame.text(settings::CONFIRM_SEPARATOR)?;
            frame.styled(no.with(settings::COLOR_OPTION_UNSELECTED).dim())?;
        } else {
            frame.styled(yes.with(settings::COLOR_OPTION_UNSELECTED).dim())?;
            frame.text(settings::CONFIRM_SEPARATOR)?;
            frame.styled(no.with(settings::COLOR_OPTION_SELECTED_TEXT).bold())?;
        }
        Ok(())
    }

    fn update(&mut self, key: &Key) {
        match key {
            Key::Up | Key::Down | Key::Left | Key::Right => self.value = !self.value,
            Key::Char(text) => match text.as_str() {
                "y" | "Y" => self.value = true,
                "n" | "N" => self.value = false,
                _ => {}
            },
            _ => {}
        }
    }

    fn answered(&self) -> String {
        if self.value {
            settings::LABEL_CONFIRM_YES.to_string()
        } else {
            settings::LABEL_CONFIRM_NO.to_string()
        }
    }

    fn submit(self) -> bool {
        self.value
    }
}

/// Ask a yes/no question; any arrow key toggles, `y`/`n` force a side.
pub fn confirm(question: &str, default_value: bool) -> Result<PromptOutcome<bool>, PromptError> {
    if !term::is_interactive() {
        debug!("confirm using line fallback");
        let stdin = io::stdin();
        let value = fallback::confirm(
            &mut stdin.lock(),
            &mut io::stdout(),
            question,
            default_value,
        )?;
        return Ok(PromptOutcome::Submitted(value));
    }

    run_interactive(ConfirmState::new(question, default_value))
}
