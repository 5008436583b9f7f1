//! Single-choice list prompt.

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

pub(crate) struct SelectState {
    question: String,
    options: Vec<String>,
    selected: usize,
}

impl SelectState {
    pub(crate) fn new(question: &str, options: &[String], default_index: usize) -> Self {
        Self {
            question: question.to_string(),
            options: options.to_vec(),
            selected: default_index.min(options.len().saturating_sub(1)),
        }
    }
}

impl PromptWidget for SelectState {
    type Output = usize;

    fn question(&self) -> &str {
        &self.question
    }

    fn render(&self, frame: &mut Frame) -> io::Result<()> {
        render_question(frame, &self.question)?;
        for (idx, option) in self.options.iter().enumerate() {
            frame.newline()?;
            frame.text(settings::INDENT_1)?;
            if idx == self.selected {
                frame.styled(
                    settings::GLYPH_OPTION_SELECTED.with(settings::COLOR_OPTION_SELECTED_GLYPH),
                )?;
                frame.text(" ")?;
                frame.styled(option.as_str().with(settings::COLOR_OPTION_SELECTED_TEXT))?;
            } else {
                frame.styled(
                    settings::GLYPH_OPTION_UNSELECTED.with(settings::COLOR_OPTION_UNSELECTED),
                )?;
                frame.text(" ")?;
                frame.styled(option.as_str().with(settings::COLOR_OPTION_UNSELECTED).dim())?;
            }
        }
        Ok(())
    }

    fn update(&mut self, key: &Key) {
        match key {
            Key::Up => self.selected = self.selected.saturating_sub(1),
            Key::Down => self.selected = (self.selected + 1).min(self.options.len() - 1),
            other => {
                if let Some(digit) = other.digit() {
                    let digit = digit as usize;
                    if (1..=self.options.len()).contains(&digit) {
                        self.selected = digit - 1;
                    }
                }
            }
        }
    }

    fn answered(&self) -> String {
        self.options[self.selected].clone()
    }

    fn submit(self) -> usize {
        self.selected
    }
}

/// Ask the user to pick one option; returns the selected index.
///
/// Interactive terminals get an arrow-key list with the current row
/// highlighted (digits `1..=len` jump directly); everything else gets a
/// numbered line prompt where blank or invalid input keeps `default_index`.
pub fn select(
    question: &str,
    options: &[String],
    default_index: usize,
) -> Result<PromptOutcome<usize>, PromptError> {
    if options.is_empty() {
        return Err(PromptError::EmptyOptions);
    }

    if !term::is_interactive() {
        debug!("select using line fallback");
        let default_index = default_index.min(options.len() - 1);
        let stdin = io::stdin();
        let picked = fallback::select(
            &mut stdin.lock(),
            &mut io::stdout(),
            question,
            options,
            default_index,
        )?;
        return Ok(PromptOutcome::Submitted(picked));
    }

    run_interactive(SelectState::new(question, options, default_index))
}
