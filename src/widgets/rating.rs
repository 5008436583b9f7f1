//! Bounded integer scale prompt (subjective check-in ratings).

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

pub(crate) struct RatingState {
    question: String,
    min: i64,
    max: i64,
    value: i64,
}

impl RatingState {
    pub(crate) fn new(question: &str, min: i64, max: i64, default_value: i64) -> Self {
        Self {
            question: question.to_string(),
            min,
            max,
            value: default_value.clamp(min, max),
        }
    }
}

impl PromptWidget for RatingState {
    type Output = i64;

    fn question(&self) -> &str {
        &self.question
    }

    fn render(&self, frame: &mut Frame) -> io::Result<()> {
        render_question(frame, &self.question)?;
        frame.text(settings::INDENT_1)?;
        for value in self.min..=self.max {
            if value > self.min {
                frame.text(" ")?;
            }
            let label = value.to_string();
            if value == self.value {
                frame.styled(
                    label
                        .as_str()
                        .with(settings::COLOR_OPTION_SELECTED_TEXT)
                        .bold(),
                )?;
            } else {
                frame.styled(label.as_str().with(settings::COLOR_OPTION_UNSELECTED).dim())?;
            }
        }
        Ok(())
    }

    fn update(&mut self, key: &Key) {
        match key {
            Key::Left | Key::Down => self.value = self.value.saturating_sub(1).max(self.min),
            Key::Right | Key::Up => self.value = self.value.saturating_add(1).min(self.max),
            other => {
                if let Some(digit) = other.digit() {
                    if (self.min..=self.max).contains(&digit) {
                        self.value = digit;
                    }
                }
            }
        }
    }

    fn answered(&self) -> String {
        self.value.to_string()
    }

    fn submit(self) -> i64 {
        self.value
    }
}

/// Ask for a value on an inclusive integer scale.
///
/// Arrows step the value (clamped to the range) and a digit key inside the
/// range jumps straight to it. Errors with [`PromptError::InvalidRange`] when
/// `min > max`.
pub fn rating(
    question: &str,
    min: i64,
    max: i64,
    default_value: i64,
) -> Result<PromptOutcome<i64>, PromptError> {
    if min > max {
        return Err(PromptError::InvalidRange { min, max });
    }

    if !term::is_interactive() {
        debug!("rating using line fallback");
        let default_value = default_value.clamp(min, max);
        let stdin = io::stdin();
        let value = fallback::rating(
            &mut stdin.lock(),
            &mut io::stdout(),
            question,
            min,
            max,
            default_value,
        )?;
        return Ok(PromptOutcome::Submitted(value));
    }

    run_interactive(RatingState::new(question, min, max, default_value))
}
