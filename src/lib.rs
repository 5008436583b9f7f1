//! Promptline — interactive terminal prompts with a non-TTY fallback.
//!
//! This crate decodes unbuffered keyboard input into [`Key`] events
//! (including multi-byte escape sequences) and drives four small widgets —
//! single-choice list, text line, bounded rating scale, and yes/no confirm —
//! that redraw in place with cursor-relative ANSI codes. When standard input
//! is not an interactive terminal (a pipe, CI), every prompt degrades to a
//! plain line-based question with the same defaults.
//!
//! Raw terminal mode is scoped: it is engaged only while one prompt loop is
//! running and is restored on every exit path, including cancellation.
//!
//! # Quick start
//!
//! ```no_run
//! use promptline::{confirm, rating, select, PromptOutcome};
//!
//! # fn example() -> Result<(), promptline::PromptError> {
//! let conditions = vec!["caffeine".to_string(), "none".to_string()];
//! match select("Condition for this block?", &conditions, 0)? {
//!     PromptOutcome::Submitted(idx) => println!("picked {}", conditions[idx]),
//!     PromptOutcome::Cancelled => println!("aborted"),
//! }
//! let focus = rating("Focus level?", 1, 5, 3)?;
//! let done = confirm("Close the block?", true)?;
//! # let _ = (focus, done);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod fallback;
pub mod key;
mod render;
mod settings;
mod term;
#[cfg(test)]
pub(crate) mod testsupport;
mod widgets;

pub use error::PromptError;
pub use key::{decode_chunk, Key};
pub use widgets::{confirm, input, rating, select, set_exit_on_interrupt, PromptOutcome};
