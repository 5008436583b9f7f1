//! Centralized, hardcoded UI settings for the prompt widgets.
//!
//! Single place to tweak glyphs, colors, indentation, and input buffer
//! sizing.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / glyphs
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

pub const GLYPH_QUESTION_BULLET: &str = "•";
pub const GLYPH_OPTION_SELECTED: &str = "▶";
pub const GLYPH_OPTION_UNSELECTED: &str = "·";

pub const LABEL_CONFIRM_YES: &str = "Yes";
pub const LABEL_CONFIRM_NO: &str = "No";
pub const CONFIRM_SEPARATOR: &str = " / ";

pub const HINT_CONFIRM_DEFAULT_YES: &str = "[Y/n]";
pub const HINT_CONFIRM_DEFAULT_NO: &str = "[y/N]";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Upper bound on one raw read; large enough for any single CSI sequence or
/// UTF-8 character.
pub const READ_CHUNK_LEN: usize = 16;

/// Conventional exit status for a SIGINT-style interrupt.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_QUESTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_QUESTION_TEXT: Color = Color::Cyan;

pub const COLOR_OPTION_SELECTED_GLYPH: Color = Color::DarkYellow;
pub const COLOR_OPTION_SELECTED_TEXT: Color = Color::Yellow;
pub const COLOR_OPTION_UNSELECTED: Color = Color::DarkGrey;

pub const COLOR_INPUT_TEXT: Color = Color::White;
pub const COLOR_DEFAULT_HINT: Color = Color::DarkGrey;

pub const COLOR_ANSWER: Color = Color::Cyan;
