//! Line-buffered prompting for non-terminal standard input (pipes, CI).
//!
//! Every function here is total over user input: a blank line, EOF, or
//! anything unparseable silently resolves to the supplied default. The
//! functions are generic over reader/writer so tests drive them with
//! in-memory streams; the widget entry points wire stdin/stdout in.

use std::io::{self, BufRead, Write};

fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(String::new());
    }
    Ok(line.trim().to_string())
}

/// Numbered-list selection. Accepts `1..=len`; anything else keeps the
/// default index.
pub(crate) fn select(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    options: &[String],
    default_index: usize,
) -> io::Result<usize> {
    writeln!(output, "• {question}")?;
    for (idx, option) in options.iter().enumerate() {
        let marker = if idx == default_index { " (default)" } else { "" };
        writeln!(output, "  {}. {option}{marker}", idx + 1)?;
    }
    write!(output, "  pick [1-{}]: ", options.len())?;
    output.flush()?;

    let line = read_trimmed_line(input)?;
    let picked = match line.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => n - 1,
        _ => default_index,
    };
    Ok(picked)
}

/// Free-text entry. A blank line resolves to the default.
pub(crate) fn input(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    default_text: &str,
) -> io::Result<String> {
    if default_text.is_empty() {
        write!(output, "• {question}: ")?;
    } else {
        write!(output, "• {question} [{default_text}]: ")?;
    }
    output.flush()?;

    let line = read_trimmed_line(input)?;
    if line.is_empty() {
        return Ok(default_text.to_string());
    }
    Ok(line)
}

/// Bounded integer entry. Out-of-range or unparseable input keeps the
/// default.
pub(crate) fn rating(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    min: i64,
    max: i64,
    default_value: i64,
) -> io::Result<i64> {
    write!(output, "• {question} [{min}-{max}, default {default_value}]: ")?;
    output.flush()?;

    let line = read_trimmed_line(input)?;
    let value = match line.parse::<i64>() {
        Ok(n) if (min..=max).contains(&n) => n,
        _ => default_value,
    };
    Ok(value)
}

/// Yes/no entry with a hint matching the default.
pub(crate) fn confirm(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    default_value: bool,
) -> io::Result<bool> {
    let hint = if default_value {
        crate::settings::HINT_CONFIRM_DEFAULT_YES
    } else {
        crate::settings::HINT_CONFIRM_DEFAULT_NO
    };
    write!(output, "• {question} {hint}: ")?;
    output.flush()?;

    let line = read_trimmed_line(input)?.to_lowercase();
    let value = match line.as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default_value,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn three_options() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    fn run_select(line: &str, default_index: usize) -> (usize, String) {
        let mut input = Cursor::new(line.as_bytes().to_vec());
        let mut output = Vec::new();
        let picked = select(
            &mut input,
            &mut output,
            "Condition?",
            &three_options(),
            default_index,
        )
        .unwrap();
        (picked, String::from_utf8(output).unwrap())
    }

    #[test]
    fn select_blank_line_keeps_default() {
        let (picked, rendered) = run_select("\n", 2);
        assert_eq!(picked, 2);
        assert!(rendered.contains("3. c (default)"));
        assert!(rendered.contains("pick [1-3]"));
    }

    #[test]
    fn select_accepts_one_based_choice() {
        assert_eq!(run_select("2\n", 0).0, 1);
    }

    #[test]
    fn select_rejects_out_of_range_and_garbage() {
        assert_eq!(run_select("7\n", 1).0, 1);
        assert_eq!(run_select("0\n", 1).0, 1);
        assert_eq!(run_select("first\n", 1).0, 1);
    }

    #[test]
    fn select_eof_keeps_default() {
        assert_eq!(run_select("", 1).0, 1);
    }

    #[test]
    fn input_blank_resolves_to_default() {
        let mut reader = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        let text = input(&mut reader, &mut output, "Name?", "my-experiment").unwrap();
        assert_eq!(text, "my-experiment");
        assert!(String::from_utf8(output).unwrap().contains("[my-experiment]"));
    }

    #[test]
    fn input_trims_entered_text() {
        let mut reader = Cursor::new(b"  deep-work  \n".to_vec());
        let mut output = Vec::new();
        let text = input(&mut reader, &mut output, "Name?", "").unwrap();
        assert_eq!(text, "deep-work");
        assert!(!String::from_utf8(output).unwrap().contains('['));
    }

    #[test]
    fn rating_parses_in_range_values_only() {
        for (line, expected) in [("4\n", 4), ("9\n", 3), ("zero\n", 3), ("\n", 3)] {
            let mut reader = Cursor::new(line.as_bytes().to_vec());
            let mut output = Vec::new();
            let value = rating(&mut reader, &mut output, "Focus?", 1, 5, 3).unwrap();
            assert_eq!(value, expected, "line {line:?}");
        }
    }

    #[test]
    fn confirm_accepts_words_and_letters_case_insensitively() {
        for (line, default, expected) in [
            ("y\n", false, true),
            ("YES\n", false, true),
            ("n\n", true, false),
            ("No\n", true, false),
            ("\n", true, true),
            ("\n", false, false),
            ("maybe\n", false, false),
        ] {
            let mut reader = Cursor::new(line.as_bytes().to_vec());
            let mut output = Vec::new();
            let value = confirm(&mut reader, &mut output, "Keep going?", default).unwrap();
            assert_eq!(value, expected, "line {line:?} default {default}");
        }
    }

    #[test]
    fn confirm_hint_tracks_default() {
        let mut reader = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        confirm(&mut reader, &mut output, "Keep going?", true).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("[Y/n]"));

        let mut reader = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        confirm(&mut reader, &mut output, "Keep going?", false).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("[y/N]"));
    }
}
