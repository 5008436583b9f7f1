//! Raw keyboard input decoding.
//!
//! In raw mode the terminal delivers keystrokes as unbuffered byte chunks:
//! plain text arrives as one or more UTF-8 bytes, while arrows and other
//! special keys arrive as multi-byte CSI sequences starting with ESC. The
//! decoder classifies exactly one read's worth of bytes into one [`Key`].
//!
//! Known limitation: a bare Escape press and the prefix of a still-arriving
//! arrow sequence are indistinguishable when the sequence is split across
//! reads. Classification is per-chunk, so a split `ESC [ A` can surface as
//! `Escape` followed by stray `Unknown` bytes. In practice a local terminal
//! delivers the whole sequence in one read.

use crate::settings;
use std::io::Read;
use tracing::trace;

/// One decoded key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Printable text, possibly a single multi-byte character.
    Char(String),
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl-C.
    Interrupt,
    /// Anything the decoder does not recognize, including empty reads.
    Unknown,
}

impl Key {
    /// The key as a single decimal digit, if that is what was pressed.
    pub(crate) fn digit(&self) -> Option<i64> {
        let Key::Char(text) = self else {
            return None;
        };
        let mut chars = text.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        first.to_digit(10).map(i64::from)
    }
}

/// Decode the bytes of one standard-input read into exactly one [`Key`].
///
/// Rules in priority order: `0x03` is Ctrl-C, `13` is Enter, `127`/`8` are
/// Backspace, a lone ESC is the Escape key, `ESC [ A/B/C/D` are the arrows,
/// any other ESC-prefixed chunk is [`Key::Unknown`]. Everything else is
/// treated as printable text.
pub fn decode_chunk(bytes: &[u8]) -> Key {
    match bytes {
        [] => Key::Unknown,
        [0x03, ..] => Key::Interrupt,
        [13, ..] => Key::Enter,
        [127, ..] | [8, ..] => Key::Backspace,
        [0x1b] => Key::Escape,
        [0x1b, 0x5b, 0x41, ..] => Key::Up,
        [0x1b, 0x5b, 0x42, ..] => Key::Down,
        [0x1b, 0x5b, 0x43, ..] => Key::Right,
        [0x1b, 0x5b, 0x44, ..] => Key::Left,
        [0x1b, ..] => Key::Unknown,
        _ => Key::Char(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Block on one read and decode it.
///
/// A zero-byte read (EOF) decodes as [`Key::Unknown`] so the caller's loop
/// keeps waiting instead of failing.
pub(crate) fn read_key(reader: &mut impl Read) -> std::io::Result<Key> {
    let mut buf = [0u8; settings::READ_CHUNK_LEN];
    let read = reader.read(&mut buf)?;
    let key = decode_chunk(&buf[..read]);
    trace!(?key, bytes = read, "decoded input chunk");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_decode_from_full_csi_sequences() {
        assert_eq!(decode_chunk(&[0x1b, 0x5b, 0x41]), Key::Up);
        assert_eq!(decode_chunk(&[0x1b, 0x5b, 0x42]), Key::Down);
        assert_eq!(decode_chunk(&[0x1b, 0x5b, 0x43]), Key::Right);
        assert_eq!(decode_chunk(&[0x1b, 0x5b, 0x44]), Key::Left);
    }

    #[test]
    fn lone_escape_byte_is_the_escape_key() {
        assert_eq!(decode_chunk(&[0x1b]), Key::Escape);
    }

    #[test]
    fn truncated_or_foreign_escape_sequences_are_unknown() {
        assert_eq!(decode_chunk(&[0x1b, 0x5b]), Key::Unknown);
        assert_eq!(decode_chunk(&[0x1b, 0x5b, 0x5a]), Key::Unknown);
        assert_eq!(decode_chunk(&[0x1b, b'O', b'P']), Key::Unknown);
    }

    #[test]
    fn control_bytes_decode_by_priority() {
        assert_eq!(decode_chunk(&[0x03]), Key::Interrupt);
        assert_eq!(decode_chunk(&[13]), Key::Enter);
        assert_eq!(decode_chunk(&[127]), Key::Backspace);
        assert_eq!(decode_chunk(&[8]), Key::Backspace);
    }

    #[test]
    fn empty_read_is_unknown() {
        assert_eq!(decode_chunk(&[]), Key::Unknown);
    }

    #[test]
    fn printable_ascii_decodes_as_text() {
        assert_eq!(decode_chunk(b"x"), Key::Char("x".to_string()));
    }

    #[test]
    fn multibyte_character_arrives_as_one_event() {
        assert_eq!(decode_chunk("é".as_bytes()), Key::Char("é".to_string()));
        assert_eq!(decode_chunk("日".as_bytes()), Key::Char("日".to_string()));
    }

    #[test]
    fn digit_helper_accepts_only_single_digits() {
        assert_eq!(Key::Char("3".to_string()).digit(), Some(3));
        assert_eq!(Key::Char("12".to_string()).digit(), None);
        assert_eq!(Key::Char("a".to_string()).digit(), None);
        assert_eq!(Key::Enter.digit(), None);
    }

    #[test]
    fn read_key_decodes_one_chunk_from_a_reader() {
        let mut reader = std::io::Cursor::new(vec![0x1b, 0x5b, 0x41]);
        assert_eq!(read_key(&mut reader).unwrap(), Key::Up);
    }

    #[test]
    fn read_key_maps_eof_to_unknown() {
        let mut reader = std::io::Cursor::new(Vec::<u8>::new());
        assert_eq!(read_key(&mut reader).unwrap(), Key::Unknown);
    }
}
