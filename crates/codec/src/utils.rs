use crate::error::CodecError;
use crate::CodecKind;

/// Interpret decoded bytes as UTF-8 text, attributing failures to `codec`.
pub fn bytes_to_text(codec: CodecKind, bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|source| CodecError::Utf8 { codec, source })
}

/// Uppercase hex digit for a nibble (0-15).
#[inline(always)]
pub const fn hex_digit(nibble: u8) -> u8 {
    b"0123456789ABCDEF"[(nibble & 0x0F) as usize]
}

/// Value of an ASCII hex digit, accepting either case.
#[inline]
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Slice of `s` starting at byte `start` and spanning at most `max_chars`
/// characters. `start` must be a char boundary.
pub fn fragment_at(s: &str, start: usize, max_chars: usize) -> String {
    s.get(start..)
        .unwrap_or_default()
        .chars()
        .take(max_chars)
        .collect()
}
