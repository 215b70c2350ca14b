use crate::error::CodecError;
use crate::traits::Codec;
use crate::utils::{bytes_to_text, fragment_at, hex_digit, hex_value};
use crate::CodecKind;

/// Strategy: Percent-encoding (RFC 3986) over the UTF-8 bytes of the text.
///
/// Only the unreserved set `A-Z a-z 0-9 - _ . ~` is emitted literally; every
/// other byte becomes `%XX` with uppercase hex. There is no extra "safe" set,
/// so `/`, `?`, `&` and friends are always escaped.
///
/// Decoding treats `+` as a space (form encoding), which never collides with
/// encoder output since a literal `+` is always written as `%2B`. Text from an
/// external source that carries a literal plus, such as `a+b`, decodes to `a b`.
pub struct Url;

#[inline(always)]
const fn is_unreserved(byte: u8) -> bool {
    matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~')
}

impl Codec for Url {
    fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 3);
        for &byte in text.as_bytes() {
            if is_unreserved(byte) {
                out.push(byte as char);
            } else {
                out.push('%');
                out.push(hex_digit(byte >> 4) as char);
                out.push(hex_digit(byte) as char);
            }
        }
        out
    }

    fn decode(&self, data: &str) -> Result<String, CodecError> {
        let input = data.as_bytes();
        let mut bytes = Vec::with_capacity(input.len());
        let mut i = 0;

        while i < input.len() {
            match input[i] {
                b'%' => {
                    let hi = input.get(i + 1).copied().and_then(hex_value);
                    let lo = input.get(i + 2).copied().and_then(hex_value);
                    let (Some(hi), Some(lo)) = (hi, lo) else {
                        let fragment = fragment_at(data, i, 3);
                        return Err(CodecError::decode_at(
                            CodecKind::Url,
                            format!(
                                "'%' at position {i} must be followed by two hex digits, found '{fragment}'"
                            ),
                            fragment,
                        ));
                    };
                    bytes.push((hi << 4) | lo);
                    i += 3;
                }
                b'+' => {
                    bytes.push(b' ');
                    i += 1;
                }
                byte => {
                    bytes.push(byte);
                    i += 1;
                }
            }
        }

        bytes_to_text(CodecKind::Url, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(Url.encode("Hello World"), "Hello%20World");
        assert_eq!(Url.encode("A"), "A");
        assert_eq!(Url.encode("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(Url.encode("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
        assert_eq!(Url.encode("1+1"), "1%2B1");
        assert_eq!(Url.encode("é"), "%C3%A9");
        assert_eq!(Url.encode(""), "");
    }

    #[test]
    fn test_encode_escapes_sub_delims() {
        // Nothing outside the unreserved set survives, including !'()*
        assert_eq!(Url.encode("!'()*"), "%21%27%28%29%2A");
    }

    #[test]
    fn test_decode_plus_as_space() {
        assert_eq!(Url.decode("Hello+World").unwrap(), "Hello World");
        assert_eq!(Url.decode("1%2B1").unwrap(), "1+1");
        assert_eq!(Url.decode("a+b").unwrap(), "a b");
        assert_eq!(Url.decode(&Url.encode("a+b")).unwrap(), "a+b");
    }

    #[test]
    fn test_decode_lowercase_escapes() {
        assert_eq!(Url.decode("%c3%a9").unwrap(), "é");
    }

    #[test]
    fn test_decode_passes_unescaped_unicode() {
        assert_eq!(Url.decode("caf%C3%A9 ☕").unwrap(), "café ☕");
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(0..64);
            let text: String = (0..len).map(|_| rng.gen::<char>()).collect();
            let encoded = Url.encode(&text);
            assert!(encoded.is_ascii());
            assert_eq!(Url.decode(&encoded).expect("Decoding failed"), text);
        }
    }

    #[test]
    fn test_decode_truncated_escape() {
        let err = Url.decode("abc%4").unwrap_err();
        assert!(err.is_decode_error());
        assert_eq!(err.fragment(), Some("%4"));

        let err = Url.decode("%").unwrap_err();
        assert_eq!(err.fragment(), Some("%"));
    }

    #[test]
    fn test_decode_non_hex_escape() {
        let err = Url.decode("100%ZZ").unwrap_err();
        assert_eq!(err.fragment(), Some("%ZZ"));
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = Url.decode("%FF").unwrap_err();
        assert!(matches!(err, CodecError::Utf8 { codec: CodecKind::Url, .. }));
    }
}
