use crate::error::CodecError;
use crate::traits::Codec;
use crate::utils::bytes_to_text;
use crate::CodecKind;

/// Strategy: 8-bit binary notation over the UTF-8 bytes of the text.
///
/// # How it works
///
/// Every byte is rendered as eight `0`/`1` digits (most significant bit
/// first) and groups are joined with a single space. A multi-byte character
/// therefore shows up as several groups:
///
/// ```text
/// "Hi" -> 01001000 01101001
/// "é"  -> 11000011 10101001
/// ```
///
/// Decoding splits on any whitespace and requires each token to be exactly
/// eight binary digits.
pub struct Binary;

const BITS_PER_GROUP: usize = 8;

impl Codec for Binary {
    fn encode(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(bytes.len() * (BITS_PER_GROUP + 1));
        for (i, byte) in bytes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{byte:08b}"));
        }
        out
    }

    fn decode(&self, data: &str) -> Result<String, CodecError> {
        let bytes = data
            .split_ascii_whitespace()
            .enumerate()
            .map(|(index, token)| parse_group(index, token))
            .collect::<Result<Vec<u8>, CodecError>>()?;
        bytes_to_text(CodecKind::Binary, bytes)
    }
}

fn parse_group(index: usize, token: &str) -> Result<u8, CodecError> {
    if token.chars().count() != BITS_PER_GROUP {
        return Err(CodecError::decode_at(
            CodecKind::Binary,
            format!(
                "group {} ('{token}') must be exactly {BITS_PER_GROUP} binary digits",
                index + 1
            ),
            token,
        ));
    }
    // Eight digits, most significant first, fill a byte exactly.
    token
        .bytes()
        .try_fold(0u8, |acc, b| match b {
            b'0' => Some(acc << 1),
            b'1' => Some((acc << 1) | 1),
            _ => None,
        })
        .ok_or_else(|| {
            CodecError::decode_at(
                CodecKind::Binary,
                format!("group {} ('{token}') contains a non-binary digit", index + 1),
                token,
            )
        })
}
