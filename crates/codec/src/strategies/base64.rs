use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine};

use crate::error::CodecError;
use crate::traits::Codec;
use crate::utils::{bytes_to_text, fragment_at};
use crate::CodecKind;

/// Strategy: RFC 4648 Base64 over the UTF-8 bytes of the text.
///
/// Standard alphabet (`A-Z a-z 0-9 + /`) with `=` padding to a multiple of
/// four output characters. Decoding is strict: canonical padding is required
/// and whitespace is not skipped.
pub struct Base64;

impl Codec for Base64 {
    fn encode(&self, text: &str) -> String {
        STANDARD.encode(text.as_bytes())
    }

    fn decode(&self, data: &str) -> Result<String, CodecError> {
        let bytes = STANDARD
            .decode(data.as_bytes())
            .map_err(|e| describe(data, e))?;
        bytes_to_text(CodecKind::Base64, bytes)
    }
}

fn describe(data: &str, err: DecodeError) -> CodecError {
    let offending = |offset: usize, byte: u8| {
        let fragment = fragment_at(data, offset, 1);
        if fragment.is_empty() {
            format!("0x{byte:02X}")
        } else {
            fragment
        }
    };

    match err {
        DecodeError::InvalidByte(offset, byte) => {
            let fragment = offending(offset, byte);
            CodecError::decode_at(
                CodecKind::Base64,
                format!("invalid character '{fragment}' at position {offset}"),
                fragment,
            )
        }
        DecodeError::InvalidLastSymbol(offset, byte) => {
            let fragment = offending(offset, byte);
            CodecError::decode_at(
                CodecKind::Base64,
                format!("non-canonical final symbol '{fragment}' at position {offset}"),
                fragment,
            )
        }
        // Length and padding problems carry no single offending symbol.
        other => CodecError::decode(CodecKind::Base64, other.to_string()),
    }
}
