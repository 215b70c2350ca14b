use hex::FromHexError;

use crate::error::CodecError;
use crate::traits::Codec;
use crate::utils::{bytes_to_text, fragment_at};
use crate::CodecKind;

/// Strategy: Base-16 over the UTF-8 bytes of the text.
///
/// Each byte becomes two uppercase hex digits with no separator. Decoding
/// accepts either case but requires an even number of digits.
pub struct Hex;

impl Codec for Hex {
    fn encode(&self, text: &str) -> String {
        hex::encode_upper(text.as_bytes())
    }

    fn decode(&self, data: &str) -> Result<String, CodecError> {
        let bytes = hex::decode(data).map_err(|e| describe(data, e))?;
        bytes_to_text(CodecKind::Hex, bytes)
    }
}

fn describe(data: &str, err: FromHexError) -> CodecError {
    match err {
        FromHexError::InvalidHexCharacter { c, index } => {
            let mut fragment = fragment_at(data, index, 1);
            if fragment.is_empty() {
                fragment = c.to_string();
            }
            CodecError::decode_at(
                CodecKind::Hex,
                format!("invalid hex digit '{fragment}' at position {index}"),
                fragment,
            )
        }
        FromHexError::OddLength => CodecError::decode(
            CodecKind::Hex,
            format!("odd number of digits ({})", data.len()),
        ),
        FromHexError::InvalidStringLength => {
            CodecError::decode(CodecKind::Hex, "invalid string length")
        }
    }
}
