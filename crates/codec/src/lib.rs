//! Named text codecs with strict, all-or-nothing decoding.
//!
//! Provides six stateless encode/decode pairs (Base64, URL percent-encoding,
//! hexadecimal, HTML entities, ROT13 and 8-bit binary) behind one closed
//! selector, [`CodecKind`].
//!
//! ```
//! use encodecraft_codec::{decode, encode};
//!
//! assert_eq!(encode("base64", "Hello, World!").unwrap(), "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(decode("hex", "4142").unwrap(), "AB");
//! assert!(decode("morse", "...").is_err());
//! ```

mod error;
mod strategies;
mod traits;
mod utils;
pub mod verify;

pub use error::CodecError as Error;
pub use error::CodecError;
pub use strategies::{Base64, Binary, Hex, HtmlEntities, Rot13, Url};
pub use traits::Codec;
pub use verify::{run_self_test, SelfTestReport};

use serde::{Deserialize, Serialize};

/// The closed set of codecs, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// RFC 4648 Base64 of the UTF-8 bytes.
    Base64,
    /// Percent-encoding with only unreserved characters left literal.
    Url,
    /// Two uppercase hex digits per UTF-8 byte.
    Hex,
    /// HTML entity escaping of `& < > " '`.
    Html,
    /// ROT13 over ASCII letters (self-inverse).
    Rot13,
    /// Space-separated 8-bit groups, one per UTF-8 byte.
    Binary,
}

impl CodecKind {
    /// Every codec, in display order.
    pub const ALL: [CodecKind; 6] = [
        CodecKind::Base64,
        CodecKind::Url,
        CodecKind::Hex,
        CodecKind::Html,
        CodecKind::Rot13,
        CodecKind::Binary,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            CodecKind::Base64 => "base64",
            CodecKind::Url => "url",
            CodecKind::Hex => "hex",
            CodecKind::Html => "html",
            CodecKind::Rot13 => "rot13",
            CodecKind::Binary => "binary",
        }
    }

    /// Encode using the selected codec.
    pub fn encode(&self, text: &str) -> String {
        log::debug!("encoding {} chars with {self}", text.chars().count());
        match self {
            CodecKind::Base64 => Base64.encode(text),
            CodecKind::Url => Url.encode(text),
            CodecKind::Hex => Hex.encode(text),
            CodecKind::Html => HtmlEntities.encode(text),
            CodecKind::Rot13 => Rot13.encode(text),
            CodecKind::Binary => Binary.encode(text),
        }
    }

    /// Decode using the selected codec.
    pub fn decode(&self, data: &str) -> Result<String, CodecError> {
        log::debug!("decoding {} chars with {self}", data.chars().count());
        match self {
            CodecKind::Base64 => Base64.decode(data),
            CodecKind::Url => Url.decode(data),
            CodecKind::Hex => Hex.decode(data),
            CodecKind::Html => HtmlEntities.decode(data),
            CodecKind::Rot13 => Rot13.decode(data),
            CodecKind::Binary => Binary.decode(data),
        }
    }

    /// Human-readable description and a worked example.
    pub fn info(&self) -> CodecInfo {
        let (description, example) = match self {
            CodecKind::Base64 => (
                "Base64 is a binary-to-text encoding scheme that represents binary data in ASCII format. Commonly used for data transmission and storage.",
                "Hello → SGVsbG8=",
            ),
            CodecKind::Url => (
                "URL encoding replaces every character outside the unreserved set with a \"%\" followed by two hexadecimal digits. Essential for web development.",
                "Hello World → Hello%20World",
            ),
            CodecKind::Hex => (
                "Hexadecimal encoding represents binary data in base-16 format. Each byte is represented by two hexadecimal digits.",
                "Hello → 48656C6C6F",
            ),
            CodecKind::Html => (
                "HTML entity encoding converts special characters to HTML entities, preventing XSS attacks and ensuring proper rendering.",
                "<div> → &lt;div&gt;",
            ),
            CodecKind::Rot13 => (
                "ROT13 is a simple letter substitution cipher that replaces each letter with the letter 13 positions later in the alphabet.",
                "Hello → Uryyb",
            ),
            CodecKind::Binary => (
                "Binary encoding converts text to binary representation, showing the raw 8-bit groups of each UTF-8 byte.",
                "Hi → 01001000 01101001",
            ),
        };

        CodecInfo {
            name: *self,
            description,
            example,
        }
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for CodecKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CodecKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CodecError::UnknownCodec {
                name: s.to_string(),
            })
    }
}

/// Trait-like access for callers holding a `dyn Codec`.
impl Codec for CodecKind {
    fn encode(&self, text: &str) -> String {
        CodecKind::encode(self, text)
    }

    fn decode(&self, data: &str) -> Result<String, CodecError> {
        CodecKind::decode(self, data)
    }
}

/// Static metadata describing a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodecInfo {
    pub name: CodecKind,
    pub description: &'static str,
    pub example: &'static str,
}

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encode,
    Decode,
}

impl Operation {
    /// Run this operation with `codec`. Encoding always succeeds.
    pub fn apply(self, codec: CodecKind, text: &str) -> Result<String, CodecError> {
        match self {
            Operation::Encode => Ok(codec.encode(text)),
            Operation::Decode => codec.decode(text),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encode => write!(f, "encode"),
            Operation::Decode => write!(f, "decode"),
        }
    }
}

/// Encode `text` with the codec called `codec_name`.
///
/// Fails only when the name is not one of `base64`, `url`, `hex`, `html`,
/// `rot13` or `binary`.
pub fn encode(codec_name: &str, text: &str) -> Result<String, CodecError> {
    let codec: CodecKind = codec_name.parse()?;
    Ok(codec.encode(text))
}

/// Decode `text` with the codec called `codec_name`.
pub fn decode(codec_name: &str, text: &str) -> Result<String, CodecError> {
    let codec: CodecKind = codec_name.parse()?;
    codec.decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in CodecKind::ALL {
            assert_eq!(kind.name().parse::<CodecKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("BASE64".parse::<CodecKind>().unwrap(), CodecKind::Base64);
        assert_eq!(" Rot13 ".parse::<CodecKind>().unwrap(), CodecKind::Rot13);
    }

    #[test]
    fn test_unknown_codec() {
        let err = "base32".parse::<CodecKind>().unwrap_err();
        assert!(matches!(err, CodecError::UnknownCodec { ref name } if name == "base32"));
        assert!(!err.is_decode_error());
        assert_eq!(err.codec(), None);
    }

    #[test]
    fn test_dispatch_matches_strategies() {
        let text = "Ünïcödé <&> 'quoted' 🚀";
        assert_eq!(CodecKind::Base64.encode(text), Base64.encode(text));
        assert_eq!(CodecKind::Url.encode(text), Url.encode(text));
        assert_eq!(CodecKind::Hex.encode(text), Hex.encode(text));
        assert_eq!(CodecKind::Html.encode(text), HtmlEntities.encode(text));
        assert_eq!(CodecKind::Rot13.encode(text), Rot13.encode(text));
        assert_eq!(CodecKind::Binary.encode(text), Binary.encode(text));
    }

    #[test]
    fn test_strategies_round_trip() {
        let text = "Hello, World! ✓";
        for kind in CodecKind::ALL {
            let encoded = kind.encode(text);
            let decoded = kind.decode(&encoded).unwrap();
            assert_eq!(decoded, text, "round trip failed for {kind}");
        }
    }

    #[test]
    fn test_codec_as_trait_object() {
        let codecs: Vec<Box<dyn Codec>> = CodecKind::ALL
            .into_iter()
            .map(|kind| Box::new(kind) as Box<dyn Codec>)
            .collect();
        for codec in &codecs {
            assert_eq!(codec.decode(&codec.encode("abc")).unwrap(), "abc");
        }
    }

    #[test]
    fn test_operation_apply() {
        assert_eq!(
            Operation::Encode.apply(CodecKind::Hex, "AB").unwrap(),
            "4142"
        );
        assert_eq!(
            Operation::Decode.apply(CodecKind::Hex, "4142").unwrap(),
            "AB"
        );
        assert!(Operation::Decode.apply(CodecKind::Hex, "4G").is_err());
    }

    #[test]
    fn test_info_examples_hold() {
        for kind in CodecKind::ALL {
            let info = kind.info();
            assert_eq!(info.name, kind);
            let (plain, encoded) = info.example.split_once(" → ").unwrap();
            assert_eq!(kind.encode(plain), encoded, "example for {kind} is stale");
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&CodecKind::Rot13).unwrap();
        assert_eq!(json, "\"rot13\"");
        let op: Operation = serde_json::from_str("\"decode\"").unwrap();
        assert_eq!(op, Operation::Decode);
    }
}
