use std::string::FromUtf8Error;

use thiserror::Error;

use crate::CodecKind;

/// Error type for codec operations.
///
/// Encoding never fails; every variant except `UnknownCodec` describes a
/// rejected decode. A failed decode never yields partial output.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unknown codec: {name}. Available: base64, url, hex, html, rot13, binary")]
    UnknownCodec { name: String },

    #[error("Invalid {codec} input: {reason}")]
    Decode {
        codec: CodecKind,
        reason: String,
        fragment: Option<String>,
    },

    /// Decoded bytes do not form valid UTF-8 text.
    #[error("Decoded {codec} bytes are not valid UTF-8: {source}")]
    Utf8 {
        codec: CodecKind,
        #[source]
        source: FromUtf8Error,
    },
}

impl CodecError {
    pub(crate) fn decode(codec: CodecKind, reason: impl Into<String>) -> Self {
        Self::Decode {
            codec,
            reason: reason.into(),
            fragment: None,
        }
    }

    pub(crate) fn decode_at(
        codec: CodecKind,
        reason: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self::Decode {
            codec,
            reason: reason.into(),
            fragment: Some(fragment.into()),
        }
    }

    /// True for malformed input, including invalid UTF-8 after decoding.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Utf8 { .. })
    }

    /// The codec whose decoder rejected the input, if any.
    pub fn codec(&self) -> Option<CodecKind> {
        match self {
            Self::UnknownCodec { .. } => None,
            Self::Decode { codec, .. } | Self::Utf8 { codec, .. } => Some(*codec),
        }
    }

    /// The offending piece of input, where it could be isolated.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::Decode { fragment, .. } => fragment.as_deref(),
            _ => None,
        }
    }
}
