use crate::error::CodecError;

/// Core trait for text codecs.
///
/// Every strategy (like `Base64` or `Rot13`) is a stateless transform pair:
/// 1.  `encode`: Take plain text and render it in the codec's restricted form.
///     This is total over all valid Unicode text.
/// 2.  `decode`: Take encoded text and turn it back into the original text,
///     rejecting malformed input as a whole.
pub trait Codec {
    fn encode(&self, text: &str) -> String;
    fn decode(&self, data: &str) -> Result<String, CodecError>;
}
