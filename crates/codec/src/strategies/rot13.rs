use crate::error::CodecError;
use crate::traits::Codec;

/// Strategy: ROT13 letter substitution.
///
/// Each ASCII letter is rotated 13 places within its own case; everything
/// else (digits, punctuation, non-ASCII) is left alone. Applying it twice
/// yields the original text, so `decode` is `encode`.
pub struct Rot13;

#[inline]
pub(crate) const fn rotate(ch: char) -> char {
    match ch {
        'a'..='z' => (((ch as u8 - b'a' + 13) % 26) + b'a') as char,
        'A'..='Z' => (((ch as u8 - b'A' + 13) % 26) + b'A') as char,
        _ => ch,
    }
}

impl Codec for Rot13 {
    fn encode(&self, text: &str) -> String {
        text.chars().map(rotate).collect()
    }

    fn decode(&self, data: &str) -> Result<String, CodecError> {
        Ok(self.encode(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_known_vectors() {
        assert_eq!(Rot13.encode("Hello"), "Uryyb");
        assert_eq!(Rot13.encode("abcxyz ABCXYZ"), "nopklm NOPKLM");
        assert_eq!(Rot13.encode(""), "");
    }

    #[test]
    fn test_non_letters_untouched() {
        assert_eq!(Rot13.encode("123 !? ñ 日本 🚀"), "123 !? ñ 日本 🚀");
    }

    #[test]
    fn test_self_inverse_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(0..64);
            let text: String = (0..len).map(|_| rng.gen::<char>()).collect();
            assert_eq!(Rot13.encode(&Rot13.encode(&text)), text);
            assert_eq!(Rot13.decode(&Rot13.encode(&text)).unwrap(), text);
        }
    }

    #[test]
    fn test_every_letter_moves() {
        for ch in ('a'..='z').chain('A'..='Z') {
            let rotated = rotate(ch);
            assert_ne!(rotated, ch);
            assert_eq!(rotated.is_ascii_uppercase(), ch.is_ascii_uppercase());
        }
    }
}
