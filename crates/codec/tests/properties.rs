use encodecraft_codec::{decode, encode, CodecError, CodecKind};
use rand::Rng;

fn random_text(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..max_len);
    (0..len)
        .map(|_| match rng.gen_range(0..4) {
            // Bias towards characters the codecs treat specially.
            0 => *b"&<>\"'%+ /=".get(rng.gen_range(0..10)).unwrap() as char,
            1 => rng.gen_range('a'..='z'),
            _ => rng.gen::<char>(),
        })
        .collect()
}

#[test]
fn test_round_trip_law_for_every_codec() {
    let mut rng = rand::thread_rng();
    for kind in CodecKind::ALL {
        for _ in 0..200 {
            let text = random_text(&mut rng, 48);
            let encoded = encode(kind.name(), &text).unwrap();
            let decoded = decode(kind.name(), &encoded).unwrap();
            assert_eq!(decoded, text, "{kind} failed on {text:?}");
        }
    }
}

#[test]
fn test_empty_input_maps_to_empty_output() {
    for name in ["base64", "url", "hex", "rot13", "binary", "html"] {
        assert_eq!(encode(name, "").unwrap(), "", "{name} encode");
        assert_eq!(decode(name, "").unwrap(), "", "{name} decode");
    }
}

#[test]
fn test_rot13_is_self_inverse() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let text = random_text(&mut rng, 48);
        let once = encode("rot13", &text).unwrap();
        assert_eq!(encode("rot13", &once).unwrap(), text);
        assert_eq!(decode("rot13", &text).unwrap(), once);
    }
}

#[test]
fn test_known_answer_vectors() {
    assert_eq!(encode("base64", "Hello, World!").unwrap(), "SGVsbG8sIFdvcmxkIQ==");
    assert_eq!(encode("url", "Hello World").unwrap(), "Hello%20World");
    assert_eq!(encode("url", "A").unwrap(), "A");
    assert_eq!(encode("hex", "AB").unwrap(), "4142");
    assert_eq!(decode("hex", "4142").unwrap(), "AB");
    assert_eq!(encode("html", "<div>").unwrap(), "&lt;div&gt;");
    assert_eq!(decode("html", "&amp;").unwrap(), "&");
    assert_eq!(encode("binary", "A").unwrap(), "01000001");
    assert_eq!(decode("binary", "01000001 01000010").unwrap(), "AB");
}

#[test]
fn test_malformed_input_is_rejected() {
    for (name, input) in [("hex", "4G"), ("binary", "1"), ("base64", "!!!!")] {
        let err = decode(name, input).unwrap_err();
        assert!(err.is_decode_error(), "{name} gave {err:?}");
        assert_eq!(err.codec(), Some(name.parse().unwrap()));
    }
}

#[test]
fn test_unknown_codec_name() {
    for name in ["", "base32", "rot-13", "utf8"] {
        assert!(matches!(
            encode(name, "text"),
            Err(CodecError::UnknownCodec { .. })
        ));
        assert!(matches!(
            decode(name, "text"),
            Err(CodecError::UnknownCodec { .. })
        ));
    }
}

#[test]
fn test_binary_works_on_bytes_not_code_points() {
    let encoded = encode("binary", "ü€").unwrap();
    // 2 + 3 UTF-8 bytes
    assert_eq!(encoded.split(' ').count(), 5);
    assert_eq!(decode("binary", &encoded).unwrap(), "ü€");
}

#[test]
fn test_error_messages_name_the_codec() {
    let err = decode("hex", "ZZ").unwrap_err();
    assert!(err.to_string().contains("hex"));
    let err = decode("base64", "//4=").unwrap_err();
    assert!(err.to_string().contains("UTF-8"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_concurrent_use_is_independent() {
    let handles: Vec<_> = CodecKind::ALL
        .into_iter()
        .map(|kind| {
            std::thread::spawn(move || {
                for i in 0..100 {
                    let text = format!("thread {kind} iteration {i} ✓");
                    assert_eq!(kind.decode(&kind.encode(&text)).unwrap(), text);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
