//! Built-in self-test for the codec suite.
//!
//! Checks every codec against the round-trip law over a fixed sample set,
//! a handful of known-answer vectors, and inputs that must be rejected.
//! Codecs share no state, so they are checked concurrently.

use rayon::prelude::*;
use serde::Serialize;

use crate::CodecKind;

/// Texts every codec must round-trip.
pub const SAMPLES: &[&str] = &[
    "Hello, World!",
    "",
    "The quick brown fox jumps over the lazy dog 0123456789",
    "Ünïcödé ✓ 日本語 🚀",
    "<script>alert('x') && \"y\"</script>",
    "a+b=c/d?e%f#g h~i",
    "line one\nline two\ttabbed",
];

/// `(codec, plain, encoded)` triples checked in the encode direction.
const KNOWN_ENCODINGS: &[(CodecKind, &str, &str)] = &[
    (CodecKind::Base64, "Hello, World!", "SGVsbG8sIFdvcmxkIQ=="),
    (CodecKind::Url, "Hello World", "Hello%20World"),
    (CodecKind::Url, "A", "A"),
    (CodecKind::Hex, "AB", "4142"),
    (CodecKind::Html, "<div>", "&lt;div&gt;"),
    (CodecKind::Rot13, "Hello", "Uryyb"),
    (CodecKind::Binary, "A", "01000001"),
];

/// `(codec, encoded, plain)` triples checked in the decode direction.
const KNOWN_DECODINGS: &[(CodecKind, &str, &str)] = &[
    (CodecKind::Hex, "4142", "AB"),
    (CodecKind::Html, "&amp;", "&"),
    (CodecKind::Binary, "01000001 01000010", "AB"),
];

/// Inputs whose decode must fail.
const MALFORMED: &[(CodecKind, &str)] = &[
    (CodecKind::Base64, "!!!!"),
    (CodecKind::Url, "%G1"),
    (CodecKind::Hex, "4G"),
    (CodecKind::Binary, "1"),
];

/// Outcome of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub codec: CodecKind,
    pub check: String,
    pub passed: bool,
    pub detail: Option<String>,
}

impl CheckResult {
    fn pass(codec: CodecKind, check: String) -> Self {
        Self {
            codec,
            check,
            passed: true,
            detail: None,
        }
    }

    fn fail(codec: CodecKind, check: String, detail: String) -> Self {
        Self {
            codec,
            check,
            passed: false,
            detail: Some(detail),
        }
    }
}

/// All check results, grouped by codec in `CodecKind::ALL` order.
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestReport {
    pub checks: Vec<CheckResult>,
}

impl SelfTestReport {
    /// True when every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Run every check for every codec.
pub fn run_self_test() -> SelfTestReport {
    let checks = CodecKind::ALL
        .par_iter()
        .flat_map_iter(|&codec| checks_for(codec))
        .collect();

    SelfTestReport { checks }
}

fn checks_for(codec: CodecKind) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for sample in SAMPLES {
        results.push(round_trip(codec, sample));
    }

    if codec == CodecKind::Rot13 {
        for sample in SAMPLES {
            let check = format!("self-inverse {sample:?}");
            let twice = codec.encode(&codec.encode(sample));
            results.push(if twice == *sample {
                CheckResult::pass(codec, check)
            } else {
                CheckResult::fail(codec, check, format!("got {twice:?}"))
            });
        }
    }

    for &(_, plain, expected) in KNOWN_ENCODINGS.iter().filter(|(c, ..)| *c == codec) {
        let check = format!("encode {plain:?}");
        let actual = codec.encode(plain);
        results.push(if actual == expected {
            CheckResult::pass(codec, check)
        } else {
            CheckResult::fail(codec, check, format!("expected {expected:?}, got {actual:?}"))
        });
    }

    for &(_, encoded, expected) in KNOWN_DECODINGS.iter().filter(|(c, ..)| *c == codec) {
        let check = format!("decode {encoded:?}");
        results.push(match codec.decode(encoded) {
            Ok(actual) if actual == expected => CheckResult::pass(codec, check),
            Ok(actual) => CheckResult::fail(
                codec,
                check,
                format!("expected {expected:?}, got {actual:?}"),
            ),
            Err(e) => CheckResult::fail(codec, check, e.to_string()),
        });
    }

    for &(_, input) in MALFORMED.iter().filter(|(c, _)| *c == codec) {
        let check = format!("reject {input:?}");
        results.push(match codec.decode(input) {
            Err(e) if e.is_decode_error() => CheckResult::pass(codec, check),
            Err(e) => CheckResult::fail(codec, check, format!("wrong error kind: {e}")),
            Ok(actual) => CheckResult::fail(codec, check, format!("accepted as {actual:?}")),
        });
    }

    results
}

fn round_trip(codec: CodecKind, sample: &str) -> CheckResult {
    let check = format!("round-trip {sample:?}");
    let encoded = codec.encode(sample);
    match codec.decode(&encoded) {
        Ok(decoded) if decoded == sample => CheckResult::pass(codec, check),
        Ok(decoded) => CheckResult::fail(codec, check, format!("got {decoded:?}")),
        Err(e) => CheckResult::fail(codec, check, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes() {
        let report = run_self_test();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "self-test failures: {failures:#?}");
        assert!(report.passed());
    }

    #[test]
    fn test_every_codec_is_covered() {
        let report = run_self_test();
        for kind in CodecKind::ALL {
            let count = report.checks.iter().filter(|c| c.codec == kind).count();
            assert!(count >= SAMPLES.len(), "{kind} has only {count} checks");
        }
    }

    #[test]
    fn test_report_order_follows_codec_order() {
        let report = run_self_test();
        let mut seen: Vec<CodecKind> = report.checks.iter().map(|c| c.codec).collect();
        seen.dedup();
        assert_eq!(seen, CodecKind::ALL.to_vec());
    }

    #[test]
    fn test_failed_report_is_not_passed() {
        let report = SelfTestReport {
            checks: vec![
                CheckResult::pass(CodecKind::Hex, "a".into()),
                CheckResult::fail(CodecKind::Hex, "b".into(), "boom".into()),
            ],
        };
        assert!(!report.passed());
        assert_eq!(report.failures().count(), 1);
    }
}
