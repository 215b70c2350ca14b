use std::collections::HashMap;
use std::sync::OnceLock;

use entities::ENTITIES;

use crate::error::CodecError;
use crate::traits::Codec;

/// Strategy: HTML entity escaping.
///
/// # How it works
///
/// Encoding replaces the five characters that are significant in markup
/// (`& < > " '`) with entities and leaves everything else untouched.
///
/// Decoding follows the HTML5 rules for character references in text:
/// *   **Named:** the full HTML5 entity table, including the legacy forms
///     that may omit the `;` (`&amp`, `&copy`), matched as a longest prefix.
/// *   **Numeric:** `&#39;` / `&#x27;`, with the `;` optional. 0x80-0x9F
///     are remapped through Windows-1252, and 0, surrogates and anything
///     past U+10FFFF become U+FFFD.
/// *   Anything unrecognized is passed through verbatim. Decoding never fails.
pub struct HtmlEntities;

/// Longest entity name in the HTML5 table, excluding `;`.
const MAX_NAME_LEN: usize = 32;

const REPLACEMENT: char = '\u{FFFD}';

/// Numeric references in 0x80..=0x9F name Windows-1252 characters.
const WINDOWS_1252: [char; 32] = [
    '\u{20AC}', '\u{81}', '\u{201A}', '\u{192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2C6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8D}', '\u{17D}', '\u{8F}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2DC}', '\u{2122}', '\u{161}', '\u{203A}', '\u{153}', '\u{9D}', '\u{17E}', '\u{178}',
];

/// Entity names (without the leading `&`, with `;` where the table has it)
/// mapped to their replacement text.
fn named_entities() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        ENTITIES
            .iter()
            .map(|e| (e.entity.trim_start_matches('&'), e.characters))
            .collect()
    })
}

impl Codec for HtmlEntities {
    fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#x27;"),
                _ => out.push(ch),
            }
        }
        out
    }

    fn decode(&self, data: &str) -> Result<String, CodecError> {
        let mut out = String::with_capacity(data.len());
        let mut rest = data;

        while let Some(amp) = rest.find('&') {
            out.push_str(&rest[..amp]);
            let after = &rest[amp + 1..];
            let resolved = match after.strip_prefix('#') {
                Some(number) => numeric_reference(number).map(|(ch, used)| {
                    out.push(ch);
                    used + 1
                }),
                None => named_reference(after).map(|(text, used)| {
                    out.push_str(text);
                    used
                }),
            };
            match resolved {
                Some(consumed) => rest = &after[consumed..],
                None => {
                    out.push('&');
                    rest = after;
                }
            }
        }
        out.push_str(rest);

        Ok(out)
    }
}

/// Resolve `NNN;` / `xHH;` after `&#`, returning the character and the
/// bytes consumed (digits, radix marker and optional `;`).
fn numeric_reference(number: &str) -> Option<(char, usize)> {
    let (digits_from, radix) = match number.as_bytes().first() {
        Some(b'x' | b'X') => (1, 16),
        _ => (0, 10),
    };
    let digits_len = number[digits_from..]
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let digits_end = digits_from + digits_len;
    let consumed = if number[digits_end..].starts_with(';') {
        digits_end + 1
    } else {
        digits_end
    };

    // Overflowing values are out of range just like anything past U+10FFFF.
    let value = u32::from_str_radix(&number[digits_from..digits_end], radix).unwrap_or(u32::MAX);
    let ch = match value {
        0 => REPLACEMENT,
        0x80..=0x9F => WINDOWS_1252[(value - 0x80) as usize],
        _ => char::from_u32(value).unwrap_or(REPLACEMENT),
    };

    Some((ch, consumed))
}

/// Resolve a named reference after `&`, returning the replacement text and
/// the bytes consumed.
fn named_reference(after: &str) -> Option<(&'static str, usize)> {
    let table = named_entities();

    let name_len: usize = after
        .chars()
        .take_while(|c| !matches!(c, '\t' | '\n' | '\x0C' | ' ' | '<' | '&' | '#' | ';'))
        .take(MAX_NAME_LEN)
        .map(char::len_utf8)
        .sum();
    if name_len == 0 {
        return None;
    }

    let candidate_len = if after[name_len..].starts_with(';') {
        name_len + 1
    } else {
        name_len
    };
    if let Some(text) = table.get(&after[..candidate_len]) {
        return Some((*text, candidate_len));
    }

    // Legacy entities may appear without `;`; take the longest one that fits.
    (2..candidate_len)
        .rev()
        .filter(|&end| after.is_char_boundary(end))
        .find_map(|end| table.get(&after[..end]).map(|text| (*text, end)))
}
