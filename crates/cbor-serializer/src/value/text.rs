//! Text and byte strings.

use super::write_header;
use crate::constants::*;
use crate::types::CborValue;

const REPLACEMENT_CHARACTER: u32 = 0xfffd;

/// Appends the UTF-8 form of one code point.
fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push(0xc0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3f) as u8);
    } else if cp < 0x1_0000 {
        out.push(0xe0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3f) as u8);
        out.push(0x80 | (cp & 0x3f) as u8);
    } else {
        out.push(0xf0 | (cp >> 18) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3f) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3f) as u8);
        out.push(0x80 | (cp & 0x3f) as u8);
    }
}

fn framed(major: u8, payload: &[u8]) -> CborValue {
    let mut out = Vec::with_capacity(9 + payload.len());
    write_header(&mut out, major, payload.len() as u64);
    out.extend_from_slice(payload);
    CborValue::from_vec(out)
}

fn utf8(s: &str) -> Vec<u8> {
    let mut utf8 = Vec::with_capacity(s.len());
    for c in s.chars() {
        push_code_point(&mut utf8, c as u32);
    }
    utf8
}

/// Writes a complete text string item into `out`.
pub(crate) fn write_str(out: &mut Vec<u8>, s: &str) {
    let utf8 = utf8(s);
    write_header(out, MAJOR_STR, utf8.len() as u64);
    out.extend_from_slice(&utf8);
}

/// Encodes a text string. The header counts UTF-8 bytes, not characters.
pub fn string(s: &str) -> CborValue {
    framed(MAJOR_STR, &utf8(s))
}

/// Encodes a text string given as UTF-16 code units.
///
/// A high surrogate followed by a low surrogate is combined into one
/// supplementary code point (4 UTF-8 bytes). Unpaired surrogates become
/// U+FFFD.
pub fn string_utf16(units: &[u16]) -> CborValue {
    let mut utf8 = Vec::with_capacity(units.len() * 3);
    let mut i = 0;
    while i < units.len() {
        let unit = units[i] as u32;
        i += 1;
        let cp = match unit {
            0xd800..=0xdbff => match units.get(i).map(|&low| low as u32) {
                Some(low @ 0xdc00..=0xdfff) => {
                    i += 1;
                    0x1_0000 + (((unit & 0x3ff) << 10) | (low & 0x3ff))
                }
                _ => REPLACEMENT_CHARACTER,
            },
            0xdc00..=0xdfff => REPLACEMENT_CHARACTER,
            _ => unit,
        };
        push_code_point(&mut utf8, cp);
    }
    framed(MAJOR_STR, &utf8)
}

/// Encodes a byte string, copying `bytes`.
pub fn bytes(bytes: &[u8]) -> CborValue {
    framed(MAJOR_BIN, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_rolled_utf8_matches_std() {
        for s in ["", "A", "é", "€", "日本語", "😱", "a\u{7ff}\u{800}\u{d7ff}\u{e000}\u{ffff}\u{10000}"] {
            assert_eq!(utf8(s), s.as_bytes(), "utf8 of {s:?}");
        }
    }

    #[test]
    fn header_counts_bytes() {
        // Six 3-byte code points: 18 bytes, still a short header.
        let v = string("€€€€€€");
        assert_eq!(v.as_bytes()[0], 0x72);
        assert_eq!(v.len(), 19);
    }

    #[test]
    fn utf16_pairs_and_lone_surrogates() {
        let pair: Vec<u16> = "😱".encode_utf16().collect();
        assert_eq!(string_utf16(&pair), string("😱"));
        assert_eq!(string_utf16(&[0x41, 0xd83d]).to_string(), "6441efbfbd");
        assert_eq!(string_utf16(&[0xde31, 0x41]).to_string(), "64efbfbd41");
    }

    #[test]
    fn byte_string_header() {
        assert_eq!(bytes(&[]).to_string(), "40");
        assert_eq!(bytes(&[1, 2, 3]).to_string(), "43010203");
    }
}
