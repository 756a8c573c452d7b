//! RFC 2047 encoded-word decoding (`=?charset?Q|B?text?=`).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use super::charset::{text_decode, DecodeState};

/// Decodes every encoded word in `value`; anything else passes through.
///
/// The fast-reject looks at the whole value: unless it starts with `=?` and
/// is free of control (0x00..=0x19) and high-bit (0x80..=0xFF) chars, quoted
/// strings that merely contain `=?...?=` substrings would be misread, so the
/// value is returned unchanged.
pub(super) fn decode(value: &str, state: &mut DecodeState) -> String {
    if !value.starts_with("=?")
        || value
            .chars()
            .any(|c| matches!(c as u32, 0x00..=0x19 | 0x80..=0xFF))
    {
        return value.to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;
    while i < chars.len() {
        match match_encoded_word(&chars, i) {
            Some(word) => {
                out.push_str(&decode_word(&word, state));
                i = word.end;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

struct EncodedWord {
    charset: String,
    encoding: char,
    payload: String,
    /// Offset just past the closing `?=`.
    end: usize,
}

/// Matches `=?charset?Q|B?payload?=` starting at `start`.
///
/// The charset is `[A-Za-z0-9_-]*`; the payload may contain `?` except
/// immediately before `=`, which terminates the word.
fn match_encoded_word(chars: &[char], start: usize) -> Option<EncodedWord> {
    let mut i = start;
    if chars.get(i) != Some(&'=') || chars.get(i + 1) != Some(&'?') {
        return None;
    }
    i += 2;
    let mut charset = String::new();
    while let Some(&c) = chars.get(i) {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            charset.push(c);
            i += 1;
        } else {
            break;
        }
    }
    if chars.get(i) != Some(&'?') {
        return None;
    }
    i += 1;
    let encoding = *chars.get(i)?;
    if !matches!(encoding, 'Q' | 'q' | 'B' | 'b') {
        return None;
    }
    i += 1;
    if chars.get(i) != Some(&'?') {
        return None;
    }
    i += 1;
    let mut payload = String::new();
    loop {
        let c = *chars.get(i)?;
        if c == '?' && chars.get(i + 1) == Some(&'=') {
            return Some(EncodedWord {
                charset,
                encoding,
                payload,
                end: i + 2,
            });
        }
        payload.push(c);
        i += 1;
    }
}

fn decode_word(word: &EncodedWord, state: &mut DecodeState) -> String {
    let text = match word.encoding {
        'Q' | 'q' => q_decode(&word.payload),
        // B: best-effort; bad base64 keeps the payload as-is.
        _ => match BASE64.decode(word.payload.as_bytes()) {
            Ok(bytes) => bytes.into_iter().map(char::from).collect(),
            Err(_) => word.payload.clone(),
        },
    };
    text_decode(&word.charset, &text, state)
}

/// Q-encoding: `_` is space, `=XX` is the byte 0xXX, bad escapes stay literal.
fn q_decode(payload: &str) -> String {
    let chars: Vec<char> = payload.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '_' => {
                out.push(' ');
                i += 1;
            }
            '=' => {
                if let (Some(hi), Some(lo)) = (
                    chars.get(i + 1).and_then(|c| c.to_digit(16)),
                    chars.get(i + 2).and_then(|c| c.to_digit(16)),
                ) {
                    out.push(char::from((hi * 16 + lo) as u8));
                    i += 3;
                } else {
                    out.push('=');
                    i += 1;
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}
