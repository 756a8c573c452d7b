//! Charset-directed text decoding and the high-bit encoding fixup.

use encoding_rs::Encoding;

/// Per-invocation decode state.
///
/// `needs_encoding_fixup` starts true and is cleared the moment any
/// charset-directed decode succeeds; [`fixup_encoding`] only runs while it is
/// still set. Kept as an explicit value threaded through the pipeline, never
/// a global, so concurrent extractions cannot observe each other.
#[derive(Debug)]
pub(super) struct DecodeState {
    pub needs_encoding_fixup: bool,
}

impl DecodeState {
    pub fn new() -> Self {
        Self {
            needs_encoding_fixup: true,
        }
    }
}

/// Decodes `value` (one char per byte) using the named charset.
///
/// An empty charset is a no-op, and so is a value that already contains chars
/// above U+00FF (it is decoded text, not bytes). On decode failure the
/// original value comes back unchanged with the fixup flag still set, so a
/// later pass may still improve it.
pub(super) fn text_decode(charset: &str, value: &str, state: &mut DecodeState) -> String {
    if charset.is_empty() {
        return value.to_string();
    }
    if value.chars().any(|c| c as u32 > 0xFF) {
        return value.to_string();
    }
    let bytes: Vec<u8> = value.chars().map(|c| c as u8).collect();

    if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
        if let Some(decoded) = encoding.decode_without_bom_handling_and_without_replacement(&bytes)
        {
            state.needs_encoding_fixup = false;
            return decoded.into_owned();
        }
    }

    // Servers mislabel UTF-8 often enough to warrant a direct retry.
    if is_utf8_label(charset) {
        if let Ok(decoded) = String::from_utf8(bytes) {
            state.needs_encoding_fixup = false;
            return decoded;
        }
    }

    value.to_string()
}

/// Decodes an RFC 5987 `charset'language'value` ext-value.
///
/// Some servers send `filename*=` without the `charset'language'` prefix;
/// a value with no `'` is accepted as-is. The language tag is ignored.
pub(super) fn decode_ext_value(value: &str, state: &mut DecodeState) -> String {
    let Some(charset_end) = value.find('\'') else {
        return value.to_string();
    };
    let charset = &value[..charset_end];
    let rest = &value[charset_end + 1..];
    let text = match rest.find('\'') {
        Some(language_end) => &rest[language_end + 1..],
        None => rest,
    };
    text_decode(charset, text, state)
}

/// Heuristic second pass for values that still look like raw high-bit bytes.
///
/// Tries UTF-8 first; ISO-8859-1 maps every byte, so it always succeeds as
/// the last resort. Values without chars in 0x80..=0xFF pass through
/// untouched.
pub(super) fn fixup_encoding(value: String, state: &mut DecodeState) -> String {
    if !state.needs_encoding_fixup {
        return value;
    }
    if !value.chars().any(|c| matches!(c as u32, 0x80..=0xFF)) {
        return value;
    }
    let decoded = text_decode("utf-8", &value, state);
    if state.needs_encoding_fixup {
        return text_decode("iso-8859-1", &decoded, state);
    }
    decoded
}

fn is_utf8_label(charset: &str) -> bool {
    charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("utf8")
}
