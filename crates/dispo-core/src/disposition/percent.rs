//! Percent unescaping for RFC 2231/5987 extended values.

/// Replaces each `%XX` hex pair with the byte-char it encodes.
///
/// The output is still "byte" text (escaped bytes become chars in
/// U+0000..=U+00FF); charset-directed decoding happens afterwards. A `%` not
/// followed by two hex digits stays literal.
pub(super) fn unescape(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '%' {
            if let (Some(hi), Some(lo)) = (
                chars.get(i + 1).and_then(|c| c.to_digit(16)),
                chars.get(i + 2).and_then(|c| c.to_digit(16)),
            ) {
                out.push(char::from((hi * 16 + lo) as u8));
                i += 3;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
