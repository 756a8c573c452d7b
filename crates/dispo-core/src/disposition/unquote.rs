//! Lenient RFC 2616 quoted-string unquoting.

/// Strips quoted-string syntax from a raw parameter value.
///
/// Values not starting with `"` pass through unchanged. Otherwise the value
/// ends at the first unescaped `"`, `\X` pairs unescape to `X`, and a missing
/// closing quote is treated as running to the end of the value (real servers
/// emit unterminated quotes).
pub(super) fn rfc2616_unquote(value: &str) -> String {
    let Some(inner) = value.strip_prefix('"') else {
        return value.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            },
            _ => out.push(c),
        }
    }
    out
}
