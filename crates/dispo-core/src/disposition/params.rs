//! Scanner for `filename` parameters in a Content-Disposition value.
//!
//! Matches the tolerant grammar real servers need: a parameter starts at the
//! beginning of the header or right after a `;`, the attribute name is
//! case-insensitive, and the value is either a token or a quoted-string whose
//! closing quote may be missing.

/// One `filename*N` / `filename*N*` continuation parameter.
#[derive(Debug)]
pub(super) struct ContinuationPart {
    /// Continuation index N.
    pub index: u32,
    /// True for `filename*N*=`, i.e. the part is percent-encoded.
    pub extended: bool,
    /// Raw value: a token, or a quoted-string including its quotes.
    pub raw: String,
}

const ATTRIBUTE: &str = "filename";

/// First `filename*=` (RFC 5987 ext-value) parameter value, if any.
pub(super) fn extended_value(header: &str) -> Option<String> {
    scan_named(header, |bytes, pos| {
        (bytes.get(pos) == Some(&b'*')).then_some(pos + 1)
    })
}

/// First plain `filename=` parameter value, if any.
pub(super) fn plain_value(header: &str) -> Option<String> {
    scan_named(header, |_, pos| Some(pos))
}

/// All continuation parameters (`filename*N=` / `filename*N*=`) in order of
/// appearance. N must carry no leading zero unless it is exactly `0`.
pub(super) fn continuation_parts(header: &str) -> Vec<ContinuationPart> {
    let bytes = header.as_bytes();
    let mut parts = Vec::new();
    // Resume scanning past each matched value, so `;` inside a quoted value
    // cannot restart a match in the middle of it.
    let mut resume = 0;
    for start in param_starts(bytes) {
        if start < resume {
            continue;
        }
        let Some(pos) = match_attribute(bytes, start) else {
            continue;
        };
        if bytes.get(pos) != Some(&b'*') {
            continue;
        }
        let digits_start = pos + 1;
        let mut pos = digits_start;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let digits = &header[digits_start..pos];
        if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
            continue;
        }
        let Ok(index) = digits.parse::<u32>() else {
            // An index this large can never join a contiguous sequence.
            continue;
        };
        let extended = bytes.get(pos) == Some(&b'*');
        if extended {
            pos += 1;
        }
        let Some(pos) = match_equals(bytes, pos) else {
            continue;
        };
        let Some((value, end)) = scan_value(header, pos) else {
            continue;
        };
        parts.push(ContinuationPart {
            index,
            extended,
            raw: value.to_string(),
        });
        resume = end;
    }
    parts
}

/// First parameter whose name is `filename` plus whatever `suffix` matches,
/// followed by `=` and a token or quoted-string value.
fn scan_named(header: &str, suffix: impl Fn(&[u8], usize) -> Option<usize>) -> Option<String> {
    let bytes = header.as_bytes();
    for start in param_starts(bytes) {
        let Some(pos) = match_attribute(bytes, start) else {
            continue;
        };
        let Some(pos) = suffix(bytes, pos) else {
            continue;
        };
        let Some(pos) = match_equals(bytes, pos) else {
            continue;
        };
        if let Some((value, _)) = scan_value(header, pos) {
            return Some(value.to_string());
        }
    }
    None
}

/// Positions where a parameter may start: offset 0 and right after each `;`.
fn param_starts(bytes: &[u8]) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        bytes
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| (b == b';').then_some(i + 1)),
    )
}

/// Matches optional whitespace plus the attribute name (ASCII
/// case-insensitive) at `start`; returns the offset just past the name.
fn match_attribute(bytes: &[u8], start: usize) -> Option<usize> {
    let pos = skip_whitespace(bytes, start);
    let end = pos + ATTRIBUTE.len();
    if end <= bytes.len() && bytes[pos..end].eq_ignore_ascii_case(ATTRIBUTE.as_bytes()) {
        Some(end)
    } else {
        None
    }
}

/// Matches `\s*=\s*`; returns the offset where the value starts.
fn match_equals(bytes: &[u8], pos: usize) -> Option<usize> {
    let pos = skip_whitespace(bytes, pos);
    if bytes.get(pos) == Some(&b'=') {
        Some(skip_whitespace(bytes, pos + 1))
    } else {
        None
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Scans a token or quoted-string at `pos`. Returns the raw value (quotes
/// included for quoted-strings) and the offset just past it.
///
/// A quoted-string ends at the first unescaped `"`; a missing closing quote
/// runs to the end of the header. A token must not start with `"`, `;`, or
/// whitespace and ends before the next `;` or whitespace.
fn scan_value(header: &str, pos: usize) -> Option<(&str, usize)> {
    let bytes = header.as_bytes();
    let first = *bytes.get(pos)?;
    if first == b'"' {
        let mut i = pos + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    i += 1;
                    break;
                }
                b'\\' => {
                    i += 1;
                    if bytes.get(i) == Some(&b'"') {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }
        Some((&header[pos..i], i))
    } else {
        if first == b';' || first.is_ascii_whitespace() {
            return None;
        }
        let mut i = pos + 1;
        while i < bytes.len() && bytes[i] != b';' && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        Some((&header[pos..i], i))
    }
}
