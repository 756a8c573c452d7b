//! RFC 2231 continuation reassembly (`filename*0=`, `filename*1=`, ...).

use std::collections::HashMap;

use super::charset::{decode_ext_value, DecodeState};
use super::params::ContinuationPart;
use super::percent;
use super::unquote;

/// Reassembles continuation parts into a single value.
///
/// Indices must be consecutive from zero; the sequence truncates at the first
/// hole. A duplicate index keeps its first occurrence, except a duplicate
/// part 0, which makes the whole sequence untrustworthy. Returns `None` when
/// the continuation is unusable (no part 0, duplicated part 0, or an empty
/// result) so the caller can fall through to the plain `filename` form.
pub(super) fn reassemble(parts: &[ContinuationPart], state: &mut DecodeState) -> Option<String> {
    let mut by_index: HashMap<u32, &ContinuationPart> = HashMap::new();
    for part in parts {
        if by_index.contains_key(&part.index) {
            if part.index == 0 {
                return None;
            }
            continue;
        }
        by_index.insert(part.index, part);
    }

    let mut assembled = String::new();
    let mut index = 0u32;
    while let Some(part) = by_index.get(&index) {
        let mut text = unquote::rfc2616_unquote(&part.raw);
        if part.extended {
            text = percent::unescape(&text);
            // Only part 0 may carry an RFC 5987 charset'language' prefix.
            if index == 0 {
                text = decode_ext_value(&text, state);
            }
        }
        assembled.push_str(&text);
        index += 1;
    }

    if assembled.is_empty() {
        None
    } else {
        Some(assembled)
    }
}
