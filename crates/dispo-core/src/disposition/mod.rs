//! Filename extraction from HTTP `Content-Disposition` header values.
//!
//! Implements the overlapping RFC 6266 / 5987 / 2231 / 2047 / 2616 rules with
//! the leniencies real servers require. Three parameter forms are tried in
//! priority order:
//!
//! 1. `filename*=charset'language'percent-encoded` (RFC 5987 ext-value)
//! 2. `filename*0[*]=`, `filename*1[*]=`, ... continuations (RFC 2231)
//! 3. `filename=token-or-quoted-string` (RFC 2616)
//!
//! Decoding never fails outward: every malformed input degrades to a
//! fallback value or to no filename at all.

mod charset;
mod continuation;
mod params;
mod percent;
mod rfc2047;
mod unquote;

use charset::DecodeState;

/// Extension accepted by [`extract_filename_from_header`].
const PDF_EXTENSION: &str = ".pdf";

/// Extracts a suggested save name for a PDF download.
///
/// Returns the decoded filename only when it ends in `.pdf`
/// (case-insensitive); anything else, including a missing or unparseable
/// header, is `None`.
pub fn extract_filename_from_header(content_disposition: Option<&str>) -> Option<String> {
    let filename = content_disposition.and_then(filename_from_content_disposition)?;
    if filename.to_ascii_lowercase().ends_with(PDF_EXTENSION) {
        Some(filename)
    } else {
        None
    }
}

/// Runs the full decoding pipeline without the extension filter.
///
/// `None` means no `filename` parameter of any form was found. An empty
/// string can still come back (e.g. `filename=""`); callers filtering on an
/// extension reject it naturally.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut state = DecodeState::new();

    if let Some(raw) = params::extended_value(header) {
        tracing::trace!("matched filename* ext-value parameter");
        let unescaped = percent::unescape(&raw);
        let decoded = charset::decode_ext_value(&unescaped, &mut state);
        let decoded = rfc2047::decode(&decoded, &mut state);
        // No-op when the ext-value carried a working charset.
        return Some(charset::fixup_encoding(decoded, &mut state));
    }

    let parts = params::continuation_parts(header);
    if let Some(assembled) = continuation::reassemble(&parts, &mut state) {
        tracing::trace!(parts = parts.len(), "matched filename*N continuation parameters");
        // Charset, if any, was already applied at part 0.
        return Some(rfc2047::decode(&assembled, &mut state));
    }

    if let Some(raw) = params::plain_value(header) {
        tracing::trace!("matched plain filename parameter");
        let unquoted = unquote::rfc2616_unquote(&raw);
        let decoded = rfc2047::decode(&unquoted, &mut state);
        return Some(charset::fixup_encoding(decoded, &mut state));
    }

    None
}

/// External-boundary filter: does `filename` end in one of the configured
/// extensions (case-insensitive)?
pub fn has_accepted_extension(filename: &str, extensions: &[String]) -> bool {
    let lower = filename.to_ascii_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_ascii_lowercase()))
}
