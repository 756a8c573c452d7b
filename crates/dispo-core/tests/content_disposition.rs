//! End-to-end tests for Content-Disposition filename extraction, covering
//! the RFC-compliant forms and the malformed variants real servers emit.

use dispo_core::disposition::{
    extract_filename_from_header, filename_from_content_disposition, has_accepted_extension,
};

fn decode(header: &str) -> Option<String> {
    filename_from_content_disposition(header)
}

#[test]
fn no_filename_parameter_yields_absent() {
    assert_eq!(decode("inline"), None);
    assert_eq!(decode("attachment"), None);
    assert_eq!(decode("attachment; creation-date=\"Wed, 12 Feb 1997\""), None);
    assert_eq!(extract_filename_from_header(None), None);
    assert_eq!(extract_filename_from_header(Some("")), None);
}

#[test]
fn plain_quoted_filename() {
    assert_eq!(
        decode("attachment; filename=\"a.pdf\"").as_deref(),
        Some("a.pdf")
    );
}

#[test]
fn plain_token_filename() {
    assert_eq!(
        decode("attachment; filename=report.pdf").as_deref(),
        Some("report.pdf")
    );
}

#[test]
fn attribute_names_are_case_insensitive() {
    assert_eq!(
        decode("attachment; FILENAME=\"a.pdf\"").as_deref(),
        Some("a.pdf")
    );
    assert_eq!(
        decode("attachment; Filename*=UTF-8''a%20b.pdf").as_deref(),
        Some("a b.pdf")
    );
}

#[test]
fn extended_form_wins_over_plain() {
    assert_eq!(
        decode("attachment; filename=\"fallback.pdf\"; filename*=UTF-8''real%20name.pdf")
            .as_deref(),
        Some("real name.pdf")
    );
    assert_eq!(
        decode("attachment; filename*=UTF-8''real%20name.pdf; filename=\"fallback.pdf\"")
            .as_deref(),
        Some("real name.pdf")
    );
}

#[test]
fn rfc5987_utf8_example() {
    assert_eq!(
        decode("attachment; filename*=UTF-8''%e2%82%ac%20rates.pdf").as_deref(),
        Some("€ rates.pdf")
    );
}

#[test]
fn rfc5987_latin1_with_language_tag() {
    assert_eq!(
        decode("attachment; filename*=iso-8859-1'en'%A3%20rates.pdf").as_deref(),
        Some("£ rates.pdf")
    );
}

#[test]
fn ext_value_without_charset_prefix_is_accepted() {
    // Some servers send filename*= with a bare value; accept it leniently.
    assert_eq!(
        decode("attachment; filename*=a%20b.pdf").as_deref(),
        Some("a b.pdf")
    );
}

#[test]
fn unknown_charset_leaves_bytes_unchanged() {
    assert_eq!(
        decode("attachment; filename*=bogus-charset''abc.pdf").as_deref(),
        Some("abc.pdf")
    );
}

#[test]
fn continuation_reassembly() {
    assert_eq!(
        decode("attachment; filename*0=\"big\"; filename*1=\"file.pdf\"").as_deref(),
        Some("bigfile.pdf")
    );
}

#[test]
fn continuation_out_of_order_parameters() {
    assert_eq!(
        decode("attachment; filename*1=\"file.pdf\"; filename*0=\"big\"").as_deref(),
        Some("bigfile.pdf")
    );
}

#[test]
fn continuation_mixed_extended_and_plain_parts() {
    assert_eq!(
        decode("attachment; filename*0*=UTF-8''%e2%82%ac; filename*1=\" rates.pdf\"").as_deref(),
        Some("€ rates.pdf")
    );
}

#[test]
fn continuation_truncates_at_gap() {
    assert_eq!(
        decode("attachment; filename*0=\"a\"; filename*2=\".pdf\"").as_deref(),
        Some("a")
    );
}

#[test]
fn continuation_duplicate_part_zero_falls_through_to_plain() {
    assert_eq!(
        decode("attachment; filename*0=\"a\"; filename*0=\"b\"; filename=\"plain.pdf\"")
            .as_deref(),
        Some("plain.pdf")
    );
}

#[test]
fn continuation_without_part_zero_falls_through() {
    assert_eq!(decode("attachment; filename*1=\"a.pdf\""), None);
    assert_eq!(
        decode("attachment; filename*1=\"a.pdf\"; filename=\"b.pdf\"").as_deref(),
        Some("b.pdf")
    );
}

#[test]
fn continuation_index_with_leading_zero_is_ignored() {
    assert_eq!(
        decode("attachment; filename*0=\"a.pdf\"; filename*01=\"ignored\"").as_deref(),
        Some("a.pdf")
    );
}

#[test]
fn rfc2047_q_encoding_in_plain_filename() {
    assert_eq!(
        decode("attachment; filename=\"=?UTF-8?Q?r=C3=A9sum=C3=A9?=.pdf\"").as_deref(),
        Some("résumé.pdf")
    );
}

#[test]
fn rfc2047_b_encoding_in_plain_filename() {
    assert_eq!(
        decode("attachment; filename=\"=?utf-8?B?4oKsIHJhdGVzLnBkZg==?=\"").as_deref(),
        Some("€ rates.pdf")
    );
}

#[test]
fn rfc2047_only_applies_when_value_starts_with_marker() {
    assert_eq!(
        decode("attachment; filename=\"x =?utf-8?Q?y?=.pdf\"").as_deref(),
        Some("x =?utf-8?Q?y?=.pdf")
    );
}

#[test]
fn high_bit_bytes_without_charset_get_utf8_fixup() {
    // Raw UTF-8 bytes in a quoted filename, no declared charset.
    assert_eq!(
        decode("attachment; filename=\"caf\u{c3}\u{a9}.pdf\"").as_deref(),
        Some("café.pdf")
    );
}

#[test]
fn high_bit_bytes_fall_back_to_latin1() {
    // 0xE9 alone is invalid UTF-8, so the fixup lands on ISO-8859-1.
    assert_eq!(
        decode("attachment; filename=\"caf\u{e9}.pdf\"").as_deref(),
        Some("café.pdf")
    );
}

#[test]
fn unterminated_quoted_string_is_tolerated() {
    assert_eq!(decode("attachment; filename=\"a.pdf").as_deref(), Some("a.pdf"));
}

#[test]
fn escaped_quotes_in_quoted_string() {
    assert_eq!(
        decode("attachment; filename=\"\\\"quoting\\\" tested.pdf\"").as_deref(),
        Some("\"quoting\" tested.pdf")
    );
}

#[test]
fn semicolon_inside_quoted_value() {
    assert_eq!(
        decode("attachment; filename=\"a;b.pdf\"; size=9").as_deref(),
        Some("a;b.pdf")
    );
}

#[test]
fn pdf_filter_accepts_only_pdf() {
    assert_eq!(
        extract_filename_from_header(Some("attachment; filename=\"a.pdf\"")).as_deref(),
        Some("a.pdf")
    );
    assert_eq!(
        extract_filename_from_header(Some("attachment; filename=\"A.PDF\"")).as_deref(),
        Some("A.PDF")
    );
    assert_eq!(
        extract_filename_from_header(Some("attachment; filename=\"notes.txt\"")),
        None
    );
    assert_eq!(
        extract_filename_from_header(Some("attachment; filename=\"\"")),
        None
    );
}

#[test]
fn configured_extension_filter() {
    let exts = vec![".pdf".to_string(), ".epub".to_string()];
    let name = filename_from_content_disposition("attachment; filename=book.epub").unwrap();
    assert!(has_accepted_extension(&name, &exts));
    assert!(!has_accepted_extension(&name, &[".pdf".to_string()]));
}

#[test]
fn decoding_is_idempotent_on_ascii_output() {
    let first = decode("attachment; filename=\"plain name.pdf\"").unwrap();
    let again = decode(&format!("attachment; filename=\"{first}\"")).unwrap();
    assert_eq!(first, again);
}

#[test]
fn reentrant_across_calls() {
    // A successful charset decode in one call must not leak into the next:
    // the second header still gets its own fixup pass.
    assert_eq!(
        decode("attachment; filename*=UTF-8''%e2%82%ac.pdf").as_deref(),
        Some("€.pdf")
    );
    assert_eq!(
        decode("attachment; filename=\"caf\u{e9}.pdf\"").as_deref(),
        Some("café.pdf")
    );
}
