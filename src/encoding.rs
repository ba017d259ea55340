//! Character encoding detection and transcoding.
//!
//! Renderers usually hand over UTF-8, but saved pages and raw captures carry
//! whatever charset the publisher declared. The declaration is sniffed from
//! the first 1024 bytes and the page is decoded to UTF-8 before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How far into the document charset declarations are searched.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` and `<meta http-equiv="Content-Type" content="...; charset=...">`,
/// in that priority order.
#[allow(clippy::expect_used)]
static CHARSET_DECLARATIONS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex"),
        Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
            .expect("valid regex"),
    ]
});

/// Declared charset label, if any.
fn sniff_charset(head: &str) -> Option<&str> {
    CHARSET_DECLARATIONS
        .iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}

/// Detect character encoding from HTML bytes, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    sniff_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Undecodable sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use rs_news_extract::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\x93Quoted\x94</body></html>";
/// assert!(transcode_to_utf8(html).contains("\u{201C}Quoted\u{201D}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_charset_wins_over_default() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // WHATWG maps latin-1 labels onto windows-1252.
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_declaration_is_recognized() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=shift_jis">"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="not-a-charset"><p>x</p>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn declaration_past_sniff_window_is_ignored() {
        let mut html = vec![b' '; SNIFF_LEN + 10];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let html = b"<p>Bad \xFF\xFE bytes</p>";
        let out = transcode_to_utf8(html);
        assert!(out.contains("Bad"));
        assert!(out.contains('\u{FFFD}'));
    }

    #[test]
    fn sniff_handles_unquoted_and_uppercase() {
        assert_eq!(sniff_charset("<META CHARSET=UTF-8>"), Some("UTF-8"));
        assert_eq!(sniff_charset("<p>no declaration</p>"), None);
    }
}
