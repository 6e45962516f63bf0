use crate::domain::FetchedPage;
use crate::error::PageError;
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE, UTF_8};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use tracing::debug;

/// How far into the body a `<meta charset>` declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// Non-ASCII characters required per broken sequence for a body that is not
/// clean UTF-8 to still be read as UTF-8.
const UTF8_CHARS_PER_ERROR: usize = 4;

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?\s*([a-z0-9_\-:.]+)"#).unwrap()
});

/// Guesses the charset of a page body.
///
/// Order: byte order mark, `<meta>` declaration near the top of the document,
/// the `Content-Type` header, then the content itself: UTF-8 when it mostly
/// decodes as UTF-8, otherwise whatever `chardetng` finds most likely.
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    let head = &body[..body.len().min(SNIFF_LEN)];
    let declared = META_CHARSET
        .captures(head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_bytes()));
    if let Some(encoding) = declared {
        // A document can't declare itself UTF-16 from inside an ASCII-compatible meta tag.
        if encoding == UTF_16LE || encoding == UTF_16BE {
            return UTF_8;
        }
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(charset_from_content_type) {
        return encoding;
    }

    if mostly_utf8(body) {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(None, false)
}

fn mostly_utf8(body: &[u8]) -> bool {
    let mut non_ascii = 0;
    let mut broken = 0;
    for chunk in body.utf8_chunks() {
        non_ascii += chunk.valid().chars().filter(|c| !c.is_ascii()).count();
        if !chunk.invalid().is_empty() {
            broken += 1;
        }
    }
    broken == 0 || non_ascii >= broken * UTF8_CHARS_PER_ERROR
}

fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, value)| Encoding::for_label(value.trim().trim_matches('"').as_bytes()))
}

/// Decodes a fetched page into text.
///
/// Bytes that are invalid in the detected charset become U+FFFD, so the rest
/// of the page survives. Only a charset with no decoder at all (one that maps
/// to the WHATWG "replacement" encoding) fails.
pub fn decode_page(page: &FetchedPage) -> Result<String, PageError> {
    let encoding = detect_encoding(&page.body, page.content_type.as_deref());
    if encoding == REPLACEMENT {
        return Err(PageError::Parse(
            "page declares a charset that cannot be decoded".to_string(),
        ));
    }

    let (text, used, had_errors) = encoding.decode(&page.body);
    if had_errors {
        debug!(
            "{} contains bytes that are not valid {}, replaced",
            page.url,
            used.name()
        );
    }

    debug!("Decoded {} as {}", page.url, used.name());
    Ok(text.into_owned())
}
