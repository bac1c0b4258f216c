use crate::fetcher::errors::FetchError;
use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;

// Only the first 4KB are scanned for <meta> charset declarations.
const META_SCAN_BYTES: usize = 4096;

static HEADER_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

/// Determine the body encoding: Content-Type header first, then a `<meta>`
/// declaration near the top of the document, then chardetng's heuristic.
pub fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = charset_from_label(content_type, &HEADER_CHARSET_REGEX) {
        return encoding;
    }

    let scan = &body_bytes[..body_bytes.len().min(META_SCAN_BYTES)];
    let scan_str = String::from_utf8_lossy(scan);
    if let Some(encoding) = charset_from_label(&scan_str, &META_CHARSET_REGEX) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(scan, false);
    detector.guess(None, true)
}

fn charset_from_label(haystack: &str, pattern: &Regex) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

pub fn decode_to_utf8(body_bytes: &[u8], encoding: &'static Encoding) -> Result<String, FetchError> {
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            encoding.name()
        )));
    }

    Ok(decoded.into_owned())
}
