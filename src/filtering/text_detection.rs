// src/filtering/text_detection.rs

use crate::constants::NON_PRINTABLE_RATIO_LIMIT;
use content_inspector::ContentType;
use std::borrow::Cow;

/// Checks whether a byte buffer can meaningfully be treated as repairable
/// text.
///
/// Invalid UTF-8 is *not* disqualifying here: mis-encoded byte sequences are
/// exactly what the repair pipeline exists for. A buffer is rejected only
/// when `content_inspector` calls it outright binary (null bytes, UTF-16/32
/// shapes this tool does not rewrite), or when the lossy-decoded text is
/// dominated by non-printable characters.
///
/// # Examples
/// ```
/// use demojibake::filtering::is_repairable_text;
///
/// assert!(is_repairable_text(b"plain text"));
/// // Invalid UTF-8 stays repairable; that is the whole point.
/// assert!(is_repairable_text(&[b'a', 0xC3, 0xA2, 0x80, b'b']));
/// assert!(!is_repairable_text(b"binary\0data"));
/// ```
pub fn is_repairable_text(bytes: &[u8]) -> bool {
    match content_inspector::inspect(bytes) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => {}
        _ => return false,
    }

    let text = String::from_utf8_lossy(bytes);
    below_non_printable_limit(&text)
}

/// True when the share of non-printable characters stays under the limit.
/// Tabs, newlines and carriage returns are ordinary text.
fn below_non_printable_limit(text: &Cow<'_, str>) -> bool {
    let mut total = 0usize;
    let mut non_printable = 0usize;
    for ch in text.chars() {
        total += 1;
        let is_control = (ch < ' ' && !matches!(ch, '\n' | '\r' | '\t')) || ch == '\x7F';
        if is_control {
            non_printable += 1;
        }
    }
    if total == 0 {
        return true;
    }
    (non_printable as f64 / total as f64) <= NON_PRINTABLE_RATIO_LIMIT
}
