//! Turns raw file bytes into working text plus the strategy that produced it.
//!
//! The fallback chain is ordered: strict UTF-8 first, then lossy UTF-8
//! (which always succeeds, substituting U+FFFD for invalid sequences), with
//! Latin-1 reinterpretation available as an explicitly-selected alternative
//! to the lossy path. Decoding is therefore a *total* function over bytes:
//! there is no reachable decode error, only a degraded result, and the
//! degradation is reported through the strategy tag and the detector's
//! replacement-character findings. Binary content never reaches this module;
//! the pipeline diverts it beforehand.

use crate::core_types::EncodingStrategy;

/// Decoded text together with the strategy that produced it.
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// The working text of the file.
    pub text: String,
    /// Which decode attempt succeeded.
    pub strategy: EncodingStrategy,
}

/// Decodes raw bytes through the fallback chain.
///
/// Decode is all-or-nothing per strategy attempt: either the strict pass
/// accepts every byte, or the whole buffer is re-decoded under the fallback.
/// With `latin1_fallback` set, a strict failure reinterprets the bytes as
/// Latin-1 (useful for re-detecting mojibake in single-byte-encoded files)
/// instead of taking the lossy path. Latin-1 is never chosen automatically:
/// blind reinterpretation can itself introduce corruption.
///
/// # Examples
///
/// ```
/// use demojibake::decode::decode_bytes;
/// use demojibake::core_types::EncodingStrategy;
///
/// let clean = decode_bytes(b"plain text", false);
/// assert_eq!(clean.strategy, EncodingStrategy::Utf8Strict);
/// assert_eq!(clean.text, "plain text");
///
/// // 0x80 is not a valid UTF-8 start byte.
/// let degraded = decode_bytes(&[b'a', 0x80, b'b'], false);
/// assert_eq!(degraded.strategy, EncodingStrategy::Utf8Lossy);
/// assert_eq!(degraded.text, "a\u{FFFD}b");
///
/// let latin1 = decode_bytes(&[b'a', 0xA9], true);
/// assert_eq!(latin1.strategy, EncodingStrategy::Latin1Fallback);
/// assert_eq!(latin1.text, "a\u{A9}");
/// ```
pub fn decode_bytes(bytes: &[u8], latin1_fallback: bool) -> DecodedText {
    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text: text.to_string(),
            strategy: EncodingStrategy::Utf8Strict,
        },
        Err(_) if latin1_fallback => DecodedText {
            text: decode_latin1(bytes),
            strategy: EncodingStrategy::Latin1Fallback,
        },
        Err(_) => DecodedText {
            text: String::from_utf8_lossy(bytes).into_owned(),
            strategy: EncodingStrategy::Utf8Lossy,
        },
    }
}

/// Reinterprets bytes as Latin-1 (each byte maps to the code point of the
/// same value). Total by construction.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
