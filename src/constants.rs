// src/constants.rs

/// The byte-order mark. Valid only as the very first character of a file.
pub const BOM: char = '\u{FEFF}';

/// The Unicode replacement character substituted for undecodable byte
/// sequences by a lossy decode.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Minimum pattern length (in characters) for a literal rule with no scope
/// predicate. Shorter patterns could legitimately appear in correct text and
/// must carry a scope, or be explicitly marked unsafe-global.
pub const MIN_UNSCOPED_PATTERN_CHARS: usize = 3;

/// Default blank-line ratio above which a file is considered line-doubled.
pub const DEFAULT_BLANK_LINE_THRESHOLD: f64 = 0.4;

/// Share of non-printable characters (after a lossy decode) above which a
/// file is treated as binary rather than repairable text.
pub const NON_PRINTABLE_RATIO_LIMIT: f64 = 0.3;

/// Separator used before the summary section.
pub const SUMMARY_SEPARATOR: &str = "---";
